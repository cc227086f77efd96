//! API base URL resolution.

use std::sync::OnceLock;

/// Backend address used when the UI is served from a local dev server.
pub const DEV_API_BASE: &str = "http://localhost:8000/api";

/// Path prefix used when the backend serves the UI from the same origin.
pub const SAME_ORIGIN_API_BASE: &str = "/api";

/// Build-time override, e.g. `SUPPORTLENS_API_BASE=https://support.example.com/api`.
const API_BASE_OVERRIDE: Option<&str> = option_env!("SUPPORTLENS_API_BASE");

/// Pick the API base for a page served from `hostname`.
///
/// An explicit override wins; local hosts talk to the dev backend on port
/// 8000; anything else uses the same origin.
pub fn resolve_api_base(hostname: &str, override_base: Option<&str>) -> String {
    if let Some(base) = override_base.map(str::trim).filter(|b| !b.is_empty()) {
        return base.trim_end_matches('/').to_string();
    }

    if hostname == "localhost" || hostname == "127.0.0.1" {
        DEV_API_BASE.to_string()
    } else {
        SAME_ORIGIN_API_BASE.to_string()
    }
}

fn current_hostname() -> String {
    web_sys::window()
        .and_then(|w| w.location().hostname().ok())
        .unwrap_or_default()
}

static API_BASE_CACHE: OnceLock<String> = OnceLock::new();

/// API base for this page, computed at first use.
pub fn api_base() -> &'static str {
    API_BASE_CACHE
        .get_or_init(|| {
            let base = resolve_api_base(&current_hostname(), API_BASE_OVERRIDE);
            dioxus_logger::tracing::info!("Using API base {}", base);
            base
        })
        .as_str()
}
