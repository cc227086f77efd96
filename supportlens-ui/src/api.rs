use std::future::Future;

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use shared_types::{AnalyticsSummary, CategoryFilter, ChatReply, ChatRequest, Trace};
use thiserror::Error;

use crate::config::api_base;

/// Failure of any backend call: non-2xx status, transport error or a body
/// that does not decode. Views never show the detail, they only log it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{detail}")]
pub struct RequestError {
    status: Option<u16>,
    detail: String,
}

impl RequestError {
    pub fn http(status: u16, detail: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            detail: detail.into(),
        }
    }

    pub fn transport(detail: impl Into<String>) -> Self {
        Self {
            status: None,
            detail: detail.into(),
        }
    }

    /// HTTP status of the failed response, when one was received.
    pub fn status(&self) -> Option<u16> {
        self.status
    }

    pub fn detail(&self) -> &str {
        &self.detail
    }
}

/// The three calls the UI makes against the support backend.
pub trait SupportApi {
    fn list_traces(
        &self,
        filter: &CategoryFilter,
    ) -> impl Future<Output = Result<Vec<Trace>, RequestError>>;

    fn get_analytics(&self) -> impl Future<Output = Result<AnalyticsSummary, RequestError>>;

    fn send_chat_message(
        &self,
        text: &str,
    ) -> impl Future<Output = Result<ChatReply, RequestError>>;
}

pub const ANALYTICS_PATH: &str = "/analytics/";
pub const CHAT_PATH: &str = "/chat/";
pub const TRACES_PATH: &str = "/traces/";

/// Path for a trace listing. `All` fetches the unfiltered collection.
pub fn traces_path(filter: &CategoryFilter) -> String {
    match filter.category() {
        None => TRACES_PATH.to_string(),
        Some(category) => format!(
            "{}?category={}",
            TRACES_PATH,
            urlencoding::encode(category.label())
        ),
    }
}

async fn describe_http_error(response: Response) -> RequestError {
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    if body.trim().is_empty() {
        return RequestError::http(status, format!("HTTP error: {status}"));
    }

    if let Ok(json) = serde_json::from_str::<serde_json::Value>(&body) {
        if let Some(detail) = json.get("detail").and_then(|v| v.as_str()) {
            return RequestError::http(status, format!("HTTP error: {status} ({detail})"));
        }
        if let Some(error) = json.get("error").and_then(|v| v.as_str()) {
            return RequestError::http(status, format!("HTTP error: {status} ({error})"));
        }
    }

    RequestError::http(status, format!("HTTP error: {status} ({body})"))
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, RequestError> {
    if !response.ok() {
        return Err(describe_http_error(response).await);
    }

    let status = response.status();
    response
        .json()
        .await
        .map_err(|e| RequestError::http(status, format!("Failed to parse JSON: {e}")))
}

/// [`SupportApi`] over `fetch`. Every call is fire-once: no retry, no cache,
/// no timeout beyond the browser's own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpApi {
    base: String,
}

impl HttpApi {
    pub fn new(base: impl Into<String>) -> Self {
        Self { base: base.into() }
    }

    /// Client for the API base resolved from the page location.
    pub fn from_location() -> Self {
        Self::new(api_base())
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base, path)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, RequestError> {
        let response = Request::get(&self.url(path))
            .header("Content-Type", "application/json")
            .send()
            .await
            .map_err(|e| RequestError::transport(format!("Request failed: {e}")))?;

        decode_json(response).await
    }
}

impl SupportApi for HttpApi {
    async fn list_traces(&self, filter: &CategoryFilter) -> Result<Vec<Trace>, RequestError> {
        self.get_json(&traces_path(filter)).await
    }

    async fn get_analytics(&self) -> Result<AnalyticsSummary, RequestError> {
        self.get_json(ANALYTICS_PATH).await
    }

    async fn send_chat_message(&self, text: &str) -> Result<ChatReply, RequestError> {
        let request = ChatRequest {
            user_message: text.to_string(),
        };

        let response = Request::post(&self.url(CHAT_PATH))
            .json(&request)
            .map_err(|e| RequestError::transport(format!("Failed to serialize request: {e}")))?
            .send()
            .await
            .map_err(|e| RequestError::transport(format!("Request failed: {e}")))?;

        decode_json(response).await
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use shared_types::Category;

    #[test]
    fn all_filter_lists_unfiltered_collection() {
        assert_eq!(traces_path(&CategoryFilter::All), "/traces/");
    }

    #[test]
    fn category_filter_is_url_encoded() {
        assert_eq!(
            traces_path(&CategoryFilter::Only(Category::Refund)),
            "/traces/?category=Refund"
        );
        assert_eq!(
            traces_path(&CategoryFilter::Only(Category::AccountAccess)),
            "/traces/?category=Account%20Access"
        );
    }

    #[test]
    fn http_api_joins_base_and_path() {
        let api = HttpApi::new("http://localhost:8000/api");
        assert_eq!(api.url(CHAT_PATH), "http://localhost:8000/api/chat/");
        assert_eq!(api.base(), "http://localhost:8000/api");
    }

    #[test]
    fn request_error_keeps_status() {
        let err = RequestError::http(502, "HTTP error: 502");
        assert_eq!(err.status(), Some(502));
        assert_eq!(err.to_string(), "HTTP error: 502");

        let err = RequestError::transport("Request failed: offline");
        assert_eq!(err.status(), None);
        assert_eq!(err.detail(), "Request failed: offline");
    }
}
