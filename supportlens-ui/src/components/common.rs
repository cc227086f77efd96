use dioxus::prelude::*;
use shared_types::Category;

use crate::theme::badge_style;

#[component]
pub fn CategoryBadge(category: Category) -> Element {
    let style = badge_style(&category);
    rsx! {
        span {
            class: "category-badge",
            style: "{style}",
            "{category}"
        }
    }
}

/// Three blinking dots.
#[component]
pub fn Spinner() -> Element {
    rsx! {
        span {
            class: "spinner",
            for delay in ["0s", "0.2s", "0.4s"] {
                span {
                    key: "{delay}",
                    class: "spinner-dot",
                    style: "animation-delay: {delay};",
                }
            }
        }
    }
}

#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(!optional)] sub: Option<String>,
    accent: String,
) -> Element {
    rsx! {
        div {
            class: "stat-card",
            div { class: "stat-card-accent", style: "background: {accent};" }
            p { class: "stat-card-title", "{title}" }
            p { class: "stat-card-value", "{value}" }
            if let Some(sub) = sub {
                p { class: "stat-card-sub", "{sub}" }
            }
        }
    }
}
