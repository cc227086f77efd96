use dioxus::core::spawn_forever;
use dioxus::prelude::*;

use crate::api::HttpApi;
use crate::components::chat::model::{deliver, ChatLog};
use crate::components::styles::APP_STYLES;
use crate::components::{ChatView, DashboardView};
use crate::shell::state::{ShellState, ViewMode};

#[component]
pub fn AppShell() -> Element {
    let api = use_hook(HttpApi::from_location);
    let mut shell = use_signal(ShellState::default);
    let refresh = use_memo(move || shell.read().refresh);
    let mut chat_log = use_signal(ChatLog::default);

    let send_chat = use_callback({
        let api = api.clone();
        move |raw: String| {
            let Some(text) = chat_log.write().begin_send(&raw) else {
                return;
            };
            let api = api.clone();
            // Root-owned so switching tabs mid-send neither cancels the
            // request nor loses the refresh it triggers.
            spawn_forever(async move {
                let saved = deliver(&api, &text, |outcome| {
                    chat_log.write().settle(outcome);
                })
                .await;
                if saved {
                    shell.write().trace_saved();
                }
            });
        }
    });

    let mode = shell.read().mode;
    let show_refresh = shell.read().shows_refresh_control();

    rsx! {
        style { {APP_STYLES} }

        div {
            class: "app-shell",

            header {
                class: "app-header",
                Logo {}
                span { class: "app-brand", "SupportLens" }
                div { class: "app-spacer" }

                nav {
                    class: "app-tabs",
                    for tab in ViewMode::ALL {
                        button {
                            class: if tab == mode { "app-tab active" } else { "app-tab" },
                            onclick: move |_| shell.write().select(tab),
                            {tab.label()}
                        }
                    }
                }

                if show_refresh {
                    button {
                        class: "refresh-button",
                        onclick: move |_| shell.write().request_refresh(),
                        "↻ Refresh"
                    }
                }
            }

            main {
                class: "app-main",
                match mode {
                    ViewMode::Dashboard => rsx! {
                        div {
                            class: "app-main-scroll",
                            DashboardView { api: api.clone(), refresh }
                        }
                    },
                    ViewMode::Chat => rsx! {
                        div {
                            style: "height: 100%;",
                            ChatView { log: chat_log, on_send: send_chat }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn Logo() -> Element {
    rsx! {
        svg {
            width: "20",
            height: "20",
            view_box: "0 0 20 20",
            fill: "none",
            style: "margin-right: 4px;",
            rect { x: "1", y: "1", width: "8", height: "8", rx: "2", fill: "#3b82f6" }
            rect {
                x: "11", y: "1", width: "8", height: "8", rx: "2",
                fill: "#3b82f622", stroke: "#3b82f6", stroke_width: "1",
            }
            rect {
                x: "1", y: "11", width: "8", height: "8", rx: "2",
                fill: "#3b82f622", stroke: "#3b82f6", stroke_width: "1",
            }
            rect { x: "11", y: "11", width: "8", height: "8", rx: "2", fill: "#3b82f6", opacity: "0.5" }
        }
    }
}
