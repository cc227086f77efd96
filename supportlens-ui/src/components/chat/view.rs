use dioxus::prelude::*;
use shared_types::Category;

use super::model::{ChatEntry, ChatLog};
use super::styles::CHAT_STYLES;
use crate::components::common::{CategoryBadge, Spinner};
use crate::format::format_latency;
use crate::interop::scroll_to_element_id;

const LOG_END_ID: &str = "chat-log-end";

/// The conversation lives in the shell, which also runs each send, so a
/// reply that lands after this view unmounts is still recorded.
#[component]
pub fn ChatView(log: Signal<ChatLog>, on_send: EventHandler<String>) -> Element {
    let mut input_text = use_signal(String::new);

    // Keep the newest entry (or the typing indicator) in view.
    use_effect(move || {
        let _ = log.read().entries().len();
        let _ = log.read().is_sending();
        scroll_to_element_id(LOG_END_ID);
    });

    let send_message = use_callback(move |_: ()| {
        let raw = input_text.peek().clone();
        if !log.peek().can_send(&raw) {
            return;
        }
        on_send.call(raw);
        input_text.set(String::new());
    });

    let onkeydown = use_callback(move |e: KeyboardEvent| {
        if e.key() == Key::Enter && !e.modifiers().shift() {
            e.prevent_default();
            send_message.call(());
        }
    });

    let oninput = use_callback(move |e: FormEvent| {
        input_text.set(e.value());
    });

    let sending = log.read().is_sending();
    let can_send = log.read().can_send(&input_text.read());
    let entries = log.read().entries().to_vec();

    rsx! {
        style { {CHAT_STYLES} }

        div {
            class: "chat-container",

            div {
                class: "chat-log",
                if entries.is_empty() {
                    div {
                        class: "chat-empty",
                        div { class: "chat-empty-icon", "💬" }
                        div { class: "chat-empty-title", "Support Chat" }
                        div { class: "chat-empty-hint", "Try: \"I need a refund\" or \"I can't log in\"" }
                    }
                }

                for (index, entry) in entries.iter().enumerate() {
                    ChatBubble { key: "{index}", entry: entry.clone() }
                }

                if sending {
                    div {
                        class: "chat-row",
                        div { class: "chat-avatar", "🤖" }
                        div { class: "chat-bubble", Spinner {} }
                    }
                }

                div { id: LOG_END_ID }
            }

            div {
                class: "chat-input-bar",
                textarea {
                    class: "chat-textarea",
                    placeholder: "Ask something like 'Why was I charged twice?' … Enter to send",
                    rows: "2",
                    value: "{input_text}",
                    oninput,
                    onkeydown,
                }
                button {
                    class: "chat-send",
                    disabled: !can_send,
                    onclick: move |_| send_message.call(()),
                    "Send"
                }
            }
        }
    }
}

#[component]
fn ChatBubble(entry: ChatEntry) -> Element {
    let (row_class, bubble_class, avatar) = match &entry {
        ChatEntry::User { .. } => ("chat-row user", "chat-bubble user", None),
        ChatEntry::Bot { .. } => ("chat-row", "chat-bubble", Some(("chat-avatar", "🤖"))),
        ChatEntry::Error { .. } => (
            "chat-row",
            "chat-bubble error",
            Some(("chat-avatar error", "!")),
        ),
    };
    let reply_meta: Option<(Category, String)> = match &entry {
        ChatEntry::Bot {
            category,
            response_time_ms,
            ..
        } => Some((category.clone(), format_latency(*response_time_ms))),
        _ => None,
    };
    let text = entry.text().to_string();
    let tag = entry.tag().unwrap_or_default();

    rsx! {
        div {
            class: "{row_class}",
            if let Some((avatar_class, glyph)) = avatar {
                div { class: "{avatar_class}", "{glyph}" }
            }
            div {
                class: "chat-bubble-column",
                div { class: "{bubble_class}", "{text}" }
                if let Some((category, latency)) = reply_meta {
                    div {
                        class: "chat-tag",
                        title: "{tag}",
                        CategoryBadge { category }
                        span { class: "chat-latency", "{latency}" }
                    }
                }
            }
        }
    }
}
