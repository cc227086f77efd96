//! Chat log pure logic — no RSX, no signals

use shared_types::{Category, ChatReply};

use crate::api::{RequestError, SupportApi};
use crate::format::format_reply_tag;

pub const SEND_FAILED_MESSAGE: &str = "Something went wrong. Check the backend.";

/// One turn in the conversation. Entries are appended, never edited.
#[derive(Debug, Clone, PartialEq)]
pub enum ChatEntry {
    User {
        text: String,
    },
    Bot {
        text: String,
        category: Category,
        response_time_ms: u64,
    },
    /// Compensating entry for a send that failed.
    Error {
        text: String,
    },
}

impl ChatEntry {
    pub fn text(&self) -> &str {
        match self {
            ChatEntry::User { text } | ChatEntry::Bot { text, .. } | ChatEntry::Error { text } => {
                text
            }
        }
    }

    /// `Refund · 120ms` for bot replies.
    pub fn tag(&self) -> Option<String> {
        match self {
            ChatEntry::Bot {
                category,
                response_time_ms,
                ..
            } => Some(format_reply_tag(category, *response_time_ms)),
            _ => None,
        }
    }
}

/// Session conversation: append-only entries plus the in-flight flag.
///
/// A send is two-phase. [`ChatLog::begin_send`] appends the user's text
/// provisionally; [`ChatLog::settle`] then appends either the bot reply or a
/// single error entry.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ChatLog {
    entries: Vec<ChatEntry>,
    sending: bool,
}

impl ChatLog {
    pub fn entries(&self) -> &[ChatEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    /// Whether `raw` would be accepted by [`ChatLog::begin_send`] right now.
    pub fn can_send(&self, raw: &str) -> bool {
        !self.sending && !raw.trim().is_empty()
    }

    /// Start a send. Returns the trimmed text to deliver, or `None` when the
    /// input is blank or another send is still pending.
    pub fn begin_send(&mut self, raw: &str) -> Option<String> {
        if !self.can_send(raw) {
            return None;
        }
        let text = raw.trim().to_string();
        self.entries.push(ChatEntry::User { text: text.clone() });
        self.sending = true;
        Some(text)
    }

    /// Finish the pending send. Returns `true` when the backend saved a new
    /// trace.
    pub fn settle(&mut self, outcome: Result<ChatReply, RequestError>) -> bool {
        self.sending = false;
        match outcome {
            Ok(reply) => {
                self.entries.push(ChatEntry::Bot {
                    text: reply.bot_response,
                    category: reply.category,
                    response_time_ms: reply.response_time_ms,
                });
                true
            }
            Err(_) => {
                self.entries.push(ChatEntry::Error {
                    text: SEND_FAILED_MESSAGE.to_string(),
                });
                false
            }
        }
    }
}

/// Deliver a message already accepted by [`ChatLog::begin_send`].
///
/// `settle` receives the outcome once the backend answers. The return value
/// says whether a trace was saved and does not depend on `settle`, so the
/// shell is notified even when the log it would have updated is gone.
pub async fn deliver<A, F>(api: &A, text: &str, settle: F) -> bool
where
    A: SupportApi,
    F: FnOnce(Result<ChatReply, RequestError>),
{
    let outcome = api.send_chat_message(text).await;
    if let Err(e) = &outcome {
        dioxus_logger::tracing::error!(
            "Failed to send chat message (status {:?}): {}",
            e.status(),
            e
        );
    }

    let saved = outcome.is_ok();
    settle(outcome);
    saved
}

#[cfg(test)]
mod tests {
    use futures::executor::block_on;

    use super::*;
    use crate::api::testing::FakeApi;
    use crate::shell::state::{ShellState, ViewMode};

    fn refund_reply() -> ChatReply {
        ChatReply {
            bot_response: "I've started your refund.".to_string(),
            category: Category::Refund,
            response_time_ms: 120,
            id: None,
            timestamp: None,
        }
    }

    /// Same sequence the shell runs, minus the signals.
    fn exchange(api: &FakeApi, log: &mut ChatLog, raw: &str) -> bool {
        let Some(text) = log.begin_send(raw) else {
            return false;
        };
        block_on(deliver(api, &text, |outcome| {
            log.settle(outcome);
        }))
    }

    #[test]
    fn blank_input_is_a_no_op() {
        let api = FakeApi::replying(Ok(refund_reply()));
        let mut log = ChatLog::default();
        for raw in ["", "   ", "\n\t "] {
            assert!(!exchange(&api, &mut log, raw));
        }
        assert!(log.is_empty());
        assert!(!log.is_sending());
        assert!(api.chat_calls.borrow().is_empty());
    }

    #[test]
    fn send_while_pending_is_a_no_op() {
        let mut log = ChatLog::default();
        assert_eq!(log.begin_send("first"), Some("first".to_string()));
        assert!(log.is_sending());
        assert_eq!(log.begin_send("second"), None);
        assert_eq!(log.entries().len(), 1);

        log.settle(Ok(refund_reply()));
        assert!(!log.is_sending());
        assert_eq!(log.begin_send("second"), Some("second".to_string()));
    }

    #[test]
    fn successful_send_appends_user_then_bot() {
        let api = FakeApi::replying(Ok(refund_reply()));
        let mut log = ChatLog::default();

        assert!(exchange(&api, &mut log, "  I need a refund  "));

        assert_eq!(*api.chat_calls.borrow(), vec!["I need a refund".to_string()]);
        assert_eq!(
            log.entries(),
            &[
                ChatEntry::User {
                    text: "I need a refund".to_string()
                },
                ChatEntry::Bot {
                    text: "I've started your refund.".to_string(),
                    category: Category::Refund,
                    response_time_ms: 120,
                },
            ]
        );
        assert_eq!(log.entries()[1].tag().as_deref(), Some("Refund · 120ms"));
        assert!(!log.is_sending());
    }

    #[test]
    fn failed_send_appends_user_then_error() {
        let api = FakeApi::replying(Err(RequestError::http(503, "HTTP error: 503")));
        let mut log = ChatLog::default();

        assert!(!exchange(&api, &mut log, "hello"));

        assert_eq!(log.entries().len(), 2);
        assert_eq!(log.entries()[0].text(), "hello");
        assert_eq!(
            log.entries()[1],
            ChatEntry::Error {
                text: SEND_FAILED_MESSAGE.to_string()
            }
        );
        assert!(!log
            .entries()
            .iter()
            .any(|e| matches!(e, ChatEntry::Bot { .. })));
        assert!(!log.is_sending());
    }

    #[test]
    fn user_and_error_entries_have_no_tag() {
        assert!(ChatEntry::User { text: "x".into() }.tag().is_none());
        assert!(ChatEntry::Error { text: "x".into() }.tag().is_none());
    }

    #[test]
    fn deliver_reports_saved_only_on_success() {
        let ok = FakeApi::replying(Ok(refund_reply()));
        let mut settled = None;
        assert!(block_on(deliver(&ok, "refund please", |o| settled = Some(o))));
        assert_eq!(settled, Some(Ok(refund_reply())));

        let failing = FakeApi::replying(Err(RequestError::http(500, "HTTP error: 500")));
        let mut settled = None;
        assert!(!block_on(deliver(&failing, "hello", |o| settled = Some(o))));
        assert!(matches!(settled, Some(Err(_))));
    }

    #[test]
    fn saved_trace_refreshes_shell_after_leaving_chat() {
        let api = FakeApi::replying(Ok(refund_reply()));
        let mut shell = ShellState::default();
        shell.select(ViewMode::Chat);

        let mut log = ChatLog::default();
        let text = log.begin_send("I need a refund").unwrap();

        // The user goes back to the dashboard and the chat log is discarded
        // before the reply arrives.
        shell.select(ViewMode::Dashboard);
        let at_switch = shell.refresh;
        drop(log);

        if block_on(deliver(&api, &text, |_| {})) {
            shell.trace_saved();
        }
        assert!(shell.refresh > at_switch);
        assert_eq!(*api.chat_calls.borrow(), vec!["I need a refund".to_string()]);
    }

    #[test]
    fn failed_delivery_leaves_refresh_untouched() {
        let api = FakeApi::default();
        let mut shell = ShellState::default();
        let before = shell.refresh;

        if block_on(deliver(&api, "hello", |_| {})) {
            shell.trace_saved();
        }
        assert_eq!(shell.refresh, before);
    }
}
