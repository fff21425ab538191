//! Mutable state of the poll loop.

use super::status::ReviewStatus;

/// Everything the loop remembers between cycles. Process lifetime only —
/// a restart starts over from the current time.
///
/// Owned by the orchestrator and passed explicitly into each cycle; nothing
/// else reads or writes it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollState {
    /// Status delivered by the last successful notification, if any.
    pub last_seen_status: Option<ReviewStatus>,
    /// Exact text of the last message actually sent. Dispatch is gated on
    /// the candidate message differing from this.
    pub last_sent_message: Option<String>,
    /// Lower bound (unix seconds) for the next poll request.
    pub cursor: i64,
}

impl PollState {
    #[must_use]
    pub fn new(cursor: i64) -> Self {
        Self {
            last_seen_status: None,
            last_sent_message: None,
            cursor,
        }
    }

    /// Whether `message` matches the last message actually sent.
    #[must_use]
    pub fn already_sent(&self, message: &str) -> bool {
        self.last_sent_message.as_deref() == Some(message)
    }
}
