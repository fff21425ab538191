//! Port traits decoupling the poll loop from its transports.
//!
//! The loop only ever talks to a [`SubmissionSource`] and a [`Notifier`];
//! tests script both without touching the network.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::{ApiError, NotifyError};

/// Source of homework submission payloads.
#[async_trait]
pub trait SubmissionSource: Send + Sync {
    /// Fetch the raw payload of submissions updated at or after `from_date`
    /// (unix seconds). Returns the decoded JSON body unmodified; shape
    /// validation is the caller's job.
    async fn fetch(&self, from_date: i64) -> Result<Value, ApiError>;
}

/// Outbound notification channel addressed to a single chat.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver `text` to the chat.
    ///
    /// Returns `Ok(false)` when the transport's own API rejected the
    /// message — an expected failure that must never abort the caller's
    /// cycle. Anything else that goes wrong during the send is an error.
    async fn send(&self, text: &str) -> Result<bool, NotifyError>;
}
