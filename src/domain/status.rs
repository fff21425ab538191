//! Review statuses and the outbound message format.

use serde_json::Value;

use crate::error::StatusError;

/// Review status of a homework submission.
///
/// Closed set: any other string on the wire is an [`StatusError::UnknownStatus`],
/// not something to be silently ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewStatus {
    Approved,
    Reviewing,
    Rejected,
}

impl ReviewStatus {
    /// Parse the wire representation of a status code.
    #[must_use]
    pub fn parse(code: &str) -> Option<Self> {
        match code {
            "approved" => Some(Self::Approved),
            "reviewing" => Some(Self::Reviewing),
            "rejected" => Some(Self::Rejected),
            _ => None,
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Approved => "approved",
            Self::Reviewing => "reviewing",
            Self::Rejected => "rejected",
        }
    }

    /// Human-readable verdict sentence for this status.
    #[must_use]
    pub fn verdict(&self) -> &'static str {
        match self {
            Self::Approved => "Работа проверена: ревьюеру всё понравилось. Ура!",
            Self::Reviewing => "Работа взята на проверку ревьюером.",
            Self::Rejected => "Работа проверена: у ревьюера есть замечания.",
        }
    }
}

/// A formatted status change ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusUpdate {
    pub message: String,
    pub status: ReviewStatus,
}

/// Compose the outbound message for one submission record.
///
/// The record must carry string `status` and `homework_name` fields and the
/// status must be one of the recognized codes. Whether the resulting message
/// is actually dispatched is the caller's decision; formatting is pure.
pub fn format_status(record: &Value) -> Result<StatusUpdate, StatusError> {
    let status_code = record
        .get("status")
        .and_then(Value::as_str)
        .ok_or(StatusError::IncompleteRecord { field: "status" })?;
    let name = record
        .get("homework_name")
        .and_then(Value::as_str)
        .ok_or(StatusError::IncompleteRecord {
            field: "homework_name",
        })?;

    let status = ReviewStatus::parse(status_code).ok_or_else(|| StatusError::UnknownStatus {
        name: name.to_string(),
        status: status_code.to_string(),
    })?;

    Ok(StatusUpdate {
        message: format!(
            "Изменился статус проверки работы \"{name}\". {}",
            status.verdict()
        ),
        status,
    })
}
