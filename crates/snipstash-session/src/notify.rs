//! User-facing notices.
//!
//! Every user-visible outcome is a transient notice: successes auto-dismiss
//! quickly, errors linger longer. Store failures are mapped to short human
//! messages here; raw SDK text stays in the logs.

use serde::Serialize;
use ts_rs::TS;

use snipstash_core::error::StoreError;

use crate::error::SessionError;

/// How long a success notice stays up before auto-dismissing.
pub const SUCCESS_DISMISS_MS: u32 = 3_000;
/// How long an error notice stays up before auto-dismissing.
pub const ERROR_DISMISS_MS: u32 = 5_000;
/// How long the copy control shows its "copied" confirmation.
pub const COPY_FEEDBACK_MS: u32 = 2_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Success,
    Error,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Notice {
    pub message: String,
    pub severity: Severity,
    pub auto_dismiss_ms: u32,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Success,
            auto_dismiss_ms: SUCCESS_DISMISS_MS,
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity: Severity::Error,
            auto_dismiss_ms: ERROR_DISMISS_MS,
        }
    }

    /// The notice shown when an operation escapes the known taxonomy.
    pub fn unexpected() -> Self {
        Self::error("An unexpected error occurred. Please try again.")
    }
}

impl From<&SessionError> for Notice {
    fn from(err: &SessionError) -> Self {
        match err {
            SessionError::Validation(e) => Notice::error(format!(
                "Please fix the following errors: {}",
                e.problems.join(" \u{2022} ")
            )),
            SessionError::Store(e) => Notice::error(describe_store_error(e)),
            SessionError::Busy => Notice::error("A save is already in progress."),
            SessionError::MissingSnippet(_) => {
                Notice::error("Snippet not found. It may have been deleted.")
            }
        }
    }
}

/// Short human-readable message for each store failure class.
pub fn describe_store_error(err: &StoreError) -> String {
    match err {
        StoreError::NotFound { .. } => "Snippet not found. It may have been deleted.",
        StoreError::PermissionDenied(_) => "You don't have permission to do that.",
        StoreError::Quota(_) => "The snippet store is busy. Try again in a moment.",
        StoreError::Unavailable(_) => {
            "Could not reach the snippet store. Check your connection and try again."
        }
        StoreError::Serialization(_) => "A snippet document could not be read.",
        StoreError::Other(_) => "Something went wrong talking to the snippet store.",
    }
    .to_string()
}
