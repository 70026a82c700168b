use thiserror::Error;
use uuid::Uuid;

/// A snippet draft failed validation. Carries every violated constraint,
/// not just the first one found.
#[derive(Debug, Clone, Error)]
#[error("invalid snippet: {}", problems.join("; "))]
pub struct ValidationError {
    pub problems: Vec<String>,
}

/// Failure classes of the remote snippet store.
///
/// Adapters classify their SDK errors into these; the session layer maps
/// each class to a short human-readable message. Raw SDK text only survives
/// inside the variants for logging.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("snippet not found: {id}")]
    NotFound { id: Uuid },

    #[error("permission denied: {0}")]
    PermissionDenied(String),

    #[error("backend quota exceeded: {0}")]
    Quota(String),

    #[error("backend unavailable: {0}")]
    Unavailable(String),

    #[error("malformed snippet document: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("backend error: {0}")]
    Other(String),
}
