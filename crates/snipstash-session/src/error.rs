use thiserror::Error;
use uuid::Uuid;

use snipstash_core::error::{StoreError, ValidationError};

#[derive(Debug, Error)]
pub enum SessionError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Store(#[from] StoreError),

    /// A save is already in flight; the submit control should have been
    /// disabled.
    #[error("a save is already in progress")]
    Busy,

    /// The snippet exists neither in the cache nor on the backend.
    #[error("snippet not found: {0}")]
    MissingSnippet(Uuid),
}
