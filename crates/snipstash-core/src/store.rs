//! The snippet store port.
//!
//! The remote catalog behind five async operations. Adapters live in
//! snipstash-storage; the session layer only ever sees this trait.

use async_trait::async_trait;
use uuid::Uuid;

use crate::error::StoreError;
use crate::models::{NewSnippet, Snippet};

#[async_trait]
pub trait SnippetStore: Send + Sync {
    /// Fetch the entire catalog, in creation order.
    async fn fetch_all(&self) -> Result<Vec<Snippet>, StoreError>;

    /// Fetch one snippet. `Ok(None)` when the id is unknown.
    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Snippet>, StoreError>;

    /// Create a snippet. The store assigns `id` and `created_at` and
    /// returns the full record.
    async fn create(&self, new: NewSnippet) -> Result<Snippet, StoreError>;

    /// Replace the three user fields of an existing snippet. `created_at`
    /// is untouched. Fails with [`StoreError::NotFound`] for unknown ids.
    async fn update(&self, id: Uuid, new: NewSnippet) -> Result<(), StoreError>;

    /// Delete a snippet. Irreversible.
    async fn delete(&self, id: Uuid) -> Result<(), StoreError>;
}
