//! In-memory snippet store.
//!
//! Same contract as the S3 store, backed by a `Vec` behind a lock. Tests
//! and the demo example run against this.

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use snipstash_core::error::StoreError;
use snipstash_core::models::{NewSnippet, Snippet};
use snipstash_core::store::SnippetStore;

#[derive(Default)]
pub struct MemoryStore {
    snippets: RwLock<Vec<Snippet>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snippets(snippets: Vec<Snippet>) -> Self {
        Self {
            snippets: RwLock::new(snippets),
        }
    }
}

#[async_trait]
impl SnippetStore for MemoryStore {
    async fn fetch_all(&self) -> Result<Vec<Snippet>, StoreError> {
        Ok(self.snippets.read().await.clone())
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Snippet>, StoreError> {
        Ok(self
            .snippets
            .read()
            .await
            .iter()
            .find(|s| s.id == id)
            .cloned())
    }

    async fn create(&self, new: NewSnippet) -> Result<Snippet, StoreError> {
        let snippet = Snippet {
            id: Uuid::new_v4(),
            title: new.title,
            language: new.language,
            content: new.content,
            created_at: jiff::Timestamp::now(),
        };
        self.snippets.write().await.push(snippet.clone());
        Ok(snippet)
    }

    async fn update(&self, id: Uuid, new: NewSnippet) -> Result<(), StoreError> {
        let mut snippets = self.snippets.write().await;
        let snippet = snippets
            .iter_mut()
            .find(|s| s.id == id)
            .ok_or(StoreError::NotFound { id })?;

        snippet.title = new.title;
        snippet.language = new.language;
        snippet.content = new.content;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        // Deleting an unknown id succeeds, matching S3 DeleteObject.
        self.snippets.write().await.retain(|s| s.id != id);
        Ok(())
    }
}
