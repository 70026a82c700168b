//! The S3-backed snippet store.
//!
//! Each snippet is one JSON document under `snippets/{id}.json`. The bucket
//! is the source of truth; the session re-fetches wholesale after every
//! mutation, so writes here are plain last-write-wins puts.

use async_trait::async_trait;
use aws_sdk_s3::Client;
use uuid::Uuid;

use snipstash_core::error::StoreError;
use snipstash_core::keys;
use snipstash_core::models::{NewSnippet, Snippet};
use snipstash_core::store::SnippetStore;

use crate::error::StorageError;
use crate::objects;

pub struct S3SnippetStore {
    client: Client,
    bucket: String,
}

impl S3SnippetStore {
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }

    async fn read_document(&self, id: Uuid) -> Result<Option<Snippet>, StoreError> {
        let key = keys::snippet(id);
        match objects::get_object(&self.client, &self.bucket, &key).await {
            Ok(body) => Ok(Some(serde_json::from_slice(&body)?)),
            Err(StorageError::NotFound { .. }) => Ok(None),
            Err(e) => Err(classify(e)),
        }
    }

    async fn write_document(&self, snippet: &Snippet) -> Result<(), StoreError> {
        let key = keys::snippet(snippet.id);
        let body = serde_json::to_vec(snippet)?;
        objects::put_object(&self.client, &self.bucket, &key, body, Some("application/json"))
            .await
            .map_err(classify)
    }
}

#[async_trait]
impl SnippetStore for S3SnippetStore {
    async fn fetch_all(&self) -> Result<Vec<Snippet>, StoreError> {
        let keys = objects::list_objects(&self.client, &self.bucket, keys::SNIPPETS_PREFIX)
            .await
            .map_err(classify)?;

        let mut snippets = Vec::with_capacity(keys.len());
        for key in &keys {
            let body = objects::get_object(&self.client, &self.bucket, key)
                .await
                .map_err(classify)?;
            let snippet: Snippet = serde_json::from_slice(&body)?;
            snippets.push(snippet);
        }

        // S3 lists keys lexicographically by uuid; display order is
        // creation order.
        snippets.sort_by_key(|s| s.created_at);

        tracing::debug!(count = snippets.len(), "fetched snippet catalog");
        Ok(snippets)
    }

    async fn fetch_by_id(&self, id: Uuid) -> Result<Option<Snippet>, StoreError> {
        self.read_document(id).await
    }

    async fn create(&self, new: NewSnippet) -> Result<Snippet, StoreError> {
        let snippet = Snippet {
            id: Uuid::new_v4(),
            title: new.title,
            language: new.language,
            content: new.content,
            created_at: jiff::Timestamp::now(),
        };
        self.write_document(&snippet).await?;
        tracing::info!(id = %snippet.id, "created snippet");
        Ok(snippet)
    }

    async fn update(&self, id: Uuid, new: NewSnippet) -> Result<(), StoreError> {
        // Read first so the original created_at survives the rewrite.
        let mut snippet = self
            .read_document(id)
            .await?
            .ok_or(StoreError::NotFound { id })?;

        snippet.title = new.title;
        snippet.language = new.language;
        snippet.content = new.content;

        self.write_document(&snippet).await?;
        tracing::info!(id = %id, "updated snippet");
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let key = keys::snippet(id);
        objects::delete_object(&self.client, &self.bucket, &key)
            .await
            .map_err(classify)?;
        tracing::info!(id = %id, "deleted snippet");
        Ok(())
    }
}

/// Classify an S3-level failure into the store error taxonomy.
///
/// The SDK surfaces service errors as text, so classification is by error
/// code substring: auth failures, throttling, transport failures, then a
/// catch-all.
fn classify(err: StorageError) -> StoreError {
    match err {
        StorageError::Serialization(e) => StoreError::Serialization(e),
        other => classify_text(other.to_string()),
    }
}

fn classify_text(text: String) -> StoreError {
    let lower = text.to_lowercase();
    if lower.contains("accessdenied")
        || lower.contains("invalidaccesskeyid")
        || lower.contains("signaturedoesnotmatch")
        || lower.contains("expiredtoken")
    {
        StoreError::PermissionDenied(text)
    } else if lower.contains("slowdown") || lower.contains("serviceunavailable") {
        StoreError::Quota(text)
    } else if lower.contains("dispatch failure")
        || lower.contains("timeout")
        || lower.contains("connection")
        || lower.contains("unhandled")
    {
        StoreError::Unavailable(text)
    } else {
        StoreError::Other(text)
    }
}
