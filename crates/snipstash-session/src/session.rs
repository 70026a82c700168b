//! The snippet store controller.
//!
//! One logical thread of execution owns all state; store calls suspend the
//! running operation, never the whole shell. At most one save is in flight
//! at a time, and every mutation is followed by a wholesale re-fetch rather
//! than an optimistic local merge.

use uuid::Uuid;

use snipstash_core::filter::filter_snippets;
use snipstash_core::models::{Language, Snippet, SnippetDraft};
use snipstash_core::store::SnippetStore;
use snipstash_core::validate::validate;

use crate::error::SessionError;
use crate::notify::Notice;
use crate::view::{self, SnippetList, ViewState};

pub struct SnippetSession<S> {
    store: S,
    snippets: Vec<Snippet>,
    editing: Option<Uuid>,
    loading: bool,
    saving: bool,
}

impl<S: SnippetStore> SnippetSession<S> {
    pub fn new(store: S) -> Self {
        Self {
            store,
            snippets: Vec::new(),
            editing: None,
            loading: false,
            saving: false,
        }
    }

    pub fn snippets(&self) -> &[Snippet] {
        &self.snippets
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn edit_mode(&self) -> bool {
        self.editing.is_some()
    }

    pub fn editing_id(&self) -> Option<Uuid> {
        self.editing
    }

    /// Replace the cache with the store's current contents.
    ///
    /// On failure the previous cache is kept, stale but consistent; the
    /// caller surfaces the error as a notice.
    pub async fn load(&mut self) -> Result<(), SessionError> {
        self.loading = true;
        let result = self.store.fetch_all().await;
        self.loading = false;

        match result {
            Ok(all) => {
                tracing::info!(count = all.len(), "loaded snippet catalog");
                self.snippets = all;
                Ok(())
            }
            Err(e) => {
                tracing::error!(error = %e, "failed to load snippets, keeping cached list");
                Err(e.into())
            }
        }
    }

    /// Single entry point for create and update, discriminated by edit
    /// state. Validation aborts before any store call; a store failure
    /// leaves edit state intact so the user can retry without re-entering
    /// anything.
    pub async fn submit(&mut self, draft: &SnippetDraft) -> Result<Notice, SessionError> {
        if self.saving {
            return Err(SessionError::Busy);
        }
        let new = validate(draft)?;

        self.saving = true;
        let result = match self.editing {
            Some(id) => {
                tracing::info!(id = %id, "updating snippet");
                self.store
                    .update(id, new)
                    .await
                    .map(|()| "Snippet updated successfully!")
            }
            None => {
                tracing::info!("adding new snippet");
                self.store
                    .create(new)
                    .await
                    .map(|_| "Snippet added successfully!")
            }
        };
        self.saving = false;

        let message = result?;
        self.editing = None;
        Ok(Notice::success(message))
    }

    /// Enter edit mode for a snippet and return the draft to populate the
    /// form with. Falls back to a direct fetch when the id is not cached;
    /// the fetched record is what fills the draft.
    pub async fn begin_edit(&mut self, id: Uuid) -> Result<SnippetDraft, SessionError> {
        let snippet = match self.snippets.iter().find(|s| s.id == id).cloned() {
            Some(s) => s,
            None => self
                .store
                .fetch_by_id(id)
                .await?
                .ok_or(SessionError::MissingSnippet(id))?,
        };

        self.editing = Some(id);
        Ok(SnippetDraft {
            title: snippet.title,
            language: Some(snippet.language),
            content: snippet.content,
        })
    }

    /// Leave edit mode and return the empty draft the form resets to.
    /// Idempotent.
    pub fn cancel_edit(&mut self) -> SnippetDraft {
        self.editing = None;
        SnippetDraft::default()
    }

    /// Confirmation text for deleting a snippet, naming its title when the
    /// id is cached.
    pub fn removal_prompt(&self, id: Uuid) -> String {
        let name = self
            .snippets
            .iter()
            .find(|s| s.id == id)
            .map(|s| format!("\"{}\"", s.title))
            .unwrap_or_else(|| "this snippet".to_string());
        format!("Are you sure you want to delete {name}? This action cannot be undone.")
    }

    /// Delete a snippet. Callers only reach this after the user accepted
    /// the removal prompt.
    pub async fn remove(&mut self, id: Uuid) -> Result<Notice, SessionError> {
        self.store.delete(id).await?;
        Ok(Notice::success("Snippet deleted successfully!"))
    }

    /// The literal content of a cached snippet, for the clipboard.
    pub fn content_of(&self, id: Uuid) -> Option<&str> {
        self.snippets
            .iter()
            .find(|s| s.id == id)
            .map(|s| s.content.as_str())
    }

    /// The cached snippets matching the current filter controls, in
    /// original order.
    pub fn visible(&self, search: &str, language: Option<Language>) -> Vec<&Snippet> {
        filter_snippets(&self.snippets, search, language)
    }

    /// Derive the full view state for the current filter controls.
    pub fn view(&self, search: &str, language: Option<Language>) -> ViewState {
        let cards: Vec<_> = self
            .visible(search, language)
            .into_iter()
            .map(view::card)
            .collect();

        let list = if cards.is_empty() {
            SnippetList::Empty
        } else {
            SnippetList::Cards { cards }
        };

        ViewState {
            list,
            edit_mode: self.edit_mode(),
            editing_id: self.editing,
            loading: self.loading,
            saving: self.saving,
            submit_label: if self.edit_mode() {
                "Update Snippet"
            } else {
                "Add Snippet"
            }
            .to_string(),
            cancel_visible: self.edit_mode(),
        }
    }
}
