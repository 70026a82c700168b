use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::models::language::Language;

/// An immutable snapshot of the entry form, exactly as the user left it.
/// `language` is `None` while nothing is selected. Drafts are what `submit`
/// consumes; the form itself is never the source of truth.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct SnippetDraft {
    pub title: String,
    pub language: Option<Language>,
    pub content: String,
}

/// A draft that passed validation: fields trimmed, language selected.
/// This is the only shape the store accepts for create and update.
#[derive(Debug, Clone)]
pub struct NewSnippet {
    pub title: String,
    pub language: Language,
    pub content: String,
}
