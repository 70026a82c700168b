use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::language::Language;

/// A stored code snippet. `id` and `created_at` are assigned by the store
/// on creation and never change afterwards.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Snippet {
    pub id: Uuid,
    pub title: String,
    pub language: Language,
    pub content: String,
    pub created_at: jiff::Timestamp,
}
