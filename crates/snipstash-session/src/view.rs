//! View models.
//!
//! Plain data handed to the webview. All user-supplied text crosses the
//! boundary as literal strings; the renderer must treat it as text, never
//! as markup.

use serde::Serialize;
use ts_rs::TS;
use uuid::Uuid;

use snipstash_core::models::{Language, Snippet};

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct SnippetCard {
    pub id: Uuid,
    pub title: String,
    pub language: Language,
    pub created_label: String,
    pub content: String,
}

/// The rendered list. An empty result is its own state so the shell shows
/// the "no snippets" placeholder instead of a bare container.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SnippetList {
    Empty,
    Cards { cards: Vec<SnippetCard> },
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct ViewState {
    pub list: SnippetList,
    pub edit_mode: bool,
    pub editing_id: Option<Uuid>,
    pub loading: bool,
    pub saving: bool,
    pub submit_label: String,
    pub cancel_visible: bool,
}

pub(crate) fn card(snippet: &Snippet) -> SnippetCard {
    SnippetCard {
        id: snippet.id,
        title: snippet.title.clone(),
        language: snippet.language,
        created_label: format_created(snippet.created_at),
        content: snippet.content.clone(),
    }
}

fn format_created(ts: jiff::Timestamp) -> String {
    ts.strftime("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn created_label_is_a_calendar_date() {
        let ts: jiff::Timestamp = "2026-08-29T10:30:00Z".parse().unwrap();
        assert_eq!(format_created(ts), "2026-08-29");
    }
}
