//! In-memory snippet filtering.
//!
//! Pure over the cached collection; the visible list is always re-derived
//! from the current search and language control values.

use crate::models::{Language, Snippet};

/// Filter snippets by a free-text search term and a language tag.
///
/// A snippet matches when the trimmed, lowercased term occurs in its title
/// or content (an empty term matches everything) and its language equals
/// the selected tag (no selection matches everything). Original order is
/// preserved.
pub fn filter_snippets<'a>(
    snippets: &'a [Snippet],
    search: &str,
    language: Option<Language>,
) -> Vec<&'a Snippet> {
    let term = search.trim().to_lowercase();

    snippets
        .iter()
        .filter(|s| {
            let matches_search = term.is_empty()
                || s.title.to_lowercase().contains(&term)
                || s.content.to_lowercase().contains(&term);
            let matches_language = language.map_or(true, |l| l == s.language);
            matches_search && matches_language
        })
        .collect()
}
