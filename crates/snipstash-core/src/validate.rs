//! Draft validation.
//!
//! Runs before any store call. Collects every violated constraint so the
//! user sees the full list at once instead of fixing one field per attempt.

use crate::error::ValidationError;
use crate::models::{NewSnippet, SnippetDraft};

pub const TITLE_MIN_CHARS: usize = 3;
pub const TITLE_MAX_CHARS: usize = 100;
pub const CONTENT_MIN_CHARS: usize = 5;

/// Validate a form draft into a [`NewSnippet`] ready for the store.
///
/// Title and content are trimmed first; limits apply to the trimmed text.
pub fn validate(draft: &SnippetDraft) -> Result<NewSnippet, ValidationError> {
    let mut problems = Vec::new();

    let title = draft.title.trim();
    if title.is_empty() {
        problems.push("Title is required".to_string());
    } else if title.chars().count() < TITLE_MIN_CHARS {
        problems.push(format!(
            "Title must be at least {TITLE_MIN_CHARS} characters long"
        ));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        problems.push(format!(
            "Title must be at most {TITLE_MAX_CHARS} characters"
        ));
    }

    if draft.language.is_none() {
        problems.push("Please select a programming language".to_string());
    }

    let content = draft.content.trim();
    if content.is_empty() {
        problems.push("Code content is required".to_string());
    } else if content.chars().count() < CONTENT_MIN_CHARS {
        problems.push(format!(
            "Code content must be at least {CONTENT_MIN_CHARS} characters long"
        ));
    }

    match (problems.is_empty(), draft.language) {
        (true, Some(language)) => Ok(NewSnippet {
            title: title.to_string(),
            language,
            content: content.to_string(),
        }),
        _ => Err(ValidationError { problems }),
    }
}
