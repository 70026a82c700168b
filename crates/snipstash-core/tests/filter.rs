use jiff::Timestamp;
use snipstash_core::filter::filter_snippets;
use snipstash_core::models::{Language, Snippet};
use uuid::Uuid;

fn snippet(title: &str, language: Language, content: &str) -> Snippet {
    Snippet {
        id: Uuid::new_v4(),
        title: title.to_string(),
        language,
        content: content.to_string(),
        created_at: Timestamp::UNIX_EPOCH,
    }
}

fn catalog() -> Vec<Snippet> {
    vec![
        snippet("Debounce helper", Language::JavaScript, "function debounce() {}"),
        snippet("List comprehension", Language::Python, "xs = [x*x for x in range(10)]"),
        snippet("Error wrapper", Language::Rust, "fn main() -> eyre::Result<()> { Ok(()) }"),
        snippet("CSV reader", Language::Python, "import csv"),
    ]
}

#[test]
fn empty_controls_return_everything_in_order() {
    let all = catalog();
    let visible = filter_snippets(&all, "", None);

    assert_eq!(visible.len(), all.len());
    for (got, want) in visible.iter().zip(all.iter()) {
        assert_eq!(got.id, want.id);
    }
}

#[test]
fn search_is_case_insensitive_over_title_and_content() {
    let all = catalog();

    // Title match, different case.
    let by_title = filter_snippets(&all, "DEBOUNCE", None);
    assert_eq!(by_title.len(), 1);
    assert_eq!(by_title[0].title, "Debounce helper");

    // Content-only match.
    let by_content = filter_snippets(&all, "import CSV", None);
    assert_eq!(by_content.len(), 1);
    assert_eq!(by_content[0].title, "CSV reader");
}

#[test]
fn language_filter_matches_exactly() {
    let all = catalog();
    let pythons = filter_snippets(&all, "", Some(Language::Python));

    assert_eq!(pythons.len(), 2);
    assert!(pythons.iter().all(|s| s.language == Language::Python));
}

#[test]
fn search_and_language_combine() {
    let all = catalog();

    let hit = filter_snippets(&all, "csv", Some(Language::Python));
    assert_eq!(hit.len(), 1);
    assert_eq!(hit[0].title, "CSV reader");

    // Term matches a JavaScript snippet but the tag excludes it.
    let miss = filter_snippets(&all, "debounce", Some(Language::Python));
    assert!(miss.is_empty());
}

#[test]
fn search_term_is_trimmed() {
    let all = catalog();
    let visible = filter_snippets(&all, "   ", None);
    assert_eq!(visible.len(), all.len());
}

#[test]
fn no_match_returns_empty() {
    let all = catalog();
    assert!(filter_snippets(&all, "zebra", None).is_empty());
}
