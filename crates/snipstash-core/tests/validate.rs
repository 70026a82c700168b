use snipstash_core::models::{Language, SnippetDraft};
use snipstash_core::validate::validate;

fn draft(title: &str, language: Option<Language>, content: &str) -> SnippetDraft {
    SnippetDraft {
        title: title.to_string(),
        language,
        content: content.to_string(),
    }
}

#[test]
fn well_formed_draft_passes_trimmed() {
    let new = validate(&draft(
        "  Quick sort  ",
        Some(Language::Python),
        "\ndef qs(xs): ...\n",
    ))
    .unwrap();

    assert_eq!(new.title, "Quick sort");
    assert_eq!(new.language, Language::Python);
    assert_eq!(new.content, "def qs(xs): ...");
}

#[test]
fn all_violations_are_reported_together() {
    let err = validate(&draft("ab", None, "hi")).unwrap_err();

    assert_eq!(err.problems.len(), 3);
    assert!(err.problems[0].contains("at least 3 characters"));
    assert!(err.problems[1].contains("select a programming language"));
    assert!(err.problems[2].contains("at least 5 characters"));
}

#[test]
fn empty_fields_get_required_messages() {
    let err = validate(&draft("", Some(Language::Rust), "   ")).unwrap_err();

    assert_eq!(
        err.problems,
        vec![
            "Title is required".to_string(),
            "Code content is required".to_string(),
        ]
    );
}

#[test]
fn title_boundaries() {
    // 3 and 100 chars are accepted, 2 and 101 are not.
    assert!(validate(&draft("abc", Some(Language::Go), "hello")).is_ok());
    assert!(validate(&draft(&"x".repeat(100), Some(Language::Go), "hello")).is_ok());
    assert!(validate(&draft("ab", Some(Language::Go), "hello")).is_err());
    assert!(validate(&draft(&"x".repeat(101), Some(Language::Go), "hello")).is_err());
}

#[test]
fn content_boundary() {
    assert!(validate(&draft("abc", Some(Language::Go), "12345")).is_ok());
    assert!(validate(&draft("abc", Some(Language::Go), "1234")).is_err());
}

#[test]
fn limits_count_characters_not_bytes() {
    // Three multibyte characters satisfy the title minimum.
    assert!(validate(&draft("日本語", Some(Language::Other), "print()")).is_ok());
}

#[test]
fn whitespace_around_limits_is_ignored() {
    // 101 chars of which one is surrounding whitespace: trimmed length is 100.
    let padded = format!(" {}", "x".repeat(100));
    assert!(validate(&draft(&padded, Some(Language::C), "hello")).is_ok());
}
