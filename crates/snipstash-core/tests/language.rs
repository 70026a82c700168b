use snipstash_core::models::Language;

#[test]
fn tags_round_trip_through_from_str() {
    for lang in Language::ALL {
        assert_eq!(lang.tag().parse::<Language>().unwrap(), lang);
    }
}

#[test]
fn unknown_tag_is_rejected() {
    assert!("Brainfuck".parse::<Language>().is_err());
    assert!("".parse::<Language>().is_err());
}

#[test]
fn serde_uses_display_tags() {
    let json = serde_json::to_string(&Language::Cpp).unwrap();
    assert_eq!(json, "\"C++\"");

    let back: Language = serde_json::from_str("\"JavaScript\"").unwrap();
    assert_eq!(back, Language::JavaScript);
}
