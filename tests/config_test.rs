use lingo_digest::config::DigestConfig;

#[test]
fn missing_fields_fall_back_to_defaults() {
    let config: DigestConfig = serde_json::from_str("{}").unwrap();

    assert_eq!(config.items_per_lang, 1);
    assert_eq!(config.min_chars, 800);
    assert_eq!(config.max_chars, 8000);
    assert!(config.use_generative);
    assert!(config.english_rss.is_empty());
    assert!(config.chinese_rss.is_empty());
}

#[test]
fn explicit_fields_override_defaults() {
    let raw = r#"{
        "min_chars": 500,
        "max_chars": 4000,
        "use_generative": false,
        "english_rss": ["https://example.com/rss.xml"]
    }"#;
    let config: DigestConfig = serde_json::from_str(raw).unwrap();

    assert_eq!(config.min_chars, 500);
    assert_eq!(config.max_chars, 4000);
    assert!(!config.use_generative);
    assert_eq!(config.english_rss.len(), 1);
    assert!(config.chinese_rss.is_empty());
}

#[test]
fn load_reads_a_json_file() {
    let path = std::env::temp_dir().join("lingo-digest-config-test.json");
    std::fs::write(&path, r#"{ "items_per_lang": 2 }"#).unwrap();

    let config = lingo_digest::config::load(&path).unwrap();
    assert_eq!(config.items_per_lang, 2);

    std::fs::remove_file(&path).ok();
}

#[test]
fn load_fails_on_a_missing_file() {
    assert!(lingo_digest::config::load("/nonexistent/config.json").is_err());
}
