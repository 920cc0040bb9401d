use lingo_digest::config::DigestConfig;
use lingo_digest::picker::{self, FeedPicker};
use lingo_digest::{ArticleFetcher, Lang};

#[tokio::test]
async fn empty_feed_list_returns_none_immediately() {
    let fetcher = ArticleFetcher::new();
    let config = DigestConfig::default();
    let picker = FeedPicker::new(&fetcher, &config);

    assert!(picker.pick_from_rss(&[], Lang::En).await.is_none());
    assert!(picker.pick_from_rss(&[], Lang::Zh).await.is_none());
}

#[test]
fn length_acceptance_matches_configured_bounds() {
    let fetcher = ArticleFetcher::new();
    let config = DigestConfig {
        min_chars: 5,
        max_chars: 10,
        ..DigestConfig::default()
    };
    let picker = FeedPicker::new(&fetcher, &config);

    assert!(!picker.accepts_length("abcd"));
    assert!(picker.accepts_length("abcde"));
    assert!(picker.accepts_length("abcdefghij"));
    assert!(!picker.accepts_length("abcdefghijk"));
    // bounds are character counts, not byte counts
    assert!(picker.accepts_length("日本語です"));
}

#[test]
fn source_is_feed_host_without_www_prefix() {
    assert_eq!(
        picker::source_from_feed_url("https://www.example.com/rss/world.xml"),
        "example.com"
    );
    assert_eq!(
        picker::source_from_feed_url("https://news.site.org/rss"),
        "news.site.org"
    );
}

#[test]
fn target_language_matches_primary_subtag_only() {
    assert!(Lang::En.matches_detected(whatlang::Lang::Eng));
    assert!(!Lang::En.matches_detected(whatlang::Lang::Cmn));
    assert!(!Lang::En.matches_detected(whatlang::Lang::Fra));
    assert!(Lang::Zh.matches_detected(whatlang::Lang::Cmn));
    assert!(!Lang::Zh.matches_detected(whatlang::Lang::Eng));
}

#[test]
fn detection_sample_agrees_with_target_for_plain_prose() {
    let english = "The government announced a new economic policy on Monday, \
                   promising broad support for small businesses across the country.";
    let detected = whatlang::detect_lang(english).unwrap();
    assert!(Lang::En.matches_detected(detected));

    let chinese = "政府周一宣布了一项新的经济政策，承诺为全国的小型企业提供广泛支持。\
                   官员表示，这项政策将在未来几个月内逐步落实。";
    let detected = whatlang::detect_lang(chinese).unwrap();
    assert!(Lang::Zh.matches_detected(detected));
}
