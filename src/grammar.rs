//! Heuristic grammar-pattern detection.
//!
//! Each language has a fixed, ordered list of independent predicate rules
//! over the article body; a matching rule contributes its fixed label. This
//! is approximate pattern matching, not parsing: false positives are
//! accepted in exchange for simple, individually testable rules.

use once_cell::sync::Lazy;
use regex::Regex;

/// English rules, evaluated in order. A past-participle-shaped word is any
/// token ending in `ed` or `en`.
static ENGLISH_RULES: Lazy<Vec<(Regex, &'static str)>> = Lazy::new(|| {
    vec![
        (
            Regex::new(r"(?i)\b(be|am|is|are|was|were|been|being)\b\s+\b[A-Za-z]+(?:ed|en)\b")
                .unwrap(),
            "受動態: be + 過去分詞（~される）",
        ),
        (
            Regex::new(r"(?i)\bif\b.*\b(would|could|might|should)\b").unwrap(),
            "仮定法: if + ... would/could ...",
        ),
        (
            Regex::new(r"(?i)\b(has|have|had)\b\s+\b[A-Za-z]+(?:ed|en)\b").unwrap(),
            "完了形: have/has/had + 過去分詞",
        ),
        (
            Regex::new(r"(?i)\b(which|that|who|whom|whose)\b\s+\b\w+\b").unwrap(),
            "関係節: 関係代名詞",
        ),
        (
            Regex::new(r"(?i)\b(can|could|may|might|must|shall|should|will|would)\b\s+\w+")
                .unwrap(),
            "助動詞: 可能・推量・義務など",
        ),
    ]
});

/// Chinese marker rules, evaluated in order. Presence of the marker anywhere
/// in the body is enough.
const CHINESE_MARKERS: &[(&str, &str)] = &[
    ("被", "被字句: 受け身（〜に〜される）"),
    ("把", "把字句: 目的語前置（〜を〜する）"),
    ("了", "アスペクト了: 完了・変化の了"),
    ("过", "過去経験の过: 〜したことがある"),
    ("着", "持続の着: 〜している(状態)"),
    ("比", "比較構文: A 比 B + 形容詞"),
];

/// Labels of English constructions detected in `text`, in rule order,
/// first occurrence kept.
pub fn english_grammar_points(text: &str) -> Vec<String> {
    let mut points = Vec::new();
    for (rule, label) in ENGLISH_RULES.iter() {
        if rule.is_match(text) {
            push_unique(&mut points, label);
        }
    }
    points
}

/// Labels of Chinese constructions whose marker appears in `text`, in rule
/// order, first occurrence kept.
pub fn chinese_grammar_points(text: &str) -> Vec<String> {
    let mut points = Vec::new();
    for (marker, label) in CHINESE_MARKERS {
        if text.contains(marker) {
            push_unique(&mut points, label);
        }
    }
    points
}

fn push_unique(points: &mut Vec<String>, label: &str) {
    if !points.iter().any(|p| p == label) {
        points.push(label.to_string());
    }
}
