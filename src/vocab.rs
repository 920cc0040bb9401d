use crate::pos;
use jieba_rs::Jieba;
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::{HashMap, HashSet};

/// Default number of vocabulary terms returned per article.
pub const DEFAULT_TOPN: usize = 12;

static EN_WORD: Lazy<Regex> = Lazy::new(|| Regex::new(r"[A-Za-z][A-Za-z'-]*").unwrap());

static ASCII_ALNUM: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9A-Za-z]+$").unwrap());

static EN_STOP: Lazy<HashSet<&'static str>> = Lazy::new(|| {
    "a an the of to in on for with and or as at by from is are was were be been being it its \
     that this those these which who whom whose will would can could should may might must do \
     does did have has had not no yes than then over under after before into out up down off \
     about across among between within without per through during despite because although \
     unless including upon around each other more most such many much one two three new same \
     own also just even still very really"
        .split_whitespace()
        .collect()
});

static ZH_STOP: Lazy<HashSet<String>> = Lazy::new(|| {
    "的一是在不了有和人这中大为上个国我以要他时来用们生到作地于出就分对成会可主发年动同工\
     也能下过子说产种面而方后多定行学法所民得经十三之进着等部度家电力里如水化高自二理起小\
     物现实加量都两体制机当使点从业本去把性好应开它合还因由其些然前外天政四日那社义事平形\
     相全表间样与关各重新线内数正心反你明看原又么利比或但质气第向道命此变条只没结解问意建\
     月公无系军很情者最立代想已通并提直题党程展五果料象员革位入常文总次品式活设及管特件长\
     求老儿尔两"
        .chars()
        .filter(|c| !c.is_whitespace())
        .map(|c| c.to_string())
        .collect()
});

static JIEBA: Lazy<Jieba> = Lazy::new(Jieba::new);

/// Frequency-ranked English vocabulary candidates.
///
/// Tokens must start with a letter (internal hyphens and apostrophes
/// allowed), survive the stop-word filter and a minimum length of three, and
/// be tagged as a content word. Counting and ranking are over the lowercased
/// form.
pub fn english_vocab(text: &str, topn: usize) -> Vec<String> {
    let tokens: Vec<&str> = EN_WORD.find_iter(text).map(|m| m.as_str()).collect();

    let survivors: Vec<&str> = tokens
        .into_iter()
        .filter(|w| w.len() > 2 && !EN_STOP.contains(w.to_lowercase().as_str()))
        .collect();

    let mut freq: HashMap<String, usize> = HashMap::new();
    for (word, tag) in pos::tag_tokens(&survivors) {
        if tag.is_content_word() {
            *freq.entry(word.to_lowercase()).or_insert(0) += 1;
        }
    }

    rank_terms(freq, topn)
}

/// Frequency-ranked Chinese vocabulary candidates.
///
/// Segments with jieba and keeps tokens of at least two characters that are
/// neither stop words nor purely ASCII alphanumeric.
pub fn chinese_vocab(text: &str, topn: usize) -> Vec<String> {
    let mut freq: HashMap<String, usize> = HashMap::new();
    for token in JIEBA.cut(text, false) {
        if token.chars().count() < 2 {
            continue;
        }
        if ZH_STOP.contains(token) {
            continue;
        }
        if ASCII_ALNUM.is_match(token) {
            continue;
        }
        *freq.entry(token.to_string()).or_insert(0) += 1;
    }

    rank_terms(freq, topn)
}

/// Sort by descending frequency, breaking ties by ascending lexical order,
/// and keep the top `topn`. The explicit tie-break makes the output fully
/// deterministic for a fixed input.
fn rank_terms(freq: HashMap<String, usize>, topn: usize) -> Vec<String> {
    let mut ranked: Vec<(String, usize)> = freq.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ranked.into_iter().take(topn).map(|(w, _)| w).collect()
}
