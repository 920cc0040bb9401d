//! Small rule-based part-of-speech tagger for the English vocabulary
//! extractor.
//!
//! Coarse by design: the extractor only needs to keep content words (nouns,
//! verbs, adjectives, foreign terms) and drop adverbs and leftover function
//! words that survived the stop-word filter.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PosTag {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Function,
    Foreign,
}

impl PosTag {
    /// Tags the vocabulary extractor keeps as candidate terms.
    pub fn is_content_word(&self) -> bool {
        matches!(
            self,
            PosTag::Noun | PosTag::Verb | PosTag::Adjective | PosTag::Foreign
        )
    }
}

/// Closed-class words that carry no vocabulary value but are not in the
/// stop-word set.
const FUNCTION_WORDS: &[&str] = &[
    "there", "here", "when", "where", "while", "how", "why", "what", "who", "whom", "whose",
    "them", "they", "she", "him", "her", "his", "hers", "its", "our", "ours", "your", "yours",
    "their", "theirs", "these", "those", "some", "any", "none", "both", "either", "neither",
    "again", "once", "too", "only", "now", "then", "ever", "never", "always", "often",
    "sometimes", "however", "therefore", "moreover", "meanwhile", "instead", "rather", "quite",
    "almost", "already", "yet", "soon",
];

/// Irregular and high-frequency verb forms the suffix rules would miss.
const COMMON_VERBS: &[&str] = &[
    "said", "says", "say", "made", "make", "makes", "told", "tells", "tell", "took", "take",
    "takes", "went", "goes", "come", "comes", "came", "get", "gets", "got", "become", "becomes",
    "became", "know", "knows", "knew", "see", "sees", "saw", "seen", "give", "gives", "gave",
    "found", "find", "finds", "keep", "keeps", "kept", "let", "lets", "begin", "begins", "began",
    "show", "shows", "showed", "run", "runs", "ran", "grow", "grows", "grew", "held", "hold",
    "holds", "bring", "brings", "brought", "put", "puts", "set", "sets",
];

/// Tag a single token. Any token containing non-ASCII letters counts as a
/// foreign word; the rest is suffix heuristics with noun as the default,
/// which matches how news prose skews.
pub fn tag_word(word: &str) -> PosTag {
    if word.chars().any(|c| !c.is_ascii()) {
        return PosTag::Foreign;
    }

    let lower = word.to_lowercase();
    if FUNCTION_WORDS.contains(&lower.as_str()) {
        return PosTag::Function;
    }
    if COMMON_VERBS.contains(&lower.as_str()) {
        return PosTag::Verb;
    }
    if lower.len() > 4 && lower.ends_with("ly") {
        return PosTag::Adverb;
    }
    if lower.ends_with("ing")
        || lower.ends_with("ed")
        || lower.ends_with("ise")
        || lower.ends_with("ize")
        || lower.ends_with("ify")
    {
        return PosTag::Verb;
    }
    if lower.ends_with("ous")
        || lower.ends_with("ful")
        || lower.ends_with("ive")
        || lower.ends_with("able")
        || lower.ends_with("ible")
        || lower.ends_with("ical")
        || lower.ends_with("less")
        || lower.ends_with("ish")
    {
        return PosTag::Adjective;
    }

    PosTag::Noun
}

/// Tag a token sequence, pairing each token with its tag.
pub fn tag_tokens<'s>(tokens: &[&'s str]) -> Vec<(&'s str, PosTag)> {
    tokens.iter().map(|t| (*t, tag_word(t))).collect()
}
