use serde::{Deserialize, Serialize};

/// Target language for a daily pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Lang {
    En,
    Zh,
}

impl Lang {
    /// Tag used in page properties and log lines.
    pub fn tag(&self) -> &'static str {
        match self {
            Lang::En => "EN",
            Lang::Zh => "ZH",
        }
    }

    /// Whether a detected language falls under this target's primary subtag.
    ///
    /// Feed content does not always match the feed's nominal language, so the
    /// picker re-checks every body against the requested target.
    pub fn matches_detected(&self, detected: whatlang::Lang) -> bool {
        match self {
            Lang::En => detected == whatlang::Lang::Eng,
            Lang::Zh => detected == whatlang::Lang::Cmn,
        }
    }
}

/// A fetched, filtered, language-confirmed article ready for annotation.
///
/// Constructed only by the feed picker once every filter has passed;
/// immutable afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CandidateArticle {
    pub title: String,
    pub url: String,
    pub body: String,
    pub lang: Lang,
    pub source: String,
}

/// A candidate article together with its derived annotations, the hand-off
/// unit for publishing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnnotatedPick {
    pub article: CandidateArticle,
    pub vocab: Vec<String>,
    pub grammar: Vec<String>,
    pub explanation: String,
}

#[derive(Debug, thiserror::Error)]
pub enum DigestError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Missing environment variable: {name}")]
    MissingEnv { name: &'static str },

    #[error("Notion API error (HTTP {status}): {message}")]
    Notion { status: u16, message: String },

    #[error("Generation error: {0}")]
    Generation(String),
}

pub type Result<T> = std::result::Result<T, DigestError>;
