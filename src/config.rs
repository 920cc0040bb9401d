use crate::types::Result;
use serde::Deserialize;
use std::path::Path;

/// Run configuration, read once at startup and passed by reference to every
/// component that needs it.
#[derive(Debug, Clone, Deserialize)]
pub struct DigestConfig {
    /// How many articles to keep per target language.
    #[serde(default = "default_items_per_lang")]
    pub items_per_lang: usize,

    /// Minimum accepted body length, in characters.
    #[serde(default = "default_min_chars")]
    pub min_chars: usize,

    /// Maximum accepted body length, in characters.
    #[serde(default = "default_max_chars")]
    pub max_chars: usize,

    /// Whether to ask the generative model for explanations. Downgraded to
    /// rule-based mode when no credential is available.
    #[serde(default = "default_use_generative")]
    pub use_generative: bool,

    /// Candidate RSS feeds for the English pick.
    #[serde(default)]
    pub english_rss: Vec<String>,

    /// Candidate RSS feeds for the Chinese pick.
    #[serde(default)]
    pub chinese_rss: Vec<String>,
}

fn default_items_per_lang() -> usize {
    1
}

fn default_min_chars() -> usize {
    800
}

fn default_max_chars() -> usize {
    8000
}

fn default_use_generative() -> bool {
    true
}

impl Default for DigestConfig {
    fn default() -> Self {
        Self {
            items_per_lang: default_items_per_lang(),
            min_chars: default_min_chars(),
            max_chars: default_max_chars(),
            use_generative: default_use_generative(),
            english_rss: Vec::new(),
            chinese_rss: Vec::new(),
        }
    }
}

/// Load the configuration from a JSON file. Missing fields fall back to
/// their defaults; a missing file is an error.
pub fn load<P: AsRef<Path>>(path: P) -> Result<DigestConfig> {
    let raw = std::fs::read_to_string(path)?;
    let config = serde_json::from_str(&raw)?;
    Ok(config)
}
