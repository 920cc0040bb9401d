use crate::text::{char_len, truncate_chars};
use crate::types::{DigestError, Lang, Result};
use reqwest::Client;
use serde_json::json;
use std::time::Duration;
use tracing::debug;

/// Rule-based summaries are cut to this many characters.
pub const SUMMARY_CHARS: usize = 300;

/// The generative prompt embeds at most this many characters of body text.
const PROMPT_BODY_CHARS: usize = 2000;

const OPENAI_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-4o-mini";

/// How explanations are produced for the whole run. Resolved once at
/// startup and never changed mid-run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationMode {
    Generative,
    RuleBased,
}

impl GenerationMode {
    /// The generative path needs both the configuration flag and a
    /// non-empty credential; anything less downgrades to rule-based mode.
    pub fn resolve(use_generative: bool, api_key: Option<&str>) -> Self {
        match api_key {
            Some(key) if use_generative && !key.is_empty() => GenerationMode::Generative,
            _ => GenerationMode::RuleBased,
        }
    }
}

/// Produces the learner-facing explanation for one annotated article.
pub struct Explainer {
    mode: GenerationMode,
    client: Client,
    api_key: Option<String>,
}

impl Explainer {
    pub fn new(mode: GenerationMode, api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            mode,
            client,
            api_key,
        }
    }

    pub fn mode(&self) -> GenerationMode {
        self.mode
    }

    /// Explain the article in Japanese: a short summary plus vocabulary and
    /// grammar commentary. Generative failures propagate; the rule-based
    /// path cannot fail.
    pub async fn explain(
        &self,
        lang: Lang,
        title: &str,
        body: &str,
        vocab: &[String],
        grammar: &[String],
    ) -> Result<String> {
        match self.mode {
            GenerationMode::RuleBased => Ok(rule_based_explain(body, vocab, grammar)),
            GenerationMode::Generative => {
                self.generative_explain(lang, title, body, vocab, grammar).await
            }
        }
    }

    async fn generative_explain(
        &self,
        lang: Lang,
        title: &str,
        body: &str,
        vocab: &[String],
        grammar: &[String],
    ) -> Result<String> {
        let key = self
            .api_key
            .as_deref()
            .ok_or(DigestError::MissingEnv {
                name: "OPENAI_API_KEY",
            })?;

        let prompt = build_prompt(lang, title, body, vocab, grammar);
        debug!("Requesting explanation ({} prompt chars)", char_len(&prompt));

        let response = self
            .client
            .post(OPENAI_URL)
            .bearer_auth(key)
            .json(&json!({
                "model": OPENAI_MODEL,
                "messages": [{ "role": "user", "content": prompt }],
                "temperature": 0.2,
            }))
            .send()
            .await?;

        let status = response.status();
        let payload: serde_json::Value = response.json().await?;
        if !status.is_success() {
            return Err(DigestError::Generation(format!(
                "HTTP {}: {}",
                status, payload
            )));
        }

        payload["choices"][0]["message"]["content"]
            .as_str()
            .map(|s| s.to_string())
            .ok_or_else(|| {
                DigestError::Generation("response carried no message content".to_string())
            })
    }
}

/// Single prompt for the generative collaborator: Japanese summary plus
/// vocabulary and grammar commentary over the article.
pub fn build_prompt(
    lang: Lang,
    title: &str,
    body: &str,
    vocab: &[String],
    grammar: &[String],
) -> String {
    let language_name = match lang {
        Lang::En => "英語",
        Lang::Zh => "中国語",
    };
    format!(
        "以下は{}記事です。日本語で要約（3-4文）し、語彙と文法を解説してください。\n候補語彙: {}\n検出文法: {}\nタイトル: {}\n本文: {}",
        language_name,
        vocab.join(", "),
        grammar.join(", "),
        title,
        truncate_chars(body, PROMPT_BODY_CHARS),
    )
}

/// Deterministic fallback: the body truncated to [`SUMMARY_CHARS`] as the
/// summary, each vocabulary term with a fixed suffix, and each grammar label
/// verbatim, under three fixed section headers.
pub fn rule_based_explain(body: &str, vocab: &[String], grammar: &[String]) -> String {
    let summary = if char_len(body) > SUMMARY_CHARS {
        format!("{}...", truncate_chars(body, SUMMARY_CHARS))
    } else {
        body.to_string()
    };

    let mut lines = vec![
        "## 要約".to_string(),
        format!("- {}", summary),
        String::new(),
        "## 語彙（簡易）".to_string(),
    ];
    for w in vocab {
        lines.push(format!("- {} : 重要語（頻出度ベース）", w));
    }
    lines.push(String::new());
    lines.push("## 文法ポイント".to_string());
    for g in grammar {
        lines.push(format!("- {}", g));
    }

    lines.join("\n")
}
