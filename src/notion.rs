use crate::types::{AnnotatedPick, DigestError, Lang, Result};
use reqwest::Client;
use serde_json::{json, Map, Value};
use std::time::Duration;
use tracing::info;

const NOTION_API_URL: &str = "https://api.notion.com/v1/pages";
const NOTION_VERSION: &str = "2022-06-28";

/// Publishes annotated picks as pages of a Notion database.
pub struct NotionClient {
    client: Client,
    token: String,
    database_id: String,
}

impl NotionClient {
    /// Build from the environment. Both variables are required; a missing
    /// one aborts the publishing phase.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("NOTION_TOKEN").map_err(|_| DigestError::MissingEnv {
            name: "NOTION_TOKEN",
        })?;
        let database_id = std::env::var("NOTION_DB_ID").map_err(|_| DigestError::MissingEnv {
            name: "NOTION_DB_ID",
        })?;

        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .expect("Failed to create HTTP client");

        Ok(Self {
            client,
            token,
            database_id,
        })
    }

    /// Create one database page for a pick, with its article properties and
    /// the rendered explanation blocks as children.
    pub async fn create_page(&self, pick: &AnnotatedPick, date_str: &str) -> Result<()> {
        let article = &pick.article;
        let body = json!({
            "parent": { "database_id": self.database_id },
            "properties": page_properties(
                &article.title,
                date_str,
                article.lang,
                &article.source,
                &article.url,
            ),
            "children": page_blocks(pick),
        });

        let response = self
            .client
            .post(NOTION_API_URL)
            .bearer_auth(&self.token)
            .header("Notion-Version", NOTION_VERSION)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(DigestError::Notion {
                status: status.as_u16(),
                message,
            });
        }

        info!("Created Notion page: {}", article.title);
        Ok(())
    }
}

/// Database properties for one pick: Title, Date, Language, Source, URL.
pub fn page_properties(
    title: &str,
    date_str: &str,
    lang: Lang,
    source: &str,
    url: &str,
) -> Value {
    json!({
        "Title": { "title": [{ "text": { "content": title } }] },
        "Date": { "date": { "start": date_str } },
        "Language": { "multi_select": [{ "name": lang.tag() }] },
        "Source": { "rich_text": [{ "text": { "content": source } }] },
        "URL": { "url": url },
    })
}

fn rich_text(content: &str) -> Value {
    json!([{ "type": "text", "text": { "content": content } }])
}

pub fn paragraph_block(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "paragraph",
        "paragraph": { "rich_text": rich_text(text) },
    })
}

pub fn heading_block(text: &str, level: u8) -> Value {
    let key = format!("heading_{}", level);
    let mut block = Map::new();
    block.insert("object".to_string(), json!("block"));
    block.insert("type".to_string(), Value::String(key.clone()));
    block.insert(key, json!({ "rich_text": rich_text(text) }));
    Value::Object(block)
}

pub fn bulleted_item(text: &str) -> Value {
    json!({
        "object": "block",
        "type": "bulleted_list_item",
        "bulleted_list_item": { "rich_text": rich_text(text) },
    })
}

/// Map explanation lines onto blocks: `## ` lines become level-3 headings,
/// `- ` lines become bullets, blank lines are dropped, everything else is a
/// paragraph.
pub fn explanation_blocks(explanation: &str) -> Vec<Value> {
    let mut blocks = Vec::new();
    for line in explanation.lines() {
        let trimmed = line.trim();
        if let Some(rest) = trimmed.strip_prefix("## ") {
            blocks.push(heading_block(rest, 3));
        } else if let Some(rest) = trimmed.strip_prefix("- ") {
            blocks.push(bulleted_item(rest));
        } else if trimmed.is_empty() {
            continue;
        } else {
            blocks.push(paragraph_block(trimmed));
        }
    }
    blocks
}

/// Whether any heading block already names a vocabulary or grammar section.
/// A literal substring scan over the rendered heading, kept as a known
/// heuristic: free-form generative output may phrase its sections
/// differently and still trigger the fallback below.
pub fn has_vocab_or_grammar_heading(blocks: &[Value]) -> bool {
    blocks.iter().any(|block| {
        let block_type = block["type"].as_str().unwrap_or("");
        if !block_type.starts_with("heading_") {
            return false;
        }
        let rendered = block.to_string();
        rendered.contains("語彙") || rendered.contains("文法")
    })
}

/// Fallback vocabulary table rendered as a heading plus bullet rows.
pub fn vocab_table_blocks(vocab: &[String]) -> Vec<Value> {
    let mut blocks = vec![heading_block("語彙（Vocab）", 3)];
    for w in vocab {
        blocks.push(bulleted_item(&format!("{}  —  {}", w, w)));
    }
    blocks
}

/// Fallback grammar list rendered as a heading plus bullet rows.
pub fn grammar_list_blocks(grammar: &[String]) -> Vec<Value> {
    let mut blocks = vec![heading_block("文法ポイント（検出）", 3)];
    for g in grammar {
        blocks.push(bulleted_item(g));
    }
    blocks
}

/// Full children list for a page: article header, explanation, and the
/// fallback vocabulary/grammar sections when the explanation carried none.
pub fn page_blocks(pick: &AnnotatedPick) -> Vec<Value> {
    let article = &pick.article;
    let mut blocks = vec![
        heading_block(&article.title, 2),
        paragraph_block(&format!("Source: {}", article.source)),
        paragraph_block(&article.url),
        heading_block("解説", 2),
    ];
    blocks.extend(explanation_blocks(&pick.explanation));

    if !has_vocab_or_grammar_heading(&blocks) {
        blocks.extend(vocab_table_blocks(&pick.vocab));
        if !pick.grammar.is_empty() {
            blocks.extend(grammar_list_blocks(&pick.grammar));
        }
    }

    blocks
}
