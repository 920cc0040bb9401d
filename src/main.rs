use anyhow::Context;
use chrono::Utc;
use chrono_tz::Asia::Tokyo;
use clap::Parser;
use lingo_digest::{config, DigestPipeline, Explainer, GenerationMode, NotionClient};
use tracing::info;

/// Daily language-learning news digest generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the JSON configuration file
    #[arg(short, long, default_value = "config.json")]
    config: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    let args = Args::parse();
    let config = config::load(&args.config)
        .with_context(|| format!("failed to load config from {}", args.config))?;
    info!(
        "Loaded config: {} EN feed(s), {} ZH feed(s), body bounds [{}, {}]",
        config.english_rss.len(),
        config.chinese_rss.len(),
        config.min_chars,
        config.max_chars
    );

    let api_key = std::env::var("OPENAI_API_KEY").ok();
    let mode = GenerationMode::resolve(config.use_generative, api_key.as_deref());
    info!("Explanation mode: {:?}", mode);

    let pipeline = DigestPipeline::new(&config, Explainer::new(mode, api_key));
    let picks = pipeline.run().await?;

    if picks.is_empty() {
        info!("No feed yielded an acceptable article");
        println!("No items picked.");
        return Ok(());
    }

    let notion = NotionClient::from_env().context("Notion credentials are required to publish")?;
    let date_str = Utc::now().with_timezone(&Tokyo).format("%Y-%m-%d").to_string();

    for pick in &picks {
        notion.create_page(pick, &date_str).await?;
    }
    info!("Published {} page(s)", picks.len());

    Ok(())
}
