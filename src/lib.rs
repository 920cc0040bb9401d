pub mod config;
pub mod explain;
pub mod fetcher;
pub mod grammar;
pub mod notion;
pub mod picker;
pub mod pipeline;
pub mod pos;
pub mod text;
pub mod types;
pub mod vocab;

pub use config::DigestConfig;
pub use explain::{Explainer, GenerationMode};
pub use fetcher::ArticleFetcher;
pub use notion::NotionClient;
pub use picker::FeedPicker;
pub use pipeline::DigestPipeline;
pub use types::{AnnotatedPick, CandidateArticle, DigestError, Lang, Result};
