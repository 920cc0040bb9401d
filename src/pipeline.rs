use crate::config::DigestConfig;
use crate::explain::Explainer;
use crate::fetcher::ArticleFetcher;
use crate::grammar;
use crate::picker::FeedPicker;
use crate::types::{AnnotatedPick, CandidateArticle, Lang, Result};
use crate::vocab::{self, DEFAULT_TOPN};
use tracing::info;

/// One run of the digest: pick an article per target language, annotate each
/// with vocabulary and grammar points, and attach its explanation.
///
/// The run is fully sequential; every fetch, detection, and generation call
/// is awaited in order and nothing is shared across tasks.
pub struct DigestPipeline<'a> {
    config: &'a DigestConfig,
    fetcher: ArticleFetcher,
    explainer: Explainer,
}

impl<'a> DigestPipeline<'a> {
    pub fn new(config: &'a DigestConfig, explainer: Explainer) -> Self {
        Self {
            config,
            fetcher: ArticleFetcher::new(),
            explainer,
        }
    }

    /// Run the pipeline. Zero picks is a legitimate empty result, not an
    /// error; generative-mode failures propagate.
    pub async fn run(&self) -> Result<Vec<AnnotatedPick>> {
        let picker = FeedPicker::new(&self.fetcher, self.config);

        let en_pick = picker
            .pick_from_rss(&self.config.english_rss, Lang::En)
            .await;
        let zh_pick = picker
            .pick_from_rss(&self.config.chinese_rss, Lang::Zh)
            .await;

        let picks: Vec<CandidateArticle> = [en_pick, zh_pick]
            .into_iter()
            .flatten()
            .take(self.config.items_per_lang * 2)
            .collect();
        info!("Run picked {} article(s)", picks.len());

        let mut annotated = Vec::with_capacity(picks.len());
        for article in picks {
            annotated.push(self.annotate(article).await?);
        }
        Ok(annotated)
    }

    async fn annotate(&self, article: CandidateArticle) -> Result<AnnotatedPick> {
        let (vocab, grammar) = match article.lang {
            Lang::En => (
                vocab::english_vocab(&article.body, DEFAULT_TOPN),
                grammar::english_grammar_points(&article.body),
            ),
            Lang::Zh => (
                vocab::chinese_vocab(&article.body, DEFAULT_TOPN),
                grammar::chinese_grammar_points(&article.body),
            ),
        };
        info!(
            "Annotated {} pick: {} vocab term(s), {} grammar point(s)",
            article.lang.tag(),
            vocab.len(),
            grammar.len()
        );

        let explanation = self
            .explainer
            .explain(article.lang, &article.title, &article.body, &vocab, &grammar)
            .await?;

        Ok(AnnotatedPick {
            article,
            vocab,
            grammar,
            explanation,
        })
    }
}
