use crate::config::DigestConfig;
use crate::fetcher::ArticleFetcher;
use crate::text::{char_len, normalize_spaces, truncate_chars};
use crate::types::{CandidateArticle, Lang};
use feed_rs::parser;
use rand::seq::SliceRandom;
use tracing::{debug, info, warn};
use url::Url;

/// How many entries of a single feed are considered, in feed order. Keeps
/// network cost bounded while scanning.
const MAX_ENTRIES_PER_FEED: usize = 10;

/// Language detection runs over this many leading characters of the body.
const DETECT_SAMPLE_CHARS: usize = 1000;

/// Picks the first acceptable article for a target language from a pool of
/// RSS feeds.
///
/// Feeds are visited in uniformly random order so no single source is
/// favored across runs; within a feed, entries are scanned in feed order and
/// the first entry passing every filter wins. This is first-acceptance, not
/// best-of-many selection.
pub struct FeedPicker<'a> {
    fetcher: &'a ArticleFetcher,
    min_chars: usize,
    max_chars: usize,
}

impl<'a> FeedPicker<'a> {
    pub fn new(fetcher: &'a ArticleFetcher, config: &DigestConfig) -> Self {
        Self {
            fetcher,
            min_chars: config.min_chars,
            max_chars: config.max_chars,
        }
    }

    /// Whether a body passes the configured length bounds (character count).
    pub fn accepts_length(&self, body: &str) -> bool {
        let len = char_len(body);
        len >= self.min_chars && len <= self.max_chars
    }

    /// Scan the shuffled feed list and return the first article whose body
    /// passes the length bounds and whose detected language matches
    /// `want_lang`. Returns `None` when every feed and entry is exhausted.
    pub async fn pick_from_rss(
        &self,
        feeds: &[String],
        want_lang: Lang,
    ) -> Option<CandidateArticle> {
        let mut order: Vec<&String> = feeds.iter().collect();
        order.shuffle(&mut rand::thread_rng());

        for feed_url in order {
            let Some(content) = self.fetcher.fetch_raw(feed_url).await else {
                warn!("Skipping unreachable feed: {}", feed_url);
                continue;
            };

            let feed = match parser::parse(content.as_bytes()) {
                Ok(feed) => feed,
                Err(e) => {
                    warn!("Skipping unparsable feed {}: {}", feed_url, e);
                    continue;
                }
            };

            for entry in feed.entries.into_iter().take(MAX_ENTRIES_PER_FEED) {
                let Some(link) = entry.links.first() else {
                    continue;
                };
                let url = link.href.clone();
                let title =
                    normalize_spaces(&entry.title.map(|t| t.content).unwrap_or_default());

                let Some(body) = self.fetcher.fetch_article(&url).await else {
                    debug!("No usable body for {}", url);
                    continue;
                };

                if !self.accepts_length(&body) {
                    debug!(
                        "Body length {} outside [{}, {}] for {}",
                        char_len(&body),
                        self.min_chars,
                        self.max_chars,
                        url
                    );
                    continue;
                }

                let sample = truncate_chars(&body, DETECT_SAMPLE_CHARS);
                let Some(detected) = whatlang::detect_lang(sample) else {
                    debug!("Language detection failed for {}", url);
                    continue;
                };

                if !want_lang.matches_detected(detected) {
                    debug!(
                        "Detected {:?} but wanted {} for {}",
                        detected,
                        want_lang.tag(),
                        url
                    );
                    continue;
                }

                let source = source_from_feed_url(feed_url);
                info!(
                    "Picked {} article from {}: {}",
                    want_lang.tag(),
                    source,
                    title
                );
                return Some(CandidateArticle {
                    title,
                    url,
                    body,
                    lang: want_lang,
                    source,
                });
            }
        }

        None
    }
}

/// Source name for a pick: the feed URL host with a leading `www.` stripped.
pub fn source_from_feed_url(feed_url: &str) -> String {
    let host = Url::parse(feed_url)
        .ok()
        .and_then(|u| u.host_str().map(|h| h.to_string()))
        .unwrap_or_else(|| feed_url.to_string());
    host.strip_prefix("www.").unwrap_or(&host).to_string()
}
