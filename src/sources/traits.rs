use chrono::{DateTime, Utc};

use crate::errors::FinFeedResult;

/// One item as it came out of a structured feed, before normalization.
/// Every field is optional; the collect service applies the defaults.
#[derive(Debug, Clone, Default)]
pub struct FeedItem {
    pub title: Option<String>,
    pub link: Option<String>,
    pub summary: Option<String>,
    pub published: Option<DateTime<Utc>>,
}

/// One article-like block pulled out of raw HTML by the fallback path.
/// Defaults are already applied here: the scrape heuristic has nothing
/// better to offer than the placeholder.
#[derive(Debug, Clone)]
pub struct ScrapedArticle {
    pub title: String,
    pub link: String,
    pub summary: String,
}

/// Structured feed retrieval: fetch a URL and parse it as RSS/Atom.
#[cfg_attr(test, mockall::automock)]
pub trait FeedFetcher {
    fn fetch(&self, url: &str) -> FinFeedResult<Vec<FeedItem>>;
}

/// Best-effort article extraction from arbitrary HTML. Pluggable so the
/// heuristic can be swapped or stubbed without touching pipeline logic.
#[cfg_attr(test, mockall::automock)]
pub trait ArticleExtractor {
    fn extract(&self, url: &str) -> FinFeedResult<Vec<ScrapedArticle>>;
}
