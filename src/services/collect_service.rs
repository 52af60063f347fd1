use chrono::Duration;

use crate::domain::{Entry, Source, DEFAULT_TITLE};
use crate::errors::FinFeedError;
use crate::services::clock::{Clock, SystemClock};
use crate::sources::{ArticleExtractor, FeedClient, FeedFetcher, FeedItem, HeuristicExtractor};

/// How a per-source failure is absorbed. A structured-fetch failure is
/// logged and recovered by scraping; a scrape failure is swallowed without
/// output. Neither mode ever aborts the run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Recovery {
    Logged,
    Silent,
}

/// The fetch-normalize-merge pipeline. Processes each source in isolation
/// and always returns a result set, possibly empty.
pub struct CollectService<F: FeedFetcher, X: ArticleExtractor, C: Clock> {
    fetcher: F,
    extractor: X,
    clock: C,
}

impl CollectService<FeedClient, HeuristicExtractor, SystemClock> {
    pub fn with_defaults() -> Self {
        Self::new(FeedClient::new(), HeuristicExtractor::new(), SystemClock)
    }
}

impl<F: FeedFetcher, X: ArticleExtractor, C: Clock> CollectService<F, X, C> {
    pub fn new(fetcher: F, extractor: X, clock: C) -> Self {
        Self {
            fetcher,
            extractor,
            clock,
        }
    }

    /// Collect entries published within `window` of now across all sources,
    /// merged and sorted most recent first.
    pub fn collect_recent(&self, sources: &[Source], window: Duration) -> Vec<Entry> {
        let cutoff = self.clock.now() - window;
        let mut entries = Vec::new();

        for source in sources {
            match self.fetcher.fetch(&source.url) {
                Ok(items) => {
                    for item in items {
                        let entry = self.normalize(item, &source.name);
                        // Strictly-after cutoff; older items are dropped,
                        // not an error.
                        if entry.pub_date > cutoff {
                            entries.push(entry);
                        }
                    }
                }
                Err(e) => {
                    self.absorb(source, Recovery::Logged, &e);
                    self.scrape_fallback(source, &mut entries);
                }
            }
        }

        // Stable sort: ties keep input order.
        entries.sort_by(|a, b| b.pub_date.cmp(&a.pub_date));
        entries
    }

    /// Missing-date rule: an item with no parseable publish date is stamped
    /// with the current clock reading so every entry sorts. This can
    /// misorder genuinely undated items; it is a documented approximation.
    fn normalize(&self, item: FeedItem, source: &str) -> Entry {
        Entry::new(
            item.title.unwrap_or_else(|| DEFAULT_TITLE.to_string()),
            item.link.unwrap_or_default(),
            item.summary.unwrap_or_default(),
            source.to_string(),
            item.published.unwrap_or_else(|| self.clock.now()),
        )
    }

    /// Best-effort scrape of the source page. Fallback items carry the
    /// current clock reading and bypass the recency window entirely.
    fn scrape_fallback(&self, source: &Source, entries: &mut Vec<Entry>) {
        match self.extractor.extract(&source.url) {
            Ok(articles) => {
                let now = self.clock.now();
                for article in articles {
                    entries.push(Entry::new(
                        article.title,
                        article.link,
                        article.summary,
                        source.name.clone(),
                        now,
                    ));
                }
            }
            Err(e) => self.absorb(source, Recovery::Silent, &e),
        }
    }

    fn absorb(&self, source: &Source, recovery: Recovery, err: &FinFeedError) {
        match recovery {
            Recovery::Logged => eprintln!("Error fetching {}: {}", source.name, err),
            Recovery::Silent => {}
        }
    }
}
