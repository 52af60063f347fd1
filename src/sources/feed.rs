use feed_rs::parser;
use reqwest::blocking::Client;

use crate::errors::{FinFeedError, FinFeedResult};
use crate::sources::traits::{FeedFetcher, FeedItem};

/// Blocking HTTP + feed-rs retrieval of a structured RSS/Atom feed.
pub struct FeedClient {
    client: Client,
}

impl FeedClient {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    fn fetch_and_parse(&self, url: &str) -> FinFeedResult<feed_rs::model::Feed> {
        let response = self.client.get(url).send()?;
        let bytes = response.bytes()?;

        Self::parse_bytes(&bytes)
    }

    fn parse_bytes(bytes: &[u8]) -> FinFeedResult<feed_rs::model::Feed> {
        parser::parse(bytes).map_err(|e| FinFeedError::FeedParse(e.to_string()))
    }

    fn items_from_feed(feed: feed_rs::model::Feed) -> Vec<FeedItem> {
        feed.entries
            .into_iter()
            .map(|entry| FeedItem {
                title: entry.title.map(|t| t.content),
                link: entry.links.into_iter().next().map(|l| l.href),
                summary: entry.summary.map(|s| s.content),
                // Atom feeds often carry only an updated timestamp
                published: entry.published.or(entry.updated),
            })
            .collect()
    }

    /// Parse items from raw feed bytes (used for testing)
    #[cfg(test)]
    fn items_from_bytes(bytes: &[u8]) -> FinFeedResult<Vec<FeedItem>> {
        Ok(Self::items_from_feed(Self::parse_bytes(bytes)?))
    }
}

impl Default for FeedClient {
    fn default() -> Self {
        Self::new()
    }
}

impl FeedFetcher for FeedClient {
    fn fetch(&self, url: &str) -> FinFeedResult<Vec<FeedItem>> {
        let parsed = self.fetch_and_parse(url)?;
        Ok(Self::items_from_feed(parsed))
    }
}
