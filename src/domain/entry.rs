use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Placeholder used when a feed item or scraped block carries no title.
pub const DEFAULT_TITLE: &str = "No title";

/// One normalized news item. `pub_date` is always concrete: items whose feed
/// carries no parseable date get the fetch-time clock value instead, which
/// can misrepresent ordering for undated items but guarantees every entry
/// sorts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    pub title: String,
    pub link: String,
    pub summary: String,
    pub source: String,
    pub pub_date: DateTime<Utc>,
}

impl Entry {
    pub fn new(
        title: String,
        link: String,
        summary: String,
        source: String,
        pub_date: DateTime<Utc>,
    ) -> Self {
        Self {
            title,
            link,
            summary,
            source,
            pub_date,
        }
    }
}
