pub mod feed;
pub mod scrape;
pub mod traits;

pub use feed::FeedClient;
pub use scrape::HeuristicExtractor;
pub use traits::{ArticleExtractor, FeedFetcher, FeedItem, ScrapedArticle};
