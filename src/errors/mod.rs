use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinFeedError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    // Feed errors
    #[error("Feed parsing failed: {0}")]
    FeedParse(String),

    // Network errors
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    // Scrape errors
    #[error("HTML extraction failed: {0}")]
    Extract(String),

    // Serialization errors
    #[error("XML write failed: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("JSON write failed: {0}")]
    Json(#[from] serde_json::Error),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type FinFeedResult<T> = Result<T, FinFeedError>;
