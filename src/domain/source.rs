use serde::{Deserialize, Serialize};

/// A named news source: the display name entries are tagged with, plus the
/// URL to fetch. URLs are not validated here; a bad one surfaces as a fetch
/// failure downstream.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Source {
    pub name: String,
    pub url: String,
}

impl Source {
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}
