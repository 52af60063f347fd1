use std::fs;

use crate::cli::Cli;
use crate::domain::Source;
use crate::errors::{FinFeedError, FinFeedResult};

#[derive(Debug, Clone)]
pub struct Config {
    pub window_hours: i64,
    pub xml_output: String,
    pub json_output: String,
    pub sources: Vec<Source>,
}

impl Config {
    pub fn from_cli(cli: &Cli) -> FinFeedResult<Self> {
        let sources = match &cli.sources {
            Some(path) => Self::load_sources(path)?,
            None => Self::default_sources(),
        };

        Ok(Self {
            window_hours: cli.hours,
            xml_output: cli.xml_output.clone(),
            json_output: cli.json_output.clone(),
            sources,
        })
    }

    fn load_sources(path: &str) -> FinFeedResult<Vec<Source>> {
        let content = fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| FinFeedError::Config(format!("invalid source table {}: {}", path, e)))
    }

    /// Built-in finance source table. Several sites publish no per-section
    /// feed, so some URLs point at a sitewide feed instead.
    pub fn default_sources() -> Vec<Source> {
        vec![
            Source::new("Interfax Business", "https://rss.interfax.ru/r/304"),
            Source::new("BCS Valyutnyy Rynok", "https://bcs-express.ru/feed/"),
            Source::new("BCS Rossiyiskiy Rynok", "https://bcs-express.ru/feed/"),
            Source::new(
                "RBC Quote",
                "https://static.feed.rbc.ru/rbc/logical/footer/news.rss",
            ),
            Source::new("RG Ekonomika", "https://rg.ru/xml/index.xml"),
            Source::new("InvestFuture", "https://investfuture.ru/feed/"),
            Source::new(
                "AlfaCapital TG",
                "https://twitrss.me/twitter_user_to_rss/?user=alfacapital",
            ),
            Source::new(
                "BCS Express TG",
                "https://twitrss.me/twitter_user_to_rss/?user=bcs_express",
            ),
            Source::new(
                "Kommersant Finance",
                "https://www.kommersant.ru/RSS/finance.xml",
            ),
        ]
    }
}
