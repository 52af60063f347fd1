use reqwest::blocking::Client;
use scraper::{Html, Selector};
use url::Url;

use crate::domain::DEFAULT_TITLE;
use crate::errors::FinFeedResult;
use crate::sources::traits::{ArticleExtractor, ScrapedArticle};

/// Cap on how many article blocks one page may contribute.
const MAX_ARTICLES: usize = 5;

/// Default scrape heuristic: grab `<article>` blocks from the page and pull
/// a heading, an anchor and a paragraph out of each. Source HTML structure
/// is unconstrained, so this path is inherently best-effort.
pub struct HeuristicExtractor {
    client: Client,
}

impl HeuristicExtractor {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }

    /// Feed URLs usually serve XML; strip a literal `/feed/` suffix on the
    /// assumption that the path above it serves the HTML listing.
    fn page_url(url: &str) -> String {
        match Url::parse(url) {
            Ok(mut parsed) if parsed.path().ends_with("/feed/") => {
                let trimmed = parsed.path().trim_end_matches("feed/").to_string();
                parsed.set_path(&trimmed);
                parsed.to_string()
            }
            _ => url.to_string(),
        }
    }

    fn articles_from_html(document: &Html) -> Vec<ScrapedArticle> {
        let article_sel = Selector::parse("article").unwrap();
        let heading_sel = Selector::parse("h1, h2, h3").unwrap();
        let anchor_sel = Selector::parse("a[href]").unwrap();
        let para_sel = Selector::parse("p").unwrap();

        document
            .select(&article_sel)
            .take(MAX_ARTICLES)
            .map(|block| {
                let title = block
                    .select(&heading_sel)
                    .next()
                    .map(|h| h.text().collect::<String>().trim().to_string())
                    .unwrap_or_else(|| DEFAULT_TITLE.to_string());

                let link = block
                    .select(&anchor_sel)
                    .next()
                    .and_then(|a| a.value().attr("href"))
                    .unwrap_or_default()
                    .to_string();

                let summary = block
                    .select(&para_sel)
                    .next()
                    .map(|p| p.text().collect::<String>().trim().to_string())
                    .unwrap_or_default();

                ScrapedArticle {
                    title,
                    link,
                    summary,
                }
            })
            .collect()
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ArticleExtractor for HeuristicExtractor {
    fn extract(&self, url: &str) -> FinFeedResult<Vec<ScrapedArticle>> {
        let response = self.client.get(Self::page_url(url).as_str()).send()?;
        let html = response.text()?;
        let document = Html::parse_document(&html);

        Ok(Self::articles_from_html(&document))
    }
}
