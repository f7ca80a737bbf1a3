//! Page fetching
//!
//! The pipeline only depends on the `PageFetcher` trait; the HTTP
//! implementation here is the default collaborator wired in by
//! `Analyzer::new`. Embedding callers can substitute their own.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use url::Url;

use crate::types::{FetchedPage, PageMetadata};

/// Page-fetch collaborator contract.
#[async_trait]
pub trait PageFetcher: Send + Sync {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage>;
}

/// Default fetcher: one GET through the analyzer's shared client,
/// which carries the configured user agent and page timeout.
pub struct HttpPageFetcher {
    client: reqwest::Client,
}

impl HttpPageFetcher {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PageFetcher for HttpPageFetcher {
    async fn fetch(&self, url: &Url) -> Result<FetchedPage> {
        let response = self
            .client
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("request to {url} failed"))?
            .error_for_status()
            .context("page responded with an error status")?;

        let html = response.text().await.context("could not read page body")?;
        if html.trim().is_empty() {
            bail!("page at {url} returned an empty body");
        }

        let metadata = extract_metadata(&html);
        Ok(FetchedPage { html, metadata })
    }
}

static TITLE: Lazy<Selector> =
    Lazy::new(|| Selector::parse("title").expect("invalid title selector"));
static META_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[name="description"]"#).expect("invalid description selector")
});
static OG_DESCRIPTION: Lazy<Selector> = Lazy::new(|| {
    Selector::parse(r#"meta[property="og:description"]"#).expect("invalid og selector")
});

/// Title and description as the document declares them; empty values
/// are treated as absent.
pub fn extract_metadata(html: &str) -> PageMetadata {
    let document = Html::parse_document(html);

    let title = document
        .select(&TITLE)
        .next()
        .map(|element| element.text().collect::<String>().trim().to_string())
        .filter(|title| !title.is_empty());

    let description = document
        .select(&META_DESCRIPTION)
        .next()
        .and_then(|element| element.value().attr("content"))
        .or_else(|| {
            document
                .select(&OG_DESCRIPTION)
                .next()
                .and_then(|element| element.value().attr("content"))
        })
        .map(|content| content.trim().to_string())
        .filter(|description| !description.is_empty());

    PageMetadata { title, description }
}
