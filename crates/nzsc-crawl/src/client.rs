//! HTTP client for the courts website.
//!
//! [`CourtClient`] sends every request with a desktop-browser user agent and a
//! per-request timeout. The [`JudgmentSource`] impl is the fail-soft boundary:
//! errors are logged with the offending URL and turned into `None` or empty
//! text, so nothing past it ever sees a transport error.

use std::time::Duration;

use async_trait::async_trait;
use nzsc_core::CrawlConfig;
use scraper::Html;
use tracing::{debug, warn};

use crate::pdf::extract_pdf_bytes;
use crate::{ExtractError, FetchError};

/// A successfully fetched HTML page.
#[derive(Debug, Clone)]
pub struct Page {
    pub body: String,
}

impl Page {
    /// Parse the body leniently; malformed markup never fails.
    pub fn document(&self) -> Html {
        Html::parse_document(&self.body)
    }
}

/// Where the crawler gets its pages and judgment text from.
///
/// Implementations must not fail: a page that could not be fetched is `None`
/// and a PDF that could not be read is the empty string.
#[async_trait]
pub trait JudgmentSource {
    async fn fetch_page(&self, url: &str, query: &[(&str, String)]) -> Option<Page>;

    async fn judgment_text(&self, pdf_url: &str) -> String;
}

/// reqwest-backed client for listing pages, detail pages and judgment PDFs.
pub struct CourtClient {
    client: reqwest::Client,
    page_timeout: Duration,
    pdf_timeout: Duration,
}

impl CourtClient {
    pub fn new(config: &CrawlConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.as_str())
            .build()?;
        Ok(Self {
            client,
            page_timeout: config.page_timeout,
            pdf_timeout: config.pdf_timeout,
        })
    }

    /// GET an HTML page. Any non-2xx status is an error.
    pub async fn get_page(&self, url: &str, query: &[(&str, String)]) -> Result<Page, FetchError> {
        let resp = self
            .client
            .get(url)
            .query(query)
            .timeout(self.page_timeout)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }

        let final_url = resp.url().to_string();
        let body = resp.text().await?;
        debug!(url = %final_url, bytes = body.len(), "fetched page");
        Ok(Page { body })
    }

    /// GET a binary resource with the longer PDF timeout.
    pub async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, FetchError> {
        let resp = self
            .client
            .get(url)
            .timeout(self.pdf_timeout)
            .send()
            .await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url: resp.url().to_string(),
            });
        }
        Ok(resp.bytes().await?.to_vec())
    }

    /// Download a judgment PDF and extract its text on the blocking pool.
    pub async fn download_text(&self, pdf_url: &str) -> Result<String, ExtractError> {
        let bytes = self.get_bytes(pdf_url).await?;
        debug!(url = pdf_url, bytes = bytes.len(), "downloaded PDF");
        let text = tokio::task::spawn_blocking(move || extract_pdf_bytes(&bytes)).await??;
        Ok(text)
    }
}

#[async_trait]
impl JudgmentSource for CourtClient {
    async fn fetch_page(&self, url: &str, query: &[(&str, String)]) -> Option<Page> {
        match self.get_page(url, query).await {
            Ok(page) => Some(page),
            Err(e) => {
                warn!(url, error = %e, "error fetching page");
                None
            }
        }
    }

    async fn judgment_text(&self, pdf_url: &str) -> String {
        match self.download_text(pdf_url).await {
            Ok(text) => text,
            Err(e) => {
                warn!(url = pdf_url, error = %e, "error processing PDF");
                String::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scraper::Selector;

    fn client() -> CourtClient {
        CourtClient::new(&CrawlConfig::default()).unwrap()
    }

    #[test]
    fn page_parses_malformed_markup() {
        let page = Page {
            body: "<div class=result><h3><a href='/x'>Unclosed".into(),
        };
        let doc = page.document();
        let sel = Selector::parse("div.result h3 a").unwrap();
        let link = doc.select(&sel).next().unwrap();
        assert_eq!(link.value().attr("href"), Some("/x"));
    }

    #[tokio::test]
    async fn invalid_url_fails_soft_as_none() {
        let page = client().fetch_page("not a url", &[]).await;
        assert!(page.is_none());
    }

    #[tokio::test]
    async fn invalid_pdf_url_fails_soft_as_empty_text() {
        let text = client().judgment_text("not a url").await;
        assert!(text.is_empty());
    }

    #[tokio::test]
    async fn invalid_url_is_typed_error() {
        let err = client().get_page("not a url", &[]).await.unwrap_err();
        assert!(matches!(err, FetchError::Http(_)));
    }
}
