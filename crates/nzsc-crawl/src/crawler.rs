//! Year-by-year walk over the judgment listings.
//!
//! For each year the listing is paged by `start` offset until a page has no
//! results. Every complete row becomes a [`Case`]; its detail page is fetched,
//! the first PDF link followed, and the extracted text run through the
//! [`PatternSet`]. Every failure skips only the affected year or case.

use std::time::Instant;

use nzsc_core::{Case, CrawlConfig, JudgmentDocument, PatternSet, PropositionMatch};
use tracing::{info, warn};

use crate::client::JudgmentSource;
use crate::listing::{find_pdf_link, listing_query, parse_listing, resolve_url};

/// Everything a crawl produced, matches in discovery order.
#[derive(Debug, Default)]
pub struct CrawlReport {
    pub matches: Vec<PropositionMatch>,
    pub years_visited: usize,
    pub pages_fetched: usize,
    pub cases_seen: usize,
    pub cases_skipped: usize,
    pub pdfs_extracted: usize,
    pub elapsed_secs: f64,
}

pub struct Crawler<S> {
    source: S,
    patterns: PatternSet,
    config: CrawlConfig,
}

impl<S: JudgmentSource> Crawler<S> {
    pub fn new(source: S, patterns: PatternSet, config: CrawlConfig) -> Self {
        Self {
            source,
            patterns,
            config,
        }
    }

    /// Crawl every configured year in ascending order.
    pub async fn run(&self) -> CrawlReport {
        let start = Instant::now();
        let mut report = CrawlReport::default();

        for year in self.config.years() {
            self.crawl_year(year, &mut report).await;
            report.years_visited += 1;
        }

        report.elapsed_secs = start.elapsed().as_secs_f64();
        report
    }

    async fn crawl_year(&self, year: u16, report: &mut CrawlReport) {
        info!(year, "processing year");
        let mut offset = 0;

        loop {
            info!(year, start = offset, "fetching listing page");
            let query = listing_query(year, offset);
            let Some(page) = self.source.fetch_page(&self.config.search_url, &query).await else {
                break;
            };
            report.pages_fetched += 1;

            let listing = parse_listing(&page.document());
            if listing.is_exhausted() {
                info!(year, "no more results");
                break;
            }

            for row in listing.rows {
                let case = match row.into_case(&self.config.base_url, year) {
                    Ok(case) => case,
                    Err(e) => {
                        warn!(year, error = %e, "unresolvable case link");
                        continue;
                    }
                };
                report.cases_seen += 1;

                match self.process_case(&case).await {
                    Some(found) => {
                        report.pdfs_extracted += 1;
                        report.matches.extend(found);
                        tokio::time::sleep(self.config.delay).await;
                    }
                    None => report.cases_skipped += 1,
                }
            }

            offset += self.config.page_size;
        }
    }

    /// Matches for one case, or `None` when the case had to be skipped.
    async fn process_case(&self, case: &Case) -> Option<Vec<PropositionMatch>> {
        info!(title = %case.title, citation = %case.citation, "found case");

        let detail = self.source.fetch_page(&case.detail_url, &[]).await?;
        let Some(href) = find_pdf_link(&detail.document()) else {
            warn!(title = %case.title, "PDF link not found");
            return None;
        };
        let pdf_url = match resolve_url(&self.config.base_url, &href) {
            Ok(url) => url,
            Err(e) => {
                warn!(title = %case.title, href = %href, error = %e, "unresolvable PDF link");
                return None;
            }
        };

        info!(url = %pdf_url, "extracting text from PDF");
        let full_text = self.source.judgment_text(&pdf_url).await;
        let document = JudgmentDocument { pdf_url, full_text };
        if document.is_empty() {
            warn!(url = %document.pdf_url, "failed to extract text from PDF");
            return None;
        }

        let found = self.patterns.match_document(case, &document);
        if !found.is_empty() {
            info!(citation = %case.citation, count = found.len(), "propositions found");
        }
        Some(found)
    }
}
