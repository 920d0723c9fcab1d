//! Listing and detail page parsing.
//!
//! A listing page holds one `div.result` per case, each with an `h3` heading
//! link and a `p.meta-data` paragraph carrying the neutral citation. A detail
//! page links to the judgment PDF.

use lazy_static::lazy_static;
use nzsc_core::{Case, parse_citation};
use scraper::{ElementRef, Html, Selector};
use url::Url;

use crate::FetchError;

lazy_static! {
    static ref SEL_RESULT: Selector = Selector::parse("div.result").unwrap();
    static ref SEL_HEADING: Selector = Selector::parse("h3").unwrap();
    static ref SEL_LINK: Selector = Selector::parse("a").unwrap();
    static ref SEL_META: Selector = Selector::parse("p.meta-data").unwrap();
    static ref SEL_HREF: Selector = Selector::parse("a[href]").unwrap();
}

/// The raw pieces of one listing row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow {
    pub title: String,
    pub href: String,
    pub meta_text: String,
}

impl ListingRow {
    /// Resolve the detail link and citation into a [`Case`].
    pub fn into_case(self, base_url: &str, year: u16) -> Result<Case, FetchError> {
        Ok(Case {
            detail_url: resolve_url(base_url, &self.href)?,
            citation: parse_citation(&self.meta_text, year),
            title: self.title,
        })
    }
}

/// Query parameters of the listing page for `year` starting at `offset`.
pub fn listing_query(year: u16, offset: u32) -> Vec<(&'static str, String)> {
    vec![
        ("Search", String::new()),
        ("CaseNum", String::new()),
        ("Year", year.to_string()),
        ("action_search", "Search".to_string()),
        ("start", offset.to_string()),
    ]
}

/// One parsed listing page.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListingPage {
    /// Number of `div.result` elements, complete or not. Zero means the year
    /// has no more pages.
    pub results: usize,
    /// Complete rows in page order.
    pub rows: Vec<ListingRow>,
}

impl ListingPage {
    pub fn is_exhausted(&self) -> bool {
        self.results == 0
    }
}

/// Parse a listing page. Rows without a heading link (with an `href`) or a
/// metadata paragraph are dropped from `rows` but still counted in `results`.
pub fn parse_listing(doc: &Html) -> ListingPage {
    let mut page = ListingPage::default();
    for result in doc.select(&SEL_RESULT) {
        page.results += 1;
        if let Some(row) = parse_row(result) {
            page.rows.push(row);
        }
    }
    page
}

fn parse_row(result: ElementRef<'_>) -> Option<ListingRow> {
    let heading = result.select(&SEL_HEADING).next()?;
    let link = heading.select(&SEL_LINK).next()?;
    let meta = result.select(&SEL_META).next()?;
    let href = link.value().attr("href")?;

    Some(ListingRow {
        title: collapse_whitespace(&link.text().collect::<String>()),
        href: href.to_string(),
        meta_text: meta.text().collect(),
    })
}

fn collapse_whitespace(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// First link on a detail page whose target ends in `.pdf`.
pub fn find_pdf_link(doc: &Html) -> Option<String> {
    doc.select(&SEL_HREF)
        .filter_map(|a| a.value().attr("href"))
        .find(|href| href.ends_with(".pdf"))
        .map(str::to_string)
}

/// Resolve a possibly relative link against the site root.
pub fn resolve_url(base_url: &str, href: &str) -> Result<String, FetchError> {
    Ok(Url::parse(base_url)?.join(href)?.to_string())
}
