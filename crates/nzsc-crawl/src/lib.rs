//! Crawl layer: HTTP fetching, listing/detail page parsing, PDF text extraction,
//! and the year-by-year walker that ties them to the proposition matcher.

mod error;
pub use error::{ExtractError, FetchError};

pub mod client;
pub mod crawler;
pub mod listing;
pub mod pdf;

pub use client::{CourtClient, JudgmentSource, Page};
pub use crawler::{CrawlReport, Crawler};
