//! Crawl constants and the run configuration built from them.

use std::ops::RangeInclusive;
use std::path::PathBuf;
use std::time::Duration;

/// Site root; relative links on listing and detail pages resolve against it.
pub const BASE_URL: &str = "https://www.courtsofnz.govt.nz/";

/// Supreme Court judgments search listing.
pub const SEARCH_URL: &str =
    "https://www.courtsofnz.govt.nz/the-courts/supreme-court/judgments-supreme";

pub const FIRST_YEAR: u16 = 2004;
pub const LAST_YEAR: u16 = 2025;

/// Rows per listing page; the `start` offset advances by this much.
pub const PAGE_SIZE: u32 = 10;

pub const PAGE_TIMEOUT: Duration = Duration::from_secs(20);
pub const PDF_TIMEOUT: Duration = Duration::from_secs(30);

/// Pause after each processed case.
pub const POLITENESS_DELAY: Duration = Duration::from_secs(1);

pub const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 \
                              (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// File stem shared by the CSV and XLSX exports.
pub const EXPORT_STEM: &str = "NZSC_Propositions_Export";

/// Settings for one crawl run.
///
/// `Default` yields exactly the constants above; the binary only overrides
/// fields the user passed explicitly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlConfig {
    pub base_url: String,
    pub search_url: String,
    pub first_year: u16,
    pub last_year: u16,
    pub page_size: u32,
    pub page_timeout: Duration,
    pub pdf_timeout: Duration,
    pub delay: Duration,
    pub user_agent: String,
    pub out_dir: PathBuf,
    /// Build "The applicable test is" case-insensitively instead of with the
    /// historical `(i)` group.
    pub repair_applicable_test: bool,
}

impl Default for CrawlConfig {
    fn default() -> Self {
        Self {
            base_url: BASE_URL.to_string(),
            search_url: SEARCH_URL.to_string(),
            first_year: FIRST_YEAR,
            last_year: LAST_YEAR,
            page_size: PAGE_SIZE,
            page_timeout: PAGE_TIMEOUT,
            pdf_timeout: PDF_TIMEOUT,
            delay: POLITENESS_DELAY,
            user_agent: USER_AGENT.to_string(),
            out_dir: PathBuf::from("."),
            repair_applicable_test: false,
        }
    }
}

impl CrawlConfig {
    /// Years to crawl, ascending. Empty when `first_year > last_year`.
    pub fn years(&self) -> RangeInclusive<u16> {
        self.first_year..=self.last_year
    }

    pub fn csv_path(&self) -> PathBuf {
        self.out_dir.join(format!("{EXPORT_STEM}.csv"))
    }

    pub fn xlsx_path(&self) -> PathBuf {
        self.out_dir.join(format!("{EXPORT_STEM}.xlsx"))
    }
}
