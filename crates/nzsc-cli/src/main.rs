mod summary;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use nzsc_core::config::{FIRST_YEAR, LAST_YEAR, POLITENESS_DELAY};
use nzsc_core::{CrawlConfig, PatternSet};
use nzsc_crawl::{CourtClient, Crawler};
use nzsc_export::export_propositions;
use tracing_subscriber::EnvFilter;

/// Crawl New Zealand Supreme Court judgments and export legal propositions.
///
/// With no arguments every year from 2004 to 2025 is crawled and the results
/// are written to the current directory.
#[derive(Parser, Debug)]
#[command(name = "nzsc-crawler", version)]
struct Cli {
    /// First judgment year to crawl.
    #[arg(long, default_value_t = FIRST_YEAR)]
    from_year: u16,

    /// Last judgment year to crawl (inclusive).
    #[arg(long, default_value_t = LAST_YEAR)]
    to_year: u16,

    /// Directory for the CSV and XLSX exports.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Pause after each processed case, in milliseconds.
    #[arg(long, default_value_t = POLITENESS_DELAY.as_millis() as u64)]
    delay_ms: u64,

    /// Match "The applicable test is" case-insensitively instead of with the
    /// historical literal-`i` pattern.
    #[arg(long)]
    repair_applicable_test: bool,
}

impl Cli {
    fn into_config(self) -> CrawlConfig {
        CrawlConfig {
            first_year: self.from_year,
            last_year: self.to_year,
            out_dir: self.out_dir,
            delay: Duration::from_millis(self.delay_ms),
            repair_applicable_test: self.repair_applicable_test,
            ..Default::default()
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stdout)
        .init();

    let config = Cli::parse().into_config();
    tracing::info!(
        first_year = config.first_year,
        last_year = config.last_year,
        "nzsc-crawler v{}",
        env!("CARGO_PKG_VERSION")
    );

    let patterns = PatternSet::build(config.repair_applicable_test)
        .context("compiling proposition patterns")?;
    let client = CourtClient::new(&config).context("building HTTP client")?;
    let crawler = Crawler::new(client, patterns, config.clone());

    let report = crawler.run().await;
    summary::print_crawl(&report);

    std::fs::create_dir_all(&config.out_dir)
        .with_context(|| format!("creating {}", config.out_dir.display()))?;
    let outcome = export_propositions(&report.matches, &config.csv_path(), &config.xlsx_path())
        .context("exporting propositions")?;
    summary::print_export(&outcome);

    Ok(())
}
