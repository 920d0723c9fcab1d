//! End-of-run summary lines.

use std::collections::BTreeMap;

use nzsc_crawl::CrawlReport;
use nzsc_export::ExportOutcome;

/// Print crawl counters and per-pattern match totals.
pub fn print_crawl(report: &CrawlReport) {
    println!();
    println!("--- Crawling complete ---");
    println!(
        "  {} years, {} listing pages, {} cases ({} skipped), {} PDFs read in {:.1}s",
        report.years_visited,
        report.pages_fetched,
        report.cases_seen,
        report.cases_skipped,
        report.pdfs_extracted,
        report.elapsed_secs,
    );
    for (pattern, count) in pattern_counts(report) {
        println!("  {count:>6}  {pattern}");
    }
}

/// Print where the propositions went, or that there were none.
pub fn print_export(outcome: &ExportOutcome) {
    match outcome {
        ExportOutcome::Empty => {
            println!("No propositions were extracted. No output files were written.");
        }
        ExportOutcome::Written { rows, csv, xlsx } => {
            println!();
            println!("Successfully saved {rows} propositions to:");
            println!("- {}", csv.display());
            println!("- {}", xlsx.display());
        }
    }
}

fn pattern_counts(report: &CrawlReport) -> BTreeMap<&str, usize> {
    let mut counts = BTreeMap::new();
    for m in &report.matches {
        *counts.entry(m.pattern_matched.as_str()).or_insert(0) += 1;
    }
    counts
}
