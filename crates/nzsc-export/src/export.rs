//! The end-of-run export of every matched proposition.

use std::path::{Path, PathBuf};

use nzsc_core::PropositionMatch;
use tracing::info;

use crate::ExportError;
use crate::csv::write_csv;
use crate::table::propositions_batch;
use crate::xlsx::write_xlsx;

/// What [`export_propositions`] did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExportOutcome {
    /// No matches: nothing was written.
    Empty,
    Written {
        rows: usize,
        csv: PathBuf,
        xlsx: PathBuf,
    },
}

/// Write all matches, in order, to `csv_path` and `xlsx_path`.
///
/// An empty collection is not an error; no file is created or touched.
pub fn export_propositions(
    matches: &[PropositionMatch],
    csv_path: &Path,
    xlsx_path: &Path,
) -> Result<ExportOutcome, ExportError> {
    if matches.is_empty() {
        info!("no propositions were extracted; skipping export");
        return Ok(ExportOutcome::Empty);
    }

    let batch = propositions_batch(matches)?;
    write_csv(csv_path, &batch)?;
    info!(path = %csv_path.display(), rows = batch.num_rows(), "wrote CSV");
    write_xlsx(xlsx_path, &batch)?;
    info!(path = %xlsx_path.display(), rows = batch.num_rows(), "wrote XLSX");

    Ok(ExportOutcome::Written {
        rows: batch.num_rows(),
        csv: csv_path.to_path_buf(),
        xlsx: xlsx_path.to_path_buf(),
    })
}
