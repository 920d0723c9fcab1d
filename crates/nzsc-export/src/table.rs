//! Proposition matches as an Arrow [`RecordBatch`].

use std::sync::Arc;

use arrow::array::{ArrayRef, StringArray};
use arrow::record_batch::RecordBatch;
use nzsc_core::PropositionMatch;
use nzsc_core::schema::propositions;

use crate::ExportError;

/// Build the flat export table, one row per match in the given order.
pub fn propositions_batch(matches: &[PropositionMatch]) -> Result<RecordBatch, ExportError> {
    let columns = vec![
        utf8(matches.iter().map(|m| m.doc_id.as_str())),
        utf8(matches.iter().map(|m| m.title.as_str())),
        utf8(matches.iter().map(|m| m.url.as_str())),
        utf8(matches.iter().map(|m| m.proposition.as_str())),
        utf8(matches.iter().map(|m| m.citation.as_str())),
        utf8(matches.iter().map(|m| m.pattern_matched.as_str())),
    ];

    Ok(RecordBatch::try_new(
        Arc::new(propositions::schema()),
        columns,
    )?)
}

fn utf8<'a>(values: impl Iterator<Item = &'a str>) -> ArrayRef {
    Arc::new(StringArray::from_iter_values(values))
}

/// Borrow a Utf8 column of a batch by index.
pub(crate) fn string_column(batch: &RecordBatch, idx: usize) -> Result<&StringArray, ExportError> {
    batch
        .column(idx)
        .as_any()
        .downcast_ref::<StringArray>()
        .ok_or_else(|| {
            let name = batch.schema().field(idx).name().clone();
            ExportError::Other(format!("column {name} is not Utf8"))
        })
}
