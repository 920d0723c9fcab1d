//! XLSX workbook output.

use std::path::Path;

use arrow::array::Array;
use arrow::record_batch::RecordBatch;
use rust_xlsxwriter::{Format, Workbook};
use tracing::warn;

use crate::ExportError;
use crate::table::string_column;

/// Longest string Excel accepts in a single cell.
pub const MAX_CELL_CHARS: usize = 32_767;

/// Write `batch` to a single-sheet workbook: bold header row, one row per
/// record, no index column.
pub fn write_xlsx(path: &Path, batch: &RecordBatch) -> Result<(), ExportError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    let header = Format::new().set_bold();

    let schema = batch.schema();
    for (col, field) in schema.fields().iter().enumerate() {
        worksheet.write_string_with_format(0, col as u16, field.name(), &header)?;
    }

    for col in 0..batch.num_columns() {
        let values = string_column(batch, col)?;
        for row in 0..values.len() {
            let cell = fit_cell(values.value(row));
            worksheet.write_string(row as u32 + 1, col as u16, cell)?;
        }
    }

    workbook.save(path)?;
    Ok(())
}

fn fit_cell(value: &str) -> &str {
    match value.char_indices().nth(MAX_CELL_CHARS) {
        Some((cut, _)) => {
            warn!(chars = value.chars().count(), "truncating oversized cell");
            &value[..cut]
        }
        None => value,
    }
}
