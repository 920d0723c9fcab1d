//! CSV output with a UTF-8 byte-order mark, so spreadsheet tools do not
//! mis-detect the encoding.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use arrow::csv::WriterBuilder;
use arrow::record_batch::RecordBatch;

use crate::ExportError;

pub const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write `batch` with a header row and no index column, replacing any
/// existing file.
pub fn write_csv(path: &Path, batch: &RecordBatch) -> Result<(), ExportError> {
    let io_err = |source| ExportError::Io {
        path: path.to_path_buf(),
        source,
    };

    let file = File::create(path).map_err(io_err)?;
    let mut out = BufWriter::new(file);
    out.write_all(UTF8_BOM).map_err(io_err)?;

    let mut writer = WriterBuilder::new().with_header(true).build(out);
    writer.write(batch)?;
    writer.into_inner().flush().map_err(io_err)?;
    Ok(())
}
