//! Export layer: matched propositions as an Arrow table, written to a
//! BOM-prefixed CSV file and an XLSX workbook.

mod error;
pub use error::ExportError;

pub mod csv;
pub mod export;
pub mod table;
pub mod xlsx;

pub use export::{ExportOutcome, export_propositions};
pub use table::propositions_batch;
