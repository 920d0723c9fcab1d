//! Judgment PDF text extraction.

use std::io::Write;
use std::path::Path;

use pdf_oxide::PdfDocument;

use crate::ExtractError;

/// Extract the text of every page, in page order.
///
/// Pages with no text (scanned images) contribute nothing; every other page
/// contributes its text followed by a newline.
pub fn extract_pdf_text(path: &Path) -> Result<String, ExtractError> {
    let mut doc = PdfDocument::open(path)?;
    let pages = doc.page_count()?;

    let mut full_text = String::new();
    for index in 0..pages {
        let text = doc.extract_text(index)?;
        if !text.is_empty() {
            full_text.push_str(&text);
            full_text.push('\n');
        }
    }
    Ok(full_text)
}

/// Materialize `bytes` as a uniquely named scratch PDF and extract its text.
///
/// The scratch file is removed when this returns, on success or error.
pub fn extract_pdf_bytes(bytes: &[u8]) -> Result<String, ExtractError> {
    let mut scratch = tempfile::Builder::new()
        .prefix("judgment-")
        .suffix(".pdf")
        .tempfile()?;
    scratch.write_all(bytes)?;
    scratch.flush()?;
    extract_pdf_text(scratch.path())
}

#[cfg(test)]
mod tests {
    use pdf_oxide::writer::{DocumentBuilder, PageSize};

    use super::*;

    /// Three pages: text, blank, text.
    fn judgment_pdf() -> Vec<u8> {
        let mut builder = DocumentBuilder::new();
        builder
            .page(PageSize::Letter)
            .at(72.0, 720.0)
            .text("The leading authority is XYZ.")
            .done();
        builder.page(PageSize::Letter).done();
        builder
            .page(PageSize::Letter)
            .at(72.0, 720.0)
            .text("Appeal dismissed.")
            .done();
        builder.build().unwrap()
    }

    #[test]
    fn pages_are_joined_in_order_and_blank_pages_skipped() {
        let bytes = judgment_pdf();
        let text = extract_pdf_bytes(&bytes).unwrap();

        let mut scratch = tempfile::NamedTempFile::new().unwrap();
        scratch.write_all(&bytes).unwrap();
        let mut doc = PdfDocument::open(scratch.path()).unwrap();
        assert_eq!(doc.page_count().unwrap(), 3);
        let first = doc.extract_text(0).unwrap();
        let blank = doc.extract_text(1).unwrap();
        let last = doc.extract_text(2).unwrap();
        assert!(first.contains("The leading authority is XYZ."));
        assert!(blank.is_empty());
        assert!(last.contains("Appeal dismissed."));

        assert_eq!(text, format!("{first}\n{last}\n"));
        let authority = text.find("The leading authority").unwrap();
        let dismissed = text.find("Appeal dismissed").unwrap();
        assert!(authority < dismissed);
    }

    #[test]
    fn garbage_bytes_are_an_error() {
        let err = extract_pdf_bytes(b"<html>not a pdf</html>").unwrap_err();
        assert!(matches!(err, ExtractError::Pdf(_) | ExtractError::Io(_)));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(extract_pdf_text(&dir.path().join("absent.pdf")).is_err());
    }
}
