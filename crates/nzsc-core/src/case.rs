//! Case, judgment and proposition records produced by a crawl.
//!
//! A [`Case`] comes from one row of a year's listing page. Its judgment PDF is
//! turned into a [`JudgmentDocument`], and every pattern hit inside that text
//! becomes a [`PropositionMatch`]. Nothing here outlives a single run.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Neutral citation of a Supreme Court judgment, e.g. `[2021] NZSC 12`.
    static ref RE_CITATION: Regex = Regex::new(r"\[\d{4}\] NZSC \d+").unwrap();
}

/// One result row of a listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Case {
    pub title: String,
    /// Absolute URL of the case's detail page.
    pub detail_url: String,
    /// Neutral citation, or `UNKNOWN_CITATION_<year>` when the row had none.
    pub citation: String,
}

impl Case {
    /// Identifier-safe form of this case's citation.
    pub fn doc_id(&self) -> String {
        derive_doc_id(&self.citation)
    }
}

/// Extracted text of a single judgment PDF.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JudgmentDocument {
    pub pdf_url: String,
    pub full_text: String,
}

impl JudgmentDocument {
    /// A document with no extractable text cannot produce propositions.
    pub fn is_empty(&self) -> bool {
        self.full_text.is_empty()
    }
}

/// A single pattern hit inside a judgment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PropositionMatch {
    pub doc_id: String,
    pub title: String,
    /// URL of the PDF the proposition was found in.
    pub url: String,
    pub proposition: String,
    pub citation: String,
    pub pattern_matched: String,
}

impl PropositionMatch {
    pub fn new(case: &Case, document: &JudgmentDocument, pattern: &str, text: &str) -> Self {
        Self {
            doc_id: case.doc_id(),
            title: case.title.clone(),
            url: document.pdf_url.clone(),
            proposition: text.trim().to_string(),
            citation: case.citation.clone(),
            pattern_matched: pattern.to_string(),
        }
    }
}

/// Find the neutral citation in a listing row's metadata text.
///
/// Falls back to `UNKNOWN_CITATION_<year>` so that a doc_id can always be
/// derived.
pub fn parse_citation(meta_text: &str, year: u16) -> String {
    RE_CITATION
        .find(meta_text)
        .map(|m| m.as_str().to_string())
        .unwrap_or_else(|| format!("UNKNOWN_CITATION_{year}"))
}

/// Derive a doc_id from a citation: brackets are dropped and spaces become
/// underscores.
///
/// `[2019] NZSC 45` → `2019_NZSC_45`
pub fn derive_doc_id(citation: &str) -> String {
    citation.replace(['[', ']'], "").replace(' ', "_")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn doc_id_from_neutral_citation() {
        assert_eq!(derive_doc_id("[2019] NZSC 45"), "2019_NZSC_45");
        assert_eq!(derive_doc_id("[2021] NZSC 12"), "2021_NZSC_12");
    }

    #[test]
    fn doc_id_from_placeholder_is_unchanged() {
        assert_eq!(
            derive_doc_id("UNKNOWN_CITATION_2007"),
            "UNKNOWN_CITATION_2007"
        );
    }

    #[test]
    fn citation_found_inside_metadata() {
        let meta = "Judgment date: 12 March 2021 | [2021] NZSC 12 | SC 45/2020";
        assert_eq!(parse_citation(meta, 2021), "[2021] NZSC 12");
    }

    #[test]
    fn first_citation_wins() {
        let meta = "[2010] NZSC 3 recalled; see [2010] NZSC 44";
        assert_eq!(parse_citation(meta, 2010), "[2010] NZSC 3");
    }

    #[test]
    fn missing_citation_gets_placeholder() {
        assert_eq!(parse_citation("SC 12/2015", 2015), "UNKNOWN_CITATION_2015");
        // Court of Appeal citations do not count.
        assert_eq!(
            parse_citation("[2015] NZCA 101", 2015),
            "UNKNOWN_CITATION_2015"
        );
    }

    #[test]
    fn proposition_carries_case_fields() {
        let case = Case {
            title: "R v Smith".into(),
            detail_url: "https://www.courtsofnz.govt.nz/cases/r-v-smith".into(),
            citation: "[2021] NZSC 12".into(),
        };
        let doc = JudgmentDocument {
            pdf_url: "https://www.courtsofnz.govt.nz/assets/judgment.pdf".into(),
            full_text: "irrelevant".into(),
        };
        let m = PropositionMatch::new(
            &case,
            &doc,
            "The leading case",
            "  The leading case is X.\n",
        );
        assert_eq!(m.doc_id, "2021_NZSC_12");
        assert_eq!(m.title, "R v Smith");
        assert_eq!(m.url, doc.pdf_url);
        assert_eq!(m.proposition, "The leading case is X.");
        assert_eq!(m.citation, "[2021] NZSC 12");
        assert_eq!(m.pattern_matched, "The leading case");
    }
}
