//! Named legal-phrase patterns and the proposition matcher.
//!
//! Six fixed patterns are applied, in declaration order, to the full text of a
//! judgment. Each pattern yields every non-overlapping hit; the same sentence
//! may be reported by more than one pattern.
//!
//! # "The applicable test is"
//!
//! This pattern has always been written `(i)[^\n]*The applicable test is[^\n]*`.
//! The leading `(i)` was meant to be the `(?i)` flag but is a capturing group
//! matching a literal `i`, so the phrase is matched case-sensitively and the
//! hit starts at the first lowercase `i` before it on the line. The standard
//! set keeps that behaviour so exports stay comparable across runs;
//! [`PatternSet::repaired`] builds the case-insensitive whole-line form.

use regex::{Regex, RegexBuilder};
use thiserror::Error;

use crate::case::{Case, JudgmentDocument, PropositionMatch};

/// Headroom for the 50-fold clause repetition of "The question is whether".
const REGEX_SIZE_LIMIT: usize = 64 * (1 << 20);

/// `(name, pattern, capture group holding the proposition)`.
///
/// "The question is whether" ends at a `.`, `!` or `?` followed by whitespace
/// or end of text; the trailing whitespace is consumed outside group 1.
const STANDARD: &[(&str, &str, usize)] = &[
    (
        "The question is whether",
        r"(?i)((?:[^\n.!?]*[\s\n]){0,50}The question is whether.*?[.!?])(?:\s|$)",
        1,
    ),
    ("The leading case", r"(?i)[^\n]*The leading case[^\n]*", 0),
    ("The leading authority", r"(?i)[^\n]*The leading authority[^\n]*", 0),
    (
        "The issue here is whether",
        r"(?i)[^\n]*The issue here is whether[^\n]*",
        0,
    ),
    (
        "The applicable test is",
        r"(i)[^\n]*The applicable test is[^\n]*",
        0,
    ),
    (
        "The applicable threshold is",
        r"(?i)[^\n]*The applicable threshold is[^\n]*",
        0,
    ),
];

const APPLICABLE_TEST: &str = "The applicable test is";
const APPLICABLE_TEST_REPAIRED: &str = r"(?i)[^\n]*The applicable test is[^\n]*";

#[derive(Error, Debug)]
#[error("pattern {name:?} failed to compile: {source}")]
pub struct PatternError {
    pub name: &'static str,
    #[source]
    pub source: regex::Error,
}

/// A compiled, named pattern.
#[derive(Debug, Clone)]
pub struct PropositionPattern {
    name: &'static str,
    regex: Regex,
    group: usize,
}

impl PropositionPattern {
    fn compile(name: &'static str, pattern: &str, group: usize) -> Result<Self, PatternError> {
        let regex = RegexBuilder::new(pattern)
            .size_limit(REGEX_SIZE_LIMIT)
            .build()
            .map_err(|source| PatternError { name, source })?;
        Ok(Self { name, regex, group })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// All non-overlapping hits in `text`, trimmed.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<&'t str> {
        self.regex
            .captures_iter(text)
            .filter_map(|caps| caps.get(self.group))
            .map(|m| m.as_str().trim())
            .collect()
    }
}

/// The ordered set of patterns applied to every judgment.
#[derive(Debug, Clone)]
pub struct PatternSet {
    patterns: Vec<PropositionPattern>,
}

impl PatternSet {
    /// The six patterns exactly as historically written, including the
    /// `(i)` group of "The applicable test is".
    pub fn standard() -> Result<Self, PatternError> {
        Self::build(false)
    }

    /// The six patterns with "The applicable test is" matched
    /// case-insensitively as a whole line.
    pub fn repaired() -> Result<Self, PatternError> {
        Self::build(true)
    }

    pub fn build(repair_applicable_test: bool) -> Result<Self, PatternError> {
        let patterns = STANDARD
            .iter()
            .map(|&(name, pattern, group)| {
                if repair_applicable_test && name == APPLICABLE_TEST {
                    PropositionPattern::compile(name, APPLICABLE_TEST_REPAIRED, 0)
                } else {
                    PropositionPattern::compile(name, pattern, group)
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { patterns })
    }

    pub fn iter(&self) -> impl Iterator<Item = &PropositionPattern> {
        self.patterns.iter()
    }

    /// `(pattern_name, trimmed hit)` for every hit, patterns in declaration
    /// order and hits in text order within a pattern.
    pub fn find_all<'t>(&self, text: &'t str) -> Vec<(&'static str, &'t str)> {
        self.patterns
            .iter()
            .flat_map(|p| p.find_all(text).into_iter().map(move |m| (p.name, m)))
            .collect()
    }

    /// Turn every hit in a judgment into a [`PropositionMatch`].
    pub fn match_document(
        &self,
        case: &Case,
        document: &JudgmentDocument,
    ) -> Vec<PropositionMatch> {
        self.find_all(&document.full_text)
            .into_iter()
            .map(|(name, text)| {
                tracing::debug!(pattern = name, citation = %case.citation, "match found");
                PropositionMatch::new(case, document, name, text)
            })
            .collect()
    }
}
