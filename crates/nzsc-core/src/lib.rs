pub mod case;
pub mod config;
pub mod patterns;
pub mod schema;

pub use case::{Case, JudgmentDocument, PropositionMatch, derive_doc_id, parse_citation};
pub use config::CrawlConfig;
pub use patterns::{PatternError, PatternSet, PropositionPattern};
