//! Hilite - proximity snippet selection and keyword highlighting
//!
//! Given a document and a free-text query, picks the window of the document
//! where the query's keywords cluster most densely and wraps each run of
//! adjacent keywords in configurable markers.
//!
//! Types are exported via UniFFI proc-macros (#[derive(uniffi::Record/Enum)]).

pub mod boundary;
pub mod config;
mod highlighter;
pub mod interface;
pub mod keywords;
pub mod matcher;
pub mod padding;
pub mod proximity;

pub use config::HighlightConfig;
pub use highlighter::Highlighter;
pub use interface::*;
pub use keywords::{CombinationTable, KeywordPattern, QueryAnalyzer, Stopwords};
pub use matcher::{KeywordMatch, MatchIndex};

uniffi::setup_scaffolding!("hilite");
