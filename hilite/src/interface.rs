//! Hilite FFI Interface Definition
//!
//! This file defines the public interface exposed to Swift/Kotlin via UniFFI.
//! It acts as the source of truth for shared types.
//!
//! Foreign strings are nullable, so this is the layer that turns an absent
//! document or query into `HighlightError::NullArgument`. Everything behind it
//! takes `&str` and cannot observe a missing argument.

use crate::config::HighlightConfig;
use crate::highlighter::Highlighter;
use once_cell::sync::Lazy;
use thiserror::Error;

// ═══════════════════════════════════════════════════════════════════════════════
// ENUMS
// ═══════════════════════════════════════════════════════════════════════════════

/// Which side of an occurrence offset a candidate window extends toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, uniffi::Enum)]
pub enum ScanMethod {
    /// Window ends at the occurrence
    Forward,
    /// Window is centered on the occurrence
    Mid,
    /// Window starts at the occurrence
    Backward,
}

impl ScanMethod {
    /// Order in which the methods are tried for every occurrence.
    pub const ALL: [ScanMethod; 3] = [ScanMethod::Forward, ScanMethod::Mid, ScanMethod::Backward];
}

// ═══════════════════════════════════════════════════════════════════════════════
// RECORDS (Structs)
// ═══════════════════════════════════════════════════════════════════════════════

/// Winning window of the proximity scan
///
/// All offsets are byte offsets into the original document.
#[derive(Debug, Clone, PartialEq, Eq, uniffi::Record)]
pub struct ProximityCandidate {
    /// Combination the window was built around (empty for the no-match fallback)
    pub keyword: String,
    pub scan_method: ScanMethod,
    /// Total keyword occurrences inside `snippet`
    pub occurrences: u64,
    /// Occurrence offset the window was built around
    pub offset: u64,
    /// Where `snippet` starts in the document
    pub snippet_start: u64,
    /// Window text, rounded to word boundaries
    pub snippet: String,
}

// ═══════════════════════════════════════════════════════════════════════════════
// ERRORS
// ═══════════════════════════════════════════════════════════════════════════════

/// Error type for Hilite operations
#[derive(Debug, Error, uniffi::Error)]
#[uniffi(flat_error)]
pub enum HighlightError {
    #[error("Null argument: {0}")]
    NullArgument(String),
    #[error("Invalid pattern: {0}")]
    InvalidPattern(String),
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type HighlightResult<T> = Result<T, HighlightError>;

impl From<regex::Error> for HighlightError {
    fn from(e: regex::Error) -> Self {
        HighlightError::InvalidPattern(e.to_string())
    }
}

impl From<serde_json::Error> for HighlightError {
    fn from(e: serde_json::Error) -> Self {
        HighlightError::InvalidConfig(e.to_string())
    }
}

// ═══════════════════════════════════════════════════════════════════════════════
// SERVICE INTERFACE
// ═══════════════════════════════════════════════════════════════════════════════

static DEFAULT_HIGHLIGHTER: Lazy<Highlighter> = Lazy::new(Highlighter::default);

/// Highlight `query` inside the most relevant snippet of `document`, using the
/// default window (100) and `[[HIGHLIGHT]]`/`[[ENDHIGHLIGHT]]` markers.
#[uniffi::export]
pub fn highlight_document(document: Option<String>, query: Option<String>) -> Result<String, HighlightError> {
    DEFAULT_HIGHLIGHTER.highlight_nullable(document.as_deref(), query.as_deref())
}

/// Same as `highlight_document` with an explicit window size and markers.
#[uniffi::export]
pub fn highlight_document_with_options(
    document: Option<String>,
    query: Option<String>,
    max_snippet_length: u32,
    pad_before: String,
    pad_after: String,
) -> Result<String, HighlightError> {
    let config = HighlightConfig {
        max_snippet_length: max_snippet_length as usize,
        pad_before,
        pad_after,
        ..HighlightConfig::default()
    };
    Highlighter::new(config)?.highlight_nullable(document.as_deref(), query.as_deref())
}
