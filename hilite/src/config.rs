//! Highlighter configuration
//!
//! Window size, markers, the stopword list and the query delimiter are all
//! supplied here; nothing in the engine reads process-wide state. Hosts that
//! ship their own stopword lists load them as JSON.

use crate::interface::{HighlightError, HighlightResult};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Snippet window size used when the caller does not pick one
pub const DEFAULT_MAX_SNIPPET_LENGTH: usize = 100;

pub const DEFAULT_PAD_BEFORE: &str = "[[HIGHLIGHT]]";
pub const DEFAULT_PAD_AFTER: &str = "[[ENDHIGHLIGHT]]";

/// Query words are separated by one or more whitespace characters
pub const DEFAULT_DELIMITER: &str = r"\s+";

/// Words that add nothing to a search. Kept UPPERCASE by convention.
pub const DEFAULT_STOPWORDS: &[&str] = &["IS", "THIS", "AND", "A"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightConfig {
    /// Width of each candidate window, in bytes, before word-boundary rounding
    pub max_snippet_length: usize,
    pub pad_before: String,
    pub pad_after: String,
    /// Compared case-insensitively against query words
    pub stopwords: Vec<String>,
    /// Regex splitting a query into words
    pub delimiter: String,
}

impl Default for HighlightConfig {
    fn default() -> Self {
        Self {
            max_snippet_length: DEFAULT_MAX_SNIPPET_LENGTH,
            pad_before: DEFAULT_PAD_BEFORE.to_string(),
            pad_after: DEFAULT_PAD_AFTER.to_string(),
            stopwords: DEFAULT_STOPWORDS.iter().map(|w| w.to_string()).collect(),
            delimiter: DEFAULT_DELIMITER.to_string(),
        }
    }
}

impl HighlightConfig {
    /// Parse and validate a JSON config. Missing fields take their defaults.
    pub fn from_json(json: &str) -> HighlightResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read a JSON config from disk.
    pub fn load(path: impl AsRef<Path>) -> HighlightResult<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .map_err(|e| HighlightError::InvalidConfig(format!("{}: {}", path.display(), e)))?;
        Self::from_json(&json)
    }

    pub fn validate(&self) -> HighlightResult<()> {
        if self.max_snippet_length == 0 {
            return Err(HighlightError::InvalidConfig("max_snippet_length must be positive".to_string()));
        }
        self.delimiter_regex()?;
        Ok(())
    }

    /// Compile the delimiter. A delimiter that matches the empty string would
    /// split a query between every character, so it is rejected.
    pub(crate) fn delimiter_regex(&self) -> HighlightResult<Regex> {
        let regex = Regex::new(&self.delimiter)
            .map_err(|e| HighlightError::InvalidConfig(format!("delimiter {:?}: {}", self.delimiter, e)))?;
        if regex.is_match("") {
            return Err(HighlightError::InvalidConfig(format!(
                "delimiter {:?} matches the empty string",
                self.delimiter
            )));
        }
        Ok(regex)
    }
}
