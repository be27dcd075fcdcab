//! Keyword padding
//!
//! Wraps runs of adjacent keywords in the snippet with the configured markers.
//! Adjacent means separated only by separator segments (whitespace, or
//! anything the query delimiter matches in full), or by a punctuation segment
//! that directly follows a keyword (`deep. Deep dish` is one run). Separators
//! after the last keyword of a run stay inside the markers.

use crate::keywords::{KeywordPattern, QueryAnalyzer};
use unicode_segmentation::UnicodeSegmentation;

/// Byte range of one highlighted run inside a snippet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HighlightRun {
    pub start: usize,
    pub end: usize,
}

impl HighlightRun {
    pub fn text<'a>(&self, snippet: &'a str) -> &'a str {
        &snippet[self.start..self.end]
    }
}

fn is_punctuation(segment: &str) -> bool {
    !segment.chars().any(char::is_alphanumeric)
}

/// Runs of whole-token keyword matches, ascending and non-overlapping.
pub fn find_highlight_runs(snippet: &str, pattern: &KeywordPattern, analyzer: &QueryAnalyzer) -> Vec<HighlightRun> {
    let mut runs = Vec::new();
    if pattern.is_empty() {
        return runs;
    }

    let mut open: Option<usize> = None;
    let mut after_keyword = false;

    for (start, segment) in snippet.split_word_bound_indices() {
        if analyzer.is_separator(segment) {
            after_keyword = false;
            continue;
        }
        if pattern.matches_token(segment) {
            open.get_or_insert(start);
            after_keyword = true;
            continue;
        }
        // Bridge punctuation directly after a keyword
        if after_keyword && is_punctuation(segment) {
            after_keyword = false;
            continue;
        }
        after_keyword = false;
        if let Some(run_start) = open.take() {
            runs.push(HighlightRun { start: run_start, end: start });
        }
    }

    if let Some(run_start) = open {
        runs.push(HighlightRun {
            start: run_start,
            end: snippet.len(),
        });
    }
    runs
}

/// Insert the markers around each run. Runs must be ascending and disjoint.
pub fn splice_runs(snippet: &str, runs: &[HighlightRun], pad_before: &str, pad_after: &str) -> String {
    let mut out = String::with_capacity(snippet.len() + runs.len() * (pad_before.len() + pad_after.len()));
    let mut cursor = 0;
    for run in runs {
        out.push_str(&snippet[cursor..run.start]);
        out.push_str(pad_before);
        out.push_str(run.text(snippet));
        out.push_str(pad_after);
        cursor = run.end;
    }
    out.push_str(&snippet[cursor..]);
    out
}

pub fn pad_snippet(
    snippet: &str,
    pattern: &KeywordPattern,
    analyzer: &QueryAnalyzer,
    pad_before: &str,
    pad_after: &str,
) -> String {
    splice_runs(snippet, &find_highlight_runs(snippet, pattern, analyzer), pad_before, pad_after)
}
