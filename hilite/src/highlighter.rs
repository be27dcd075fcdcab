//! Highlighter - main entry point
//!
//! Runs the pipeline: analyze the query, enumerate combinations, locate the
//! longest matching ones, pick the densest window and pad the keywords in it.
//!
//! A `Highlighter` holds only immutable configuration and compiled regexes,
//! so one instance can be shared across threads. Per-query structures are
//! built on every call.

use crate::config::HighlightConfig;
use crate::interface::{HighlightError, HighlightResult, ProximityCandidate};
use crate::keywords::{CombinationTable, KeywordPattern, QueryAnalyzer};
use crate::matcher::MatchIndex;
use crate::padding::{find_highlight_runs, splice_runs};
use crate::proximity::proximity_search;
use rayon::prelude::*;
use tracing::debug;

/// Combinations and pattern derived from one query
struct PreparedQuery {
    table: CombinationTable,
    pattern: KeywordPattern,
}

#[derive(Debug, Clone)]
pub struct Highlighter {
    config: HighlightConfig,
    analyzer: QueryAnalyzer,
}

impl Highlighter {
    pub fn new(config: HighlightConfig) -> HighlightResult<Self> {
        config.validate()?;
        let analyzer = QueryAnalyzer::from_config(&config)?;
        Ok(Self { config, analyzer })
    }

    pub fn config(&self) -> &HighlightConfig {
        &self.config
    }

    pub fn analyzer(&self) -> &QueryAnalyzer {
        &self.analyzer
    }

    fn prepare(&self, query: &str) -> HighlightResult<PreparedQuery> {
        let keywords = self.analyzer.keywords(query);
        Ok(PreparedQuery {
            table: CombinationTable::from_keywords(&keywords)?,
            pattern: KeywordPattern::new(&keywords)?,
        })
    }

    fn select(&self, document: &str, prepared: &PreparedQuery) -> HighlightResult<ProximityCandidate> {
        #[cfg(feature = "perf-log")]
        let t0 = std::time::Instant::now();
        let index = MatchIndex::locate(document, &prepared.table)?;
        #[cfg(feature = "perf-log")]
        let t1 = std::time::Instant::now();
        let best = proximity_search(document, &prepared.pattern, &index, self.config.max_snippet_length);
        #[cfg(feature = "perf-log")]
        {
            let t2 = std::time::Instant::now();
            debug!(
                locate_ms = (t1 - t0).as_secs_f64() * 1000.0,
                proximity_ms = (t2 - t1).as_secs_f64() * 1000.0,
                document_len = document.len(),
                "[perf] snippet selection"
            );
        }
        Ok(best)
    }

    fn render(&self, document: &str, prepared: &PreparedQuery) -> HighlightResult<String> {
        let best = self.select(document, prepared)?;
        let runs = find_highlight_runs(&best.snippet, &prepared.pattern, &self.analyzer);
        debug!(
            keyword = %best.keyword,
            method = ?best.scan_method,
            occurrences = best.occurrences,
            runs = runs.len(),
            "highlighted snippet"
        );
        Ok(splice_runs(&best.snippet, &runs, &self.config.pad_before, &self.config.pad_after))
    }

    /// Densest window of `document` for `query`, without markers.
    pub fn best_snippet(&self, document: &str, query: &str) -> HighlightResult<ProximityCandidate> {
        let prepared = self.prepare(query)?;
        self.select(document, &prepared)
    }

    /// Most relevant snippet of `document` with every keyword run wrapped in
    /// the configured markers.
    pub fn highlight(&self, document: &str, query: &str) -> HighlightResult<String> {
        let prepared = self.prepare(query)?;
        self.render(document, &prepared)
    }

    /// `highlight` for callers whose arguments may be absent. The document is
    /// checked first.
    pub fn highlight_nullable(&self, document: Option<&str>, query: Option<&str>) -> HighlightResult<String> {
        let document = document.ok_or_else(|| HighlightError::NullArgument("document".to_string()))?;
        let query = query.ok_or_else(|| HighlightError::NullArgument("query".to_string()))?;
        self.highlight(document, query)
    }

    /// Highlight many documents against one query in parallel. Results keep
    /// the input order; the first error aborts the batch.
    pub fn highlight_batch<S>(&self, documents: &[S], query: &str) -> HighlightResult<Vec<String>>
    where
        S: AsRef<str> + Sync,
    {
        let prepared = self.prepare(query)?;
        documents
            .par_iter()
            .map(|document| self.render(document.as_ref(), &prepared))
            .collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self {
            config: HighlightConfig::default(),
            analyzer: QueryAnalyzer::default(),
        }
    }
}
