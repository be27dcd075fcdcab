//! Query analysis
//!
//! Turns a raw query into keywords (delimiter split + stopword removal),
//! enumerates every ordered keyword combination grouped by size, and builds the
//! case-insensitive keyword pattern shared by proximity scoring and padding.

use crate::config::{HighlightConfig, DEFAULT_DELIMITER, DEFAULT_STOPWORDS};
use crate::interface::{HighlightError, HighlightResult};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::collections::{BTreeMap, HashSet};
use tracing::debug;

/// Combination enumeration is O(2^N); queries with more keywords are refused.
pub const MAX_COMBINATION_KEYWORDS: usize = 20;

static DEFAULT_STOPWORD_SET: Lazy<Stopwords> = Lazy::new(|| Stopwords::new(DEFAULT_STOPWORDS.iter().copied()));

static DEFAULT_DELIMITER_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(DEFAULT_DELIMITER).expect("default delimiter is a valid regex"));

static DEFAULT_SEPARATOR_REGEX: Lazy<Regex> =
    Lazy::new(|| separator_regex(&DEFAULT_DELIMITER_REGEX).expect("default delimiter is a valid regex"));

/// Delimiter anchored at both ends, so it only accepts a whole segment.
fn separator_regex(delimiter: &Regex) -> HighlightResult<Regex> {
    Ok(Regex::new(&format!("^(?:{})$", delimiter.as_str()))?)
}

// ─────────────────────────────────────────────────────────────────────────────
// Stopwords
// ─────────────────────────────────────────────────────────────────────────────

/// Case-insensitive stopword set. Words are stored upper-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stopwords {
    words: HashSet<String>,
}

impl Stopwords {
    pub fn new<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words.into_iter().map(|w| w.as_ref().to_uppercase()).collect(),
        }
    }

    pub fn empty() -> Self {
        Self { words: HashSet::new() }
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(&word.to_uppercase())
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for Stopwords {
    fn default() -> Self {
        DEFAULT_STOPWORD_SET.clone()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tokenizer / stopword filter
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct QueryAnalyzer {
    stopwords: Stopwords,
    delimiter: Regex,
    /// Whole-segment form of `delimiter`, used when padding snippets
    separator: Regex,
}

impl QueryAnalyzer {
    pub fn new(stopwords: Stopwords, delimiter: Regex) -> HighlightResult<Self> {
        let separator = separator_regex(&delimiter)?;
        Ok(Self {
            stopwords,
            delimiter,
            separator,
        })
    }

    pub fn from_config(config: &HighlightConfig) -> HighlightResult<Self> {
        Self::new(Stopwords::new(&config.stopwords), config.delimiter_regex()?)
    }

    pub fn stopwords(&self) -> &Stopwords {
        &self.stopwords
    }

    /// Query words minus stopwords, in query order and original case.
    pub fn keywords(&self, query: &str) -> Vec<String> {
        let keywords: Vec<String> = self
            .delimiter
            .split(query)
            .filter(|word| !word.is_empty() && !self.stopwords.contains(word))
            .map(str::to_string)
            .collect();
        debug!(?keywords, "analyzed query");
        keywords
    }

    pub fn keyword_pattern(&self, query: &str) -> HighlightResult<KeywordPattern> {
        KeywordPattern::new(&self.keywords(query))
    }

    /// True for a snippet segment that only separates words: all whitespace,
    /// or matched in full by the query delimiter.
    pub fn is_separator(&self, segment: &str) -> bool {
        segment.chars().all(char::is_whitespace) || self.separator.is_match(segment)
    }
}

impl Default for QueryAnalyzer {
    fn default() -> Self {
        Self {
            stopwords: Stopwords::default(),
            delimiter: DEFAULT_DELIMITER_REGEX.clone(),
            separator: DEFAULT_SEPARATOR_REGEX.clone(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Combination generator
// ─────────────────────────────────────────────────────────────────────────────

/// Every non-empty ordered subset of the keywords, space-joined, bucketed by
/// the number of keywords it contains.
///
/// For `deep dish pizza`:
/// ```text
/// 3 | deep dish pizza
/// 2 | deep dish, deep pizza, dish pizza
/// 1 | deep, dish, pizza
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CombinationTable {
    buckets: BTreeMap<usize, Vec<String>>,
}

impl CombinationTable {
    /// Bit `j` of the selector picks keyword `j`; selectors run from 1 to
    /// 2^N - 1, and each bucket keeps that generation order.
    pub fn from_keywords<S: AsRef<str>>(keywords: &[S]) -> HighlightResult<Self> {
        if keywords.len() > MAX_COMBINATION_KEYWORDS {
            return Err(HighlightError::InvalidInput(format!(
                "{} keywords exceeds the combination limit of {}",
                keywords.len(),
                MAX_COMBINATION_KEYWORDS
            )));
        }

        let mut buckets: BTreeMap<usize, Vec<String>> = BTreeMap::new();
        for selector in 1u32..(1u32 << keywords.len()) {
            let combination = keywords
                .iter()
                .enumerate()
                .filter(|(bit, _)| selector & (1 << bit) != 0)
                .map(|(_, keyword)| keyword.as_ref())
                .collect::<Vec<_>>()
                .join(" ");
            buckets.entry(selector.count_ones() as usize).or_default().push(combination);
        }
        Ok(Self { buckets })
    }

    /// Build a table from explicit buckets, keeping the given order.
    pub fn from_buckets<I>(buckets: I) -> Self
    where
        I: IntoIterator<Item = (usize, Vec<String>)>,
    {
        Self { buckets: buckets.into_iter().collect() }
    }

    pub fn get(&self, length: usize) -> Option<&[String]> {
        self.buckets.get(&length).map(Vec::as_slice)
    }

    /// Buckets from the longest combinations down.
    pub fn lengths_descending(&self) -> impl Iterator<Item = (usize, &[String])> {
        self.buckets.iter().rev().map(|(len, combos)| (*len, combos.as_slice()))
    }

    /// Total number of combinations across all buckets.
    pub fn len(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Keyword pattern
// ─────────────────────────────────────────────────────────────────────────────

/// Case-insensitive alternation over every keyword.
///
/// Keywords are joined unescaped, so regex syntax inside a query word is
/// interpreted as regex. A query word that does not compile surfaces as
/// `HighlightError::InvalidPattern`.
#[derive(Debug, Clone)]
pub struct KeywordPattern {
    /// Finds keyword occurrences anywhere in a text
    occurrences: Option<Regex>,
    /// Accepts a whole token equal to one keyword
    token: Option<Regex>,
}

impl KeywordPattern {
    pub fn new<S: AsRef<str>>(keywords: &[S]) -> HighlightResult<Self> {
        if keywords.is_empty() {
            return Ok(Self { occurrences: None, token: None });
        }
        let alternation = keywords.iter().map(|k| k.as_ref()).collect::<Vec<&str>>().join("|");
        let occurrences = RegexBuilder::new(&alternation).case_insensitive(true).build()?;
        let token = RegexBuilder::new(&format!("^(?:{})$", alternation))
            .case_insensitive(true)
            .build()?;
        Ok(Self {
            occurrences: Some(occurrences),
            token: Some(token),
        })
    }

    /// True when the query had no keywords; nothing matches.
    pub fn is_empty(&self) -> bool {
        self.occurrences.is_none()
    }

    /// Count of non-overlapping keyword matches in `text`.
    pub fn count_in(&self, text: &str) -> usize {
        self.occurrences.as_ref().map_or(0, |re| re.find_iter(text).count())
    }

    pub fn matches_token(&self, token: &str) -> bool {
        self.token.as_ref().map_or(false, |re| re.is_match(token))
    }
}
