//! Combination locator
//!
//! Scans the document for keyword combinations, longest first, and stops at
//! the first length that produces any match. Every combination of that length
//! is still tried so the index holds all of them.

use crate::interface::HighlightResult;
use crate::keywords::CombinationTable;
use regex::RegexBuilder;
use tracing::debug;

/// Start offsets of one combination, ascending
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordMatch {
    pub combination: String,
    pub offsets: Vec<usize>,
}

/// Matched combinations in discovery order, each listed once. Only
/// combinations that matched at least once are present, and all of them share
/// one length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchIndex {
    entries: Vec<KeywordMatch>,
}

impl MatchIndex {
    pub fn locate(document: &str, table: &CombinationTable) -> HighlightResult<Self> {
        let mut entries = Vec::new();

        for (length, combinations) in table.lengths_descending() {
            for combination in combinations {
                // Repeated query words yield repeated combinations
                if entries.iter().any(|entry: &KeywordMatch| entry.combination == *combination) {
                    continue;
                }
                let regex = RegexBuilder::new(combination).case_insensitive(true).build()?;
                let offsets: Vec<usize> = regex.find_iter(document).map(|m| m.start()).collect();
                if !offsets.is_empty() {
                    entries.push(KeywordMatch {
                        combination: combination.clone(),
                        offsets,
                    });
                }
            }
            if !entries.is_empty() {
                debug!(length, matched = entries.len(), "located combinations");
                break;
            }
        }

        Ok(Self { entries })
    }

    pub fn from_entries(entries: Vec<KeywordMatch>) -> Self {
        Self { entries }
    }

    pub fn get(&self, combination: &str) -> Option<&[usize]> {
        self.entries
            .iter()
            .find(|entry| entry.combination == combination)
            .map(|entry| entry.offsets.as_slice())
    }

    pub fn iter(&self) -> impl Iterator<Item = &KeywordMatch> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interface::HighlightError;

    fn table() -> CombinationTable {
        CombinationTable::from_keywords(&["deep", "dish", "pizza"]).unwrap()
    }

    fn summary(index: &MatchIndex) -> Vec<(&str, Vec<usize>)> {
        index.iter().map(|m| (m.combination.as_str(), m.offsets.clone())).collect()
    }

    #[test]
    fn test_full_phrase_wins() {
        let doc = "I like fish. Little star's deep dish pizza sure is fantastic. Dogs are funny. \
                   Deep Dish pizza is yummy. Pizzas are full of nutrition,esp deep dish pizzas are good. \
                   They can bemade using deep dish too. I have a flat dish. Can we order pizza tonight? \
                   What makes Chicago deep dish pizza different";
        let index = MatchIndex::locate(doc, &table()).unwrap();
        assert_eq!(summary(&index), vec![("deep dish pizza", vec![27, 78, 137, 268])]);
    }

    #[test]
    fn test_pairs_when_no_triple() {
        let doc = "Chicago is famous for their deep dish. Some people like their pizza thin, \
                   others like it thick. The crust is what makes it special. New York style pizza \
                   is foldable. A deep pizza bakes longer and a deep pizza needs a pan.";
        let index = MatchIndex::locate(doc, &table()).unwrap();
        let summary = summary(&index);
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].0, "deep dish");
        assert_eq!(summary[1].0, "deep pizza");
        assert_eq!(summary[0].1, vec![28]);
        assert_eq!(summary[1].1, vec![168, 198]);
        assert!(index.get("dish pizza").is_none());
    }

    #[test]
    fn test_singles_keep_generation_order() {
        let doc = "Pizza night. We tried the deep end and a dish of olives.";
        let index = MatchIndex::locate(doc, &table()).unwrap();
        let names: Vec<&str> = index.iter().map(|m| m.combination.as_str()).collect();
        assert_eq!(names, vec!["deep", "dish", "pizza"]);
        assert_eq!(index.get("pizza"), Some(&[0usize][..]));
        assert_eq!(index.get("deep"), Some(&[26usize][..]));
        assert_eq!(index.get("dish"), Some(&[41usize][..]));
    }

    #[test]
    fn test_case_insensitive_substring_offsets() {
        let doc = "DEEP thoughts, deeper dishes";
        let table = CombinationTable::from_keywords(&["deep"]).unwrap();
        let index = MatchIndex::locate(doc, &table).unwrap();
        assert_eq!(index.get("deep"), Some(&[0usize, 15][..]));
    }

    #[test]
    fn test_no_match_is_empty() {
        let index = MatchIndex::locate("table", &table()).unwrap();
        assert!(index.is_empty());
        assert_eq!(index.len(), 0);
    }

    #[test]
    fn test_empty_table_is_empty() {
        let table = CombinationTable::from_keywords::<&str>(&[]).unwrap();
        assert!(MatchIndex::locate("deep dish pizza", &table).unwrap().is_empty());
    }

    #[test]
    fn test_explicit_buckets() {
        let table = CombinationTable::from_buckets([
            (1, vec!["dog".to_string()]),
            (2, vec!["hot dog".to_string()]),
        ]);
        let index = MatchIndex::locate("a hot dog and a dog", &table).unwrap();
        assert_eq!(summary(&index), vec![("hot dog", vec![2])]);
    }

    #[test]
    fn test_repeated_keyword_indexed_once() {
        let table = CombinationTable::from_keywords(&["pizza", "pizza"]).unwrap();
        let index = MatchIndex::locate("one pizza tonight", &table).unwrap();
        assert_eq!(summary(&index), vec![("pizza", vec![4])]);

        let index = MatchIndex::locate("pizza pizza party", &table).unwrap();
        assert_eq!(summary(&index), vec![("pizza pizza", vec![0])]);
    }

    #[test]
    fn test_invalid_combination_is_pattern_error() {
        let table = CombinationTable::from_buckets([(1, vec!["dish(".to_string()])]);
        let err = MatchIndex::locate("dish", &table).unwrap_err();
        assert!(matches!(err, HighlightError::InvalidPattern(_)));
    }
}
