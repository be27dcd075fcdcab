//! Proximity search
//!
//! Every located occurrence is tried as the anchor of three candidate windows
//! (ending at it, centered on it, starting at it). Each window is rounded to
//! word boundaries and scored by how many keyword occurrences it contains;
//! the densest window wins.

use crate::boundary::WordBoundaries;
use crate::interface::{ProximityCandidate, ScanMethod};
use crate::keywords::KeywordPattern;
use crate::matcher::MatchIndex;
use std::ops::Range;
use tracing::trace;

/// Unrounded window of `window` bytes anchored at `offset`.
///
/// Windows anchored too close to the start of a document are pinned to its
/// first `window` bytes instead.
pub fn raw_window(method: ScanMethod, offset: usize, window: usize, len: usize) -> Range<usize> {
    match method {
        ScanMethod::Forward => {
            if offset < window {
                0..window.min(len)
            } else {
                offset - window..offset
            }
        }
        ScanMethod::Mid => {
            let half = window / 2;
            if offset < half {
                0..window.min(len)
            } else {
                offset - half..offset.saturating_add(half).min(len)
            }
        }
        ScanMethod::Backward => offset..offset.saturating_add(window).min(len),
    }
}

struct Scored<'a> {
    keyword: &'a str,
    method: ScanMethod,
    offset: usize,
    range: Range<usize>,
    occurrences: usize,
}

/// Pick the window with the most keyword occurrences.
///
/// Candidates are visited in index order, then offset order, then
/// `ScanMethod::ALL` order; a later candidate replaces the best only with a
/// strictly higher count, so the first one seen wins ties. With an empty
/// index the result is the document's leading window with zero occurrences.
pub fn proximity_search(
    document: &str,
    pattern: &KeywordPattern,
    index: &MatchIndex,
    window: usize,
) -> ProximityCandidate {
    let boundaries = WordBoundaries::new(document);
    let len = document.len();

    let best = index
        .iter()
        .flat_map(|entry| {
            entry
                .offsets
                .iter()
                .flat_map(move |&offset| ScanMethod::ALL.into_iter().map(move |method| (entry, offset, method)))
        })
        .map(|(entry, offset, method)| {
            let raw = raw_window(method, offset, window, len);
            let range = boundaries.round(raw.start, raw.end);
            Scored {
                keyword: entry.combination.as_str(),
                method,
                offset,
                occurrences: pattern.count_in(&document[range.clone()]),
                range,
            }
        })
        .reduce(|best, candidate| {
            if candidate.occurrences > best.occurrences {
                trace!(
                    keyword = candidate.keyword,
                    method = ?candidate.method,
                    offset = candidate.offset,
                    occurrences = candidate.occurrences,
                    "better window"
                );
                candidate
            } else {
                best
            }
        });

    match best {
        Some(best) => ProximityCandidate {
            keyword: best.keyword.to_string(),
            scan_method: best.method,
            occurrences: best.occurrences as u64,
            offset: best.offset as u64,
            snippet_start: best.range.start as u64,
            snippet: document[best.range].to_string(),
        },
        None => {
            let range = boundaries.round(0, window.min(len));
            ProximityCandidate {
                keyword: String::new(),
                scan_method: ScanMethod::Backward,
                occurrences: 0,
                offset: 0,
                snippet_start: range.start as u64,
                snippet: document[range].to_string(),
            }
        }
    }
}
