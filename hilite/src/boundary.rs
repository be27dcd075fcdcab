//! Word-boundary rounding
//!
//! Widens a byte range of the document outward so it neither starts nor ends
//! in the middle of a word. Boundaries are UAX#29 word boundaries, so
//! `star's` and `3.14` stay whole while punctuation and whitespace runs are
//! separate segments.
//!
//! The start moves to the last boundary strictly before it and the end to the
//! first boundary strictly after it. A range that already sits on boundaries
//! therefore still grows by one segment on each side.

use std::ops::Range;
use unicode_segmentation::UnicodeSegmentation;

/// Sorted word-boundary offsets of one document, including `0` and `len`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordBoundaries {
    offsets: Vec<usize>,
    len: usize,
}

impl WordBoundaries {
    pub fn new(document: &str) -> Self {
        let mut offsets: Vec<usize> = document.split_word_bound_indices().map(|(start, _)| start).collect();
        offsets.push(document.len());
        Self {
            offsets,
            len: document.len(),
        }
    }

    /// Last boundary strictly before `offset`
    pub fn preceding(&self, offset: usize) -> Option<usize> {
        let idx = self.offsets.partition_point(|&b| b < offset);
        idx.checked_sub(1).map(|i| self.offsets[i])
    }

    /// First boundary strictly after `offset`
    pub fn following(&self, offset: usize) -> Option<usize> {
        let idx = self.offsets.partition_point(|&b| b <= offset);
        self.offsets.get(idx).copied()
    }

    /// Round `start..end` outward to word boundaries.
    ///
    /// Both ends are clamped to the last byte first, so out-of-range input is
    /// accepted. The result always lies on char boundaries of the document and
    /// contains the clamped input range.
    pub fn round(&self, start: usize, end: usize) -> Range<usize> {
        if self.len == 0 {
            return 0..0;
        }
        let last = self.len - 1;
        let start = self.preceding(start.min(last)).unwrap_or(0);
        let end = self.following(end.min(last)).unwrap_or(self.len);
        start.min(end)..end
    }
}

/// Slice of `document` covering `start..end` rounded to word boundaries.
pub fn round_to_word_boundaries(document: &str, start: usize, end: usize) -> &str {
    let range = WordBoundaries::new(document).round(start, end);
    &document[range]
}
