//! Character-offset view over the base text
//!
//! Annotation offsets count Unicode scalar values, not bytes. `CharText`
//! maps them to byte positions once so every slice is a cheap `&str`.

use crate::range::Range;

/// Base text indexed by character offset
///
/// Slicing clamps to the text length and yields `""` whenever the start is
/// not before the end, so rendering never panics on stray offsets.
#[derive(Debug, Clone)]
pub struct CharText<'a> {
    text: &'a str,

    /// Byte position of every char, plus `text.len()` as the final entry
    boundaries: Vec<usize>,
}

impl<'a> CharText<'a> {
    /// Index the given text
    pub fn new(text: &'a str) -> Self {
        let mut boundaries: Vec<usize> = text.char_indices().map(|(byte, _)| byte).collect();
        boundaries.push(text.len());

        Self { text, boundaries }
    }

    /// Number of characters
    pub fn len(&self) -> usize {
        self.boundaries.len() - 1
    }

    /// Check if the text is empty
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Underlying string
    pub fn as_str(&self) -> &'a str {
        self.text
    }

    /// Characters `[start, end)`, clamped to the text
    pub fn slice(&self, start: usize, end: usize) -> &'a str {
        let start = start.min(self.len());
        let end = end.min(self.len());
        if start >= end {
            return "";
        }

        &self.text[self.boundaries[start]..self.boundaries[end]]
    }

    /// Characters covered by `range`
    pub fn slice_range(&self, range: &Range) -> &'a str {
        self.slice(range.start, range.end)
    }
}
