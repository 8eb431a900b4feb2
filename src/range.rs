//! Range: Half-open interval over character offsets
//!
//! Every annotation covers a `Range`. The geometric predicates here drive
//! grouping, tree construction and conflict resolution.
//!
//! # Degenerate ranges
//!
//! A range with `start >= end` covers nothing. It never overlaps (and so
//! never crosses) any other range. Containment is decided purely by bounds.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Immutable half-open interval `[start, end)`
///
/// `shift` and `merge` return new values; a `Range` is never mutated in place.
///
/// # Example
///
/// ```rust
/// use moldkit_core::Range;
///
/// let outer = Range::new(1, 7);
/// let inner = Range::new(2, 3);
/// let other = Range::new(6, 9);
///
/// assert!(outer.is_contain(&inner));
/// assert!(outer.is_cross(&other));
/// assert_eq!(outer.merge(&other), Range::new(1, 9));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Range {
    /// First covered offset
    pub start: usize,

    /// One past the last covered offset
    pub end: usize,
}

impl Range {
    /// Create a new range
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Number of covered offsets (0 for degenerate ranges)
    pub fn size(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Check if this range covers nothing
    pub fn is_empty(&self) -> bool {
        self.start >= self.end
    }

    /// Smallest range covering both
    pub fn merge(&self, other: &Range) -> Range {
        Range::new(self.start.min(other.start), self.end.max(other.end))
    }

    /// Move both bounds by `offset`, saturating at zero
    pub fn shift(&self, offset: isize) -> Range {
        Range::new(
            self.start.saturating_add_signed(offset),
            self.end.saturating_add_signed(offset),
        )
    }

    /// Check if both bounds are identical
    pub fn same_range(&self, other: &Range) -> bool {
        self.start == other.start && self.end == other.end
    }

    /// Check if the two ranges share at least one offset
    pub fn is_overlap(&self, other: &Range) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }

        let (earlier, later) = if self.start > other.start {
            (other, self)
        } else {
            (self, other)
        };

        earlier.end > later.start
    }

    /// Check if `other` lies within this range
    pub fn is_contain(&self, other: &Range) -> bool {
        self.start <= other.start && self.end >= other.end
    }

    /// Check if the ranges overlap without either containing the other
    pub fn is_cross(&self, other: &Range) -> bool {
        self.is_overlap(other) && !self.is_contain(other) && !other.is_contain(self)
    }
}

impl From<std::ops::Range<usize>> for Range {
    fn from(range: std::ops::Range<usize>) -> Self {
        Range::new(range.start, range.end)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_size_and_empty() {
        assert_eq!(Range::new(1, 4).size(), 3);
        assert!(!Range::new(1, 4).is_empty());

        assert_eq!(Range::new(3, 3).size(), 0);
        assert!(Range::new(3, 3).is_empty());

        // Inverted ranges are degenerate, not negative
        assert_eq!(Range::new(5, 2).size(), 0);
        assert!(Range::new(5, 2).is_empty());
    }

    #[test]
    fn test_merge() {
        let a = Range::new(1, 4);
        let b = Range::new(6, 9);
        assert_eq!(a.merge(&b), Range::new(1, 9));
        assert_eq!(b.merge(&a), Range::new(1, 9));

        // Operands are untouched
        assert_eq!(a, Range::new(1, 4));
    }

    #[test]
    fn test_shift() {
        let range = Range::new(4, 7);
        assert_eq!(range.shift(3), Range::new(7, 10));
        assert_eq!(range.shift(-4), Range::new(0, 3));
        assert_eq!(range.shift(-6), Range::new(0, 1));
        assert_eq!(range, Range::new(4, 7));
    }

    #[test]
    fn test_overlap_is_half_open() {
        let a = Range::new(1, 4);
        assert!(a.is_overlap(&Range::new(3, 5)));
        assert!(Range::new(3, 5).is_overlap(&a));

        // Touching ranges share no offset
        assert!(!a.is_overlap(&Range::new(4, 6)));
        assert!(!Range::new(4, 6).is_overlap(&a));
    }

    #[test]
    fn test_empty_range_never_overlaps() {
        let outer = Range::new(1, 5);
        let point = Range::new(3, 3);

        assert!(!outer.is_overlap(&point));
        assert!(!point.is_overlap(&outer));
        assert!(!outer.is_cross(&point));

        // Containment still follows the bounds
        assert!(outer.is_contain(&point));
    }

    #[test]
    fn test_contain() {
        let outer = Range::new(1, 7);
        assert!(outer.is_contain(&Range::new(2, 3)));
        assert!(outer.is_contain(&outer));
        assert!(!outer.is_contain(&Range::new(6, 9)));
        assert!(!Range::new(2, 3).is_contain(&outer));
    }

    #[test]
    fn test_cross_is_symmetric() {
        let a = Range::new(1, 7);
        let b = Range::new(6, 9);
        assert!(a.is_cross(&b));
        assert!(b.is_cross(&a));

        // Nesting is not crossing, in either direction
        let inner = Range::new(2, 3);
        assert!(!a.is_cross(&inner));
        assert!(!inner.is_cross(&a));

        // Disjoint is not crossing
        assert!(!a.is_cross(&Range::new(8, 9)));
    }

    #[test]
    fn test_same_range() {
        assert!(Range::new(1, 4).same_range(&Range::new(1, 4)));
        assert!(!Range::new(1, 4).same_range(&Range::new(1, 5)));
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Range::new(1, 4)), "1-4");
    }

    #[test]
    fn test_from_std_range() {
        assert_eq!(Range::from(2..5), Range::new(2, 5));
    }

    #[test]
    fn test_serialization() {
        let range = Range::new(1, 4);

        let json = serde_json::to_string(&range).unwrap();
        assert_eq!(json, r#"{"start":1,"end":4}"#);

        let deserialized: Range = serde_json::from_str(&json).unwrap();
        assert_eq!(range, deserialized);
    }
}
