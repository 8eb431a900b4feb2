//! Annotations: Labeled spans over the base text
//!
//! An [`Annotation`] pairs a [`Range`] with a [`Mold`]. The renderer decides
//! nesting and conflicts from the range alone and calls the mold once the
//! annotation's interior has been rendered.
//!
//! # Example
//!
//! ```rust
//! use moldkit_core::{Annotation, Range, Tag};
//!
//! let text = "I can eat glass without harm";
//! let link = Annotation::new(Range::new(10, 15), Tag::new("a"));
//!
//! assert_eq!(link.anchor(text), "glass");
//! assert_eq!(link.preview(text, 10, true), "can eat <a>glass</a> without");
//! ```

mod mold;

pub use mold::{mold_fn, FromFn, Identity, Mold, Tag};

use crate::range::Range;
use crate::text::CharText;
use serde::{Deserialize, Serialize};

/// A span of the base text plus the mold that wraps it
///
/// Serialized with the range flattened:
/// `{"start":1,"end":4,"mold":{"name":"a"}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Annotation<M> {
    /// Covered character offsets
    #[serde(flatten)]
    pub range: Range,

    /// Transform applied to the rendered interior
    pub mold: M,
}

impl<M> Annotation<M> {
    /// Create a new annotation
    pub fn new(range: impl Into<Range>, mold: M) -> Self {
        Self {
            range: range.into(),
            mold,
        }
    }

    /// First covered offset
    pub fn start(&self) -> usize {
        self.range.start
    }

    /// One past the last covered offset
    pub fn end(&self) -> usize {
        self.range.end
    }

    /// The covered substring of `text`
    pub fn anchor<'t>(&self, text: &'t str) -> &'t str {
        CharText::new(text).slice_range(&self.range)
    }
}

impl<M: Mold> Annotation<M> {
    /// Apply this annotation's mold
    pub fn molding(&self, inner: &str) -> String {
        self.mold.mold(inner)
    }

    /// The anchor with up to `window` characters of context on each side
    ///
    /// When the window stops short of the text start, the first word of the
    /// left context may be cut and is dropped; likewise the last word of the
    /// right context when the window stops short of the text end. With
    /// `molded` the anchor is passed through the mold.
    pub fn preview(&self, text: &str, window: usize, molded: bool) -> String {
        let text = CharText::new(text);
        let anchor = text.slice_range(&self.range);
        let left = text.slice(self.range.start.saturating_sub(window), self.range.start);
        let right = text.slice(self.range.end, self.range.end.saturating_add(window));

        let left = if self.range.start >= window {
            match left.find(char::is_whitespace) {
                Some(cut) => &left[cut..],
                None => "",
            }
        } else {
            left
        };
        let right = if self.range.end.saturating_add(window) <= text.len() {
            match right.rfind(char::is_whitespace) {
                Some(cut) => &right[..cut],
                None => "",
            }
        } else {
            right
        };

        let anchor = if molded {
            self.molding(anchor)
        } else {
            anchor.to_string()
        };

        format!("{}{}{}", left.trim_start(), anchor, right.trim_end())
    }
}
