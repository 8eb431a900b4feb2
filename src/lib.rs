//! MoldKit Core - Range-annotation renderer
//!
//! Given a base text and a set of labeled spans over it, MoldKit produces a
//! new text where each span is wrapped ("molded") by a caller-supplied
//! transform. It implements:
//! - Overlap grouping of annotations
//! - Same-range merging through policy hooks
//! - Greedy containment trees over the spans of each group
//! - Crossing-conflict resolution with a pluggable judge
//! - Inside-out rendering of nested spans
//!
//! # Examples
//!
//! ```rust
//! use moldkit_core::policy::judge;
//! use moldkit_core::{render, Annotation, Policy, Tag};
//!
//! // [1,7) and [6,9) cross; keep the longer one
//! let annotations = vec![
//!     Annotation::new(1..7, Tag::new("a")),
//!     Annotation::new(6..9, Tag::new("a")),
//! ];
//! let policy = Policy::new().with_judge(judge::keep_longer);
//!
//! let out = render("0123456789", annotations, &policy).unwrap();
//! assert_eq!(out, "0<a>123456</a>789");
//! ```

pub mod annotation;
pub mod error;
pub mod grouping;
pub mod policy;
pub mod range;
pub mod render;
pub mod text;
pub mod tree;

#[cfg(feature = "wasm")]
pub mod wasm;

// Re-exports for convenience
pub use annotation::{mold_fn, Annotation, Identity, Mold, Tag};
pub use error::{MoldError, PolicyViolation, Result};
pub use policy::{Policy, PolicyOptions};
pub use range::Range;
pub use render::{layout, render};
pub use tree::ContainmentNode;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_import() {
        // Smoke test that the re-exports line up
        let annotation = Annotation::new(Range::new(0, 1), Identity);
        let out = render("x", vec![annotation], &Policy::new()).unwrap();
        assert_eq!(out, "x");
    }
}
