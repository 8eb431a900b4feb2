//! Policy: How the renderer treats nesting, crossings and duplicates
//!
//! A policy is three boolean options plus three optional hooks. The options
//! are plain configuration and can be loaded from JSON using the option
//! names verbatim; the hooks are attached with builder methods.
//!
//! # Example
//!
//! ```rust
//! use moldkit_core::policy::{judge, Policy};
//! use moldkit_core::Tag;
//!
//! let policy: Policy<Tag> = Policy::from_json(r#"{"IGNORE_NESTED_ANNOTATION": true}"#)
//!     .unwrap()
//!     .with_judge(judge::keep_longer);
//!
//! assert!(policy.options.ignore_nested_annotation);
//! assert!(policy.options.ignore_crossed_annotation);
//! ```

use crate::annotation::Annotation;
use crate::error::Result;
use crate::range::Range;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Collapses two annotations with identical ranges into one
pub type MergeFn<M> = Box<dyn Fn(Annotation<M>, Annotation<M>) -> Annotation<M>>;

/// Replaces a whole overlap group
pub type MergeAllFn<M> = Box<dyn Fn(Vec<Annotation<M>>) -> Vec<Annotation<M>>>;

/// Returns true if the first of two crossing ranges should be kept
pub type JudgeFn = Box<dyn Fn(&Range, &Range) -> bool>;

/// Boolean policy options
///
/// Missing keys take their defaults; unknown keys are rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "SCREAMING_SNAKE_CASE")]
pub struct PolicyOptions {
    /// Fail if any overlap group holds more than one annotation
    pub no_nested_annotation: bool,

    /// Resolve crossings silently (false: fail on any crossing)
    pub ignore_crossed_annotation: bool,

    /// Drop everything nested below the top-level annotations of each group
    pub ignore_nested_annotation: bool,
}

impl PolicyOptions {
    /// Parse options from a JSON object
    ///
    /// # Errors
    ///
    /// [`MoldError::InvalidPolicy`](crate::MoldError::InvalidPolicy) for
    /// malformed JSON, a non-boolean value or an unknown key.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

impl Default for PolicyOptions {
    fn default() -> Self {
        Self {
            no_nested_annotation: false,
            ignore_crossed_annotation: true,
            ignore_nested_annotation: false,
        }
    }
}

/// Rendering policy for annotations molded by `M`
pub struct Policy<M> {
    /// Boolean options
    pub options: PolicyOptions,

    merge: Option<MergeFn<M>>,
    merge_all: Option<MergeAllFn<M>>,
    judge: Option<JudgeFn>,
}

impl<M> Policy<M> {
    /// Default policy: nesting allowed, crossings resolved keeping the first
    pub fn new() -> Self {
        Self::with_options(PolicyOptions::default())
    }

    /// Policy with the given options and no hooks
    pub fn with_options(options: PolicyOptions) -> Self {
        Self {
            options,
            merge: None,
            merge_all: None,
            judge: None,
        }
    }

    /// Parse the boolean options from a JSON object
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(Self::with_options(PolicyOptions::from_json(json)?))
    }

    /// Set `NO_NESTED_ANNOTATION`
    pub fn no_nested_annotation(mut self, value: bool) -> Self {
        self.options.no_nested_annotation = value;
        self
    }

    /// Set `IGNORE_CROSSED_ANNOTATION`
    pub fn ignore_crossed_annotation(mut self, value: bool) -> Self {
        self.options.ignore_crossed_annotation = value;
        self
    }

    /// Set `IGNORE_NESTED_ANNOTATION`
    pub fn ignore_nested_annotation(mut self, value: bool) -> Self {
        self.options.ignore_nested_annotation = value;
        self
    }

    /// Set `MERGE_FUNCTION`
    pub fn with_merge<F>(mut self, merge: F) -> Self
    where
        F: Fn(Annotation<M>, Annotation<M>) -> Annotation<M> + 'static,
    {
        self.merge = Some(Box::new(merge));
        self
    }

    /// Set `MERGE_ALL_FUNCTION`
    pub fn with_merge_all<F>(mut self, merge_all: F) -> Self
    where
        F: Fn(Vec<Annotation<M>>) -> Vec<Annotation<M>> + 'static,
    {
        self.merge_all = Some(Box::new(merge_all));
        self
    }

    /// Set `JUDGE_FUNCTION`
    pub fn with_judge<F>(mut self, judge: F) -> Self
    where
        F: Fn(&Range, &Range) -> bool + 'static,
    {
        self.judge = Some(Box::new(judge));
        self
    }

    pub(crate) fn merge_fn(&self) -> Option<&MergeFn<M>> {
        self.merge.as_ref()
    }

    pub(crate) fn merge_all_fn(&self) -> Option<&MergeAllFn<M>> {
        self.merge_all.as_ref()
    }

    /// Decide a crossing between `kept` and `candidate`
    pub(crate) fn judge(&self, kept: &Range, candidate: &Range) -> bool {
        match &self.judge {
            Some(judge) => judge(kept, candidate),
            None => judge::keep_first(kept, candidate),
        }
    }
}

impl<M> Default for Policy<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M> fmt::Debug for Policy<M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Policy")
            .field("options", &self.options)
            .field("merge", &self.merge.is_some())
            .field("merge_all", &self.merge_all.is_some())
            .field("judge", &self.judge.is_some())
            .finish()
    }
}

/// Ready-made `JUDGE_FUNCTION` strategies
///
/// The first argument is the range already accepted (earlier start), the
/// second the crossing candidate.
pub mod judge {
    use crate::range::Range;

    /// Always keep the earlier-starting range
    pub fn keep_first(_kept: &Range, _candidate: &Range) -> bool {
        true
    }

    /// Always keep the later-starting range
    pub fn keep_last(_kept: &Range, _candidate: &Range) -> bool {
        false
    }

    /// Keep the strictly longer range, the later one on ties
    pub fn keep_longer(kept: &Range, candidate: &Range) -> bool {
        kept.size() > candidate.size()
    }
}
