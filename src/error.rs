//! Error types for MoldKit
//!
//! Rendering is a pure transform, so the only runtime failure is a policy
//! violation. Configuration parsing adds the second variant.

use crate::range::Range;
use thiserror::Error;

/// Result type alias for MoldKit operations
pub type Result<T> = std::result::Result<T, MoldError>;

/// Top-level error type
#[derive(Error, Debug)]
pub enum MoldError {
    /// The annotation set cannot be rendered under the active policy
    #[error("Policy violation: {0}")]
    PolicyViolation(#[from] PolicyViolation),

    /// A policy document could not be parsed
    #[error("Invalid policy: {0}")]
    InvalidPolicy(#[from] serde_json::Error),
}

impl MoldError {
    /// Get the violation if this is a policy failure
    pub fn violation(&self) -> Option<&PolicyViolation> {
        match self {
            MoldError::PolicyViolation(violation) => Some(violation),
            MoldError::InvalidPolicy(_) => None,
        }
    }
}

/// Reason a render was refused
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PolicyViolation {
    /// `NO_NESTED_ANNOTATION` is set and an overlap group holds several annotations
    #[error("nested annotations are not allowed (group {group} holds {count} annotations)")]
    NestedAnnotation { group: Range, count: usize },

    /// `IGNORE_CROSSED_ANNOTATION` is unset and a crossing had to be resolved
    #[error("cannot render crossed annotations in group {group}")]
    CrossedAnnotation { group: Range },
}
