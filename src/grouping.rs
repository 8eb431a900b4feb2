//! Grouping: Partition annotations into independent overlap clusters
//!
//! Two annotations land in the same [`Group`] if they are connected through
//! a chain of overlaps. Groups never overlap each other, so each one is
//! built, resolved and rendered on its own.
//!
//! After grouping, the optional merge hooks of the [`Policy`] run per group:
//! `MERGE_FUNCTION` folds consecutive same-range annotations, then
//! `MERGE_ALL_FUNCTION` may replace the whole group. Groups are not
//! re-partitioned afterwards.

use crate::annotation::Annotation;
use crate::policy::Policy;
use crate::range::Range;
use tracing::{debug, warn};

/// A cluster of transitively overlapping annotations
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group<M> {
    /// Union bound of every member
    pub range: Range,

    /// Members sorted by start (stable)
    pub members: Vec<Annotation<M>>,
}

impl<M> Group<M> {
    fn open(first: Annotation<M>) -> Self {
        Self {
            range: first.range,
            members: vec![first],
        }
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the group has no members
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Sweep annotations by start and cluster the overlapping ones
///
/// Equal starts keep their input order. An empty input yields no groups.
///
/// # Example
///
/// ```rust
/// use moldkit_core::grouping::group_overlapping;
/// use moldkit_core::{Annotation, Identity, Range};
///
/// let groups = group_overlapping(vec![
///     Annotation::new(1..3, Identity),
///     Annotation::new(2..3, Identity),
///     Annotation::new(1..4, Identity),
///     Annotation::new(7..8, Identity),
/// ]);
///
/// assert_eq!(groups.len(), 2);
/// assert_eq!(groups[0].range, Range::new(1, 4));
/// assert_eq!(groups[1].range, Range::new(7, 8));
/// ```
pub fn group_overlapping<M>(mut annotations: Vec<Annotation<M>>) -> Vec<Group<M>> {
    annotations.sort_by_key(|annotation| annotation.range.start);

    let mut groups: Vec<Group<M>> = Vec::new();
    for annotation in annotations {
        match groups.last_mut() {
            Some(group) if group.range.is_overlap(&annotation.range) => {
                group.range = group.range.merge(&annotation.range);
                group.members.push(annotation);
            }
            _ => groups.push(Group::open(annotation)),
        }
    }

    groups
}

/// Fold consecutive annotations sharing a range with `merge`
///
/// Only adjacent pairs are compared; the result of each merge is carried
/// forward, so a run of N same-range annotations costs N - 1 calls.
pub fn merge_same_range<M, F>(members: Vec<Annotation<M>>, merge: F) -> Vec<Annotation<M>>
where
    F: Fn(Annotation<M>, Annotation<M>) -> Annotation<M>,
{
    let mut merged: Vec<Annotation<M>> = Vec::with_capacity(members.len());
    for annotation in members {
        match merged.pop() {
            Some(last) if last.range.same_range(&annotation.range) => {
                merged.push(merge(last, annotation));
            }
            Some(last) => {
                merged.push(last);
                merged.push(annotation);
            }
            None => merged.push(annotation),
        }
    }
    merged
}

/// Group annotations and run the policy's merge hooks on every group
///
/// Empty or inverted annotations are dropped from the input and again from
/// whatever the hooks return. The group range is then recomputed from the
/// remaining members, and groups left without members are dropped.
pub fn prepare_groups<M>(annotations: Vec<Annotation<M>>, policy: &Policy<M>) -> Vec<Group<M>> {
    let mut groups = group_overlapping(drop_empty(annotations));
    debug!("grouped annotations into {} overlap groups", groups.len());

    if let Some(merge) = policy.merge_fn() {
        for group in &mut groups {
            let before = group.members.len();
            group.members = merge_same_range(std::mem::take(&mut group.members), merge);
            if group.members.len() != before {
                debug!(
                    "merged {} same-range annotations in group {}",
                    before - group.members.len(),
                    group.range
                );
            }
        }
    }

    if let Some(merge_all) = policy.merge_all_fn() {
        for group in &mut groups {
            group.members = merge_all(std::mem::take(&mut group.members));
        }
    }

    if policy.merge_fn().is_none() && policy.merge_all_fn().is_none() {
        return groups;
    }

    groups
        .into_iter()
        .filter_map(|group| {
            let members = drop_empty(group.members);
            let range = bounds(&members)?;
            Some(Group { range, members })
        })
        .collect()
}

/// Remove annotations whose range covers nothing
pub fn drop_empty<M>(annotations: Vec<Annotation<M>>) -> Vec<Annotation<M>> {
    let given = annotations.len();
    let kept: Vec<Annotation<M>> = annotations
        .into_iter()
        .filter(|annotation| !annotation.range.is_empty())
        .collect();
    if kept.len() != given {
        warn!("dropped {} empty annotation(s)", given - kept.len());
    }
    kept
}

/// Union bound of the given annotations, `None` when there are none
pub fn bounds<M>(annotations: &[Annotation<M>]) -> Option<Range> {
    let start = annotations.iter().map(|a| a.range.start).min()?;
    let end = annotations.iter().map(|a| a.range.end).max()?;
    Some(Range::new(start, end))
}
