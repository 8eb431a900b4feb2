//! Conflict resolution: Remove crossing siblings from a containment tree
//!
//! Children are sorted by start, so one left-to-right pass per node finds
//! every crossing between neighbours. The judge decides which side of each
//! crossing survives; the loser is dropped together with its subtree.

use super::node::ContainmentNode;
use crate::range::Range;
use tracing::trace;

/// Prune crossing siblings at every level of the tree
///
/// `judge(kept, candidate)` is called once per crossing, with the range
/// accepted so far and the later-starting range that crosses it; true keeps
/// `kept`, false replaces it with `candidate`. Returns true if anything was
/// discarded anywhere in the subtree.
///
/// # Example
///
/// ```rust
/// use moldkit_core::tree::{build_interval_tree, resolve_crossings};
/// use moldkit_core::{Annotation, Identity, Range};
///
/// let mut tree = build_interval_tree(vec![
///     Annotation::new(1..7, Identity),
///     Annotation::new(6..9, Identity),
/// ])
/// .unwrap();
///
/// let resolved = resolve_crossings(&mut tree, &|kept: &Range, candidate: &Range| {
///     kept.size() > candidate.size()
/// });
///
/// assert!(resolved);
/// assert_eq!(tree.children.len(), 1);
/// assert_eq!(tree.children[0].range, Range::new(1, 7));
/// ```
pub fn resolve_crossings<M, J>(node: &mut ContainmentNode<M>, judge: &J) -> bool
where
    J: Fn(&Range, &Range) -> bool + ?Sized,
{
    let mut resolved = false;

    // Pre-order walk: every level is pruned before its survivors are visited
    let mut pending = vec![node];
    while let Some(node) = pending.pop() {
        resolved |= prune_level(node, judge);
        pending.extend(node.children.iter_mut().rev());
    }

    resolved
}

/// One left-to-right pass over the direct children of `node`
fn prune_level<M, J>(node: &mut ContainmentNode<M>, judge: &J) -> bool
where
    J: Fn(&Range, &Range) -> bool + ?Sized,
{
    if node.children.len() < 2 {
        return false;
    }

    let before = node.children.len();
    let mut kept: Vec<ContainmentNode<M>> = Vec::with_capacity(before);

    for candidate in node.children.drain(..) {
        match kept.last_mut() {
            Some(last) if last.range.is_cross(&candidate.range) => {
                let keep_last = judge(&last.range, &candidate.range);
                trace!(
                    "crossing {} / {}: keeping {}",
                    last.range,
                    candidate.range,
                    if keep_last { last.range } else { candidate.range }
                );
                if !keep_last {
                    *last = candidate;
                }
            }
            _ => kept.push(candidate),
        }
    }

    node.children = kept;
    node.children.len() != before
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::{Annotation, Identity};
    use crate::policy::judge;
    use crate::tree::build_interval_tree;
    use std::cell::Cell;

    fn tree(spans: &[(usize, usize)]) -> ContainmentNode<Identity> {
        build_interval_tree(
            spans
                .iter()
                .map(|&(start, end)| Annotation::new(start..end, Identity))
                .collect(),
        )
        .unwrap()
    }

    fn child_ranges(node: &ContainmentNode<Identity>) -> Vec<Range> {
        node.children.iter().map(|c| c.range).collect()
    }

    #[test]
    fn test_no_crossing_is_untouched() {
        let mut root = tree(&[(1, 4), (6, 9), (2, 3)]);
        let before = root.clone();

        assert!(!resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(root, before);
    }

    #[test]
    fn test_default_judge_keeps_first() {
        let mut root = tree(&[(1, 7), (6, 9)]);
        assert!(resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(child_ranges(&root), vec![Range::new(1, 7)]);
    }

    #[test]
    fn test_false_judge_keeps_candidate() {
        let mut root = tree(&[(1, 7), (6, 9)]);
        assert!(resolve_crossings(&mut root, &judge::keep_last));
        assert_eq!(child_ranges(&root), vec![Range::new(6, 9)]);
    }

    #[test]
    fn test_chain_compares_against_survivor() {
        // (1,4) x (3,6) -> keep (3,6); (3,6) x (5,8) -> keep (5,8)
        let mut root = tree(&[(1, 4), (3, 6), (5, 8)]);
        let calls = Cell::new(0);
        let resolved = resolve_crossings(&mut root, &|_: &Range, _: &Range| {
            calls.set(calls.get() + 1);
            false
        });

        assert!(resolved);
        assert_eq!(calls.get(), 2);
        assert_eq!(child_ranges(&root), vec![Range::new(5, 8)]);
    }

    #[test]
    fn test_disjoint_after_crossing_is_appended() {
        let mut root = tree(&[(1, 4), (3, 6), (7, 9)]);
        assert!(resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(child_ranges(&root), vec![Range::new(1, 4), Range::new(7, 9)]);
    }

    #[test]
    fn test_loser_subtree_is_dropped() {
        // (6,9) holds (7,8); losing the crossing removes both
        let mut root = tree(&[(1, 7), (6, 9), (7, 8)]);
        assert_eq!(root.annotation_count(), 3);

        assert!(resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(root.annotation_count(), 1);
    }

    #[test]
    fn test_resolves_below_single_child() {
        // A lone outer span with two crossing children
        let mut root = tree(&[(0, 10), (1, 5), (4, 8)]);
        assert_eq!(root.children.len(), 1);
        assert_eq!(root.children[0].children.len(), 2);

        assert!(resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(child_ranges(&root.children[0]), vec![Range::new(1, 5)]);
    }

    #[test]
    fn test_deep_chain_resolves_at_the_bottom() {
        // 10_000 nested spans with a crossing pair below the innermost one
        let n = 10_000;
        let mut spans: Vec<(usize, usize)> = (0..n).map(|i| (i, 3 * n - i)).collect();
        spans.push((n, n + 4));
        spans.push((n + 2, n + 6));
        let mut root = tree(&spans);

        assert!(resolve_crossings(&mut root, &judge::keep_first));
        assert_eq!(root.annotation_count(), n + 1);
        assert_eq!(root.depth(), n + 2);
    }

    #[test]
    fn test_judge_not_called_without_crossing() {
        let mut root = tree(&[(1, 4), (6, 9)]);
        let called = Cell::new(false);
        resolve_crossings(&mut root, &|_: &Range, _: &Range| {
            called.set(true);
            true
        });
        assert!(!called.get());
    }
}
