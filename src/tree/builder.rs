//! Greedy containment tree construction
//!
//! Annotations are inserted largest first, so a span can only end up below
//! a span at least as long as itself. This is a heuristic: two crossing
//! spans become siblings and are left for the resolver to settle.

use super::node::ContainmentNode;
use crate::annotation::Annotation;
use crate::grouping::bounds;

/// Build the containment tree of one group
///
/// The root is synthetic and spans `[min start, max end)` of the group.
/// Spans are inserted by descending size; equal sizes keep their order in
/// `annotations`. Returns `None` for an empty group.
///
/// # Example
///
/// ```rust
/// use moldkit_core::tree::build_interval_tree;
/// use moldkit_core::{Annotation, Identity, Range};
///
/// let tree = build_interval_tree(vec![
///     Annotation::new(1..4, Identity),
///     Annotation::new(2..3, Identity),
/// ])
/// .unwrap();
///
/// assert_eq!(tree.range, Range::new(1, 4));
/// assert!(!tree.is_annotation());
/// assert_eq!(tree.children[0].children[0].range, Range::new(2, 3));
/// ```
pub fn build_interval_tree<M>(mut annotations: Vec<Annotation<M>>) -> Option<ContainmentNode<M>> {
    let mut root = ContainmentNode::root(bounds(&annotations)?);

    annotations.sort_by(|a, b| b.range.size().cmp(&a.range.size()));
    for annotation in annotations {
        root.insert(ContainmentNode::leaf(annotation));
    }

    Some(root)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::annotation::Identity;
    use crate::range::Range;

    fn annotations(spans: &[(usize, usize)]) -> Vec<Annotation<Identity>> {
        spans
            .iter()
            .map(|&(start, end)| Annotation::new(start..end, Identity))
            .collect()
    }

    #[test]
    fn test_empty_group() {
        assert!(build_interval_tree::<Identity>(Vec::new()).is_none());
    }

    #[test]
    fn test_single_annotation_sits_below_root() {
        let tree = build_interval_tree(annotations(&[(6, 9)])).unwrap();
        assert_eq!(tree.range, Range::new(6, 9));
        assert!(!tree.is_annotation());
        assert_eq!(tree.children.len(), 1);
        assert!(tree.children[0].is_annotation());
    }

    #[test]
    fn test_insertion_order_does_not_matter_for_nesting() {
        // Smallest given first still ends up deepest
        let tree = build_interval_tree(annotations(&[(3, 4), (2, 5), (1, 6)])).unwrap();
        assert_eq!(tree.depth(), 4);
        assert_eq!(tree.children[0].range, Range::new(1, 6));
        assert_eq!(tree.children[0].children[0].range, Range::new(2, 5));
        assert_eq!(
            tree.children[0].children[0].children[0].range,
            Range::new(3, 4)
        );
    }

    #[test]
    fn test_crossing_spans_become_siblings() {
        let tree = build_interval_tree(annotations(&[(6, 9), (1, 7)])).unwrap();
        assert_eq!(tree.range, Range::new(1, 9));

        let ranges: Vec<Range> = tree.children.iter().map(|c| c.range).collect();
        assert_eq!(ranges, vec![Range::new(1, 7), Range::new(6, 9)]);
    }

    #[test]
    fn test_child_descends_into_first_container() {
        // (3,4) fits in both crossing siblings; it goes below the earlier one
        let tree = build_interval_tree(annotations(&[(1, 5), (2, 6), (3, 4)])).unwrap();
        assert_eq!(tree.children.len(), 2);
        assert_eq!(tree.children[0].children[0].range, Range::new(3, 4));
        assert!(tree.children[1].is_leaf());
    }

    #[test]
    fn test_equal_sizes_keep_group_order() {
        let tree = build_interval_tree(vec![
            Annotation::new(1..4, "a"),
            Annotation::new(1..4, "h1"),
        ])
        .unwrap();

        let molds: Vec<&str> = tree.annotations().iter().map(|a| a.mold).collect();
        assert_eq!(molds, vec!["a", "h1"]);
        assert_eq!(tree.depth(), 3);
    }
}
