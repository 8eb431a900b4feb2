//! ContainmentNode: One span in the containment tree
//!
//! Every child lies within its parent and children are kept sorted by
//! start. The root of each tree is synthetic: it spans its group and holds
//! no annotation, so it never molds text.

use crate::annotation::Annotation;
use crate::range::Range;

/// Node of a containment tree
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainmentNode<M> {
    /// Span covered by this node
    pub range: Range,

    /// The annotation placed here (None for the synthetic root)
    pub annotation: Option<Annotation<M>>,

    /// Nested nodes, sorted by start
    pub children: Vec<ContainmentNode<M>>,
}

impl<M> ContainmentNode<M> {
    /// Synthetic root spanning `range`
    pub fn root(range: Range) -> Self {
        Self {
            range,
            annotation: None,
            children: Vec::new(),
        }
    }

    /// Childless node holding `annotation`
    pub fn leaf(annotation: Annotation<M>) -> Self {
        Self {
            range: annotation.range,
            annotation: Some(annotation),
            children: Vec::new(),
        }
    }

    /// Check if this node molds text (false for the synthetic root)
    pub fn is_annotation(&self) -> bool {
        self.annotation.is_some()
    }

    /// Check if this node has no children
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Insert below the deepest node whose range contains `node`
    ///
    /// Descends into the first child (in start order) that contains the new
    /// range; otherwise the node becomes a child there, placed after any
    /// sibling with the same start.
    pub fn insert(&mut self, node: ContainmentNode<M>) {
        let mut parent = self;
        while let Some(index) = parent
            .children
            .iter()
            .position(|child| child.range.is_contain(&node.range))
        {
            parent = &mut parent.children[index];
        }

        let at = parent
            .children
            .partition_point(|child| child.range.start <= node.range.start);
        parent.children.insert(at, node);
    }

    /// Number of annotations in this subtree
    pub fn annotation_count(&self) -> usize {
        self.pre_order()
            .into_iter()
            .filter(|(node, _)| node.is_annotation())
            .count()
    }

    /// Longest root-to-leaf path, counting this node
    pub fn depth(&self) -> usize {
        self.pre_order()
            .into_iter()
            .map(|(_, level)| level)
            .max()
            .unwrap_or(0)
    }

    /// Annotations in pre-order (parents before children, siblings by start)
    pub fn annotations(&self) -> Vec<&Annotation<M>> {
        self.pre_order()
            .into_iter()
            .filter_map(|(node, _)| node.annotation.as_ref())
            .collect()
    }

    /// Every node of the subtree with its level (this node is level 1)
    fn pre_order(&self) -> Vec<(&Self, usize)> {
        let mut out = Vec::new();
        let mut pending = vec![(self, 1)];
        while let Some((node, level)) = pending.pop() {
            out.push((node, level));
            pending.extend(node.children.iter().rev().map(|child| (child, level + 1)));
        }
        out
    }

    /// Take the annotation out of this node
    pub fn into_annotation(mut self) -> Option<Annotation<M>> {
        self.annotation.take()
    }

    /// Take the children out of this node
    pub fn into_children(mut self) -> Vec<ContainmentNode<M>> {
        std::mem::take(&mut self.children)
    }

    /// Drop everything below this node's direct children
    pub fn flatten_below_children(&mut self) {
        for child in &mut self.children {
            child.children.clear();
        }
    }
}

// Tear down deep chains without recursing once per level
impl<M> Drop for ContainmentNode<M> {
    fn drop(&mut self) {
        let mut pending = std::mem::take(&mut self.children);
        while let Some(mut node) = pending.pop() {
            pending.append(&mut node.children);
        }
    }
}
