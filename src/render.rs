//! Renderer: Splice molded spans back into the base text
//!
//! The pipeline runs once per call and keeps no state:
//!
//! 1. **Group**: cluster overlapping annotations
//! 2. **Merge**: run `MERGE_FUNCTION` / `MERGE_ALL_FUNCTION` per group
//! 3. **Build**: one containment tree per group
//! 4. **Resolve**: drop crossing siblings, failing if the policy forbids it
//! 5. **Render**: mold every tree inside-out and splice it between literal text
//!
//! Steps 1-4 are exposed on their own as [`layout`].

use crate::annotation::{Annotation, Mold};
use crate::error::{PolicyViolation, Result};
use crate::grouping::prepare_groups;
use crate::policy::Policy;
use crate::range::Range;
use crate::text::CharText;
use crate::tree::{build_interval_tree, resolve_crossings, ContainmentNode};
use tracing::debug;

/// Render `annotations` over `text` under `policy`
///
/// Offsets count characters. Text outside every annotation is copied
/// through unchanged; each annotation's mold receives its rendered interior.
///
/// # Errors
///
/// [`MoldError::PolicyViolation`](crate::MoldError::PolicyViolation) if the
/// policy forbids nesting or crossings that the annotations contain. No
/// partial output is produced.
///
/// # Example
///
/// ```rust
/// use moldkit_core::{render, Annotation, Policy, Tag};
///
/// let annotations = vec![
///     Annotation::new(1..4, Tag::new("a")),
///     Annotation::new(6..9, Tag::new("a")),
///     Annotation::new(2..3, Tag::new("a")),
/// ];
///
/// let out = render("0123456789", annotations, &Policy::new()).unwrap();
/// assert_eq!(out, "0<a>1<a>2</a>3</a>45<a>678</a>9");
/// ```
pub fn render<M: Mold>(
    text: &str,
    annotations: Vec<Annotation<M>>,
    policy: &Policy<M>,
) -> Result<String> {
    if annotations.is_empty() {
        return Ok(text.to_string());
    }

    let trees = layout(annotations, policy)?;
    let text = CharText::new(text);

    let mut out = String::with_capacity(text.as_str().len());
    let mut cursor = 0;
    for tree in &trees {
        out.push_str(text.slice(cursor, tree.range.start));
        out.push_str(&render_node(&text, tree));
        cursor = tree.range.end;
    }
    out.push_str(text.slice(cursor, text.len()));

    Ok(out)
}

/// Group, merge, build and resolve without rendering
///
/// Returns one tree per overlap group, ordered by start, exactly as
/// [`render`] would splice them. Empty or inverted annotations cover no
/// text and are dropped, whether given as input or returned by a merge hook.
pub fn layout<M>(
    annotations: Vec<Annotation<M>>,
    policy: &Policy<M>,
) -> Result<Vec<ContainmentNode<M>>> {
    let options = policy.options;
    let groups = prepare_groups(annotations, policy);
    let mut trees = Vec::with_capacity(groups.len());

    for group in groups {
        if options.no_nested_annotation && group.len() > 1 {
            return Err(PolicyViolation::NestedAnnotation {
                group: group.range,
                count: group.len(),
            }
            .into());
        }

        let group_range = group.range;
        let Some(mut tree) = build_interval_tree(group.members) else {
            continue;
        };

        let resolved = resolve_crossings(&mut tree, &|kept: &Range, candidate: &Range| {
            policy.judge(kept, candidate)
        });
        if resolved {
            debug!("resolved crossed annotations in group {}", group_range);
            if !options.ignore_crossed_annotation {
                return Err(PolicyViolation::CrossedAnnotation { group: group_range }.into());
            }
        }

        if options.ignore_nested_annotation {
            tree.flatten_below_children();
        }

        trees.push(tree);
    }

    debug!("laid out {} annotation trees", trees.len());
    Ok(trees)
}

/// Node being rendered, with its interior built up so far
struct Frame<'n, M> {
    node: &'n ContainmentNode<M>,

    /// Index of the next child to render
    next: usize,

    /// End of the last piece copied into `interior`
    cursor: usize,

    interior: String,
}

impl<'n, M> Frame<'n, M> {
    fn open(node: &'n ContainmentNode<M>) -> Self {
        Self {
            node,
            next: 0,
            cursor: node.range.start,
            interior: String::new(),
        }
    }
}

/// Render one tree: interiors first, then each node's mold
///
/// Literal text between children is copied from the base text; the
/// synthetic root has no mold and returns its interior as-is. Uses an
/// explicit stack, so nesting depth is bounded by memory only.
fn render_node<M: Mold>(text: &CharText<'_>, root: &ContainmentNode<M>) -> String {
    let mut stack = vec![Frame::open(root)];
    let mut rendered = String::new();

    while let Some(frame) = stack.last_mut() {
        let node = frame.node;
        if let Some(child) = node.children.get(frame.next) {
            frame.interior.push_str(text.slice(frame.cursor, child.range.start));
            frame.next += 1;
            frame.cursor = child.range.end;
            stack.push(Frame::open(child));
            continue;
        }

        frame.interior.push_str(text.slice(frame.cursor, node.range.end));
        let molded = match &node.annotation {
            Some(annotation) => annotation.molding(&frame.interior),
            None => std::mem::take(&mut frame.interior),
        };
        stack.pop();

        match stack.last_mut() {
            Some(parent) => parent.interior.push_str(&molded),
            None => rendered = molded,
        }
    }

    rendered
}
