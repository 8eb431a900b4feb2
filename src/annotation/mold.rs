//! Mold: The transform an annotation applies to its rendered interior
//!
//! The renderer only ever calls [`Mold::mold`]; it never inspects which
//! concrete mold it holds. Heterogeneous annotation lists use
//! `Box<dyn Mold>`.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;
use std::sync::Arc;

/// Transform applied to the text an annotation covers
///
/// `inner` is the already-rendered interior: nested annotations are molded
/// before their parent (inside-out application).
pub trait Mold {
    /// Wrap the rendered interior
    fn mold(&self, inner: &str) -> String;
}

impl<M: Mold + ?Sized> Mold for &M {
    fn mold(&self, inner: &str) -> String {
        (**self).mold(inner)
    }
}

impl<M: Mold + ?Sized> Mold for Box<M> {
    fn mold(&self, inner: &str) -> String {
        (**self).mold(inner)
    }
}

impl<M: Mold + ?Sized> Mold for Rc<M> {
    fn mold(&self, inner: &str) -> String {
        (**self).mold(inner)
    }
}

impl<M: Mold + ?Sized> Mold for Arc<M> {
    fn mold(&self, inner: &str) -> String {
        (**self).mold(inner)
    }
}

/// Mold that leaves the interior untouched
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity;

impl Mold for Identity {
    fn mold(&self, inner: &str) -> String {
        inner.to_string()
    }
}

/// Markup tag mold: `<name k="v">inner</name>`
///
/// Attributes are emitted in key order with `&`, `<`, `>` and `"` escaped.
/// The interior is emitted as-is.
///
/// # Example
///
/// ```rust
/// use moldkit_core::{Mold, Tag};
///
/// let link = Tag::new("a").with_attribute("href", "/glass");
/// assert_eq!(link.mold("glass"), r#"<a href="/glass">glass</a>"#);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Element name
    pub name: String,

    /// Attributes, serialized only when present
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub attributes: BTreeMap<String, String>,
}

impl Tag {
    /// Create a tag without attributes
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attributes: BTreeMap::new(),
        }
    }

    /// Add (or replace) an attribute
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }
}

impl Mold for Tag {
    fn mold(&self, inner: &str) -> String {
        let mut out = String::with_capacity(inner.len() + 2 * self.name.len() + 5);
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attributes {
            out.push(' ');
            out.push_str(key);
            out.push_str("=\"");
            push_escaped(&mut out, value);
            out.push('"');
        }
        out.push('>');
        out.push_str(inner);
        out.push_str("</");
        out.push_str(&self.name);
        out.push('>');
        out
    }
}

fn push_escaped(out: &mut String, value: &str) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

/// Mold backed by a closure, see [`mold_fn`]
#[derive(Clone, Copy)]
pub struct FromFn<F>(F);

impl<F> Mold for FromFn<F>
where
    F: Fn(&str) -> String,
{
    fn mold(&self, inner: &str) -> String {
        (self.0)(inner)
    }
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FromFn(..)")
    }
}

/// Build a mold from a closure
///
/// ```rust
/// use moldkit_core::{mold_fn, Mold};
///
/// let shout = mold_fn(|inner: &str| inner.to_uppercase());
/// assert_eq!(shout.mold("glass"), "GLASS");
/// ```
pub fn mold_fn<F>(f: F) -> FromFn<F>
where
    F: Fn(&str) -> String,
{
    FromFn(f)
}
