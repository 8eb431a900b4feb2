//! Containment trees over annotation spans
//!
//! Each overlap group becomes one tree: a synthetic root spanning the
//! group, with every annotation placed below the deepest span containing
//! it. Crossing spans cannot nest, so they end up as siblings until
//! [`resolve_crossings`] settles them.
//!
//! ```text
//! "0123456789" with [1,4) [6,9) [2,3)
//!
//! root [1,9)
//! ├── [1,4)
//! │   └── [2,3)
//! └── [6,9)
//! ```

mod builder;
mod node;
mod resolve;

pub use builder::build_interval_tree;
pub use node::ContainmentNode;
pub use resolve::resolve_crossings;
