//! WASM bindings for MoldKit
//!
//! This module provides JavaScript-friendly bindings for the annotation renderer.

#[cfg(feature = "wasm")]
pub mod bindings;

#[cfg(feature = "wasm")]
pub mod utils;

// Re-export main types
#[cfg(feature = "wasm")]
pub use bindings::WasmAnnotator;
