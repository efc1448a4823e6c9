#![deny(unsafe_code)]

//! Before/after tree preview rendering.
//!
//! Rendering is a pure function of (value, expanded-path set); the caller
//! owns the [`PreviewState`] and discards it when the previewed document
//! changes.

pub mod state;
pub mod tree;

pub use state::PreviewState;
pub use tree::{NodeKind, Preview, PreviewNode, render_document, render_value};
