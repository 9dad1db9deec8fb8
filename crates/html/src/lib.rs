//! Document tree consumed by the style engine.
//!
//! Tokenizing and tree construction happen upstream; this crate only owns the resulting
//! element/text/comment tree in an `indextree` arena.

pub mod dom;

pub use dom::{DOM, DOMNode, NodeId, NodeKind};
