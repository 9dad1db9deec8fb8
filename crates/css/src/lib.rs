//! CSS object model shared by the style engine and the renderer: typed values, simple
//! selectors with specificity, declarations, rules and ordered stylesheets.
//!
//! Parsing CSS text is not done here; an upstream parser produces these types directly.

pub mod selector;
pub mod types;
pub mod values;

pub use selector::{Selector, Specificity};
pub use types::{Declaration, PrioritySelector, Rule, Stylesheet};
pub use values::{Length, Rgba, UNIT_SUFFIXES, Unit, Value};
