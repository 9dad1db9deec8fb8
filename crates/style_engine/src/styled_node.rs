//! The styled tree produced by a resolve pass.

use std::collections::HashMap;

use css::Value;
use html::NodeId;

/// A document node together with the properties the cascade resolved for it.
///
/// The styled tree mirrors the document tree one to one, text and comment nodes included
/// (with empty property maps). It is built once and never mutated afterwards.
#[derive(Clone, Debug, PartialEq)]
pub struct StyledNode {
    node: NodeId,
    element: bool,
    properties: HashMap<String, Value>,
    children: Vec<StyledNode>,
}

impl StyledNode {
    pub(crate) fn new(
        node: NodeId,
        element: bool,
        properties: HashMap<String, Value>,
        children: Vec<Self>,
    ) -> Self {
        Self {
            node,
            element,
            properties,
            children,
        }
    }

    /// Resolved value of `name`, or `None` when no matching rule set it.
    #[inline]
    pub fn value(&self, name: &str) -> Option<&Value> {
        self.properties.get(name)
    }

    /// Resolved value of `name`, falling back to the caller's `default`.
    #[inline]
    pub fn value_or<'node>(&'node self, name: &str, default: &'node Value) -> &'node Value {
        self.value(name).unwrap_or(default)
    }

    /// Styled children in document order.
    #[inline]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// All resolved `(name, value)` pairs, in no particular order.
    #[inline]
    pub fn properties(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.properties
            .iter()
            .map(|(name, value)| (name.as_str(), value))
    }

    /// The document node this styled node was built from.
    #[inline]
    pub const fn node(&self) -> NodeId {
        self.node
    }

    #[inline]
    pub const fn is_element(&self) -> bool {
        self.element
    }

    /// Number of nodes in this subtree, this node included.
    pub fn len(&self) -> usize {
        1 + self.children.iter().map(Self::len).sum::<usize>()
    }

    /// Always false: a subtree contains at least its own root.
    pub const fn is_empty(&self) -> bool {
        false
    }
}
