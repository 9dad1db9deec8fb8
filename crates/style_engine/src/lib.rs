//! Style resolution: matches stylesheet rules against a document tree and produces a tree of
//! styled nodes carrying each node's cascaded property values.
//!
//! Only direct matches apply. Properties are not inherited from ancestors, so a child sees a
//! value only if a rule matches the child itself.

use anyhow::{Result, anyhow};
use css::Stylesheet;
use html::{DOM, DOMNode, NodeId};
use log::debug;

mod cascade;
pub mod matching;
mod rule_map;
mod styled_node;

pub use cascade::cascade_node;
pub use rule_map::{RuleMap, RuleRef};
pub use styled_node::StyledNode;

/// Resolve styles for a whole document against `stylesheet`.
pub fn resolve(dom: &DOM, stylesheet: &Stylesheet) -> StyledNode {
    let rule_map = RuleMap::from_stylesheet(stylesheet);
    resolve_with(dom, stylesheet, &rule_map)
}

fn resolve_with(dom: &DOM, stylesheet: &Stylesheet, rule_map: &RuleMap) -> StyledNode {
    let root = style_subtree(dom, stylesheet, rule_map, dom.root(), dom.root_node());
    debug!(
        target: "style_engine",
        "resolved {} node(s) against {} rule(s)",
        root.len(),
        stylesheet.len()
    );
    root
}

/// Build the styled node for `id` and, recursively, for all of its children.
fn style_subtree(
    dom: &DOM,
    stylesheet: &Stylesheet,
    rule_map: &RuleMap,
    id: NodeId,
    node: &DOMNode,
) -> StyledNode {
    let properties = cascade_node(node, stylesheet, rule_map);
    let children = dom
        .children(id)
        .filter_map(|child| {
            dom.node(child)
                .map(|child_node| style_subtree(dom, stylesheet, rule_map, child, child_node))
        })
        .collect();
    StyledNode::new(id, node.is_element(), properties, children)
}

/// Owns a stylesheet and its selector index so several documents can be styled without
/// re-indexing the rules.
#[derive(Clone, Debug, Default)]
pub struct StyleEngine {
    stylesheet: Stylesheet,
    rule_map: RuleMap,
}

impl StyleEngine {
    pub fn new(stylesheet: Stylesheet) -> Self {
        let rule_map = RuleMap::from_stylesheet(&stylesheet);
        debug!(
            target: "style_engine",
            "indexed {} selector(s) from {} rule(s)",
            rule_map.len(),
            stylesheet.len()
        );
        Self {
            stylesheet,
            rule_map,
        }
    }

    /// Replace the active stylesheet and rebuild the selector index.
    pub fn replace_stylesheet(&mut self, stylesheet: Stylesheet) {
        *self = Self::new(stylesheet);
    }

    #[inline]
    pub const fn stylesheet(&self) -> &Stylesheet {
        &self.stylesheet
    }

    /// Resolve styles for the whole document.
    pub fn resolve(&self, dom: &DOM) -> StyledNode {
        resolve_with(dom, &self.stylesheet, &self.rule_map)
    }

    /// Resolve styles for the subtree rooted at `node`.
    ///
    /// # Errors
    /// Returns an error if `node` is not part of `dom`.
    pub fn resolve_from(&self, dom: &DOM, node: NodeId) -> Result<StyledNode> {
        let data = dom
            .node(node)
            .ok_or_else(|| anyhow!("node {node:?} is not part of the document"))?;
        Ok(style_subtree(
            dom,
            &self.stylesheet,
            &self.rule_map,
            node,
            data,
        ))
    }
}
