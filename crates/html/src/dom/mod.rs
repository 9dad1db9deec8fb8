//! Arena-backed document tree and the node handles that address it.

use core::sync::atomic::{AtomicU64, Ordering};

use anyhow::{Result, anyhow, bail};
use indextree::{Arena, Node, NodeId as ArenaId};
use log::trace;
use smallvec::SmallVec;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    Element { tag: String },
    Text { text: String },
    Comment { text: String },
}

/// One document node. Attributes are only meaningful on elements.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DOMNode {
    pub kind: NodeKind,
    pub attrs: SmallVec<(String, String), 4>,
}

impl DOMNode {
    /// An element with a lower-cased tag name and no attributes.
    #[inline]
    pub fn element(tag: &str) -> Self {
        Self {
            kind: NodeKind::Element {
                tag: tag.to_ascii_lowercase(),
            },
            attrs: SmallVec::new(),
        }
    }

    #[inline]
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Text { text: text.into() },
            attrs: SmallVec::new(),
        }
    }

    #[inline]
    pub fn comment(text: impl Into<String>) -> Self {
        Self {
            kind: NodeKind::Comment { text: text.into() },
            attrs: SmallVec::new(),
        }
    }

    /// Set an attribute, replacing an existing one of the same (case-insensitive) name.
    #[must_use]
    pub fn with_attr(mut self, name: &str, value: &str) -> Self {
        let name = name.to_ascii_lowercase();
        if let Some(slot) = self.attrs.iter_mut().find(|(key, _)| *key == name) {
            value.clone_into(&mut slot.1);
        } else {
            self.attrs.push((name, value.to_owned()));
        }
        self
    }

    #[inline]
    pub const fn is_element(&self) -> bool {
        matches!(self.kind, NodeKind::Element { .. })
    }

    /// Tag name for elements, `None` for text and comments.
    #[inline]
    pub fn tag(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Element { tag } => Some(tag.as_str()),
            NodeKind::Text { .. } | NodeKind::Comment { .. } => None,
        }
    }

    #[inline]
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// The `id` attribute, if set and non-empty.
    #[inline]
    pub fn element_id(&self) -> Option<&str> {
        self.attr("id").filter(|id| !id.is_empty())
    }

    /// Whitespace-separated entries of the `class` attribute.
    #[inline]
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.attr("class").unwrap_or_default().split_whitespace()
    }

    #[inline]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|candidate| candidate == class)
    }
}

static DOCUMENT_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Handle to a node of one particular [`DOM`].
///
/// The handle records which document minted it, so a handle from another document is
/// rejected even when its arena slot exists here.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    document: u64,
    index: ArenaId,
}

/// An owning document tree. Nodes are never removed once appended.
#[derive(Debug)]
pub struct DOM {
    dom: Arena<DOMNode>,
    root: ArenaId,
    document: u64,
}

impl DOM {
    /// Create a document whose root is `root` (normally the `html` element).
    pub fn new(root: DOMNode) -> Self {
        let mut dom = Arena::new();
        Self {
            root: dom.new_node(root),
            dom,
            document: DOCUMENT_COUNTER.fetch_add(1, Ordering::Relaxed),
        }
    }

    #[inline]
    const fn handle(&self, index: ArenaId) -> NodeId {
        NodeId {
            document: self.document,
            index,
        }
    }

    /// Arena index of `id` if it was minted by this document.
    #[inline]
    fn local(&self, id: NodeId) -> Option<ArenaId> {
        (id.document == self.document).then_some(id.index)
    }

    #[inline]
    pub const fn root(&self) -> NodeId {
        self.handle(self.root)
    }

    /// Data of the root node.
    #[inline]
    pub fn root_node(&self) -> &DOMNode {
        self.dom[self.root].get()
    }

    /// Append `node` as the last child of `parent`.
    ///
    /// # Errors
    /// Returns an error if `parent` does not belong to this document.
    pub fn append(&mut self, parent: NodeId, node: DOMNode) -> Result<NodeId> {
        if self.node(parent).is_none() {
            bail!("parent node {parent:?} is not part of this document");
        }
        let child = self.dom.new_node(node);
        parent
            .index
            .checked_append(child, &mut self.dom)
            .map_err(|err| anyhow!("cannot append under {parent:?}: {err}"))?;
        let child_id = self.handle(child);
        trace!(target: "html", "appended {child_id:?} under {parent:?}");
        Ok(child_id)
    }

    /// Append an element with the given tag and attributes.
    ///
    /// # Errors
    /// Returns an error if `parent` does not belong to this document.
    pub fn append_element(
        &mut self,
        parent: NodeId,
        tag: &str,
        attrs: &[(&str, &str)],
    ) -> Result<NodeId> {
        let node = attrs
            .iter()
            .fold(DOMNode::element(tag), |node, (name, value)| {
                node.with_attr(name, value)
            });
        self.append(parent, node)
    }

    /// # Errors
    /// Returns an error if `parent` does not belong to this document.
    pub fn append_text(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.append(parent, DOMNode::text(text))
    }

    /// # Errors
    /// Returns an error if `parent` does not belong to this document.
    pub fn append_comment(&mut self, parent: NodeId, text: &str) -> Result<NodeId> {
        self.append(parent, DOMNode::comment(text))
    }

    /// Node data for `id`, or `None` if the id is not part of this document.
    #[inline]
    pub fn node(&self, id: NodeId) -> Option<&DOMNode> {
        self.dom
            .get(self.local(id)?)
            .filter(|entry| !entry.is_removed())
            .map(Node::get)
    }

    /// Children of `id` in document order. Ids from another document have none.
    #[inline]
    pub fn children(&self, id: NodeId) -> impl Iterator<Item = NodeId> + '_ {
        self.local(id)
            .into_iter()
            .flat_map(move |index| index.children(&self.dom))
            .map(move |child| self.handle(child))
    }

    /// Total number of nodes, root included.
    #[inline]
    pub fn len(&self) -> usize {
        self.dom.count()
    }

    /// Always false: a document has at least its root.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.dom.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn class_attribute_splits_on_whitespace() {
        let node = DOMNode::element("HTML")
            .with_attr("id", "id")
            .with_attr("Class", " class1\tclass2  ");
        assert_eq!(node.tag(), Some("html"));
        assert_eq!(node.element_id(), Some("id"));
        assert_eq!(node.classes().collect::<Vec<_>>(), vec!["class1", "class2"]);
        assert!(node.has_class("class2"));
        assert!(!node.has_class("class"));
    }

    #[test]
    fn later_attribute_replaces_earlier() {
        let node = DOMNode::element("div")
            .with_attr("id", "first")
            .with_attr("ID", "second");
        assert_eq!(node.attrs.len(), 1);
        assert_eq!(node.element_id(), Some("second"));
    }

    #[test]
    fn ids_from_another_document_are_foreign() -> Result<()> {
        let mut other = DOM::new(DOMNode::element("html"));
        let other_root = other.root();
        let section = other.append_element(other_root, "section", &[])?;

        let mut dom = DOM::new(DOMNode::element("html"));
        let dom_root = dom.root();
        dom.append_element(dom_root, "body", &[])?;

        assert_eq!(dom.node(section), None);
        assert_eq!(dom.node(other_root), None);
        assert_eq!(dom.children(other_root).count(), 0);
        assert_eq!(dom.children(dom_root).count(), 1);
        Ok(())
    }

    #[test]
    fn text_and_comment_are_not_elements() {
        assert!(!DOMNode::text("hi").is_element());
        assert!(!DOMNode::comment("note").is_element());
        assert_eq!(DOMNode::text("hi").tag(), None);
    }
}
