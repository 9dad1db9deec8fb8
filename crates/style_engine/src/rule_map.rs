//! Selector index over a stylesheet, keyed by id, class and tag.

use std::collections::HashMap;

use css::Stylesheet;
use html::DOMNode;

/// Position of one selector inside a stylesheet.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct RuleRef {
    pub rule_idx: usize,
    pub selector_idx: usize,
}

/// Selectors bucketed by their most selective part so that only plausible rules are tested
/// against each element.
#[derive(Clone, Debug, Default)]
pub struct RuleMap {
    by_id: HashMap<String, Vec<RuleRef>>,
    by_class: HashMap<String, Vec<RuleRef>>,
    by_tag: HashMap<String, Vec<RuleRef>>,
    universal: Vec<RuleRef>,
}

impl RuleMap {
    pub fn from_stylesheet(sheet: &Stylesheet) -> Self {
        let mut map = Self::default();
        sheet.for_each_rule(|rule_idx, rule| {
            for (selector_idx, (selector, _)) in rule.selectors.iter().enumerate() {
                let rule_ref = RuleRef {
                    rule_idx,
                    selector_idx,
                };
                // Prefer id > class > tag; selectors with none of them go to universal.
                if let Some(id) = selector.id() {
                    map.by_id.entry(id.to_owned()).or_default().push(rule_ref);
                } else if let Some(class) = selector.classes().first() {
                    map.by_class.entry(class.clone()).or_default().push(rule_ref);
                } else if let Some(tag) = selector.tag() {
                    map.by_tag.entry(tag.to_owned()).or_default().push(rule_ref);
                } else {
                    map.universal.push(rule_ref);
                }
            }
        });
        map
    }

    /// Selectors that may match `node`, sorted by source position and free of duplicates.
    /// Candidates still have to be checked with `matches_selector`.
    pub fn candidates(&self, node: &DOMNode) -> Vec<RuleRef> {
        let Some(tag) = node.tag() else {
            return Vec::new();
        };
        let mut out: Vec<RuleRef> = self.universal.clone();
        // Selector tags are stored lower-cased; the node's may not be.
        if let Some(refs) = self.by_tag.get(tag.to_ascii_lowercase().as_str()) {
            out.extend_from_slice(refs);
        }
        if let Some(refs) = node.element_id().and_then(|id| self.by_id.get(id)) {
            out.extend_from_slice(refs);
        }
        for class in node.classes() {
            if let Some(refs) = self.by_class.get(class) {
                out.extend_from_slice(refs);
            }
        }
        out.sort_unstable();
        out.dedup();
        out
    }

    /// Number of indexed selectors.
    pub fn len(&self) -> usize {
        self.universal.len()
            + self.by_id.values().map(Vec::len).sum::<usize>()
            + self.by_class.values().map(Vec::len).sum::<usize>()
            + self.by_tag.values().map(Vec::len).sum::<usize>()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
