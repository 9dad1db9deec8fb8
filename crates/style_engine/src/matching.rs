//! Selector matching against document elements.

use css::{Rule, Selector, Specificity};
use html::DOMNode;

/// Check if `node` matches a simple selector (tag/id/classes).
///
/// Text and comment nodes never match, not even `*`.
pub fn matches_selector(node: &DOMNode, selector: &Selector) -> bool {
    let Some(tag) = node.tag() else {
        return false;
    };
    if selector
        .tag()
        .is_some_and(|wanted| !wanted.eq_ignore_ascii_case(tag))
    {
        return false;
    }
    if selector
        .id()
        .is_some_and(|wanted| node.element_id() != Some(wanted))
    {
        return false;
    }
    selector
        .classes()
        .iter()
        .all(|class| node.has_class(class))
}

/// Highest specificity among the selectors of `rule` that match `node`, or `None` when the
/// rule does not apply to it.
pub fn matching_specificity(node: &DOMNode, rule: &Rule) -> Option<Specificity> {
    rule.selectors
        .iter()
        .filter(|(selector, _)| matches_selector(node, selector))
        .map(|(_, specificity)| *specificity)
        .max()
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::{Declaration, Value};

    fn element() -> DOMNode {
        DOMNode::element("html")
            .with_attr("id", "id")
            .with_attr("class", "class1 class2")
    }

    #[test]
    fn compound_parts_must_all_match() {
        let node = element();
        assert!(matches_selector(&node, &Selector::universal()));
        assert!(matches_selector(
            &node,
            &Selector::new("html", "id", ["class2", "class1"])
        ));
        assert!(matches_selector(&node, &Selector::universal().with_tag("HTML")));
        assert!(!matches_selector(&node, &Selector::universal().with_tag("body")));
        assert!(!matches_selector(&node, &Selector::universal().with_id("other")));
        assert!(!matches_selector(
            &node,
            &Selector::universal().with_class("class1").with_class("class3")
        ));
    }

    #[test]
    fn non_elements_never_match() {
        assert!(!matches_selector(&DOMNode::text("text!"), &Selector::universal()));
        assert!(!matches_selector(
            &DOMNode::comment("comment!"),
            &Selector::universal()
        ));
    }

    #[test]
    fn best_selector_of_a_rule_wins() {
        let rule = Rule::new(
            vec![
                Selector::universal().with_tag("html"),
                Selector::universal().with_id("id"),
                Selector::universal().with_id("missing"),
            ],
            vec![Declaration::new("color", Value::text("red"))],
        );
        assert_eq!(
            matching_specificity(&element(), &rule),
            Some(Specificity(1, 0, 0))
        );
        assert_eq!(matching_specificity(&DOMNode::element("div"), &rule), None);
    }
}
