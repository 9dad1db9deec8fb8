//! Cascade resolution for a single element.
//!
//! Matching rules are applied lowest priority first into one property map, so a later write
//! replaces an earlier one. Priority is `(specificity, source order)`: higher specificity wins,
//! and on equal specificity the rule written later in the stylesheet wins. Inside one rule
//! declarations apply in written order.

use std::collections::HashMap;

use css::{Rule, Specificity, Stylesheet, Value};
use html::DOMNode;
use log::trace;

use crate::matching::matches_selector;
use crate::rule_map::RuleMap;

/// A rule that matched the element, with the metadata used to order it.
#[derive(Clone, Debug)]
struct CascadedRule<'sheet> {
    /// Winning selector specificity for the rule.
    specificity: Specificity,
    /// Rule position in the stylesheet, used as a tie-breaker.
    source_index: usize,
    rule: &'sheet Rule,
}

/// Collect the rules matching `node`, ordered lowest priority first.
fn matched_rules<'sheet>(
    node: &DOMNode,
    sheet: &'sheet Stylesheet,
    rule_map: &RuleMap,
) -> Vec<CascadedRule<'sheet>> {
    let mut matched: Vec<CascadedRule<'sheet>> = Vec::new();
    for rule_ref in rule_map.candidates(node) {
        let Some(rule) = sheet.rules().get(rule_ref.rule_idx) else {
            continue;
        };
        let Some((selector, specificity)) = rule.selectors.get(rule_ref.selector_idx) else {
            continue;
        };
        if !matches_selector(node, selector) {
            continue;
        }
        // Candidates arrive sorted by rule, so several matching selectors of one rule are
        // adjacent; the rule counts once, at its best specificity.
        if let Some(last) = matched
            .last_mut()
            .filter(|last| last.source_index == rule_ref.rule_idx)
        {
            last.specificity = last.specificity.max(*specificity);
            continue;
        }
        matched.push(CascadedRule {
            specificity: *specificity,
            source_index: rule_ref.rule_idx,
            rule,
        });
    }
    matched.sort_by_key(|entry| (entry.specificity, entry.source_index));
    matched
}

/// Compute the effective property map of `node`. Non-elements get an empty map.
pub fn cascade_node(
    node: &DOMNode,
    sheet: &Stylesheet,
    rule_map: &RuleMap,
) -> HashMap<String, Value> {
    let mut props: HashMap<String, Value> = HashMap::new();
    if !node.is_element() {
        return props;
    }
    let matched = matched_rules(node, sheet, rule_map);
    trace!(
        target: "style_engine",
        "<{}> matched {} rule(s)",
        node.tag().unwrap_or_default(),
        matched.len()
    );
    for entry in matched {
        for declaration in &entry.rule.declarations {
            props.insert(declaration.name.clone(), declaration.value.clone());
        }
    }
    props
}

#[cfg(test)]
mod tests {
    use super::*;
    use css::{Declaration, Selector};

    fn rule(selector: Selector, declarations: &[(&str, &str)]) -> Rule {
        Rule::new(
            vec![selector],
            declarations
                .iter()
                .map(|(name, value)| Declaration::new(*name, Value::text(*value)))
                .collect(),
        )
    }

    fn cascade(sheet: &Stylesheet, node: &DOMNode) -> HashMap<String, Value> {
        cascade_node(node, sheet, &RuleMap::from_stylesheet(sheet))
    }

    #[test]
    fn later_declaration_in_one_rule_wins() {
        let sheet: Stylesheet = [rule(
            Selector::universal().with_tag("html"),
            &[("color", "red"), ("color", "blue")],
        )]
        .into_iter()
        .collect();
        let props = cascade(&sheet, &DOMNode::element("html"));
        assert_eq!(props.get("color"), Some(&Value::text("blue")));
    }

    #[test]
    fn specificity_beats_source_order() {
        let sheet: Stylesheet = [
            rule(Selector::universal().with_id("id"), &[("color", "id")]),
            rule(Selector::universal().with_class("c1"), &[("color", "class")]),
            rule(Selector::universal().with_tag("html"), &[("color", "tag")]),
        ]
        .into_iter()
        .collect();
        let node = DOMNode::element("html")
            .with_attr("id", "id")
            .with_attr("class", "c1");
        assert_eq!(cascade(&sheet, &node).get("color"), Some(&Value::text("id")));
    }

    #[test]
    fn equal_specificity_falls_back_to_source_order() {
        let sheet: Stylesheet = [
            rule(Selector::universal().with_class("a"), &[("display", "inline")]),
            rule(Selector::universal().with_class("b"), &[("display", "block")]),
        ]
        .into_iter()
        .collect();
        let node = DOMNode::element("div").with_attr("class", "b a");
        assert_eq!(
            cascade(&sheet, &node).get("display"),
            Some(&Value::text("block"))
        );
    }

    #[test]
    fn rule_with_several_matching_selectors_uses_its_best_one() {
        let sheet: Stylesheet = [
            Rule::new(
                vec![
                    Selector::universal().with_tag("div"),
                    Selector::universal().with_id("x"),
                ],
                vec![Declaration::new("color", Value::text("from-id"))],
            ),
            rule(Selector::universal().with_class("c"), &[("color", "from-class")]),
        ]
        .into_iter()
        .collect();
        let node = DOMNode::element("div")
            .with_attr("id", "x")
            .with_attr("class", "c");
        assert_eq!(
            cascade(&sheet, &node).get("color"),
            Some(&Value::text("from-id"))
        );
    }

    #[test]
    fn non_elements_get_no_properties() {
        let sheet: Stylesheet = [rule(Selector::universal(), &[("color", "red")])]
            .into_iter()
            .collect();
        assert!(cascade(&sheet, &DOMNode::comment("note")).is_empty());
    }
}
