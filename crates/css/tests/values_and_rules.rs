#![cfg(test)]

use core::error::Error;

use css::{Declaration, Rgba, Rule, Selector, Specificity, Stylesheet, UNIT_SUFFIXES, Unit, Value};

#[test]
fn unit_lengths_print_without_trailing_zeros() {
    assert_eq!(Value::length(15.0, Unit::Px).to_string(), "15px");
    assert_eq!(Value::length(1.5, Unit::Em).to_string(), "1.5em");
    assert_eq!(Value::length(100.0, Unit::Px).to_string(), "100px");
    assert_eq!(Value::length(50.0, Unit::Percent).to_string(), "50%");
    assert_eq!(Value::length(0.25, Unit::Vw).to_string(), "0.25vw");
}

#[test]
fn colors_print_in_rgba_form() {
    assert_eq!(
        Value::color(229, 229, 229, 255).to_string(),
        "rgba(229, 229, 229, 255)"
    );
    assert_eq!(Rgba::TRANSPARENT_WHITE.to_string(), "rgba(255, 255, 255, 0)");
}

#[test]
fn text_prints_verbatim() {
    assert_eq!(Value::text("none").to_string(), "none");
    assert_eq!(Value::text("").to_string(), "");
}

#[test]
fn clones_do_not_share_storage() {
    let original = Value::text("block");
    let mut copy = original.clone();
    assert_eq!(copy.to_string(), original.to_string());

    if let Value::Text(text) = &mut copy {
        text.push_str("-changed");
    }
    assert_eq!(original.to_string(), "block");
    assert_eq!(copy.to_string(), "block-changed");
}

#[test]
fn declaration_copies_are_independent() {
    let first = Declaration::new("font-size", Value::length(15.0, Unit::Px));
    let mut second = first.clone();
    second.value = Value::length(2.0, Unit::Rem);
    assert_eq!(first.to_string(), "font-size: 15px;");
    assert_eq!(second.to_string(), "font-size: 2rem;");
}

#[test]
fn unit_ordinals_round_trip_through_the_suffix_table() -> Result<(), Box<dyn Error>> {
    for (index, suffix) in UNIT_SUFFIXES.iter().enumerate() {
        let unit = Unit::from_index(index)?;
        assert_eq!(unit.suffix(), *suffix);
        assert_eq!(suffix.parse::<Unit>()?, unit);
    }
    assert_eq!("PX".parse::<Unit>()?, Unit::Px);
    Ok(())
}

#[test]
fn malformed_units_fail_fast() {
    assert!(Unit::from_index(UNIT_SUFFIXES.len()).is_err());
    assert!("pt".parse::<Unit>().is_err());
}

#[test]
fn color_tokens_convert_to_channels() -> Result<(), Box<dyn Error>> {
    assert_eq!(Rgba::parse("#e5e5e5")?, Rgba::new(229, 229, 229, 255));
    assert_eq!(Rgba::parse("red")?, Rgba::new(255, 0, 0, 255));
    assert_eq!(Rgba::parse("rgb(0, 32, 0)")?, Rgba::new(0, 32, 0, 255));
    assert!(Rgba::parse("not-a-colour").is_err());
    Ok(())
}

#[test]
fn rules_cache_selector_specificity() {
    let rule = Rule::new(
        vec![
            Selector::universal().with_tag("html").with_id("id"),
            Selector::universal().with_class("c1"),
        ],
        vec![Declaration::new("display", Value::text("block"))],
    );
    assert_eq!(rule.selectors[0].1, Specificity(1, 0, 1));
    assert_eq!(rule.selectors[1].1, Specificity(0, 1, 0));
    assert_eq!(rule.to_string(), "html#id, .c1 { display: block; }");
}

#[test]
fn stylesheet_traversal_keeps_source_order() {
    let sheet: Stylesheet = ["a", "b", "c"]
        .into_iter()
        .map(|tag| Rule::new(vec![Selector::universal().with_tag(tag)], Vec::new()))
        .collect();

    let mut seen = Vec::new();
    sheet.for_each_rule(|index, rule| {
        seen.push((index, rule.selectors[0].0.to_string()));
    });
    assert_eq!(
        seen,
        vec![
            (0, "a".to_owned()),
            (1, "b".to_owned()),
            (2, "c".to_owned())
        ]
    );
    assert_eq!(sheet.len(), 3);
}
