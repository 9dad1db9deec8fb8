//! Declarations, rules and the ordered stylesheet that holds them.

use core::fmt;

use serde::{Deserialize, Serialize};

use crate::selector::{Selector, Specificity};
use crate::values::Value;

/// A property name bound to an owned value.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Declaration {
    pub name: String,
    pub value: Value,
}

impl Declaration {
    #[inline]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self {
            name: name.into(),
            value,
        }
    }
}

impl fmt::Display for Declaration {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}: {};", self.name, self.value)
    }
}

/// A selector with its cached specificity.
pub type PrioritySelector = (Selector, Specificity);

/// A style rule: its declarations apply wherever any one of its selectors matches.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Rule {
    pub selectors: Vec<PrioritySelector>,
    pub declarations: Vec<Declaration>,
}

impl Rule {
    /// Build a rule, caching each selector's specificity.
    pub fn new(selectors: Vec<Selector>, declarations: Vec<Declaration>) -> Self {
        let selectors = selectors
            .into_iter()
            .map(|selector| {
                let specificity = selector.specificity();
                (selector, specificity)
            })
            .collect();
        Self {
            selectors,
            declarations,
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, (selector, _)) in self.selectors.iter().enumerate() {
            if index > 0 {
                formatter.write_str(", ")?;
            }
            write!(formatter, "{selector}")?;
        }
        formatter.write_str(" {")?;
        for declaration in &self.declarations {
            write!(formatter, " {declaration}")?;
        }
        formatter.write_str(" }")
    }
}

/// Rules in source order. Position in `rules` is the cascade tie-breaker.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stylesheet {
    rules: Vec<Rule>,
}

impl Stylesheet {
    #[inline]
    pub const fn new() -> Self {
        Self { rules: Vec::new() }
    }

    #[inline]
    pub fn push(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    #[inline]
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Visit every rule with its source index, in source order.
    pub fn for_each_rule<F>(&self, mut visit: F)
    where
        F: FnMut(usize, &Rule),
    {
        for (source_index, rule) in self.rules.iter().enumerate() {
            visit(source_index, rule);
        }
    }
}

impl FromIterator<Rule> for Stylesheet {
    fn from_iter<I: IntoIterator<Item = Rule>>(iter: I) -> Self {
        Self {
            rules: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for Stylesheet {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rule in &self.rules {
            writeln!(formatter, "{rule}")?;
        }
        Ok(())
    }
}
