//! Simple selectors (`tag#id.class`) and their specificity.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Specificity represented as (ids, classes, tags), compared lexicographically.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Specificity(pub u32, pub u32, pub u32);

/// A compound selector of an optional tag, an optional id and any number of classes.
///
/// An absent tag or id matches any element; the selector with neither and no classes is the
/// universal selector (`*`).
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Selector {
    /// Tag name, lower-cased.
    tag: Option<String>,
    /// Element id.
    id: Option<String>,
    /// Classes in source order.
    classes: Vec<String>,
}

impl Selector {
    /// Build a selector from raw parts; empty strings mean "absent".
    pub fn new<I, S>(tag: &str, id: &str, classes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag: non_empty(tag).map(str::to_ascii_lowercase),
            id: non_empty(id).map(str::to_owned),
            classes: classes
                .into_iter()
                .map(Into::into)
                .filter(|class: &String| !class.is_empty())
                .collect(),
        }
    }

    /// The universal selector, `*`.
    #[inline]
    pub fn universal() -> Self {
        Self::default()
    }

    #[inline]
    #[must_use]
    pub fn with_tag(mut self, tag: &str) -> Self {
        self.tag = non_empty(tag).map(str::to_ascii_lowercase);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_id(mut self, id: &str) -> Self {
        self.id = non_empty(id).map(str::to_owned);
        self
    }

    #[inline]
    #[must_use]
    pub fn with_class(mut self, class: &str) -> Self {
        if !class.is_empty() {
            self.classes.push(class.to_owned());
        }
        self
    }

    #[inline]
    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    #[inline]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    #[inline]
    pub fn classes(&self) -> &[String] {
        &self.classes
    }

    /// True for `*`: no tag, no id, no classes.
    #[inline]
    pub fn is_universal(&self) -> bool {
        self.tag.is_none() && self.id.is_none() && self.classes.is_empty()
    }

    /// Specificity as (has id, class count, has tag).
    #[inline]
    pub fn specificity(&self) -> Specificity {
        Specificity(
            u32::from(self.id.is_some()),
            u32::try_from(self.classes.len()).unwrap_or(u32::MAX),
            u32::from(self.tag.is_some()),
        )
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_universal() {
            return formatter.write_str("*");
        }
        if let Some(tag) = &self.tag {
            formatter.write_str(tag)?;
        }
        if let Some(id) = &self.id {
            write!(formatter, "#{id}")?;
        }
        for class in &self.classes {
            write!(formatter, ".{class}")?;
        }
        Ok(())
    }
}

fn non_empty(raw: &str) -> Option<&str> {
    (!raw.is_empty()).then_some(raw)
}
