//! Selector parsing and matching
//!
//! Only the two selector forms the controller needs exist: `#id` for a
//! single element and `.class` for a collection. Anything else is a
//! configuration error, surfaced when the selector string is parsed.

use std::fmt;
use std::str::FromStr;

use super::element::Element;
use super::error::PageError;

/// A parsed element selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selector {
    /// Matches the element carrying the given html id (`#search`)
    Id(String),
    /// Matches every element carrying the given class (`.plugin`)
    Class(String),
}

impl Selector {
    /// Whether `element` matches this selector
    #[must_use]
    pub fn matches(&self, element: &Element) -> bool {
        match self {
            Self::Id(id) => element.id() == Some(id.as_str()),
            Self::Class(class) => element.has_class(class),
        }
    }
}

impl FromStr for Selector {
    type Err = PageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(id) = s.strip_prefix('#') {
            if !id.is_empty() {
                return Ok(Self::Id(id.to_string()));
            }
        } else if let Some(class) = s.strip_prefix('.') {
            if !class.is_empty() {
                return Ok(Self::Class(class.to_string()));
            }
        }
        Err(PageError::InvalidSelector(s.to_string()))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Id(id) => write!(f, "#{id}"),
            Self::Class(class) => write!(f, ".{class}"),
        }
    }
}
