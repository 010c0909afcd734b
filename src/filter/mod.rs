//! Listing filter module - term parsing and item visibility
//!
//! This module decides which listing items stay visible for a search term.
//! Item fields are captured once from the page's data attributes, so repeated
//! filter runs never re-read the document; visibility is expressed by toggling
//! a single class on each item.
//!
//! # Architecture
//!
//! - `query`: Parses raw terms into [`Query`] values (empty, tag, free text)
//! - `ListingItem`: Searchable fields of one element, lowercased at capture
//! - `ListFilter`: Applies a term to every captured item

pub mod query;

pub use query::{Query, TAG_MARKER};

use crate::page::{Document, Element, ElementId, PageError, Result, Selector};

/// Class toggled on listing items to take them out of view
pub const HIDDEN_CLASS: &str = "hidden";

/// Searchable fields of one listing item
///
/// Fields are lowercased once at capture; the element on the page keeps its
/// original casing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingItem {
    /// Handle of the captured element
    pub element: ElementId,
    /// Author name from `data-username`
    pub username: String,
    /// Repository name from `data-repo`
    pub repo: String,
    /// Free-form description from `data-desc`, empty when absent
    pub description: String,
    /// Tags from comma-separated `data-tags`, empty entries dropped
    pub tags: Vec<String>,
}

impl ListingItem {
    fn capture(element: ElementId, el: &Element, label: &str) -> Result<Self> {
        let username = required_data(el, label, "username")?;
        let repo = required_data(el, label, "repo")?;
        let tags = required_data(el, label, "tags")?
            .split(',')
            .filter(|tag| !tag.is_empty())
            .map(str::to_string)
            .collect();
        let description = el.data("desc").map(str::to_lowercase).unwrap_or_default();

        Ok(Self { element, username, repo, description, tags })
    }
}

fn required_data(el: &Element, label: &str, name: &str) -> Result<String> {
    el.data(name).map(str::to_lowercase).ok_or_else(|| PageError::MissingAttribute {
        element: label.to_string(),
        attribute: format!("data-{name}"),
    })
}

/// Captured listing items and the visibility logic over them
#[derive(Debug, Clone)]
pub struct ListFilter {
    items: Vec<ListingItem>,
}

impl ListFilter {
    /// Captures every element matching `selector` into a filter
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoMatches`] when the selector finds nothing, or
    /// [`PageError::MissingAttribute`] naming the offending item when one
    /// lacks `data-username`, `data-repo` or `data-tags`.
    pub fn capture(doc: &Document, selector: &Selector) -> Result<Self> {
        let mut items = Vec::new();
        for (index, element) in doc.require_all(selector)?.into_iter().enumerate() {
            let label = format!("{selector}[{index}]");
            items.push(ListingItem::capture(element, doc.element(element), &label)?);
        }

        Ok(Self { items })
    }

    /// The captured items, in document order
    #[must_use]
    pub fn items(&self) -> &[ListingItem] {
        &self.items
    }

    /// Number of captured items
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether nothing was captured
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Applies `term` to every item, toggling the hidden class
    ///
    /// Returns the number of items left visible. Application is idempotent
    /// and an empty term reveals everything, so there is no separate reset
    /// step.
    pub fn apply(&self, doc: &mut Document, term: &str) -> usize {
        let query = Query::parse(term);
        let mut visible = 0;
        for item in &self.items {
            let keep = query.matches(item);
            doc.element_mut(item.element).set_class(HIDDEN_CLASS, !keep);
            if keep {
                visible += 1;
            }
        }
        visible
    }
}
