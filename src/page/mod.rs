//! Page module - in-memory document the controller operates on
//!
//! This module provides a small page model for the listing controller. It is
//! deliberately host-agnostic: the controller manipulates elements, a location
//! URL and a history through this capability surface, so the same logic runs
//! against a real page adapter or against a document built by hand in tests.
//!
//! # Architecture
//!
//! - `element`: Elements with tag, id, classes and attributes
//! - `selector`: The `#id` / `.class` selector subset the controller needs
//! - `history`: Push-style location history, optionally unsupported
//! - `error`: Lookup and selector errors
//! - Handles (`ElementId`) instead of references, so callers can hold several

pub mod element;
pub mod error;
pub mod history;
pub mod selector;

pub use element::{Element, ElementId};
pub use error::{PageError, Result};
pub use history::History;
pub use selector::Selector;

use url::Url;

/// An in-memory document: elements, a location and a history
#[derive(Debug, Clone)]
pub struct Document {
    elements: Vec<Element>,
    location: Url,
    history: History,
}

impl Document {
    /// Creates an empty document at the given location
    #[must_use]
    pub fn new(location: Url) -> Self {
        Self::with_history(location, History::new())
    }

    /// Creates an empty document with an explicit history capability
    #[must_use]
    pub fn with_history(location: Url, history: History) -> Self {
        Self {
            elements: Vec::new(),
            location,
            history,
        }
    }

    /// Appends a top-level element and returns its handle
    pub fn append(&mut self, element: Element) -> ElementId {
        let id = ElementId(self.elements.len());
        self.elements.push(element);
        id
    }

    /// Appends an element as a child of `parent` and returns its handle
    pub fn append_to(&mut self, parent: ElementId, mut element: Element) -> ElementId {
        element.parent = Some(parent);
        self.append(element)
    }

    /// Borrows the element behind a handle
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different document.
    #[must_use]
    pub fn element(&self, id: ElementId) -> &Element {
        &self.elements[id.0]
    }

    /// Mutably borrows the element behind a handle
    ///
    /// # Panics
    ///
    /// Panics if the handle was issued by a different document.
    pub fn element_mut(&mut self, id: ElementId) -> &mut Element {
        &mut self.elements[id.0]
    }

    /// First element matching the selector, in document order
    #[must_use]
    pub fn select_one(&self, selector: &Selector) -> Option<ElementId> {
        self.elements
            .iter()
            .position(|element| selector.matches(element))
            .map(ElementId)
    }

    /// All elements matching the selector, in document order
    #[must_use]
    pub fn select_all(&self, selector: &Selector) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| selector.matches(element))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    /// Like [`select_one`](Self::select_one), but a missing element is an error
    ///
    /// # Errors
    ///
    /// Returns [`PageError::MissingElement`] naming the selector when nothing
    /// matches.
    pub fn require(&self, selector: &Selector) -> Result<ElementId> {
        self.select_one(selector).ok_or_else(|| PageError::MissingElement {
            selector: selector.to_string(),
        })
    }

    /// Like [`select_all`](Self::select_all), but an empty match is an error
    ///
    /// # Errors
    ///
    /// Returns [`PageError::NoMatches`] naming the selector when nothing
    /// matches.
    pub fn require_all(&self, selector: &Selector) -> Result<Vec<ElementId>> {
        let matches = self.select_all(selector);
        if matches.is_empty() {
            return Err(PageError::NoMatches {
                selector: selector.to_string(),
            });
        }
        Ok(matches)
    }

    /// Direct children of `parent`, in document order
    #[must_use]
    pub fn children_of(&self, parent: ElementId) -> Vec<ElementId> {
        self.elements
            .iter()
            .enumerate()
            .filter(|(_, element)| element.parent == Some(parent))
            .map(|(index, _)| ElementId(index))
            .collect()
    }

    /// The document's current location
    #[must_use]
    pub const fn location(&self) -> &Url {
        &self.location
    }

    /// The document's history
    #[must_use]
    pub const fn history(&self) -> &History {
        &self.history
    }

    /// Moves the location to `url`, recording the previous one in history
    ///
    /// Returns `false` and leaves the location unchanged when the history
    /// does not support pushes.
    pub fn push_location(&mut self, url: Url) -> bool {
        if !self.history.is_supported() {
            return false;
        }
        self.history.push(self.location.clone());
        self.location = url;
        true
    }
}
