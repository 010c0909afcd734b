//! Push-style history for the in-memory page

use url::Url;

/// Browser-history stand-in: a push capability plus recorded entries
///
/// An unsupported history models environments without push-state
/// support. Pushing through [`Document::push_location`](super::Document::push_location)
/// is then a no-op, which is how URL writes degrade while filtering
/// keeps working.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    supported: bool,
    entries: Vec<Url>,
}

impl History {
    /// A history with push support and no recorded entries
    #[must_use]
    pub const fn new() -> Self {
        Self {
            supported: true,
            entries: Vec::new(),
        }
    }

    /// A history without push support
    #[must_use]
    pub const fn unsupported() -> Self {
        Self {
            supported: false,
            entries: Vec::new(),
        }
    }

    /// Whether push-state mutation is available
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.supported
    }

    pub(crate) fn push(&mut self, url: Url) {
        self.entries.push(url);
    }

    /// The most recently pushed entry
    #[must_use]
    pub fn last(&self) -> Option<&Url> {
        self.entries.last()
    }

    /// Number of recorded entries
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether nothing has been pushed yet
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
