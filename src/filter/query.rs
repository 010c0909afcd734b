//! Search term parsing

use super::ListingItem;

/// Marker that switches a term from text search to exact tag matching
pub const TAG_MARKER: &str = "tag:";

/// A parsed search term
///
/// Parsing is infallible: every string is a valid query. The term is
/// lowercased once here so matching stays case-insensitive without
/// re-normalizing per item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Query {
    /// Empty term, matches every item
    All,
    /// `tag:<value>` term, matches items carrying exactly that tag
    Tag(String),
    /// Free text, matches substrings of username, repo name or description
    Text(String),
}

impl Query {
    /// Parses a raw search term
    ///
    /// A term containing [`TAG_MARKER`] anywhere becomes a tag query with the
    /// first marker occurrence stripped; whitespace is significant and not
    /// trimmed.
    #[must_use]
    pub fn parse(term: &str) -> Self {
        if term.is_empty() {
            return Self::All;
        }
        let term = term.to_lowercase();
        if term.contains(TAG_MARKER) {
            Self::Tag(term.replacen(TAG_MARKER, "", 1))
        } else {
            Self::Text(term)
        }
    }

    /// Whether `item` should stay visible under this query
    #[must_use]
    pub fn matches(&self, item: &ListingItem) -> bool {
        match self {
            Self::All => true,
            Self::Tag(value) => item.tags.iter().any(|tag| tag == value),
            Self::Text(needle) => {
                item.username.contains(needle)
                    || item.repo.contains(needle)
                    || item.description.contains(needle)
            }
        }
    }
}
