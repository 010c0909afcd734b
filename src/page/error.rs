//! Page error types

use thiserror::Error;

/// Errors raised by page queries and element capture
#[derive(Debug, Error)]
pub enum PageError {
    /// A required single-element selector resolved to nothing
    #[error("{selector} not found")]
    MissingElement {
        /// The selector as written in the configuration
        selector: String,
    },

    /// A required collection selector matched no elements
    #[error("{selector} matched no elements")]
    NoMatches {
        /// The selector as written in the configuration
        selector: String,
    },

    /// A captured element is missing a required attribute
    #[error("{element} is missing required attribute {attribute}")]
    MissingAttribute {
        /// Description of the element (selector plus position)
        element: String,
        /// The absent attribute name
        attribute: String,
    },

    /// A selector string is neither `#id` nor `.class`
    #[error("invalid selector: {0:?}")]
    InvalidSelector(String),
}

/// Result type for page operations
pub type Result<T> = std::result::Result<T, PageError>;
