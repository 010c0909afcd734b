//! Navigation link rewriting
//!
//! Sort and pagination links reload the page, which would drop the active
//! search. Rewriting pushes the current term into each link's query string so
//! the filter survives navigation, while the links' own parameters stay as
//! they are.

use thiserror::Error;
use url::Url;

use crate::page::{Document, ElementId};
use crate::urlstate;

/// Errors raised while rewriting navigation links
#[derive(Debug, Error)]
pub enum LinkError {
    /// Anchor in the link container without an `href`
    #[error("link {index} in container has no href")]
    MissingHref { index: usize },
    /// `href` that does not parse, absolute or relative to the location
    #[error("link href {href:?} is not a valid URL")]
    InvalidHref {
        href: String,
        #[source]
        source: url::ParseError,
    },
}

pub type Result<T> = std::result::Result<T, LinkError>;

/// Propagates the search term onto every link in `container`
///
/// Each child's `href` is resolved against the document location, its `param`
/// entry is set to `term` (removed when the term is empty) and the absolute
/// URL is written back. Other query parameters survive untouched.
///
/// # Errors
///
/// Returns [`LinkError::MissingHref`] for a child without an `href` and
/// [`LinkError::InvalidHref`] when one cannot be parsed.
pub fn rewrite_links(
    doc: &mut Document,
    container: ElementId,
    param: &str,
    term: &str,
) -> Result<()> {
    let base = doc.location().clone();
    for (index, link) in doc.children_of(container).into_iter().enumerate() {
        let href = doc
            .element(link)
            .attr("href")
            .map(str::to_string)
            .ok_or(LinkError::MissingHref { index })?;
        let mut url = resolve(&base, &href)?;

        if term.is_empty() {
            urlstate::remove_query_param(&mut url, param);
        } else {
            urlstate::set_query_param(&mut url, param, term);
        }
        doc.element_mut(link).set_attr("href", url.as_str());
    }

    Ok(())
}

fn resolve(base: &Url, href: &str) -> Result<Url> {
    base.join(href).map_err(|source| LinkError::InvalidHref {
        href: href.to_string(),
        source,
    })
}
