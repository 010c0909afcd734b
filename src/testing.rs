//! Testing utilities for siftr
//!
//! This module provides helpers for building the sample listing page used
//! across unit tests: a search input, a clear button, a handful of plugin
//! items, two tag triggers and a sort link container.
//!
//! Only available when compiled with `cfg(test)`.

use url::Url;

use crate::filter::HIDDEN_CLASS;
use crate::page::{Document, Element, ElementId, History, Selector};

/// Location every sample page starts at
pub const TEST_LOCATION: &str = "https://plugins.example/";

/// Build the stock sample page at [`TEST_LOCATION`]
#[must_use]
pub fn sample_page() -> Document {
    located_page(TEST_LOCATION)
}

/// Build the stock sample page at an arbitrary location
///
/// # Panics
/// Panics if `location` is not a valid URL.
#[must_use]
pub fn located_page(location: &str) -> Document {
    page_with_history(location, History::new())
}

/// Build the stock sample page with an explicit history capability
///
/// # Panics
/// Panics if `location` is not a valid URL.
#[must_use]
pub fn page_with_history(location: &str, history: History) -> Document {
    let url = Url::parse(location).expect("test location should parse");
    let mut doc = Document::with_history(url, history);

    doc.append(Element::new("input").with_id("search"));
    doc.append(Element::new("button").with_id("search_clear"));

    doc.append(plugin_item("alice", "FancyTree", "A file tree explorer", "ui,tree"));
    doc.append(plugin_item("bob", "grepper", "Fast project-wide search", "search,cli"));
    doc.append(plugin_item("carol", "Notely", "Markdown note taking", "notes,markdown"));

    doc.append(Element::new("span").with_class("tag").with_attr("data-id", "cli"));
    doc.append(Element::new("span").with_class("tag").with_attr("data-id", "ui"));

    let container = doc.append(Element::new("div").with_id("sort_links"));
    doc.append_to(container, Element::new("a").with_attr("href", "/?sort=stars"));
    doc.append_to(container, Element::new("a").with_attr("href", "/?sort=new"));

    doc
}

/// A listing item element carrying the data attributes the filter captures
#[must_use]
pub fn plugin_item(username: &str, repo: &str, description: &str, tags: &str) -> Element {
    Element::new("div")
        .with_class("plugin")
        .with_attr("data-username", username)
        .with_attr("data-repo", repo)
        .with_attr("data-desc", description)
        .with_attr("data-tags", tags)
}

/// Handle of the sample plugin whose `data-repo` equals `repo`
///
/// # Panics
/// Panics if no such plugin exists.
#[must_use]
pub fn plugin(doc: &Document, repo: &str) -> ElementId {
    let selector: Selector = ".plugin".parse().expect("selector should parse");
    doc.select_all(&selector)
        .into_iter()
        .find(|&el| doc.element(el).data("repo") == Some(repo))
        .expect("sample page should contain the requested plugin")
}

/// Handle of the sample tag trigger whose `data-id` equals `id`
///
/// # Panics
/// Panics if no such trigger exists.
#[must_use]
pub fn tag_trigger(doc: &Document, id: &str) -> ElementId {
    let selector: Selector = ".tag".parse().expect("selector should parse");
    doc.select_all(&selector)
        .into_iter()
        .find(|&el| doc.element(el).data("id") == Some(id))
        .expect("sample page should contain the requested tag trigger")
}

/// Repo names of the plugins currently visible, in document order
#[must_use]
pub fn visible_repos(doc: &Document) -> Vec<String> {
    let selector: Selector = ".plugin".parse().expect("selector should parse");
    doc.select_all(&selector)
        .into_iter()
        .filter(|&el| !doc.element(el).has_class(HIDDEN_CLASS))
        .filter_map(|el| doc.element(el).data("repo").map(str::to_string))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_page_fixtures_resolve() {
        let doc = sample_page();

        assert_eq!(visible_repos(&doc), vec!["FancyTree", "grepper", "Notely"]);
        assert_ne!(plugin(&doc, "grepper"), plugin(&doc, "Notely"));
        assert_ne!(tag_trigger(&doc, "cli"), tag_trigger(&doc, "ui"));
    }

    #[test]
    fn test_located_page_takes_custom_location() {
        let doc = located_page("https://plugins.example/?search=notes");
        assert_eq!(doc.location().query(), Some("search=notes"));
    }
}
