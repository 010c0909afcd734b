//! Siftr - a search filter and URL-state controller for listing pages
//!
//! This library keeps a listing page's search input, item visibility,
//! navigation links and location query string in agreement. It never owns the
//! page: a host adapter hands it a [`page::Document`], forwards interactions
//! as [`controller::PageEvent`] values and polls pending debounced runs, so
//! the whole flow also runs headless.
//!
//! # Example
//!
//! ```
//! use std::time::Instant;
//!
//! use siftr::config::ControllerConfig;
//! use siftr::controller::{FilterController, PageEvent};
//! use siftr::page::{Document, Element};
//! use url::Url;
//!
//! let mut doc = Document::new(Url::parse("https://plugins.example/").unwrap());
//! doc.append(Element::new("input").with_id("search"));
//! doc.append(Element::new("button").with_id("search_clear"));
//! doc.append(
//!     Element::new("div")
//!         .with_class("plugin")
//!         .with_attr("data-username", "alice")
//!         .with_attr("data-repo", "FancyTree")
//!         .with_attr("data-tags", "ui,tree"),
//! );
//! let links = doc.append(Element::new("div").with_id("sort_links"));
//! doc.append_to(links, Element::new("a").with_attr("href", "/?sort=stars"));
//!
//! let mut controller = FilterController::mount(&mut doc, &ControllerConfig::default()).unwrap();
//! controller
//!     .dispatch(&mut doc, PageEvent::InputChanged("tree".to_string()), Instant::now())
//!     .unwrap();
//!
//! let deadline = controller.next_deadline().unwrap();
//! controller.poll(&mut doc, deadline).unwrap();
//! assert_eq!(doc.location().query(), Some("search=tree"));
//! ```

use thiserror::Error;

pub mod config;
pub mod controller;
pub mod debounce;
pub mod filter;
pub mod links;
pub mod page;
pub mod urlstate;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the library
#[derive(Debug, Error)]
pub enum SiftrError {
    /// Page lookup or capture error
    #[error("Page error: {0}")]
    PageError(#[from] page::PageError),
    /// Navigation link rewrite error
    #[error("Link error: {0}")]
    LinkError(#[from] links::LinkError),
    /// Controller mount or dispatch error
    #[error("Controller error: {0}")]
    ControllerError(#[from] controller::ControllerError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
}
