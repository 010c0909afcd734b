//! Controller module - wires the filter, URL state and links to page events
//!
//! This module owns the behavior of a listing page: it mounts onto a
//! document, restores the search term from the URL, and turns page events
//! into filter runs. It is designed to be host-agnostic so the full event
//! flow is exercisable without a browser.
//!
//! # Architecture
//!
//! - `events`: [`PageEvent`] inputs and [`EventOutcome`] results
//! - `FilterController`: Element handles, the captured filter, the debouncer
//! - Typed input debounces; clear and tag activation run immediately
//! - The document stays outside the controller, passed into each call

pub mod events;

pub use events::{EventOutcome, PageEvent};

use std::time::Instant;

use log::debug;
use thiserror::Error;

use crate::config::ControllerConfig;
use crate::debounce::Debouncer;
use crate::filter::{ListFilter, TAG_MARKER};
use crate::links::{self, LinkError};
use crate::page::{Document, ElementId, PageError, Selector};
use crate::urlstate;

/// Errors raised while mounting or driving the controller
#[derive(Debug, Error)]
pub enum ControllerError {
    /// Page lookup or capture error
    #[error("Page error: {0}")]
    Page(#[from] PageError),
    /// Navigation link rewrite error
    #[error("Link error: {0}")]
    Link(#[from] LinkError),
}

pub type Result<T> = std::result::Result<T, ControllerError>;

/// A listing filter controller mounted onto a document
///
/// Holds handles to the elements it drives plus the item fields captured at
/// mount time. All further mutation goes through [`dispatch`](Self::dispatch)
/// and [`poll`](Self::poll).
#[derive(Debug, Clone)]
pub struct FilterController {
    input: ElementId,
    clear: ElementId,
    tag_triggers: Vec<ElementId>,
    link_container: ElementId,
    filter: ListFilter,
    debounce: Debouncer<String>,
    param: String,
}

impl FilterController {
    /// Mounts the controller onto `doc` using the selectors in `config`
    ///
    /// All lookups happen before any mutation, so a failed mount leaves the
    /// document untouched. On success the search input is seeded from the
    /// location's query parameter and the filter applied once, which restores
    /// a shared or reloaded URL to its filtered view.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Page`] when a configured selector does not
    /// parse, the input, clear button or link container is missing, no
    /// listing items match, or an item lacks its data attributes. Tag
    /// triggers are the exception: a page without any is valid.
    pub fn mount(doc: &mut Document, config: &ControllerConfig) -> Result<Self> {
        let input = doc.require(&config.search_input.parse::<Selector>()?)?;
        let clear = doc.require(&config.clear_button.parse::<Selector>()?)?;
        let filter = ListFilter::capture(doc, &config.item.parse::<Selector>()?)?;
        let tag_triggers = doc.select_all(&config.tag_trigger.parse::<Selector>()?);
        let link_container = doc.require(&config.link_container.parse::<Selector>()?)?;

        let term = urlstate::get_param(doc, &config.param).unwrap_or_default();
        doc.element_mut(input).set_attr("value", term.as_str());

        let controller = Self {
            input,
            clear,
            tag_triggers,
            link_container,
            filter,
            debounce: Debouncer::new(config.debounce()),
            param: config.param.clone(),
        };
        let visible = controller.filter.apply(doc, &term);
        debug!(
            "mounted onto {} items, {visible} visible for seeded term {term:?}",
            controller.filter.len()
        );

        Ok(controller)
    }

    /// Runs a full search for `term`: URL write, link rewrite, filter
    ///
    /// An empty term removes the query parameter instead of writing an empty
    /// value. The URL write is skipped silently when the document's history
    /// does not support pushes.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Link`] when a navigation link cannot be
    /// rewritten.
    pub fn search(&self, doc: &mut Document, term: &str) -> Result<()> {
        if term.is_empty() {
            urlstate::remove_param(doc, &self.param);
        } else {
            urlstate::set_param(doc, &self.param, term);
        }
        links::rewrite_links(doc, self.link_container, &self.param, term)?;
        let visible = self.filter.apply(doc, term);
        debug!("search {term:?} left {visible} of {} items visible", self.filter.len());

        Ok(())
    }

    /// Handles one page event at time `now`
    ///
    /// Typed input writes the value to the input element and schedules a
    /// debounced run. Clearing and tag activation search immediately and
    /// drop any pending run, so a stale typed term cannot fire afterwards
    /// and overwrite the result.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Link`] when an immediate search fails to
    /// rewrite a navigation link.
    pub fn dispatch(
        &mut self,
        doc: &mut Document,
        event: PageEvent,
        now: Instant,
    ) -> Result<EventOutcome> {
        match event {
            PageEvent::InputChanged(term) => {
                // The input element is the displayed value; it tracks every
                // keystroke even while the search itself settles.
                doc.element_mut(self.input).set_attr("value", term.as_str());
                self.debounce.schedule(term, now);
                Ok(EventOutcome::Scheduled)
            }
            PageEvent::ClearClicked => {
                self.debounce.cancel();
                doc.element_mut(self.input).set_attr("value", "");
                urlstate::remove_param(doc, &self.param);
                links::rewrite_links(doc, self.link_container, &self.param, "")?;
                self.filter.apply(doc, "");
                debug!("cleared search, all {} items visible", self.filter.len());
                Ok(EventOutcome::Cleared)
            }
            PageEvent::TagClicked(trigger) => {
                if !self.tag_triggers.contains(&trigger) {
                    return Ok(EventOutcome::Ignored);
                }
                let Some(id) = doc
                    .element(trigger)
                    .data("id")
                    .filter(|id| !id.is_empty())
                    .map(str::to_string)
                else {
                    debug!("tag trigger without a usable data-id, ignoring");
                    return Ok(EventOutcome::Ignored);
                };
                let term = format!("{TAG_MARKER}{id}");
                doc.element_mut(self.input).set_attr("value", term.as_str());
                self.debounce.cancel();
                self.search(doc, &term)?;
                Ok(EventOutcome::Searched)
            }
        }
    }

    /// Fires the pending debounced run if its deadline has passed
    ///
    /// Hosts call this from their timer or event loop; `now` is their clock.
    /// Returns [`EventOutcome::Idle`] when nothing was due.
    ///
    /// # Errors
    ///
    /// Returns [`ControllerError::Link`] when the search fails to rewrite a
    /// navigation link.
    pub fn poll(&mut self, doc: &mut Document, now: Instant) -> Result<EventOutcome> {
        match self.debounce.take_ready(now) {
            Some(term) => {
                self.search(doc, &term)?;
                Ok(EventOutcome::Searched)
            }
            None => Ok(EventOutcome::Idle),
        }
    }

    /// When the host should poll next, if a run is pending
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Handle of the search input
    #[must_use]
    pub const fn input(&self) -> ElementId {
        self.input
    }

    /// Handle of the clear button
    #[must_use]
    pub const fn clear_button(&self) -> ElementId {
        self.clear
    }

    /// Handles of the tag triggers, possibly empty
    #[must_use]
    pub fn tag_triggers(&self) -> &[ElementId] {
        &self.tag_triggers
    }

    /// Handle of the navigation link container
    #[must_use]
    pub const fn link_container(&self) -> ElementId {
        self.link_container
    }

    /// Query parameter the search term is persisted under
    #[must_use]
    pub fn param(&self) -> &str {
        &self.param
    }

    /// The items captured at mount time
    #[must_use]
    pub const fn filter(&self) -> &ListFilter {
        &self.filter
    }

    /// Current value of the search input
    #[must_use]
    pub fn term<'doc>(&self, doc: &'doc Document) -> &'doc str {
        doc.element(self.input).attr("value").unwrap_or_default()
    }
}
