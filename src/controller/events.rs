//! Events fed into the controller and the outcomes of handling them

use crate::page::ElementId;

/// A page interaction forwarded to the controller
///
/// Host adapters translate their native events into these values; the
/// controller never registers listeners itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The search input's value changed to the given term
    InputChanged(String),

    /// The clear button was activated
    ClearClicked,

    /// A tag trigger element was activated
    TagClicked(ElementId),
}

/// What handling an event or polling actually did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventOutcome {
    /// A debounced filter run was scheduled for later
    Scheduled,

    /// A search ran and the page was updated
    Searched,

    /// The term was cleared and every item revealed
    Cleared,

    /// The event did not apply (unknown trigger, missing tag id)
    Ignored,

    /// Nothing was due
    Idle,
}
