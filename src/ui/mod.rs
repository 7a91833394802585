//! UI contracts consumed by the root session.
//!
//! The form and the list are external collaborators: the session only sees
//! these traits. The terminal implementations live in this module; the tests
//! in `app.rs` drive the session with scripted stand-ins instead.

pub mod form;
pub mod list;

use agenda_core::{Event, EventDraft};
use anyhow::Result;

/// What the form hands back when it closes.
#[derive(Debug, Clone)]
pub enum FormOutcome {
    Submit(EventDraft),
    Cancel,
}

/// What the list view asks the session to do next.
#[derive(Debug, Clone)]
pub enum ListAction {
    New,
    Edit(String),
    Delete(String),
    Rss,
    Quit,
}

/// The create/edit form. `initial` is the edit target, or None for create
/// mode; the form prefills its prompts from it.
pub trait FormView {
    fn run(&mut self, initial: Option<&Event>) -> Result<FormOutcome>;
}

/// The list view. Renders the collection in its given order and returns the
/// action the user picked, resolving entry selections to event identifiers.
pub trait ListView {
    fn run(&mut self, events: &[Event]) -> Result<ListAction>;
}

/// The blocking yes/no gate in front of a delete.
pub trait DeletePrompt {
    fn confirm(&mut self, event: &Event) -> Result<bool>;
}
