//! The in-memory event collection owned by a session.
//!
//! An `Agenda` is an ordered sequence of events. It lives exactly as long as
//! the process; nothing is persisted. Identifiers are unique within the
//! collection and immutable once assigned, and every operation leaves
//! non-matching entries untouched.

use tracing::debug;

use crate::error::{AgendaError, AgendaResult};
use crate::event::{Event, EventDraft};

#[derive(Debug, Default)]
pub struct Agenda {
    events: Vec<Event>,
}

impl Agenda {
    pub fn new() -> Self {
        Agenda::default()
    }

    /// The events in insertion order.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn get(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Append a new event built from the draft, with a freshly generated
    /// identifier that is unique within the collection.
    pub fn create(&mut self, draft: EventDraft) -> &Event {
        let mut id = Event::new_id();
        while self.get(&id).is_some() {
            id = Event::new_id();
        }

        let event = Event::with_id(id, draft);
        debug!(id = %event.id, summary = %event.summary, "created event");

        self.events.push(event);
        self.events.last().expect("push cannot leave the collection empty")
    }

    /// Replace the matching entry's non-identifier fields with the draft,
    /// keeping its identifier and its position in the sequence.
    pub fn update(&mut self, id: &str, draft: EventDraft) -> AgendaResult<&Event> {
        let position = self
            .position(id)
            .ok_or_else(|| AgendaError::EventNotFound(id.to_string()))?;

        self.events[position] = Event::with_id(id.to_string(), draft);
        debug!(id, "updated event");

        Ok(&self.events[position])
    }

    /// Remove exactly the matching entry, preserving the order of the rest.
    pub fn remove(&mut self, id: &str) -> AgendaResult<Event> {
        let position = self
            .position(id)
            .ok_or_else(|| AgendaError::EventNotFound(id.to_string()))?;

        let removed = self.events.remove(position);
        debug!(id, summary = %removed.summary, "removed event");

        Ok(removed)
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.events.iter().position(|e| e.id == id)
    }
}
