//! Root session state and event loop.
//!
//! The session owns the event collection, a flag for whether the form is
//! open, and the current edit target. The form and list collaborators never
//! touch the collection themselves; they report outcomes and the handlers
//! here perform the mutations.

use agenda_core::{Agenda, AgendaError, AgendaResult, Event, EventDraft};
use anyhow::Result;
use owo_colors::OwoColorize;
use tracing::debug;

use crate::ui::{DeletePrompt, FormOutcome, FormView, ListAction, ListView};

pub struct App {
    agenda: Agenda,
    form_open: bool,
    editing: Option<String>,
}

impl App {
    pub fn new() -> Self {
        App {
            agenda: Agenda::new(),
            form_open: false,
            editing: None,
        }
    }

    pub fn agenda(&self) -> &Agenda {
        &self.agenda
    }

    pub fn is_form_open(&self) -> bool {
        self.form_open
    }

    pub fn edit_target(&self) -> Option<&str> {
        self.editing.as_deref()
    }

    /// Handle a form submit: update the edit target if one is set, otherwise
    /// append a new event. Closes the form and clears the target either way.
    pub fn submit(&mut self, draft: EventDraft) -> AgendaResult<&Event> {
        self.form_open = false;

        match self.editing.take() {
            Some(id) => self.agenda.update(&id, draft),
            None => Ok(self.agenda.create(draft)),
        }
    }

    /// Load an existing event into the form.
    pub fn edit(&mut self, id: &str) -> AgendaResult<()> {
        if self.agenda.get(id).is_none() {
            return Err(AgendaError::EventNotFound(id.to_string()));
        }

        debug!(id, "opening form for edit");
        self.editing = Some(id.to_string());
        self.form_open = true;
        Ok(())
    }

    /// Delete an event behind the blocking confirmation. Declining leaves the
    /// collection untouched and returns None. No undo.
    pub fn delete(&mut self, id: &str, prompt: &mut dyn DeletePrompt) -> Result<Option<Event>> {
        let event = self
            .agenda
            .get(id)
            .ok_or_else(|| AgendaError::EventNotFound(id.to_string()))?;

        if !prompt.confirm(event)? {
            debug!(id, "delete declined");
            return Ok(None);
        }

        Ok(Some(self.agenda.remove(id)?))
    }

    /// Open the form in create mode.
    pub fn open_new_form(&mut self) {
        debug!("opening form for create");
        self.editing = None;
        self.form_open = true;
    }

    /// Close the form, discarding unsaved input.
    pub fn close_form(&mut self) {
        self.editing = None;
        self.form_open = false;
    }

    /// The RSS feed affordance exists in the menu but is not wired up.
    pub fn rss_feed(&self) -> Result<()> {
        anyhow::bail!("RSS feed is not implemented yet")
    }

    /// Drive the Idle <-> Editing loop until the user quits.
    pub fn run(
        &mut self,
        form: &mut dyn FormView,
        list: &mut dyn ListView,
        prompt: &mut dyn DeletePrompt,
    ) -> Result<()> {
        loop {
            if self.form_open {
                let initial = self
                    .editing
                    .as_deref()
                    .and_then(|id| self.agenda.get(id))
                    .cloned();

                match form.run(initial.as_ref())? {
                    FormOutcome::Submit(draft) => {
                        let verb = if self.editing.is_some() { "Updated" } else { "Created" };
                        let event = self.submit(draft)?;
                        println!("{}", format!("  {}: {}", verb, event.summary).green());
                    }
                    FormOutcome::Cancel => self.close_form(),
                }
            } else {
                match list.run(self.agenda.events())? {
                    ListAction::New => self.open_new_form(),
                    ListAction::Edit(id) => self.edit(&id)?,
                    ListAction::Delete(id) => {
                        if let Some(event) = self.delete(&id, prompt)? {
                            println!("{}", format!("  Deleted: {}", event.summary).red());
                        }
                    }
                    ListAction::Rss => {
                        if let Err(e) = self.rss_feed() {
                            println!("  {}", e.to_string().yellow());
                        }
                    }
                    ListAction::Quit => break,
                }
            }
        }

        Ok(())
    }
}
