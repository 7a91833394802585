//! Event list view and its action menu.
//!
//! Renders the collection in its given order, grouped under date headings,
//! then asks what to do next. Entry selections resolve to event identifiers
//! so the session never sees list indices.

use agenda_core::{AgendaConfig, Event, EventTime};
use anyhow::Result;
use chrono::{Local, NaiveDate};
use dialoguer::{Confirm, Select};
use owo_colors::OwoColorize;

use crate::render::Render;
use crate::ui::{DeletePrompt, ListAction, ListView};

const MENU_NEW: &str = "New event";
const MENU_EDIT: &str = "Edit event";
const MENU_DELETE: &str = "Delete event";
const MENU_RSS: &str = "RSS feed";
const MENU_QUIT: &str = "Quit";

pub struct TerminalList {
    date_format: Option<String>,
}

impl TerminalList {
    pub fn new(config: &AgendaConfig) -> Self {
        TerminalList {
            date_format: config.date_format.clone(),
        }
    }

    /// Heading for an event's day: "Today", "Tomorrow", or a formatted date.
    fn date_label(&self, time: &EventTime) -> String {
        let date = match time {
            EventTime::Date(d) => *d,
            EventTime::DateTime(dt) => dt.date(),
        };

        if let Some(format) = &self.date_format {
            return date.format(format).to_string();
        }

        default_date_label(date)
    }

    fn print_events(&self, events: &[Event]) {
        let mut current_label: Option<String> = None;

        for (i, event) in events.iter().enumerate() {
            let label = self.date_label(&event.start);

            if current_label.as_ref() != Some(&label) {
                if current_label.is_some() {
                    println!();
                }
                println!("  {}", label.bold());
                current_label = Some(label);
            }

            println!("  {:>2}. {}", i + 1, event.render());
        }
    }
}

impl ListView for TerminalList {
    fn run(&mut self, events: &[Event]) -> Result<ListAction> {
        println!();

        if events.is_empty() {
            println!("{}", "  No events yet".dimmed());
        } else {
            self.print_events(events);
        }

        println!();

        let mut items = vec![MENU_NEW];
        if !events.is_empty() {
            items.push(MENU_EDIT);
            items.push(MENU_DELETE);
        }
        items.push(MENU_RSS);
        items.push(MENU_QUIT);

        let selection = Select::new()
            .with_prompt("  Action")
            .items(&items)
            .default(0)
            .interact()?;

        let action = match items[selection] {
            MENU_EDIT => ListAction::Edit(pick_event(events, "  Edit which?")?),
            MENU_DELETE => ListAction::Delete(pick_event(events, "  Delete which?")?),
            MENU_RSS => ListAction::Rss,
            MENU_QUIT => ListAction::Quit,
            _ => ListAction::New,
        };

        Ok(action)
    }
}

/// Let the user pick one entry; returns its identifier.
fn pick_event(events: &[Event], prompt: &str) -> Result<String> {
    let items: Vec<String> = events
        .iter()
        .enumerate()
        .map(|(i, e)| format!("{}. {} ({})", i + 1, e.summary, e.start))
        .collect();

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&items)
        .default(0)
        .interact()?;

    Ok(events[selection].id.clone())
}

fn default_date_label(date: NaiveDate) -> String {
    let today = Local::now().date_naive();

    match (date - today).num_days() {
        0 => "Today".to_string(),
        1 => "Tomorrow".to_string(),
        _ => date.format("%a %b %-d").to_string(),
    }
}

/// Blocking yes/no gate in front of a delete; defaults to "no".
pub struct TerminalDeletePrompt;

impl DeletePrompt for TerminalDeletePrompt {
    fn confirm(&mut self, event: &Event) -> Result<bool> {
        let confirmed = Confirm::new()
            .with_prompt(format!("  Delete \"{}\"?", event.summary))
            .default(false)
            .interact()?;

        Ok(confirmed)
    }
}
