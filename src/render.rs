//! Terminal rendering for agenda types.
//!
//! Extension trait adding colored one-line rendering to core types using
//! owo_colors. Date headings are handled by the list view; an event renders
//! as its time-of-day, summary, and dimmed extras.

use agenda_core::{Event, EventStatus, EventTime};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Event {
    fn render(&self) -> String {
        let summary = match self.status {
            EventStatus::Confirmed => self.summary.clone(),
            EventStatus::Tentative => format!("{} {}", self.summary, "(tentative)".yellow()),
            EventStatus::Cancelled => self.summary.strikethrough().to_string(),
        };

        let mut line = format!("{} {}", render_time(&self.start), summary);

        if let Some(location) = &self.location {
            line.push(' ');
            line.push_str(&format!("({})", location).dimmed().to_string());
        }

        line
    }
}

/// Format the time portion of an event (e.g. "  15:00" or "all-day")
fn render_time(time: &EventTime) -> String {
    match time {
        EventTime::Date(_) => "all-day".to_string(),
        EventTime::DateTime(dt) => format!("{:>7}", dt.format("%H:%M").to_string()),
    }
}
