//! Event model types.
//!
//! An `Event` is a calendar record with an opaque unique identifier and a set
//! of caller-supplied fields. The fields travel separately as an `EventDraft`
//! so that the form can hand a submitted record to the session without ever
//! touching identifiers.

use std::fmt;

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A calendar event held in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub status: EventStatus,
}

/// The caller-supplied fields of an event: everything except the identifier.
///
/// A form submit carries exactly one of these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventDraft {
    pub summary: String,
    pub description: Option<String>,
    pub location: Option<String>,
    pub start: EventTime,
    pub end: EventTime,
    pub status: EventStatus,
}

impl Event {
    /// Build an event around an existing identifier (used when editing, so
    /// the identifier survives while every other field is replaced).
    pub fn with_id(id: String, draft: EventDraft) -> Self {
        Event {
            id,
            summary: draft.summary,
            description: draft.description,
            location: draft.location,
            start: draft.start,
            end: draft.end,
            status: draft.status,
        }
    }

    /// Mint a fresh local identifier.
    pub(crate) fn new_id() -> String {
        format!("local-{}", Uuid::new_v4())
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.summary)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum EventTime {
    /// An all-day entry.
    Date(NaiveDate),
    /// A timed entry in floating local time.
    DateTime(NaiveDateTime),
}

impl fmt::Display for EventTime {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventTime::Date(d) => write!(f, "{}", d.format("%Y-%m-%d")),
            EventTime::DateTime(dt) => write!(f, "{}", dt.format("%Y-%m-%d %H:%M")),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    #[default]
    Confirmed,
    Tentative,
    Cancelled,
}

impl fmt::Display for EventStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            EventStatus::Confirmed => write!(f, "confirmed"),
            EventStatus::Tentative => write!(f, "tentative"),
            EventStatus::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn with_id_keeps_the_given_id() {
        let draft = EventDraft {
            summary: "Standup".to_string(),
            description: None,
            location: None,
            start: EventTime::Date(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap()),
            end: EventTime::Date(NaiveDate::from_ymd_opt(2026, 3, 21).unwrap()),
            status: EventStatus::Confirmed,
        };

        let event = Event::with_id("local-abc".to_string(), draft.clone());
        assert_eq!(event.id, "local-abc");
        assert_eq!(event.summary, draft.summary);
        assert_eq!(event.start, draft.start);
    }

    #[test]
    fn new_ids_carry_the_local_prefix() {
        assert!(Event::new_id().starts_with("local-"));
    }

    #[test]
    fn event_time_display() {
        let date = EventTime::Date(NaiveDate::from_ymd_opt(2026, 3, 20).unwrap());
        assert_eq!(date.to_string(), "2026-03-20");

        let timed = EventTime::DateTime(
            NaiveDate::from_ymd_opt(2026, 3, 20)
                .unwrap()
                .and_hms_opt(15, 0, 0)
                .unwrap(),
        );
        assert_eq!(timed.to_string(), "2026-03-20 15:00");
    }
}
