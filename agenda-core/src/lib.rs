//! Core types for the agenda event manager.
//!
//! This crate provides the pieces the CLI builds on:
//! - `Event` and related types for calendar events
//! - `Agenda`, the ordered in-memory event collection owned by a session
//! - `AgendaConfig`, the user config file

pub mod agenda;
pub mod config;
pub mod error;
pub mod event;

pub use agenda::Agenda;
pub use self::config::AgendaConfig;
pub use error::{AgendaError, AgendaResult};
pub use event::{Event, EventDraft, EventStatus, EventTime};
