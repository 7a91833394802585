//! Interactive event form.
//!
//! Sequential dialoguer prompts: title, start, end, location, notes, status,
//! then a save confirmation. Edit mode prefills each prompt from the target
//! event; skipping a prompt keeps the existing value. Date/time input is
//! natural language (fuzzydate), durations are humantime.

use agenda_core::{AgendaConfig, Event, EventDraft, EventStatus, EventTime};
use anyhow::{Context, Result};
use chrono::Duration;
use dialoguer::{Confirm, Input, Select};
use owo_colors::OwoColorize;

use crate::ui::{FormOutcome, FormView};

pub struct TerminalForm {
    default_duration: Option<Duration>,
    duration_hint: String,
}

impl TerminalForm {
    pub fn new(config: &AgendaConfig) -> Result<Self> {
        let default_duration = config
            .default_duration()
            .context("Invalid default_duration in config")?;

        let duration_hint = config
            .default_duration
            .clone()
            .unwrap_or_else(|| "1 hour".to_string());

        Ok(TerminalForm {
            default_duration,
            duration_hint,
        })
    }

    fn prompt_start(&self, existing: Option<&EventTime>) -> Result<EventTime> {
        let prompt = match existing {
            Some(time) => format!("  When? (keep: {})", time),
            None => "  When?".to_string(),
        };

        loop {
            let input: String = match existing {
                Some(_) => Input::new()
                    .with_prompt(&prompt)
                    .default(String::new())
                    .show_default(false)
                    .interact_text()?,
                None => Input::new().with_prompt(&prompt).interact_text()?,
            };

            if input.is_empty() {
                if let Some(time) = existing {
                    return Ok(time.clone());
                }
                continue;
            }

            match parse_datetime(&input) {
                Ok(time) => return Ok(time),
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }
    }

    fn prompt_end(&self, start: &EventTime, existing: Option<&EventTime>) -> Result<EventTime> {
        let hint = match (existing, start) {
            (Some(time), _) => format!("keep: {}", time),
            (None, EventTime::Date(_)) => "1 day".to_string(),
            (None, EventTime::DateTime(_)) => self.duration_hint.clone(),
        };

        loop {
            let input: String = Input::new()
                .with_prompt(format!("  How long? ({})", hint))
                .default(String::new())
                .show_default(false)
                .interact_text()?;

            if input.is_empty() {
                return Ok(match existing {
                    Some(time) => time.clone(),
                    None => default_end(start, self.default_duration),
                });
            }

            match parse_end(&input, start) {
                Ok(time) => return Ok(time),
                Err(e) => eprintln!("  {}", e.to_string().red()),
            }
        }
    }
}

impl FormView for TerminalForm {
    fn run(&mut self, initial: Option<&Event>) -> Result<FormOutcome> {
        println!();
        match initial {
            Some(event) => println!("  {}", format!("Editing: {}", event.summary).bold()),
            None => println!("  {}", "New event".bold()),
        }

        let title: String = {
            let mut input = Input::new().with_prompt("  Title");
            if let Some(event) = initial {
                input = input.with_initial_text(&event.summary);
            }
            input.interact_text()?
        };

        let start = self.prompt_start(initial.map(|e| &e.start))?;
        let end = self.prompt_end(&start, initial.map(|e| &e.end))?;

        let location = prompt_optional("  Where? (skip)", initial.and_then(|e| e.location.as_deref()))?;
        let description = prompt_optional("  Notes? (skip)", initial.and_then(|e| e.description.as_deref()))?;
        let status = prompt_status(initial.map(|e| &e.status))?;

        let draft = EventDraft {
            summary: title,
            description,
            location,
            start,
            end,
            status,
        };

        let save = Confirm::new()
            .with_prompt("  Save event?")
            .default(true)
            .interact()?;

        if save {
            Ok(FormOutcome::Submit(draft))
        } else {
            Ok(FormOutcome::Cancel)
        }
    }
}

/// Skippable text prompt; an empty answer means "no value".
fn prompt_optional(prompt: &str, existing: Option<&str>) -> Result<Option<String>> {
    let mut input = Input::new()
        .with_prompt(prompt)
        .default(String::new())
        .show_default(false);

    if let Some(existing) = existing {
        input = input.with_initial_text(existing);
    }

    let answer: String = input.interact_text()?;
    Ok(if answer.is_empty() { None } else { Some(answer) })
}

fn prompt_status(current: Option<&EventStatus>) -> Result<EventStatus> {
    const STATUSES: [EventStatus; 3] = [
        EventStatus::Confirmed,
        EventStatus::Tentative,
        EventStatus::Cancelled,
    ];

    let items: Vec<String> = STATUSES.iter().map(|s| s.to_string()).collect();
    let default = current
        .and_then(|c| STATUSES.iter().position(|s| s == c))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt("  Status")
        .items(&items)
        .default(default)
        .interact()?;

    Ok(STATUSES[selection].clone())
}

/// Expand common abbreviations that fuzzydate doesn't handle.
fn expand_abbreviations(input: &str) -> String {
    let abbrevs = [
        ("mon", "monday"),
        ("tue", "tuesday"),
        ("tues", "tuesday"),
        ("wed", "wednesday"),
        ("thu", "thursday"),
        ("thur", "thursday"),
        ("thurs", "thursday"),
        ("fri", "friday"),
        ("sat", "saturday"),
        ("sun", "sunday"),
        ("jan", "january"),
        ("feb", "february"),
        ("mar", "march"),
        ("apr", "april"),
        ("jun", "june"),
        ("jul", "july"),
        ("aug", "august"),
        ("sep", "september"),
        ("sept", "september"),
        ("oct", "october"),
        ("nov", "november"),
        ("dec", "december"),
    ];

    let lower = input.to_lowercase();

    lower
        .split_whitespace()
        .map(|word| {
            abbrevs
                .iter()
                .find(|(abbr, _)| *abbr == word)
                .map(|(_, full)| *full)
                .unwrap_or(word)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Parse a natural language date/time string into an EventTime.
/// Input with a time token (am/pm, HH:MM, noon, midnight, "at N") becomes a
/// timed entry; anything else is all-day.
fn parse_datetime(input: &str) -> Result<EventTime> {
    let expanded = expand_abbreviations(input);
    let dt = fuzzydate::parse(&expanded)
        .map_err(|_| anyhow::anyhow!("Could not parse date/time: \"{}\"", input))?;

    if has_time_component(input) {
        Ok(EventTime::DateTime(dt))
    } else {
        Ok(EventTime::Date(dt.date()))
    }
}

/// Check if the user's input string contains time-related tokens.
fn has_time_component(input: &str) -> bool {
    let lower = input.to_lowercase();

    if lower.contains("noon") || lower.contains("midnight") {
        return true;
    }

    let words: Vec<&str> = lower.split_whitespace().collect();

    for (i, word) in words.iter().enumerate() {
        // "6pm", "11am", and bare "pm" right after a number ("3 pm")
        if let Some(rest) = word.strip_suffix("am").or_else(|| word.strip_suffix("pm")) {
            if !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()) {
                return true;
            }
            if rest.is_empty()
                && i > 0
                && !words[i - 1].is_empty()
                && words[i - 1].bytes().all(|b| b.is_ascii_digit())
            {
                return true;
            }
        }

        // "15:00", "9:30"
        if let Some((hours, minutes)) = word.split_once(':')
            && hours.bytes().last().is_some_and(|b| b.is_ascii_digit())
            && minutes.bytes().next().is_some_and(|b| b.is_ascii_digit())
        {
            return true;
        }

        // "at 3", "at 15"
        if *word == "at"
            && words
                .get(i + 1)
                .is_some_and(|next| next.starts_with(|c: char| c.is_ascii_digit()))
        {
            return true;
        }
    }

    false
}

/// Parse an end input: tries duration first (humantime), then date/time.
fn parse_end(input: &str, start: &EventTime) -> Result<EventTime> {
    if let Ok(time) = apply_duration(start, input) {
        return Ok(time);
    }

    let cleaned = input
        .strip_prefix("until ")
        .or_else(|| input.strip_prefix("to "))
        .unwrap_or(input);

    parse_datetime(cleaned)
}

/// Apply a duration string to a start time.
fn apply_duration(start: &EventTime, input: &str) -> Result<EventTime> {
    let std_duration = humantime::parse_duration(input).map_err(|e| anyhow::anyhow!("{}", e))?;
    let duration = Duration::from_std(std_duration).context("Duration too large")?;

    Ok(match start {
        EventTime::Date(d) => EventTime::Date(*d + Duration::days(duration.num_days().max(1))),
        EventTime::DateTime(dt) => EventTime::DateTime(*dt + duration),
    })
}

/// Default end time: configured duration (or 1 hour) for timed events,
/// at least one day for all-day events.
fn default_end(start: &EventTime, fallback: Option<Duration>) -> EventTime {
    match start {
        EventTime::Date(d) => {
            let days = fallback.map(|dur| dur.num_days().max(1)).unwrap_or(1);
            EventTime::Date(*d + Duration::days(days))
        }
        EventTime::DateTime(dt) => {
            EventTime::DateTime(*dt + fallback.unwrap_or_else(|| Duration::hours(1)))
        }
    }
}
