use agenda_core::{Agenda, AgendaError, Event, EventDraft, EventStatus, EventTime};
use chrono::NaiveDate;

fn timed_draft(summary: &str, hour: u32) -> EventDraft {
    let day = NaiveDate::from_ymd_opt(2026, 3, 20).unwrap();
    EventDraft {
        summary: summary.to_string(),
        description: None,
        location: None,
        start: EventTime::DateTime(day.and_hms_opt(hour, 0, 0).unwrap()),
        end: EventTime::DateTime(day.and_hms_opt(hour + 1, 0, 0).unwrap()),
        status: EventStatus::Confirmed,
    }
}

#[test]
fn create_edit_delete_lifecycle() {
    let mut agenda = Agenda::new();
    assert!(agenda.is_empty());

    let id = agenda.create(timed_draft("Meeting", 9)).id.clone();
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda.events()[0].summary, "Meeting");

    agenda.update(&id, timed_draft("Meeting 2", 9)).unwrap();
    assert_eq!(agenda.len(), 1);
    assert_eq!(agenda.events()[0].id, id);
    assert_eq!(agenda.events()[0].summary, "Meeting 2");

    let removed = agenda.remove(&id).unwrap();
    assert_eq!(removed.summary, "Meeting 2");
    assert!(agenda.is_empty());
}

#[test]
fn collection_order_is_insertion_order() {
    let mut agenda = Agenda::new();

    // Insert out of chronological order; the collection must not re-sort.
    agenda.create(timed_draft("Afternoon", 15));
    agenda.create(timed_draft("Morning", 8));
    agenda.create(timed_draft("Noon", 12));

    let summaries: Vec<&str> = agenda.events().iter().map(|e| e.summary.as_str()).collect();
    assert_eq!(summaries, ["Afternoon", "Morning", "Noon"]);
}

#[test]
fn operations_on_missing_ids_do_not_disturb_the_collection() {
    let mut agenda = Agenda::new();
    agenda.create(timed_draft("Keep me", 10));

    let before: Vec<Event> = agenda.events().to_vec();

    assert!(matches!(
        agenda.update("local-missing", timed_draft("X", 11)),
        Err(AgendaError::EventNotFound(_))
    ));
    assert!(matches!(
        agenda.remove("local-missing"),
        Err(AgendaError::EventNotFound(_))
    ));

    assert_eq!(agenda.events(), before.as_slice());
}

#[test]
fn updating_one_entry_leaves_every_other_byte_identical() {
    let mut agenda = Agenda::new();
    agenda.create(timed_draft("One", 8));
    let id = agenda.create(timed_draft("Two", 9)).id.clone();
    agenda.create(timed_draft("Three", 10));

    let before: Vec<Event> = agenda.events().to_vec();

    let mut draft = timed_draft("Two, renamed", 9);
    draft.description = Some("moved agenda item".to_string());
    agenda.update(&id, draft).unwrap();

    assert_eq!(agenda.events()[0], before[0]);
    assert_eq!(agenda.events()[2], before[2]);
    assert_eq!(agenda.events()[1].id, before[1].id);
    assert_ne!(agenda.events()[1], before[1]);
}
