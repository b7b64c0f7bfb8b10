use chrono::NaiveDate;
use meetnote_core::{
    Draft, EditSession, FixedClock, Importance, NoteStore, NoteStoreError, StoreConfig,
};

fn seeded_store() -> NoteStore {
    NoteStore::with_clock(
        StoreConfig::default(),
        FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
    )
}

#[test]
fn begin_edit_materializes_joined_text() {
    let mut store = seeded_store();
    assert!(store.begin_edit(1));

    let session = store.edit_session().unwrap();
    assert_eq!(session.id, 1);
    assert_eq!(
        session.action_items,
        "Review competitor analysis by Friday\nSchedule user interviews\nUpdate project timeline"
    );
    assert_eq!(
        session.key_decisions,
        "Moving forward with mobile app redesign\nPostponing API migration to Q2"
    );
}

#[test]
fn begin_edit_on_unknown_id_opens_nothing() {
    let mut store = seeded_store();
    assert!(!store.begin_edit(404));
    assert!(store.edit_session().is_none());
}

#[test]
fn unmodified_commit_round_trips_note_content() {
    let mut store = seeded_store();
    let before = store.notes().to_vec();

    for note in &before {
        assert!(store.begin_edit(note.id));
        assert_eq!(store.save_edit().unwrap(), Some(note.id));
    }

    assert_eq!(store.notes(), before.as_slice());
}

#[test]
fn session_edits_stay_detached_until_commit() {
    let mut store = seeded_store();
    store.begin_edit(2);
    store.edit_session_mut().unwrap().title = "Renamed".to_string();

    assert_eq!(store.note(2).unwrap().title, "Marketing Strategy");
    store.save_edit().unwrap();
    assert_eq!(store.note(2).unwrap().title, "Renamed");
    assert!(store.edit_session().is_none());
    assert_eq!(store.active_note_id(), Some(2));
}

#[test]
fn commit_never_changes_id_date_or_duration() {
    let mut store = seeded_store();
    let original = store.note(1).unwrap().clone();

    let session = EditSession {
        id: 1,
        title: "Product Team Sync (edited)".to_string(),
        date: "Jan 1, 1970".to_string(),
        duration: "999 min".to_string(),
        importance: Importance::Urgent,
        summary: "Rescoped".to_string(),
        action_items: "only one\n\n".to_string(),
        key_decisions: String::new(),
    };
    assert_eq!(store.commit_edit(session).unwrap(), Some(1));

    let edited = store.note(1).unwrap();
    assert_eq!(edited.id, original.id);
    assert_eq!(edited.date, original.date);
    assert_eq!(edited.duration, original.duration);
    assert_eq!(edited.importance, Importance::Urgent);
    assert_eq!(edited.action_items, vec!["only one".to_string()]);
    assert!(edited.key_decisions.is_empty());
}

#[test]
fn commit_keeps_note_position() {
    let mut store = seeded_store();
    store.begin_edit(2);
    store.save_edit().unwrap();
    let order = store.notes().iter().map(|note| note.id).collect::<Vec<_>>();
    assert_eq!(order, vec![1, 2]);
}

#[test]
fn commit_for_missing_note_is_a_no_op() {
    let mut store = seeded_store();
    store.begin_edit(1);
    let mut stray = store.edit_session().unwrap().clone();
    stray.id = 77;

    let before = store.notes().to_vec();
    assert_eq!(store.commit_edit(stray).unwrap(), None);
    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.active_note_id(), None);
    assert!(store.edit_session().is_some());
}

#[test]
fn discard_edit_leaves_collection_untouched() {
    let mut store = seeded_store();
    let before = store.notes().to_vec();
    store.begin_edit(1);
    store.edit_session_mut().unwrap().summary = "scratch".to_string();
    store.discard_edit();

    assert!(store.edit_session().is_none());
    assert_eq!(store.notes(), before.as_slice());
    assert_eq!(store.save_edit().unwrap(), None);
}

#[test]
fn commit_with_required_title_keeps_session_open_on_blank_title() {
    let mut store = NoteStore::with_clock(
        StoreConfig {
            require_title: true,
            ..StoreConfig::default()
        },
        FixedClock(NaiveDate::from_ymd_opt(2025, 6, 1).unwrap()),
    );
    store.begin_edit(1);
    store.edit_session_mut().unwrap().title = String::new();

    assert_eq!(store.save_edit(), Err(NoteStoreError::EmptyTitle));
    assert!(store.edit_session().is_some());
    assert_eq!(store.note(1).unwrap().title, "Product Team Sync");
}

#[test]
fn created_note_can_be_edited() {
    let mut store = seeded_store();
    let id = store
        .create_note(Draft {
            title: "1:1".to_string(),
            action_items: "x\ny".to_string(),
            ..Draft::default()
        })
        .unwrap();

    store.begin_edit(id);
    store.edit_session_mut().unwrap().action_items.push_str("\nz");
    store.save_edit().unwrap();
    assert_eq!(
        store.note(id).unwrap().action_items,
        vec!["x".to_string(), "y".to_string(), "z".to_string()]
    );
    assert_eq!(store.note(id).unwrap().date, "Jun 1, 2025");
}
