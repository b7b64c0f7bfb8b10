use meetnote_core::view::{
    detail_view, sidebar_items, tab_lines, EMPTY_DETAIL_MESSAGE, SIDEBAR_HEADING,
};
use meetnote_core::{DetailTab, NoteStore};

#[test]
fn sidebar_lists_notes_in_order_and_flags_active() {
    let mut store = NoteStore::default();
    store.select_note(2);

    let items = sidebar_items(&store);
    assert_eq!(items.len(), 2);
    assert_eq!(items[0].title, "Product Team Sync");
    assert_eq!(items[0].importance_badge, "high Priority");
    assert!(!items[0].is_active);
    assert_eq!(items[1].duration, "30 min");
    assert!(items[1].is_active);
    assert_eq!(SIDEBAR_HEADING, "Recent Meetings");
}

#[test]
fn detail_view_is_absent_without_selection() {
    let store = NoteStore::default();
    assert!(detail_view(&store).is_none());
    assert!(EMPTY_DETAIL_MESSAGE.starts_with("Select a meeting"));
}

#[test]
fn detail_tabs_render_note_sections() {
    let mut store = NoteStore::default();
    store.select_note(1);
    let detail = detail_view(&store).unwrap();

    assert_eq!(
        detail.tab_lines(DetailTab::Summary),
        vec!["Discussed Q1 roadmap and feature prioritization.".to_string()]
    );
    assert_eq!(detail.tab_lines(DetailTab::ActionItems).len(), 3);
    assert_eq!(detail.tab_lines(DetailTab::Decisions).len(), 2);
    assert_eq!(
        detail.tab_lines(DetailTab::Transcript),
        vec!["Start recording to see the transcript.".to_string()]
    );
}

#[test]
fn transcript_tab_follows_recording_flag() {
    let mut store = NoteStore::default();
    store.select_note(1);
    store.toggle_recording();

    let note = store.active_note().unwrap();
    let lines = tab_lines(note, DetailTab::Transcript, store.is_recording());
    assert_eq!(
        lines,
        vec!["Recording in progress... Transcript will appear here.".to_string()]
    );
    assert!(detail_view(&store).unwrap().is_recording);
}
