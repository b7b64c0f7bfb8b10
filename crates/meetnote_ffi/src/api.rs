//! FFI use-case API for the Flutter meeting-notes view.
//!
//! # Responsibility
//! - Expose store transitions as sync, use-case level functions via FRB.
//! - Flatten core types into plain records Dart can render directly.
//!
//! # Invariants
//! - Exported functions must not panic across the FFI boundary.
//! - One process-wide `NoteStore`; every call locks it for one transition.
//! - Delete confirmation is collected by the Dart dialog before calling
//!   `note_delete`.

use log::warn;
use meetnote_core::view::record_button_label;
use meetnote_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, ping as ping_inner,
    DeleteOutcome, Draft, Importance, Note, NoteId, NoteStore, Preanswered, StoreConfig,
};
use std::sync::{Mutex, OnceLock};

static STORE: OnceLock<Mutex<NoteStore>> = OnceLock::new();

/// Minimal health-check API for FRB smoke integration.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn ping() -> String {
    ping_inner().to_owned()
}

/// Expose core crate version through FFI.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// Input semantics:
/// - `level`: one of `trace|debug|info|warn|error` (case-insensitive).
/// - `log_dir`: absolute directory path where rolling logs are written.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Never panics; returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Note record rendered by sidebar cards and the detail pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteItem {
    pub id: u64,
    pub title: String,
    pub date: String,
    pub duration: String,
    /// Wire value (`low|medium|high|urgent`).
    pub importance: String,
    /// Badge text, e.g. `high Priority`.
    pub importance_badge: String,
    pub summary: String,
    pub action_items: Vec<String>,
    pub key_decisions: Vec<String>,
    /// Whether this note is the active selection.
    pub is_active: bool,
}

/// Editable fields of the edit dialog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditForm {
    pub id: u64,
    pub title: String,
    pub importance: String,
    pub summary: String,
    /// One item per line.
    pub action_items: String,
    /// One item per line.
    pub key_decisions: String,
}

/// Generic action response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteActionResponse {
    /// Whether the action took effect.
    pub ok: bool,
    /// Affected note id, when any.
    pub note_id: Option<u64>,
    /// Human-readable message for diagnostics/UI.
    pub message: String,
}

impl NoteActionResponse {
    fn success(message: impl Into<String>, note_id: NoteId) -> Self {
        Self {
            ok: true,
            note_id: Some(note_id),
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            note_id: None,
            message: message.into(),
        }
    }
}

/// Flips the recording flag and returns the new value.
#[flutter_rust_bridge::frb(sync)]
pub fn recording_toggle() -> bool {
    with_store(|store| store.toggle_recording()).unwrap_or(false)
}

/// Record button caption for the current flag.
#[flutter_rust_bridge::frb(sync)]
pub fn recording_button_label() -> String {
    let recording = with_store(|store| store.is_recording()).unwrap_or(false);
    record_button_label(recording).to_string()
}

/// Lists notes newest first.
#[flutter_rust_bridge::frb(sync)]
pub fn notes_list() -> Vec<NoteItem> {
    with_store(|store| {
        let active = store.active_note_id();
        store
            .notes()
            .iter()
            .map(|note| to_note_item(note, active))
            .collect()
    })
    .unwrap_or_default()
}

/// Returns the active note, if any.
#[flutter_rust_bridge::frb(sync)]
pub fn active_note() -> Option<NoteItem> {
    with_store(|store| {
        store
            .active_note()
            .map(|note| to_note_item(note, Some(note.id)))
    })
    .ok()
    .flatten()
}

/// Creates a note from new-note dialog values.
///
/// # FFI contract
/// - `action_items` / `key_decisions` hold one item per line; blank lines
///   are dropped.
/// - Unknown `importance` values are rejected.
#[flutter_rust_bridge::frb(sync)]
pub fn note_create(
    title: String,
    importance: String,
    summary: String,
    action_items: String,
    key_decisions: String,
) -> NoteActionResponse {
    let importance = match Importance::parse(&importance) {
        Ok(value) => value,
        Err(err) => return NoteActionResponse::failure(format!("note_create failed: {err}")),
    };
    let draft = Draft {
        title,
        summary,
        importance,
        action_items,
        key_decisions,
    };

    match with_store(|store| store.create_note(draft)) {
        Ok(Ok(note_id)) => NoteActionResponse::success("Note created.", note_id),
        Ok(Err(err)) => NoteActionResponse::failure(format!("note_create failed: {err}")),
        Err(err) => NoteActionResponse::failure(format!("note_create failed: {err}")),
    }
}

/// Selects a note; unknown ids leave the selection unchanged.
#[flutter_rust_bridge::frb(sync)]
pub fn note_select(note_id: u64) -> bool {
    with_store(|store| store.select_note(note_id)).unwrap_or(false)
}

/// Opens an edit session and returns its form values.
///
/// Returns `None` when the note does not exist.
#[flutter_rust_bridge::frb(sync)]
pub fn note_begin_edit(note_id: u64) -> Option<EditForm> {
    with_store(|store| {
        if !store.begin_edit(note_id) {
            return None;
        }
        store.edit_session().map(|session| EditForm {
            id: session.id,
            title: session.title.clone(),
            importance: session.importance.as_str().to_string(),
            summary: session.summary.clone(),
            action_items: session.action_items.clone(),
            key_decisions: session.key_decisions.clone(),
        })
    })
    .ok()
    .flatten()
}

/// Commits form values into the open edit session for `form.id`.
///
/// # FFI contract
/// - Requires a prior `note_begin_edit` for the same id.
/// - Stored `date` and `duration` are kept.
#[flutter_rust_bridge::frb(sync)]
pub fn note_commit_edit(form: EditForm) -> NoteActionResponse {
    let importance = match Importance::parse(&form.importance) {
        Ok(value) => value,
        Err(err) => return NoteActionResponse::failure(format!("note_commit_edit failed: {err}")),
    };

    let note_id = form.id;
    let result = with_store(|store| {
        let Some(session) = store.edit_session_mut().filter(|s| s.id == note_id) else {
            return Err(format!("no open edit session for note {note_id}"));
        };
        session.title = form.title;
        session.importance = importance;
        session.summary = form.summary;
        session.action_items = form.action_items;
        session.key_decisions = form.key_decisions;
        store.save_edit().map_err(|err| err.to_string())
    });

    match result {
        Ok(Ok(Some(note_id))) => NoteActionResponse::success("Note updated.", note_id),
        Ok(Ok(None)) => NoteActionResponse::failure(format!(
            "note_commit_edit failed: note {note_id} no longer exists"
        )),
        Ok(Err(err)) | Err(err) => {
            NoteActionResponse::failure(format!("note_commit_edit failed: {err}"))
        }
    }
}

/// Closes the edit dialog without saving.
#[flutter_rust_bridge::frb(sync)]
pub fn note_discard_edit() {
    discard_edit_in(shared_store());
}

/// Deletes a note after the Dart confirmation dialog answered `confirmed`.
///
/// # FFI contract
/// - `confirmed == false` is a no-op reported as `ok=false`.
/// - Clears the active selection when it pointed at the deleted note.
#[flutter_rust_bridge::frb(sync)]
pub fn note_delete(note_id: u64, confirmed: bool) -> NoteActionResponse {
    match with_store(|store| store.delete_note(note_id, &mut Preanswered(confirmed))) {
        Ok(DeleteOutcome::Deleted) => NoteActionResponse::success("Note deleted.", note_id),
        Ok(DeleteOutcome::Declined) => NoteActionResponse::failure("Delete cancelled."),
        Ok(DeleteOutcome::NotFound) => {
            NoteActionResponse::failure(format!("note_delete failed: note {note_id} not found"))
        }
        Err(err) => NoteActionResponse::failure(format!("note_delete failed: {err}")),
    }
}

fn shared_store() -> &'static Mutex<NoteStore> {
    STORE.get_or_init(|| Mutex::new(NoteStore::new(resolve_store_config())))
}

fn with_store<T>(f: impl FnOnce(&mut NoteStore) -> T) -> Result<T, String> {
    with_locked(shared_store(), f)
}

fn with_locked<T>(
    store: &Mutex<NoteStore>,
    f: impl FnOnce(&mut NoteStore) -> T,
) -> Result<T, String> {
    let mut guard = store
        .lock()
        .map_err(|_| "note store lock poisoned".to_string())?;
    Ok(f(&mut guard))
}

fn discard_edit_in(store: &Mutex<NoteStore>) {
    if let Err(err) = with_locked(store, |store| store.discard_edit()) {
        warn!("event=note_discard_edit module=ffi status=error reason={err}");
    }
}

fn resolve_store_config() -> StoreConfig {
    StoreConfig::from_env().unwrap_or_else(|err| {
        warn!("event=store_config module=ffi status=fallback reason={err}");
        StoreConfig::default()
    })
}

fn to_note_item(note: &Note, active: Option<NoteId>) -> NoteItem {
    NoteItem {
        id: note.id,
        title: note.title.clone(),
        date: note.date.clone(),
        duration: note.duration.clone(),
        importance: note.importance.as_str().to_string(),
        importance_badge: note.importance.badge_label(),
        summary: note.summary.clone(),
        action_items: note.action_items.clone(),
        key_decisions: note.key_decisions.clone(),
        is_active: active == Some(note.id),
    }
}

#[cfg(test)]
mod tests {
    use super::{
        core_version, init_logging, note_begin_edit, note_commit_edit, note_create, note_delete,
        note_discard_edit, note_select, notes_list, ping, recording_button_label,
        recording_toggle,
    };
    use super::{discard_edit_in, with_locked};
    use meetnote_core::NoteStore;
    use std::sync::{Arc, Mutex};

    fn create(title: &str, action_items: &str) -> u64 {
        let response = note_create(
            title.to_string(),
            "high".to_string(),
            String::new(),
            action_items.to_string(),
            String::new(),
        );
        assert!(response.ok, "{}", response.message);
        response.note_id.expect("created note should return id")
    }

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }

    #[test]
    fn init_logging_rejects_empty_log_dir() {
        let error = init_logging("info".to_string(), String::new());
        assert!(!error.is_empty());
    }

    #[test]
    fn init_logging_rejects_unsupported_level() {
        let error = init_logging("verbose".to_string(), "/tmp/logs".to_string());
        assert!(!error.is_empty());
    }

    #[test]
    fn note_create_prepends_and_splits_items() {
        let note_id = create("ffi standup", "a\n\nb");
        let items = notes_list();
        let created = items
            .iter()
            .find(|item| item.id == note_id)
            .expect("created note should be listed");
        assert_eq!(created.action_items, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(created.importance, "high");
        assert_eq!(created.duration, "0 min");
    }

    #[test]
    fn note_create_rejects_unknown_importance() {
        let response = note_create(
            "bad".to_string(),
            "critical".to_string(),
            String::new(),
            String::new(),
            String::new(),
        );
        assert!(!response.ok);
        assert!(response.message.contains("importance"));
    }

    #[test]
    fn edit_round_trip_updates_fields_and_requires_open_session() {
        // One test owns the single edit-session slot to avoid cross-test races.
        let note_id = create("ffi edit", "x");
        let mut form = note_begin_edit(note_id).expect("edit form for existing note");
        assert_eq!(form.action_items, "x");

        form.title = "ffi edit renamed".to_string();
        form.key_decisions = "go\n".to_string();
        let response = note_commit_edit(form.clone());
        assert!(response.ok, "{}", response.message);

        let item = notes_list()
            .into_iter()
            .find(|item| item.id == note_id)
            .expect("edited note should be listed");
        assert_eq!(item.title, "ffi edit renamed");
        assert_eq!(item.key_decisions, vec!["go".to_string()]);

        let stale = note_commit_edit(form);
        assert!(!stale.ok);

        note_begin_edit(note_id).expect("edit form for existing note");
        note_discard_edit();
        assert!(note_begin_edit(u64::MAX).is_none());
    }

    #[test]
    fn declined_delete_keeps_note_and_confirmed_delete_removes_it() {
        let note_id = create("ffi delete", "");
        assert!(note_select(note_id));

        let declined = note_delete(note_id, false);
        assert!(!declined.ok);
        assert!(notes_list().iter().any(|item| item.id == note_id));

        let deleted = note_delete(note_id, true);
        assert!(deleted.ok, "{}", deleted.message);
        assert!(!notes_list().iter().any(|item| item.id == note_id));
        assert!(!note_select(note_id));
    }

    #[test]
    fn recording_toggle_flips_label() {
        let first = recording_toggle();
        let label = recording_button_label();
        let second = recording_toggle();
        assert_ne!(first, second);
        assert_eq!(
            label,
            if first {
                "Stop Recording"
            } else {
                "Start Recording"
            }
        );
    }

    #[test]
    fn discard_edit_on_poisoned_store_reports_instead_of_panicking() {
        let store = Arc::new(Mutex::new(NoteStore::default()));
        let poisoner = Arc::clone(&store);
        let joined = std::thread::spawn(move || {
            let _guard = poisoner.lock().expect("lock before poisoning");
            panic!("poison the store lock");
        })
        .join();
        assert!(joined.is_err());

        discard_edit_in(&store);
        let err = with_locked(&store, |store| store.len()).expect_err("lock is poisoned");
        assert_eq!(err, "note store lock poisoned");
    }
}
