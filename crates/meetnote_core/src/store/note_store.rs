//! Note collection state and its transitions.
//!
//! # Responsibility
//! - Create, select, edit and delete meeting notes held in memory.
//! - Run the dialog protocols: draft (open / submit / discard) and edit
//!   session (begin / commit / discard).
//! - Track the recording flag used by record button and transcript tab.
//!
//! # Invariants
//! - `notes` is ordered newest first; creation prepends.
//! - Ids are drawn from `next_id`, which only grows, so ids stay pairwise
//!   distinct across any create/delete sequence.
//! - Committing an edit keeps the stored `id`, `date` and `duration`.
//! - Deleting the active note clears the active selection.
//! - Missing ids are silent no-ops reported through return values.

use crate::config::StoreConfig;
use crate::model::lines::split_lines;
use crate::model::note::{Draft, EditSession, Note, NoteId};
use crate::store::clock::{format_note_date, Clock, SystemClock};
use crate::store::confirm::DeleteConfirmation;
use crate::store::seed::example_notes;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Validation error for store transitions.
///
/// Only produced when `StoreConfig::require_title` is enabled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NoteStoreError {
    /// Title is empty or whitespace-only.
    EmptyTitle,
}

impl Display for NoteStoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "note title must not be empty"),
        }
    }
}

impl Error for NoteStoreError {}

/// Result of a delete request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeleteOutcome {
    /// Confirmed and removed.
    Deleted,
    /// Confirmation declined; nothing changed.
    Declined,
    /// No note with that id; confirmation was not asked.
    NotFound,
}

/// Owned copy of all view-visible store state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreSnapshot {
    pub notes: Vec<Note>,
    pub active_note_id: Option<NoteId>,
    pub draft: Option<Draft>,
    pub edit_session: Option<EditSession>,
    pub is_recording: bool,
}

/// In-memory meeting note store.
pub struct NoteStore {
    notes: Vec<Note>,
    active_note_id: Option<NoteId>,
    draft: Option<Draft>,
    edit_session: Option<EditSession>,
    is_recording: bool,
    next_id: NoteId,
    config: StoreConfig,
    clock: Box<dyn Clock + Send>,
}

impl Debug for NoteStore {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteStore")
            .field("notes", &self.notes.len())
            .field("active_note_id", &self.active_note_id)
            .field("draft_open", &self.draft.is_some())
            .field("edit_session", &self.edit_session.as_ref().map(|s| s.id))
            .field("is_recording", &self.is_recording)
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl Default for NoteStore {
    fn default() -> Self {
        Self::new(StoreConfig::default())
    }
}

impl NoteStore {
    /// Creates a store stamping dates from the local system clock.
    pub fn new(config: StoreConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }

    /// Creates a store with no example notes.
    pub fn empty() -> Self {
        Self::new(StoreConfig {
            seed_examples: false,
            ..StoreConfig::default()
        })
    }

    /// Creates a store with an injected date source.
    pub fn with_clock(config: StoreConfig, clock: impl Clock + Send + 'static) -> Self {
        let notes = if config.seed_examples {
            example_notes()
        } else {
            Vec::new()
        };
        let next_id = notes.iter().map(|note| note.id).max().unwrap_or(0) + 1;
        debug!(
            "event=store_init module=store status=ok seeded={} next_id={}",
            notes.len(),
            next_id
        );

        Self {
            notes,
            active_note_id: None,
            draft: None,
            edit_session: None,
            is_recording: false,
            next_id,
            config,
            clock: Box::new(clock),
        }
    }

    /// Notes, newest first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    /// Looks up one note by id.
    pub fn note(&self, id: NoteId) -> Option<&Note> {
        self.notes.iter().find(|note| note.id == id)
    }

    pub fn active_note_id(&self) -> Option<NoteId> {
        self.active_note_id
    }

    /// Resolves the active selection to its note.
    pub fn active_note(&self) -> Option<&Note> {
        self.active_note_id.and_then(|id| self.note(id))
    }

    pub fn is_recording(&self) -> bool {
        self.is_recording
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Copies all view-visible state.
    pub fn snapshot(&self) -> StoreSnapshot {
        StoreSnapshot {
            notes: self.notes.clone(),
            active_note_id: self.active_note_id,
            draft: self.draft.clone(),
            edit_session: self.edit_session.clone(),
            is_recording: self.is_recording,
        }
    }

    /// Flips the recording flag and returns the new value.
    ///
    /// No audio is captured.
    pub fn toggle_recording(&mut self) -> bool {
        self.is_recording = !self.is_recording;
        info!(
            "event=recording_toggle module=store status=ok recording={}",
            self.is_recording
        );
        self.is_recording
    }

    /// Opens the new-note dialog with an empty form.
    ///
    /// An already open draft is kept as is.
    pub fn open_draft(&mut self) -> &mut Draft {
        self.draft.get_or_insert_with(Draft::default)
    }

    pub fn draft(&self) -> Option<&Draft> {
        self.draft.as_ref()
    }

    pub fn draft_mut(&mut self) -> Option<&mut Draft> {
        self.draft.as_mut()
    }

    /// Closes the new-note dialog without creating anything.
    pub fn discard_draft(&mut self) {
        self.draft = None;
    }

    /// Creates a note from the open draft.
    ///
    /// Returns `Ok(None)` when no draft is open.
    pub fn submit_draft(&mut self) -> Result<Option<NoteId>, NoteStoreError> {
        let Some(draft) = self.draft.clone() else {
            return Ok(None);
        };
        self.create_note(draft).map(Some)
    }

    /// Creates a note from form values and prepends it to the collection.
    ///
    /// Item buffers are split per line with blank lines dropped. The open
    /// draft, if any, is closed afterwards.
    ///
    /// # Errors
    /// - `EmptyTitle` when `require_title` is set and the title is blank.
    ///   State is left untouched in that case.
    pub fn create_note(&mut self, draft: Draft) -> Result<NoteId, NoteStoreError> {
        self.check_title(&draft.title)?;

        let id = self.allocate_id();
        let note = Note {
            id,
            title: draft.title,
            date: format_note_date(self.clock.today()),
            duration: self.config.manual_duration.clone(),
            importance: draft.importance,
            summary: draft.summary,
            action_items: split_lines(&draft.action_items),
            key_decisions: split_lines(&draft.key_decisions),
        };
        info!(
            "event=note_create module=store status=ok note_id={} action_items={} key_decisions={}",
            id,
            note.action_items.len(),
            note.key_decisions.len()
        );

        self.notes.insert(0, note);
        self.draft = None;
        Ok(id)
    }

    /// Makes `id` the active note.
    ///
    /// Returns `false` and leaves the selection unchanged when `id` is unknown.
    pub fn select_note(&mut self, id: NoteId) -> bool {
        if self.note(id).is_none() {
            debug!("event=note_select module=store status=miss note_id={id}");
            return false;
        }
        self.active_note_id = Some(id);
        true
    }

    /// Opens an edit session copied from note `id`.
    ///
    /// Returns `false` and opens nothing when `id` is unknown.
    pub fn begin_edit(&mut self, id: NoteId) -> bool {
        let Some(note) = self.note(id) else {
            debug!("event=edit_begin module=store status=miss note_id={id}");
            return false;
        };
        let session = EditSession::from_note(note);
        self.edit_session = Some(session);
        debug!("event=edit_begin module=store status=ok note_id={id}");
        true
    }

    pub fn edit_session(&self) -> Option<&EditSession> {
        self.edit_session.as_ref()
    }

    pub fn edit_session_mut(&mut self) -> Option<&mut EditSession> {
        self.edit_session.as_mut()
    }

    /// Drops the open edit session; the collection is untouched.
    pub fn discard_edit(&mut self) {
        if let Some(session) = self.edit_session.take() {
            debug!(
                "event=edit_discard module=store status=ok note_id={}",
                session.id
            );
        }
    }

    /// Commits the open edit session.
    ///
    /// Returns `Ok(None)` when no session is open.
    pub fn save_edit(&mut self) -> Result<Option<NoteId>, NoteStoreError> {
        let Some(session) = self.edit_session.clone() else {
            return Ok(None);
        };
        self.commit_edit(session)
    }

    /// Replaces the note matching `session.id` with the edited values.
    ///
    /// The stored note keeps its `id`, `date` and `duration`. On success the
    /// note becomes active and the edit session is closed. Returns `Ok(None)`
    /// when no note matches.
    ///
    /// # Errors
    /// - `EmptyTitle` when `require_title` is set and the title is blank.
    pub fn commit_edit(&mut self, session: EditSession) -> Result<Option<NoteId>, NoteStoreError> {
        self.check_title(&session.title)?;

        let Some(slot) = self.notes.iter_mut().find(|note| note.id == session.id) else {
            debug!(
                "event=edit_commit module=store status=miss note_id={}",
                session.id
            );
            return Ok(None);
        };

        let id = slot.id;
        *slot = Note {
            id,
            title: session.title,
            date: slot.date.clone(),
            duration: slot.duration.clone(),
            importance: session.importance,
            summary: session.summary,
            action_items: split_lines(&session.action_items),
            key_decisions: split_lines(&session.key_decisions),
        };
        info!(
            "event=edit_commit module=store status=ok note_id={} action_items={} key_decisions={}",
            id,
            slot.action_items.len(),
            slot.key_decisions.len()
        );

        self.active_note_id = Some(id);
        self.edit_session = None;
        Ok(Some(id))
    }

    /// Deletes note `id` after `confirmation` accepts.
    ///
    /// Declining is a full no-op. Unknown ids return `NotFound` without
    /// asking.
    pub fn delete_note(
        &mut self,
        id: NoteId,
        confirmation: &mut impl DeleteConfirmation,
    ) -> DeleteOutcome {
        let Some(index) = self.notes.iter().position(|note| note.id == id) else {
            debug!("event=note_delete module=store status=miss note_id={id}");
            return DeleteOutcome::NotFound;
        };

        if !confirmation.confirm_delete(&self.notes[index]) {
            info!("event=note_delete module=store status=declined note_id={id}");
            return DeleteOutcome::Declined;
        }

        self.notes.remove(index);
        if self.active_note_id == Some(id) {
            self.active_note_id = None;
        }
        info!("event=note_delete module=store status=ok note_id={id}");
        DeleteOutcome::Deleted
    }

    fn allocate_id(&mut self) -> NoteId {
        let id = self.next_id;
        self.next_id += 1;
        id
    }

    fn check_title(&self, title: &str) -> Result<(), NoteStoreError> {
        if self.config.require_title && title.trim().is_empty() {
            info!("event=title_check module=store status=rejected reason=empty_title");
            return Err(NoteStoreError::EmptyTitle);
        }
        Ok(())
    }
}
