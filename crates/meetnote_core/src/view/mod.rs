//! Read-only projections consumed by sidebar and detail views.
//!
//! # Responsibility
//! - Derive display text (labels, badges, placeholders) from store state.
//! - Keep widget behavior out of core: these are plain values to render.
//!
//! # Invariants
//! - Projections never mutate the store.
//! - Tab ids are stable strings shared with host UIs.

use crate::model::note::{Importance, Note, NoteId};
use crate::store::note_store::NoteStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Detail pane text shown when nothing is selected.
pub const EMPTY_DETAIL_MESSAGE: &str = "Select a meeting or start recording to view notes";
/// Sidebar section heading.
pub const SIDEBAR_HEADING: &str = "Recent Meetings";

const TRANSCRIPT_RECORDING: &str = "Recording in progress... Transcript will appear here.";
const TRANSCRIPT_IDLE: &str = "Start recording to see the transcript.";

/// Record button caption.
pub fn record_button_label(is_recording: bool) -> &'static str {
    if is_recording {
        "Stop Recording"
    } else {
        "Start Recording"
    }
}

/// Transcript tab body. No transcription happens; the text only reflects the
/// recording flag.
pub fn transcript_placeholder(is_recording: bool) -> &'static str {
    if is_recording {
        TRANSCRIPT_RECORDING
    } else {
        TRANSCRIPT_IDLE
    }
}

/// Tabs of the detail pane, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DetailTab {
    Summary,
    ActionItems,
    Decisions,
    Transcript,
}

impl DetailTab {
    pub const ALL: [DetailTab; 4] = [
        Self::Summary,
        Self::ActionItems,
        Self::Decisions,
        Self::Transcript,
    ];

    /// Stable id shared with host UIs.
    pub fn id(self) -> &'static str {
        match self {
            Self::Summary => "summary",
            Self::ActionItems => "action-items",
            Self::Decisions => "decisions",
            Self::Transcript => "transcript",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Summary => "Summary",
            Self::ActionItems => "Action Items",
            Self::Decisions => "Key Decisions",
            Self::Transcript => "Full Transcript",
        }
    }

    pub fn parse(value: &str) -> Result<Self, DetailTabParseError> {
        let normalized = value.trim();
        Self::ALL
            .into_iter()
            .find(|tab| tab.id() == normalized)
            .ok_or_else(|| DetailTabParseError(normalized.to_string()))
    }
}

/// Unknown detail tab id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailTabParseError(pub String);

impl Display for DetailTabParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "unknown detail tab: `{}`", self.0)
    }
}

impl Error for DetailTabParseError {}

/// One sidebar card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SidebarItem {
    pub id: NoteId,
    pub title: String,
    pub date: String,
    pub duration: String,
    pub importance: Importance,
    pub importance_badge: String,
    pub is_active: bool,
}

/// Sidebar cards in collection order, with the active card flagged.
pub fn sidebar_items(store: &NoteStore) -> Vec<SidebarItem> {
    let active = store.active_note_id();
    store
        .notes()
        .iter()
        .map(|note| SidebarItem {
            id: note.id,
            title: note.title.clone(),
            date: note.date.clone(),
            duration: note.duration.clone(),
            importance: note.importance,
            importance_badge: note.importance.badge_label(),
            is_active: active == Some(note.id),
        })
        .collect()
}

/// Detail pane for the active note.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DetailView {
    pub note: Note,
    pub importance_badge: String,
    pub is_recording: bool,
}

impl DetailView {
    /// Body lines for one tab.
    pub fn tab_lines(&self, tab: DetailTab) -> Vec<String> {
        tab_lines(&self.note, tab, self.is_recording)
    }
}

/// Resolves the active note, or `None` when the pane should show
/// [`EMPTY_DETAIL_MESSAGE`].
pub fn detail_view(store: &NoteStore) -> Option<DetailView> {
    store.active_note().map(|note| DetailView {
        note: note.clone(),
        importance_badge: note.importance.badge_label(),
        is_recording: store.is_recording(),
    })
}

/// Body lines rendered under `tab` for `note`.
pub fn tab_lines(note: &Note, tab: DetailTab, is_recording: bool) -> Vec<String> {
    match tab {
        DetailTab::Summary => vec![note.summary.clone()],
        DetailTab::ActionItems => note.action_items.clone(),
        DetailTab::Decisions => note.key_decisions.clone(),
        DetailTab::Transcript => vec![transcript_placeholder(is_recording).to_string()],
    }
}
