//! Meeting note record and dialog buffers.
//!
//! # Responsibility
//! - Define the committed `Note` shape rendered by sidebar and detail views.
//! - Define `Draft` (new-note dialog) and `EditSession` (edit dialog) buffers
//!   that keep item lists as raw multi-line text until commit.
//!
//! # Invariants
//! - `Note` is replaced wholesale on edit; fields are never patched in place.
//! - `date` is stamped once at creation and never re-derived.
//! - `action_items` / `key_decisions` hold no blank entries.

use crate::model::lines::join_lines;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for a meeting note.
///
/// Assigned from a monotonic counter; a deleted note's id is never handed out
/// again.
pub type NoteId = u64;

/// Priority bucket shown as a badge and used for sidebar coloring.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Importance {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// Wire value for low importance.
pub const IMPORTANCE_LOW: &str = "low";
/// Wire value for medium importance.
pub const IMPORTANCE_MEDIUM: &str = "medium";
/// Wire value for high importance.
pub const IMPORTANCE_HIGH: &str = "high";
/// Wire value for urgent importance.
pub const IMPORTANCE_URGENT: &str = "urgent";

impl Importance {
    /// All buckets in select-menu order.
    pub const ALL: [Importance; 4] = [Self::Low, Self::Medium, Self::High, Self::Urgent];

    /// Stable lowercase wire value.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => IMPORTANCE_LOW,
            Self::Medium => IMPORTANCE_MEDIUM,
            Self::High => IMPORTANCE_HIGH,
            Self::Urgent => IMPORTANCE_URGENT,
        }
    }

    /// Label used by the importance select menu.
    pub fn select_label(self) -> &'static str {
        match self {
            Self::Low => "Low Priority",
            Self::Medium => "Medium Priority",
            Self::High => "High Priority",
            Self::Urgent => "Urgent",
        }
    }

    /// Badge text shown on sidebar cards and the detail header.
    pub fn badge_label(self) -> String {
        format!("{} Priority", self.as_str())
    }

    /// Parses a wire value, ignoring case and surrounding whitespace.
    pub fn parse(value: &str) -> Result<Self, ImportanceParseError> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "" => Err(ImportanceParseError::Empty),
            IMPORTANCE_LOW => Ok(Self::Low),
            IMPORTANCE_MEDIUM => Ok(Self::Medium),
            IMPORTANCE_HIGH => Ok(Self::High),
            IMPORTANCE_URGENT => Ok(Self::Urgent),
            _ => Err(ImportanceParseError::Unsupported(value.trim().to_string())),
        }
    }
}

impl Display for Importance {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Importance parse errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImportanceParseError {
    Empty,
    Unsupported(String),
}

impl Display for ImportanceParseError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Empty => write!(f, "importance value must not be empty"),
            Self::Unsupported(value) => write!(
                f,
                "unsupported importance `{value}`; expected low|medium|high|urgent"
            ),
        }
    }
}

impl Error for ImportanceParseError {}

/// Committed meeting note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: NoteId,
    pub title: String,
    /// Creation date, e.g. `Dec 15, 2024`.
    pub date: String,
    /// Free text, e.g. `45 min`.
    pub duration: String,
    pub importance: Importance,
    pub summary: String,
    pub action_items: Vec<String>,
    pub key_decisions: Vec<String>,
}

/// Form buffer for the new-note dialog.
///
/// `action_items` / `key_decisions` hold one item per line and are split on
/// submit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Draft {
    pub title: String,
    pub summary: String,
    pub importance: Importance,
    pub action_items: String,
    pub key_decisions: String,
}

/// Detached copy of a note being edited.
///
/// Changes made here are invisible to the collection until the session is
/// committed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditSession {
    pub id: NoteId,
    pub title: String,
    pub date: String,
    pub duration: String,
    pub importance: Importance,
    pub summary: String,
    pub action_items: String,
    pub key_decisions: String,
}

impl EditSession {
    /// Materializes a session from a committed note.
    pub fn from_note(note: &Note) -> Self {
        Self {
            id: note.id,
            title: note.title.clone(),
            date: note.date.clone(),
            duration: note.duration.clone(),
            importance: note.importance,
            summary: note.summary.clone(),
            action_items: join_lines(&note.action_items),
            key_decisions: join_lines(&note.key_decisions),
        }
    }
}
