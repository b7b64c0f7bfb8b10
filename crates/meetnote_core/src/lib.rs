//! Core state for the meeting-notes assistant.
//! All note state lives in memory; hosts (FFI, CLI) render from this crate.

pub mod config;
pub mod logging;
pub mod model;
pub mod store;
pub mod view;

pub use config::{ConfigError, LogSettings, StoreConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::lines::{join_lines, split_lines};
pub use model::note::{Draft, EditSession, Importance, ImportanceParseError, Note, NoteId};
pub use store::clock::{format_note_date, Clock, FixedClock, SystemClock};
pub use store::confirm::{AlwaysConfirm, DeleteConfirmation, NeverConfirm, Preanswered};
pub use store::note_store::{DeleteOutcome, NoteStore, NoteStoreError, StoreSnapshot};
pub use view::{DetailTab, DetailView, SidebarItem};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
