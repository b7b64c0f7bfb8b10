//! Meeting-note domain model.
//!
//! # Responsibility
//! - Define the committed `Note` record and its transient dialog buffers.
//! - Own the multi-line text <-> item sequence conversion rules.
//!
//! # Invariants
//! - Every committed note is identified by a `NoteId` that is never reused.
//! - Item sequences on a committed note never hold blank entries.

pub mod lines;
pub mod note;
