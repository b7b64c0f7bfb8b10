//! In-memory note store and its injected capabilities.
//!
//! # Responsibility
//! - Own the notes collection, active selection and dialog buffers.
//! - Expose synchronous transitions invoked by view layers (FFI, CLI).
//! - Keep side-effecting collaborators (clock, delete confirmation) injectable.
//!
//! # Invariants
//! - Note ids come from a monotonic counter and are never reused.
//! - The collection is only mutated through store transitions.

pub mod clock;
pub mod confirm;
pub mod note_store;
pub mod seed;
