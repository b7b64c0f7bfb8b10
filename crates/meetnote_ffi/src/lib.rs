//! Flutter-facing bindings for the meeting-notes core.

pub mod api;
