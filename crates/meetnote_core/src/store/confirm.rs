//! Yes/no confirmation gate consulted before a note is deleted.

use crate::model::note::Note;

/// Decides whether a pending delete may proceed.
///
/// Invoked synchronously; returning `false` aborts the delete with no state
/// change.
pub trait DeleteConfirmation {
    fn confirm_delete(&mut self, note: &Note) -> bool;
}

impl<F> DeleteConfirmation for F
where
    F: FnMut(&Note) -> bool,
{
    fn confirm_delete(&mut self, note: &Note) -> bool {
        self(note)
    }
}

/// Accepts every delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct AlwaysConfirm;

impl DeleteConfirmation for AlwaysConfirm {
    fn confirm_delete(&mut self, _note: &Note) -> bool {
        true
    }
}

/// Declines every delete.
#[derive(Debug, Clone, Copy, Default)]
pub struct NeverConfirm;

impl DeleteConfirmation for NeverConfirm {
    fn confirm_delete(&mut self, _note: &Note) -> bool {
        false
    }
}

/// Answer already collected by a host dialog before calling into the store.
#[derive(Debug, Clone, Copy)]
pub struct Preanswered(pub bool);

impl DeleteConfirmation for Preanswered {
    fn confirm_delete(&mut self, _note: &Note) -> bool {
        self.0
    }
}
