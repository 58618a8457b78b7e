//! External-change reconciliation for BibStack.
//!
//! When the database file on disk changed while the user still had unsaved
//! edits in memory, the scan produces one change record per difference.
//! This crate holds the change record for renamed string definitions and
//! the applicator that resolves it against the live database and the
//! comparison copy, recording reversible edits for compound undo.
//!
//! Application is best effort by design: a change never fails to apply and
//! never blocks the rest of the merge. Everything that degrades the outcome
//! is returned in an [`ApplyReport`] so the caller can log it (the default
//! policy) or escalate.

mod applicator;
mod change;
mod undo;

pub use applicator::{ApplyNote, ApplyReport};
pub use change::{DatabaseChange, LocalCopy, StringNameChange};
pub use undo::{StringEdit, UndoLog};
