//! Detected external changes awaiting resolution.

use crate::applicator::ApplyReport;
use crate::undo::UndoLog;
use bibstack_model::{StringDatabase, StringId};
use serde::{Deserialize, Serialize};

/// Whether the local counterpart of an externally changed string still
/// exists.
///
/// The scan records this instead of a nullable reference, so both apply
/// paths are spelled out and checked exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocalCopy {
    /// The definition still exists locally under this id.
    Present(StringId),
    /// The definition was removed (or renamed away) locally.
    Deleted,
}

/// A change detected between the in-memory database and its file on disk.
///
/// Implementations resolve themselves against the live database and the
/// comparison copy, recording reversible edits as they go. Resolution is
/// best effort and never fails; see [`ApplyReport`].
pub trait DatabaseChange {
    /// Short label for the change-review list.
    fn display_name(&self) -> String;

    /// One-line detail shown when the change is selected.
    fn description(&self) -> String {
        self.display_name()
    }

    /// Applies the resolution to the live database and the comparison copy.
    fn apply(
        &self,
        primary: &mut StringDatabase,
        secondary: &mut StringDatabase,
        undo: &mut UndoLog,
    ) -> ApplyReport;
}

/// A string definition renamed on disk while the database was also open in
/// memory.
///
/// Constructed once per detected conflict by the database scan and consumed
/// by exactly one [`DatabaseChange::apply`] call. `mem_name` is the name
/// the definition had in memory, `disk_name` the name observed on disk,
/// `content` the definition's text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringNameChange {
    mem_name: String,
    disk_name: String,
    content: String,
    local: LocalCopy,
    comparison: LocalCopy,
}

impl StringNameChange {
    /// Creates the change record for one detected rename.
    #[must_use]
    pub fn new(
        mem_name: impl Into<String>,
        disk_name: impl Into<String>,
        content: impl Into<String>,
        local: LocalCopy,
        comparison: LocalCopy,
    ) -> Self {
        Self {
            mem_name: mem_name.into(),
            disk_name: disk_name.into(),
            content: content.into(),
            local,
            comparison,
        }
    }

    /// The name the definition had in memory when the conflict was detected.
    #[must_use]
    pub fn mem_name(&self) -> &str {
        &self.mem_name
    }

    /// The name observed on disk.
    #[must_use]
    pub fn disk_name(&self) -> &str {
        &self.disk_name
    }

    /// The definition's content.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// State of the live database's counterpart.
    #[must_use]
    pub fn local(&self) -> LocalCopy {
        self.local
    }

    /// State of the comparison database's counterpart.
    #[must_use]
    pub fn comparison(&self) -> LocalCopy {
        self.comparison
    }
}
