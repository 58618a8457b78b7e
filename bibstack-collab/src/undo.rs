//! Reversible edit records for the string table.
//!
//! Edits are plain data so a compound can sit on the application's undo
//! stack and be serialized with the session. Undo walks the edits most
//! recent first; redo replays them in recorded order.

use bibstack_model::{ModelError, ModelResult, StringDatabase, StringDef, StringId};
use serde::{Deserialize, Serialize};

/// One reversible edit applied to a string table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringEdit {
    /// A definition was inserted; undo removes it again.
    Inserted { def: StringDef },
    /// A definition was renamed; undo restores the old name.
    Renamed {
        id: StringId,
        old_name: String,
        new_name: String,
    },
}

impl StringEdit {
    /// Reverses this edit.
    pub fn undo(&self, db: &mut StringDatabase) -> ModelResult<()> {
        match self {
            StringEdit::Inserted { def } => db
                .remove(&def.id())
                .map(|_| ())
                .ok_or(ModelError::NotFound(def.id())),
            StringEdit::Renamed { id, old_name, .. } => db.rename(id, old_name),
        }
    }

    /// Replays this edit after an undo.
    pub fn redo(&self, db: &mut StringDatabase) -> ModelResult<()> {
        match self {
            StringEdit::Inserted { def } => db.insert(def.clone()),
            StringEdit::Renamed { id, new_name, .. } => db.rename(id, new_name),
        }
    }
}

/// A named, ordered sequence of reversible edits undone as one unit.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UndoLog {
    name: String,
    edits: Vec<StringEdit>,
}

impl UndoLog {
    /// Creates an empty compound with the given user-facing name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            edits: Vec::new(),
        }
    }

    /// The user-facing name shown in the undo menu.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Appends an edit.
    pub fn push(&mut self, edit: StringEdit) {
        self.edits.push(edit);
    }

    /// The recorded edits, oldest first.
    #[must_use]
    pub fn edits(&self) -> &[StringEdit] {
        &self.edits
    }

    /// Number of recorded edits.
    #[must_use]
    pub fn len(&self) -> usize {
        self.edits.len()
    }

    /// True when nothing was recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.edits.is_empty()
    }

    /// Undoes every edit, most recent first. Stops at the first failure.
    pub fn undo_all(&self, db: &mut StringDatabase) -> ModelResult<()> {
        for edit in self.edits.iter().rev() {
            edit.undo(db)?;
        }
        Ok(())
    }

    /// Replays every edit in recorded order. Stops at the first failure.
    pub fn redo_all(&self, db: &mut StringDatabase) -> ModelResult<()> {
        for edit in &self.edits {
            edit.redo(db)?;
        }
        Ok(())
    }
}
