//! Applies resolved string-name conflicts to the live and comparison
//! databases.
//!
//! Application is best effort by contract: it never fails outright and
//! never blocks the surrounding merge workflow. Degradations (a name
//! collision in the live database, a rejected re-insert) come back as
//! [`ApplyNote`]s in the [`ApplyReport`].

use crate::change::{DatabaseChange, LocalCopy, StringNameChange};
use crate::undo::{StringEdit, UndoLog};
use bibstack_model::{ModelError, StringDatabase, StringDef};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A non-fatal degradation recorded while applying a change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApplyNote {
    /// The disk name is already in use in the live database; the rename was
    /// skipped there.
    NameCollision { from: String, to: String },
    /// Re-inserting a locally deleted definition was rejected because the
    /// name is taken.
    InsertRejected { name: String },
}

/// Outcome of applying a change.
///
/// Applying never fails; callers inspect the notes and choose between
/// logging ([`log_notes`](Self::log_notes), the default policy) and
/// escalating.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplyReport {
    notes: Vec<ApplyNote>,
}

impl ApplyReport {
    /// True when the change applied without degradations.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.notes.is_empty()
    }

    /// The degradations recorded during application.
    #[must_use]
    pub fn notes(&self) -> &[ApplyNote] {
        &self.notes
    }

    fn push(&mut self, note: ApplyNote) {
        self.notes.push(note);
    }

    /// Default policy: one warning per note, then move on.
    pub fn log_notes(&self) {
        for note in &self.notes {
            match note {
                ApplyNote::NameCollision { from, to } => {
                    warn!("cannot rename string '{from}' to '{to}': the name is already in use");
                }
                ApplyNote::InsertRejected { name } => {
                    warn!("could not add string '{name}': the name is already in use");
                }
            }
        }
    }
}

impl StringNameChange {
    /// Recreates the definition from its on-disk name and content.
    fn recreate_in(&self, db: &mut StringDatabase, report: &mut ApplyReport) {
        if let Err(err) = db.insert(StringDef::new(self.disk_name(), self.content())) {
            warn!("could not add string '{}': {err}", self.disk_name());
            report.push(ApplyNote::InsertRejected {
                name: self.disk_name().to_string(),
            });
        }
    }
}

impl DatabaseChange for StringNameChange {
    fn display_name(&self) -> String {
        format!("Renamed string: '{}'", self.disk_name())
    }

    fn description(&self) -> String {
        format!("{} : {}", self.disk_name(), self.content())
    }

    fn apply(
        &self,
        primary: &mut StringDatabase,
        secondary: &mut StringDatabase,
        undo: &mut UndoLog,
    ) -> ApplyReport {
        let mut report = ApplyReport::default();

        if primary.contains_name(self.disk_name()) {
            report.push(ApplyNote::NameCollision {
                from: self.mem_name().to_string(),
                to: self.disk_name().to_string(),
            });
        }

        match self.local() {
            // Removed or renamed away locally; we guess it was removed and
            // recreate it from the disk state.
            LocalCopy::Deleted => self.recreate_in(primary, &mut report),
            LocalCopy::Present(id) => match primary.rename(&id, self.disk_name()) {
                Ok(()) => undo.push(StringEdit::Renamed {
                    id,
                    old_name: self.mem_name().to_string(),
                    new_name: self.disk_name().to_string(),
                }),
                // The collision is already in the report; the table keeps
                // its unique-name invariant and no undo entry is recorded.
                Err(ModelError::NameTaken(_)) => {}
                Err(ModelError::NotFound(_)) => {
                    debug!(
                        "string '{}' disappeared before apply, recreating from disk",
                        self.mem_name()
                    );
                    self.recreate_in(primary, &mut report);
                }
            },
        }

        // Bring the comparison copy to the same resolution. It is private
        // scratch state, so failures here are logged and nothing more.
        match self.comparison() {
            LocalCopy::Deleted => {
                if let Err(err) =
                    secondary.insert(StringDef::new(self.disk_name(), self.content()))
                {
                    warn!("comparison database insert failed: {err}");
                }
            }
            LocalCopy::Present(id) => {
                let updated = secondary
                    .rename(&id, self.disk_name())
                    .and_then(|()| secondary.set_content(&id, self.content()));
                if let Err(err) = updated {
                    warn!("comparison database update failed: {err}");
                }
            }
        }

        report
    }
}
