//! The string table of one bibliography database.

use crate::{ModelError, ModelResult, StringDef, StringId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// All string definitions of one bibliography database.
///
/// Enforces the invariant that no two definitions share a name: inserts and
/// renames that would violate it are rejected with [`ModelError::NameTaken`]
/// and leave the table unchanged.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StringDatabase {
    strings: HashMap<StringId, StringDef>,
}

impl StringDatabase {
    /// Creates an empty string table.
    #[must_use]
    pub fn new() -> Self {
        Self {
            strings: HashMap::new(),
        }
    }

    /// True if any definition uses this name.
    #[must_use]
    pub fn contains_name(&self, name: &str) -> bool {
        self.strings.values().any(|def| def.name() == name)
    }

    /// Inserts a definition, rejecting duplicate names.
    pub fn insert(&mut self, def: StringDef) -> ModelResult<()> {
        if self.contains_name(def.name()) {
            return Err(ModelError::NameTaken(def.name().to_string()));
        }
        self.strings.insert(def.id(), def);
        Ok(())
    }

    /// Looks a definition up by id.
    #[must_use]
    pub fn get(&self, id: &StringId) -> Option<&StringDef> {
        self.strings.get(id)
    }

    /// Looks a definition up by name.
    #[must_use]
    pub fn get_by_name(&self, name: &str) -> Option<&StringDef> {
        self.strings.values().find(|def| def.name() == name)
    }

    /// Renames a definition in place.
    ///
    /// Renaming a definition to its current name is a no-op. Renaming to a
    /// name held by a *different* definition fails with
    /// [`ModelError::NameTaken`].
    pub fn rename(&mut self, id: &StringId, new_name: &str) -> ModelResult<()> {
        let current = self
            .strings
            .get(id)
            .ok_or(ModelError::NotFound(*id))?;
        if current.name() == new_name {
            return Ok(());
        }
        if self.contains_name(new_name) {
            return Err(ModelError::NameTaken(new_name.to_string()));
        }
        // Checked above; the entry cannot have vanished.
        if let Some(def) = self.strings.get_mut(id) {
            def.set_name(new_name);
        }
        Ok(())
    }

    /// Replaces a definition's content.
    pub fn set_content(&mut self, id: &StringId, content: impl Into<String>) -> ModelResult<()> {
        let def = self.strings.get_mut(id).ok_or(ModelError::NotFound(*id))?;
        def.set_content(content);
        Ok(())
    }

    /// Removes a definition, returning it if present.
    pub fn remove(&mut self, id: &StringId) -> Option<StringDef> {
        self.strings.remove(id)
    }

    /// Iterates over all definitions in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = &StringDef> {
        self.strings.values()
    }

    /// Number of definitions in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// True if the table holds no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }
}
