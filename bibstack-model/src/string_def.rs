use crate::StringId;
use serde::{Deserialize, Serialize};

/// A named, reusable text macro stored in a bibliography database.
///
/// Entries reference a definition by name and the content is expanded when
/// the entry is rendered. The name is mutated only through
/// [`StringDatabase::rename`](crate::StringDatabase::rename), which checks
/// the unique-name invariant; content carries no invariant and may be set
/// directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StringDef {
    id: StringId,
    name: String,
    content: String,
}

impl StringDef {
    /// Creates a definition with a fresh id.
    #[must_use]
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id: StringId::new(),
            name: name.into(),
            content: content.into(),
        }
    }

    /// Creates a definition with an explicit id (for replay or tests).
    #[must_use]
    pub fn with_id(id: StringId, name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            content: content.into(),
        }
    }

    /// The definition's identifier.
    #[must_use]
    pub fn id(&self) -> StringId {
        self.id
    }

    /// The label entries use to reference this definition.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The text the name expands to.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Replaces the content.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.content = content.into();
    }

    // Name changes go through the database so uniqueness stays checked.
    pub(crate) fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }
}
