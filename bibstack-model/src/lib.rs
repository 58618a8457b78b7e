//! String-definition model for BibStack.
//!
//! Defines the types the editor and reconciliation subsystems operate on:
//! - [`StringDef`] — a named, reusable text macro stored in a bibliography database
//! - [`StringDatabase`] — the string table of one database, enforcing name uniqueness
//! - [`StringId`] — UUID v7 identifier for a string definition
//!
//! Entries reference string definitions by name, so within one database no
//! two definitions may share a name. [`StringDatabase`] owns that invariant:
//! every mutating operation either preserves it or is rejected with a typed
//! error, which keeps callers (the change applicator in particular) from
//! silently corrupting the table.

mod database;
mod error;
mod ids;
mod string_def;

pub use database::StringDatabase;
pub use error::{ModelError, ModelResult};
pub use ids::StringId;
pub use string_def::StringDef;
