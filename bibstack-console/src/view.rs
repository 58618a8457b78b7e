//! Presentation transform of log records.

use crate::record::{LogLevel, LogRecord, RecordId};
use serde::{Deserialize, Serialize};

/// Presentation wrapper around one [`LogRecord`].
///
/// The console list mirrors the log buffer 1:1 with these entries. The
/// transform is deterministic: the same record always renders to the same
/// entry. `detailed_text` is the export rendering used for clipboard
/// copies and issue reports, including any attached detail text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogEntryView {
    id: RecordId,
    timestamp: String,
    level: LogLevel,
    message: String,
    detailed_text: String,
}

impl LogEntryView {
    /// Renders one record for display and export.
    #[must_use]
    pub fn new(record: &LogRecord) -> Self {
        let timestamp = record.timestamp.format("%H:%M:%S").to_string();
        let mut detailed_text = format!("{timestamp} [{}] {}", record.level, record.message);
        if let Some(detail) = &record.detail {
            detailed_text.push('\n');
            detailed_text.push_str(detail);
        }
        Self {
            id: record.id,
            timestamp,
            level: record.level,
            message: record.message.clone(),
            detailed_text,
        }
    }

    /// Id of the underlying record.
    #[must_use]
    pub fn id(&self) -> RecordId {
        self.id
    }

    /// The record's time of day, `HH:MM:SS`.
    #[must_use]
    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }

    /// The record's severity.
    #[must_use]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The record's message, without detail.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The export rendering, including detail text when present.
    #[must_use]
    pub fn detailed_text(&self) -> &str {
        &self.detailed_text
    }
}

impl From<&LogRecord> for LogEntryView {
    fn from(record: &LogRecord) -> Self {
        Self::new(record)
    }
}
