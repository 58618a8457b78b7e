//! Log console for BibStack.
//!
//! The application appends every noteworthy event to an explicit
//! [`LogSink`] owned by the shell (not a process-wide singleton). The
//! console window builds a [`ConsoleModel`] over it: a 1:1,
//! order-preserving mirror of the buffer as presentation entries, plus the
//! clipboard-copy and automatic-bug-report commands.
//!
//! The model reaches the platform only through the host surface traits
//! ([`Clipboard`], [`DialogService`], [`BrowserOpener`]); the GUI shell
//! supplies the production implementations, tests supply recording fakes.

mod build_info;
mod error;
mod host;
mod model;
mod record;
mod report;
mod sink;
mod view;

pub use build_info::BuildInfo;
pub use error::{ConsoleError, ConsoleResult};
pub use host::{BrowserOpener, Clipboard, DialogService};
pub use model::{ConsoleModel, LINE_SEPARATOR};
pub use record::{LogLevel, LogRecord, RecordId};
pub use report::{details_block, IssueReport, ISSUE_TITLE_PREFIX, ISSUE_TRACKER_URL};
pub use sink::{LogObserver, LogSink};
pub use view::LogEntryView;
