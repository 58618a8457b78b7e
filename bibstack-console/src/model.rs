//! View model for the log console window.

use crate::build_info::BuildInfo;
use crate::host::{BrowserOpener, Clipboard, DialogService};
use crate::record::LogRecord;
use crate::report::{details_block, IssueReport};
use crate::sink::{LogObserver, LogSink};
use crate::view::LogEntryView;
use crate::ConsoleResult;
use chrono::Utc;
use std::sync::{Arc, Mutex};
use tracing::debug;

/// Platform line separator used when joining log messages for export.
#[cfg(windows)]
pub const LINE_SEPARATOR: &str = "\r\n";
/// Platform line separator used when joining log messages for export.
#[cfg(not(windows))]
pub const LINE_SEPARATOR: &str = "\n";

/// Live mirror of the sink as presentation entries.
struct Mirror {
    entries: Mutex<Vec<LogEntryView>>,
}

impl LogObserver for Mirror {
    fn appended(&self, record: &LogRecord) {
        self.entries.lock().unwrap().push(LogEntryView::new(record));
    }
}

/// View model for the log console.
///
/// Holds an order-preserving, 1:1 mirror of the [`LogSink`] (one
/// [`LogEntryView`] per appended record, updated synchronously within the
/// sink's notification pass) and the console's two commands: copying the
/// log to the clipboard and opening a pre-filled issue on the tracker.
///
/// Both commands are single-shot and stateless between calls. Failures
/// from the host surfaces are returned as
/// [`ConsoleError`](crate::ConsoleError); the shipped policy is for the
/// caller to log them and move on.
pub struct ConsoleModel {
    mirror: Arc<Mirror>,
    clipboard: Arc<dyn Clipboard>,
    dialogs: Arc<dyn DialogService>,
    browser: Arc<dyn BrowserOpener>,
    build_info: BuildInfo,
}

impl ConsoleModel {
    /// Attaches a new console model to the sink.
    ///
    /// Entries appended before construction are picked up; entries appended
    /// afterwards arrive through the observer subscription.
    pub fn new(
        sink: &LogSink,
        clipboard: Arc<dyn Clipboard>,
        dialogs: Arc<dyn DialogService>,
        browser: Arc<dyn BrowserOpener>,
        build_info: BuildInfo,
    ) -> Self {
        let mirror = Arc::new(Mirror {
            entries: Mutex::new(Vec::new()),
        });
        let existing = sink.attach(mirror.clone());

        // Records appended between attach and this point have already been
        // delivered to the tail; the seed belongs in front of them.
        let seed: Vec<LogEntryView> = existing.iter().map(LogEntryView::new).collect();
        mirror.entries.lock().unwrap().splice(0..0, seed);

        Self {
            mirror,
            clipboard,
            dialogs,
            browser,
            build_info,
        }
    }

    /// Current console entries, in append order.
    #[must_use]
    pub fn messages(&self) -> Vec<LogEntryView> {
        self.mirror.entries.lock().unwrap().clone()
    }

    fn joined(entries: &[LogEntryView]) -> String {
        entries
            .iter()
            .map(LogEntryView::detailed_text)
            .collect::<Vec<_>>()
            .join(LINE_SEPARATOR)
    }

    /// Copies the whole log to the system clipboard.
    pub fn copy_log(&self) -> ConsoleResult<()> {
        self.copy_log_selection(&self.messages())
    }

    /// Copies the given entries to the clipboard, in the given order.
    ///
    /// An empty selection is a no-op: no clipboard write, no notification.
    pub fn copy_log_selection(&self, entries: &[LogEntryView]) -> ConsoleResult<()> {
        if entries.is_empty() {
            return Ok(());
        }
        self.clipboard.set_contents(&Self::joined(entries))?;
        debug!("copied {} log entries to clipboard", entries.len());
        self.dialogs.notify("Log copied to clipboard.");
        Ok(())
    }

    /// Opens a pre-filled issue on the tracker and copies the log details
    /// to the clipboard.
    ///
    /// If the browser launch fails, every remaining side effect is skipped
    /// and the error is returned. Once the launch succeeded there is no
    /// cancellation: notification, dialog, and the clipboard write (which
    /// overwrites whatever [`copy_log`](Self::copy_log) last placed there)
    /// all proceed.
    pub fn report_issue(&self) -> ConsoleResult<()> {
        let report = IssueReport::new(&self.build_info, Utc::now());
        self.browser.open_url(report.url())?;
        debug!("opened issue tracker at {}", report.url());

        self.dialogs.notify("Issue on GitHub successfully reported.");
        self.dialogs.show_information(
            "Issue report successful",
            "Your issue was reported in your browser.\n\
             The log and exception information was copied to your clipboard. \
             Please paste this information (with Ctrl+V) in the issue description.",
        );

        self.clipboard
            .set_contents(&details_block(&Self::joined(&self.messages())))?;
        Ok(())
    }
}
