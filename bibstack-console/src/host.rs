//! Surfaces provided by the host environment.
//!
//! The console model talks to the platform only through these seams; the
//! GUI shell supplies the production implementations.

use crate::ConsoleResult;

/// Write access to the system clipboard.
pub trait Clipboard: Send + Sync {
    /// Replaces the clipboard contents with plain UTF-8 text.
    fn set_contents(&self, text: &str) -> ConsoleResult<()>;
}

/// Status notifications and modal dialogs.
pub trait DialogService: Send + Sync {
    /// Shows a transient, non-blocking status notification.
    fn notify(&self, message: &str);

    /// Shows a modal information dialog and waits for dismissal.
    fn show_information(&self, title: &str, content: &str);
}

/// Opens URLs in the user's default browser.
pub trait BrowserOpener: Send + Sync {
    /// Hands the URL to the host; blocks until the launch call returns.
    fn open_url(&self, url: &str) -> ConsoleResult<()>;
}
