//! Error types for the console crate.

use thiserror::Error;

/// Result type for console operations.
pub type ConsoleResult<T> = Result<T, ConsoleError>;

/// Failures the host environment can report back to the console model.
///
/// Both are recoverable; the shipped policy is to log them and move on,
/// but the caller makes that call.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConsoleError {
    /// The system clipboard rejected the write.
    #[error("clipboard write failed: {0}")]
    Clipboard(String),

    /// The host could not open the default browser (launch failure or a
    /// URL the platform refused).
    #[error("browser launch failed: {0}")]
    BrowserLaunch(String),
}
