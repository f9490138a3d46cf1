//! Page driver error type.

use thiserror::Error;

/// Failure talking to the gallery document.
#[derive(Debug, Error)]
pub enum PageError {
    /// Could not open a WebDriver session.
    #[error("webdriver session: {0}")]
    Session(#[from] fantoccini::error::NewSessionError),
    /// A WebDriver command failed (stale element, lost session, ...).
    #[error("webdriver command: {0}")]
    Command(#[from] fantoccini::error::CmdError),
    /// A configured CSS selector does not parse.
    #[error("invalid selector {selector:?}")]
    Selector { selector: String },
    /// The recorded page set is empty.
    #[error("no pages to replay")]
    NoPages,
}
