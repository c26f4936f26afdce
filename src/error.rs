//! Error types for taskline.

use thiserror::Error;

/// All errors taskline can produce.
///
/// Parse and dispatch failures are recoverable: the session reports them and
/// reads the next line, leaving the task list untouched. Only I/O failures on
/// the input or output stream abort the loop.
#[derive(Debug, Error)]
pub enum TasklineError {
    /// The first word of the line is not in the command vocabulary.
    #[error("I'm sorry, but I don't know what that means :-(")]
    UnrecognizedCommand,

    /// A required token (task description, delimiter payload, priority level)
    /// is absent.
    #[error("{0}")]
    MissingArgument(String),

    /// `/by` or `/at` was not found where the command requires it.
    #[error("the `{0}` delimiter is missing")]
    MissingDelimiter(&'static str),

    /// An index token is not a positive integer, or is out of range.
    #[error("{0}")]
    InvalidArgument(String),

    /// A date field does not match the expected `YYYY-MM-DD` format.
    #[error("I can't read `{0}` as a date (expected YYYY-MM-DD)")]
    DateParse(String),

    /// Configuration file problems.
    #[error("config error: {0}")]
    Config(String),

    /// Underlying I/O failure.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
