//! Line command parsing.
//!
//! Splits a raw input line into a keyword and its payload and extracts the
//! structured fields each command needs. Everything here is a pure text
//! transformation; nothing touches the task list.

use crate::error::TasklineError;

/// A fully parsed command line, ready for dispatch.
///
/// Date and time-range fields are carried as raw text; the task constructors
/// own their interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Bye,
    List,
    Mark(usize),
    Unmark(usize),
    Todo { name: String },
    Deadline { name: String, due_text: String },
    Event { name: String, date_time_text: String },
    Priority { index: usize, level_text: String },
}

/// Parse one raw input line into a [`Command`].
///
/// Keywords are matched literally and case-sensitively.
///
/// # Errors
///
/// Returns `UnrecognizedCommand` for an unknown keyword, or whatever field
/// extraction error the matched command produces.
pub fn parse_line(raw: &str) -> Result<Command, TasklineError> {
    let (keyword, remainder) = split_command(raw);
    match keyword {
        "bye" => Ok(Command::Bye),
        "list" => Ok(Command::List),
        "mark" => Ok(Command::Mark(parse_index(remainder)?)),
        "unmark" => Ok(Command::Unmark(parse_index(remainder)?)),
        "todo" => {
            let name = remainder.trim();
            if name.is_empty() {
                return Err(TasklineError::MissingArgument(
                    "the description of a todo cannot be empty".to_string(),
                ));
            }
            Ok(Command::Todo {
                name: name.to_string(),
            })
        }
        "deadline" => {
            let (name, due_text) = parse_deadline(remainder)?;
            require_name(&name, "a deadline")?;
            Ok(Command::Deadline { name, due_text })
        }
        "event" => {
            let (name, date_time_text) = parse_event(remainder)?;
            require_name(&name, "an event")?;
            Ok(Command::Event {
                name,
                date_time_text,
            })
        }
        "priority" => Ok(Command::Priority {
            index: parse_index(remainder)?,
            level_text: parse_priority_arg(remainder)?.to_string(),
        }),
        _ => Err(TasklineError::UnrecognizedCommand),
    }
}

/// Split a raw line on its first space into `(keyword, remainder)`.
///
/// A line with no space yields an empty remainder.
#[must_use]
pub fn split_command(raw: &str) -> (&str, &str) {
    raw.split_once(' ').unwrap_or((raw, ""))
}

/// Parse the first whitespace token of `remainder` as a one-based task number
/// and convert it to a zero-based index.
///
/// # Errors
///
/// Returns `InvalidArgument` if the token is missing, non-numeric or zero.
pub fn parse_index(remainder: &str) -> Result<usize, TasklineError> {
    let token = remainder.split_whitespace().next().ok_or_else(|| {
        TasklineError::InvalidArgument("a task number is required".to_string())
    })?;
    let number: usize = token.parse().map_err(|_| {
        TasklineError::InvalidArgument(format!("`{token}` is not a task number"))
    })?;
    if number == 0 {
        return Err(TasklineError::InvalidArgument(
            "task numbers start at 1".to_string(),
        ));
    }
    Ok(number - 1)
}

/// Split a deadline payload into `(name, due_date_text)` around `/by`.
///
/// # Errors
///
/// Returns `MissingDelimiter` if `/by` is absent and `MissingArgument` if
/// nothing follows it.
pub fn parse_deadline(remainder: &str) -> Result<(String, String), TasklineError> {
    split_on_delimiter(remainder, "/by")
}

/// Split an event payload into `(name, date_time_text)` around `/at`.
///
/// The date/time payload is left whole; the event constructor splits it into
/// date and time range.
///
/// # Errors
///
/// Returns `MissingDelimiter` if `/at` is absent and `MissingArgument` if
/// nothing follows it.
pub fn parse_event(remainder: &str) -> Result<(String, String), TasklineError> {
    split_on_delimiter(remainder, "/at")
}

/// Return the second whitespace token of `remainder` (the priority level).
///
/// # Errors
///
/// Returns `MissingArgument` if fewer than two tokens exist.
pub fn parse_priority_arg(remainder: &str) -> Result<&str, TasklineError> {
    remainder.split_whitespace().nth(1).ok_or_else(|| {
        TasklineError::MissingArgument(
            "a priority level is required (none, low, medium or high)".to_string(),
        )
    })
}

// First-occurrence search: a delimiter token inside the task name itself
// truncates the name there. Known limitation of the command format.
fn split_on_delimiter(
    remainder: &str,
    delimiter: &'static str,
) -> Result<(String, String), TasklineError> {
    let at = remainder
        .find(delimiter)
        .ok_or(TasklineError::MissingDelimiter(delimiter))?;
    let before = &remainder[..at];
    let name = before.strip_suffix(' ').unwrap_or(before);
    // The payload starts just past the delimiter and its trailing space.
    // `get` keeps a malformed char boundary from panicking.
    let payload = remainder
        .get(at + delimiter.len() + 1..)
        .filter(|rest| !rest.is_empty())
        .ok_or_else(|| {
            TasklineError::MissingArgument(format!("nothing follows `{delimiter}`"))
        })?;
    Ok((name.to_string(), payload.to_string()))
}

fn require_name(name: &str, what: &str) -> Result<(), TasklineError> {
    if name.trim().is_empty() {
        return Err(TasklineError::MissingArgument(format!(
            "the description of {what} cannot be empty"
        )));
    }
    Ok(())
}
