use std::fmt::Write;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::TasklineError;

/// Priority levels for tasks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// No priority set.
    #[default]
    None,
    /// Low priority.
    Low,
    /// Medium priority.
    Medium,
    /// High priority.
    High,
}

impl Priority {
    /// Parse a priority level from user input (case-insensitive).
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if the text is not a known level.
    pub fn parse(text: &str) -> Result<Self, TasklineError> {
        match text.to_lowercase().as_str() {
            "none" => Ok(Self::None),
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TasklineError::InvalidArgument(format!(
                "`{text}` is not a priority level (try none, low, medium or high)"
            ))),
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::None => "none",
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        })
    }
}

/// Variant-specific task data. The discriminant doubles as the display tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase", rename_all_fields = "camelCase")]
pub enum TaskKind {
    /// A plain todo with no date attached.
    Todo,
    /// A task due by a calendar date.
    Deadline { due: NaiveDate },
    /// A task happening on a calendar date within a free-text time range.
    Event { date: NaiveDate, time_range: String },
}

/// A unit of work tracked by the session.
///
/// The variant is fixed at construction; only the done flag and the priority
/// change afterwards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub name: String,
    pub done: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(flatten)]
    pub kind: TaskKind,
}

impl Task {
    /// Create a todo.
    pub fn todo(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            done: false,
            priority: Priority::None,
            kind: TaskKind::Todo,
        }
    }

    /// Create a deadline from the raw due-date text.
    ///
    /// # Errors
    ///
    /// Returns `DateParse` if the text is not a `YYYY-MM-DD` date.
    pub fn deadline(name: impl Into<String>, due_text: &str) -> Result<Self, TasklineError> {
        Ok(Self {
            name: name.into(),
            done: false,
            priority: Priority::None,
            kind: TaskKind::Deadline {
                due: parse_date(due_text)?,
            },
        })
    }

    /// Create an event from the raw `<date> <range>` payload.
    ///
    /// The payload is split on its first space here, not in the command
    /// parser.
    ///
    /// # Errors
    ///
    /// Returns `MissingArgument` if the time range is absent and `DateParse`
    /// if the date part is not a `YYYY-MM-DD` date.
    pub fn event(name: impl Into<String>, date_time_text: &str) -> Result<Self, TasklineError> {
        let (date_text, time_range) = date_time_text
            .split_once(' ')
            .filter(|(_, range)| !range.trim().is_empty())
            .ok_or_else(|| {
                TasklineError::MissingArgument(
                    "an event needs both a date and a time range".to_string(),
                )
            })?;
        Ok(Self {
            name: name.into(),
            done: false,
            priority: Priority::None,
            kind: TaskKind::Event {
                date: parse_date(date_text)?,
                time_range: time_range.to_string(),
            },
        })
    }

    /// The one-letter tag identifying the variant in rendered output.
    #[must_use]
    pub const fn type_tag(&self) -> char {
        match self.kind {
            TaskKind::Todo => 'T',
            TaskKind::Deadline { .. } => 'D',
            TaskKind::Event { .. } => 'E',
        }
    }

    /// Compact `[tag][X| ] name` form used in mark confirmations.
    #[must_use]
    pub fn compact(&self) -> String {
        format!(
            "[{}][{}] {}",
            self.type_tag(),
            if self.done { 'X' } else { ' ' },
            self.name
        )
    }

    /// Canonical one-line textual form, including variant trailing data.
    #[must_use]
    pub fn render(&self) -> String {
        let mut line = self.compact();
        match &self.kind {
            TaskKind::Todo => {}
            TaskKind::Deadline { due } => {
                let _ = write!(line, " (by: {})", format_date(*due));
            }
            TaskKind::Event { date, time_range } => {
                let _ = write!(line, " (at: {} {time_range})", format_date(*date));
            }
        }
        line
    }

    /// Set the done flag, returning the two-line confirmation text.
    pub fn set_done(&mut self, done: bool) -> String {
        self.done = done;
        let phrase = if done {
            " Nice! I've marked this task as done:"
        } else {
            " OK, I've marked this task as not done yet:"
        };
        format!("{phrase}\n   {}", self.compact())
    }
}

fn parse_date(text: &str) -> Result<NaiveDate, TasklineError> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d")
        .map_err(|_| TasklineError::DateParse(text.to_string()))
}

/// Human-readable date form used in rendered tasks, e.g. "Oct 15 2019".
fn format_date(date: NaiveDate) -> String {
    date.format("%b %d %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    // ==================== Priority Tests ====================

    #[test]
    fn test_priority_parse() {
        assert_eq!(Priority::parse("none").unwrap(), Priority::None);
        assert_eq!(Priority::parse("low").unwrap(), Priority::Low);
        assert_eq!(Priority::parse("medium").unwrap(), Priority::Medium);
        assert_eq!(Priority::parse("high").unwrap(), Priority::High);
    }

    #[test]
    fn test_priority_parse_is_case_insensitive() {
        assert_eq!(Priority::parse("HIGH").unwrap(), Priority::High);
        assert_eq!(Priority::parse("Medium").unwrap(), Priority::Medium);
    }

    #[test]
    fn test_priority_parse_unknown_level() {
        let err = Priority::parse("urgent").unwrap_err();
        assert!(matches!(err, TasklineError::InvalidArgument(_)));
    }

    #[test]
    fn test_priority_display() {
        assert_eq!(Priority::None.to_string(), "none");
        assert_eq!(Priority::High.to_string(), "high");
    }

    #[test]
    fn test_priority_defaults_to_none() {
        assert_eq!(Task::todo("read book").priority, Priority::None);
    }

    // ==================== Construction Tests ====================

    #[test]
    fn test_todo_starts_not_done() {
        let task = Task::todo("read book");
        assert!(!task.done);
        assert_eq!(task.name, "read book");
        assert_eq!(task.type_tag(), 'T');
    }

    #[test]
    fn test_deadline_parses_due_date() {
        let task = Task::deadline("submit report", "2019-10-15").unwrap();
        assert_eq!(task.type_tag(), 'D');
        assert_eq!(
            task.kind,
            TaskKind::Deadline {
                due: NaiveDate::from_ymd_opt(2019, 10, 15).unwrap()
            }
        );
    }

    #[test]
    fn test_deadline_rejects_bad_date() {
        let err = Task::deadline("submit report", "next tuesday").unwrap_err();
        assert!(matches!(err, TasklineError::DateParse(_)));
    }

    #[test]
    fn test_event_splits_date_from_time_range() {
        let task = Task::event("exam", "2019-10-15 1400-1600").unwrap();
        assert_eq!(task.type_tag(), 'E');
        assert_eq!(
            task.kind,
            TaskKind::Event {
                date: NaiveDate::from_ymd_opt(2019, 10, 15).unwrap(),
                time_range: "1400-1600".to_string(),
            }
        );
    }

    #[test]
    fn test_event_requires_time_range() {
        let err = Task::event("exam", "2019-10-15").unwrap_err();
        assert!(matches!(err, TasklineError::MissingArgument(_)));
    }

    #[test]
    fn test_event_rejects_bad_date() {
        let err = Task::event("exam", "tuesday 2pm-4pm").unwrap_err();
        assert!(matches!(err, TasklineError::DateParse(_)));
    }

    // ==================== Rendering Tests ====================

    #[test]
    fn test_render_marked_todo_exactly() {
        let mut task = Task::todo("read book");
        task.set_done(true);
        assert_eq!(task.render(), "[T][X] read book");
    }

    #[test]
    fn test_render_unmarked_todo() {
        assert_eq!(Task::todo("read book").render(), "[T][ ] read book");
    }

    #[test]
    fn test_render_deadline_formats_date() {
        let task = Task::deadline("submit report", "2019-10-15").unwrap();
        assert_eq!(task.render(), "[D][ ] submit report (by: Oct 15 2019)");
    }

    #[test]
    fn test_render_event_keeps_time_range_verbatim() {
        let task = Task::event("exam", "2019-10-15 1400-1600").unwrap();
        assert_eq!(task.render(), "[E][ ] exam (at: Oct 15 2019 1400-1600)");
    }

    #[test]
    fn test_compact_omits_trailing_data() {
        let task = Task::event("exam", "2019-10-15 1400-1600").unwrap();
        assert_eq!(task.compact(), "[E][ ] exam");
    }

    // ==================== Done Flag Tests ====================

    #[test]
    fn test_set_done_confirmation_phrases() {
        let mut task = Task::todo("read book");
        let done = task.set_done(true);
        assert_eq!(done, " Nice! I've marked this task as done:\n   [T][X] read book");
        let undone = task.set_done(false);
        assert_eq!(
            undone,
            " OK, I've marked this task as not done yet:\n   [T][ ] read book"
        );
    }

    #[test]
    fn test_mark_unmark_round_trip_restores_render() {
        let mut task = Task::deadline("submit report", "2019-10-15").unwrap();
        let before = task.render();
        task.set_done(true);
        task.set_done(false);
        assert_eq!(task.render(), before);
    }

    // ==================== Equality Tests ====================

    #[test]
    fn test_equality_considers_done_state() {
        let a = Task::todo("read book");
        let mut b = Task::todo("read book");
        assert_eq!(a, b);
        b.set_done(true);
        assert_ne!(a, b);
    }

    #[test]
    fn test_equality_considers_variant_fields() {
        let a = Task::deadline("report", "2019-10-15").unwrap();
        let b = Task::deadline("report", "2019-10-16").unwrap();
        assert_ne!(a, b);
    }

    // ==================== Serialization Tests ====================

    #[test]
    fn test_task_deserialize() {
        let json = r#"{
            "name": "exam",
            "done": false,
            "type": "event",
            "date": "2019-10-15",
            "timeRange": "1400-1600"
        }"#;

        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task, Task::event("exam", "2019-10-15 1400-1600").unwrap());
        assert_eq!(task.priority, Priority::None);
    }

    #[test]
    fn test_task_serialize_round_trip() {
        let task = Task::deadline("submit report", "2019-10-15").unwrap();
        let json = serde_json::to_string(&task).unwrap();
        let back: Task = serde_json::from_str(&json).unwrap();
        assert_eq!(task, back);
    }
}
