//! Command dispatch over the task list.

use std::fmt::Write;

use crate::core::{parse_line, Command};
use crate::error::TasklineError;
use crate::task::{Priority, Task, TaskList};

/// One interactive session: the task list plus the dispatch logic over it.
///
/// There is a single awaiting-command state; `bye` is the only transition out
/// of it.
#[derive(Debug, Default)]
pub struct Session {
    tasks: TaskList,
}

/// The dispatcher's answer to one input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Body of a framed response block.
    Message(String),
    /// Final response block; the loop exits after printing it.
    Farewell(String),
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    /// Parse and execute one input line.
    ///
    /// A failed command never leaves the list half-mutated: tasks are fully
    /// constructed before they are appended, and index checks happen before
    /// any toggle.
    ///
    /// # Errors
    ///
    /// Returns the parse or validation error of the command; all of them are
    /// recoverable and the caller is expected to keep the loop running.
    pub fn handle_line(&mut self, line: &str) -> Result<Reply, TasklineError> {
        match parse_line(line)? {
            Command::Bye => Ok(Reply::Farewell(
                " Bye. Hope to see you again soon!".to_string(),
            )),
            Command::List => Ok(Reply::Message(self.list())),
            Command::Mark(index) => Ok(Reply::Message(self.tasks.set_done(index, true)?)),
            Command::Unmark(index) => Ok(Reply::Message(self.tasks.set_done(index, false)?)),
            Command::Todo { name } => Ok(Reply::Message(self.add(Task::todo(name)))),
            Command::Deadline { name, due_text } => {
                let task = Task::deadline(name, &due_text)?;
                Ok(Reply::Message(self.add(task)))
            }
            Command::Event {
                name,
                date_time_text,
            } => {
                let task = Task::event(name, &date_time_text)?;
                Ok(Reply::Message(self.add(task)))
            }
            Command::Priority { index, level_text } => {
                let priority = Priority::parse(&level_text)?;
                let compact = self.tasks.set_priority(index, priority)?;
                Ok(Reply::Message(format!(
                    " Noted. I've set this task to {priority} priority:\n   {compact}"
                )))
            }
        }
    }

    fn add(&mut self, task: Task) -> String {
        let rendered = task.render();
        let count = self.tasks.add(task);
        format!(
            " Got it. I've added this task:\n   {rendered}\n Now you have {count} tasks in the list."
        )
    }

    fn list(&self) -> String {
        let mut body = String::from(" Here are the tasks in your list:");
        for (position, task) in self.tasks.iter().enumerate() {
            let _ = write!(body, "\n {}.{}", position + 1, task.render());
        }
        body
    }
}
