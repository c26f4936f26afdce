//! The ordered task list.

use crate::error::TasklineError;
use crate::task::types::{Priority, Task};

/// Insertion-ordered collection of tasks.
///
/// Indices are zero-based here; user-facing task numbers are one-based and
/// converted by the command parser before they reach this type. Mutation is
/// limited to appending, toggling the done flag and setting a priority; tasks
/// are never removed.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TaskList {
    tasks: Vec<Task>,
}

impl TaskList {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Append a task, returning the new count.
    pub fn add(&mut self, task: Task) -> usize {
        self.tasks.push(task);
        self.tasks.len()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Task> {
        self.tasks.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Task> {
        self.tasks.iter()
    }

    /// Toggle the done flag at `index`, returning the confirmation text.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index` is out of range; the list is left
    /// unchanged.
    pub fn set_done(&mut self, index: usize, done: bool) -> Result<String, TasklineError> {
        Ok(self.task_at_mut(index)?.set_done(done))
    }

    /// Set the priority at `index`, returning the task's compact form.
    ///
    /// # Errors
    ///
    /// Returns `InvalidArgument` if `index` is out of range; the list is left
    /// unchanged.
    pub fn set_priority(
        &mut self,
        index: usize,
        priority: Priority,
    ) -> Result<String, TasklineError> {
        let task = self.task_at_mut(index)?;
        task.priority = priority;
        Ok(task.compact())
    }

    fn task_at_mut(&mut self, index: usize) -> Result<&mut Task, TasklineError> {
        let count = self.tasks.len();
        self.tasks.get_mut(index).ok_or_else(|| {
            TasklineError::InvalidArgument(format!(
                "task {} doesn't exist (you have {count} tasks)",
                index + 1
            ))
        })
    }
}

impl<'a> IntoIterator for &'a TaskList {
    type Item = &'a Task;
    type IntoIter = std::slice::Iter<'a, Task>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
