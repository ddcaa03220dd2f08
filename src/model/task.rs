use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single to-do item
///
/// Serialized with the field names `id`, `task`, `category`, `dueDate` and
/// `isCompleted`, which is the layout of the `todos` storage slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    /// Opaque unique id, assigned by the store
    pub id: String,
    /// Task description shown in the list
    pub task: String,
    /// Owning category name. Not re-validated after the category is deleted.
    pub category: String,
    /// Calendar due date (`YYYY-MM-DD` on disk)
    pub due_date: NaiveDate,
    pub is_completed: bool,
}

impl Task {
    /// Build a new, not yet completed task from a draft with a fresh v4 id.
    pub fn from_draft(draft: TaskDraft) -> Self {
        Task {
            id: Uuid::new_v4().to_string(),
            task: draft.task,
            category: draft.category,
            due_date: draft.due_date,
            is_completed: false,
        }
    }

    /// First eight characters of the id, enough to address a task from the CLI
    pub fn short_id(&self) -> &str {
        let end = self
            .id
            .char_indices()
            .nth(8)
            .map_or(self.id.len(), |(i, _)| i);
        &self.id[..end]
    }
}

/// The user-supplied part of a task: everything except id and completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskDraft {
    pub task: String,
    pub category: String,
    pub due_date: NaiveDate,
}

impl TaskDraft {
    pub fn new(task: impl Into<String>, category: impl Into<String>, due_date: NaiveDate) -> Self {
        TaskDraft {
            task: task.into(),
            category: category.into(),
            due_date,
        }
    }
}
