use std::sync::mpsc;

use serde::de::DeserializeOwned;

use crate::io::storage::{CATEGORIES_KEY, KeyValueStore, StorageError, TASKS_KEY};
use crate::model::category::Filter;
use crate::model::config::CategoryConfig;
use crate::model::task::{Task, TaskDraft};
use crate::ops::filter;

/// Error type for store operations
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] StorageError),
    #[error("stored {slot} is not valid JSON: {source}")]
    Corrupt {
        slot: String,
        source: serde_json::Error,
    },
    #[error("could not serialize {slot}: {source}")]
    Serialize {
        slot: String,
        source: serde_json::Error,
    },
}

/// Error type for looking a task up by id or id prefix
#[derive(Debug, thiserror::Error)]
pub enum TaskLookupError {
    #[error("task not found: {0}")]
    NotFound(String),
    #[error("id prefix '{prefix}' matches {count} tasks")]
    Ambiguous { prefix: String, count: usize },
}

/// Sent to every subscriber after an effective mutation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreEvent {
    TaskAdded { id: String },
    TaskToggled { id: String, is_completed: bool },
    TaskDeleted { id: String },
    CategoryAdded { name: String },
    CategoryDeleted { name: String, reassigned: usize },
    FilterChanged(Filter),
}

/// Owner of the task list, the category list and the filter selection.
///
/// Everything else reads through `&TaskStore` and changes state only through
/// the mutating methods below. Each mutation updates memory first, then
/// writes the changed list(s) to storage, then notifies subscribers.
pub struct TaskStore {
    tasks: Vec<Task>,
    categories: Vec<String>,
    filter: Filter,
    fallback: String,
    storage: Box<dyn KeyValueStore>,
    subscribers: Vec<mpsc::Sender<StoreEvent>>,
}

impl TaskStore {
    /// Hydrate from storage. An absent or empty slot means "never written":
    /// no tasks, and the configured default categories.
    pub fn load(
        storage: Box<dyn KeyValueStore>,
        config: &CategoryConfig,
    ) -> Result<Self, StoreError> {
        let tasks: Vec<Task> = read_slot(storage.as_ref(), TASKS_KEY)?.unwrap_or_default();
        let categories = match read_slot::<Vec<String>>(storage.as_ref(), CATEGORIES_KEY)? {
            Some(categories) => categories,
            None => {
                log::info!("no stored categories, using {} defaults", config.defaults.len());
                config.defaults.clone()
            }
        };
        log::info!(
            "loaded {} tasks and {} categories",
            tasks.len(),
            categories.len()
        );

        Ok(TaskStore {
            tasks,
            categories,
            filter: Filter::All,
            fallback: config.fallback.clone(),
            storage,
            subscribers: Vec::new(),
        })
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    pub fn filter(&self) -> &Filter {
        &self.filter
    }

    pub fn fallback_category(&self) -> &str {
        &self.fallback
    }

    /// The backing storage, for reading slots back
    pub fn storage(&self) -> &dyn KeyValueStore {
        self.storage.as_ref()
    }

    pub fn find_task(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    /// Tasks passing the current filter, in list order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        filter::visible_tasks(&self.tasks, &self.filter)
    }

    /// `All` followed by every category
    pub fn filter_options(&self) -> Vec<Filter> {
        filter::filter_options(&self.categories)
    }

    /// Resolve a full id or a unique id prefix to the task's full id.
    pub fn resolve_id(&self, needle: &str) -> Result<&str, TaskLookupError> {
        if let Some(task) = self.find_task(needle) {
            return Ok(&task.id);
        }
        if needle.is_empty() {
            return Err(TaskLookupError::NotFound(needle.to_string()));
        }
        let matches: Vec<&Task> = self
            .tasks
            .iter()
            .filter(|t| t.id.starts_with(needle))
            .collect();
        match matches.as_slice() {
            [task] => Ok(&task.id),
            [] => Err(TaskLookupError::NotFound(needle.to_string())),
            many => Err(TaskLookupError::Ambiguous {
                prefix: needle.to_string(),
                count: many.len(),
            }),
        }
    }

    /// Register an observer. Every later mutation sends one or more events.
    pub fn subscribe(&mut self) -> mpsc::Receiver<StoreEvent> {
        let (tx, rx) = mpsc::channel();
        self.subscribers.push(tx);
        rx
    }

    // -----------------------------------------------------------------------
    // Tasks
    // -----------------------------------------------------------------------

    /// Append a new task. No validation happens here; that is the entry
    /// form's job.
    pub fn add_task(&mut self, draft: TaskDraft) -> Result<Task, StoreError> {
        let task = Task::from_draft(draft);
        self.tasks.push(task.clone());
        log::debug!("added task {} in {}", task.id, task.category);
        self.persist_tasks()?;
        self.notify(StoreEvent::TaskAdded {
            id: task.id.clone(),
        });
        Ok(task)
    }

    /// Flip completion. Returns false (and writes nothing) for an unknown id.
    pub fn toggle_complete(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(task) = self.tasks.iter_mut().find(|t| t.id == id) else {
            return Ok(false);
        };
        task.is_completed = !task.is_completed;
        let is_completed = task.is_completed;
        log::debug!("task {} completed={}", id, is_completed);
        self.persist_tasks()?;
        self.notify(StoreEvent::TaskToggled {
            id: id.to_string(),
            is_completed,
        });
        Ok(true)
    }

    /// Remove a task for good. Returns false for an unknown id.
    pub fn delete_task(&mut self, id: &str) -> Result<bool, StoreError> {
        let Some(pos) = self.tasks.iter().position(|t| t.id == id) else {
            return Ok(false);
        };
        self.tasks.remove(pos);
        log::debug!("deleted task {}", id);
        self.persist_tasks()?;
        self.notify(StoreEvent::TaskDeleted { id: id.to_string() });
        Ok(true)
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    /// Append a category. The name is trimmed; blank or already present
    /// (exact match) names are ignored and false is returned.
    pub fn add_category(&mut self, name: &str) -> Result<bool, StoreError> {
        let name = name.trim();
        if name.is_empty() || self.categories.iter().any(|c| c == name) {
            return Ok(false);
        }
        self.categories.push(name.to_string());
        log::debug!("added category {}", name);
        self.persist_categories()?;
        self.notify(StoreEvent::CategoryAdded {
            name: name.to_string(),
        });
        Ok(true)
    }

    /// Remove a category and move its tasks to the fallback category.
    ///
    /// The fallback is written even when it is not itself in the category
    /// list. A filter on the deleted category resets to `All`. Returns the
    /// number of reassigned tasks, or `None` if the category didn't exist.
    pub fn delete_category(&mut self, name: &str) -> Result<Option<usize>, StoreError> {
        let Some(pos) = self.categories.iter().position(|c| c == name) else {
            return Ok(None);
        };
        self.categories.remove(pos);

        let mut reassigned = 0;
        for task in self.tasks.iter_mut().filter(|t| t.category == name) {
            task.category = self.fallback.clone();
            reassigned += 1;
        }

        let filter_reset = self.filter.is_category(name);
        if filter_reset {
            self.filter = Filter::All;
        }

        log::debug!(
            "deleted category {}, {} tasks moved to {}",
            name,
            reassigned,
            self.fallback
        );
        self.persist_categories()?;
        self.persist_tasks()?;

        self.notify(StoreEvent::CategoryDeleted {
            name: name.to_string(),
            reassigned,
        });
        if filter_reset {
            self.notify(StoreEvent::FilterChanged(Filter::All));
        }
        Ok(Some(reassigned))
    }

    // -----------------------------------------------------------------------
    // Filter
    // -----------------------------------------------------------------------

    /// Change the filter selection. Not persisted.
    pub fn set_filter(&mut self, filter: Filter) {
        if self.filter == filter {
            return;
        }
        self.filter = filter.clone();
        self.notify(StoreEvent::FilterChanged(filter));
    }

    // -----------------------------------------------------------------------
    // Persistence + notification
    // -----------------------------------------------------------------------

    fn persist_tasks(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.tasks).map_err(|e| StoreError::Serialize {
            slot: TASKS_KEY.to_string(),
            source: e,
        })?;
        self.storage.save(TASKS_KEY, &json)?;
        Ok(())
    }

    fn persist_categories(&mut self) -> Result<(), StoreError> {
        let json = serde_json::to_string(&self.categories).map_err(|e| StoreError::Serialize {
            slot: CATEGORIES_KEY.to_string(),
            source: e,
        })?;
        self.storage.save(CATEGORIES_KEY, &json)?;
        Ok(())
    }

    fn notify(&mut self, event: StoreEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

/// Read and decode one slot. Absent and empty values both mean "never written".
fn read_slot<T: DeserializeOwned>(
    storage: &dyn KeyValueStore,
    key: &str,
) -> Result<Option<T>, StoreError> {
    let Some(raw) = storage.load(key)? else {
        return Ok(None);
    };
    if raw.is_empty() {
        return Ok(None);
    }
    serde_json::from_str(&raw).map(Some).map_err(|e| {
        log::error!("stored {} is not valid JSON: {}", key, e);
        StoreError::Corrupt {
            slot: key.to_string(),
            source: e,
        }
    })
}
