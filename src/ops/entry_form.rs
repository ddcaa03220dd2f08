use chrono::NaiveDate;

use crate::model::task::{Task, TaskDraft};
use crate::ops::store::{StoreError, TaskStore};
use crate::util::unicode;

/// Date format accepted in the due date field
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Which input of the form has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormField {
    #[default]
    Task,
    Category,
    DueDate,
}

impl FormField {
    pub fn next(self) -> Self {
        match self {
            FormField::Task => FormField::Category,
            FormField::Category => FormField::DueDate,
            FormField::DueDate => FormField::Task,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FormField::Task => FormField::DueDate,
            FormField::Category => FormField::Task,
            FormField::DueDate => FormField::Category,
        }
    }
}

/// Why a submission was refused. The form keeps its input in every case.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Rejection {
    #[error("task name is empty")]
    BlankTask,
    #[error("due date is empty")]
    MissingDueDate,
    #[error("no category selected (add a category first)")]
    MissingCategory,
    #[error("unknown category '{0}'")]
    UnknownCategory(String),
    #[error("due date '{0}' is not a YYYY-MM-DD date")]
    InvalidDueDate(String),
}

/// Result of a submit attempt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Added(Task),
    Rejected(Rejection),
}

/// Draft state of the task entry form
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskForm {
    pub task: String,
    /// Selected category, defaulted to the first available one
    pub category: String,
    /// Raw due date text
    pub due_date: String,
    pub focus: FormField,
}

impl TaskForm {
    pub fn new(categories: &[String]) -> Self {
        TaskForm {
            category: first_category(categories),
            ..Default::default()
        }
    }

    /// Check the draft against the current category list.
    ///
    /// The task name only has to be non-blank; it is stored as typed.
    pub fn validate(&self, categories: &[String]) -> Result<TaskDraft, Rejection> {
        if self.task.trim().is_empty() {
            return Err(Rejection::BlankTask);
        }
        if self.due_date.is_empty() {
            return Err(Rejection::MissingDueDate);
        }
        if self.category.is_empty() {
            return Err(Rejection::MissingCategory);
        }
        if !categories.iter().any(|c| c == &self.category) {
            return Err(Rejection::UnknownCategory(self.category.clone()));
        }
        let due_date = NaiveDate::parse_from_str(self.due_date.trim(), DUE_DATE_FORMAT)
            .map_err(|_| Rejection::InvalidDueDate(self.due_date.clone()))?;
        Ok(TaskDraft::new(self.task.clone(), self.category.clone(), due_date))
    }

    /// Validate and hand the draft to the store. On success the name and due
    /// date are cleared and the category returns to the first available one.
    pub fn submit(&mut self, store: &mut TaskStore) -> Result<Submission, StoreError> {
        let draft = match self.validate(store.categories()) {
            Ok(draft) => draft,
            Err(rejection) => {
                log::debug!("task form rejected: {}", rejection);
                return Ok(Submission::Rejected(rejection));
            }
        };
        let task = store.add_task(draft)?;
        self.reset(store.categories());
        Ok(Submission::Added(task))
    }

    pub fn reset(&mut self, categories: &[String]) {
        self.task.clear();
        self.due_date.clear();
        self.category = first_category(categories);
    }

    /// Re-default the category when the selected one disappeared or none was
    /// available before.
    pub fn sync_categories(&mut self, categories: &[String]) {
        if !categories.iter().any(|c| c == &self.category) {
            self.category = first_category(categories);
        }
    }

    /// Step the category selector through the available categories
    pub fn cycle_category(&mut self, categories: &[String], forward: bool) {
        if categories.is_empty() {
            self.category.clear();
            return;
        }
        let len = categories.len();
        let next = match categories.iter().position(|c| c == &self.category) {
            Some(i) if forward => (i + 1) % len,
            Some(i) => (i + len - 1) % len,
            None => 0,
        };
        self.category = categories[next].clone();
    }

    /// Type into the focused text field. The category selector ignores typing.
    pub fn push_char(&mut self, c: char) {
        match self.focus {
            FormField::Task => self.task.push(c),
            FormField::DueDate => self.due_date.push(c),
            FormField::Category => {}
        }
    }

    /// Erase the last grapheme of the focused text field
    pub fn pop_char(&mut self) {
        match self.focus {
            FormField::Task => unicode::pop_grapheme(&mut self.task),
            FormField::DueDate => unicode::pop_grapheme(&mut self.due_date),
            FormField::Category => {}
        }
    }
}

fn first_category(categories: &[String]) -> String {
    categories.first().cloned().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::io::storage::{CATEGORIES_KEY, MemoryStore};
    use crate::model::config::CategoryConfig;

    fn store_with(categories: &[&str]) -> TaskStore {
        let json = serde_json::to_string(categories).unwrap();
        let storage = MemoryStore::new().with_slot(CATEGORIES_KEY, &json);
        TaskStore::load(Box::new(storage), &CategoryConfig::default()).unwrap()
    }

    fn filled(store: &TaskStore, task: &str, category: &str, due: &str) -> TaskForm {
        let mut form = TaskForm::new(store.categories());
        form.task = task.into();
        form.category = category.into();
        form.due_date = due.into();
        form
    }

    #[test]
    fn new_defaults_to_first_category() {
        let store = store_with(&["work", "personal"]);
        let form = TaskForm::new(store.categories());
        assert_eq!(form.category, "work");
        assert!(form.task.is_empty());
        assert!(form.due_date.is_empty());
    }

    #[test]
    fn submit_adds_and_resets() {
        let mut store = store_with(&["work", "personal"]);
        let mut form = filled(&store, "Buy milk", "personal", "2024-01-01");

        let Submission::Added(task) = form.submit(&mut store).unwrap() else {
            panic!("expected the task to be added");
        };
        assert_eq!(task.task, "Buy milk");
        assert_eq!(task.category, "personal");
        assert_eq!(task.due_date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert!(!task.is_completed);
        assert_eq!(store.tasks().len(), 1);

        assert!(form.task.is_empty());
        assert!(form.due_date.is_empty());
        assert_eq!(form.category, "work");
    }

    #[test]
    fn task_name_is_stored_untrimmed() {
        let mut store = store_with(&["work"]);
        let mut form = filled(&store, "  padded  ", "work", "2024-01-01");
        form.submit(&mut store).unwrap();
        assert_eq!(store.tasks()[0].task, "  padded  ");
    }

    #[test]
    fn whitespace_task_is_rejected_and_kept() {
        let mut store = store_with(&["work"]);
        let mut form = filled(&store, "  ", "work", "2024-01-01");
        let before = form.clone();

        assert_eq!(
            form.submit(&mut store).unwrap(),
            Submission::Rejected(Rejection::BlankTask)
        );
        assert!(store.tasks().is_empty());
        assert_eq!(form, before);
    }

    #[test]
    fn missing_due_date_is_rejected() {
        let mut store = store_with(&["work"]);
        let mut form = filled(&store, "a", "work", "");
        assert_eq!(
            form.submit(&mut store).unwrap(),
            Submission::Rejected(Rejection::MissingDueDate)
        );
        assert!(store.tasks().is_empty());
    }

    #[test]
    fn bad_due_date_is_rejected() {
        let mut store = store_with(&["work"]);
        let mut form = filled(&store, "a", "work", "tomorrow");
        assert_eq!(
            form.submit(&mut store).unwrap(),
            Submission::Rejected(Rejection::InvalidDueDate("tomorrow".into()))
        );
    }

    #[test]
    fn no_categories_blocks_submission() {
        let mut store = store_with(&[]);
        let mut form = TaskForm::new(store.categories());
        form.task = "a".into();
        form.due_date = "2024-01-01".into();
        assert_eq!(
            form.submit(&mut store).unwrap(),
            Submission::Rejected(Rejection::MissingCategory)
        );

        store.add_category("work").unwrap();
        form.sync_categories(store.categories());
        assert_eq!(form.category, "work");
        assert!(matches!(
            form.submit(&mut store).unwrap(),
            Submission::Added(_)
        ));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let mut store = store_with(&["work"]);
        let mut form = filled(&store, "a", "ghost", "2024-01-01");
        assert_eq!(
            form.submit(&mut store).unwrap(),
            Submission::Rejected(Rejection::UnknownCategory("ghost".into()))
        );
    }

    #[test]
    fn sync_keeps_existing_selection() {
        let mut form = TaskForm::new(&["a".to_string(), "b".to_string()]);
        form.category = "b".into();
        form.sync_categories(&["a".to_string(), "b".to_string(), "c".to_string()]);
        assert_eq!(form.category, "b");
        form.sync_categories(&["a".to_string(), "c".to_string()]);
        assert_eq!(form.category, "a");
        form.sync_categories(&[]);
        assert_eq!(form.category, "");
    }

    #[test]
    fn cycle_category_wraps() {
        let cats = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let mut form = TaskForm::new(&cats);
        form.cycle_category(&cats, true);
        assert_eq!(form.category, "b");
        form.cycle_category(&cats, false);
        form.cycle_category(&cats, false);
        assert_eq!(form.category, "c");
        form.cycle_category(&cats, true);
        assert_eq!(form.category, "a");
    }

    #[test]
    fn typing_goes_to_focused_field() {
        let mut form = TaskForm::new(&["a".to_string()]);
        form.push_char('h');
        form.push_char('é');
        form.focus = FormField::Category;
        form.push_char('x');
        form.focus = FormField::DueDate;
        form.push_char('2');
        assert_eq!(form.task, "hé");
        assert_eq!(form.category, "a");
        assert_eq!(form.due_date, "2");

        form.focus = FormField::Task;
        form.pop_char();
        assert_eq!(form.task, "h");
    }

    #[test]
    fn field_focus_cycles() {
        assert_eq!(FormField::Task.next(), FormField::Category);
        assert_eq!(FormField::DueDate.next(), FormField::Task);
        assert_eq!(FormField::Task.prev(), FormField::DueDate);
    }
}
