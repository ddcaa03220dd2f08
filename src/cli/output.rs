use crate::model::category::Filter;
use crate::model::task::Task;

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

/// Completion mark shown in front of a task
pub fn completion_mark(task: &Task) -> &'static str {
    if task.is_completed { "[x]" } else { "[ ]" }
}

/// Format a single task as a one-line summary
pub fn format_task_line(task: &Task) -> String {
    format!(
        "{} {} {} ({}, due {})",
        completion_mark(task),
        task.short_id(),
        task.task,
        task.category,
        task.due_date.format("%Y-%m-%d"),
    )
}

/// Format a task listing, with a placeholder line when nothing matches
pub fn format_task_listing(tasks: &[&Task]) -> Vec<String> {
    if tasks.is_empty() {
        return vec!["No tasks to show.".to_string()];
    }
    tasks.iter().map(|t| format_task_line(t)).collect()
}

/// Summary printed after a category deletion
pub fn format_category_deleted(name: &str, reassigned: usize, fallback: &str) -> String {
    match reassigned {
        0 => format!("deleted category {}", name),
        1 => format!("deleted category {}; 1 task moved to {}", name, fallback),
        n => format!("deleted category {}; {} tasks moved to {}", name, n, fallback),
    }
}

/// Labels of the filter choices, "all" first
pub fn filter_labels(options: &[Filter]) -> Vec<String> {
    options.iter().map(|f| f.label().to_string()).collect()
}
