use std::io;
use std::sync::mpsc;
use std::time::Duration;

use crossterm::event::{self, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::{Task, UiConfig};
use crate::ops::category_ops::CategoryManager;
use crate::ops::entry_form::TaskForm;
use crate::ops::store::{StoreEvent, TaskStore};
use crate::session::Session;

use super::input;
use super::render;
use super::theme::Theme;

/// Which pane receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Categories,
    Form,
    Filter,
    Tasks,
}

impl Focus {
    pub fn next(self) -> Self {
        match self {
            Focus::Categories => Focus::Form,
            Focus::Form => Focus::Filter,
            Focus::Filter => Focus::Tasks,
            Focus::Tasks => Focus::Categories,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            Focus::Categories => Focus::Tasks,
            Focus::Form => Focus::Categories,
            Focus::Filter => Focus::Form,
            Focus::Tasks => Focus::Filter,
        }
    }
}

/// Main application state
pub struct App {
    pub store: TaskStore,
    /// Change notifications from the store, drained by `refresh`
    events: mpsc::Receiver<StoreEvent>,
    pub focus: Focus,
    pub form: TaskForm,
    pub categories: CategoryManager,
    /// Ids of the tasks passing the filter, re-derived on every store event
    pub visible: Vec<String>,
    /// Cursor into `visible`
    pub task_cursor: usize,
    /// First visible row of the task list
    pub task_scroll: usize,
    /// One-line summary of the last change, shown in the status row
    pub status: Option<String>,
    pub title: String,
    pub theme: Theme,
    pub should_quit: bool,
}

impl App {
    pub fn new(mut store: TaskStore, ui: &UiConfig) -> Self {
        let events = store.subscribe();
        let form = TaskForm::new(store.categories());
        let visible = visible_ids(&store);

        App {
            store,
            events,
            focus: Focus::Form,
            form,
            categories: CategoryManager::new(),
            visible,
            task_cursor: 0,
            task_scroll: 0,
            status: None,
            title: ui.title.clone(),
            theme: Theme::from_config(ui),
            should_quit: false,
        }
    }

    /// Apply pending store notifications: re-derive the visible list and
    /// bring cursors and the form's category default back in range.
    pub fn refresh(&mut self) {
        let events: Vec<StoreEvent> = self.events.try_iter().collect();
        if events.is_empty() {
            return;
        }
        for event in &events {
            if let Some(status) = self.describe(event) {
                self.status = Some(status);
            }
        }

        self.visible = visible_ids(&self.store);
        self.task_cursor = self.task_cursor.min(self.visible.len().saturating_sub(1));
        self.form.sync_categories(self.store.categories());
        self.categories.clamp(self.store.categories().len());
    }

    /// Tasks in the cached visible order
    pub fn visible_tasks(&self) -> Vec<&Task> {
        self.visible
            .iter()
            .filter_map(|id| self.store.find_task(id))
            .collect()
    }

    pub fn selected_task_id(&self) -> Option<&str> {
        self.visible.get(self.task_cursor).map(|s| s.as_str())
    }

    fn describe(&self, event: &StoreEvent) -> Option<String> {
        let task_name = |id: &str| {
            self.store
                .find_task(id)
                .map(|t| t.task.clone())
                .unwrap_or_default()
        };
        match event {
            StoreEvent::TaskAdded { id } => Some(format!("added \"{}\"", task_name(id))),
            StoreEvent::TaskToggled { id, is_completed } => Some(format!(
                "\"{}\" marked {}",
                task_name(id),
                if *is_completed { "done" } else { "not done" }
            )),
            StoreEvent::TaskDeleted { .. } => Some("task deleted".to_string()),
            StoreEvent::CategoryAdded { name } => Some(format!("added category {}", name)),
            StoreEvent::CategoryDeleted { name, reassigned } => Some(format!(
                "deleted category {} ({} moved to {})",
                name,
                reassigned,
                self.store.fallback_category()
            )),
            StoreEvent::FilterChanged(_) => None,
        }
    }
}

fn visible_ids(store: &TaskStore) -> Vec<String> {
    store.visible_tasks().iter().map(|t| t.id.clone()).collect()
}

/// Run the TUI application
pub fn run(session: &Session) -> Result<(), Box<dyn std::error::Error>> {
    let store = session.load_store()?;
    let mut app = App::new(store, &session.config.ui);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        if event::poll(Duration::from_millis(250))?
            && let Event::Key(key) = event::read()?
            && key.kind == KeyEventKind::Press
        {
            // A failed write ends the session: there is no other storage
            input::handle_key(app, key)?;
            app.refresh();
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn focus_cycles_both_ways() {
        let mut focus = Focus::Categories;
        for _ in 0..4 {
            focus = focus.next();
        }
        assert_eq!(focus, Focus::Categories);
        assert_eq!(Focus::Categories.prev(), Focus::Tasks);
        assert_eq!(Focus::Tasks.next(), Focus::Categories);
    }

    #[test]
    fn refresh_tracks_store_changes() {
        let mut app = app_with(&["work", "home"], &[("a", "work"), ("b", "home")]);
        assert_eq!(app.visible.len(), 2);

        app.store
            .set_filter(crate::model::Filter::Category("home".into()));
        // nothing re-derived until the notification is processed
        assert_eq!(app.visible.len(), 2);
        app.refresh();
        assert_eq!(app.visible_tasks()[0].task, "b");
    }

    #[test]
    fn refresh_clamps_cursor_after_delete() {
        let mut app = app_with(&["work"], &[("a", "work"), ("b", "work")]);
        app.task_cursor = 1;
        let id = app.selected_task_id().unwrap().to_string();
        app.store.delete_task(&id).unwrap();
        app.refresh();
        assert_eq!(app.task_cursor, 0);
        assert_eq!(app.status.as_deref(), Some("task deleted"));
    }

    #[test]
    fn refresh_redefaults_form_category() {
        let mut app = app_with(&["work", "home"], &[]);
        assert_eq!(app.form.category, "work");
        app.store.delete_category("work").unwrap();
        app.refresh();
        assert_eq!(app.form.category, "home");
        assert_eq!(
            app.status.as_deref(),
            Some("deleted category work (0 moved to その他)")
        );
    }
}
