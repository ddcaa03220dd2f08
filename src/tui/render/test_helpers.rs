use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::io::storage::{CATEGORIES_KEY, MemoryStore, TASKS_KEY};
use crate::model::{CategoryConfig, Task, UiConfig};
use crate::ops::store::TaskStore;
use crate::tui::app::App;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// A stored task named `name` with a predictable id (`t0`, `t1`, ...)
pub fn task(index: usize, name: &str, category: &str) -> Task {
    Task {
        id: format!("t{}", index),
        task: name.to_string(),
        category: category.to_string(),
        due_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        is_completed: false,
    }
}

/// App over an in-memory store seeded with `categories` and `(name, category)` tasks
pub fn app_with(categories: &[&str], tasks: &[(&str, &str)]) -> App {
    let tasks: Vec<Task> = tasks
        .iter()
        .enumerate()
        .map(|(i, (name, category))| task(i, name, category))
        .collect();
    app_with_tasks(categories, &tasks)
}

pub fn app_with_tasks(categories: &[&str], tasks: &[Task]) -> App {
    let storage = MemoryStore::new()
        .with_slot(CATEGORIES_KEY, &serde_json::to_string(categories).unwrap())
        .with_slot(TASKS_KEY, &serde_json::to_string(tasks).unwrap());
    let store = TaskStore::load(Box::new(storage), &CategoryConfig::default()).unwrap();
    App::new(store, &UiConfig::default())
}

pub fn press(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::NONE)
}

pub fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
