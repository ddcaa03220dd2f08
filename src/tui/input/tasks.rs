use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::filter::option_index;
use crate::ops::store::StoreError;
use crate::tui::app::App;

pub(super) fn handle_filter(app: &mut App, key: KeyEvent) {
    let options = app.store.filter_options();
    let current = option_index(&options, app.store.filter());
    let next = match key.code {
        KeyCode::Left | KeyCode::Char('h') => (current + options.len() - 1) % options.len(),
        KeyCode::Right | KeyCode::Char('l') => (current + 1) % options.len(),
        KeyCode::Char('q') => {
            app.should_quit = true;
            return;
        }
        _ => return,
    };
    app.task_cursor = 0;
    app.task_scroll = 0;
    app.store.set_filter(options[next].clone());
}

pub(super) fn handle_tasks(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Up | KeyCode::Char('k') => {
            app.task_cursor = app.task_cursor.saturating_sub(1);
        }
        KeyCode::Down | KeyCode::Char('j') => {
            if app.task_cursor + 1 < app.visible.len() {
                app.task_cursor += 1;
            }
        }
        KeyCode::Char(' ') | KeyCode::Enter => {
            if let Some(id) = app.selected_task_id().map(str::to_string) {
                app.store.toggle_complete(&id)?;
            }
        }
        KeyCode::Char('d') | KeyCode::Delete => {
            if let Some(id) = app.selected_task_id().map(str::to_string) {
                app.store.delete_task(&id)?;
            }
        }
        KeyCode::Char('q') => app.should_quit = true,
        _ => {}
    }
    Ok(())
}
