use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::store::StoreError;
use crate::tui::app::App;

use super::typed_char;

pub(super) fn handle_form(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Up => app.form.focus = app.form.focus.prev(),
        KeyCode::Down => app.form.focus = app.form.focus.next(),
        KeyCode::Left => app.form.cycle_category(app.store.categories(), false),
        KeyCode::Right => app.form.cycle_category(app.store.categories(), true),
        KeyCode::Backspace => app.form.pop_char(),
        KeyCode::Enter => {
            // Rejected drafts stay in the form untouched
            app.form.submit(&mut app.store)?;
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                app.form.push_char(c);
            }
        }
    }
    Ok(())
}
