mod categories;
mod form;
mod tasks;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::store::StoreError;

use super::app::{App, Focus};

use categories::handle_categories;
use form::handle_form;
use tasks::{handle_filter, handle_tasks};

/// Handle a key event for the focused pane.
///
/// Store errors are returned as-is; the caller decides whether the session
/// can continue.
pub fn handle_key(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return Ok(());
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return Ok(());
    }

    match key.code {
        KeyCode::Esc => {
            app.should_quit = true;
            return Ok(());
        }
        KeyCode::Tab => {
            app.focus = app.focus.next();
            return Ok(());
        }
        KeyCode::BackTab => {
            app.focus = app.focus.prev();
            return Ok(());
        }
        _ => {}
    }

    match app.focus {
        Focus::Categories => handle_categories(app, key),
        Focus::Form => handle_form(app, key),
        Focus::Filter => {
            handle_filter(app, key);
            Ok(())
        }
        Focus::Tasks => handle_tasks(app, key),
    }
}

/// Printable character carried by a key, if it should be typed into a field
fn typed_char(key: &KeyEvent) -> Option<char> {
    match key.code {
        KeyCode::Char(c)
            if !key
                .modifiers
                .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
        {
            Some(c)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn esc_and_ctrl_c_quit() {
        let mut app = app_with(&["work"], &[]);
        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert!(app.should_quit);

        let mut app = app_with(&["work"], &[]);
        handle_key(&mut app, ctrl('c')).unwrap();
        assert!(app.should_quit);
    }

    #[test]
    fn tab_cycles_focus() {
        let mut app = app_with(&["work"], &[]);
        assert_eq!(app.focus, Focus::Form);
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Filter);
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        assert_eq!(app.focus, Focus::Tasks);
        handle_key(&mut app, press(KeyCode::BackTab)).unwrap();
        assert_eq!(app.focus, Focus::Filter);
    }

    #[test]
    fn q_is_text_in_the_form() {
        let mut app = app_with(&["work"], &[]);
        handle_key(&mut app, press(KeyCode::Char('q'))).unwrap();
        assert!(!app.should_quit);
        assert_eq!(app.form.task, "q");
    }
}
