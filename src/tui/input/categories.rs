use crossterm::event::{KeyCode, KeyEvent};

use crate::ops::store::StoreError;
use crate::tui::app::App;

use super::typed_char;

pub(super) fn handle_categories(app: &mut App, key: KeyEvent) -> Result<(), StoreError> {
    match key.code {
        KeyCode::Up => app.categories.move_up(),
        KeyCode::Down => app.categories.move_down(app.store.categories().len()),
        KeyCode::Backspace => app.categories.pop_char(),
        KeyCode::Enter => {
            app.categories.submit(&mut app.store)?;
        }
        KeyCode::Delete => {
            app.categories.delete_selected(&mut app.store)?;
        }
        _ => {
            if let Some(c) = typed_char(&key) {
                app.categories.push_char(c);
            }
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn type_and_add() {
        let mut app = app_with(&["work"], &[]);
        for c in " gym ".chars() {
            handle_categories(&mut app, press(KeyCode::Char(c))).unwrap();
        }
        handle_categories(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.store.categories(), ["work", "gym"]);
        assert!(app.categories.input.is_empty());
    }

    #[test]
    fn duplicate_keeps_input() {
        let mut app = app_with(&["work"], &[]);
        app.categories.input = "work".into();
        handle_categories(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.store.categories(), ["work"]);
        assert_eq!(app.categories.input, "work");
    }

    #[test]
    fn delete_selected_reassigns_tasks() {
        let mut app = app_with(&["work", "home"], &[("a", "home")]);
        handle_categories(&mut app, press(KeyCode::Down)).unwrap();
        handle_categories(&mut app, press(KeyCode::Delete)).unwrap();
        assert_eq!(app.store.categories(), ["work"]);
        assert_eq!(app.store.tasks()[0].category, "その他");
        assert_eq!(app.categories.selected, 0);
    }
}
