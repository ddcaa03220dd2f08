pub mod category_pane;
pub mod filter_bar;
pub mod form_pane;
pub mod helpers;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use super::app::App;

/// Width of the category pane on the left
const CATEGORY_PANE_WIDTH: u16 = 28;

/// Main render function, dispatches to the pane renderers
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: title (1 row) | body | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(1),
            Constraint::Length(1),
        ])
        .split(area);

    let title = Paragraph::new(Line::from(Span::styled(
        app.title.as_str(),
        Style::default()
            .fg(app.theme.text_bright)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .style(bg_style);
    frame.render_widget(title, chunks[0]);

    // Body: categories on the left, form / filter / tasks stacked on the right
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(CATEGORY_PANE_WIDTH), Constraint::Min(1)])
        .split(chunks[1]);

    let right = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // three form rows + borders
            Constraint::Length(3), // filter selector + borders
            Constraint::Min(3),
        ])
        .split(body[1]);

    category_pane::render_category_pane(frame, app, body[0]);
    form_pane::render_form_pane(frame, app, right[0]);
    filter_bar::render_filter_bar(frame, app, right[1]);
    task_list::render_task_list(frame, app, right[2]);

    status_row::render_status_row(frame, app, chunks[2]);
}

#[cfg(test)]
mod tests {
    use super::test_helpers::*;
    use super::*;

    #[test]
    fn full_screen_shows_every_pane() {
        let mut app = app_with(&["work", "home"], &[("Write report", "work")]);
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));

        assert!(output.lines().next().unwrap().contains("My TODO List"));
        for heading in ["Categories", "New task", "Filter", "Tasks"] {
            assert!(output.contains(heading), "missing {heading}:\n{output}");
        }
        assert!(output.contains("Write report"));
    }

    #[test]
    fn custom_title() {
        let mut app = app_with(&["work"], &[]);
        app.title = "Chores".into();
        let output = render_to_string(TERM_W, TERM_H, |frame, _| render(frame, &mut app));
        assert!(output.lines().next().unwrap().contains("Chores"));
    }
}
