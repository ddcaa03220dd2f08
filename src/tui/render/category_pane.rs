use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::helpers::{cursor_span, pane_block};

/// Render the category manager: existing categories plus the new-name input
pub fn render_category_pane(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Categories;
    let block = pane_block("Categories", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    let width = inner.width as usize;
    let list_height = chunks[0].height as usize;
    let selected = app.categories.selected;
    // Keep the selected row on screen
    let skip = (selected + 1).saturating_sub(list_height);

    let lines: Vec<Line> = app
        .store
        .categories()
        .iter()
        .enumerate()
        .skip(skip)
        .take(list_height)
        .map(|(i, name)| {
            let is_cursor = focused && i == selected;
            let marker = if is_cursor { "> " } else { "  " };
            let text = unicode::fit_to_width(&format!("{}{}", marker, name), width);
            let mut style = Style::default().fg(app.theme.text);
            if is_cursor {
                style = style
                    .bg(app.theme.selection_bg)
                    .fg(app.theme.text_bright)
                    .add_modifier(Modifier::BOLD);
            }
            Line::from(Span::styled(text, style))
        })
        .collect();
    frame.render_widget(Paragraph::new(lines), chunks[0]);

    let mut input = vec![
        Span::styled("+ ", Style::default().fg(app.theme.dim)),
        Span::styled(
            unicode::truncate_to_width(&app.categories.input, width.saturating_sub(3)),
            Style::default().fg(app.theme.text_bright),
        ),
    ];
    if focused {
        input.push(cursor_span(&app.theme));
    }
    frame.render_widget(Paragraph::new(Line::from(input)), chunks[1]);
}
