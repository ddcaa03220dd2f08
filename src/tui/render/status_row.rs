use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};
use crate::util::unicode;

/// Key hints for the focused pane
fn hints(focus: Focus) -> &'static str {
    match focus {
        Focus::Categories => "type name  Enter add  ↑↓ select  Del delete  Tab next  Esc quit",
        Focus::Form => "↑↓ field  ←→ category  Enter add  Tab next  Esc quit",
        Focus::Filter => "←→ filter  Tab next  q quit",
        Focus::Tasks => "↑↓ move  Space toggle  d delete  Tab next  q quit",
    }
}

/// Render the status row (bottom of screen): last change on the left,
/// key hints on the right
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;

    let mut spans = Vec::new();
    let status = app.status.as_deref().unwrap_or_default();
    let status_width = unicode::display_width(status);
    if !status.is_empty() {
        spans.push(Span::styled(
            status.to_string(),
            Style::default().fg(app.theme.text_bright).bg(bg),
        ));
    }

    let hint = hints(app.focus);
    let hint_width = unicode::display_width(hint);
    if status_width + hint_width + 1 < width {
        let padding = width - status_width - hint_width;
        spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        spans.push(Span::styled(hint, Style::default().fg(app.theme.dim).bg(bg)));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
