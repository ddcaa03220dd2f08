use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Focus};

use super::helpers::pane_block;

/// Render the filter selector: "all" followed by each category
pub fn render_filter_bar(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Filter;
    let block = pane_block("Filter", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let current = app.store.filter();
    let mut spans = Vec::new();
    for option in app.store.filter_options() {
        let style = if &option == current {
            Style::default()
                .fg(app.theme.background)
                .bg(app.theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(app.theme.text)
        };
        spans.push(Span::styled(format!(" {} ", option.label()), style));
        spans.push(Span::raw(" "));
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), inner);
}
