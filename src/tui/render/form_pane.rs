use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::ops::entry_form::FormField;
use crate::tui::app::{App, Focus};

use super::helpers::{cursor_span, pane_block};

const LABEL_WIDTH: usize = 10;

/// Render the task entry form: name, category selector, due date
pub fn render_form_pane(frame: &mut Frame, app: &App, area: Rect) {
    let focused = app.focus == Focus::Form;
    let block = pane_block("New task", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let category = if app.form.category.is_empty() {
        "(none)".to_string()
    } else {
        format!("< {} >", app.form.category)
    };
    let due = if app.form.due_date.is_empty() && !(focused && app.form.focus == FormField::DueDate)
    {
        "YYYY-MM-DD".to_string()
    } else {
        app.form.due_date.clone()
    };

    let rows = [
        (FormField::Task, "Task", app.form.task.clone()),
        (FormField::Category, "Category", category),
        (FormField::DueDate, "Due", due),
    ];

    let lines: Vec<Line> = rows
        .into_iter()
        .map(|(field, label, value)| {
            let active = focused && app.form.focus == field;
            let label_style = if active {
                Style::default().fg(app.theme.highlight)
            } else {
                Style::default().fg(app.theme.dim)
            };
            let placeholder = field == FormField::DueDate && app.form.due_date.is_empty();
            let value_style = if placeholder {
                Style::default().fg(app.theme.dim)
            } else {
                Style::default().fg(app.theme.text_bright)
            };
            let mut spans = vec![
                Span::styled(format!("{:<width$}", label, width = LABEL_WIDTH), label_style),
                Span::styled(value, value_style),
            ];
            if active && field != FormField::Category {
                spans.push(cursor_span(&app.theme));
            }
            Line::from(spans)
        })
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}
