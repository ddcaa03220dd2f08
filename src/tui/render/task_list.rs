use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Focus};
use crate::util::unicode;

use super::helpers::pane_block;

const EMPTY_MESSAGE: &str = "No tasks to show.";

/// Render the tasks passing the current filter, one row each.
///
/// Adjusts `app.task_scroll` so the cursor row stays visible.
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    let focused = app.focus == Focus::Tasks;
    let block = pane_block("Tasks", focused, &app.theme);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let height = inner.height as usize;
    if app.task_cursor < app.task_scroll {
        app.task_scroll = app.task_cursor;
    } else if height > 0 && app.task_cursor >= app.task_scroll + height {
        app.task_scroll = app.task_cursor + 1 - height;
    }

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        let line = Line::from(Span::styled(
            EMPTY_MESSAGE,
            Style::default().fg(app.theme.dim),
        ));
        frame.render_widget(Paragraph::new(line), inner);
        return;
    }

    let width = inner.width as usize;
    let lines: Vec<Line> = tasks
        .iter()
        .enumerate()
        .skip(app.task_scroll)
        .take(height)
        .map(|(i, task)| task_line(app, task, focused && i == app.task_cursor, width))
        .collect();

    frame.render_widget(Paragraph::new(lines), inner);
}

fn task_line<'a>(app: &App, task: &'a Task, is_cursor: bool, width: usize) -> Line<'a> {
    let theme = &app.theme;
    let mark = if task.is_completed { "[x] " } else { "[ ] " };
    let due = task.due_date.format("%Y-%m-%d").to_string();
    let category = format!("  {}  ", task.category);

    // Name gets whatever the mark, category and date leave over
    let fixed = unicode::display_width(mark)
        + unicode::display_width(&category)
        + unicode::display_width(&due);
    let name_width = width.saturating_sub(fixed);
    let name = unicode::fit_to_width(&task.task, name_width);

    let mut name_style = Style::default().fg(theme.text_bright);
    let mut meta_style = Style::default().fg(theme.cyan);
    let mut due_style = Style::default().fg(theme.yellow);
    if task.is_completed {
        name_style = Style::default()
            .fg(theme.dim)
            .add_modifier(Modifier::CROSSED_OUT);
        meta_style = Style::default().fg(theme.dim);
        due_style = meta_style;
    }

    let mut line = Line::from(vec![
        Span::styled(mark, Style::default().fg(theme.completion_color(task.is_completed))),
        Span::styled(name, name_style),
        Span::styled(category, meta_style),
        Span::styled(due, due_style),
    ]);
    if is_cursor {
        line = line.style(Style::default().bg(theme.selection_bg));
    }
    line
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::render::test_helpers::*;

    #[test]
    fn empty_list_placeholder() {
        let mut app = app_with(&["work"], &[]);
        let output = render_to_string(60, 6, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("No tasks to show."));
    }

    #[test]
    fn rows_show_mark_name_category_due() {
        let mut tasks = vec![task(0, "Write report", "work"), task(1, "Gym", "home")];
        tasks[1].is_completed = true;
        let mut app = app_with_tasks(&["work", "home"], &tasks);
        let output = render_to_string(60, 6, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        let rows: Vec<&str> = output.lines().collect();
        assert!(rows[1].contains("[ ] Write report"));
        assert!(rows[1].contains("work  2024-01-01"));
        assert!(rows[2].contains("[x] Gym"));
    }

    #[test]
    fn completed_rows_are_crossed_out() {
        let mut done = task(0, "Done thing", "work");
        done.is_completed = true;
        let mut app = app_with_tasks(&["work"], &[done]);
        let backend = ratatui::backend::TestBackend::new(40, 3);
        let mut terminal = ratatui::Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| render_task_list(frame, &mut app, frame.area()))
            .unwrap();
        // Row 1 inside the border; column 5 is the first letter of the name
        let cell = &terminal.backend().buffer()[(5, 1)];
        assert_eq!(cell.symbol(), "D");
        assert!(cell.modifier.contains(Modifier::CROSSED_OUT));
    }

    #[test]
    fn filter_hides_other_categories() {
        let mut app = app_with(&["work", "home"], &[("Write report", "work"), ("Gym", "home")]);
        app.store
            .set_filter(crate::model::Filter::Category("home".into()));
        app.refresh();
        let output = render_to_string(60, 6, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert!(output.contains("Gym"));
        assert!(!output.contains("Write report"));
    }

    #[test]
    fn scroll_follows_cursor() {
        let names: Vec<String> = (0..10).map(|i| format!("task {}", i)).collect();
        let pairs: Vec<(&str, &str)> = names.iter().map(|n| (n.as_str(), "work")).collect();
        let mut app = app_with(&["work"], &pairs);
        app.focus = Focus::Tasks;
        app.task_cursor = 7;
        let output = render_to_string(40, 5, |frame, area| {
            render_task_list(frame, &mut app, area);
        });
        assert_eq!(app.task_scroll, 5);
        assert!(output.contains("task 7"));
        assert!(!output.contains("task 4"));
    }
}
