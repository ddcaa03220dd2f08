use ratatui::style::{Modifier, Style};
use ratatui::text::Span;
use ratatui::widgets::{Block, BorderType, Borders};

use crate::tui::theme::Theme;

/// Bordered block for a pane, highlighted when it has focus
pub(super) fn pane_block<'a>(title: &'a str, focused: bool, theme: &Theme) -> Block<'a> {
    let title_style = if focused {
        Style::default()
            .fg(theme.text_bright)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.text)
    };
    Block::default()
        .borders(Borders::ALL)
        .border_type(if focused {
            BorderType::Thick
        } else {
            BorderType::Plain
        })
        .border_style(Style::default().fg(theme.border_color(focused)))
        .title(Span::styled(format!(" {} ", title), title_style))
        .style(Style::default().bg(theme.background))
}

/// Block cursor shown at the end of a field being edited
pub(super) fn cursor_span(theme: &Theme) -> Span<'static> {
    Span::styled("\u{258C}", Style::default().fg(theme.highlight))
}
