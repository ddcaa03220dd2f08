use ratatui::style::Color;

use crate::model::UiConfig;

/// Parsed color theme for the TUI
#[derive(Debug, Clone)]
pub struct Theme {
    pub background: Color,
    pub text: Color,
    pub text_bright: Color,
    pub highlight: Color,
    pub dim: Color,
    pub border: Color,
    pub green: Color,
    pub yellow: Color,
    pub cyan: Color,
    pub selection_bg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            background: Color::Rgb(0x10, 0x12, 0x1C),
            text: Color::Rgb(0xC8, 0xCC, 0xE0),
            text_bright: Color::Rgb(0xFF, 0xFF, 0xFF),
            highlight: Color::Rgb(0x4C, 0x8B, 0xF5),
            dim: Color::Rgb(0x6E, 0x73, 0x8C),
            border: Color::Rgb(0x3A, 0x3F, 0x58),
            green: Color::Rgb(0x44, 0xD6, 0x7A),
            yellow: Color::Rgb(0xF2, 0xC1, 0x4E),
            cyan: Color::Rgb(0x7A, 0xC8, 0xF0),
            selection_bg: Color::Rgb(0x22, 0x2C, 0x48),
        }
    }
}

/// Parse a hex color string like "#FF4444" into an RGB Color
fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.strip_prefix('#')?;
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::Rgb(r, g, b))
}

impl Theme {
    /// Create a theme from the `[ui]` config, falling back to defaults
    pub fn from_config(ui: &UiConfig) -> Self {
        let mut theme = Theme::default();

        for (key, value) in &ui.colors {
            let Some(color) = parse_hex_color(value) else {
                log::warn!("ignoring ui color {} = {:?}: not #RRGGBB", key, value);
                continue;
            };
            match key.as_str() {
                "background" => theme.background = color,
                "text" => theme.text = color,
                "text_bright" => theme.text_bright = color,
                "highlight" => theme.highlight = color,
                "dim" => theme.dim = color,
                "border" => theme.border = color,
                "green" => theme.green = color,
                "yellow" => theme.yellow = color,
                "cyan" => theme.cyan = color,
                "selection_bg" => theme.selection_bg = color,
                _ => log::warn!("ignoring unknown ui color {}", key),
            }
        }

        theme
    }

    /// Border color for a pane, brighter when it has focus
    pub fn border_color(&self, focused: bool) -> Color {
        if focused { self.highlight } else { self.border }
    }

    /// Color for a task's completion mark
    pub fn completion_color(&self, completed: bool) -> Color {
        if completed { self.green } else { self.dim }
    }
}
