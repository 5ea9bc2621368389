// Helper utilities for the tabs widget
use ratatui::style::{Color, Modifier, Style};

/// Convert hex color to ratatui Color
pub fn hex_color(hex: u32) -> Color {
    Color::Rgb(
        ((hex >> 16) & 0xFF) as u8,
        ((hex >> 8) & 0xFF) as u8,
        (hex & 0xFF) as u8,
    )
}

/// Parse a color name or `#rrggbb` string
pub fn parse_color(color: &str) -> Option<Color> {
    let color = color.trim();
    if let Some(hex) = color.strip_prefix('#') {
        if hex.len() != 6 {
            return None;
        }
        return u32::from_str_radix(hex, 16).ok().map(hex_color);
    }

    let parsed = match color.to_lowercase().as_str() {
        "primary" => Color::Cyan,
        "secondary" | "accent" => Color::Magenta,
        "error" => Color::Red,
        "success" => Color::Green,
        "warning" => Color::Yellow,
        "black" => Color::Black,
        "red" => Color::Red,
        "green" => Color::Green,
        "yellow" => Color::Yellow,
        "blue" => Color::Blue,
        "magenta" => Color::Magenta,
        "cyan" => Color::Cyan,
        "white" => Color::White,
        "gray" | "grey" => Color::Gray,
        // Dark colors using RGB values (ratatui doesn't have Dark* variants)
        "dark_red" | "darkred" => Color::Rgb(139, 0, 0),
        "dark_green" | "darkgreen" => Color::Rgb(0, 100, 0),
        "dark_yellow" | "darkyellow" => Color::Rgb(184, 134, 11),
        "dark_blue" | "darkblue" => Color::Rgb(0, 0, 139),
        "dark_magenta" | "darkmagenta" => Color::Rgb(139, 0, 139),
        "dark_cyan" | "darkcyan" => Color::Rgb(0, 139, 139),
        _ => return None,
    };
    Some(parsed)
}

/// Foreground/background pairing applied to the bar, slider, and panels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Theme {
    /// Active tab text color
    pub color: Color,
    /// Highlight color; falls back to `color`
    pub slider_color: Option<Color>,
    /// Bar background
    pub background: Option<Color>,
    pub dark: bool,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            color: Color::Cyan,
            slider_color: None,
            background: None,
            dark: true,
        }
    }
}

impl Theme {
    /// Base style of the bar row
    pub fn bar_style(&self) -> Style {
        let style = Style::default().fg(self.text_color());
        match self.background {
            Some(bg) => style.bg(bg),
            None => style,
        }
    }

    pub fn inactive_tab_style(&self) -> Style {
        self.bar_style().fg(if self.dark { hex_color(0x999999) } else { hex_color(0x555555) })
    }

    pub fn active_tab_style(&self) -> Style {
        self.bar_style().fg(self.color).add_modifier(Modifier::BOLD)
    }

    pub fn slider_style(&self) -> Style {
        self.bar_style().fg(self.slider_color.unwrap_or(self.color))
    }

    pub fn arrow_style(&self, enabled: bool) -> Style {
        if enabled {
            self.bar_style()
        } else {
            self.bar_style().fg(hex_color(0x444444))
        }
    }

    pub fn panel_border_style(&self) -> Style {
        Style::default().fg(if self.dark { hex_color(0x555555) } else { hex_color(0x999999) })
    }

    fn text_color(&self) -> Color {
        if self.dark {
            Color::White
        } else {
            Color::Black
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_named_and_hex_colors() {
        assert_eq!(parse_color("Primary"), Some(Color::Cyan));
        assert_eq!(parse_color("dark_red"), Some(Color::Rgb(139, 0, 0)));
        assert_eq!(parse_color("#1a2b3c"), Some(Color::Rgb(0x1a, 0x2b, 0x3c)));
        assert_eq!(parse_color("#123"), None);
        assert_eq!(parse_color("chartreuse-ish"), None);
    }

    #[test]
    fn test_slider_falls_back_to_color() {
        let theme = Theme {
            color: Color::Green,
            ..Theme::default()
        };
        assert_eq!(theme.slider_style().fg, Some(Color::Green));

        let theme = Theme {
            slider_color: Some(Color::Yellow),
            background: Some(Color::Blue),
            ..theme
        };
        assert_eq!(theme.slider_style().fg, Some(Color::Yellow));
        assert_eq!(theme.bar_style().bg, Some(Color::Blue));
    }
}
