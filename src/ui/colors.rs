use crossterm::style::Color;

pub fn header_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn subheader_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn win_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn loss_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red
pub fn above_average_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn below_average_fg() -> Color {
    Color::AnsiValue(244)
} // Grey

/// Extracts the 256-colour index, or `fallback` for non-indexed colours.
pub fn get_ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}

/// Wraps text in foreground colour escapes unless colour output is disabled.
#[derive(Debug, Clone, Copy)]
pub struct Palette {
    enabled: bool,
}

impl Palette {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn paint(&self, text: &str, color: Color) -> String {
        if self.enabled {
            format!("\x1b[38;5;{}m{text}\x1b[0m", get_ansi_code(color, 231))
        } else {
            text.to_string()
        }
    }
}
