//! Badges and text styles.

use owo_colors::{OwoColorize, Style};

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Err,
}

impl Badge {
    /// Get badge with symbol for display.
    pub fn display(&self, unicode: bool) -> &'static str {
        match (self, unicode) {
            (Self::Ok, true) => "[\u{2713}]",  // [✓]
            (Self::Ok, false) => "[OK]",
            (Self::Err, true) => "[\u{2717}]", // [✗]
            (Self::Err, false) => "[ERR]",
        }
    }

    pub fn style(&self) -> Style {
        match self {
            Self::Ok => styles::success(),
            Self::Err => styles::error(),
        }
    }
}

/// Named styles used across renderers.
pub mod styles {
    use owo_colors::Style;

    pub fn bold() -> Style {
        Style::new().bold()
    }

    pub fn success() -> Style {
        Style::new().green().bold()
    }

    pub fn error() -> Style {
        Style::new().red().bold()
    }

    /// Positive amounts in reports.
    pub fn credit() -> Style {
        Style::new().green()
    }

    /// Negative amounts in reports.
    pub fn debit() -> Style {
        Style::new().red()
    }
}

/// Apply `style` when color is enabled, otherwise return the text unchanged.
pub fn styled(text: &str, style: Style, color: bool) -> String {
    if color {
        text.style(style).to_string()
    } else {
        text.to_string()
    }
}
