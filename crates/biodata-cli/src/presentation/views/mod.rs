// Text views for console output, plus Ratatui widgets under `tui`

pub mod screen;
pub mod tui;
pub mod validation;

use owo_colors::OwoColorize;

pub(crate) fn heading(text: &str, colored: bool) -> String {
    if colored {
        text.bold().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn error_text(text: &str, colored: bool) -> String {
    if colored {
        text.red().to_string()
    } else {
        text.to_string()
    }
}

pub(crate) fn active_text(text: &str, colored: bool) -> String {
    if colored {
        text.blue().bold().to_string()
    } else {
        text.to_string()
    }
}
