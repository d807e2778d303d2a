//! TUI View Components
//!
//! Ratatui Widget implementations for the interactive UI. Each view is a
//! thin wrapper around a ViewModel reference.
//!
//! - Views take a reference to ViewModel (no ownership)
//! - No domain logic; only map ViewModel data to widgets
//! - Color mapping from StatusLevel happens here

pub mod components;
pub mod edit_form;
pub mod home;
pub mod nav_bar;
pub mod profile;
pub mod status_bar;

pub use edit_form::EditFormView;
pub use home::HomeView;
pub use nav_bar::NavBarView;
pub use profile::ProfileView;
pub use status_bar::StatusBarView;

use crate::presentation::view_models::StatusLevel;
use ratatui::style::Color;

/// Convert StatusLevel to Ratatui Color
pub(crate) fn status_level_to_color(level: StatusLevel) -> Color {
    match level {
        StatusLevel::Success => Color::Green,
        StatusLevel::Info => Color::Cyan,
        StatusLevel::Error => Color::Red,
    }
}
