//! # Presentation Layer
//!
//! User interface logic for the CLI, laid out as **MVVM** with a small
//! component layer for the interactive TUI.
//!
//! ## Data Flow
//!
//! ### Console output (text / JSON)
//!
//! ```text
//! [ Handler ] --> [ Presenter ] --> [ ViewModel ] --> [ Renderer ] ==(JSON)==> serde_json
//!                                                                  ==(Text)==> [ View ]
//! ```
//!
//! ### Interactive TUI
//!
//! ```text
//! [ BiodataApp ] --> [ Presenter ] --> [ ViewModel ] --> [ View (Widget) ]
//!        ^                                                        |
//!        |                                                        v
//! [ TuiRenderer ] <-- Action <-- [ Component ] <-- key input   terminal
//! ```
//!
//! ## Rules
//!
//! 1. **ViewModels carry raw data.** A missing picture is `null`, not a
//!    placeholder string. JSON output is an API.
//! 2. **Views never decide.** They only lay out what the ViewModel says;
//!    labels, messages and the active tab all come from presenters.
//! 3. **UI state lives in components.** The focused input is not part of the
//!    record or the draft.
//! 4. **Domain changes go up as Actions.** Components never touch the store;
//!    the renderer applies their `Action` to the app.

pub mod presenters;
pub mod renderers;
pub mod view_models;
pub mod views;

pub use renderers::{ConsoleRenderer, Renderer, TuiRenderer};
