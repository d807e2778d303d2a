//! TUI Components
//!
//! Components own UI state and input logic. They never touch the store
//! directly; instead they return an [`Action`] and the renderer applies it
//! to the app.
//!
//! ## Pattern:
//! ```rust,ignore
//! pub struct FooComponent {
//!     state: SomeState, // Private UI state
//! }
//!
//! impl FooComponent {
//!     pub fn handle_input(&mut self, key: KeyEvent, data: &Foo) -> Option<Action> {
//!         // Handle input, return action if parent needs to respond
//!     }
//! }
//! ```

pub mod edit_form;

pub use edit_form::EditFormComponent;

use biodata_types::{Field, ViewName};

/// Requests a component hands back to the renderer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Navigate(ViewName),
    ChangeField(Field, String),
    Submit,
    Quit,
}
