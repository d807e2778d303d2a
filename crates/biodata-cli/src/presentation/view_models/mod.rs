pub mod common;
pub mod result;
pub mod screen;
pub mod status;
pub mod validation;

pub use common::{Guidance, OutputFormat, StatusBadge, StatusLevel};
pub use result::CommandResultViewModel;
pub use screen::{
    EditFormViewModel, FormFieldViewModel, HomeViewModel, NavItemViewModel, NavViewModel,
    ProfileViewModel, RecordRowViewModel, ScreenBody, ScreenViewModel,
};
pub use status::{KeyHint, StatusBarViewModel};
pub use validation::ValidationViewModel;

use std::fmt;

/// Bridge from a view model to its text view
pub trait CreateView {
    fn create_view<'a>(&'a self, colored: bool) -> Box<dyn fmt::Display + 'a>;
}
