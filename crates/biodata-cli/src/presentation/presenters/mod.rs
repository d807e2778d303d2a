pub mod screen;
pub mod status;
pub mod validation;

pub use screen::*;
pub use status::*;
pub use validation::*;
