mod context;

pub mod edit;
pub mod show;
pub mod tui;
pub mod validate;

pub use context::HandlerContext;
