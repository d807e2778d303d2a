// NOTE: biodata layering
//
// - biodata-types: record, patch, draft, field and view names
// - biodata-core: validator, store, edit session, navigator, BiodataApp
// - this crate: argument parsing, config, logging and the presentation layer
//
// Handlers build one BiodataApp per process. Nothing outlives the process:
// the record starts from the seed (optionally overridden by config) every run.

mod args;
mod commands;
pub mod config;
mod handlers;
pub mod logging;
pub mod presentation;
pub mod types;

pub use args::{Cli, Commands, FieldAssignment};
pub use commands::run;
