//! Testing infrastructure for biodata tests.
//!
//! - `fixtures`: records and drafts used across core and CLI tests
//! - `TestWorld`: isolated temp directory with optional config file, running the CLI

pub mod fixtures;
pub mod world;

pub use world::{CliResult, TestWorld};
