mod commands;

pub use commands::*;

use clap::Parser;
use std::path::PathBuf;

use crate::types::{LogLevel, OutputFormat};

#[derive(Parser)]
#[command(name = "biodata")]
#[command(about = "View and edit a personal biodata record", long_about = None)]
#[command(version)]
pub struct Cli {
    #[arg(long, global = true, help = "TOML file with start view and seed overrides")]
    pub config: Option<PathBuf>,

    #[arg(long, default_value = "plain", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[arg(long, global = true, help = "Write logs to this file instead of stderr")]
    pub log_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}
