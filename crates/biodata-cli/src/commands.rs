use super::args::{Cli, Commands};
use super::handlers::{self, HandlerContext};
use crate::config::Config;
use crate::logging::{self, LogTarget};
use anyhow::Result;

pub fn run(cli: Cli) -> Result<()> {
    let command = cli.command.unwrap_or(Commands::Tui { view: None });
    let interactive = matches!(command, Commands::Tui { .. });

    logging::init(
        cli.log_level,
        LogTarget::resolve(cli.log_file.as_deref(), interactive),
    )?;

    let config = Config::load_optional(cli.config.as_deref())?;
    match &cli.config {
        Some(path) => tracing::debug!(path = %path.display(), "loaded config"),
        None => tracing::debug!("no config file, using built-in seed"),
    }
    let seed = config.seed_record();

    match command {
        Commands::Tui { view } => {
            let start = match view {
                Some(view) => view,
                None => config.start_view()?.unwrap_or_default(),
            };
            handlers::tui::handle(seed, start)
        }

        Commands::Show { view } => {
            let ctx = HandlerContext::new(cli.format, seed);
            handlers::show::handle(&ctx, view)
        }

        Commands::Validate { set } => {
            let ctx = HandlerContext::new(cli.format, seed);
            handlers::validate::handle(&ctx, set)
        }

        Commands::Edit { set } => {
            let ctx = HandlerContext::new(cli.format, seed);
            handlers::edit::handle(&ctx, set)
        }
    }
}

