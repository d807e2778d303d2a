use biodata_types::{Field, ViewName};
use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    #[command(about = "Open the interactive viewer/editor (default)")]
    Tui {
        #[arg(long, value_parser = parse_view, help = "Start view: home, profile, edit or a route path")]
        view: Option<ViewName>,
    },

    #[command(about = "Render one view and exit")]
    Show {
        #[arg(value_parser = parse_view, help = "home, profile, edit or a route path (/, /profile, /edit)")]
        view: ViewName,
    },

    #[command(about = "Validate the current record with field overrides applied")]
    Validate {
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<FieldAssignment>,
    },

    #[command(about = "Edit fields, submit, and show the resulting view")]
    Edit {
        #[arg(long = "set", value_name = "FIELD=VALUE", value_parser = parse_assignment)]
        set: Vec<FieldAssignment>,
    },
}

/// `--set field=value` argument
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldAssignment {
    pub field: Field,
    pub value: String,
}

fn parse_view(s: &str) -> Result<ViewName, String> {
    s.parse::<ViewName>().map_err(|e| e.to_string())
}

fn parse_assignment(s: &str) -> Result<FieldAssignment, String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("expected FIELD=VALUE, got '{}'", s))?;
    let field = name.parse::<Field>().map_err(|e| e.to_string())?;

    Ok(FieldAssignment {
        field,
        value: value.to_string(),
    })
}
