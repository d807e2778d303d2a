use super::HandlerContext;
use crate::args::FieldAssignment;
use crate::presentation::presenters::{present_committed, present_rejected, present_screen};
use anyhow::Result;
use biodata_core::{BiodataApp, Error};
use biodata_types::ViewName;

/// Open the Edit view, apply every `--set`, then submit once.
///
/// On success the app is back on Home and that screen is printed. On a
/// validation failure the form with its inline errors is printed and the
/// command fails; the store is untouched.
pub fn handle(ctx: &HandlerContext, assignments: Vec<FieldAssignment>) -> Result<()> {
    let mut app = BiodataApp::new(ctx.seed.clone(), ViewName::Edit)?;

    for FieldAssignment { field, value } in assignments {
        tracing::debug!(field = %field, "setting field");
        app.change_field(field, value)?;
    }

    match app.submit() {
        Ok(record) => {
            tracing::info!(name = %record.name, revision = app.store().revision(), "record saved");
            ctx.render(present_committed(present_screen(&app, None)))
        }
        Err(Error::Validation(errors)) => {
            ctx.render(present_rejected(present_screen(&app, None)))?;
            anyhow::bail!("{} field(s) failed validation: {}", errors.len(), errors)
        }
        Err(e) => Err(e.into()),
    }
}
