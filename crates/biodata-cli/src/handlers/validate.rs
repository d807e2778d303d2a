use super::HandlerContext;
use crate::args::FieldAssignment;
use crate::presentation::presenters::present_validation;
use anyhow::Result;
use biodata_core::validate;
use biodata_types::DraftRecord;

pub fn handle(ctx: &HandlerContext, assignments: Vec<FieldAssignment>) -> Result<()> {
    let mut draft = DraftRecord::from(&ctx.seed);
    for FieldAssignment { field, value } in assignments {
        draft.set(field, value);
    }

    tracing::debug!("validating draft");
    let errors = validate(&draft);
    let count = errors.len();

    ctx.render(present_validation(draft, errors))?;

    if count > 0 {
        anyhow::bail!("{} field(s) failed validation", count);
    }
    Ok(())
}
