use super::HandlerContext;
use crate::presentation::presenters::{present_screen, present_show};
use anyhow::Result;
use biodata_core::BiodataApp;
use biodata_types::ViewName;

pub fn handle(ctx: &HandlerContext, view: ViewName) -> Result<()> {
    let app = BiodataApp::new(ctx.seed.clone(), view)?;
    tracing::debug!(view = %view, "rendering view");

    ctx.render(present_show(present_screen(&app, None)))
}
