use crate::presentation::TuiRenderer;
use anyhow::Result;
use biodata_core::BiodataApp;
use biodata_types::{BiodataRecord, ViewName};

pub fn handle(seed: BiodataRecord, start: ViewName) -> Result<()> {
    let app = BiodataApp::new(seed, start)?;
    tracing::info!(view = %start, "starting interactive session");

    TuiRenderer::new(app).run()
}
