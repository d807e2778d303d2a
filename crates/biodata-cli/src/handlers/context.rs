use crate::presentation::view_models::{CommandResultViewModel, CreateView};
use crate::presentation::{ConsoleRenderer, Renderer};
use crate::types::OutputFormat;
use anyhow::Result;
use biodata_types::BiodataRecord;
use serde::Serialize;

/// Context for handler execution with consistent presentation utilities
pub struct HandlerContext {
    pub format: OutputFormat,
    /// Record the app starts from (built-in seed plus config overrides)
    pub seed: BiodataRecord,
}

impl HandlerContext {
    pub fn new(format: OutputFormat, seed: BiodataRecord) -> Self {
        Self { format, seed }
    }

    /// Render a view model using the configured format
    pub fn render<T>(&self, view_model: CommandResultViewModel<T>) -> Result<()>
    where
        T: Serialize + CreateView,
    {
        let renderer = ConsoleRenderer::new(self.format.into());
        renderer.render(view_model)
    }
}
