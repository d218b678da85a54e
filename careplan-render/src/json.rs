use std::path::Path;

use careplan_core::{Block, FooterFn, PageContext, PageFooter, RenderEngine, ReportError};
use serde::Serialize;
use tracing::debug;

use crate::write_artifact;

/// Exports the block sequence as JSON instead of laying out pages.
///
/// The footer of page 1 is included so consumers can show the same
/// confidentiality line, and `generated_at` is taken from it so the export
/// carries the single generation time of the run.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonBlockRenderer;

#[derive(Serialize)]
struct BlockExport<'a> {
    generated_at: String,
    footer: PageFooter,
    blocks: &'a [Block],
}

impl JsonBlockRenderer {
    pub fn to_json(&self, blocks: &[Block], footer: &FooterFn<'_>) -> Result<String, ReportError> {
        let footer = footer(&PageContext { page_number: 1 });
        let export = BlockExport {
            generated_at: footer.generated_at.clone(),
            footer,
            blocks,
        };
        serde_json::to_string_pretty(&export).map_err(|err| ReportError::Render(err.to_string()))
    }
}

impl RenderEngine for JsonBlockRenderer {
    fn render(
        &self,
        blocks: &[Block],
        footer: &FooterFn<'_>,
        output: &Path,
    ) -> Result<(), ReportError> {
        let json = self.to_json(blocks, footer)?;
        write_artifact(output, json.as_bytes())?;
        debug!(blocks = blocks.len(), output = %output.display(), "block export written");
        Ok(())
    }
}
