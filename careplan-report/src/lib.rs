//! Care plan report assembly: formatting, section builders and the fixed
//! document order, handed to a [`RenderEngine`] together with a page footer.

use std::path::Path;

use careplan_core::{PageContext, RenderEngine, ReportConfig, ReportError};
use careplan_store::{load_snapshot, RecordStore};
use chrono::Local;
use tracing::debug;

mod assemble;
pub mod format;
pub mod sections;

pub use assemble::{assemble, ReportFooter};

/// Load a care plan, assemble its report and render it to `output`.
///
/// A care plan that cannot be resolved fails with `ReportError::NotFound`
/// before the engine is invoked, so no artifact is written.
pub fn generate<S, E>(
    store: &S,
    engine: &E,
    care_plan_id: &str,
    output: &Path,
    config: &ReportConfig,
) -> Result<(), ReportError>
where
    S: RecordStore + ?Sized,
    E: RenderEngine + ?Sized,
{
    let snapshot = load_snapshot(store, care_plan_id)?;
    let blocks = assemble(&snapshot, config);

    let footer = ReportFooter::new(config, Local::now());
    debug!(output = %output.display(), "rendering care plan report");
    engine.render(&blocks, &|context: &PageContext| footer.page(context), output)
}
