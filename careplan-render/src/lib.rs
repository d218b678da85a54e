//! Rendering engines for assembled care plan reports.
//!
//! Every engine builds the complete artifact in memory and only then writes
//! it to disk through a temporary file in the target directory, so a failed
//! run never leaves a partial file behind.

use std::io::Write;
use std::path::Path;

use careplan_core::ReportError;
use tempfile::NamedTempFile;

mod json;
mod layout;
mod text;

pub use json::JsonBlockRenderer;
pub use text::TextPageRenderer;

/// Write `contents` to `output` in a single rename.
fn write_artifact(output: &Path, contents: &[u8]) -> Result<(), ReportError> {
    let directory = match output.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut staged = NamedTempFile::new_in(directory)?;
    staged.write_all(contents)?;
    staged.flush()?;
    staged.persist(output).map_err(|err| ReportError::Io(err.error))?;
    Ok(())
}
