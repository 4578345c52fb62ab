use crate::error::{IoResultExt, Result};
use std::path::Path;
use tracing::trace;

/// Whether `output` can be left as it is.
///
/// True when the source has not been modified since the output was written,
/// or when the output already holds exactly `rendered`. A missing output is
/// never up to date.
pub async fn is_up_to_date(source: &Path, output: &Path, rendered: &str) -> Result<bool> {
    let output_meta = match tokio::fs::metadata(output).await {
        Ok(meta) => meta,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(false),
        Err(e) => return Err(e).at_path(output),
    };
    let source_meta = tokio::fs::metadata(source).await.at_path(source)?;

    let source_modified = source_meta.modified().at_path(source)?;
    let output_modified = output_meta.modified().at_path(output)?;
    if source_modified <= output_modified {
        trace!(output = %output.display(), "Output newer than source");
        return Ok(true);
    }

    let existing = tokio::fs::read(output).await.at_path(output)?;
    Ok(existing == rendered.as_bytes())
}
