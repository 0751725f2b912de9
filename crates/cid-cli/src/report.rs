//! JSON run report.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use tracing::debug;

use crate::types::RunResult;

/// Writes the run outcome as pretty-printed JSON.
pub fn write_report(path: &Path, result: &RunResult) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, result)
        .with_context(|| format!("serialize report to {}", path.display()))?;
    writeln!(writer)?;
    writer.flush()?;
    debug!(path = %path.display(), "wrote run report");
    Ok(())
}
