//! Cleaned CSV output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use anyhow::{Context, Result};
use cid_model::ResultSet;
use polars::prelude::{CsvWriter, SerWriter};

use crate::frame::result_frame;

/// Writes the `Contract ID Limpo` CSV (header included, UTF-8).
pub fn write_csv<W: Write>(writer: &mut W, ids: &ResultSet) -> Result<()> {
    let mut df = result_frame(ids).context("build result frame")?;
    CsvWriter::new(writer)
        .include_header(true)
        .finish(&mut df)
        .context("write csv")?;
    Ok(())
}

pub fn write_csv_file(path: &Path, ids: &ResultSet) -> Result<()> {
    let file = File::create(path).with_context(|| format!("create {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    write_csv(&mut writer, ids)?;
    writer
        .flush()
        .with_context(|| format!("flush {}", path.display()))?;
    tracing::debug!(path = %path.display(), rows = ids.len(), "wrote cleaned csv");
    Ok(())
}
