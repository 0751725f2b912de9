//! Output generation for cleaned contract IDs.
//!
//! Two artifacts exist: a one-column CSV (`Contract ID Limpo`) and a text file
//! holding the SQL `IN`-clause literal.

pub mod csv;
pub mod frame;
pub mod sql;

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use cid_model::ResultSet;
use serde::{Deserialize, Serialize};

pub use csv::{write_csv, write_csv_file};
pub use frame::result_frame;
pub use sql::{sql_text, write_sql, write_sql_file};

/// Default file name of the cleaned CSV.
pub const CSV_FILE_NAME: &str = "contract_ids_limpos.csv";

/// Default file name of the SQL literal.
pub const SQL_FILE_NAME: &str = "contract_ids_sql.txt";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Csv,
    Sql,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputPaths {
    pub csv: Option<PathBuf>,
    pub sql: Option<PathBuf>,
}

/// Where and what to write for one input.
#[derive(Debug, Clone)]
pub struct OutputOptions {
    pub formats: Vec<OutputFormat>,
    pub output_dir: PathBuf,
    /// Prepended to file names as `<prefix>_` when several inputs share a directory.
    pub prefix: Option<String>,
    /// Renders the SQL artifact as `<column> IN (...)` instead of a bare list.
    pub sql_column: Option<String>,
}

impl OutputOptions {
    pub fn new(output_dir: impl Into<PathBuf>, formats: Vec<OutputFormat>) -> Self {
        Self {
            formats,
            output_dir: output_dir.into(),
            prefix: None,
            sql_column: None,
        }
    }

    pub fn with_prefix(mut self, prefix: Option<String>) -> Self {
        self.prefix = prefix;
        self
    }

    pub fn with_sql_column(mut self, column: Option<String>) -> Self {
        self.sql_column = column;
        self
    }

    fn file_path(&self, file_name: &str) -> PathBuf {
        match &self.prefix {
            Some(prefix) => self.output_dir.join(format!("{prefix}_{file_name}")),
            None => self.output_dir.join(file_name),
        }
    }
}

/// Writes every requested artifact and returns their paths.
pub fn write_outputs(ids: &ResultSet, options: &OutputOptions) -> Result<OutputPaths> {
    ensure_dir(&options.output_dir)?;
    let mut paths = OutputPaths::default();
    for format in &options.formats {
        match format {
            OutputFormat::Csv => {
                let path = options.file_path(CSV_FILE_NAME);
                write_csv_file(&path, ids)?;
                paths.csv = Some(path);
            }
            OutputFormat::Sql => {
                let path = options.file_path(SQL_FILE_NAME);
                write_sql_file(&path, ids, options.sql_column.as_deref())?;
                paths.sql = Some(path);
            }
        }
    }
    Ok(paths)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))
}
