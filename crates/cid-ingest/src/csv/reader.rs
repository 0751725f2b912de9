//! CSV loading and identifier column extraction.

use std::io::Cursor;

use cid_model::{DEFAULT_ID_COLUMN, RawInput};
use polars::prelude::*;

use crate::error::{IngestError, Result};
use crate::source::{InputSource, MAX_INPUT_SIZE};
use crate::text::decode_text;

/// Options for loading a tabular input.
#[derive(Debug, Clone)]
pub struct IngestOptions {
    /// Name of the identifier column (exact, case-sensitive).
    pub column: String,
    /// Inputs larger than this are refused.
    pub max_input_size: u64,
}

impl Default for IngestOptions {
    fn default() -> Self {
        Self {
            column: DEFAULT_ID_COLUMN.to_string(),
            max_input_size: MAX_INPUT_SIZE,
        }
    }
}

impl IngestOptions {
    pub fn with_column(mut self, column: impl Into<String>) -> Self {
        self.column = column.into();
        self
    }

    pub fn with_max_input_size(mut self, max_input_size: u64) -> Self {
        self.max_input_size = max_input_size;
        self
    }
}

/// A loaded table and the raw identifier cells taken from it.
#[derive(Debug, Clone)]
pub struct CsvInput {
    /// Full table, kept for previews. Every column is a string column.
    pub frame: DataFrame,
    /// Cells of the identifier column in row order.
    pub raw: RawInput,
}

/// Parses CSV text into a DataFrame without type inference.
///
/// All columns are read as strings so spreadsheet values reach the
/// normalizer exactly as written; empty fields become nulls.
pub fn read_csv_frame(text: &str, source_name: &str) -> Result<DataFrame> {
    if text.trim().is_empty() {
        return Err(IngestError::EmptyCsv {
            source_name: source_name.to_string(),
        });
    }

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(Some(0))
        .into_reader_with_file_handle(Cursor::new(text.as_bytes().to_vec()))
        .finish()
        .map_err(|e| IngestError::CsvParse {
            source_name: source_name.to_string(),
            message: e.to_string(),
        })?;

    // Wide dataset warning (>500 columns)
    if df.width() > 500 {
        tracing::warn!(
            source = source_name,
            columns = df.width(),
            "table has more than 500 columns; only the identifier column is read"
        );
    }

    Ok(df)
}

/// Returns the cells of the first column named exactly `column`.
pub fn id_column_cells(
    df: &DataFrame,
    column: &str,
    source_name: &str,
) -> Result<Vec<Option<String>>> {
    let found = df
        .get_columns()
        .iter()
        .find(|candidate| candidate.name().as_str() == column)
        .ok_or_else(|| IngestError::MissingColumn {
            column: column.to_string(),
            source_name: source_name.to_string(),
        })?;

    let series = found.as_materialized_series().cast(&DataType::String)?;
    let values = series.str()?;
    Ok(values
        .into_iter()
        .map(|value| value.map(str::to_string))
        .collect())
}

/// Loads a CSV input and extracts its identifier column.
pub fn load_csv(source: &InputSource, options: &IngestOptions) -> Result<CsvInput> {
    let source_name = source.to_string();
    let bytes = source.read_bytes(options.max_input_size)?;
    let text = decode_text(&bytes, &source_name)?;
    let frame = read_csv_frame(&text, &source_name)?;
    let cells = id_column_cells(&frame, &options.column, &source_name)?;
    tracing::debug!(
        source = %source_name,
        rows = frame.height(),
        columns = frame.width(),
        "loaded CSV input"
    );
    Ok(CsvInput {
        frame,
        raw: RawInput::Column(cells),
    })
}
