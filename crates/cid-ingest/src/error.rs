//! Error types for contract ID ingestion.

use thiserror::Error;

/// Errors that can occur while loading an input.
///
/// Every variant is an input-shape error: the input is reported and skipped,
/// nothing is written for it.
#[derive(Debug, Error)]
pub enum IngestError {
    // === File System Errors ===
    /// Input file not found.
    #[error("file not found: {source_name}")]
    FileNotFound { source_name: String },

    /// Failed to read the input.
    #[error("failed to read {source_name}: {source}")]
    Read {
        source_name: String,
        #[source]
        source: std::io::Error,
    },

    /// Input is larger than the configured limit.
    #[error("{source_name} is too large ({size} bytes, limit {max_size} bytes)")]
    FileTooLarge {
        source_name: String,
        size: u64,
        max_size: u64,
    },

    /// Input uses an encoding we do not read.
    #[error("{source_name} uses unsupported encoding {encoding}; save it as UTF-8")]
    UnsupportedEncoding {
        source_name: String,
        encoding: &'static str,
    },

    // === CSV Parsing Errors ===
    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {source_name}: {message}")]
    CsvParse { source_name: String, message: String },

    /// CSV input is empty.
    #[error("CSV input is empty: {source_name}")]
    EmptyCsv { source_name: String },

    /// The identifier column is absent from the table.
    #[error("column '{column}' not found in {source_name}; check the column name")]
    MissingColumn { column: String, source_name: String },

    // === DataFrame Errors ===
    /// Failed DataFrame operation.
    #[error("DataFrame operation failed: {message}")]
    DataFrame { message: String },
}

impl From<polars::prelude::PolarsError> for IngestError {
    fn from(err: polars::prelude::PolarsError) -> Self {
        Self::DataFrame {
            message: err.to_string(),
        }
    }
}

/// Result type for ingestion operations.
pub type Result<T> = std::result::Result<T, IngestError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = IngestError::MissingColumn {
            column: "Contract ID".to_string(),
            source_name: "ids.csv".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "column 'Contract ID' not found in ids.csv; check the column name"
        );
    }

    #[test]
    fn test_error_from_polars() {
        let polars_err = polars::prelude::PolarsError::ColumnNotFound("test".into());
        let ingest_err: IngestError = polars_err.into();
        assert!(matches!(ingest_err, IngestError::DataFrame { .. }));
    }
}
