//! Input loading for the contract ID cleaner.
//!
//! Two kinds of input exist: a CSV table with a `Contract ID` column, and a
//! free-text blob. Both end up as a [`RawInput`](cid_model::RawInput).

pub mod csv;
pub mod error;
pub mod source;
pub mod text;

pub use csv::{CsvInput, IngestOptions, id_column_cells, load_csv, read_csv_frame};
pub use error::{IngestError, Result};
pub use source::{InputSource, MAX_INPUT_SIZE, read_limited};
pub use text::{decode_text, load_text};
