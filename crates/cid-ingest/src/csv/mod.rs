//! CSV reading utilities.

mod reader;

pub use reader::{CsvInput, IngestOptions, id_column_cells, load_csv, read_csv_frame};
