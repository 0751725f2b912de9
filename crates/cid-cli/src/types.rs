use cid_model::{NormalizeOptions, Normalized};
use cid_output::OutputPaths;
use polars::prelude::DataFrame;
use serde::Serialize;

/// What happened to one input.
#[derive(Debug, Serialize)]
pub struct InputOutcome {
    pub source: String,
    /// Table rows (CSV) or 1 (text).
    pub rows: usize,
    /// `None` until the input was loaded and normalized.
    pub result: Option<Normalized>,
    pub outputs: OutputPaths,
    pub error: Option<String>,
    /// First rows of the loaded table, for the summary preview.
    #[serde(skip)]
    pub preview: Option<DataFrame>,
}

impl InputOutcome {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            rows: 0,
            result: None,
            outputs: OutputPaths::default(),
            error: None,
            preview: None,
        }
    }

    pub fn unique_ids(&self) -> usize {
        self.result.as_ref().map_or(0, |result| result.ids.len())
    }
}

#[derive(Debug, Serialize)]
pub struct RunResult {
    pub options: NormalizeOptions,
    pub inputs: Vec<InputOutcome>,
    pub cache_hits: usize,
    pub has_errors: bool,
}
