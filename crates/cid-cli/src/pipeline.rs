//! Per-input processing: ingest, normalize, output.
//!
//! Every input runs in its own `input` span. A failure is recorded on the
//! input's [`InputOutcome`] and the run moves on to the next input.

use std::collections::BTreeSet;
use std::io::Write;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use cid_ingest::{IngestOptions, InputSource, load_csv, load_text};
use cid_model::{NormalizeOptions, RawInput, ResultSet};
use cid_normalization::{NormalizeCache, normalize_with};
use cid_output::{OutputFormat, OutputOptions, write_csv, write_outputs, write_sql};
use indicatif::ProgressBar;
use tracing::{Level, debug, error, info, info_span, trace, warn};

use crate::logging::redact_value;
use crate::types::{InputOutcome, RunResult};

/// One input of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSpec {
    /// CSV table with an identifier column.
    Csv(InputSource),
    /// Free text read from a file or stdin.
    Text(InputSource),
    /// Free text given on the command line.
    Literal(String),
}

impl InputSpec {
    pub fn label(&self) -> String {
        match self {
            Self::Csv(source) | Self::Text(source) => source.to_string(),
            Self::Literal(_) => "<text>".to_string(),
        }
    }

    fn stem(&self) -> String {
        match self {
            Self::Csv(source) | Self::Text(source) => source.stem(),
            Self::Literal(_) => "text".to_string(),
        }
    }
}

/// Settings shared by every input of a run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub normalize: NormalizeOptions,
    pub ingest: IngestOptions,
    pub formats: Vec<OutputFormat>,
    /// Files go here; `None` streams results to stdout.
    pub output_dir: Option<PathBuf>,
    /// Column name for rendering the SQL artifact as an `IN` predicate.
    pub sql_column: Option<String>,
    pub preview_rows: usize,
    pub show_progress: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            normalize: NormalizeOptions::default(),
            ingest: IngestOptions::default(),
            formats: vec![OutputFormat::Sql],
            output_dir: None,
            sql_column: None,
            preview_rows: 5,
            show_progress: false,
        }
    }
}

/// Processes every input and collects the outcomes.
pub fn run_inputs<W: Write>(inputs: &[InputSpec], config: &RunConfig, stdout: &mut W) -> RunResult {
    let mut cache = NormalizeCache::new();
    let prefixes = output_prefixes(inputs);
    let mut outcomes = Vec::with_capacity(inputs.len());

    for (input, prefix) in inputs.iter().zip(prefixes) {
        let label = input.label();
        let span = info_span!("input", source = %label);
        let _guard = span.enter();
        let mut outcome = InputOutcome::new(label);
        if let Err(err) = process_input(input, config, &mut cache, prefix, stdout, &mut outcome) {
            let message = format!("{err:#}");
            error!(error = %message, "input failed");
            outcome.error = Some(message);
        }
        outcomes.push(outcome);
    }

    let has_errors = outcomes.iter().any(|outcome| outcome.error.is_some());
    RunResult {
        options: config.normalize,
        inputs: outcomes,
        cache_hits: cache.hits(),
        has_errors,
    }
}

fn process_input<W: Write>(
    input: &InputSpec,
    config: &RunConfig,
    cache: &mut NormalizeCache,
    prefix: Option<String>,
    stdout: &mut W,
    outcome: &mut InputOutcome,
) -> Result<()> {
    // =========================================================================
    // Stage 1: Ingest
    // =========================================================================
    let ingest_start = Instant::now();
    let raw = match input {
        InputSpec::Csv(source) => {
            let loaded = load_csv(source, &config.ingest)?;
            outcome.rows = loaded.frame.height();
            outcome.preview = Some(loaded.frame.head(Some(config.preview_rows)));
            loaded.raw
        }
        InputSpec::Text(source) => {
            let raw = load_text(source, config.ingest.max_input_size)?;
            outcome.rows = raw.row_count();
            raw
        }
        InputSpec::Literal(text) => {
            let raw = RawInput::Text(text.clone());
            outcome.rows = raw.row_count();
            raw
        }
    };
    info!(
        rows = outcome.rows,
        duration_ms = ingest_start.elapsed().as_millis(),
        "ingest complete"
    );

    // =========================================================================
    // Stage 2: Normalize
    // =========================================================================
    let normalize_start = Instant::now();
    let result = if raw.is_empty() {
        debug!("blank input, skipping cache");
        normalize_with(&raw, &config.normalize)
    } else {
        let progress = spinner(config.show_progress);
        let result = cache.get_or_normalize(&raw, &config.normalize).clone();
        progress.finish_and_clear();
        result
    };
    for notice in &result.notices {
        warn!(%notice, "normalization notice");
    }
    if tracing::enabled!(Level::TRACE) {
        for id in &result.ids {
            trace!(id = redact_value(id), "clean contract id");
        }
    }
    info!(
        tokens = result.stats.tokens,
        unique = result.ids.len(),
        duplicates = result.stats.duplicates,
        duration_ms = normalize_start.elapsed().as_millis(),
        "normalize complete"
    );

    // =========================================================================
    // Stage 3: Output
    // =========================================================================
    let normalized = outcome.result.insert(result);
    if normalized.ids.is_empty() {
        return Ok(());
    }
    match &config.output_dir {
        Some(dir) => {
            let options = OutputOptions::new(dir, config.formats.clone())
                .with_prefix(prefix)
                .with_sql_column(config.sql_column.clone());
            outcome.outputs = write_outputs(&normalized.ids, &options)
                .with_context(|| format!("write outputs to {}", dir.display()))?;
            info!(
                csv = outcome.outputs.csv.is_some(),
                sql = outcome.outputs.sql.is_some(),
                "output complete"
            );
        }
        None => write_stdout(stdout, &normalized.ids, config)?,
    }
    Ok(())
}

fn write_stdout<W: Write>(stdout: &mut W, ids: &ResultSet, config: &RunConfig) -> Result<()> {
    for (pos, format) in config.formats.iter().enumerate() {
        if pos > 0 {
            writeln!(stdout).context("write stdout")?;
        }
        match format {
            OutputFormat::Csv => write_csv(stdout, ids)?,
            OutputFormat::Sql => write_sql(stdout, ids, config.sql_column.as_deref())?,
        }
    }
    stdout.flush().context("flush stdout")
}

/// File name prefixes: none for a single input, unique stems otherwise.
fn output_prefixes(inputs: &[InputSpec]) -> Vec<Option<String>> {
    if inputs.len() < 2 {
        return vec![None; inputs.len()];
    }
    let mut used = BTreeSet::new();
    inputs
        .iter()
        .map(|input| {
            let stem = input.stem();
            let mut candidate = stem.clone();
            let mut n = 2;
            while !used.insert(candidate.clone()) {
                candidate = format!("{stem}_{n}");
                n += 1;
            }
            Some(candidate)
        })
        .collect()
}

fn spinner(enabled: bool) -> ProgressBar {
    if !enabled {
        return ProgressBar::hidden();
    }
    let bar = ProgressBar::new_spinner();
    bar.set_message("Processing and cleaning contract IDs...");
    bar.enable_steady_tick(Duration::from_millis(80));
    bar
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn single_input_has_no_prefix() {
        let inputs = [InputSpec::Literal("1".to_string())];
        assert_eq!(output_prefixes(&inputs), vec![None]);
    }

    #[test]
    fn repeated_stems_get_numbered() {
        let inputs = [
            InputSpec::Csv(InputSource::from_arg(Path::new("a/ids.csv"))),
            InputSpec::Csv(InputSource::from_arg(Path::new("b/ids.csv"))),
            InputSpec::Text(InputSource::Stdin),
        ];
        assert_eq!(
            output_prefixes(&inputs),
            vec![
                Some("ids".to_string()),
                Some("ids_2".to_string()),
                Some("stdin".to_string()),
            ]
        );
    }
}
