use std::io::{self, IsTerminal};

use anyhow::{Result, bail};
use cid_cli::pipeline::{InputSpec, RunConfig, run_inputs};
use cid_cli::types::RunResult;
use cid_ingest::{IngestOptions, InputSource};
use cid_model::{CoercionFallback, ExtractionPolicy, NormalizeOptions};
use cid_output::OutputFormat;
use tracing::info;

use crate::cli::{CsvArgs, NormalizeArgs, OutputArgs, OutputFormatArg, PolicyArg, TextArgs};

pub fn run_csv(args: &CsvArgs) -> Result<RunResult> {
    let stdin_count = args
        .inputs
        .iter()
        .filter(|path| path.as_os_str() == "-")
        .count();
    if stdin_count > 1 {
        bail!("standard input (`-`) can only be given once");
    }
    let inputs: Vec<InputSpec> = args
        .inputs
        .iter()
        .map(|path| InputSpec::Csv(InputSource::from_arg(path)))
        .collect();
    let ingest = IngestOptions::default().with_column(args.column.clone());
    let config = run_config(&args.normalize, &args.output, ingest);
    Ok(run(&inputs, &config))
}

pub fn run_text(args: &TextArgs) -> Result<RunResult> {
    let input = match (&args.text, &args.input) {
        (Some(text), _) => InputSpec::Literal(text.clone()),
        (None, Some(path)) => InputSpec::Text(InputSource::from_arg(path)),
        (None, None) => InputSpec::Text(InputSource::Stdin),
    };
    let config = run_config(&args.normalize, &args.output, IngestOptions::default());
    Ok(run(&[input], &config))
}

fn run(inputs: &[InputSpec], config: &RunConfig) -> RunResult {
    info!(
        inputs = inputs.len(),
        options = config.normalize.tag(),
        "starting run"
    );
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_inputs(inputs, config, &mut handle)
}

fn run_config(normalize: &NormalizeArgs, output: &OutputArgs, ingest: IngestOptions) -> RunConfig {
    RunConfig {
        normalize: normalize_options(normalize),
        ingest: ingest.with_max_input_size(output.max_size_mb.saturating_mul(1024 * 1024)),
        formats: output_formats(output.format, output.output_dir.is_some()),
        output_dir: output.output_dir.clone(),
        sql_column: output.sql_column.clone(),
        preview_rows: output.preview_rows,
        show_progress: !output.no_summary && io::stderr().is_terminal(),
    }
}

fn normalize_options(args: &NormalizeArgs) -> NormalizeOptions {
    let policy = match args.policy {
        PolicyArg::Digits => ExtractionPolicy::DigitRuns,
        PolicyArg::Delimiters => ExtractionPolicy::DelimiterSet,
    };
    let fallback = if args.keep_unparsed {
        CoercionFallback::KeepString
    } else {
        CoercionFallback::Drop
    };
    NormalizeOptions::new()
        .with_policy(policy)
        .with_fallback(fallback)
}

/// Both files when writing to a directory, only the SQL literal on stdout.
fn output_formats(format: Option<OutputFormatArg>, to_dir: bool) -> Vec<OutputFormat> {
    match format {
        Some(OutputFormatArg::Csv) => vec![OutputFormat::Csv],
        Some(OutputFormatArg::Sql) => vec![OutputFormat::Sql],
        Some(OutputFormatArg::Both) => vec![OutputFormat::Csv, OutputFormat::Sql],
        None if to_dir => vec![OutputFormat::Csv, OutputFormat::Sql],
        None => vec![OutputFormat::Sql],
    }
}
