//! CLI argument definitions for the contract ID cleaner.

use std::path::PathBuf;

use cid_model::DEFAULT_ID_COLUMN;
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "cidclean",
    version,
    about = "Contract ID cleaner - extract, dedupe and export contract IDs",
    long_about = "Extract contract IDs from a CSV column or free text.\n\n\
                  IDs are reduced to their digits, deduplicated in first-seen order and\n\
                  exported as a 'Contract ID Limpo' CSV or a SQL IN-clause literal."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,

    /// Allow contract ID values to appear in trace logs.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Clean the contract ID column of one or more CSV files.
    Csv(CsvArgs),

    /// Clean contract IDs pasted as free text.
    Text(TextArgs),
}

#[derive(Parser)]
pub struct CsvArgs {
    /// CSV files to process (`-` reads standard input).
    #[arg(value_name = "FILE", required = true)]
    pub inputs: Vec<PathBuf>,

    /// Name of the column holding the contract IDs (exact match).
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_ID_COLUMN)]
    pub column: String,

    #[command(flatten)]
    pub normalize: NormalizeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Parser)]
pub struct TextArgs {
    /// Text file to read (default: standard input).
    #[arg(value_name = "FILE", conflicts_with = "text")]
    pub input: Option<PathBuf>,

    /// Contract IDs given directly on the command line.
    #[arg(long = "text", value_name = "TEXT")]
    pub text: Option<String>,

    #[command(flatten)]
    pub normalize: NormalizeArgs,

    #[command(flatten)]
    pub output: OutputArgs,
}

#[derive(Args)]
pub struct NormalizeArgs {
    /// How tokens are cut out of the text.
    #[arg(long = "policy", value_enum, default_value = "digits")]
    pub policy: PolicyArg,

    /// Keep string values for the whole batch when a token is not an integer.
    ///
    /// By default such tokens are dropped. With this flag the batch keeps the
    /// original (trimmed) token text instead, so leading zeros survive.
    #[arg(long = "keep-unparsed")]
    pub keep_unparsed: bool,
}

#[derive(Args)]
pub struct OutputArgs {
    /// Output to generate (default: both with --output-dir, sql otherwise).
    #[arg(long = "format", value_enum)]
    pub format: Option<OutputFormatArg>,

    /// Directory for the generated files. Without it results go to stdout.
    #[arg(long = "output-dir", value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Render the SQL output as `NAME IN (...)` instead of a bare list.
    #[arg(long = "sql-column", value_name = "NAME")]
    pub sql_column: Option<String>,

    /// Number of input rows shown in the summary preview.
    #[arg(long = "preview-rows", value_name = "N", default_value_t = 5)]
    pub preview_rows: usize,

    /// Do not print the summary tables.
    #[arg(long = "no-summary")]
    pub no_summary: bool,

    /// Write a JSON run report to this path.
    #[arg(long = "report-json", value_name = "PATH")]
    pub report_json: Option<PathBuf>,

    /// Refuse inputs larger than this many megabytes.
    #[arg(long = "max-size-mb", value_name = "MB", default_value_t = 100)]
    pub max_size_mb: u64,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum PolicyArg {
    /// Any run of non-digit characters separates IDs.
    Digits,
    /// Only whitespace, comma and semicolon separate IDs.
    Delimiters,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutputFormatArg {
    Csv,
    Sql,
    Both,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
