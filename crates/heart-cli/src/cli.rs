//! CLI argument definitions for the heart-disease ETL.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "heart-etl",
    version,
    about = "Merge the four institute heart-disease files into one cleaned CSV",
    long_about = "Merge the raw cleveland, hungarian, switzerland and long-beach-va\n\
                  fixed-width record files into a single data.csv, dropping\n\
                  administrative columns, sparse columns and incomplete rows."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
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
}

#[derive(Subcommand)]
pub enum Command {
    /// Merge the four raw institute files into one cleaned CSV.
    Merge(MergeArgs),

    /// List the 76 fields of a raw institute record.
    Columns,
}

#[derive(Parser)]
pub struct MergeArgs {
    /// Directory holding the raw .data files.
    #[arg(value_name = "DATA_DIR", default_value = "data")]
    pub data_dir: PathBuf,

    /// Destination CSV path (default: <DATA_DIR>/data.csv).
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,
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
