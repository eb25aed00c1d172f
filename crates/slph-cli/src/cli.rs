//! CLI argument definitions for the phone hasher.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;
use slph_ingest::DEFAULT_PHONE_COLUMN;

#[derive(Parser)]
#[command(
    name = "slph",
    version,
    about = "Sri Lanka phone hasher - SHA-256 phone lists for Custom Audiences",
    long_about = "Normalize Sri Lankan phone numbers to 94XXXXXXXXX and hash them with SHA-256.\n\n\
                  Reads a CSV with a `phone` column and writes a single-column\n\
                  `hashed_phone` CSV ready for a Custom Audience upload."
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

    /// Prefix pretty and compact log lines with a timestamp.
    #[arg(long = "log-timestamps", global = true)]
    pub log_timestamps: bool,

    /// Allow raw phone numbers in trace logs and rejection exports.
    #[arg(long = "log-data", global = true)]
    pub log_data: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Normalize and hash the phone column of a CSV file.
    Hash(HashArgs),

    /// Normalize and hash individual values given on the command line.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct HashArgs {
    /// CSV file containing a phone column.
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Output file (default: ./fb_custom_audience_hashed.csv).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Name of the column holding phone numbers.
    #[arg(long = "column", value_name = "NAME", default_value = DEFAULT_PHONE_COLUMN)]
    pub column: String,

    /// Number of hashed rows to show in the preview table.
    #[arg(long = "preview", value_name = "ROWS", default_value_t = 20)]
    pub preview: usize,

    /// Write dropped rows to a CSV for inspection.
    ///
    /// Phone values are redacted unless --log-data is also given.
    #[arg(long = "rejections", value_name = "PATH")]
    pub rejections: Option<PathBuf>,

    /// Write a JSON run report.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Process and report without writing the hashed CSV.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Phone numbers to check.
    #[arg(value_name = "VALUE", required = true)]
    pub values: Vec<String>,
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
