//! CLI argument definitions for the lineage tool.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "lineage",
    version,
    about = "Turn a genealogy spreadsheet into a family tree JSON and serve it",
    long_about = "Turn a headerless genealogy table (parent, relative, relative, ...) into a\n\
                  nested family tree JSON document, and serve it over HTTP.\n\n\
                  Reads CSV/TSV files and spreadsheet workbooks (xlsx, xls, xlsb, ods)."
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

    /// Configuration file (default: ./lineage.toml when present).
    #[arg(long = "config", value_name = "PATH", global = true)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Convert a genealogy table into the family tree JSON artifact.
    Convert(ConvertArgs),

    /// Build the tree and print it as an outline without writing anything.
    Inspect(InspectArgs),

    /// Serve the JSON artifact and static site files over HTTP.
    Serve(ServeArgs),
}

/// Where to read the table from.
#[derive(Parser)]
pub struct InputArgs {
    /// Genealogy table (default: geneology.xlsx).
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Worksheet to read from a workbook (default: first sheet).
    #[arg(long = "sheet", value_name = "NAME")]
    pub sheet: Option<String>,

    /// Input format (default: detected from the file extension).
    #[arg(long = "format", value_enum)]
    pub format: Option<TableFormatArg>,
}

#[derive(Parser)]
pub struct ConvertArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// JSON artifact to write (default: family.json).
    #[arg(short = 'o', long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Build and report without writing the artifact.
    #[arg(long = "dry-run")]
    pub dry_run: bool,

    /// List every skipped row in the summary.
    #[arg(long = "show-skipped")]
    pub show_skipped: bool,
}

#[derive(Parser)]
pub struct InspectArgs {
    #[command(flatten)]
    pub input: InputArgs,

    /// Levels to print below each root.
    #[arg(long = "max-depth", value_name = "N")]
    pub max_depth: Option<usize>,
}

#[derive(Parser)]
pub struct ServeArgs {
    /// Interface to bind (default: 0.0.0.0).
    #[arg(long = "host", value_name = "HOST")]
    pub host: Option<String>,

    /// Port to listen on (default: 8000).
    #[arg(short = 'p', long = "port", value_name = "PORT")]
    pub port: Option<u16>,

    /// Directory to serve static files from (default: current directory).
    #[arg(long = "web-root", value_name = "DIR")]
    pub web_root: Option<PathBuf>,

    /// JSON artifact to serve (default: family.json).
    #[arg(long = "artifact", value_name = "PATH")]
    pub artifact: Option<PathBuf>,

    /// URL path of the JSON artifact (default: /family.json).
    #[arg(long = "route", value_name = "PATH")]
    pub route: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum TableFormatArg {
    Csv,
    Tsv,
    Workbook,
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
