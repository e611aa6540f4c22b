//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "clientview",
    version,
    about = "Inspect client version history and list disclosure state",
    long_about = "Load a client's version history from a JSON file, pick the active \n\
                  version the way the details view does and show its fields with \n\
                  long lists truncated to their initial caps."
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

    /// Log output format.
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
    /// Show the timeline, the selected version and its lists.
    Show(ShowArgs),

    /// Print the disclosure state for a set of counts.
    Disclosure(DisclosureArgs),
}

#[derive(Parser)]
pub struct ShowArgs {
    /// JSON file holding an array of version snapshots.
    #[arg(value_name = "VERSIONS_JSON")]
    pub versions: PathBuf,

    /// Snapshot id to select, as a `sourceFlowId` route parameter would.
    #[arg(long = "anchor", value_name = "ID")]
    pub anchor: Option<String>,

    /// Subject id to announce to the store before loading.
    #[arg(long = "subject", value_name = "CLIENT_ID")]
    pub subject: Option<String>,

    /// Select a timeline entry by index after loading.
    #[arg(long = "select", value_name = "INDEX")]
    pub select: Option<usize>,

    /// Toggle a list once (repeat to toggle several lists).
    #[arg(long = "expand", value_name = "LIST")]
    pub expand: Vec<String>,

    /// Settings file (TOML) with disclosure caps.
    #[arg(long = "config", value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Sort the input newest first instead of trusting its order.
    #[arg(long = "sort")]
    pub sort: bool,
}

#[derive(Parser)]
pub struct DisclosureArgs {
    /// Number of items in the list.
    pub total: usize,
    /// Number of items currently shown.
    pub shown: usize,
    /// Number of items shown before any expansion.
    pub initial_cap: usize,
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
