//! CLI argument definitions for the descriptor deriver.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "uic",
    version,
    about = "UI component descriptor deriver",
    long_about = "Derive runtime descriptors from declarative UI component specs.\n\n\
                  Each spec is classified field by field and compiled into a\n\
                  structural-equivalence plan, copy plan, state-container shape,\n\
                  and state-update descriptors."
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
    /// Derive a descriptor from a component spec and emit it as JSON.
    Derive(DeriveArgs),

    /// Check component specs without emitting descriptors.
    Check(CheckArgs),
}

#[derive(Parser)]
pub struct DeriveArgs {
    /// Path to the component spec (JSON).
    #[arg(value_name = "SPEC")]
    pub spec: PathBuf,

    /// Write the descriptor to a file instead of stdout.
    ///
    /// With an output file the field-layout summary is printed to stdout;
    /// without one, stdout carries only the descriptor JSON.
    #[arg(long = "output", value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Emit compact JSON instead of pretty-printed.
    #[arg(long = "compact")]
    pub compact: bool,
}

#[derive(Parser)]
pub struct CheckArgs {
    /// Component spec files to check (JSON).
    #[arg(value_name = "SPEC", required = true)]
    pub specs: Vec<PathBuf>,
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
