// src/cli.rs

//! CLI argument parsing using `clap`.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Command-line arguments for `stepdag`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "stepdag",
    version,
    about = "Order and simulate precedence-constrained steps across a pool of workers.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the config file (TOML).
    ///
    /// Default: `Stepdag.toml` in the current working directory, if present.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// File with `Step X must be finished before step Y can begin.` lines,
    /// or `-` for stdin.
    ///
    /// Default: stdin, unless the config file lists `[graph].constraints`.
    #[arg(long, value_name = "PATH")]
    pub input: Option<PathBuf>,

    /// Number of simulated workers (overrides `[schedule].workers`).
    #[arg(long, value_name = "N")]
    pub workers: Option<usize>,

    /// Base duration added to every step (overrides `[schedule].base_offset`).
    #[arg(long, value_name = "N")]
    pub base_offset: Option<u64>,

    /// Which result(s) to compute.
    #[arg(long, value_enum, default_value_t = Mode::Both)]
    pub mode: Mode,

    /// Print the second-by-second worker table for the timed run.
    #[arg(long)]
    pub trace: bool,

    /// Fail on input lines that are not instructions instead of skipping them.
    #[arg(long)]
    pub strict: bool,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `STEPDAG_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Parse + validate, print the graph and its critical path, but don't
    /// run the scheduler.
    #[arg(long)]
    pub dry_run: bool,
}

/// Which schedule(s) to produce.
#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Single-worker completion order only.
    Order,
    /// Timed multi-worker simulation only.
    Timed,
    /// Both.
    Both,
}

impl Mode {
    pub fn wants_order(self) -> bool {
        matches!(self, Mode::Order | Mode::Both)
    }

    pub fn wants_timed(self) -> bool {
        matches!(self, Mode::Timed | Mode::Both)
    }
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}
