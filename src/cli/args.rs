//! CLI argument definitions for `SeatPlan`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use seatplan::config::ConfigOverrides;
use seatplan::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts
/// to lowercase strings for config storage and to `logger::Level` for
/// runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `out_dir`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Allocate exam candidates to hall seats for one session.
    ///
    /// Loads one or more student roster CSV files plus hall and schedule
    /// CSVs, packs each slot's cohorts into halls and exports the
    /// seating table.
    Allocate {
        /// Paths to student roster CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        student_files: Vec<PathBuf>,

        /// Path to the hall capacity CSV file
        #[arg(long, value_name = "FILE")]
        halls: PathBuf,

        /// Path to the exam schedule CSV file
        #[arg(long, value_name = "FILE")]
        schedule: PathBuf,

        /// Session to allocate (e.g., FN or AN)
        #[arg(short, long, value_name = "SESSION")]
        session: String,

        /// Exam type label stamped into every output row
        #[arg(long, value_name = "TYPE", default_value = "Internal")]
        exam_type: String,

        /// Output file path (optional; defaults to config `out_dir`)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Export format: csv or markdown (md)
        #[arg(short, long, value_name = "FORMAT", default_value = "csv")]
        format: String,
    },
    /// Report student counts per slot and department.
    SlotReport {
        /// Paths to student roster CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        student_files: Vec<PathBuf>,

        /// Optional schedule CSV used for per-department exam counts
        #[arg(long, value_name = "FILE")]
        schedule: Option<PathBuf>,

        /// Output file path (optional; prints to stdout when omitted)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// List students whose department maps to no exam slot.
    Validate {
        /// Paths to student roster CSV files (supports multiple)
        #[arg(value_name = "FILES", num_args = 1..)]
        student_files: Vec<PathBuf>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "seatplan",
    about = "SeatPlan command-line interface",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config output directory
    #[arg(long = "config-out-dir", value_name = "DIR")]
    pub config_out_dir: Option<PathBuf>,

    /// Override config output directory (short form)
    #[arg(long = "out-dir", value_name = "DIR")]
    pub out_dir: Option<PathBuf>,

    /// Override config seating rules file
    #[arg(long = "config-rules-file", value_name = "PATH")]
    pub config_rules_file: Option<PathBuf>,

    /// Override config seating rules file (short form)
    #[arg(long = "rules", value_name = "PATH")]
    pub rules: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--rules`) take precedence over long-form
    /// flags (e.g., `--config-rules-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where
    /// `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string().to_lowercase()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            out_dir: self
                .out_dir
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_out_dir
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
            rules_file: self
                .rules
                .as_ref()
                .map(|p| p.to_string_lossy().to_string())
                .or_else(|| {
                    self.config_rules_file
                        .as_ref()
                        .map(|p| p.to_string_lossy().to_string())
                }),
        }
    }
}
