//! CLI argument definitions for `cgpacalc`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use cgpa_calc::config::ConfigOverrides;
use logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `logger::Level` for runtime use.
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
        /// Optional configuration key to display (e.g., `level`, `data_file`, `default_grade`)
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
pub enum SemesterSubcommand {
    /// Add a semester at the end of the record
    Add {
        /// Semester name (defaults to "Semester N")
        #[arg(long)]
        name: Option<String>,
    },
    /// Remove a semester and all of its courses
    Remove {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        id: String,
    },
    /// Rename a semester
    Rename {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        id: String,
        /// New name
        #[arg(value_name = "NAME")]
        name: String,
    },
    /// Remove every course from a semester
    Clear {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        id: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum CourseSubcommand {
    /// Add a course to a semester
    ///
    /// Grade and units default to the `[courses]` config section.
    Add {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        semester_id: String,
        /// Course title (defaults to "Course N")
        #[arg(long)]
        title: Option<String>,
        /// Grade letter A-F; empty for no grade, anything else counts as F
        #[arg(long, allow_hyphen_values = true)]
        grade: Option<String>,
        /// Credit units; decimals are truncated, invalid input becomes 0
        #[arg(long, allow_hyphen_values = true)]
        unit: Option<String>,
        /// Start with no grade and 0 units instead of the configured defaults
        #[arg(long)]
        blank: bool,
    },
    /// Remove a course
    Remove {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        semester_id: String,
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
    },
    /// Change a course's title, grade or units
    Edit {
        /// Semester id
        #[arg(value_name = "SEMESTER_ID")]
        semester_id: String,
        /// Course id
        #[arg(value_name = "COURSE_ID")]
        course_id: String,
        /// New title
        #[arg(long)]
        title: Option<String>,
        /// New grade letter; an empty value clears the grade
        #[arg(long, allow_hyphen_values = true)]
        grade: Option<String>,
        /// New credit units
        #[arg(long, allow_hyphen_values = true)]
        unit: Option<String>,
    },
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
    /// Add, remove, rename or clear semesters.
    Semester {
        #[command(subcommand)]
        subcommand: SemesterSubcommand,
    },
    /// Add, remove or edit courses.
    Course {
        #[command(subcommand)]
        subcommand: CourseSubcommand,
    },
    /// Print the CGPA, classification, semesters and GPA trend.
    Show {
        /// Print the stored JSON document instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Generate a report of the record.
    ///
    /// Writes to the given file or to `cgpa-report.<ext>` in the configured reports directory.
    Report {
        /// Output file path (optional; defaults to the reports directory)
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,

        /// Report format: markdown (md), html, or text
        #[arg(short, long, value_name = "FORMAT", default_value = "markdown")]
        format: String,

        /// Report heading
        #[arg(long)]
        title: Option<String>,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "cgpacalc",
    about = "Track semester GPAs and CGPA on the 5-point scale",
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
    /// Override config logging level
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config record data file
    #[arg(long = "config-data-file", value_name = "PATH")]
    pub config_data_file: Option<PathBuf>,

    /// Override config record data file (short form)
    #[arg(long = "data-file", value_name = "PATH")]
    pub data_file: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--data-file`) take precedence over long-form
    /// flags (e.g., `--config-data-file`) when both are provided.
    ///
    /// # Returns
    /// A `ConfigOverrides` struct with values from CLI flags, where `None` means no override.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self
                .config_log_file
                .as_ref()
                .map(|p| p.to_string_lossy().to_string()),
            verbose: self.config_verbose,
            data_file: Self::short_or_long(self.data_file.as_ref(), self.config_data_file.as_ref()),
            reports_dir: Self::short_or_long(
                self.reports_dir.as_ref(),
                self.config_reports_dir.as_ref(),
            ),
        }
    }

    fn short_or_long(short: Option<&PathBuf>, long: Option<&PathBuf>) -> Option<String> {
        short
            .or(long)
            .map(|p| p.to_string_lossy().to_string())
    }
}
