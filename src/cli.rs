//! CLI argument parsing for storyshare

use crate::allocation::Rounding;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for the team report
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text format (default)
    Text,
    /// JSON format for machine parsing
    Json,
    /// CSV format for spreadsheet analysis
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "storyshare")]
#[command(version)]
#[command(about = "Attribute issue roles and story points to team members", long_about = None)]
pub struct Cli {
    /// Issue snapshot: a JSON array of issues or a search response with "issues"
    #[arg(value_name = "ISSUES")]
    pub issues: PathBuf,

    /// TOML configuration file (team members, field layout, rounding)
    #[arg(short = 'C', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Team member identity to track (repeatable, added to the config's members)
    #[arg(short = 'm', long = "member", value_name = "ID")]
    pub members: Vec<String>,

    /// Output format
    #[arg(long = "format", value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Write the report to a file instead of stdout
    #[arg(short = 'o', long = "output", value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Rounding mode for split story points (overrides the config file)
    #[arg(long = "rounding", value_enum, value_name = "MODE")]
    pub rounding: Option<Rounding>,

    /// Enable debug logging to stderr
    #[arg(long = "debug")]
    pub debug: bool,
}
