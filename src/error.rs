//! Error types for storyshare
//!
//! Only conditions that stop a run are errors. Per-issue problems (missing
//! change log, absent credit, unknown role segments) are logged and carried
//! through the report instead.

use thiserror::Error;

/// Errors that can occur while loading input or configuration
#[derive(Error, Debug)]
pub enum StoryshareError {
    #[error("Malformed input: {0}")]
    MalformedInput(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("No team members configured (use --member or [team] members in the config file)")]
    EmptyTeam,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Result type for storyshare operations
pub type Result<T> = std::result::Result<T, StoryshareError>;
