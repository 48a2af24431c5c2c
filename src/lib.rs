//! Storyshare - per-contributor attribution of issue roles and story points
//!
//! This library walks issue tracker snapshots (Jira-style JSON), finds every
//! appearance of a configured team member, and splits each issue's story
//! points across everyone who was ever assigned to it.

pub mod allocation;
pub mod analysis;
pub mod classifier;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod json_output;
pub mod snapshot;
pub mod summary;
pub mod team;
pub mod text_output;
pub mod walker;

pub use analysis::Analysis;
pub use config::Config;
pub use error::{Result, StoryshareError};
pub use summary::{IdentitySummary, TeamReport};
