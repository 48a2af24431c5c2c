//! TOML configuration for team membership and tracker field layout
//!
//! Every setting has a default matching a stock Jira Server install, so an
//! empty file (or no file at all) is a valid configuration.
//!
//! # Example TOML
//! ```toml
//! [team]
//! members = ["member.one@example.com", "member.two@example.com"]
//!
//! [fields]
//! story_points = "customfield_10002"
//! sub_item_label = "Sub-task"
//!
//! [allocation]
//! rounding = "half-even"
//! ```

use crate::allocation::Rounding;
use crate::error::{Result, StoryshareError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fs;
use std::path::Path;

/// Complete run configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub team: TeamConfig,
    pub fields: FieldLayout,
    pub allocation: AllocationConfig,
}

/// Known contributors whose occurrences are tracked
#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct TeamConfig {
    pub members: BTreeSet<String>,
}

/// Where the interesting values live inside an issue record
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct FieldLayout {
    /// Key under `fields` holding the story point estimate
    pub story_points: String,

    /// Paths starting with this prefix are opaque and never walked
    pub custom_field_prefix: String,

    /// Mapping key whose value is an identity (or the issue type label)
    pub identity_key: String,

    /// Path of the mapping whose identity key carries the issue type
    pub issue_type_path: String,

    /// Issue type label marking a sub-item
    pub sub_item_label: String,
}

impl Default for FieldLayout {
    fn default() -> Self {
        Self {
            story_points: "customfield_10002".to_string(),
            custom_field_prefix: "fields/customfield".to_string(),
            identity_key: "name".to_string(),
            issue_type_path: "fields/issuetype".to_string(),
            sub_item_label: "Sub-task".to_string(),
        }
    }
}

/// Credit splitting options
#[derive(Debug, Clone, Copy, Default, Deserialize, Serialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AllocationConfig {
    pub rounding: Rounding,
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_toml<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Add members given outside the config file (e.g. `--member`)
    pub fn add_members<I, S>(&mut self, members: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for member in members {
            let member = member.into();
            Self::check_member(&member)?;
            self.team.members.insert(member);
        }
        Ok(())
    }

    fn validate(&self) -> Result<()> {
        for member in &self.team.members {
            Self::check_member(member)?;
        }

        let fields = &self.fields;
        for (name, value) in [
            ("story_points", &fields.story_points),
            ("custom_field_prefix", &fields.custom_field_prefix),
            ("identity_key", &fields.identity_key),
            ("issue_type_path", &fields.issue_type_path),
        ] {
            if value.is_empty() {
                return Err(StoryshareError::InvalidConfig(format!(
                    "fields.{} must not be empty",
                    name
                )));
            }
        }

        Ok(())
    }

    // A member without '@' can never pass the identity pre-filter.
    fn check_member(member: &str) -> Result<()> {
        if member.contains('@') {
            Ok(())
        } else {
            Err(StoryshareError::InvalidConfig(format!(
                "team member '{}' is not an email-style identity",
                member
            )))
        }
    }
}
