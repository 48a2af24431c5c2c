//! Identity matching against the configured team
//!
//! A value is attributable when it is a string containing `@`, matches a
//! configured member exactly (case-sensitive), and was not found under a
//! custom-field path. Custom fields hold free-form text that can look like an
//! identity without being one.

use crate::config::Config;
use crate::error::{Result, StoryshareError};
use serde_json::Value;
use std::collections::BTreeSet;

/// Set of known contributors plus the opaque path prefix
#[derive(Debug, Clone)]
pub struct Team {
    members: BTreeSet<String>,
    custom_field_prefix: String,
}

impl Team {
    /// Create a team matcher from explicit members
    pub fn new<I, S>(members: I, custom_field_prefix: impl Into<String>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            members: members.into_iter().map(Into::into).collect(),
            custom_field_prefix: custom_field_prefix.into(),
        }
    }

    /// Build the matcher for a run, failing when nobody is configured
    pub fn from_config(config: &Config) -> Result<Self> {
        if config.team.members.is_empty() {
            return Err(StoryshareError::EmptyTeam);
        }
        Ok(Self {
            members: config.team.members.clone(),
            custom_field_prefix: config.fields.custom_field_prefix.clone(),
        })
    }

    /// Configured members in lexicographic order
    pub fn members(&self) -> impl Iterator<Item = &str> {
        self.members.iter().map(String::as_str)
    }

    /// Number of configured members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// True when no members are configured
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// True when `path` lies inside a custom field
    pub fn is_opaque(&self, path: &str) -> bool {
        path.starts_with(&self.custom_field_prefix)
    }

    /// Check a candidate string against the member set
    pub fn matches(&self, candidate: &str) -> bool {
        candidate.contains('@') && self.members.contains(candidate)
    }

    /// Check a scalar found at `path`; returns the identity when trackable
    pub fn identify<'v>(&self, path: &str, value: &'v Value) -> Option<&'v str> {
        if self.is_opaque(path) {
            return None;
        }
        match value {
            Value::String(candidate) if self.matches(candidate) => Some(candidate.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn team() -> Team {
        Team::new(["a@x.com", "b@x.com"], "fields/customfield")
    }

    #[test]
    fn test_matches_exact_member() {
        let team = team();
        assert!(team.matches("a@x.com"));
        assert!(!team.matches("A@x.com")); // case-sensitive
        assert!(!team.matches("c@x.com"));
    }

    #[test]
    fn test_requires_at_sign() {
        // Even a configured value without '@' never matches
        let team = Team::new(["builder"], "fields/customfield");
        assert!(!team.matches("builder"));
    }

    #[test]
    fn test_identify_rejects_custom_fields() {
        let team = team();
        let value = json!("a@x.com");
        assert_eq!(team.identify("fields/assignee/name", &value), Some("a@x.com"));
        assert_eq!(team.identify("fields/customfield_10100/name", &value), None);
    }

    #[test]
    fn test_identify_rejects_non_strings() {
        let team = team();
        assert_eq!(team.identify("fields/assignee/name", &json!(null)), None);
        assert_eq!(team.identify("fields/assignee/name", &json!(42)), None);
        assert_eq!(
            team.identify("fields/assignee/name", &json!(["a@x.com"])),
            None
        );
    }

    #[test]
    fn test_from_config_empty_team() {
        let config = Config::default();
        assert!(matches!(
            Team::from_config(&config),
            Err(StoryshareError::EmptyTeam)
        ));
    }

    #[test]
    fn test_members_sorted() {
        let team = Team::new(["z@x.com", "a@x.com"], "fields/customfield");
        let members: Vec<_> = team.members().collect();
        assert_eq!(members, vec!["a@x.com", "z@x.com"]);
        assert_eq!(team.len(), 2);
    }
}
