//! JSON output format for team reports

use crate::summary::TeamReport;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One identity row
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonIdentity {
    pub identity: String,
    /// Occurrence count per role
    pub roles: BTreeMap<String, usize>,
    pub occurrences: usize,
    pub total_story_points: f64,
    pub no_roles_played: bool,
    /// Top-level issue entries
    pub issues: Vec<String>,
    pub sub_tasks: Vec<String>,
}

/// Run totals
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonSummary {
    pub issues_processed: usize,
    pub issues_skipped: usize,
    pub total_occurrences: usize,
    pub contributors: usize,
}

/// Root JSON output structure
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct JsonOutput {
    /// Format version identifier
    pub version: String,
    /// Format name
    pub format: String,
    pub summary: JsonSummary,
    /// Identities in lexicographic order
    pub identities: Vec<JsonIdentity>,
}

impl JsonOutput {
    pub fn from_report(report: &TeamReport) -> Self {
        let identities = report
            .summaries
            .iter()
            .map(|(identity, summary)| JsonIdentity {
                identity: identity.clone(),
                roles: summary.roles.clone(),
                occurrences: summary.occurrences(),
                total_story_points: summary.total_points,
                no_roles_played: summary.no_roles_played(),
                issues: summary.issues.clone(),
                sub_tasks: summary.sub_items.clone(),
            })
            .collect();

        Self {
            version: env!("CARGO_PKG_VERSION").to_string(),
            format: "storyshare-json-v1".to_string(),
            summary: JsonSummary {
                issues_processed: report.issues_processed,
                issues_skipped: report.issues_skipped,
                total_occurrences: report.total_occurrences,
                contributors: report.contributor_count(),
            },
            identities,
        }
    }

    /// Serialize to pretty-printed JSON
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::IdentitySummary;

    #[test]
    fn test_json_from_report() {
        let mut report = TeamReport {
            issues_processed: 2,
            total_occurrences: 1,
            ..Default::default()
        };
        let mut active = IdentitySummary {
            total_points: 3.0,
            issues: vec!["ABC-1 (3)".to_string()],
            ..Default::default()
        };
        active.roles.insert("assignee".to_string(), 1);
        report.summaries.insert("a@x.com".to_string(), active);
        report
            .summaries
            .insert("b@x.com".to_string(), IdentitySummary::default());

        let output = JsonOutput::from_report(&report);
        assert_eq!(output.format, "storyshare-json-v1");
        assert_eq!(output.summary.contributors, 1);
        assert_eq!(output.identities[0].identity, "a@x.com");
        assert!(!output.identities[0].no_roles_played);
        assert!(output.identities[1].no_roles_played);

        let json = output.to_json().unwrap();
        let parsed: JsonOutput = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, output);
    }
}
