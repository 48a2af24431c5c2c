//! One attribution run over a complete issue snapshot
//!
//! All run state (occurrences, classification, allocation) is created inside
//! [`Analysis::run`] and dropped with it, so repeated runs in one process
//! never share anything.

use crate::allocation::Allocation;
use crate::classifier::ItemClassifier;
use crate::config::{Config, FieldLayout};
use crate::error::Result;
use crate::snapshot;
use crate::summary::{Aggregator, TeamReport};
use crate::team::Team;
use crate::walker::{has_histories, IssueContext, Occurrence, TreeWalker};
use serde_json::Value;

/// A configured attribution run
#[derive(Debug, Clone)]
pub struct Analysis {
    config: Config,
    team: Team,
}

impl Analysis {
    /// Prepare a run; fails when the team is empty
    pub fn new(config: Config) -> Result<Self> {
        let team = Team::from_config(&config)?;
        Ok(Self { config, team })
    }

    pub fn team(&self) -> &Team {
        &self.team
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Walk, allocate and aggregate every issue in the snapshot
    pub fn run(&self, issues: &[Value]) -> TeamReport {
        let layout = &self.config.fields;
        let walker = TreeWalker::new(&self.team, layout);
        let mut classifier = ItemClassifier::new();
        let mut occurrences: Vec<Occurrence> = Vec::new();
        let mut issues_processed = 0;
        let mut issues_skipped = 0;

        for (index, issue) in issues.iter().enumerate() {
            let Some(key) = issue.get("key").and_then(Value::as_str) else {
                tracing::warn!(index, "skipping issue without a string 'key'");
                issues_skipped += 1;
                continue;
            };

            if !has_histories(issue) {
                tracing::info!(issue = key, "no changelog or histories available");
            }

            let ctx = IssueContext::new(key, credit_value(issue, key, layout));
            occurrences.extend(walker.walk(issue, &ctx, &mut classifier));
            issues_processed += 1;
        }

        let allocation = Allocation::from_occurrences(&occurrences, self.config.allocation.rounding);
        let mut aggregator = Aggregator::new(&self.team, &classifier, &allocation);
        for occurrence in &occurrences {
            aggregator.record(occurrence);
        }

        let report = TeamReport {
            summaries: aggregator.finish(),
            issues_processed,
            issues_skipped,
            total_occurrences: occurrences.len(),
        };

        tracing::info!(
            contributors = report.contributor_count(),
            issues = issues_processed,
            skipped = issues_skipped,
            occurrences = report.total_occurrences,
            "attribution complete"
        );

        report
    }

    /// Run over a parsed snapshot document (bare array or search response)
    pub fn run_document(&self, document: Value) -> Result<TeamReport> {
        let issues = snapshot::issues_from_document(document)?;
        Ok(self.run(&issues))
    }
}

/// Story points from the issue's current state
///
/// Missing and `null` values are unset; non-numeric values are logged and
/// treated as unset.
pub fn credit_value(issue: &Value, key: &str, layout: &FieldLayout) -> Option<f64> {
    let value = issue.get("fields")?.get(&layout.story_points)?;
    match value {
        Value::Null => None,
        Value::Number(number) => number.as_f64(),
        other => {
            tracing::warn!(issue = key, value = %other, "non-numeric story points ignored");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StoryshareError;
    use serde_json::json;

    fn analysis(members: &[&str]) -> Analysis {
        let mut config = Config::default();
        config.add_members(members.iter().copied()).unwrap();
        Analysis::new(config).unwrap()
    }

    #[test]
    fn test_empty_team_rejected() {
        assert!(matches!(
            Analysis::new(Config::default()),
            Err(StoryshareError::EmptyTeam)
        ));
    }

    #[test]
    fn test_credit_value() {
        let layout = FieldLayout::default();
        let issue = json!({"fields": {"customfield_10002": 3}});
        assert_eq!(credit_value(&issue, "A-1", &layout), Some(3.0));

        let issue = json!({"fields": {"customfield_10002": 0.5}});
        assert_eq!(credit_value(&issue, "A-1", &layout), Some(0.5));

        let issue = json!({"fields": {"customfield_10002": null}});
        assert_eq!(credit_value(&issue, "A-1", &layout), None);

        let issue = json!({"fields": {"customfield_10002": "three"}});
        assert_eq!(credit_value(&issue, "A-1", &layout), None);

        assert_eq!(credit_value(&json!({"key": "A-1"}), "A-1", &layout), None);
    }

    #[test]
    fn test_skips_issue_without_key() {
        let report = analysis(&["a@x.com"]).run(&[
            json!({"fields": {"assignee": {"name": "a@x.com"}}}),
            json!(42),
            json!({"key": "ABC-1", "fields": {"assignee": {"name": "a@x.com"}}}),
        ]);

        assert_eq!(report.issues_skipped, 2);
        assert_eq!(report.issues_processed, 1);
        assert_eq!(report.summaries["a@x.com"].occurrences(), 1);
    }

    #[test]
    fn test_run_document_rejects_malformed() {
        let err = analysis(&["a@x.com"])
            .run_document(json!({"total": 0}))
            .unwrap_err();
        assert!(matches!(err, StoryshareError::MalformedInput(_)));
    }

    #[test]
    fn test_runs_are_independent() {
        let analysis = analysis(&["a@x.com"]);
        let sub_task = json!({
            "key": "ABC-1",
            "fields": {
                "issuetype": {"name": "Sub-task"},
                "customfield_10002": 2,
                "assignee": {"name": "a@x.com"}
            }
        });
        let story = json!({
            "key": "ABC-1",
            "fields": {
                "issuetype": {"name": "Story"},
                "customfield_10002": 2,
                "assignee": {"name": "a@x.com"}
            }
        });

        let first = analysis.run(&[sub_task]);
        assert_eq!(first.summaries["a@x.com"].sub_items, vec!["ABC-1 (2)"]);

        // Classification from the first run must not leak into the second
        let second = analysis.run(&[story]);
        assert_eq!(second.summaries["a@x.com"].issues, vec!["ABC-1 (2)"]);
        assert!(second.summaries["a@x.com"].sub_items.is_empty());
    }
}
