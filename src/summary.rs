//! Per-identity aggregation of occurrences and allocated credit

use crate::allocation::{format_points, Allocation};
use crate::classifier::{ItemClassifier, ItemKind};
use crate::team::Team;
use crate::walker::Occurrence;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};

/// Everything one identity contributed during the run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct IdentitySummary {
    /// Occurrence count per literal role segment
    pub roles: BTreeMap<String, usize>,
    /// Sum of allocated shares
    pub total_points: f64,
    /// Top-level issue entries, e.g. `ABC-1 (5/2=2.5)`
    pub issues: Vec<String>,
    /// Sub-item entries, e.g. `ABC-2 (None)`
    pub sub_items: Vec<String>,
}

impl IdentitySummary {
    /// Configured member who never showed up in any issue
    pub fn no_roles_played(&self) -> bool {
        self.roles.is_empty()
    }

    /// Total occurrences across all roles
    pub fn occurrences(&self) -> usize {
        self.roles.values().sum()
    }

    /// Total points with float noise trimmed
    pub fn display_total(&self) -> String {
        format_points((self.total_points * 1e6).round() / 1e6)
    }
}

/// Folds occurrences into identity summaries
#[derive(Debug)]
pub struct Aggregator<'r> {
    classifier: &'r ItemClassifier,
    allocation: &'r Allocation,
    summaries: BTreeMap<String, IdentitySummary>,
}

impl<'r> Aggregator<'r> {
    /// Start with an empty summary for every configured member
    pub fn new(team: &Team, classifier: &'r ItemClassifier, allocation: &'r Allocation) -> Self {
        let summaries = team
            .members()
            .map(|member| (member.to_string(), IdentitySummary::default()))
            .collect();
        Self {
            classifier,
            allocation,
            summaries,
        }
    }

    /// Record one occurrence
    pub fn record(&mut self, occurrence: &Occurrence) {
        let summary = self
            .summaries
            .entry(occurrence.identity.clone())
            .or_default();

        *summary.roles.entry(occurrence.role.clone()).or_insert(0) += 1;

        if let Some(share) = self.allocation.share(occurrence) {
            summary.total_points += share.points();
            let entry = format!("{} ({})", occurrence.issue_key, share);
            match self.classifier.kind(&occurrence.issue_key) {
                ItemKind::TopLevel => summary.issues.push(entry),
                ItemKind::SubItem => summary.sub_items.push(entry),
            }
        }
    }

    pub fn finish(self) -> BTreeMap<String, IdentitySummary> {
        self.summaries
    }
}

/// Final result of one run
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TeamReport {
    /// Summaries keyed by identity, in lexicographic order
    pub summaries: BTreeMap<String, IdentitySummary>,
    pub issues_processed: usize,
    pub issues_skipped: usize,
    pub total_occurrences: usize,
}

impl TeamReport {
    /// Every role seen for any identity, sorted
    pub fn role_columns(&self) -> Vec<String> {
        let roles: BTreeSet<&String> = self
            .summaries
            .values()
            .flat_map(|summary| summary.roles.keys())
            .collect();
        roles.into_iter().cloned().collect()
    }

    /// True when any configured member has no occurrences
    pub fn any_inactive(&self) -> bool {
        self.summaries.values().any(IdentitySummary::no_roles_played)
    }

    /// Identities that appeared at least once
    pub fn contributor_count(&self) -> usize {
        self.summaries
            .values()
            .filter(|summary| !summary.no_roles_played())
            .count()
    }
}
