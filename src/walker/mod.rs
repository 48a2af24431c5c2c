//! Recursive identity discovery inside one issue record
//!
//! The walker visits the issue as a `serde_json::Value` tree, keeping an
//! explicit slash-delimited path (`fields/assignee/name`,
//! `changelog/histories[2]/items[0]`). Every team member found under the
//! identity key becomes an [`Occurrence`] whose role is the path segment
//! just above it. Reassignments recorded in the change log produce extra
//! assignee occurrences, since a contributor who was reassigned away leaves
//! no trace in the current state.
//!
//! Ordering: current-state occurrences in depth-first pre-order, followed by
//! historical assignees in change-log order.

mod changelog;
mod occurrence;

pub use changelog::{has_histories, histories, prior_assignees, HISTORICAL_ASSIGNEE_PATH};
pub use occurrence::{role_of, IssueContext, Occurrence, UNKNOWN_ROLE};

use crate::classifier::ItemClassifier;
use crate::config::FieldLayout;
use crate::team::Team;
use serde_json::{Map, Value};

/// Key holding the change log at the root of an issue
const CHANGELOG_KEY: &str = "changelog";

/// Occurrences collected during one walk
#[derive(Debug, Default)]
struct WalkOutput {
    current: Vec<Occurrence>,
    historical: Vec<Occurrence>,
}

/// Schema-agnostic walker over issue records
#[derive(Debug, Clone, Copy)]
pub struct TreeWalker<'r> {
    team: &'r Team,
    layout: &'r FieldLayout,
}

impl<'r> TreeWalker<'r> {
    pub fn new(team: &'r Team, layout: &'r FieldLayout) -> Self {
        Self { team, layout }
    }

    /// Walk one issue, returning its occurrences in discovery order
    ///
    /// A sub-item issue type, when found, marks the key in `classifier`.
    pub fn walk(
        &self,
        issue: &Value,
        ctx: &IssueContext<'_>,
        classifier: &mut ItemClassifier,
    ) -> Vec<Occurrence> {
        let mut output = WalkOutput::default();
        self.visit(issue, "", ctx, classifier, &mut output);

        let mut occurrences = output.current;
        occurrences.extend(output.historical);
        occurrences
    }

    fn visit(
        &self,
        node: &Value,
        path: &str,
        ctx: &IssueContext<'_>,
        classifier: &mut ItemClassifier,
        output: &mut WalkOutput,
    ) {
        match node {
            Value::Object(map) => self.visit_mapping(map, path, ctx, classifier, output),
            Value::Array(items) => {
                for (index, item) in items.iter().enumerate() {
                    let child = format!("{}[{}]", path, index);
                    self.visit(item, &child, ctx, classifier, output);
                }
            }
            _ => {}
        }
    }

    fn visit_mapping(
        &self,
        map: &Map<String, Value>,
        path: &str,
        ctx: &IssueContext<'_>,
        classifier: &mut ItemClassifier,
        output: &mut WalkOutput,
    ) {
        if let Some(changelog) = map.get(CHANGELOG_KEY) {
            if !self.team.is_opaque(&join(path, CHANGELOG_KEY)) {
                for identity in prior_assignees(changelog, self.team) {
                    tracing::debug!(identity, issue = ctx.key, "prior assignee");
                    output.historical.push(Occurrence::new(
                        identity,
                        ctx,
                        HISTORICAL_ASSIGNEE_PATH,
                    ));
                }
            }
        }

        for (key, value) in map {
            let child = join(path, key);
            if self.team.is_opaque(&child) {
                continue;
            }

            if *key == self.layout.identity_key {
                self.inspect_identity_field(path, &child, value, ctx, classifier, output);
            }

            self.visit(value, &child, ctx, classifier, output);
        }
    }

    fn inspect_identity_field(
        &self,
        parent: &str,
        path: &str,
        value: &Value,
        ctx: &IssueContext<'_>,
        classifier: &mut ItemClassifier,
        output: &mut WalkOutput,
    ) {
        if parent == self.layout.issue_type_path {
            if value.as_str() == Some(self.layout.sub_item_label.as_str()) {
                classifier.mark_sub_item(ctx.key);
            }
        } else if let Some(identity) = self.team.identify(path, value) {
            tracing::debug!(identity, issue = ctx.key, path, "occurrence");
            output.current.push(Occurrence::new(identity, ctx, path));
        }
    }
}

fn join(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{}/{}", path, key)
    }
}
