use crate::team::Team;
use serde_json::Value;

/// Synthetic path recorded for assignees found in the change log
pub const HISTORICAL_ASSIGNEE_PATH: &str = "changelog/histories/assignee/name";

/// Changed field name marking a reassignment
const ASSIGNEE_FIELD: &str = "assignee";

/// The `histories` list of a change log, if present
pub fn histories(changelog: &Value) -> Option<&Vec<Value>> {
    changelog.get("histories")?.as_array()
}

/// True when the issue carries `changelog.histories`
pub fn has_histories(issue: &Value) -> bool {
    issue.get("changelog").and_then(histories).is_some()
}

/// Team members reassigned away from the issue, in history order
///
/// Histories or items of the wrong shape are skipped.
pub fn prior_assignees<'v>(changelog: &'v Value, team: &Team) -> Vec<&'v str> {
    let Some(histories) = histories(changelog) else {
        return Vec::new();
    };

    histories
        .iter()
        .filter_map(|history| history.get("items")?.as_array())
        .flatten()
        .filter(|item| item.get("field").and_then(Value::as_str) == Some(ASSIGNEE_FIELD))
        .filter_map(|item| team.identify(HISTORICAL_ASSIGNEE_PATH, item.get("from")?))
        .collect()
}
