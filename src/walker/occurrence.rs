use serde::Serialize;

/// Role used when the identity field sits at the root of an issue
pub const UNKNOWN_ROLE: &str = "unknown";

/// Per-issue values fixed before the walk starts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IssueContext<'a> {
    /// Issue key from the root of the record
    pub key: &'a str,

    /// Story points in effect (None when unset, distinct from zero)
    pub credit: Option<f64>,
}

impl<'a> IssueContext<'a> {
    pub fn new(key: &'a str, credit: Option<f64>) -> Self {
        Self { key, credit }
    }
}

/// One appearance of a team member inside one issue
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Occurrence {
    pub identity: String,
    pub issue_key: String,
    /// Full structural path ending in the identity field
    pub path: String,
    /// Path segment preceding the identity field, taken verbatim
    pub role: String,
    pub credit: Option<f64>,
}

impl Occurrence {
    pub fn new(identity: &str, ctx: &IssueContext<'_>, path: &str) -> Self {
        Self {
            identity: identity.to_string(),
            issue_key: ctx.key.to_string(),
            path: path.to_string(),
            role: role_of(path).to_string(),
            credit: ctx.credit,
        }
    }

    /// True for current and historical assignee occurrences
    pub fn is_assignee(&self) -> bool {
        self.role == "assignee"
    }
}

/// Second-to-last path segment, e.g. `fields/assignee/name` -> `assignee`
pub fn role_of(path: &str) -> &str {
    let mut segments = path.rsplit('/');
    segments.next();
    segments.next().unwrap_or(UNKNOWN_ROLE)
}
