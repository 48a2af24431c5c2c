//! CSV output format for team reports
//!
//! Columns: `Name`, every discovered role sorted alphabetically, then the
//! pinned columns `No roles played` (only when some member was inactive),
//! `Total Story Points`, `Issues` and `Sub-tasks`. Rows are sorted by
//! identity.

use crate::summary::{IdentitySummary, TeamReport};

pub const NAME_COLUMN: &str = "Name";
pub const NO_ROLES_COLUMN: &str = "No roles played";
pub const TOTAL_POINTS_COLUMN: &str = "Total Story Points";
pub const ISSUES_COLUMN: &str = "Issues";
pub const SUB_ITEMS_COLUMN: &str = "Sub-tasks";

/// Separator between entries in the issue listing cells
const LISTING_SEPARATOR: &str = "  ";

/// CSV formatter for a finished report
#[derive(Debug)]
pub struct CsvReport<'r> {
    report: &'r TeamReport,
    roles: Vec<String>,
    include_no_roles: bool,
}

impl<'r> CsvReport<'r> {
    pub fn new(report: &'r TeamReport) -> Self {
        Self {
            report,
            roles: report.role_columns(),
            include_no_roles: report.any_inactive(),
        }
    }

    /// Column names in output order
    pub fn columns(&self) -> Vec<&str> {
        let mut columns = vec![NAME_COLUMN];
        columns.extend(self.roles.iter().map(String::as_str));
        if self.include_no_roles {
            columns.push(NO_ROLES_COLUMN);
        }
        columns.extend([TOTAL_POINTS_COLUMN, ISSUES_COLUMN, SUB_ITEMS_COLUMN]);
        columns
    }

    /// Escape CSV field (handle commas, quotes, newlines)
    fn escape_field(field: &str) -> String {
        if field.contains(',') || field.contains('"') || field.contains('\n') || field.contains('\r')
        {
            format!("\"{}\"", field.replace('"', "\"\""))
        } else {
            field.to_string()
        }
    }

    fn format_row(&self, identity: &str, summary: &IdentitySummary) -> String {
        let mut fields = vec![Self::escape_field(identity)];

        for role in &self.roles {
            fields.push(
                summary
                    .roles
                    .get(role)
                    .map(|count| count.to_string())
                    .unwrap_or_default(),
            );
        }

        if self.include_no_roles {
            fields.push(if summary.no_roles_played() {
                "1".to_string()
            } else {
                String::new()
            });
        }

        fields.push(summary.display_total());
        fields.push(Self::escape_field(&summary.issues.join(LISTING_SEPARATOR)));
        fields.push(Self::escape_field(&summary.sub_items.join(LISTING_SEPARATOR)));

        fields.join(",")
    }

    /// Generate CSV output as string
    pub fn to_csv(&self) -> String {
        let mut output = String::new();

        let header: Vec<String> = self.columns().into_iter().map(Self::escape_field).collect();
        output.push_str(&header.join(","));
        output.push('\n');

        for (identity, summary) in &self.report.summaries {
            output.push_str(&self.format_row(identity, summary));
            output.push('\n');
        }

        output
    }
}
