//! Human-readable report table

use crate::summary::TeamReport;

/// Render the report as an aligned text table followed by issue listings
pub fn render(report: &TeamReport) -> String {
    let mut out = String::new();

    if report.summaries.is_empty() {
        out.push_str("No team members configured.\n");
        return out;
    }

    let width = report
        .summaries
        .keys()
        .map(|identity| identity.chars().count())
        .max()
        .unwrap_or(0)
        .max("member".len());

    out.push_str(&format!(
        "{:<width$} {:>7} {:>8}  roles\n",
        "member", "points", "occurs"
    ));
    out.push_str(&format!(
        "{} {} {}  {}\n",
        "-".repeat(width),
        "-".repeat(7),
        "-".repeat(8),
        "-".repeat(16)
    ));

    for (identity, summary) in &report.summaries {
        let roles = if summary.no_roles_played() {
            "(no roles played)".to_string()
        } else {
            summary
                .roles
                .iter()
                .map(|(role, count)| format!("{}={}", role, count))
                .collect::<Vec<_>>()
                .join(" ")
        };
        out.push_str(&format!(
            "{:<width$} {:>7} {:>8}  {}\n",
            identity,
            summary.display_total(),
            summary.occurrences(),
            roles
        ));
    }

    for (identity, summary) in &report.summaries {
        if summary.issues.is_empty() && summary.sub_items.is_empty() {
            continue;
        }
        out.push_str(&format!("\n{}\n", identity));
        if !summary.issues.is_empty() {
            out.push_str(&format!("  issues:    {}\n", summary.issues.join("  ")));
        }
        if !summary.sub_items.is_empty() {
            out.push_str(&format!("  sub-tasks: {}\n", summary.sub_items.join("  ")));
        }
    }

    out.push_str(&format!(
        "\n{} issues, {} skipped, {} occurrences\n",
        report.issues_processed, report.issues_skipped, report.total_occurrences
    ));

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::summary::IdentitySummary;

    #[test]
    fn test_render_table() {
        let mut report = TeamReport {
            issues_processed: 1,
            total_occurrences: 1,
            ..Default::default()
        };
        let mut active = IdentitySummary {
            total_points: 2.5,
            issues: vec!["ABC-1 (5/2=2.5)".to_string()],
            ..Default::default()
        };
        active.roles.insert("assignee".to_string(), 1);
        report.summaries.insert("a@x.com".to_string(), active);
        report
            .summaries
            .insert("idle@x.com".to_string(), IdentitySummary::default());

        let text = render(&report);
        assert!(text.contains("assignee=1"));
        assert!(text.contains("(no roles played)"));
        assert!(text.contains("  issues:    ABC-1 (5/2=2.5)"));
        assert!(text.contains("1 issues, 0 skipped, 1 occurrences"));
    }

    #[test]
    fn test_columns_align_for_non_ascii_identities() {
        let mut report = TeamReport::default();
        for identity in ["jose@x.com", "josé@x.com"] {
            let mut summary = IdentitySummary::default();
            summary.roles.insert("reporter".to_string(), 1);
            report.summaries.insert(identity.to_string(), summary);
        }

        // Identity column is padded to ten characters, not eleven bytes
        let text = render(&report);
        let rows: Vec<&str> = text.lines().filter(|l| l.contains("reporter=1")).collect();
        assert_eq!(rows.len(), 2);
        assert!(rows[0].starts_with("jose@x.com       0        1"));
        assert!(rows[1].starts_with("josé@x.com       0        1"));
    }

    #[test]
    fn test_render_empty() {
        assert_eq!(render(&TeamReport::default()), "No team members configured.\n");
    }
}
