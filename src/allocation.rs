//! Proportional story point allocation
//!
//! The assignment count of an issue is the number of assignee occurrences
//! (current and historical) recorded for it. A single assignee receives the
//! raw credit unrounded; with `n > 1` assignees each receives
//! `round(credit / n, 2)`. The rounded shares may not add back up to the
//! original credit exactly; the drift is bounded by `n * 0.005`.

use crate::walker::Occurrence;
use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Two-decimal rounding mode for split shares
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize, ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum Rounding {
    /// Ties go to the even digit (same as Python's `round`)
    #[default]
    HalfEven,
    /// Ties go away from zero
    HalfAwayFromZero,
}

impl Rounding {
    /// Round to two decimal places
    pub fn round2(self, value: f64) -> f64 {
        let scaled = value * 100.0;
        let rounded = match self {
            Rounding::HalfEven => scaled.round_ties_even(),
            Rounding::HalfAwayFromZero => scaled.round(),
        };
        rounded / 100.0
    }
}

/// Credit attributed to one assignee occurrence
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Share {
    /// The issue has no story points
    NoCredit,
    /// Sole assignee: the raw credit, unrounded
    Full(f64),
    /// One of several assignees
    Split { credit: f64, count: usize, share: f64 },
}

impl Share {
    /// Points added to the identity's running total
    pub fn points(&self) -> f64 {
        match *self {
            Share::NoCredit => 0.0,
            Share::Full(credit) => credit,
            Share::Split { share, .. } => share,
        }
    }
}

impl fmt::Display for Share {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Share::NoCredit => write!(f, "None"),
            Share::Full(credit) => write!(f, "{}", format_points(credit)),
            Share::Split {
                credit,
                count,
                share,
            } => write!(
                f,
                "{}/{}={}",
                format_points(credit),
                count,
                format_points(share)
            ),
        }
    }
}

/// Render points without a trailing `.0` for whole numbers
pub fn format_points(points: f64) -> String {
    if points == 0.0 {
        // Avoids "-0"
        return "0".to_string();
    }
    format!("{}", points)
}

/// Assignment counts for every issue in a run
#[derive(Debug, Clone, Default)]
pub struct Allocation {
    assignments: HashMap<String, usize>,
    rounding: Rounding,
}

impl Allocation {
    /// Count assignee occurrences per issue
    pub fn from_occurrences<'a, I>(occurrences: I, rounding: Rounding) -> Self
    where
        I: IntoIterator<Item = &'a Occurrence>,
    {
        let mut assignments: HashMap<String, usize> = HashMap::new();
        for occurrence in occurrences.into_iter().filter(|o| o.is_assignee()) {
            *assignments.entry(occurrence.issue_key.clone()).or_insert(0) += 1;
        }
        Self {
            assignments,
            rounding,
        }
    }

    /// Number of assignment events for an issue (at least 1)
    pub fn assignment_count(&self, issue_key: &str) -> usize {
        self.assignments.get(issue_key).copied().unwrap_or(0).max(1)
    }

    pub fn rounding(&self) -> Rounding {
        self.rounding
    }

    /// Share for an assignee occurrence; `None` for any other role
    pub fn share(&self, occurrence: &Occurrence) -> Option<Share> {
        if !occurrence.is_assignee() {
            return None;
        }

        let Some(credit) = occurrence.credit else {
            return Some(Share::NoCredit);
        };

        let count = self.assignment_count(&occurrence.issue_key);
        if count == 1 {
            return Some(Share::Full(credit));
        }

        Some(Share::Split {
            credit,
            count,
            share: self.rounding.round2(credit / count as f64),
        })
    }
}
