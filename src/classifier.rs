//! Top-level vs. sub-item classification of issues
//!
//! Only the sub-item signal is recorded. Once a key is marked as a sub-item it
//! stays one; every key never marked is top-level.

use serde::Serialize;
use std::collections::HashSet;

/// Kind of work item an issue represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ItemKind {
    TopLevel,
    SubItem,
}

/// First-write-wins set of issue keys classified as sub-items
#[derive(Debug, Default, Clone)]
pub struct ItemClassifier {
    sub_items: HashSet<String>,
}

impl ItemClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark a key as a sub-item; returns false when it was already marked
    pub fn mark_sub_item(&mut self, issue_key: &str) -> bool {
        if self.sub_items.contains(issue_key) {
            return false;
        }
        self.sub_items.insert(issue_key.to_string())
    }

    /// Kind of the issue; unmarked keys are top-level
    pub fn kind(&self, issue_key: &str) -> ItemKind {
        if self.is_sub_item(issue_key) {
            ItemKind::SubItem
        } else {
            ItemKind::TopLevel
        }
    }

    pub fn is_sub_item(&self, issue_key: &str) -> bool {
        self.sub_items.contains(issue_key)
    }

    /// Number of keys marked as sub-items
    pub fn len(&self) -> usize {
        self.sub_items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sub_items.is_empty()
    }
}
