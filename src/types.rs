//! Common types and data structures

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single dated weight measurement.
///
/// `id` is the creation time in milliseconds and doubles as the unique key.
/// Entries are never edited after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeightEntry {
    pub id: i64,
    pub date: NaiveDate,
    pub weight: f64,
    #[serde(default)]
    pub notes: String,
}

/// Sub-view shown in the main panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    #[default]
    Entry,
    History,
    Graph,
    Goal,
}

impl View {
    pub const ALL: [View; 4] = [View::Entry, View::History, View::Graph, View::Goal];

    pub fn label(self) -> &'static str {
        match self {
            View::Entry => "Log Weight",
            View::History => "History",
            View::Graph => "Graph",
            View::Goal => "Goal",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}
