//! Tracker state: the entry list and goal, mirrored to the repository on
//! every mutation

use crate::stats;
use crate::storage::{Repository, StorageError};
use crate::types::WeightEntry;
use chrono::{NaiveDate, Utc};
use tracing::{error, info};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("no value entered")]
    Empty,
    #[error("'{0}' is not a number")]
    NotNumeric(String),
}

#[derive(Debug, thiserror::Error)]
pub enum TrackerError {
    #[error(transparent)]
    Input(#[from] InputError),
    /// The change is applied in memory but could not be persisted
    #[error("failed to save: {0}")]
    Storage(#[from] StorageError),
}

/// Parse a weight typed by the user. Any finite decimal is accepted; there
/// are no range or unit checks.
pub fn parse_weight(input: &str) -> Result<f64, InputError> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(InputError::Empty);
    }
    match trimmed.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(InputError::NotNumeric(trimmed.to_owned())),
    }
}

pub struct Tracker {
    entries: Vec<WeightEntry>,
    goal: Option<f64>,
    repo: Repository,
}

impl Tracker {
    /// Load persisted state through the repository
    pub fn load(repo: Repository) -> Self {
        let state = repo.load();
        info!(
            entries = state.entries.len(),
            goal = ?state.goal,
            "Tracker state loaded"
        );
        Self {
            entries: state.entries,
            goal: state.goal,
            repo,
        }
    }

    /// Entries in insertion order
    pub fn entries(&self) -> &[WeightEntry] {
        &self.entries
    }

    pub fn goal(&self) -> Option<f64> {
        self.goal
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn sorted_desc(&self) -> Vec<&WeightEntry> {
        stats::sorted_desc(&self.entries)
    }

    pub fn weight_change(&self) -> f64 {
        stats::weight_change(&self.entries)
    }

    pub fn goal_progress(&self) -> f64 {
        stats::goal_progress(&self.entries, self.goal)
    }

    pub fn summary(&self) -> Option<stats::Summary> {
        stats::summary(&self.entries, self.goal)
    }

    /// Validate and append a new entry stamped with the current time
    pub fn add_entry(
        &mut self,
        date: NaiveDate,
        weight_input: &str,
        notes: &str,
    ) -> Result<WeightEntry, TrackerError> {
        self.add_entry_at(date, weight_input, notes, Utc::now().timestamp_millis())
    }

    /// Validate and append a new entry created at `created_ms`.
    ///
    /// The identifier is the creation time, bumped past the largest existing
    /// identifier when two entries land on the same millisecond.
    pub fn add_entry_at(
        &mut self,
        date: NaiveDate,
        weight_input: &str,
        notes: &str,
        created_ms: i64,
    ) -> Result<WeightEntry, TrackerError> {
        let weight = parse_weight(weight_input)?;
        let id = match self.entries.iter().map(|e| e.id).max() {
            Some(max) if max >= created_ms => max + 1,
            _ => created_ms,
        };

        let entry = WeightEntry {
            id,
            date,
            weight,
            notes: notes.to_owned(),
        };
        self.entries.push(entry.clone());
        info!(id, %date, weight, "Entry added");

        self.persist_entries()?;
        Ok(entry)
    }

    /// Remove the entry with `id`. Returns whether an entry was removed.
    pub fn delete_entry(&mut self, id: i64) -> Result<bool, TrackerError> {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        if self.entries.len() == before {
            return Ok(false);
        }
        info!(id, "Entry deleted");

        self.persist_entries()?;
        Ok(true)
    }

    /// Validate and store a new goal, replacing the previous one
    pub fn set_goal(&mut self, input: &str) -> Result<f64, TrackerError> {
        let goal = parse_weight(input)?;
        self.goal = Some(goal);
        info!(goal, "Goal set");

        if let Err(e) = self.repo.save_goal(self.goal) {
            error!(error = %e, "Failed to save goal");
            return Err(e.into());
        }
        Ok(goal)
    }

    fn persist_entries(&self) -> Result<(), TrackerError> {
        if let Err(e) = self.repo.save_entries(&self.entries) {
            error!(error = %e, "Failed to save entries");
            return Err(e.into());
        }
        Ok(())
    }
}
