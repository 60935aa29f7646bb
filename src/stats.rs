//! Derived values computed from the entry list
//!
//! Every "latest" and "first" lookup goes through [`sorted_desc`] so that
//! entries sharing a date are ordered the same way everywhere: by date
//! descending, then by identifier descending (the entry created later counts
//! as the more recent one).

use crate::types::WeightEntry;
use chrono::NaiveDate;

/// Entries ordered newest first
pub fn sorted_desc(entries: &[WeightEntry]) -> Vec<&WeightEntry> {
    let mut sorted: Vec<&WeightEntry> = entries.iter().collect();
    sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.id.cmp(&a.id)));
    sorted
}

/// Entries ordered oldest first
pub fn sorted_asc(entries: &[WeightEntry]) -> Vec<&WeightEntry> {
    let mut sorted = sorted_desc(entries);
    sorted.reverse();
    sorted
}

pub fn latest(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    sorted_desc(entries).first().copied()
}

/// Chronologically first entry
pub fn first(entries: &[WeightEntry]) -> Option<&WeightEntry> {
    sorted_desc(entries).last().copied()
}

/// Round to one decimal place
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Difference between the most recent and the second most recent weight.
/// Zero with fewer than two entries.
pub fn weight_change(entries: &[WeightEntry]) -> f64 {
    let sorted = sorted_desc(entries);
    match (sorted.first(), sorted.get(1)) {
        (Some(latest), Some(previous)) => round1(latest.weight - previous.weight),
        _ => 0.0,
    }
}

/// Percentage of the distance from the first weight to the goal that has
/// been covered, clamped to `[0, 100]`.
///
/// Zero when no goal is set or there are no entries, 100 when the first
/// weight already equals the goal. Moving away from the goal clamps to zero;
/// the direction of the intended change (loss or gain) is not considered.
pub fn goal_progress(entries: &[WeightEntry], goal: Option<f64>) -> f64 {
    let (Some(goal), Some(initial), Some(latest)) = (goal, first(entries), latest(entries)) else {
        return 0.0;
    };
    if initial.weight == goal {
        return 100.0;
    }

    let covered = initial.weight - latest.weight;
    let total = initial.weight - goal;
    round1((covered / total * 100.0).clamp(0.0, 100.0))
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GoalDistance {
    /// Absolute distance to the goal, one decimal
    pub kg: f64,
    pub above_goal: bool,
}

/// First and latest records plus the change between them
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub first_date: NaiveDate,
    pub first_weight: f64,
    pub latest_date: NaiveDate,
    pub latest_weight: f64,
    pub total_change: f64,
    pub to_goal: Option<GoalDistance>,
}

pub fn summary(entries: &[WeightEntry], goal: Option<f64>) -> Option<Summary> {
    let first = first(entries)?;
    let latest = latest(entries)?;

    let to_goal = goal.map(|goal| GoalDistance {
        kg: round1((latest.weight - goal).abs()),
        above_goal: latest.weight > goal,
    });

    Some(Summary {
        first_date: first.date,
        first_weight: first.weight,
        latest_date: latest.date,
        latest_weight: latest.weight,
        total_change: round1(latest.weight - first.weight),
        to_goal,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(id: i64, date: &str, weight: f64) -> WeightEntry {
        WeightEntry {
            id,
            date: NaiveDate::parse_from_str(date, "%Y-%m-%d").unwrap(),
            weight,
            notes: String::new(),
        }
    }

    #[test]
    fn weight_change_is_latest_minus_previous() {
        let entries = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-01-08", 78.0)];
        assert_eq!(weight_change(&entries), -2.0);
    }

    #[test]
    fn weight_change_ignores_insertion_order() {
        let entries = vec![entry(2, "2024-01-08", 78.0), entry(1, "2024-01-01", 80.0)];
        assert_eq!(weight_change(&entries), -2.0);
    }

    #[test]
    fn weight_change_needs_two_entries() {
        assert_eq!(weight_change(&[]), 0.0);
        assert_eq!(weight_change(&[entry(1, "2024-01-01", 80.0)]), 0.0);
    }

    #[test]
    fn weight_change_rounds_to_one_decimal() {
        let entries = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-01-02", 78.64)];
        assert_eq!(weight_change(&entries), -1.4);
    }

    #[test]
    fn same_date_ties_break_on_identifier() {
        let entries = vec![
            entry(20, "2024-01-05", 79.0),
            entry(10, "2024-01-05", 81.0),
            entry(5, "2024-01-01", 82.0),
        ];
        assert_eq!(latest(&entries).unwrap().id, 20);
        assert_eq!(first(&entries).unwrap().id, 5);
        assert_eq!(weight_change(&entries), -2.0);

        let asc: Vec<i64> = sorted_asc(&entries).iter().map(|e| e.id).collect();
        assert_eq!(asc, vec![5, 10, 20]);
    }

    #[test]
    fn goal_progress_halfway() {
        let entries = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-02-01", 75.0)];
        assert_eq!(goal_progress(&entries, Some(70.0)), 50.0);
    }

    #[test]
    fn goal_progress_without_change_is_zero() {
        let entries = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-02-01", 80.0)];
        assert_eq!(goal_progress(&entries, Some(70.0)), 0.0);
    }

    #[test]
    fn goal_progress_is_clamped() {
        let overshoot = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-02-01", 65.0)];
        assert_eq!(goal_progress(&overshoot, Some(70.0)), 100.0);

        let reverse = vec![entry(1, "2024-01-01", 80.0), entry(2, "2024-02-01", 85.0)];
        assert_eq!(goal_progress(&reverse, Some(70.0)), 0.0);
    }

    #[test]
    fn goal_progress_uses_chronological_first_entry() {
        let entries = vec![
            entry(2, "2024-02-01", 75.0),
            entry(1, "2024-01-01", 80.0),
        ];
        assert_eq!(goal_progress(&entries, Some(70.0)), 50.0);
    }

    #[test]
    fn goal_progress_for_weight_gain() {
        let entries = vec![entry(1, "2024-01-01", 60.0), entry(2, "2024-02-01", 63.0)];
        assert_eq!(goal_progress(&entries, Some(70.0)), 30.0);
    }

    #[test]
    fn goal_progress_edge_cases() {
        let entries = vec![entry(1, "2024-01-01", 70.0), entry(2, "2024-02-01", 72.0)];
        assert_eq!(goal_progress(&entries, None), 0.0);
        assert_eq!(goal_progress(&[], Some(70.0)), 0.0);
        assert_eq!(goal_progress(&entries, Some(70.0)), 100.0);
    }

    #[test]
    fn summary_reports_first_latest_and_goal_distance() {
        let entries = vec![
            entry(1, "2024-01-01", 80.0),
            entry(3, "2024-01-15", 77.5),
            entry(2, "2024-01-08", 78.0),
        ];
        let summary = summary(&entries, Some(75.0)).unwrap();

        assert_eq!(summary.first_weight, 80.0);
        assert_eq!(summary.latest_weight, 77.5);
        assert_eq!(summary.latest_date, NaiveDate::from_ymd_opt(2024, 1, 15).unwrap());
        assert_eq!(summary.total_change, -2.5);
        assert_eq!(
            summary.to_goal,
            Some(GoalDistance {
                kg: 2.5,
                above_goal: true
            })
        );
    }

    #[test]
    fn summary_is_none_without_entries() {
        assert!(summary(&[], Some(70.0)).is_none());
    }
}
