//! Utility functions

use crate::constants::{APP_NAME, QUOTES};
use std::path::PathBuf;

/// Get the app data directory path
pub fn get_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_NAME)
}

/// Weight as typed, without trailing zeros ("80", "78.5")
pub fn format_weight(weight: f64) -> String {
    format!("{} kg", weight)
}

/// Signed change with one decimal ("+1.5 kg", "-2.0 kg", "0.0 kg")
pub fn format_delta(delta: f64) -> String {
    if delta > 0.0 {
        format!("+{:.1} kg", delta)
    } else {
        format!("{:.1} kg", delta)
    }
}

/// Pick a quote index different from `previous` when there is a choice.
/// `seed` only needs to vary between calls; the clock is good enough.
pub fn pick_quote(previous: Option<usize>, seed: u32) -> usize {
    let len = QUOTES.len();
    let idx = seed as usize % len;
    match previous {
        Some(prev) if prev == idx && len > 1 => (idx + 1) % len,
        _ => idx,
    }
}

/// Seed for [`pick_quote`] taken from the sub-second part of the clock
pub fn clock_seed() -> u32 {
    chrono::Utc::now().timestamp_subsec_nanos()
}
