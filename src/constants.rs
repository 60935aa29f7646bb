//! Application constants and configuration

use std::time::Duration;

pub const APP_NAME: &str = "Weight Tracker";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Keys in the key-value store
pub const ENTRIES_KEY: &str = "weightEntries";
pub const GOAL_KEY: &str = "goalWeight";

pub const DB_FILE_NAME: &str = "weight-tracker.db";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
pub const LOG_FILE_NAME: &str = "weight-tracker.log";

/// Notification lifetime, fade included
pub const NOTIFICATION_DURATION: Duration = Duration::from_secs(3);
pub const NOTIFICATION_FADE: Duration = Duration::from_millis(500);

/// Headroom left and right of the plotted days
pub const CHART_X_PADDING: f64 = 0.5;
/// Headroom above and below the plotted weights (kg)
pub const CHART_Y_PADDING: f64 = 2.0;

/// Entries needed before the graph view draws a chart
pub const CHART_MIN_ENTRIES: usize = 2;

pub const QUOTES: [&str; 10] = [
    "The choices you make today decide your tomorrow.",
    "Consistency matters more than speed.",
    "The moment you want to quit is often right before success.",
    "One step at a time, a little every day.",
    "Change your eating habits and your body follows.",
    "What comes easily goes just as easily.",
    "A healthy body is the result of healthy choices.",
    "Today's sweat is tomorrow's confidence.",
    "Every day spent moving toward your goal is a good day.",
    "You only fail when you stop trying.",
];
