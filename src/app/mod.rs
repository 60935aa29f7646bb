//! App module - contains the main application state and logic

mod chart;
mod notifications;
mod views;

use crate::constants::*;
use crate::notification::Notifier;
use crate::settings::Settings;
use crate::theme;
use crate::tracker::{InputError, Tracker, TrackerError};
use crate::types::View;
use crate::utils::{clock_seed, pick_quote};
use chrono::{Local, NaiveDate};
use eframe::egui;
use std::path::PathBuf;
use std::time::Instant;
use tracing::debug;

// ============================================================================
// APP STATE
// ============================================================================

pub struct App {
    pub(crate) tracker: Tracker,
    pub(crate) notifier: Notifier,
    pub(crate) active_view: View,
    // Entry form
    pub(crate) selected_date: NaiveDate,
    pub(crate) weight_input: String,
    pub(crate) notes_input: String,
    // Goal form
    pub(crate) goal_input: String,
    pub(crate) quote_index: usize,
    // Window state
    pub(crate) window_pos: Option<egui::Pos2>,
    pub(crate) window_size: Option<egui::Vec2>,
    pub(crate) needs_center: bool,
    pub(crate) data_dir: PathBuf,
}

// ============================================================================
// APP INITIALIZATION & ACTIONS
// ============================================================================

impl App {
    pub fn new(
        cc: &eframe::CreationContext<'_>,
        tracker: Tracker,
        settings: Settings,
        data_dir: PathBuf,
    ) -> Self {
        // Force dark theme
        cc.egui_ctx.set_theme(egui::Theme::Dark);

        // Add Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        // Apply theme from theme.rs
        theme::apply_visuals(&cc.egui_ctx);

        Self::with_state(tracker, settings, data_dir)
    }

    /// Build the app state without touching egui
    pub fn with_state(tracker: Tracker, settings: Settings, data_dir: PathBuf) -> Self {
        let goal_input = tracker.goal().map(|g| g.to_string()).unwrap_or_default();

        Self {
            tracker,
            notifier: Notifier::new(NOTIFICATION_DURATION, NOTIFICATION_FADE),
            active_view: settings.last_view,
            selected_date: Local::now().date_naive(),
            weight_input: String::new(),
            notes_input: String::new(),
            goal_input,
            quote_index: pick_quote(None, clock_seed()),
            window_pos: None,
            window_size: None,
            needs_center: false,
            data_dir,
        }
    }

    pub fn save_settings(&self) {
        let settings = Settings {
            window_x: self.window_pos.map(|p| p.x),
            window_y: self.window_pos.map(|p| p.y),
            window_w: self.window_size.map(|s| s.x),
            window_h: self.window_size.map(|s| s.y),
            last_view: self.active_view,
        };
        settings.save(&self.data_dir);
    }

    pub fn select_view(&mut self, view: View) {
        if self.active_view != view {
            debug!(?view, "View selected");
            self.active_view = view;
        }
    }

    /// Add an entry from the form fields. Clears the fields on success.
    pub fn submit_entry(&mut self, now: Instant) {
        let result = self
            .tracker
            .add_entry(self.selected_date, &self.weight_input, &self.notes_input);

        match result {
            Ok(_) => {
                self.clear_entry_form();
                self.notifier.success("Weight recorded.", now);
            }
            Err(TrackerError::Input(e)) => {
                debug!(error = %e, input = %self.weight_input, "Rejected weight input");
                self.notifier.error(input_message("Please enter a valid weight", &e), now);
            }
            Err(TrackerError::Storage(e)) => {
                // The entry is in memory; only the write failed.
                self.clear_entry_form();
                self.notifier
                    .error(format!("Weight recorded but could not be saved: {}", e), now);
            }
        }
    }

    pub fn delete_entry(&mut self, id: i64, now: Instant) {
        match self.tracker.delete_entry(id) {
            Ok(true) => self.notifier.success("Entry deleted.", now),
            Ok(false) => debug!(id, "Delete requested for unknown entry"),
            Err(TrackerError::Storage(e)) => self
                .notifier
                .error(format!("Entry deleted but could not be saved: {}", e), now),
            Err(TrackerError::Input(e)) => self.notifier.error(e.to_string(), now),
        }
    }

    pub fn submit_goal(&mut self, now: Instant) {
        match self.tracker.set_goal(&self.goal_input) {
            Ok(goal) => {
                self.goal_input = goal.to_string();
                self.notifier.success("Goal weight set.", now);
            }
            Err(TrackerError::Input(e)) => {
                self.notifier
                    .error(input_message("Please enter a valid goal weight", &e), now);
            }
            Err(TrackerError::Storage(e)) => {
                self.notifier
                    .error(format!("Goal set but could not be saved: {}", e), now);
            }
        }
    }

    fn clear_entry_form(&mut self) {
        self.weight_input.clear();
        self.notes_input.clear();
        self.quote_index = pick_quote(Some(self.quote_index), clock_seed());
    }
}

fn input_message(prefix: &str, error: &InputError) -> String {
    match error {
        InputError::Empty => format!("{}.", prefix),
        InputError::NotNumeric(_) => format!("{} ({}).", prefix, error),
    }
}
