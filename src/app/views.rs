//! View rendering (entry form, history table, goal)

use super::App;
use crate::constants::QUOTES;
use crate::theme;
use crate::ui::components::{
    delta_color, empty_state, field_label, progress_bar, section_heading, stat_row,
};
use crate::utils::{format_delta, format_weight};
use eframe::egui;
use egui_extras::{Column, DatePickerButton, TableBuilder};
use std::time::Instant;

impl App {
    // ========================================================================
    // ENTRY
    // ========================================================================

    pub(crate) fn render_entry_view(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Today's Weight");

        field_label(ui, "Date");
        ui.add(DatePickerButton::new(&mut self.selected_date));
        ui.add_space(theme::SPACING_MD);

        field_label(ui, "Weight (kg)");
        let weight_response = ui.add(
            egui::TextEdit::singleline(&mut self.weight_input)
                .hint_text("Enter your weight")
                .desired_width(f32::INFINITY),
        );
        let enter_pressed =
            weight_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(theme::SPACING_MD);

        field_label(ui, "Notes");
        ui.add(
            egui::TextEdit::multiline(&mut self.notes_input)
                .hint_text("Anything notable today (optional)")
                .desired_rows(3)
                .desired_width(f32::INFINITY),
        );
        ui.add_space(theme::SPACING_LG);

        let save = ui.add_sized(
            [ui.available_width(), theme::BUTTON_HEIGHT_LARGE],
            theme::button_accent(format!("{}  Save Entry", egui_phosphor::regular::FLOPPY_DISK)),
        );
        if save.clicked() || enter_pressed {
            self.submit_entry(Instant::now());
        }

        ui.add_space(theme::SPACING_XL);
        let quote = QUOTES.get(self.quote_index).copied().unwrap_or_default();
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.vertical_centered(|ui| {
                ui.label(
                    egui::RichText::new(format!("\u{201c}{}\u{201d}", quote))
                        .italics()
                        .size(theme::FONT_BODY)
                        .color(theme::ACCENT),
                );
            });
        });
    }

    // ========================================================================
    // HISTORY
    // ========================================================================

    pub(crate) fn render_history_view(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "History");

        if self.tracker.is_empty() {
            empty_state(ui, egui_phosphor::regular::LIST_BULLETS, "No entries yet.");
            return;
        }

        if self.tracker.len() > 1 {
            let change = self.tracker.weight_change();
            theme::card_frame().show(ui, |ui| {
                ui.set_width(ui.available_width());
                stat_row(ui, "Recent change", &format_delta(change), delta_color(change));
            });
            ui.add_space(theme::SPACING_MD);
        }

        let rows: Vec<(i64, String, String, String)> = self
            .tracker
            .sorted_desc()
            .into_iter()
            .map(|e| {
                (
                    e.id,
                    e.date.format("%Y-%m-%d").to_string(),
                    e.weight.to_string(),
                    e.notes.clone(),
                )
            })
            .collect();

        let mut to_delete = None;
        TableBuilder::new(ui)
            .striped(true)
            .vscroll(false)
            .column(Column::exact(100.0))
            .column(Column::exact(90.0))
            .column(Column::remainder().clip(true))
            .column(Column::exact(48.0))
            .header(theme::ROW_HEIGHT, |mut header| {
                header.col(|ui| {
                    ui.strong("Date");
                });
                header.col(|ui| {
                    ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                        ui.strong("Weight (kg)");
                    });
                });
                header.col(|ui| {
                    ui.strong("Notes");
                });
                header.col(|ui| {
                    ui.strong("");
                });
            })
            .body(|mut body| {
                for (id, date, weight, notes) in &rows {
                    body.row(theme::ROW_HEIGHT, |mut row| {
                        row.col(|ui| {
                            ui.label(date.as_str());
                        });
                        row.col(|ui| {
                            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                                ui.label(weight.as_str());
                            });
                        });
                        row.col(|ui| {
                            ui.label(egui::RichText::new(notes.as_str()).color(theme::TEXT_MUTED))
                                .on_hover_text(notes.as_str());
                        });
                        row.col(|ui| {
                            let delete = ui
                                .add(
                                    egui::Button::new(
                                        egui::RichText::new(egui_phosphor::regular::TRASH)
                                            .color(theme::STATUS_ERROR),
                                    )
                                    .frame(false),
                                )
                                .on_hover_text("Delete entry");
                            if delete.clicked() {
                                to_delete = Some(*id);
                            }
                        });
                    });
                }
            });

        if let Some(id) = to_delete {
            self.delete_entry(id, Instant::now());
        }
    }

    // ========================================================================
    // GOAL
    // ========================================================================

    pub(crate) fn render_goal_view(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Goal Weight");

        field_label(ui, "Goal weight (kg)");
        let goal_response = ui.add(
            egui::TextEdit::singleline(&mut self.goal_input)
                .hint_text("Enter your goal weight")
                .desired_width(f32::INFINITY),
        );
        let enter_pressed =
            goal_response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter));
        ui.add_space(theme::SPACING_MD);

        let set = ui.add_sized(
            [ui.available_width(), theme::BUTTON_HEIGHT_LARGE],
            theme::button_accent(format!("{}  Set Goal", egui_phosphor::regular::TARGET)),
        );
        if set.clicked() || enter_pressed {
            self.submit_goal(Instant::now());
        }

        let (Some(goal), Some(summary)) = (self.tracker.goal(), self.tracker.summary()) else {
            return;
        };
        let progress = self.tracker.goal_progress();

        ui.add_space(theme::SPACING_XL);
        ui.label(
            egui::RichText::new("Progress")
                .size(theme::FONT_BODY)
                .color(theme::TEXT_PRIMARY)
                .strong(),
        );
        ui.add_space(theme::SPACING_SM);
        progress_bar(ui, progress);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            ui.label(
                egui::RichText::new(format!("{:.1}% achieved", progress))
                    .size(theme::FONT_SMALL)
                    .color(theme::TEXT_MUTED),
            );
        });

        ui.add_space(theme::SPACING_MD);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            stat_row(ui, "Starting weight", &format_weight(summary.first_weight), theme::TEXT_PRIMARY);
            stat_row(ui, "Current weight", &format_weight(summary.latest_weight), theme::TEXT_PRIMARY);
            stat_row(ui, "Goal weight", &format_weight(goal), theme::GOAL);
        });
    }
}
