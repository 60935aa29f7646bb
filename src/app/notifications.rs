//! Notification banner shown above the active view

use super::App;
use crate::theme;
use crate::types::NotificationKind;
use eframe::egui;
use std::time::Instant;

impl App {
    pub(crate) fn render_notification(&mut self, ui: &mut egui::Ui) {
        let now = Instant::now();
        let Some(left) = self.notifier.tick(now) else {
            return;
        };
        let Some(notification) = self.notifier.current(now).cloned() else {
            return;
        };

        // Repaint every frame while fading, otherwise wake up when the fade starts
        let alpha = self.notifier.opacity(now);
        if alpha < 1.0 {
            ui.ctx().request_repaint();
        } else {
            ui.ctx()
                .request_repaint_after(left.saturating_sub(crate::constants::NOTIFICATION_FADE));
        }

        let (color, icon) = match notification.kind {
            NotificationKind::Success => (theme::STATUS_SUCCESS, egui_phosphor::regular::CHECK_CIRCLE),
            NotificationKind::Error => (theme::STATUS_ERROR, egui_phosphor::regular::WARNING_CIRCLE),
        };
        let text_color = egui::Color32::from_white_alpha((255.0 * alpha) as u8);

        let mut dismissed = false;
        theme::banner_frame(color, alpha).show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.horizontal(|ui| {
                ui.label(egui::RichText::new(icon).size(theme::FONT_HEADING).color(text_color));
                ui.label(
                    egui::RichText::new(&notification.message)
                        .size(theme::FONT_BODY)
                        .color(text_color)
                        .strong(),
                );
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let close = ui
                        .add(
                            egui::Button::new(
                                egui::RichText::new(egui_phosphor::regular::X).color(text_color),
                            )
                            .frame(false),
                        )
                        .on_hover_text("Dismiss");
                    if close.clicked() {
                        dismissed = true;
                    }
                });
            });
        });
        ui.add_space(theme::SPACING_MD);

        if dismissed {
            self.notifier.dismiss();
        }
    }
}
