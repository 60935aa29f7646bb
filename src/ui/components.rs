//! Reusable UI components
//!
//! This module contains standalone UI components that can be used
//! throughout the application.

use crate::theme;
use crate::types::View;
use eframe::egui;

pub fn view_icon(view: View) -> &'static str {
    match view {
        View::Entry => egui_phosphor::regular::PENCIL_SIMPLE,
        View::History => egui_phosphor::regular::LIST_BULLETS,
        View::Graph => egui_phosphor::regular::CHART_LINE,
        View::Goal => egui_phosphor::regular::TARGET,
    }
}

/// Color for a weight change: green for a loss, red for a gain
pub fn delta_color(delta: f64) -> egui::Color32 {
    if delta < 0.0 {
        theme::STATUS_SUCCESS
    } else if delta > 0.0 {
        theme::STATUS_ERROR
    } else {
        theme::TEXT_MUTED
    }
}

/// Underlined tab button. Returns the click response.
pub fn tab_button(ui: &mut egui::Ui, view: View, active: bool) -> egui::Response {
    let text = format!("{}  {}", view_icon(view), view.label());
    let color = if active { theme::ACCENT } else { theme::TEXT_MUTED };
    let galley = ui.painter().layout_no_wrap(
        text,
        egui::FontId::proportional(theme::FONT_BODY),
        color,
    );

    let size = galley.size() + egui::vec2(2.0 * theme::SPACING_XL, 2.0 * theme::SPACING_MD);
    let (rect, response) = ui.allocate_exact_size(size, egui::Sense::click());

    if ui.is_rect_visible(rect) {
        let painter = ui.painter();
        if response.hovered() && !active {
            painter.rect_filled(rect, theme::RADIUS_DEFAULT, theme::BG_ELEVATED);
        }
        let text_pos = rect.center() - galley.size() / 2.0;
        painter.galley(text_pos, galley, color);
        if active {
            let y = rect.bottom() - 1.0;
            painter.line_segment(
                [egui::pos2(rect.left(), y), egui::pos2(rect.right(), y)],
                egui::Stroke::new(theme::STROKE_THICK, theme::ACCENT),
            );
        }
    }

    response
}

/// Rounded progress bar filled to `percent` (0-100)
pub fn progress_bar(ui: &mut egui::Ui, percent: f64) {
    let width = ui.available_width();
    let (rect, _) = ui.allocate_exact_size(
        egui::vec2(width, theme::PROGRESS_HEIGHT),
        egui::Sense::hover(),
    );
    let radius = theme::PROGRESS_HEIGHT / 2.0;
    let painter = ui.painter();
    painter.rect_filled(rect, radius, theme::BG_SURFACE);

    let fraction = (percent / 100.0).clamp(0.0, 1.0) as f32;
    if fraction > 0.0 {
        let filled = egui::Rect::from_min_size(
            rect.min,
            egui::vec2(rect.width() * fraction, rect.height()),
        );
        painter.rect_filled(filled, radius, theme::GOAL);
    }
}

/// "Label: value" line with a colored value
pub fn stat_row(ui: &mut egui::Ui, label: &str, value: &str, value_color: egui::Color32) {
    ui.horizontal(|ui| {
        ui.label(
            egui::RichText::new(format!("{}:", label))
                .size(theme::FONT_LABEL)
                .color(theme::TEXT_MUTED),
        );
        ui.label(
            egui::RichText::new(value)
                .size(theme::FONT_LABEL)
                .color(value_color)
                .strong(),
        );
    });
}

pub fn section_heading(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_HEADING)
            .color(theme::TEXT_PRIMARY)
            .strong(),
    );
    ui.add_space(theme::SPACING_MD);
}

pub fn field_label(ui: &mut egui::Ui, text: &str) {
    ui.label(
        egui::RichText::new(text)
            .size(theme::FONT_LABEL)
            .color(theme::TEXT_MUTED),
    );
}

/// Centered icon and message for views with nothing to show
pub fn empty_state(ui: &mut egui::Ui, icon: &str, message: &str) {
    ui.vertical_centered(|ui| {
        ui.add_space(48.0);
        ui.label(egui::RichText::new(icon).size(40.0).color(theme::TEXT_DIM));
        ui.add_space(theme::SPACING_MD);
        ui.label(
            egui::RichText::new(message)
                .size(theme::FONT_BODY)
                .color(theme::TEXT_MUTED),
        );
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn loss_is_green_and_gain_is_red() {
        assert_eq!(delta_color(-0.5), theme::STATUS_SUCCESS);
        assert_eq!(delta_color(0.5), theme::STATUS_ERROR);
        assert_eq!(delta_color(0.0), theme::TEXT_MUTED);
    }
}
