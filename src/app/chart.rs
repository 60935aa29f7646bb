//! Weight trend chart (graph view)

use super::App;
use crate::constants::{CHART_MIN_ENTRIES, CHART_X_PADDING, CHART_Y_PADDING};
use crate::stats;
use crate::theme;
use crate::types::WeightEntry;
use crate::ui::components::{delta_color, empty_state, section_heading, stat_row};
use crate::utils::{format_delta, format_weight};
use chrono::{Datelike, NaiveDate};
use eframe::egui;
use egui_plot::{Legend, Line, LineStyle, MarkerShape, Plot, PlotBounds, PlotPoints, Points};

/// Plot-ready data for the graph view
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ChartSeries {
    /// `[day number, weight]`, oldest first
    pub points: Vec<[f64; 2]>,
    pub goal: Option<f64>,
    pub y_min: f64,
    pub y_max: f64,
}

impl ChartSeries {
    /// Build the series, or `None` when there are too few entries to plot
    pub fn from_entries(entries: &[WeightEntry], goal: Option<f64>) -> Option<Self> {
        if entries.len() < CHART_MIN_ENTRIES {
            return None;
        }

        let points: Vec<[f64; 2]> = stats::sorted_asc(entries)
            .into_iter()
            .map(|e| [date_to_x(e.date), e.weight])
            .collect();

        let (min, max) = points
            .iter()
            .map(|p| p[1])
            .chain(goal)
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), w| (lo.min(w), hi.max(w)));

        Some(Self {
            points,
            goal,
            y_min: (min - CHART_Y_PADDING).floor(),
            y_max: (max + CHART_Y_PADDING).ceil(),
        })
    }

    fn x_range(&self) -> (f64, f64) {
        let first = self.points.first().map(|p| p[0]).unwrap_or_default();
        let last = self.points.last().map(|p| p[0]).unwrap_or(first);
        (first, last)
    }

    /// Visible area: the padded day span across, exactly `y_min..=y_max` up
    fn plot_bounds(&self) -> PlotBounds {
        let (first, last) = self.x_range();
        PlotBounds::from_min_max(
            [first - CHART_X_PADDING, self.y_min],
            [last + CHART_X_PADDING, self.y_max],
        )
    }
}

fn date_to_x(date: NaiveDate) -> f64 {
    date.num_days_from_ce() as f64
}

fn x_to_date(x: f64) -> Option<NaiveDate> {
    NaiveDate::from_num_days_from_ce_opt(x.round() as i32)
}

/// Axis tick label; blank between whole days
fn format_axis_day(x: f64) -> String {
    if x.fract() != 0.0 {
        return String::new();
    }
    x_to_date(x)
        .map(|d| d.format("%m/%d").to_string())
        .unwrap_or_default()
}

impl App {
    pub(crate) fn render_graph_view(&mut self, ui: &mut egui::Ui) {
        section_heading(ui, "Weight Trend");

        let Some(series) = ChartSeries::from_entries(self.tracker.entries(), self.tracker.goal())
        else {
            empty_state(
                ui,
                egui_phosphor::regular::CHART_LINE,
                "At least two entries are needed to draw the graph.",
            );
            return;
        };

        let weight_line = Line::new(series.points.iter().copied().collect::<PlotPoints>())
            .name("Weight")
            .color(theme::ACCENT)
            .width(theme::STROKE_THICK);
        let markers = Points::new(series.points.iter().copied().collect::<PlotPoints>())
            .name("Weight")
            .color(theme::ACCENT)
            .filled(true)
            .radius(4.0)
            .shape(MarkerShape::Circle);
        let goal_line = series.goal.map(|goal| {
            let (first, last) = series.x_range();
            Line::new(PlotPoints::from(vec![[first, goal], [last, goal]]))
                .name("Goal")
                .color(theme::GOAL)
                .width(theme::STROKE_THICK)
                .style(LineStyle::Dashed { length: 8.0 })
        });

        Plot::new("weight_chart")
            .height(theme::CHART_HEIGHT)
            .legend(Legend::default())
            .show_background(false)
            .allow_drag(false)
            .allow_zoom(false)
            .allow_scroll(false)
            .allow_boxed_zoom(false)
            .x_axis_formatter(|mark, _range| format_axis_day(mark.value))
            .y_axis_formatter(|mark, _range| format!("{:.0}", mark.value))
            .label_formatter(|name, value| {
                if name.is_empty() {
                    return String::new();
                }
                let date = x_to_date(value.x)
                    .map(|d| d.format("%Y-%m-%d").to_string())
                    .unwrap_or_default();
                format!("{}\n{}: {:.1} kg", date, name, value.y)
            })
            .show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(series.plot_bounds());
                plot_ui.line(weight_line);
                plot_ui.points(markers);
                if let Some(goal_line) = goal_line {
                    plot_ui.line(goal_line);
                }
            });

        let Some(summary) = self.tracker.summary() else {
            return;
        };

        ui.add_space(theme::SPACING_LG);
        theme::card_frame().show(ui, |ui| {
            ui.set_width(ui.available_width());
            ui.label(
                egui::RichText::new("Analysis")
                    .size(theme::FONT_BODY)
                    .color(theme::TEXT_PRIMARY)
                    .strong(),
            );
            ui.add_space(theme::SPACING_SM);
            stat_row(
                ui,
                &format!("First record ({})", summary.first_date.format("%Y-%m-%d")),
                &format_weight(summary.first_weight),
                theme::TEXT_PRIMARY,
            );
            stat_row(
                ui,
                &format!("Latest record ({})", summary.latest_date.format("%Y-%m-%d")),
                &format_weight(summary.latest_weight),
                theme::TEXT_PRIMARY,
            );
            stat_row(
                ui,
                "Total change",
                &format_delta(summary.total_change),
                delta_color(summary.total_change),
            );
            if let Some(distance) = summary.to_goal {
                let color = if distance.above_goal {
                    theme::STATUS_ERROR
                } else {
                    theme::STATUS_SUCCESS
                };
                stat_row(ui, "To goal", &format!("{:.1} kg", distance.kg), color);
            }
        });
    }
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
    fn needs_two_entries() {
        assert!(ChartSeries::from_entries(&[], None).is_none());
        assert!(ChartSeries::from_entries(&[entry(1, "2024-01-01", 80.0)], None).is_none());
    }

    #[test]
    fn points_are_oldest_first() {
        let entries = vec![entry(2, "2024-01-08", 78.0), entry(1, "2024-01-01", 80.0)];
        let series = ChartSeries::from_entries(&entries, None).unwrap();

        assert_eq!(series.points[0][1], 80.0);
        assert_eq!(series.points[1][1], 78.0);
        assert_eq!(series.points[1][0] - series.points[0][0], 7.0);
    }

    #[test]
    fn y_bounds_pad_weights_and_goal() {
        let entries = vec![entry(1, "2024-01-01", 80.4), entry(2, "2024-01-08", 78.6)];

        let series = ChartSeries::from_entries(&entries, None).unwrap();
        assert_eq!((series.y_min, series.y_max), (76.0, 83.0));

        let series = ChartSeries::from_entries(&entries, Some(70.0)).unwrap();
        assert_eq!((series.y_min, series.y_max), (68.0, 83.0));
    }

    #[test]
    fn plot_bounds_match_y_domain() {
        let entries = vec![entry(1, "2024-01-01", 80.4), entry(2, "2024-01-08", 78.6)];
        let series = ChartSeries::from_entries(&entries, Some(70.0)).unwrap();

        let bounds = series.plot_bounds();
        assert_eq!(bounds.min()[1], 68.0);
        assert_eq!(bounds.max()[1], 83.0);
        assert_eq!(bounds.min()[0], series.points[0][0] - CHART_X_PADDING);
        assert_eq!(bounds.max()[0], series.points[1][0] + CHART_X_PADDING);
    }

    #[test]
    fn axis_labels_show_month_and_day() {
        let x = date_to_x(NaiveDate::from_ymd_opt(2024, 3, 7).unwrap());
        assert_eq!(format_axis_day(x), "03/07");
        assert_eq!(format_axis_day(x + 0.5), "");
    }
}
