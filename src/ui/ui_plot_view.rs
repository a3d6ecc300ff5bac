use chrono::{DateTime, NaiveDate};
use colorgrad::Gradient;
use eframe::egui::{Color32, Ui};
use egui_plot::{Axis, AxisHints, HPlacement, Legend, Line, Plot, PlotPoints, VPlacement};

use crate::table::{Observation, ResultTable};
use crate::ui::ui_config::{UI_CONFIG, UI_TEXT};

/// Line chart over the result table: one line per display name, x is the
/// synthesized first-of-month date, y is the observed value.
pub(crate) struct PlotView;

impl PlotView {
    pub(crate) fn new() -> Self {
        Self
    }

    pub(crate) fn show_observations(&self, ui: &mut Ui, table: &ResultTable) {
        let names = table.series_names();
        let colors = series_colors(names.len());

        let x_axis = AxisHints::new(Axis::X)
            .label(UI_TEXT.plot_x_axis)
            .formatter(|mark, _range| format_epoch_secs(mark.value))
            .placement(VPlacement::Bottom);
        let y_axis = AxisHints::new_y()
            .label(UI_TEXT.plot_y_axis)
            .placement(HPlacement::Left);

        Plot::new("bls_plot")
            .legend(Legend::default())
            .custom_x_axes(vec![x_axis])
            .custom_y_axes(vec![y_axis])
            .show(ui, |plot_ui| {
                for (name, color) in names.iter().zip(colors) {
                    // Points stay in response order; the API returns a
                    // monotonic sequence per series so no sorting is needed.
                    let points: Vec<[f64; 2]> = table
                        .rows
                        .iter()
                        .filter(|o| o.series_name == *name)
                        .filter_map(|o| Some([first_of_month_secs(o)?, o.value]))
                        .collect();
                    plot_ui.line(
                        Line::new((*name).to_owned(), PlotPoints::new(points))
                            .color(color)
                            .width(2.0),
                    );
                }
            });
    }
}

/// Epoch seconds of the first of the observation's month, midnight UTC.
fn first_of_month_secs(obs: &Observation) -> Option<f64> {
    let date = NaiveDate::from_ymd_opt(obs.year, obs.month, 1)?;
    Some(date.and_hms_opt(0, 0, 0)?.and_utc().timestamp() as f64)
}

fn format_epoch_secs(value: f64) -> String {
    DateTime::from_timestamp(value as i64, 0)
        .map(|dt| dt.format("%b %Y").to_string())
        .unwrap_or_default()
}

fn series_colors(count: usize) -> Vec<Color32> {
    let grad = colorgrad::GradientBuilder::new()
        .html_colors(UI_CONFIG.series_gradient_colors)
        .build::<colorgrad::CatmullRomGradient>()
        .expect("Failed to create color gradient");

    (0..count)
        .map(|i| {
            let t = if count <= 1 {
                0.0
            } else {
                i as f32 / (count - 1) as f32
            };
            to_egui_color(grad.at(t))
        })
        .collect()
}

fn to_egui_color(colorgrad_color: colorgrad::Color) -> Color32 {
    let rgba8 = colorgrad_color.to_rgba8();
    Color32::from_rgb(rgba8[0], rgba8[1], rgba8[2])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_of_month_is_midnight_utc() {
        let obs = Observation {
            series_name: "x".to_string(),
            year: 2023,
            month: 1,
            value: 3.4,
        };
        let secs = first_of_month_secs(&obs).unwrap();
        assert_eq!(format_epoch_secs(secs), "Jan 2023");
    }

    #[test]
    fn one_color_per_series() {
        assert_eq!(series_colors(0).len(), 0);
        assert_eq!(series_colors(1).len(), 1);
        assert_eq!(series_colors(9).len(), 9);
    }
}
