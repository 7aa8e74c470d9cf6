//! Step-plot rendering for the selected signals.
//!
//! Each signal gets its own subplot, stacked vertically. The sample values
//! hold constant until the next sample (post-step interpolation), so the
//! series are expanded into explicit corner points before drawing.

use eframe::egui;
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::extract::{Extraction, SignalSeries};

/// Subplots never shrink below this; past that the plot area scrolls.
const MIN_PLOT_HEIGHT: f32 = 120.0;

/// Microsecond offsets are displayed on a millisecond axis.
fn to_ms(micros: i64) -> f64 {
    micros as f64 / 1000.0
}

/// Expand a series into an explicit post-step polyline, in milliseconds.
///
/// Every sample is paired with the timestamp of the packet it occurred in,
/// holds its value until the next sample's timestamp, and the last value
/// extends to the final packet timestamp.
pub fn step_points(timestamps: &[i64], series: &SignalSeries) -> Vec<[f64; 2]> {
    let Some(&end) = timestamps.last() else {
        return Vec::new();
    };
    let samples = &series.samples;
    let mut points = Vec::with_capacity(samples.len() * 2 + 1);
    for pair in samples.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        let t0 = to_ms(timestamps[current.packet]);
        let t1 = to_ms(timestamps[next.packet]);
        points.push([t0, current.value as f64]);
        points.push([t1, current.value as f64]);
    }
    if let Some(last) = samples.last() {
        let t = to_ms(timestamps[last.packet]);
        points.push([t, last.value as f64]);
        let end_ms = to_ms(end);
        if end_ms > t {
            points.push([end_ms, last.value as f64]);
        }
    }
    points
}

/// Draw one step subplot per name, in the given order, sharing the plot area
/// height. Names without a series are skipped.
pub fn render_step_plots(ui: &mut egui::Ui, extraction: &Extraction, names: &[String]) {
    let count = names.len().max(1);
    let spacing = ui.spacing().item_spacing.y;
    let height = ((ui.available_height() - spacing * (count as f32 - 1.0)) / count as f32)
        .max(MIN_PLOT_HEIGHT);

    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui| {
            for name in names {
                let Some(series) = extraction.series(name) else {
                    continue;
                };
                let points = step_points(extraction.timestamps(), series);
                let line = Line::new(name.as_str(), PlotPoints::from(points));
                Plot::new(("signal_plot", name.as_str()))
                    .height(height)
                    .allow_scroll(false)
                    .legend(Legend::default())
                    .x_axis_label("ms")
                    .y_axis_label(name.as_str())
                    .show(ui, |plot_ui| {
                        plot_ui.line(line);
                    });
            }
        });
}
