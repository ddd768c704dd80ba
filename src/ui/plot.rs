use std::f64::consts::TAU;

use eframe::egui::{Color32, Stroke, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points, Polygon};

use crate::charts::spec::{PieSpec, ScatterSpec};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Central panel – the two charts
// ---------------------------------------------------------------------------

/// Render the success pie and the payload scatter, stacked vertically.
pub fn charts_panel(ui: &mut Ui, state: &AppState) {
    let (pie, scatter) = match (&state.pie, &state.scatter) {
        (Some(pie), Some(scatter)) => (pie, scatter),
        _ => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open a launch dataset to begin  (File → Open…)");
            });
            return;
        }
    };

    let half = ui.available_height() / 2.0;
    pie_chart(ui, pie, half);
    ui.separator();
    scatter_chart(ui, scatter);
}

// ---------------------------------------------------------------------------
// Pie chart
// ---------------------------------------------------------------------------

/// Draw a [`PieSpec`] as polygon sectors on a unit-aspect plot with axes
/// hidden. A spec with no slices (or all-zero values) renders as an empty
/// plot area, which is a valid chart.
fn pie_chart(ui: &mut Ui, spec: &PieSpec, height: f32) {
    ui.strong(&spec.title);

    Plot::new("success_pie")
        .height(height - 24.0)
        .legend(Legend::default())
        .data_aspect(1.0)
        .show_axes(false)
        .show_grid(false)
        .allow_boxed_zoom(false)
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            let total = spec.total();
            if total <= 0.0 {
                return;
            }

            // Start at 12 o'clock, sweep clockwise.
            let mut start = TAU / 4.0;
            for slice in &spec.slices {
                if slice.value <= 0.0 {
                    continue;
                }
                let sweep = slice.value / total * TAU;
                let steps = ((sweep / TAU) * 72.0).ceil().max(2.0) as usize;

                let points: PlotPoints = std::iter::once([0.0, 0.0])
                    .chain((0..=steps).map(|i| {
                        let angle = start - sweep * (i as f64 / steps as f64);
                        [angle.cos(), angle.sin()]
                    }))
                    .collect();

                plot_ui.polygon(
                    Polygon::new(points)
                        .name(format!("{} ({})", slice.label, slice.value as u64))
                        .fill_color(slice.color)
                        .stroke(Stroke::new(1.0, Color32::WHITE)),
                );

                start -= sweep;
            }
        });
}

// ---------------------------------------------------------------------------
// Scatter chart
// ---------------------------------------------------------------------------

/// Draw a [`ScatterSpec`]: one point series per booster version category,
/// x = payload mass, y = outcome (0 = failure, 1 = success).
fn scatter_chart(ui: &mut Ui, spec: &ScatterSpec) {
    ui.strong(&spec.title);

    Plot::new("payload_scatter")
        .legend(Legend::default())
        .x_axis_label("Payload Mass (kg)")
        .y_axis_label("Launch Outcome")
        .include_y(-0.25)
        .include_y(1.25)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for series in &spec.series {
                let points: PlotPoints = series.points.iter().copied().collect();

                plot_ui.points(
                    Points::new(points)
                        .radius(3.5)
                        .color(series.color)
                        .name(&series.label),
                );
            }
        });
}
