use eframe::egui::{self, Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints, Points};

use track_resampler::data::compare::MethodResult;
use track_resampler::data::model::Boundary;

use crate::color::{boundary_color, source_color};
use crate::state::AppState;

// ---------------------------------------------------------------------------
// 2×2 comparison grid (central panel)
// ---------------------------------------------------------------------------

/// Render one plot per interpolation method in a 2×2 grid.
pub fn comparison_grid(ui: &mut Ui, state: &AppState) {
    let comparison = match &state.comparison {
        Some(cmp) => cmp,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Choose the inner and outer boundary, then press Interpolate");
            });
            return;
        }
    };

    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading("Comparison of Different Interpolation Methods");
    });

    let spacing = ui.spacing().item_spacing;
    let cell_width = (ui.available_width() - spacing.x) / 2.0;
    // Leave room for the per-cell title line.
    let cell_height = (ui.available_height() - 3.0 * spacing.y) / 2.0 - 24.0;

    for row in comparison.methods.chunks(2) {
        ui.horizontal(|ui: &mut Ui| {
            for entry in row {
                ui.vertical(|ui: &mut Ui| {
                    ui.set_width(cell_width);
                    method_cell(ui, state, entry, cell_width, cell_height);
                });
            }
        });
    }
}

fn method_cell(
    ui: &mut Ui,
    state: &AppState,
    entry: &MethodResult,
    width: f32,
    height: f32,
) {
    ui.strong(format!("Interpolation: {}", entry.method));

    let pair = match &entry.result {
        Ok(pair) => pair,
        Err(e) => {
            ui.allocate_ui(egui::vec2(width, height), |ui: &mut Ui| {
                ui.centered_and_justified(|ui: &mut Ui| {
                    ui.label(RichText::new(e.to_string()).color(Color32::RED));
                });
            });
            return;
        }
    };

    Plot::new(("comparison_plot", entry.method))
        .width(width)
        .height(height.max(80.0))
        .data_aspect(1.0)
        .legend(Legend::default())
        .show_grid(true)
        .x_axis_label("Longitude")
        .y_axis_label("Latitude")
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for boundary in Boundary::ALL {
                if state.show_source_points {
                    if let Some(loaded) = state.loaded(boundary) {
                        let raw: PlotPoints = loaded
                            .path
                            .points()
                            .iter()
                            .map(|p| p.to_array())
                            .collect();
                        plot_ui.points(
                            Points::new(raw)
                                .radius(2.0)
                                .color(source_color(boundary)),
                        );
                    }
                }

                let resampled = pair.get(boundary);
                let line = Line::new(PlotPoints::from(resampled.plot_points()))
                    .name(boundary.to_string())
                    .color(boundary_color(boundary))
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}
