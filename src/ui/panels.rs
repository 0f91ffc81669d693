use std::path::PathBuf;

use eframe::egui::{self, Color32, RichText, Ui};

use track_resampler::data::model::Boundary;

use crate::color::boundary_color;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Left side panel – input files and settings
// ---------------------------------------------------------------------------

/// Render the left input panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Track files");
    ui.separator();

    if ui.button("Choose files…").clicked() {
        choose_files_dialog(state);
    }
    ui.add_space(4.0);

    for boundary in Boundary::ALL {
        path_row(ui, state, boundary);
    }

    ui.separator();
    ui.strong("Resampling");

    ui.horizontal(|ui: &mut Ui| {
        ui.label("Points");
        ui.add(
            egui::DragValue::new(&mut state.settings.num_points)
                .range(2..=200_000)
                .speed(50.0),
        );
    });
    ui.checkbox(&mut state.settings.close_loops, "Close loops")
        .on_hover_text("Snap the last point onto the first when a boundary is closed");
    ui.checkbox(&mut state.show_source_points, "Show input points");

    ui.add_space(8.0);
    if ui
        .add_sized([ui.available_width(), 28.0], egui::Button::new("Interpolate"))
        .clicked()
    {
        state.run_interpolation();
    }

    ui.separator();
    load_summary(ui, state);
}

/// Label, text field and browse button for one boundary file.
fn path_row(ui: &mut Ui, state: &mut AppState, boundary: Boundary) {
    ui.label(RichText::new(boundary.to_string()).color(boundary_color(boundary)));
    ui.horizontal(|ui: &mut Ui| {
        let browse = ui.button("Browse…");
        ui.add(
            egui::TextEdit::singleline(state.path_mut(boundary))
                .hint_text("path/to/boundary.txt")
                .desired_width(f32::INFINITY),
        );
        if browse.clicked() {
            if let Some(path) = text_file_dialog(&format!("Open {boundary}")).pick_file() {
                *state.path_mut(boundary) = path.display().to_string();
            }
        }
    });
}

fn load_summary(ui: &mut Ui, state: &AppState) {
    let mut any = false;
    for boundary in Boundary::ALL {
        let Some(loaded) = state.loaded(boundary) else {
            continue;
        };
        any = true;
        ui.label(format!(
            "{boundary}: {} points from {}",
            loaded.accepted(),
            loaded.file_name()
        ))
        .on_hover_text(loaded.source.display().to_string());
        if !loaded.skipped.is_empty() {
            ui.label(
                RichText::new(format!("  {} malformed tokens ignored", loaded.skipped.len()))
                    .color(Color32::YELLOW),
            );
        }
        for method in loaded.underdetermined_methods() {
            ui.label(
                RichText::new(format!(
                    "  {method} needs at least {} points",
                    method.min_points()
                ))
                .color(Color32::YELLOW),
            );
        }
    }
    if !any {
        ui.label("No track loaded.");
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Choose files…").clicked() {
                choose_files_dialog(state);
                ui.close_menu();
            }
            if ui.button("Interpolate").clicked() {
                state.run_interpolation();
                ui.close_menu();
            }
        });

        ui.separator();

        if let Some(cmp) = &state.comparison {
            ui.label(format!(
                "{} points per boundary, {} methods",
                cmp.num_points,
                cmp.methods.len()
            ));
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

fn text_file_dialog(title: &str) -> rfd::FileDialog {
    rfd::FileDialog::new()
        .set_title(title)
        .add_filter("Text files", &["txt"])
        .add_filter("All files", &["*"])
}

/// Pick both boundary files at once: first inner, then outer.
pub fn choose_files_dialog(state: &mut AppState) {
    let files: Option<Vec<PathBuf>> = text_file_dialog("Choose files with data").pick_files();

    if let Some(files) = files {
        state.set_selected_files(&files);
    }
}
