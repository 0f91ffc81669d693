use eframe::egui;

use crate::state::AppState;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct TrackResamplerApp {
    pub state: AppState,
}

impl TrackResamplerApp {
    pub fn new(state: AppState) -> Self {
        Self { state }
    }
}

impl eframe::App for TrackResamplerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: files and settings ----
        egui::SidePanel::left("input_panel")
            .default_width(280.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: 2×2 method comparison ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::comparison_grid(ui, &self.state);
        });
    }
}
