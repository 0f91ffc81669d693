mod app;
mod color;
mod state;
mod ui;

use std::path::PathBuf;

use app::TrackResamplerApp;
use clap::Parser;
use eframe::egui;
use state::AppState;
use track_resampler::settings::Settings;

#[derive(Parser)]
#[command(name = "track-resampler")]
#[command(about = "Resample track boundaries and compare interpolation methods")]
struct Cli {
    /// Inner boundary file (x,y,z records)
    inner: Option<PathBuf>,
    /// Outer boundary file (x,y,z records)
    outer: Option<PathBuf>,
    /// Points per resampled boundary (overrides the settings file)
    #[arg(long)]
    num_points: Option<usize>,
    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn main() -> eframe::Result {
    env_logger::init();
    let cli = Cli::parse();

    let settings = Settings::resolve(cli.config.as_deref()).with_overrides(cli.num_points);

    let mut state = AppState::new(settings);
    match (cli.inner, cli.outer) {
        (Some(inner), Some(outer)) => {
            // Paths on the command line: run straight away.
            state.set_selected_files(&[inner, outer]);
            state.run_interpolation();
        }
        (Some(_), None) => log::warn!("Outer boundary missing, ignoring the inner path"),
        _ => {}
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 1000.0])
            .with_min_inner_size([600.0, 400.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Interpolation of the track",
        options,
        Box::new(|_cc| Ok(Box::new(TrackResamplerApp::new(state)))),
    )
}
