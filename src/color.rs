use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

use track_resampler::data::model::Boundary;

// ---------------------------------------------------------------------------
// Boundary colours
// ---------------------------------------------------------------------------

const INNER_HUE: f32 = 0.0;
const OUTER_HUE: f32 = 220.0;

fn hsl_color(hue: f32, saturation: f32, lightness: f32) -> Color32 {
    let rgb: Srgb = Hsl::new(hue, saturation, lightness).into_color();
    Color32::from_rgb(
        (rgb.red * 255.0).round() as u8,
        (rgb.green * 255.0).round() as u8,
        (rgb.blue * 255.0).round() as u8,
    )
}

/// Line colour of a boundary: red inside, blue outside.
pub fn boundary_color(boundary: Boundary) -> Color32 {
    match boundary {
        Boundary::Inner => hsl_color(INNER_HUE, 0.75, 0.5),
        Boundary::Outer => hsl_color(OUTER_HUE, 0.75, 0.5),
    }
}

/// Muted variant for the raw input points drawn under the fit.
pub fn source_color(boundary: Boundary) -> Color32 {
    match boundary {
        Boundary::Inner => hsl_color(INNER_HUE, 0.35, 0.7),
        Boundary::Outer => hsl_color(OUTER_HUE, 0.35, 0.7),
    }
}
