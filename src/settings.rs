use std::ffi::OsStr;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::data::resample::DEFAULT_NUM_POINTS;

/// Environment variable naming a JSON settings file.
pub const CONFIG_ENV: &str = "TRACK_RESAMPLER_CONFIG";

/// Resampling settings shared by every front end.
///
/// Loaded from JSON; keys that are missing keep their defaults:
///
/// ```json
/// { "num_points": 2000, "close_loops": true, "loop_tolerance": 1e-6 }
/// ```
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Target number of points per resampled boundary.
    pub num_points: usize,
    /// Snap the last resampled point onto the first for closed boundaries.
    pub close_loops: bool,
    /// Per-axis distance under which a boundary counts as closed.
    pub loop_tolerance: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            num_points: DEFAULT_NUM_POINTS,
            close_loops: true,
            loop_tolerance: 1e-6,
        }
    }
}

impl Settings {
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("parsing settings JSON")
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings file {}", path.display()))?;
        Self::from_json(&text)
    }

    /// Settings from `explicit`, else from [`CONFIG_ENV`], else defaults.
    /// A file that cannot be read is logged and replaced by the defaults.
    pub fn resolve(explicit: Option<&Path>) -> Self {
        let env_path = std::env::var_os(CONFIG_ENV);
        Self::resolve_from(explicit, env_path.as_deref())
    }

    /// [`Settings::resolve`] with the environment value passed in.
    pub fn resolve_from(explicit: Option<&Path>, env_path: Option<&OsStr>) -> Self {
        let Some(path) = explicit.or(env_path.map(Path::new)) else {
            return Self::default();
        };

        match Self::from_file(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Using default settings: {e:#}");
                Self::default()
            }
        }
    }

    /// Apply command-line overrides on top of the file settings.
    pub fn with_overrides(mut self, num_points: Option<usize>) -> Self {
        if let Some(n) = num_points {
            self.num_points = n;
        }
        self
    }
}
