use std::path::{Path, PathBuf};

use track_resampler::data::compare::{compare_track, TrackComparison};
use track_resampler::data::loader::{read_boundary, LoadedBoundary};
use track_resampler::data::model::Boundary;
use track_resampler::settings::Settings;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Path typed or picked for the inner boundary.
    pub inner_path: String,

    /// Path typed or picked for the outer boundary.
    pub outer_path: String,

    pub settings: Settings,

    /// Boundaries of the last successful load.
    pub inner: Option<LoadedBoundary>,
    pub outer: Option<LoadedBoundary>,

    /// Result of the last interpolation run.
    pub comparison: Option<TrackComparison>,

    /// Draw the raw input points under the fitted curves.
    pub show_source_points: bool,

    /// Status / warning message shown in the UI.
    pub status_message: Option<String>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(Settings::default())
    }
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            inner_path: String::new(),
            outer_path: String::new(),
            settings,
            inner: None,
            outer: None,
            comparison: None,
            show_source_points: false,
            status_message: None,
        }
    }

    pub fn path_mut(&mut self, boundary: Boundary) -> &mut String {
        match boundary {
            Boundary::Inner => &mut self.inner_path,
            Boundary::Outer => &mut self.outer_path,
        }
    }

    pub fn loaded(&self, boundary: Boundary) -> Option<&LoadedBoundary> {
        match boundary {
            Boundary::Inner => self.inner.as_ref(),
            Boundary::Outer => self.outer.as_ref(),
        }
    }

    /// Take the files picked in one dialog: first is inner, second is outer.
    pub fn set_selected_files(&mut self, files: &[PathBuf]) {
        match files {
            [inner, outer] => {
                self.inner_path = inner.display().to_string();
                self.outer_path = outer.display().to_string();
                self.status_message = None;
            }
            _ => {
                log::warn!("Expected two files, got {}", files.len());
                self.status_message = Some(
                    "Choose exactly two files (inner and outer boundary of the track)!".into(),
                );
            }
        }
    }

    /// Load both files and run every interpolation method.
    ///
    /// Missing or empty files clear the previous result and set a warning
    /// naming every failed file; nothing here aborts the application.
    pub fn run_interpolation(&mut self) {
        if self.inner_path.trim().is_empty() || self.outer_path.trim().is_empty() {
            self.status_message = Some("File not chosen!".into());
            return;
        }

        let inner = read_boundary(Path::new(self.inner_path.trim()));
        let outer = read_boundary(Path::new(self.outer_path.trim()));
        let (inner, outer) = match (inner, outer) {
            (Ok(inner), Ok(outer)) => (inner, outer),
            (inner, outer) => {
                let errors: Vec<String> = [inner.err(), outer.err()]
                    .into_iter()
                    .flatten()
                    .map(|e| {
                        log::error!("{e}");
                        e.to_string()
                    })
                    .collect();
                self.inner = None;
                self.outer = None;
                self.comparison = None;
                self.status_message = Some(format!("Error: {}", errors.join("; ")));
                return;
            }
        };

        let comparison = compare_track(&inner.path, &outer.path, &self.settings);
        let failed = comparison.failures().count();
        self.status_message = (failed > 0)
            .then(|| format!("{failed} of {} methods failed", comparison.methods.len()));

        self.inner = Some(inner);
        self.outer = Some(outer);
        self.comparison = Some(comparison);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_track(dir: &Path, name: &str, text: &str) -> PathBuf {
        let path = dir.join(name);
        let mut f = std::fs::File::create(&path).unwrap();
        write!(f, "{text}").unwrap();
        path
    }

    #[test]
    fn selection_needs_exactly_two_files() {
        let mut state = AppState::default();
        state.set_selected_files(&[PathBuf::from("a.txt")]);
        assert!(state.status_message.is_some());
        assert!(state.inner_path.is_empty());

        state.set_selected_files(&[PathBuf::from("a.txt"), PathBuf::from("b.txt")]);
        assert_eq!(state.inner_path, "a.txt");
        assert_eq!(state.outer_path, "b.txt");
        assert!(state.status_message.is_none());
    }

    #[test]
    fn missing_file_warns_without_result() {
        let dir = tempfile::tempdir().unwrap();
        let inner = write_track(dir.path(), "inner.txt", "0,0,0 1,1,0 2,0,0 3,1,0");
        let mut state = AppState::default();
        state.inner_path = inner.display().to_string();
        state.outer_path = dir.path().join("missing.txt").display().to_string();
        state.run_interpolation();
        assert!(state.comparison.is_none());
        assert!(state.status_message.unwrap().contains("does not exist"));
    }

    #[test]
    fn both_failed_files_are_reported() {
        let dir = tempfile::tempdir().unwrap();
        let empty = write_track(dir.path(), "empty.txt", "not,a,record");
        let mut state = AppState::default();
        state.inner_path = dir.path().join("missing.txt").display().to_string();
        state.outer_path = empty.display().to_string();
        state.run_interpolation();

        let msg = state.status_message.unwrap();
        assert!(msg.contains("does not exist"), "{msg}");
        assert!(msg.contains("No valid points"), "{msg}");
    }

    #[test]
    fn failed_run_clears_the_previous_track() {
        let dir = tempfile::tempdir().unwrap();
        let inner = write_track(dir.path(), "inner.txt", "0,0,0 1,1,0 2,0,0 3,1,0");
        let outer = write_track(dir.path(), "outer.txt", "0,2,0 1,3,0 2,2,0 3,3,0");
        let mut state = AppState::new(Settings {
            num_points: 5,
            ..Settings::default()
        });
        state.set_selected_files(&[inner, outer.clone()]);
        state.run_interpolation();
        assert!(state.comparison.is_some());

        state.inner_path = dir.path().join("gone.txt").display().to_string();
        state.run_interpolation();
        assert!(state.comparison.is_none());
        assert!(state.loaded(Boundary::Inner).is_none());
        assert!(state.loaded(Boundary::Outer).is_none());
        assert_eq!(state.outer_path, outer.display().to_string());
    }

    #[test]
    fn interpolation_fills_the_comparison() {
        let dir = tempfile::tempdir().unwrap();
        let inner = write_track(dir.path(), "inner.txt", "0,0,0 1,1,0 2,0,0 3,1,0");
        let outer = write_track(dir.path(), "outer.txt", "0,2,0 1,3,0 2,2,0 3,3,0");
        let mut state = AppState::new(Settings {
            num_points: 5,
            ..Settings::default()
        });
        state.set_selected_files(&[inner, outer]);
        state.run_interpolation();

        let cmp = state.comparison.as_ref().unwrap();
        assert_eq!(cmp.methods.len(), 4);
        assert_eq!(state.loaded(Boundary::Outer).unwrap().accepted(), 4);
        assert!(state.status_message.is_none());
    }
}
