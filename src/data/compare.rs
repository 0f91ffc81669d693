use super::model::{Boundary, BoundaryPath, ResampledPath};
use super::resample::{Method, ResampleError};
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// One track, every method
// ---------------------------------------------------------------------------

/// Inner and outer boundary resampled by the same method.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundaryPair {
    pub inner: ResampledPath,
    pub outer: ResampledPath,
}

impl BoundaryPair {
    pub fn get(&self, boundary: Boundary) -> &ResampledPath {
        match boundary {
            Boundary::Inner => &self.inner,
            Boundary::Outer => &self.outer,
        }
    }
}

/// Outcome of one method. Failures stay per method so the caller decides
/// what to show.
#[derive(Debug, Clone, PartialEq)]
pub struct MethodResult {
    pub method: Method,
    pub result: Result<BoundaryPair, ResampleError>,
}

/// All four methods applied to one track, in [`Method::ALL`] order.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackComparison {
    pub num_points: usize,
    pub methods: Vec<MethodResult>,
}

impl TrackComparison {
    pub fn get(&self, method: Method) -> Option<&MethodResult> {
        self.methods.iter().find(|m| m.method == method)
    }

    pub fn failures(&self) -> impl Iterator<Item = (Method, &ResampleError)> {
        self.methods
            .iter()
            .filter_map(|m| m.result.as_ref().err().map(|e| (m.method, e)))
    }
}

/// Resample both boundaries with every method.
pub fn compare_track(
    inner: &BoundaryPath,
    outer: &BoundaryPath,
    settings: &Settings,
) -> TrackComparison {
    let methods = Method::ALL
        .into_iter()
        .map(|method| {
            let result = resample_pair(method, inner, outer, settings);
            if let Err(e) = &result {
                log::error!("{method} failed: {e}");
            }
            MethodResult { method, result }
        })
        .collect();

    TrackComparison {
        num_points: settings.num_points,
        methods,
    }
}

fn resample_pair(
    method: Method,
    inner: &BoundaryPath,
    outer: &BoundaryPath,
    settings: &Settings,
) -> Result<BoundaryPair, ResampleError> {
    Ok(BoundaryPair {
        inner: resample_boundary(method, inner, settings)?,
        outer: resample_boundary(method, outer, settings)?,
    })
}

fn resample_boundary(
    method: Method,
    path: &BoundaryPath,
    settings: &Settings,
) -> Result<ResampledPath, ResampleError> {
    let mut resampled = method.resample(path, settings.num_points)?;
    if settings.close_loops && path.is_closed(settings.loop_tolerance) {
        resampled.close_loop();
    }
    Ok(resampled)
}
