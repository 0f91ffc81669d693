//! Resampling a boundary to a fixed number of points.
//!
//! Every method parametrizes the input by point index: point `i` of `n` sits
//! at `u = i / (n - 1)`. Arc length is not used. The fitted model is then
//! evaluated at `num_points` evenly spaced parameters over `[0, 1]`, both ends
//! included.

mod bspline;
mod cubic;
mod linear;
mod rbf;
mod solve;

use std::fmt;

use thiserror::Error;

use super::model::{BoundaryPath, Point2, ResampledPath};

pub use bspline::BSplineFit;
pub use cubic::NaturalCubicFit;
pub use linear::LinearFit;
pub use rbf::RbfFit;

/// Default resample density.
pub const DEFAULT_NUM_POINTS: usize = 10_000;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ResampleError {
    #[error("{method} needs at least {required} points, got {actual}")]
    UnderdeterminedFit {
        method: Method,
        required: usize,
        actual: usize,
    },

    #[error("{method} fit produced a singular linear system")]
    SingularSystem { method: Method },
}

// ---------------------------------------------------------------------------
// Method – the four interchangeable strategies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    /// Interpolating cubic B-spline through x and y jointly.
    Spline,
    /// Piecewise-linear per coordinate.
    Linear,
    /// Natural cubic spline per coordinate.
    Cubic,
    /// Thin-plate radial basis functions per coordinate.
    Rbf,
}

impl Method {
    /// Display order of the comparison grid.
    pub const ALL: [Method; 4] = [Method::Spline, Method::Linear, Method::Cubic, Method::Rbf];

    pub fn label(self) -> &'static str {
        match self {
            Method::Spline => "B-spline",
            Method::Linear => "Linear",
            Method::Cubic => "Cubic Spline",
            Method::Rbf => "RBF",
        }
    }

    /// Smallest input size the method can fit.
    pub fn min_points(self) -> usize {
        match self {
            Method::Spline => BSplineFit::MIN_POINTS,
            Method::Linear => LinearFit::MIN_POINTS,
            Method::Cubic => NaturalCubicFit::MIN_POINTS,
            Method::Rbf => RbfFit::MIN_POINTS,
        }
    }

    /// Resample `path` to exactly `num_points` points.
    ///
    /// An empty path gives an empty result for every method. Too few points
    /// for the method fail with [`ResampleError::UnderdeterminedFit`].
    pub fn resample(
        self,
        path: &BoundaryPath,
        num_points: usize,
    ) -> Result<ResampledPath, ResampleError> {
        if path.is_empty() {
            return Ok(ResampledPath::empty(self));
        }

        let params = linspace(path.len());
        let points = path.points();
        let resampled = match self {
            Method::Spline => sample(&BSplineFit::fit(&params, points)?, num_points),
            Method::Linear => sample(&LinearFit::fit(&params, points)?, num_points),
            Method::Cubic => sample(&NaturalCubicFit::fit(&params, points)?, num_points),
            Method::Rbf => sample(&RbfFit::fit(&params, points)?, num_points),
        };

        log::debug!(
            "{}: resampled {} points to {}",
            self,
            path.len(),
            resampled.len()
        );

        Ok(ResampledPath {
            method: self,
            points: resampled,
        })
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// PathModel – a fitted curve that can be evaluated at a parameter
// ---------------------------------------------------------------------------

pub trait PathModel: Sized {
    const METHOD: Method;
    const MIN_POINTS: usize;

    /// Fit the model through `points` placed at the strictly increasing
    /// parameters `params` (same length, non-empty).
    fn fit(params: &[f64], points: &[Point2]) -> Result<Self, ResampleError>;

    /// Evaluate the fitted curve at `u` in `[0, 1]`.
    fn eval(&self, u: f64) -> Point2;
}

fn check_len<M: PathModel>(actual: usize) -> Result<(), ResampleError> {
    if actual < M::MIN_POINTS {
        return Err(ResampleError::UnderdeterminedFit {
            method: M::METHOD,
            required: M::MIN_POINTS,
            actual,
        });
    }
    Ok(())
}

fn sample<M: PathModel>(model: &M, num_points: usize) -> Vec<Point2> {
    linspace(num_points).into_iter().map(|u| model.eval(u)).collect()
}

// ---------------------------------------------------------------------------
// Parameter helpers
// ---------------------------------------------------------------------------

/// `count` evenly spaced values over `[0, 1]`, inclusive. One value gives
/// `[0.0]`; zero gives an empty vector.
pub fn linspace(count: usize) -> Vec<f64> {
    match count {
        0 => Vec::new(),
        1 => vec![0.0],
        _ => {
            let last = (count - 1) as f64;
            (0..count)
                .map(|i| if i + 1 == count { 1.0 } else { i as f64 / last })
                .collect()
        }
    }
}

/// Segment index `i` with `params[i] <= u <= params[i + 1]` and the local
/// coordinate in that segment. `params` needs at least two entries. Values
/// outside the range extrapolate from the end segments.
fn locate(params: &[f64], u: f64) -> (usize, f64) {
    let last_segment = params.len() - 2;
    let i = params
        .partition_point(|&p| p <= u)
        .saturating_sub(1)
        .min(last_segment);
    let t = (u - params[i]) / (params[i + 1] - params[i]);
    (i, t)
}

fn split_xy(points: &[Point2]) -> (Vec<f64>, Vec<f64>) {
    points.iter().map(|p| (p.x, p.y)).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn square() -> BoundaryPath {
        BoundaryPath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(0.0, 1.0),
            Point2::new(0.0, 0.0),
        ])
    }

    fn wavy(n: usize) -> BoundaryPath {
        (0..n)
            .map(|i| {
                let a = i as f64 * 0.3;
                Point2::new(a.cos() * (2.0 + 0.1 * i as f64), a.sin())
            })
            .collect::<Vec<_>>()
            .into()
    }

    #[test]
    fn linspace_is_inclusive() {
        assert_eq!(linspace(0), Vec::<f64>::new());
        assert_eq!(linspace(1), vec![0.0]);
        assert_eq!(linspace(5), vec![0.0, 0.25, 0.5, 0.75, 1.0]);
    }

    #[test]
    fn locate_clamps_to_end_segments() {
        let params = linspace(3);
        assert_eq!(locate(&params, 0.0), (0, 0.0));
        assert_eq!(locate(&params, 1.0), (1, 1.0));
        let (i, t) = locate(&params, 0.75);
        assert_eq!(i, 1);
        assert_relative_eq!(t, 0.5);
    }

    #[test]
    fn every_method_returns_requested_count() {
        let path = wavy(12);
        for method in Method::ALL {
            for k in [1, 2, 7, 250] {
                let out = method.resample(&path, k).unwrap();
                assert_eq!(out.len(), k, "{method} with k = {k}");
                assert_eq!(out.method, method);
            }
        }
    }

    #[test]
    fn empty_input_gives_empty_output_for_every_method() {
        let empty = BoundaryPath::default();
        for method in Method::ALL {
            let out = method.resample(&empty, 100).unwrap();
            assert!(out.is_empty(), "{method}");
        }
    }

    #[test]
    fn resampling_is_deterministic() {
        let path = wavy(20);
        for method in Method::ALL {
            let a = method.resample(&path, 333).unwrap();
            let b = method.resample(&path, 333).unwrap();
            assert_eq!(a, b, "{method}");
        }
    }

    #[test]
    fn linear_square_keeps_endpoints() {
        let path = square();
        let out = Method::Linear.resample(&path, 100).unwrap();
        let first = out.points[0];
        let last = out.points[99];
        assert_relative_eq!(first.x, 0.0);
        assert_relative_eq!(first.y, 0.0);
        assert_relative_eq!(last.x, 0.0);
        assert_relative_eq!(last.y, 0.0);
    }

    #[test]
    fn all_methods_keep_endpoints_of_open_path() {
        let path = wavy(9);
        let first = path.first().unwrap();
        let last = path.last().unwrap();
        for method in Method::ALL {
            let out = method.resample(&path, 50).unwrap();
            assert_relative_eq!(out.points[0].x, first.x, epsilon = 1e-8);
            assert_relative_eq!(out.points[0].y, first.y, epsilon = 1e-8);
            assert_relative_eq!(out.points[49].x, last.x, epsilon = 1e-8);
            assert_relative_eq!(out.points[49].y, last.y, epsilon = 1e-8);
        }
    }

    #[test]
    fn three_points_underdetermine_the_b_spline() {
        let path = BoundaryPath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ]);
        assert_eq!(
            Method::Spline.resample(&path, 10),
            Err(ResampleError::UnderdeterminedFit {
                method: Method::Spline,
                required: 4,
                actual: 3,
            })
        );
    }

    #[test]
    fn three_points_fit_a_natural_cubic() {
        let path = BoundaryPath::new(vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 1.0),
            Point2::new(2.0, 0.0),
        ]);
        let out = Method::Cubic.resample(&path, 3).unwrap();
        assert_relative_eq!(out.points[1].x, 1.0, epsilon = 1e-12);
        assert_relative_eq!(out.points[1].y, 1.0, epsilon = 1e-12);
    }

    #[test]
    fn single_point_only_fits_rbf() {
        let path = BoundaryPath::new(vec![Point2::new(3.0, 4.0)]);
        for method in [Method::Linear, Method::Cubic, Method::Spline] {
            let err = method.resample(&path, 5).unwrap_err();
            assert!(matches!(
                err,
                ResampleError::UnderdeterminedFit { actual: 1, .. }
            ));
        }
        let out = Method::Rbf.resample(&path, 5).unwrap();
        assert!(out.points.iter().all(|p| *p == Point2::new(3.0, 4.0)));
    }

    #[test]
    fn min_points_matches_fit_requirements() {
        assert_eq!(Method::Spline.min_points(), 4);
        assert_eq!(Method::Linear.min_points(), 2);
        assert_eq!(Method::Cubic.min_points(), 2);
        assert_eq!(Method::Rbf.min_points(), 1);
    }
}
