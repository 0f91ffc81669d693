use super::solve::BandedMatrix;
use super::{check_len, split_xy, Method, PathModel, ResampleError};
use crate::data::model::Point2;

const DEGREE: usize = 3;

/// Interpolating cubic B-spline through x and y jointly (zero smoothing).
///
/// The knot vector is clamped at 0 and 1 with interior knots at the data
/// parameters `u[2] ..= u[n - 3]`, so the curve passes through every input
/// point and has as many control points as data points.
#[derive(Debug, Clone)]
pub struct BSplineFit {
    knots: Vec<f64>,
    control: Vec<Point2>,
}

impl BSplineFit {
    fn knot_vector(params: &[f64]) -> Vec<f64> {
        let n = params.len();
        let mut knots = Vec::with_capacity(n + DEGREE + 1);
        knots.extend([0.0; DEGREE + 1]);
        knots.extend_from_slice(&params[2..n - 2]);
        knots.extend([1.0; DEGREE + 1]);
        knots
    }

    /// Index of the last control point.
    fn last(&self) -> usize {
        self.control.len() - 1
    }
}

/// Knot span containing `u`: `knots[span] <= u < knots[span + 1]`, with
/// the right end folded into the last non-empty span.
fn find_span(knots: &[f64], last: usize, u: f64) -> usize {
    if u >= knots[last + 1] {
        return last;
    }
    if u <= knots[DEGREE] {
        return DEGREE;
    }
    let mut low = DEGREE;
    let mut high = last + 1;
    let mut mid = (low + high) / 2;
    while u < knots[mid] || u >= knots[mid + 1] {
        if u < knots[mid] {
            high = mid;
        } else {
            low = mid;
        }
        mid = (low + high) / 2;
    }
    mid
}

/// The `DEGREE + 1` basis functions that are non-zero on `span`, for control
/// points `span - DEGREE ..= span` (Cox–de Boor recurrence).
fn basis_functions(knots: &[f64], span: usize, u: f64) -> [f64; DEGREE + 1] {
    let mut basis = [0.0; DEGREE + 1];
    let mut left = [0.0; DEGREE + 1];
    let mut right = [0.0; DEGREE + 1];
    basis[0] = 1.0;

    for j in 1..=DEGREE {
        left[j] = u - knots[span + 1 - j];
        right[j] = knots[span + j] - u;
        let mut saved = 0.0;
        for r in 0..j {
            let temp = basis[r] / (right[r + 1] + left[j - r]);
            basis[r] = saved + right[r + 1] * temp;
            saved = left[j - r] * temp;
        }
        basis[j] = saved;
    }

    basis
}

impl PathModel for BSplineFit {
    const METHOD: Method = Method::Spline;
    const MIN_POINTS: usize = DEGREE + 1;

    fn fit(params: &[f64], points: &[Point2]) -> Result<Self, ResampleError> {
        check_len::<Self>(points.len())?;
        let n = points.len();
        let knots = Self::knot_vector(params);

        // Collocation rows only touch columns row - 3 ..= row + 3.
        let mut system = BandedMatrix::zeros(n, DEGREE, DEGREE);
        for (row, &u) in params.iter().enumerate() {
            let span = find_span(&knots, n - 1, u);
            let basis = basis_functions(&knots, span, u);
            for (r, value) in basis.into_iter().enumerate() {
                let col = span - DEGREE + r;
                if value != 0.0 {
                    system.set(row, col, value);
                }
            }
        }

        let lu = system.factorize().ok_or(ResampleError::SingularSystem {
            method: Self::METHOD,
        })?;
        let (xs, ys) = split_xy(points);
        let cx = lu.solve(&xs);
        let cy = lu.solve(&ys);
        let control = cx
            .into_iter()
            .zip(cy)
            .map(|(x, y)| Point2::new(x, y))
            .collect();

        Ok(Self { knots, control })
    }

    fn eval(&self, u: f64) -> Point2 {
        let span = find_span(&self.knots, self.last(), u);
        let basis = basis_functions(&self.knots, span, u);
        let mut p = Point2::default();
        for (r, b) in basis.into_iter().enumerate() {
            let c = self.control[span - DEGREE + r];
            p.x += b * c.x;
            p.y += b * c.y;
        }
        p
    }
}
