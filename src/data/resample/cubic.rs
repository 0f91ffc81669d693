use super::solve::BandedMatrix;
use super::{check_len, locate, split_xy, Method, PathModel, ResampleError};
use crate::data::model::Point2;

/// Natural cubic spline of x(u) and y(u): zero second derivative at both
/// ends, continuous first and second derivatives inside.
#[derive(Debug, Clone)]
pub struct NaturalCubicFit {
    params: Vec<f64>,
    x: CubicCoordinate,
    y: CubicCoordinate,
}

/// Knot values and second derivatives of one coordinate.
#[derive(Debug, Clone)]
struct CubicCoordinate {
    values: Vec<f64>,
    second: Vec<f64>,
}

impl CubicCoordinate {
    fn eval(&self, params: &[f64], i: usize, t: f64) -> f64 {
        let h = params[i + 1] - params[i];
        let a = 1.0 - t;
        let b = t;
        a * self.values[i]
            + b * self.values[i + 1]
            + ((a * a * a - a) * self.second[i] + (b * b * b - b) * self.second[i + 1]) * h * h
                / 6.0
    }
}

/// Solve for the second derivatives at every knot.
///
/// Interior equations:
/// `h[i-1] M[i-1] + 2 (h[i-1] + h[i]) M[i] + h[i] M[i+1] = 6 (d[i] - d[i-1])`
/// with `d` the segment slopes; `M` is zero at both ends.
fn second_derivatives(params: &[f64], xs: &[f64], ys: &[f64]) -> Option<(Vec<f64>, Vec<f64>)> {
    let n = params.len();
    let mut mx = vec![0.0; n];
    let mut my = vec![0.0; n];
    if n < 3 {
        return Some((mx, my));
    }

    let h: Vec<f64> = params.windows(2).map(|w| w[1] - w[0]).collect();
    let interior = n - 2;
    let mut system = BandedMatrix::zeros(interior, 1, 1);
    let mut rhs_x = Vec::with_capacity(interior);
    let mut rhs_y = Vec::with_capacity(interior);

    for row in 0..interior {
        let i = row + 1;
        if row > 0 {
            system.set(row, row - 1, h[i - 1]);
        }
        system.set(row, row, 2.0 * (h[i - 1] + h[i]));
        if row + 1 < interior {
            system.set(row, row + 1, h[i]);
        }
        rhs_x.push(6.0 * ((xs[i + 1] - xs[i]) / h[i] - (xs[i] - xs[i - 1]) / h[i - 1]));
        rhs_y.push(6.0 * ((ys[i + 1] - ys[i]) / h[i] - (ys[i] - ys[i - 1]) / h[i - 1]));
    }

    let lu = system.factorize()?;
    mx[1..n - 1].copy_from_slice(&lu.solve(&rhs_x));
    my[1..n - 1].copy_from_slice(&lu.solve(&rhs_y));
    Some((mx, my))
}

impl PathModel for NaturalCubicFit {
    const METHOD: Method = Method::Cubic;
    const MIN_POINTS: usize = 2;

    fn fit(params: &[f64], points: &[Point2]) -> Result<Self, ResampleError> {
        check_len::<Self>(points.len())?;
        let (xs, ys) = split_xy(points);
        let (mx, my) = second_derivatives(params, &xs, &ys).ok_or(
            ResampleError::SingularSystem {
                method: Self::METHOD,
            },
        )?;

        Ok(Self {
            params: params.to_vec(),
            x: CubicCoordinate {
                values: xs,
                second: mx,
            },
            y: CubicCoordinate {
                values: ys,
                second: my,
            },
        })
    }

    fn eval(&self, u: f64) -> Point2 {
        let (i, t) = locate(&self.params, u);
        Point2::new(
            self.x.eval(&self.params, i, t),
            self.y.eval(&self.params, i, t),
        )
    }
}
