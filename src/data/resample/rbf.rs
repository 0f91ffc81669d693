use super::solve::DenseLu;
use super::{check_len, split_xy, Method, PathModel, ResampleError};
use crate::data::model::Point2;

/// Thin-plate-spline radial basis interpolation of x(u) and y(u), no
/// smoothing, plus a linear polynomial tail.
///
/// The tail drops to a constant when only one point is given. The system is
/// dense in the number of input points.
#[derive(Debug, Clone)]
pub struct RbfFit {
    centers: Vec<f64>,
    x: RbfCoordinate,
    y: RbfCoordinate,
}

#[derive(Debug, Clone)]
struct RbfCoordinate {
    weights: Vec<f64>,
    /// Polynomial coefficients `[c0, c1]` for `c0 + c1 u`; `c1` may be absent.
    poly: Vec<f64>,
}

fn thin_plate(r: f64) -> f64 {
    if r == 0.0 {
        0.0
    } else {
        r * r * r.ln()
    }
}

impl RbfFit {
    fn poly_terms(n: usize) -> usize {
        if n > 1 {
            2
        } else {
            1
        }
    }

    fn eval_coordinate(&self, coord: &RbfCoordinate, u: f64) -> f64 {
        let radial: f64 = self
            .centers
            .iter()
            .zip(&coord.weights)
            .map(|(c, w)| w * thin_plate((u - c).abs()))
            .sum();
        let tail: f64 = coord
            .poly
            .iter()
            .enumerate()
            .map(|(k, c)| c * u.powi(k as i32))
            .sum();
        radial + tail
    }
}

impl PathModel for RbfFit {
    const METHOD: Method = Method::Rbf;
    const MIN_POINTS: usize = 1;

    fn fit(params: &[f64], points: &[Point2]) -> Result<Self, ResampleError> {
        check_len::<Self>(points.len())?;
        let n = points.len();
        let q = Self::poly_terms(n);
        let size = n + q;

        // [ K  P ] [w]   [v]
        // [ Pᵀ 0 ] [c] = [0]
        let mut matrix = vec![0.0; size * size];
        for i in 0..n {
            for j in 0..n {
                matrix[i * size + j] = thin_plate((params[i] - params[j]).abs());
            }
            for k in 0..q {
                let p = params[i].powi(k as i32);
                matrix[i * size + n + k] = p;
                matrix[(n + k) * size + i] = p;
            }
        }

        let lu = DenseLu::factorize(matrix, size).ok_or(ResampleError::SingularSystem {
            method: Self::METHOD,
        })?;

        let (xs, ys) = split_xy(points);
        let solve = |values: Vec<f64>| {
            let mut rhs = values;
            rhs.resize(size, 0.0);
            let mut sol = lu.solve(&rhs);
            let poly = sol.split_off(n);
            RbfCoordinate {
                weights: sol,
                poly,
            }
        };

        Ok(Self {
            centers: params.to_vec(),
            x: solve(xs),
            y: solve(ys),
        })
    }

    fn eval(&self, u: f64) -> Point2 {
        Point2::new(
            self.eval_coordinate(&self.x, u),
            self.eval_coordinate(&self.y, u),
        )
    }
}
