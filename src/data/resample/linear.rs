use super::{check_len, locate, Method, PathModel, ResampleError};
use crate::data::model::Point2;

/// Piecewise-linear interpolation of x(u) and y(u).
#[derive(Debug, Clone)]
pub struct LinearFit {
    params: Vec<f64>,
    points: Vec<Point2>,
}

impl PathModel for LinearFit {
    const METHOD: Method = Method::Linear;
    const MIN_POINTS: usize = 2;

    fn fit(params: &[f64], points: &[Point2]) -> Result<Self, ResampleError> {
        check_len::<Self>(points.len())?;
        Ok(Self {
            params: params.to_vec(),
            points: points.to_vec(),
        })
    }

    fn eval(&self, u: f64) -> Point2 {
        let (i, t) = locate(&self.params, u);
        let a = self.points[i];
        let b = self.points[i + 1];
        // Weighted form so t = 0 and t = 1 hit the knots exactly.
        Point2::new(a.x * (1.0 - t) + b.x * t, a.y * (1.0 - t) + b.y * t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::resample::linspace;
    use approx::assert_relative_eq;

    #[test]
    fn interpolates_between_knots() {
        let points = [Point2::new(0.0, 0.0), Point2::new(2.0, 4.0), Point2::new(4.0, 0.0)];
        let fit = LinearFit::fit(&linspace(3), &points).unwrap();

        let p = fit.eval(0.25);
        assert_relative_eq!(p.x, 1.0);
        assert_relative_eq!(p.y, 2.0);

        let p = fit.eval(0.75);
        assert_relative_eq!(p.x, 3.0);
        assert_relative_eq!(p.y, 2.0);

        assert_eq!(fit.eval(1.0), points[2]);
    }

    #[test]
    fn two_points_are_enough() {
        let points = [Point2::new(1.0, 1.0), Point2::new(3.0, -1.0)];
        let fit = LinearFit::fit(&linspace(2), &points).unwrap();
        assert_eq!(fit.eval(0.0), points[0]);
        assert_eq!(fit.eval(1.0), points[1]);
        assert_eq!(fit.eval(0.5), Point2::new(2.0, 0.0));
    }
}
