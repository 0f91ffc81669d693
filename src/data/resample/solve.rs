//! Small linear solvers for the fitting methods.

// ---------------------------------------------------------------------------
// Banded systems (tridiagonal cubic spline, B-spline collocation)
// ---------------------------------------------------------------------------

/// Square matrix stored by band: row `i` keeps columns
/// `i - lower ..= i + upper`.
#[derive(Debug, Clone)]
pub struct BandedMatrix {
    n: usize,
    lower: usize,
    upper: usize,
    data: Vec<f64>,
}

impl BandedMatrix {
    pub fn zeros(n: usize, lower: usize, upper: usize) -> Self {
        Self {
            n,
            lower,
            upper,
            data: vec![0.0; n * (lower + upper + 1)],
        }
    }

    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(col + self.lower >= row && col <= row + self.upper);
        row * (self.lower + self.upper + 1) + col + self.lower - row
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.data[self.index(row, col)]
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        let idx = self.index(row, col);
        self.data[idx] = value;
    }

    /// LU-factorize in place without pivoting. Valid for diagonally dominant
    /// and totally positive matrices, which covers both users here.
    ///
    /// Returns `None` when a pivot vanishes.
    pub fn factorize(mut self) -> Option<BandedLu> {
        let n = self.n;
        for k in 0..n {
            let pivot = self.get(k, k);
            if pivot.abs() <= f64::MIN_POSITIVE || !pivot.is_finite() {
                return None;
            }
            let row_end = (k + self.lower).min(n - 1);
            let col_end = (k + self.upper).min(n - 1);
            for i in k + 1..=row_end {
                let factor = self.get(i, k) / pivot;
                self.set(i, k, factor);
                if factor == 0.0 {
                    continue;
                }
                for j in k + 1..=col_end {
                    let updated = self.get(i, j) - factor * self.get(k, j);
                    self.set(i, j, updated);
                }
            }
        }
        Some(BandedLu { lu: self })
    }
}

#[derive(Debug, Clone)]
pub struct BandedLu {
    lu: BandedMatrix,
}

impl BandedLu {
    pub fn solve(&self, rhs: &[f64]) -> Vec<f64> {
        let m = &self.lu;
        let n = m.n;
        let mut x = rhs.to_vec();

        // L has a unit diagonal.
        for i in 0..n {
            let start = i.saturating_sub(m.lower);
            let mut sum = x[i];
            for j in start..i {
                sum -= m.get(i, j) * x[j];
            }
            x[i] = sum;
        }

        for i in (0..n).rev() {
            let end = (i + m.upper).min(n - 1);
            let mut sum = x[i];
            for j in i + 1..=end {
                sum -= m.get(i, j) * x[j];
            }
            x[i] = sum / m.get(i, i);
        }

        x
    }
}

// ---------------------------------------------------------------------------
// Dense systems (RBF)
// ---------------------------------------------------------------------------

/// Row-major dense LU with partial pivoting.
#[derive(Debug, Clone)]
pub struct DenseLu {
    n: usize,
    lu: Vec<f64>,
    perm: Vec<usize>,
}

impl DenseLu {
    /// Factorize the `n × n` row-major `matrix`. Returns `None` if singular.
    pub fn factorize(mut matrix: Vec<f64>, n: usize) -> Option<Self> {
        debug_assert_eq!(matrix.len(), n * n);
        let mut perm: Vec<usize> = (0..n).collect();

        for k in 0..n {
            let (pivot_row, pivot_abs) = (k..n)
                .map(|r| (r, matrix[r * n + k].abs()))
                .fold((k, -1.0), |best, cur| if cur.1 > best.1 { cur } else { best });
            if pivot_abs <= f64::MIN_POSITIVE || !pivot_abs.is_finite() {
                return None;
            }
            if pivot_row != k {
                for c in 0..n {
                    matrix.swap(k * n + c, pivot_row * n + c);
                }
                perm.swap(k, pivot_row);
            }

            let pivot = matrix[k * n + k];
            for i in k + 1..n {
                let factor = matrix[i * n + k] / pivot;
                matrix[i * n + k] = factor;
                if factor == 0.0 {
                    continue;
                }
                for j in k + 1..n {
                    matrix[i * n + j] -= factor * matrix[k * n + j];
                }
            }
        }

        Some(Self {
            n,
            lu: matrix,
            perm,
        })
    }

    pub fn solve(&self, rhs: &[f64]) -> Vec<f64> {
        let n = self.n;
        let mut x: Vec<f64> = self.perm.iter().map(|&p| rhs[p]).collect();

        for i in 0..n {
            let mut sum = x[i];
            for j in 0..i {
                sum -= self.lu[i * n + j] * x[j];
            }
            x[i] = sum;
        }

        for i in (0..n).rev() {
            let mut sum = x[i];
            for j in i + 1..n {
                sum -= self.lu[i * n + j] * x[j];
            }
            x[i] = sum / self.lu[i * n + i];
        }

        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn tridiagonal_solve() {
        // [2 1 0; 1 3 1; 0 1 2] x = [3, 5, 3] → x = [1, 1, 1]
        let mut m = BandedMatrix::zeros(3, 1, 1);
        m.set(0, 0, 2.0);
        m.set(0, 1, 1.0);
        m.set(1, 0, 1.0);
        m.set(1, 1, 3.0);
        m.set(1, 2, 1.0);
        m.set(2, 1, 1.0);
        m.set(2, 2, 2.0);
        let x = m.factorize().unwrap().solve(&[3.0, 5.0, 3.0]);
        for v in x {
            assert_relative_eq!(v, 1.0, epsilon = 1e-12);
        }
    }

    #[test]
    fn banded_zero_pivot_is_rejected() {
        let m = BandedMatrix::zeros(2, 1, 1);
        assert!(m.factorize().is_none());
    }

    #[test]
    fn dense_solve_needs_pivoting() {
        // Zero on the leading diagonal, like the RBF saddle-point block.
        let a = vec![0.0, 1.0, 1.0, 0.0];
        let lu = DenseLu::factorize(a, 2).unwrap();
        let x = lu.solve(&[2.0, 3.0]);
        assert_relative_eq!(x[0], 3.0);
        assert_relative_eq!(x[1], 2.0);
    }

    #[test]
    fn dense_solve_reuses_factorization() {
        let a = vec![4.0, -2.0, 1.0, -2.0, 4.0, -2.0, 1.0, -2.0, 4.0];
        let lu = DenseLu::factorize(a, 3).unwrap();
        for rhs in [[11.0, -16.0, 17.0], [3.0, 0.0, 3.0]] {
            let x = lu.solve(&rhs);
            let back = [
                4.0 * x[0] - 2.0 * x[1] + x[2],
                -2.0 * x[0] + 4.0 * x[1] - 2.0 * x[2],
                x[0] - 2.0 * x[1] + 4.0 * x[2],
            ];
            for (b, r) in back.iter().zip(rhs) {
                assert_relative_eq!(*b, r, epsilon = 1e-12);
            }
        }
    }

    #[test]
    fn dense_singular_is_rejected() {
        let a = vec![1.0, 2.0, 2.0, 4.0];
        assert!(DenseLu::factorize(a, 2).is_none());
    }
}
