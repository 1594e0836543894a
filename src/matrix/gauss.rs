use std::fmt::Display;
use std::ops::Index;
use log::{debug, trace};
use serde::Serialize;
use super::err::{MatError, MatResult};
use super::mat::Mat;
use super::pivot::{PivotPolicy, find_divider, find_partial_pivot, not_zero};
use crate::util::num::round_to;
use crate::util::format::solution_str;

/// Pivots below this magnitude are treated as zero by a strict solver.
pub const SINGULAR_EPS: f64 = 1e-12;

const DIGITS: u32 = 3;

/// Values of `x1 .. xn`, rounded to 3 decimal places.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Solution {
    values: Vec<f64>
}

impl Solution {
    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn into_vec(self) -> Vec<f64> {
        self.values
    }
}

impl Index<usize> for Solution {
    type Output = f64;
    fn index(&self, i: usize) -> &f64 {
        &self.values[i]
    }
}

impl Display for Solution {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&solution_str(&self.values))
    }
}

/// Gauss–Jordan elimination over an `n x (n + 1)` augmented matrix.
///
/// With the default settings the result is only meaningful for systems
/// with a unique solution whose elimination never meets a zero on the
/// diagonal. Singular, inconsistent or underdetermined systems still yield
/// `n` values, which may be wrong or non-finite. Enable `strict` to have
/// them reported as [`MatError::SingularSystem`] instead.
#[derive(Clone, Copy, Debug, Default)]
pub struct GaussSolver {
    policy: PivotPolicy,
    strict: bool
}

impl GaussSolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn policy(mut self, policy: PivotPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    pub fn solve(&self, m: &Mat) -> MatResult<Solution> {
        let r = self.reduce(m)?;
        let n = r.rows();
        let values = (0 .. n).map(|i| round_to(r[(i, n)], DIGITS)).collect();
        Ok(Solution { values })
    }

    /// The reduced augmented matrix, before rounding.
    pub fn reduce(&self, m: &Mat) -> MatResult<Mat> {
        let (rows, cols) = m.shape();
        if cols != rows + 1 {
            return Err(MatError::DimensionContractViolation { shape: m.shape() })
        }

        debug!("gauss: {rows}x{cols}, pivot: {}, strict: {}", self.policy, self.strict);

        let mut a = m.clone();
        self.forward(&mut a)?;
        self.backward(&mut a);

        Ok(a)
    }

    // Normalize each row and clear the entries below its pivot.
    fn forward(&self, a: &mut Mat) -> MatResult<()> {
        let n = a.rows();

        for i in 0 .. n {
            if self.policy == PivotPolicy::Partial {
                if let Some(p) = find_partial_pivot(a, i) {
                    if p != i {
                        trace!("  swap rows {i} <-> {p}");
                        a.swap_rows(i, p);
                    }
                }
            }

            if self.strict && a[(i, i)].abs() < SINGULAR_EPS {
                debug!("gauss: zero pivot at row {i}");
                return Err(MatError::SingularSystem { row: i })
            }

            let k = find_divider(a, i, n);
            let d = a[(i, k)];
            if d != 0.0 {
                a.div_row(i, d);
            }

            let d = not_zero(a[(i, k)]);

            for j in i + 1 .. n {
                let c = a[(j, i)] / d;
                a.add_row_to(i, j, -c);
            }

            trace!("  forward row {i}: {}", a.row(i));
        }

        Ok(())
    }

    // Clear the entries above each pivot, bottom row first. Dividers are
    // taken from the matrix as left by the forward sweep, not from the
    // rows being updated here.
    fn backward(&self, a: &mut Mat) {
        let n = a.rows();
        let s = a.clone();

        for i in (0 .. n).rev() {
            let k = find_divider(&s, i, n);
            let d = s[(i, k)];
            if d != 0.0 {
                a.div_row(i, d);
            }
            a.div_row(i, not_zero(d));

            let d = not_zero(a[(i, i)]);

            for j in (0 .. i).rev() {
                let c = a[(j, i)] / d;
                a.add_row_to(i, j, -c);
            }

            trace!("  backward row {i}: {}", a.row(i));
        }
    }
}
