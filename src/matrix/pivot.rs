use clap::ValueEnum;
use derive_more::Display;
use super::mat::Mat;

/// How an elimination chooses the entry it divides by.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, Display, ValueEnum)]
#[clap(rename_all = "kebab-case")]
pub enum PivotPolicy {
    /// No row interchange. Gauss divides row `i` by its first non-zero
    /// entry at or after column `i`; triangularization divides by the
    /// diagonal as is.
    #[default]
    #[display("in-row")]
    InRow,

    /// Swap in the row with the largest magnitude entry in the column.
    #[display("partial")]
    Partial,
}

// Column of the first non-zero entry of row `i` within `i ..= last`,
// column 0 if there is none.
pub(crate) fn find_divider(a: &Mat, i: usize, last: usize) -> usize {
    (i ..= last).find(|&k| a[(i, k)] != 0.0).unwrap_or(0)
}

pub(crate) fn not_zero(x: f64) -> f64 {
    if x == 0.0 { 1.0 } else { x }
}

// Row at or below `j` holding the largest |a[(r, j)]|, ignoring zeros.
pub(crate) fn find_partial_pivot(a: &Mat, j: usize) -> Option<usize> {
    (j .. a.rows())
        .filter(|&r| a[(r, j)] != 0.0)
        .max_by(|&r1, &r2| a[(r1, j)].abs().total_cmp(&a[(r2, j)].abs()))
}
