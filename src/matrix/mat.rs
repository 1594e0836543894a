use std::fmt::Display;
use std::ops::{Add, Neg, Sub, Mul, Index, IndexMut};
use ndarray::{Array2, ArrayView1, Zip, s};
use num_traits::{Zero, One};
use super::err::{MatError, MatResult, Shape};
use crate::util::num::round_to;
use crate::util::format::mat_table;

/// Dense real matrix. Every operation returns a new matrix and leaves its
/// operands untouched; only the elementary row operations work in place.
#[derive(Clone, Debug, PartialEq)]
pub struct Mat {
    array: Array2<f64>
}

impl From<Array2<f64>> for Mat {
    fn from(array: Array2<f64>) -> Self {
        Self { array }
    }
}

impl Mat {
    pub fn from_data<I>(shape: Shape, data: I) -> Self
    where I: IntoIterator<Item = f64> {
        let data: Vec<_> = data.into_iter().collect();
        assert_eq!(data.len(), shape.0 * shape.1, "data does not fit shape {shape:?}");

        let array = Array2::from_shape_vec(shape, data).unwrap();
        Self::from(array)
    }

    pub fn from_rows(rows: Vec<Vec<f64>>) -> Self {
        let m = rows.len();
        let n = rows.first().map(|r| r.len()).unwrap_or(0);
        assert!(rows.iter().all(|r| r.len() == n), "rows must have equal length");

        Self::from_data((m, n), rows.into_iter().flatten())
    }

    pub fn zero(shape: Shape) -> Self {
        Self::from(Array2::zeros(shape))
    }

    pub fn id(size: usize) -> Self {
        Self::from(Array2::from_diag_elem(size, f64::one()))
    }

    pub fn shape(&self) -> Shape {
        (self.rows(), self.cols())
    }

    pub fn rows(&self) -> usize {
        self.array.nrows()
    }

    pub fn cols(&self) -> usize {
        self.array.ncols()
    }

    pub fn array(&self) -> &Array2<f64> {
        &self.array
    }

    pub fn row(&self, i: usize) -> ArrayView1<f64> {
        self.array.row(i)
    }

    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        self.array.rows().into_iter().map(|r| r.to_vec()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, &f64)> {
        self.array.indexed_iter().map(|((i, j), a)| (i, j, a))
    }

    pub fn is_square(&self) -> bool {
        self.rows() == self.cols()
    }

    pub fn is_zero(&self) -> bool {
        self.array.iter().all(|a| a.is_zero())
    }

    pub fn is_id(&self) -> bool {
        self.is_square() && self.iter().all(|(i, j, a)|
            i == j && a.is_one() || i != j && a.is_zero()
        )
    }

    pub fn is_upper_tri(&self) -> bool {
        self.is_square() && self.iter().all(|(i, j, a)|
            i <= j || a.is_zero()
        )
    }

    pub fn diag(&self) -> impl Iterator<Item = &f64> {
        self.array.diag().into_iter()
    }

    pub fn add(&self, rhs: &Mat) -> MatResult<Mat> {
        self.ensure_same_shape("add", rhs)?;
        Ok(Mat::from(&self.array + &rhs.array))
    }

    pub fn sub(&self, rhs: &Mat) -> MatResult<Mat> {
        self.ensure_same_shape("sub", rhs)?;
        Ok(Mat::from(&self.array - &rhs.array))
    }

    pub fn scale(&self, k: f64) -> Mat {
        Mat::from(self.array.mapv(|a| a * k))
    }

    pub fn mul(&self, rhs: &Mat) -> MatResult<Mat> {
        if self.cols() != rhs.rows() {
            return Err(MatError::ShapeMismatch { op: "mul", lhs: self.shape(), rhs: rhs.shape() })
        }

        let (l, m, n) = (self.rows(), self.cols(), rhs.cols());
        let array = Array2::from_shape_fn((l, n), |(i, k)| {
            (0..m).map(|j| {
                self[(i, j)] * rhs[(j, k)]
            }).sum()
        });
        Ok(Mat::from(array))
    }

    pub fn transpose(&self) -> Mat {
        Mat::from(self.array.t().to_owned())
    }

    pub fn trace(&self) -> MatResult<f64> {
        self.ensure_square("trace")?;
        Ok(self.diag().sum())
    }

    pub fn round(&self, digits: u32) -> Mat {
        Mat::from(self.array.mapv(|a| round_to(a, digits)))
    }

    pub fn approx_eq(&self, other: &Mat, tol: f64) -> bool {
        self.shape() == other.shape() &&
        self.array.iter().zip(other.array.iter()).all(|(a, b)| (a - b).abs() <= tol)
    }

    pub fn swap_rows(&mut self, i: usize, j: usize) {
        debug_assert_ne!(i, j);
        debug_assert!(self.is_valid_row_index(i));
        debug_assert!(self.is_valid_row_index(j));

        let (s_i, s_j) = (s![i, ..], s![j, ..]);
        let (row_i, row_j) = self.array.multi_slice_mut((s_i, s_j));
        Zip::from(row_i).and(row_j).for_each(std::mem::swap);
    }

    pub fn div_row(&mut self, i: usize, d: f64) {
        debug_assert!(self.is_valid_row_index(i));
        self.array.row_mut(i).mapv_inplace(|a| a / d);
    }

    // row_j += r * row_i
    pub fn add_row_to(&mut self, i: usize, j: usize, r: f64) {
        self.add_row_to_from(i, j, r, 0)
    }

    // same as `add_row_to`, restricted to columns `j0..`.
    pub fn add_row_to_from(&mut self, i: usize, j: usize, r: f64, j0: usize) {
        debug_assert_ne!(i, j);
        debug_assert!(self.is_valid_row_index(i));
        debug_assert!(self.is_valid_row_index(j));

        let (s_i, s_j) = (s![i, j0..], s![j, j0..]);
        let (row_i, row_j) = self.array.multi_slice_mut((s_i, s_j));
        Zip::from(row_i).and(row_j).for_each(|x, y| {
            *y += r * *x;
        });
    }

    pub(crate) fn ensure_square(&self, op: &'static str) -> MatResult<()> {
        if self.is_square() {
            Ok(())
        } else {
            Err(MatError::NotSquare { op, shape: self.shape() })
        }
    }

    // private methods //

    fn ensure_same_shape(&self, op: &'static str, rhs: &Mat) -> MatResult<()> {
        if self.shape() == rhs.shape() {
            Ok(())
        } else {
            Err(MatError::ShapeMismatch { op, lhs: self.shape(), rhs: rhs.shape() })
        }
    }

    fn is_valid_row_index(&self, i: usize) -> bool {
        (0..self.rows()).contains(&i)
    }
}

impl Display for Mat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&mat_table(self, 3))
    }
}

impl Index<(usize, usize)> for Mat {
    type Output = f64;
    fn index(&self, index: (usize, usize)) -> &f64 {
        &self.array[index]
    }
}

impl IndexMut<(usize, usize)> for Mat {
    fn index_mut(&mut self, index: (usize, usize)) -> &mut f64 {
        &mut self.array[index]
    }
}

// Operators panic on non-conformable shapes. Use the named methods to get
// a `MatError` instead.

impl Add for &Mat {
    type Output = Mat;

    fn add(self, rhs: Self) -> Self::Output {
        Mat::add(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Sub for &Mat {
    type Output = Mat;

    fn sub(self, rhs: Self) -> Self::Output {
        Mat::sub(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Neg for &Mat {
    type Output = Mat;

    fn neg(self) -> Self::Output {
        Mat::from(-&self.array)
    }
}

impl Mul for &Mat {
    type Output = Mat;

    fn mul(self, rhs: Self) -> Self::Output {
        Mat::mul(self, rhs).unwrap_or_else(|e| panic!("{e}"))
    }
}

impl Mul<f64> for &Mat {
    type Output = Mat;

    fn mul(self, k: f64) -> Self::Output {
        self.scale(k)
    }
}
