use log::{debug, trace};
use super::err::MatResult;
use super::mat::Mat;
use super::pivot::{PivotPolicy, find_partial_pivot};

/// Reduces a square matrix to upper triangular form by row elimination,
/// without row interchange.
///
/// A zero on the diagonal is divided by as is, so the result then contains
/// `inf` / `NaN` entries. Use [`triangularize_with`] and
/// [`PivotPolicy::Partial`] to avoid it.
pub fn triangularize(a: &Mat) -> MatResult<Mat> {
    triangularize_with(a, PivotPolicy::InRow)
}

pub fn triangularize_with(a: &Mat, policy: PivotPolicy) -> MatResult<Mat> {
    a.ensure_square("triangularize")?;

    let mut u = a.clone();
    triangularize_in_place(&mut u, policy);
    Ok(u)
}

/// Product of the diagonal of the triangular form of `a`. `a` itself is
/// not modified.
pub fn det(a: &Mat) -> MatResult<f64> {
    det_with(a, PivotPolicy::InRow)
}

pub fn det_with(a: &Mat, policy: PivotPolicy) -> MatResult<f64> {
    a.ensure_square("det")?;

    let mut u = a.clone();
    let sign = triangularize_in_place(&mut u, policy);
    let d = u.diag().product::<f64>();

    debug!("det: {d} (sign: {sign})");

    Ok(sign * d)
}

// Returns the sign of the row permutation applied.
fn triangularize_in_place(a: &mut Mat, policy: PivotPolicy) -> f64 {
    debug_assert!(a.is_square());

    let n = a.rows();
    let mut sign = 1.0;

    debug!("triangularize: {n}x{n}, pivot: {policy}");

    for i in 0 .. n.saturating_sub(1) {
        if policy == PivotPolicy::Partial {
            match find_partial_pivot(a, i) {
                Some(p) if p != i => {
                    trace!("  swap rows {i} <-> {p}");
                    a.swap_rows(i, p);
                    sign = -sign;
                },
                Some(_) => (),
                None => {
                    trace!("  column {i} is zero below the diagonal");
                    continue
                }
            }
        }

        let a_ii = a[(i, i)];
        trace!("  pivot ({i}, {i}) = {a_ii}");

        for j in i + 1 .. n {
            let c = a[(j, i)] / a_ii;
            a.add_row_to_from(i, j, -c, i);
        }
    }

    sign
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use super::*;
    use crate::matrix::MatError;

    #[test]
    fn triangular() {
        let a = Mat::from(array![[2., 1., 1.], [4., 3., 3.], [8., 7., 9.]]);
        let u = triangularize(&a).unwrap();
        assert_eq!(u, Mat::from(array![[2., 1., 1.], [0., 1., 1.], [0., 0., 2.]]));
        assert!(u.is_upper_tri());
    }

    #[test]
    fn triangular_not_square() {
        let a = Mat::zero((2, 3));
        assert_eq!(triangularize(&a), Err(MatError::NotSquare { op: "triangularize", shape: (2, 3) }));
    }

    #[test]
    fn triangular_1x1() {
        let a = Mat::from(array![[-3.]]);
        assert_eq!(triangularize(&a), Ok(a.clone()));
        assert_eq!(det(&a), Ok(-3.));
    }

    #[test]
    fn triangular_zero_pivot() {
        let a = Mat::from(array![[0., 1.], [1., 1.]]);
        let u = triangularize(&a).unwrap();
        assert!(u.iter().any(|(_, _, x)| !x.is_finite()));
    }

    #[test]
    fn det_2x2() {
        let a = Mat::from(array![[4., 3.], [6., 3.]]);
        assert_eq!(det(&a), Ok(-6.));
    }

    #[test]
    fn det_3x3() {
        let a = Mat::from(array![[2., 1., 1.], [4., 3., 3.], [8., 7., 9.]]);
        assert_eq!(det(&a), Ok(4.));
    }

    #[test]
    fn det_id() {
        for n in 1 ..= 10 {
            assert_eq!(det(&Mat::id(n)), Ok(1.));
        }
    }

    #[test]
    fn det_keeps_input() {
        let a = Mat::from(array![[4., 3.], [6., 3.]]);
        let b = a.clone();
        let _ = det(&a);
        assert_eq!(a, b);
    }

    #[test]
    fn det_not_square() {
        let a = Mat::zero((3, 2));
        assert_eq!(det(&a), Err(MatError::NotSquare { op: "det", shape: (3, 2) }));
    }

    #[test]
    fn det_partial() {
        let a = Mat::from(array![[0., 1.], [1., 1.]]);
        assert_eq!(det_with(&a, PivotPolicy::Partial), Ok(-1.));

        let b = Mat::from(array![[0., 2., 1.], [1., 0., 0.], [0., 0., 3.]]);
        assert_eq!(det_with(&b, PivotPolicy::Partial), Ok(-6.));
    }

    #[test]
    fn det_partial_singular() {
        let a = Mat::from(array![[0., 1.], [0., 2.]]);
        assert_eq!(det_with(&a, PivotPolicy::Partial), Ok(0.));
    }
}
