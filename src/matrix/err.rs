use derive_more::Display;

pub type Shape = (usize, usize);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum MatError { 
    #[display("{op}: shape mismatch {lhs:?} vs {rhs:?}")]
    ShapeMismatch { op: &'static str, lhs: Shape, rhs: Shape },

    #[display("{op}: matrix must be square, got {shape:?}")]
    NotSquare { op: &'static str, shape: Shape },

    #[display("gauss: augmented matrix must be n x (n + 1), got {shape:?}")]
    DimensionContractViolation { shape: Shape },

    #[display("gauss: system is singular (zero pivot at row {row})")]
    SingularSystem { row: usize },
}

impl std::error::Error for MatError {}

pub type MatResult<T> = Result<T, MatError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() { 
        let e = MatError::ShapeMismatch { op: "mul", lhs: (2, 3), rhs: (2, 2) };
        assert_eq!(e.to_string(), "mul: shape mismatch (2, 3) vs (2, 2)");

        let e = MatError::NotSquare { op: "trace", shape: (2, 3) };
        assert_eq!(e.to_string(), "trace: matrix must be square, got (2, 3)");

        let e = MatError::SingularSystem { row: 1 };
        assert_eq!(e.to_string(), "gauss: system is singular (zero pivot at row 1)");
    }
}
