mod err;
mod mat;
mod pivot;
mod triang;
mod gauss;

pub use err::*;
pub use mat::*;
pub use pivot::PivotPolicy;
pub use triang::{triangularize, triangularize_with, det, det_with};
pub use gauss::{GaussSolver, Solution, SINGULAR_EPS};
