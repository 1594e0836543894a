pub mod matrix;
pub mod input;
pub mod util;

pub use matrix::*;
