#![allow(unused)]
use rand::SeedableRng;
use rand::rngs::StdRng;
use matcalc::Mat;
use matcalc::input::{Bounds, generate};

pub fn mat(rows: &[&[f64]]) -> Mat {
    Mat::from_rows(rows.iter().map(|r| r.to_vec()).collect())
}

pub fn random_mat(shape: (usize, usize), seed: u64) -> Mat {
    let mut rng = StdRng::seed_from_u64(seed);
    generate(shape, &Bounds::default(), &mut rng).unwrap()
}

pub fn shapes() -> impl Iterator<Item = (usize, usize)> {
    [(1, 1), (1, 4), (3, 1), (2, 2), (3, 5), (10, 10)].into_iter()
}

macro_rules! assert_close {
    ($a:expr, $b:expr, $tol:expr) => {
        assert!($a.approx_eq(&$b, $tol), "{} !~ {}", $a, $b)
    };
}

pub(crate) use assert_close;
