//! Reading matrices from text, JSON and files, and generating random ones.
//!
//! Everything that reaches the engine through here has a size in
//! `1 ..= bounds.max_dim` on both axes and entries in `bounds.min ..=
//! bounds.max`, rounded to 3 decimal places.

use std::path::Path;
use derive_more::Display;
use itertools::Itertools;
use log::debug;
use rand::Rng;
use crate::matrix::{Mat, Shape};
use crate::util::num::round_to;

const DIGITS: u32 = 3;

#[derive(Debug, Display)]
pub enum InputError {
    #[display("cannot parse '{token}' as a number")]
    Parse { token: String },

    #[display("{value} is out of range [{min}, {max}]")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[display("size {size} is out of range [1, {max}]")]
    BadSize { size: usize, max: usize },

    #[display("expected a {}x{} matrix, got {}x{}", expected.0, expected.1, found.0, found.1)]
    BadShape { expected: Shape, found: Shape },

    #[display("row {row} has {found} entries, expected {expected}")]
    WrongRowLength { row: usize, found: usize, expected: usize },

    #[display("{_0}")]
    Io(std::io::Error),

    #[display("{_0}")]
    Json(serde_json::Error),
}

impl std::error::Error for InputError {}

impl From<std::io::Error> for InputError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for InputError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

pub type InputResult<T> = Result<T, InputError>;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    pub max_dim: usize,
    pub min: f64,
    pub max: f64,
}

impl Default for Bounds {
    fn default() -> Self {
        Self { max_dim: 10, min: -100.0, max: 100.0 }
    }
}

impl Bounds {
    pub fn check_size(&self, size: usize) -> InputResult<usize> {
        if (1 ..= self.max_dim).contains(&size) {
            Ok(size)
        } else {
            Err(InputError::BadSize { size, max: self.max_dim })
        }
    }

    pub fn check_value(&self, value: f64) -> InputResult<f64> {
        if (self.min ..= self.max).contains(&value) {
            Ok(value)
        } else {
            Err(InputError::OutOfRange { value, min: self.min, max: self.max })
        }
    }

    fn check_shape(&self, shape: Shape) -> InputResult<Shape> {
        self.check_size(shape.0)?;
        self.check_size(shape.1)?;
        Ok(shape)
    }
}

pub fn parse_size(s: &str, bounds: &Bounds) -> InputResult<usize> {
    let s = s.trim();
    let size = s.parse::<usize>().map_err(|_|
        InputError::Parse { token: s.to_string() }
    )?;
    bounds.check_size(size)
}

/// Parses a single number: finite, in range, rounded.
pub fn parse_value(s: &str, bounds: &Bounds) -> InputResult<f64> {
    let s = s.trim();
    let value = match s.parse::<f64>() {
        Ok(x) if x.is_finite() => x,
        _ => return Err(InputError::Parse { token: s.to_string() })
    };
    let value = bounds.check_value(value)?;
    Ok(round_to(value, DIGITS))
}

/// Parses whitespace separated numbers.
pub fn parse_row(line: &str, bounds: &Bounds) -> InputResult<Vec<f64>> {
    line.split_whitespace().map(|token|
        parse_value(token, bounds)
    ).try_collect()
}

/// Parses one row per non-empty line. All rows must be as long as the
/// first one.
pub fn parse_matrix(text: &str, bounds: &Bounds) -> InputResult<Mat> {
    let rows: Vec<_> = text.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| parse_row(line, bounds))
        .try_collect()?;
    into_mat(rows, bounds)
}

/// Same as [`parse_matrix`], also requiring the given shape.
pub fn parse_matrix_shaped(text: &str, shape: Shape, bounds: &Bounds) -> InputResult<Mat> {
    let a = parse_matrix(text, bounds)?;
    ensure_shape(a, shape)
}

/// Parses a JSON array of rows, e.g. `[[1, 2], [3, 4]]`.
pub fn parse_json(json: &str, bounds: &Bounds) -> InputResult<Mat> {
    let rows: Vec<Vec<f64>> = serde_json::from_str(json)?;
    let rows = rows.into_iter().map(|row|
        row.into_iter().map(|x|
            bounds.check_value(x).map(|x| round_to(x, DIGITS))
        ).collect::<InputResult<Vec<_>>>()
    ).collect::<InputResult<Vec<_>>>()?;
    into_mat(rows, bounds)
}

pub fn read_matrix<P>(path: P, bounds: &Bounds) -> InputResult<Mat>
where P: AsRef<Path> {
    let text = std::fs::read_to_string(path.as_ref())?;
    debug!("read {} bytes from {}", text.len(), path.as_ref().display());
    parse_matrix(&text, bounds)
}

/// Takes `input` as a JSON matrix if it starts with `[`, otherwise as the
/// path of a text file.
pub fn load_matrix(input: &str, bounds: &Bounds) -> InputResult<Mat> {
    if input.trim_start().starts_with('[') {
        parse_json(input, bounds)
    } else {
        read_matrix(input, bounds)
    }
}

/// Random matrix with entries `n + f`, `n` an integer in `[min, max)` and
/// `f` in `[0, 1)`, rounded to 3 decimals.
pub fn generate<R>(shape: Shape, bounds: &Bounds, rng: &mut R) -> InputResult<Mat>
where R: Rng + ?Sized {
    let (m, n) = bounds.check_shape(shape)?;
    let (lo, hi) = (bounds.min as i64, bounds.max as i64);

    let data = (0 .. m * n).map(|_| {
        let x = rng.gen_range(lo .. hi) as f64 + rng.gen::<f64>();
        round_to(x, DIGITS)
    }).collect_vec();

    Ok(Mat::from_data((m, n), data))
}

pub fn ensure_shape(a: Mat, shape: Shape) -> InputResult<Mat> {
    if a.shape() == shape {
        Ok(a)
    } else {
        Err(InputError::BadShape { expected: shape, found: a.shape() })
    }
}

fn into_mat(rows: Vec<Vec<f64>>, bounds: &Bounds) -> InputResult<Mat> {
    let m = bounds.check_size(rows.len())?;
    let n = bounds.check_size(rows[0].len())?;

    if let Some((i, row)) = rows.iter().find_position(|row| row.len() != n) {
        return Err(InputError::WrongRowLength { row: i + 1, found: row.len(), expected: n })
    }

    debug!("parsed {m}x{n} matrix");

    Ok(Mat::from_rows(rows))
}

#[cfg(test)]
mod tests {
    use ndarray::array;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use super::*;

    #[test]
    fn value() {
        let b = Bounds::default();
        assert_eq!(parse_value("1.5", &b).unwrap(), 1.5);
        assert_eq!(parse_value(" -100 ", &b).unwrap(), -100.0);
        assert_eq!(parse_value("3.14159", &b).unwrap(), 3.142);
        assert!(matches!(parse_value("abc", &b), Err(InputError::Parse { .. })));
        assert!(matches!(parse_value("NaN", &b), Err(InputError::Parse { .. })));
        assert!(matches!(parse_value("100.01", &b), Err(InputError::OutOfRange { .. })));
    }

    #[test]
    fn size() {
        let b = Bounds::default();
        assert_eq!(parse_size("3", &b).unwrap(), 3);
        assert_eq!(parse_size("10", &b).unwrap(), 10);
        assert!(matches!(parse_size("0", &b), Err(InputError::BadSize { size: 0, max: 10 })));
        assert!(matches!(parse_size("11", &b), Err(InputError::BadSize { size: 11, max: 10 })));
        assert!(matches!(parse_size("-1", &b), Err(InputError::Parse { .. })));
    }

    #[test]
    fn row() {
        let b = Bounds::default();
        assert_eq!(parse_row("1  2\t-3.5", &b).unwrap(), vec![1., 2., -3.5]);
        assert!(parse_row("1 x 3", &b).is_err());
    }

    #[test]
    fn matrix() {
        let b = Bounds::default();
        let a = parse_matrix("1 2 3\n\n4 5 6\n", &b).unwrap();
        assert_eq!(a, Mat::from(array![[1., 2., 3.], [4., 5., 6.]]));
    }

    #[test]
    fn matrix_ragged() {
        let b = Bounds::default();
        let res = parse_matrix("1 2 3\n4 5\n", &b);
        assert!(matches!(res, Err(InputError::WrongRowLength { row: 2, found: 2, expected: 3 })));
    }

    #[test]
    fn matrix_empty() {
        let b = Bounds::default();
        assert!(matches!(parse_matrix("\n  \n", &b), Err(InputError::BadSize { size: 0, .. })));
    }

    #[test]
    fn matrix_too_large() {
        let b = Bounds::default();
        let text = vec!["1"; 11].join("\n");
        assert!(matches!(parse_matrix(&text, &b), Err(InputError::BadSize { size: 11, .. })));
    }

    #[test]
    fn matrix_shaped() {
        let b = Bounds::default();
        assert!(parse_matrix_shaped("1 2\n3 4", (2, 2), &b).is_ok());

        let res = parse_matrix_shaped("1 2\n3 4", (2, 3), &b);
        assert!(matches!(res, Err(InputError::BadShape { expected: (2, 3), found: (2, 2) })));
    }

    #[test]
    fn json() {
        let b = Bounds::default();
        let a = parse_json("[[1, 2.5], [-3, 4]]", &b).unwrap();
        assert_eq!(a, Mat::from(array![[1., 2.5], [-3., 4.]]));

        assert!(matches!(parse_json("[[1, 2], [3]]", &b), Err(InputError::WrongRowLength { .. })));
        assert!(matches!(parse_json("[[1, 200]]", &b), Err(InputError::OutOfRange { .. })));
        assert!(matches!(parse_json("[[1, 2]", &b), Err(InputError::Json(_))));
    }

    #[test]
    fn load() {
        let b = Bounds::default();
        let a = load_matrix("[[1, 2], [3, 4]]", &b).unwrap();
        assert_eq!(a.shape(), (2, 2));

        let path = std::env::temp_dir().join("matcalc_input_load_test.txt");
        std::fs::write(&path, "1 0\n0 1\n").unwrap();
        let a = load_matrix(path.to_str().unwrap(), &b).unwrap();
        assert!(a.is_id());
        std::fs::remove_file(&path).unwrap();

        assert!(matches!(load_matrix("/no/such/file", &b), Err(InputError::Io(_))));
    }

    #[test]
    fn gen() {
        let b = Bounds::default();
        let mut rng = StdRng::seed_from_u64(1);
        let a = generate((3, 4), &b, &mut rng).unwrap();

        assert_eq!(a.shape(), (3, 4));
        assert!(a.iter().all(|(_, _, &x)| (-100.0 ..= 100.0).contains(&x)));
        assert!(a.iter().all(|(_, _, &x)| round_to(x, 3) == x));
    }

    #[test]
    fn gen_seeded() {
        let b = Bounds::default();
        let a1 = generate((2, 2), &b, &mut StdRng::seed_from_u64(42)).unwrap();
        let a2 = generate((2, 2), &b, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a1, a2);
    }

    #[test]
    fn gen_bad_shape() {
        let b = Bounds::default();
        let mut rng = StdRng::seed_from_u64(1);
        assert!(generate((0, 2), &b, &mut rng).is_err());
        assert!(generate((2, 11), &b, &mut rng).is_err());
    }
}
