use derive_more::Display;
use matcalc::MatError;
use matcalc::input::InputError;

pub type AppResult<T> = Result<T, Box<dyn std::error::Error>>;

#[derive(Debug, Display)]
pub enum Error {
    #[display("{_0}")]
    Msg(String),

    #[display("{_0}")]
    Mat(MatError),

    #[display("{_0}")]
    Input(InputError),

    #[display("invalid input matrix '{input}': {cause}")]
    Load { input: String, cause: InputError },

    #[display("panic: {_0}")]
    Panic(String),
}

impl Error {
    pub fn load(input: &str, cause: InputError) -> Self {
        Error::Load { input: input.to_string(), cause }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Mat(e) => Some(e),
            Error::Input(e) | Error::Load { cause: e, .. } => Some(e),
            Error::Msg(_) | Error::Panic(_) => None
        }
    }
}

impl From<MatError> for Error {
    fn from(e: MatError) -> Self {
        Error::Mat(e)
    }
}

impl From<InputError> for Error {
    fn from(e: InputError) -> Self {
        Error::Input(e)
    }
}

macro_rules! err {
    ($($arg:tt)*) => {{
        use crate::app::err::Error;
        Err(Error::Msg(format!($($arg)*)).into())
    }}
}

macro_rules! ensure {
    ($cond:expr, $($arg:tt)*) => {{
        if !$cond {
            return err!($($arg)*);
        }
    }}
}

pub(crate) use {err, ensure};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display() {
        let e = Error::from(MatError::NotSquare { op: "det", shape: (2, 3) });
        assert_eq!(e.to_string(), "det: matrix must be square, got (2, 3)");

        let e = Error::load("x.txt", InputError::BadSize { size: 0, max: 10 });
        assert_eq!(e.to_string(), "invalid input matrix 'x.txt': size 0 is out of range [1, 10]");
    }

    #[test]
    fn source() {
        use std::error::Error as _;

        let e = Error::from(InputError::Parse { token: "a".into() });
        assert!(e.source().is_some());
        assert!(Error::Msg("m".into()).source().is_none());
    }

    #[test]
    fn ensure_macro() {
        fn check(n: usize) -> AppResult<usize> {
            ensure!(n > 0, "n must be positive, got {n}");
            Ok(n)
        }
        assert_eq!(check(1).unwrap(), 1);
        assert_eq!(check(0).unwrap_err().to_string(), "n must be positive, got 0");
    }
}
