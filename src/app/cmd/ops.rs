use matcalc::Mat;
use crate::app::err::*;
use crate::app::utils::*;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// JSON matrix, e.g. '[[1,2],[3,4]]', or path of a text file
    pub lhs: String,

    /// Same as `lhs`
    pub rhs: String,

    #[command(flatten)]
    pub common: Common,
}

pub fn add(args: &Args) -> AppResult<String> {
    let (a, b) = load_pair(args)?;
    let c = a.add(&b)?;
    show_mat(&c, args.common.format)
}

pub fn sub(args: &Args) -> AppResult<String> {
    let (a, b) = load_pair(args)?;
    let c = a.sub(&b)?;
    show_mat(&c, args.common.format)
}

pub fn mul(args: &Args) -> AppResult<String> {
    let (a, b) = load_pair(args)?;
    let c = a.mul(&b)?;
    show_mat(&c, args.common.format)
}

fn load_pair(args: &Args) -> AppResult<(Mat, Mat)> {
    let a = load(&args.lhs)?;
    let b = load(&args.rhs)?;
    Ok((a, b))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(lhs: &str, rhs: &str) -> Args {
        Args {
            lhs: lhs.to_string(),
            rhs: rhs.to_string(),
            common: Common { format: Format::Json, log: 0 }
        }
    }

    #[test]
    fn run_add() {
        let res = add(&args("[[1,2],[3,4]]", "[[1,1],[1,1]]")).unwrap();
        assert_eq!(res, "[[2.0,3.0],[4.0,5.0]]");
    }

    #[test]
    fn run_sub() {
        let res = sub(&args("[[1,2],[3,4]]", "[[1,1],[1,1]]")).unwrap();
        assert_eq!(res, "[[0.0,1.0],[2.0,3.0]]");
    }

    #[test]
    fn run_mul() {
        let res = mul(&args("[[1,2,3],[4,5,6]]", "[[1,2],[1,-1],[0,2]]")).unwrap();
        assert_eq!(res, "[[3.0,6.0],[9.0,15.0]]");
    }

    #[test]
    fn run_mul_mismatch() {
        let res = mul(&args("[[1,2,3],[4,5,6]]", "[[1,2],[3,4]]"));
        assert_eq!(res.unwrap_err().to_string(), "mul: shape mismatch (2, 3) vs (2, 2)");
    }
}
