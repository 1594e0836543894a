use log::warn;
use matcalc::{PivotPolicy, det_with, triangularize_with};
use matcalc::input::{Bounds, parse_value};
use crate::app::err::*;
use crate::app::utils::*;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// JSON matrix, e.g. '[[1,2],[3,4]]', or path of a text file
    pub input: String,

    #[command(flatten)]
    pub common: Common,
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct ScaleArgs {
    pub input: String,

    /// Scalar in [-100, 100]
    #[arg(allow_negative_numbers = true)]
    pub k: String,

    #[command(flatten)]
    pub common: Common,
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct PivotArgs {
    pub input: String,

    #[arg(short, long, default_value = "in-row")]
    pub pivot: PivotPolicy,

    #[command(flatten)]
    pub common: Common,
}

pub fn scale(args: &ScaleArgs) -> AppResult<String> {
    let a = load(&args.input)?;
    let k = match parse_value(&args.k, &Bounds::default()) {
        Ok(k) => k,
        Err(e) => return err!("invalid scalar: {e}")
    };
    show_mat(&a.scale(k), args.common.format)
}

pub fn transpose(args: &Args) -> AppResult<String> {
    let a = load(&args.input)?;
    show_mat(&a.transpose(), args.common.format)
}

pub fn trace(args: &Args) -> AppResult<String> {
    let a = load(&args.input)?;
    let t = a.trace()?;
    show_value(t, args.common.format)
}

pub fn det(args: &PivotArgs) -> AppResult<String> {
    let a = load(&args.input)?;
    let d = det_with(&a, args.pivot)?;

    if !d.is_finite() {
        warn!("zero pivot met; retry with `--pivot partial`.");
    }

    show_value(d, args.common.format)
}

pub fn triang(args: &PivotArgs) -> AppResult<String> {
    let a = load(&args.input)?;
    let u = triangularize_with(&a, args.pivot)?;
    show_mat(&u, args.common.format)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn common() -> Common {
        Common { format: Format::Json, log: 0 }
    }

    fn args(input: &str) -> Args {
        Args { input: input.to_string(), common: common() }
    }

    fn pivot_args(input: &str, pivot: PivotPolicy) -> PivotArgs {
        PivotArgs { input: input.to_string(), pivot, common: common() }
    }

    #[test]
    fn run_scale() {
        let a = ScaleArgs { input: "[[1,2],[3,4]]".to_string(), k: "-2".to_string(), common: common() };
        assert_eq!(scale(&a).unwrap(), "[[-2.0,-4.0],[-6.0,-8.0]]");

        let a = ScaleArgs { input: "[[1]]".to_string(), k: "101".to_string(), common: common() };
        assert!(scale(&a).is_err());
    }

    #[test]
    fn run_transpose() {
        assert_eq!(transpose(&args("[[1,2,3]]")).unwrap(), "[[1.0],[2.0],[3.0]]");
    }

    #[test]
    fn run_trace() {
        assert_eq!(trace(&args("[[1,2],[3,4]]")).unwrap(), "5.0");
        assert!(trace(&args("[[1,2,3]]")).is_err());
    }

    #[test]
    fn run_det() {
        assert_eq!(det(&pivot_args("[[4,3],[6,3]]", PivotPolicy::InRow)).unwrap(), "-6.0");
        assert_eq!(det(&pivot_args("[[0,1],[1,1]]", PivotPolicy::Partial)).unwrap(), "-1.0");
    }

    #[test]
    fn run_triang() {
        let res = triang(&pivot_args("[[2,1],[4,3]]", PivotPolicy::InRow)).unwrap();
        assert_eq!(res, "[[2.0,1.0],[0.0,1.0]]");
    }
}
