use log::warn;
use matcalc::{GaussSolver, PivotPolicy};
use crate::app::err::*;
use crate::app::utils::*;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    /// Augmented matrix with n rows and n + 1 columns
    pub input: String,

    #[arg(short, long, default_value = "in-row")]
    pub pivot: PivotPolicy,

    /// Fail on singular systems instead of returning unreliable values
    #[arg(short, long)]
    pub strict: bool,

    #[command(flatten)]
    pub common: Common,
}

pub fn run(args: &Args) -> AppResult<String> {
    let m = load(&args.input)?;
    let (rows, cols) = m.shape();

    ensure!(cols == rows + 1, "the augmented matrix must have one more column than rows, got {rows}x{cols}.");

    if !args.strict {
        warn!("answers to singular, inconsistent or underdetermined systems are unreliable.");
    }

    let x = GaussSolver::new()
        .policy(args.pivot)
        .strict(args.strict)
        .solve(&m)?;

    let res = match args.common.format {
        Format::Table => x.to_string(),
        Format::Json  => serde_json::to_string(&x)?
    };
    Ok(res)
}
