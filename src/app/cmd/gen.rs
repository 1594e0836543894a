use rand::SeedableRng;
use rand::rngs::StdRng;
use matcalc::input::{Bounds, generate};
use crate::app::err::*;
use crate::app::utils::*;

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Args {
    pub rows: usize,
    pub cols: usize,

    #[arg(short, long)]
    pub seed: Option<u64>,

    #[command(flatten)]
    pub common: Common,
}

pub fn run(args: &Args) -> AppResult<String> {
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy()
    };
    let a = generate((args.rows, args.cols), &Bounds::default(), &mut rng)?;
    show_mat(&a, args.common.format)
}
