use clap::ValueEnum;
use derive_more::Display;
use matcalc::Mat;
use matcalc::input::{Bounds, load_matrix};
use matcalc::util::format::num_str;
use std::time::Instant;
use log::info;
use crate::app::err::*;

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum, Display, Debug, Default)]
#[clap(rename_all="lower")]
pub enum Format {
    #[default] Table,
    Json
}

#[derive(Clone, Default, Debug, clap::Args)]
pub struct Common {
    #[arg(short, long, default_value = "table")]
    pub format: Format,

    #[arg(long, default_value = "0")]
    pub log: u8,
}

/// Runs `proc` and logs how long it took.
pub fn measure<F, Res>(label: &str, proc: F) -> Res
where F: FnOnce() -> Res {
    let start = Instant::now();
    let res = proc();
    info!("{label}: {:?}", start.elapsed());
    res
}

/// Turns a panic inside `f` into an [`Error::Panic`].
pub fn guard_panic<F, R>(f: F) -> AppResult<R>
where F: FnOnce() -> AppResult<R> + std::panic::UnwindSafe {
    std::panic::catch_unwind(f).unwrap_or_else(|payload| {
        let msg = payload.downcast_ref::<String>().cloned()
            .or_else(|| payload.downcast_ref::<&str>().map(|s| s.to_string()))
            .unwrap_or_else(|| String::from("unknown cause"));
        Err(Error::Panic(msg).into())
    })
}

pub fn load(input: &str) -> AppResult<Mat> {
    let a = load_matrix(input, &Bounds::default()).map_err(|e|
        Error::load(input, e)
    )?;
    Ok(a)
}

pub fn show_mat(a: &Mat, format: Format) -> AppResult<String> {
    let res = match format {
        Format::Table => a.to_string().trim_end().to_string(),
        Format::Json  => serde_json::to_string(&a.round(3).to_rows())?
    };
    Ok(res)
}

pub fn show_value(x: f64, format: Format) -> AppResult<String> {
    let res = match format {
        Format::Table => num_str(x, 3),
        Format::Json  => serde_json::to_string(&x)?
    };
    Ok(res)
}
