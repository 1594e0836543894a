use log::info;
use clap::{Parser, Subcommand};
use matcalc::util::log::{init_simple_logger, level_filter};

use super::cmd::{ops, unary, gauss, gen, menu};
use super::utils::*;
use super::err::AppResult;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct CliArgs {
    #[command(subcommand)]
    pub command: Cmd
}

#[derive(Subcommand, Debug)]
#[clap(rename_all="lower")]
pub enum Cmd {
    /// A + B
    Add(ops::Args),
    /// A - B
    Sub(ops::Args),
    /// A * B
    Mul(ops::Args),
    /// k * A
    Scale(unary::ScaleArgs),
    Transpose(unary::Args),
    Trace(unary::Args),
    /// Determinant via triangularization
    Det(unary::PivotArgs),
    /// Upper triangular form
    Triang(unary::PivotArgs),
    /// Solve a linear system given as an n x (n + 1) augmented matrix
    Gauss(gauss::Args),
    /// Random matrix
    Gen(gen::Args),
    /// Interactive session
    Menu(menu::Args),
}

impl CliArgs {
    fn log_level(&self) -> log::LevelFilter {
        let level = match &self.command {
            Cmd::Add(args)       => args.common.log,
            Cmd::Sub(args)       => args.common.log,
            Cmd::Mul(args)       => args.common.log,
            Cmd::Scale(args)     => args.common.log,
            Cmd::Transpose(args) => args.common.log,
            Cmd::Trace(args)     => args.common.log,
            Cmd::Det(args)       => args.common.log,
            Cmd::Triang(args)    => args.common.log,
            Cmd::Gauss(args)     => args.common.log,
            Cmd::Gen(args)       => args.common.log,
            Cmd::Menu(args)      => args.log,
        };
        level_filter(level)
    }
}

pub struct App {
    pub args: CliArgs
}

impl App {
    pub fn new() -> Self {
        let args = CliArgs::parse();
        Self::new_with(args)
    }

    pub fn new_with(args: CliArgs) -> Self {
        App { args }
    }

    pub fn run(&self) -> AppResult<String> {
        self.init_logger();

        info!("args: {:?}", self.args);

        measure("time", ||
            self.dispatch()
        )
    }

    fn init_logger(&self) {
        let l = self.args.log_level();
        if let Err(e) = init_simple_logger(l) {
            eprintln!("failed to init logger: {e}");
        }
    }

    fn dispatch(&self) -> AppResult<String> {
        guard_panic(||
            match &self.args.command {
                Cmd::Add(args)       => ops::add(args),
                Cmd::Sub(args)       => ops::sub(args),
                Cmd::Mul(args)       => ops::mul(args),
                Cmd::Scale(args)     => unary::scale(args),
                Cmd::Transpose(args) => unary::transpose(args),
                Cmd::Trace(args)     => unary::trace(args),
                Cmd::Det(args)       => unary::det(args),
                Cmd::Triang(args)    => unary::triang(args),
                Cmd::Gauss(args)     => gauss::run(args),
                Cmd::Gen(args)       => gen::run(args),
                Cmd::Menu(args)      => menu::run(args),
            }
        )
    }
}
