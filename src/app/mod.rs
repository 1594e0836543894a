mod app;
mod cmd;
mod err;
mod utils;

pub use app::{App, CliArgs, Cmd};
