pub mod num;
pub mod format;
pub mod log;
