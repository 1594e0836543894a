pub mod ops;
pub mod unary;
pub mod gauss;
pub mod gen;
pub mod menu;
