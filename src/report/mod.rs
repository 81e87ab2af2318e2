//! Report output.

pub mod generator;

pub use generator::{generate_load_error, generate_summary};
