//! Analysis modules.
//!
//! Turns the raw records of an expenses file into per-category totals.

pub mod aggregator;

pub use aggregator::*;
