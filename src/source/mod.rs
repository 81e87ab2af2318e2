//! Input source handling.

pub mod loader;

pub use loader::{load_expenses, LoadError};
