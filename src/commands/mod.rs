//! Command implementations

pub mod classify;
pub mod simple;

pub use classify::{ClassifyResult, classify_words};
pub use simple::{run_game, run_simple};
