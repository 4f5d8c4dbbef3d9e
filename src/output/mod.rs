//! Terminal output
//!
//! Console abstraction for the line-based game, display helpers for command
//! results, and tile styling.

pub mod console;
pub mod display;
pub mod formatters;

pub use console::{Console, TermConsole};
pub use display::print_classify_result;
