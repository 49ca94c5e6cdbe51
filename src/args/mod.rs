//! Command-line argument parsing and handling.

pub mod definition;

// Re-export commonly used items
pub use definition::{Args, determine_log_level};
