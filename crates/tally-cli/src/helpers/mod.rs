//! Parsing helper functions for the CLI.

mod parsing;

// Re-export public API
pub use parsing::{parse_output_format, OutputFormat};
