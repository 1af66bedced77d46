//! UI primitives for the Tally CLI.
//!
//! This module provides:
//! - **Context**: Environment detection (TTY, width, color, unicode)
//! - **Mode**: Output mode resolution (json, plain, pretty)
//! - **Theme**: Badge tokens and text styles
//! - **Render**: Tables, badges, error lines
//! - **Format**: String and amount utilities

mod context;
pub mod format;
mod mode;
pub mod render;
pub mod theme;

// Re-export core types at module level
pub use context::UiContext;
pub use theme::Badge;

// Re-export commonly used render functions
pub use render::{aligned_table, badge, print, print_error, table, Column};

// Re-export commonly used format functions
pub use format::{format_amount, single_line};
