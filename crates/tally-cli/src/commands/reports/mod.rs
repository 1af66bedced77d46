//! Balance and per-category reports.

pub mod balance;
pub mod summary;

pub use balance::handle_balance;
pub use summary::handle_summary;
