pub mod misc;
pub mod reports;
pub mod transactions;
