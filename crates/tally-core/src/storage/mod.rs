//! Storage backends for ledger transactions.
//!
//! - **traits**: the `TransactionStore` interface
//! - **json_file**: pretty-printed JSON array on disk

mod json_file;
mod traits;

pub use json_file::JsonFileStore;
pub use traits::TransactionStore;
