//! Defines the store traits and their SQLite backed implementations.

mod sqlite;
mod transaction;

pub use sqlite::SqliteTransactionStore;
pub use transaction::TransactionStore;
