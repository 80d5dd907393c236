//! Implements the SQLite backed stores.

mod transaction;

pub use transaction::SqliteTransactionStore;
