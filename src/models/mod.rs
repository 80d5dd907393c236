//! Defines the data models for the application.

mod transaction;

pub use transaction::{
    Summary, Transaction, TransactionRecord, TransactionType, map_transaction, to_iso_utc,
};
