//! Defines the domain services layered on the stores.

mod transaction;

pub use transaction::TransactionService;
