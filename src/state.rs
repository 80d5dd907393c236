//! Implements a struct that holds the state of the REST server.

use axum::extract::FromRef;

use crate::{services::TransactionService, stores::TransactionStore};

/// The state of the REST server.
///
/// The store backing the ledger is injected at construction, which lets
/// tests run the full router against an in-memory database.
#[derive(Debug, Clone)]
pub struct AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// The service holding the ledger's domain logic.
    pub transaction_service: TransactionService<T>,
}

impl<T> AppState<T>
where
    T: TransactionStore + Send + Sync,
{
    /// Create a new [AppState] from the store backing the ledger.
    pub fn new(store: T) -> Self {
        Self {
            transaction_service: TransactionService::new(store),
        }
    }
}

// this impl hands route handlers the transaction service directly
impl<T> FromRef<AppState<T>> for TransactionService<T>
where
    T: TransactionStore + Clone + Send + Sync,
{
    fn from_ref(state: &AppState<T>) -> Self {
        state.transaction_service.clone()
    }
}
