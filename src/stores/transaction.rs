//! Defines the transaction store trait.

use crate::{Error, models::Transaction};

/// Handles durable CRUD access to the transactions table.
///
/// Implementations hold no business rules: the sign convention, identifier
/// assignment and the not-found policy live in
/// [TransactionService](crate::services::TransactionService).
pub trait TransactionStore {
    /// Persist a new transaction row.
    ///
    /// The creation timestamp is assigned by the store.
    fn insert(&mut self, id: &str, title: &str, signed_amount: f64) -> Result<(), Error>;

    /// Overwrite the title and amount of the row with the given `id`,
    /// returning the number of rows affected (0 or 1).
    ///
    /// A zero count is not an error at this level.
    fn update_by_id(
        &mut self,
        id: &str,
        title: &str,
        signed_amount: f64,
    ) -> Result<usize, Error>;

    /// Retrieve all transaction rows. No ordering is guaranteed.
    fn select_all(&self) -> Result<Vec<Transaction>, Error>;

    /// Retrieve the transaction row with the given `id`, if it exists.
    fn select_by_id(&self, id: &str) -> Result<Option<Transaction>, Error>;

    /// Sum the signed amounts across all rows.
    ///
    /// Returns `None` when the table is empty.
    fn sum_amount(&self) -> Result<Option<f64>, Error>;
}
