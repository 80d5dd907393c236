//! Defines the domain service that enforces the ledger's business rules.

use uuid::Uuid;

use crate::{
    Error,
    models::{Summary, TransactionRecord, TransactionType, map_transaction},
    stores::TransactionStore,
};

/// Enforces the sign convention, assigns identifiers, shapes responses and
/// computes the ledger summary.
///
/// The backing store is injected so the service can be exercised against an
/// in-memory database in tests.
#[derive(Debug, Clone)]
pub struct TransactionService<T>
where
    T: TransactionStore,
{
    store: T,
}

impl<T> TransactionService<T>
where
    T: TransactionStore,
{
    /// Create a new service backed by `store`.
    pub fn new(store: T) -> Self {
        Self { store }
    }

    /// Record a new transaction.
    ///
    /// `amount` must already be validated as non-negative, the stored sign is
    /// derived from `transaction_type`. A fresh identifier is assigned here,
    /// so concurrent creates never collide.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if the insert fails.
    pub fn create(
        &mut self,
        title: &str,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Result<(), Error> {
        let id = Uuid::new_v4();
        let signed_amount = transaction_type.signed_amount(amount);

        self.store.insert(&id.to_string(), title, signed_amount)
    }

    /// Overwrite the title and amount of an existing transaction.
    ///
    /// The identifier and creation timestamp never change.
    ///
    /// # Errors
    /// Returns an [Error::UpdateMissingTransaction] if `id` does not refer to
    /// a stored transaction.
    pub fn update(
        &mut self,
        id: Uuid,
        title: &str,
        amount: f64,
        transaction_type: TransactionType,
    ) -> Result<(), Error> {
        let signed_amount = transaction_type.signed_amount(amount);
        let rows_affected = self
            .store
            .update_by_id(&id.to_string(), title, signed_amount)?;

        if rows_affected == 0 {
            return Err(Error::UpdateMissingTransaction);
        }

        Ok(())
    }

    /// List every transaction in the ledger in its external representation.
    ///
    /// An empty ledger yields an empty list, not an error.
    pub fn list(&self) -> Result<Vec<TransactionRecord>, Error> {
        self.store
            .select_all()?
            .into_iter()
            .map(map_transaction)
            .collect()
    }

    /// Fetch a single transaction by its identifier.
    ///
    /// # Errors
    /// Returns an [Error::NotFound] if `id` does not refer to a stored
    /// transaction.
    pub fn get_by_id(&self, id: Uuid) -> Result<TransactionRecord, Error> {
        match self.store.select_by_id(&id.to_string())? {
            Some(transaction) => map_transaction(transaction),
            None => Err(Error::NotFound),
        }
    }

    /// Compute the net sum of all signed amounts.
    ///
    /// An empty ledger is not an error: the missing aggregate is normalized
    /// to zero.
    pub fn summary(&self) -> Result<Summary, Error> {
        let amount = self.store.sum_amount()?.unwrap_or(0.0);

        Ok(Summary { amount })
    }
}

#[cfg(test)]
mod transaction_service_tests {
    use std::sync::{Arc, Mutex};

    use rusqlite::Connection;
    use time::{OffsetDateTime, format_description::well_known::Rfc3339};
    use uuid::Uuid;

    use crate::{
        Error,
        db::initialize,
        models::{TransactionType, to_iso_utc},
        stores::SqliteTransactionStore,
    };

    use super::TransactionService;

    fn get_test_service() -> TransactionService<SqliteTransactionStore> {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        TransactionService::new(SqliteTransactionStore::new(Arc::new(Mutex::new(connection))))
    }

    #[test]
    fn create_credit_stores_amount_verbatim() {
        let mut service = get_test_service();

        service
            .create("Salary", 5000.0, TransactionType::Credit)
            .unwrap();

        let records = service.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].title, "Salary");
        assert_eq!(records[0].amount, 5000.0);
    }

    #[test]
    fn create_debit_stores_negated_amount() {
        let mut service = get_test_service();

        service
            .create("Rent", 1200.0, TransactionType::Debit)
            .unwrap();

        let records = service.list().unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].amount, -1200.0);
    }

    #[test]
    fn create_assigns_unique_identifiers() {
        let mut service = get_test_service();

        service
            .create("Salary", 5000.0, TransactionType::Credit)
            .unwrap();
        service
            .create("Salary", 5000.0, TransactionType::Credit)
            .unwrap();

        let records = service.list().unwrap();
        assert_eq!(records.len(), 2);
        assert_ne!(records[0].id, records[1].id);
        for record in records {
            Uuid::parse_str(&record.id).expect("identifiers should be well-formed UUIDs");
        }
    }

    #[test]
    fn created_record_has_iso_timestamp() {
        let mut service = get_test_service();
        service
            .create("Salary", 5000.0, TransactionType::Credit)
            .unwrap();

        let record = service.list().unwrap().remove(0);

        let parsed = OffsetDateTime::parse(&record.created_at, &Rfc3339);
        assert!(parsed.is_ok(), "createdAt should be a valid ISO-8601 string");
        // Mapping the already mapped value must be a no-op.
        assert_eq!(to_iso_utc(&record.created_at).unwrap(), record.created_at);
    }

    #[test]
    fn update_changes_title_and_signed_amount() {
        let mut service = get_test_service();
        service
            .create("Rent", 1200.0, TransactionType::Debit)
            .unwrap();
        let id = Uuid::parse_str(&service.list().unwrap()[0].id).unwrap();

        service
            .update(id, "Rent (adjusted)", 1500.0, TransactionType::Debit)
            .unwrap();

        let record = service.get_by_id(id).unwrap();
        assert_eq!(record.title, "Rent (adjusted)");
        assert_eq!(record.amount, -1500.0);
    }

    #[test]
    fn update_keeps_id_and_created_at() {
        let mut service = get_test_service();
        service
            .create("Rent", 1200.0, TransactionType::Debit)
            .unwrap();
        let before = service.list().unwrap().remove(0);
        let id = Uuid::parse_str(&before.id).unwrap();

        service
            .update(id, "Rent", 1500.0, TransactionType::Debit)
            .unwrap();

        let after = service.get_by_id(id).unwrap();
        assert_eq!(after.id, before.id);
        assert_eq!(after.created_at, before.created_at);
    }

    #[test]
    fn update_missing_transaction_fails_with_not_found() {
        let mut service = get_test_service();

        let got = service.update(Uuid::new_v4(), "Rent", 1500.0, TransactionType::Debit);

        assert_eq!(got, Err(Error::UpdateMissingTransaction));
    }

    #[test]
    fn get_by_id_missing_transaction_fails_with_not_found() {
        let service = get_test_service();

        let got = service.get_by_id(Uuid::new_v4());

        assert_eq!(got, Err(Error::NotFound));
    }

    #[test]
    fn list_on_empty_ledger_is_empty() {
        let service = get_test_service();

        let records = service.list().unwrap();

        assert!(records.is_empty());
    }

    #[test]
    fn summary_on_empty_ledger_is_zero() {
        let service = get_test_service();

        let summary = service.summary().unwrap();

        assert_eq!(summary.amount, 0.0);
    }

    #[test]
    fn summary_sums_credits_and_debits() {
        let mut service = get_test_service();
        service
            .create("Consulting", 100.0, TransactionType::Credit)
            .unwrap();
        service
            .create("Groceries", 40.0, TransactionType::Debit)
            .unwrap();

        let summary = service.summary().unwrap();

        assert_eq!(summary.amount, 60.0);
    }
}
