//! Implements a SQLite backed transaction store.
use std::sync::{Arc, Mutex};

use rusqlite::{Connection, OptionalExtension, Row};

use crate::{Error, models::Transaction, stores::TransactionStore};

/// Stores transactions in a SQLite database.
///
/// The store shares its connection with the rest of the application, each
/// operation holds the lock for the duration of a single statement.
#[derive(Debug, Clone)]
pub struct SqliteTransactionStore {
    connection: Arc<Mutex<Connection>>,
}

impl SqliteTransactionStore {
    /// Create a new store for the SQLite `connection`.
    pub fn new(connection: Arc<Mutex<Connection>>) -> Self {
        Self { connection }
    }

    fn map_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
        Ok(Transaction {
            id: row.get(0)?,
            title: row.get(1)?,
            amount: row.get(2)?,
            created_at: row.get(3)?,
        })
    }
}

impl TransactionStore for SqliteTransactionStore {
    /// Persist a new transaction in the database.
    ///
    /// The `created_at` column is filled in by the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] on a constraint violation or any other
    /// SQL error.
    fn insert(&mut self, id: &str, title: &str, signed_amount: f64) -> Result<(), Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        connection.execute(
            "INSERT INTO transactions (id, title, amount) VALUES (?1, ?2, ?3)",
            (id, title, signed_amount),
        )?;

        Ok(())
    }

    /// Overwrite the title and amount of the transaction with the given `id`.
    ///
    /// The `id` and `created_at` columns are never touched.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn update_by_id(
        &mut self,
        id: &str,
        title: &str,
        signed_amount: f64,
    ) -> Result<usize, Error> {
        let connection = self
            .connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?;

        let rows_affected = connection.execute(
            "UPDATE transactions SET title = ?2, amount = ?3 WHERE id = ?1",
            (id, title, signed_amount),
        )?;

        Ok(rows_affected)
    }

    /// Retrieve every transaction in the database.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn select_all(&self) -> Result<Vec<Transaction>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare("SELECT id, title, amount, created_at FROM transactions")?
            .query_map([], Self::map_row)?
            .map(|maybe_transaction| maybe_transaction.map_err(Error::from))
            .collect()
    }

    /// Retrieve the transaction with the given `id`, or `None` if no row
    /// matches.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn select_by_id(&self, id: &str) -> Result<Option<Transaction>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .prepare("SELECT id, title, amount, created_at FROM transactions WHERE id = :id")?
            .query_row(&[(":id", id)], Self::map_row)
            .optional()
            .map_err(Error::from)
    }

    /// Sum the signed amounts across all transactions.
    ///
    /// SQLite reports the sum of an empty table as NULL, which is surfaced
    /// here as `None`.
    ///
    /// # Errors
    /// Returns an [Error::SqlError] if there is an SQL error.
    fn sum_amount(&self) -> Result<Option<f64>, Error> {
        self.connection
            .lock()
            .map_err(|_| Error::DatabaseLockError)?
            .query_row("SELECT SUM(amount) FROM transactions", [], |row| row.get(0))
            .map_err(Error::from)
    }
}
