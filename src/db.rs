//! Implements the creation of the application's database schema.

use rusqlite::Connection;

/// Create the tables used by the application if they do not exist.
///
/// The `created_at` column is assigned by the database so that inserts never
/// supply a creation timestamp.
///
/// # Errors
/// Returns an error if there is an SQL error.
pub fn initialize(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS transactions (
                id TEXT PRIMARY KEY,
                title TEXT NOT NULL,
                amount REAL NOT NULL,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
                )",
        (),
    )?;

    Ok(())
}
