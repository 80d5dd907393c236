//! Defines the transaction models and the row mapper that produces the
//! external representation of a transaction.

use serde::{Deserialize, Serialize};
use time::{
    OffsetDateTime, PrimitiveDateTime, UtcOffset,
    format_description::{BorrowedFormatItem, well_known::Rfc3339},
    macros::format_description,
};

use crate::Error;

/// Whether a transaction adds money to the ledger or removes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TransactionType {
    /// Money coming in, stored with a positive amount.
    Credit,
    /// Money going out, stored with a negative amount.
    Debit,
}

impl TransactionType {
    /// Apply the sign convention for this transaction type to a non-negative
    /// `amount`.
    pub fn signed_amount(self, amount: f64) -> f64 {
        match self {
            TransactionType::Credit => amount,
            TransactionType::Debit => -amount,
        }
    }
}

/// A transaction row as persisted in the store.
#[derive(Debug, Clone, PartialEq)]
pub struct Transaction {
    /// The opaque unique identifier of the transaction.
    pub id: String,
    /// A free-form label describing the transaction.
    pub title: String,
    /// The amount of money moved. The sign encodes the transaction type:
    /// positive for credit, negative for debit.
    pub amount: f64,
    /// When the transaction was created, as recorded by the store.
    pub created_at: String,
}

/// The external representation of a transaction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    /// The opaque unique identifier of the transaction.
    pub id: String,
    /// A free-form label describing the transaction.
    pub title: String,
    /// The signed amount of money moved.
    pub amount: f64,
    /// When the transaction was created, as an ISO-8601 UTC string.
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

/// The net sum of all signed transaction amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// The signed sum, zero when there are no transactions.
    pub amount: f64,
}

/// Convert a persisted transaction row into its external representation.
///
/// `id`, `title` and `amount` are copied verbatim and `created_at` is
/// converted to ISO-8601 with [to_iso_utc]. Mapping an already mapped record
/// yields the same record.
pub fn map_transaction(transaction: Transaction) -> Result<TransactionRecord, Error> {
    let created_at = to_iso_utc(&transaction.created_at)?;

    Ok(TransactionRecord {
        id: transaction.id,
        title: transaction.title,
        amount: transaction.amount,
        created_at,
    })
}

/// The canonical output layout: UTC with millisecond precision.
const ISO_UTC_MILLIS: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");

/// The layout SQLite uses for `CURRENT_TIMESTAMP`, with optional fractional
/// seconds.
const SQLITE_DATETIME: &[BorrowedFormatItem<'static>] = format_description!(
    version = 2,
    "[year]-[month]-[day] [hour]:[minute]:[second][optional [.[subsecond]]]"
);

/// Convert a stored timestamp into an ISO-8601 UTC string with millisecond
/// precision.
///
/// Accepts the store-native `YYYY-MM-DD HH:MM:SS[.SSS]` layout (read as UTC)
/// as well as RFC 3339 strings, so feeding the output back in returns the
/// same string.
///
/// # Errors
/// Returns an [Error::InvalidTimestamp] if `raw` matches neither layout.
pub fn to_iso_utc(raw: &str) -> Result<String, Error> {
    let timestamp = OffsetDateTime::parse(raw, &Rfc3339)
        .map(|datetime| datetime.to_offset(UtcOffset::UTC))
        .or_else(|_| {
            PrimitiveDateTime::parse(raw, SQLITE_DATETIME).map(|datetime| datetime.assume_utc())
        })
        .map_err(|_| Error::InvalidTimestamp(raw.to_owned()))?;

    timestamp
        .format(ISO_UTC_MILLIS)
        .map_err(|_| Error::InvalidTimestamp(raw.to_owned()))
}

#[cfg(test)]
mod transaction_type_tests {
    use super::TransactionType;

    #[test]
    fn credit_passes_amount_through() {
        assert_eq!(TransactionType::Credit.signed_amount(100.0), 100.0);
    }

    #[test]
    fn debit_negates_amount() {
        assert_eq!(TransactionType::Debit.signed_amount(40.0), -40.0);
    }

    #[test]
    fn zero_amount_stays_zero() {
        assert_eq!(TransactionType::Credit.signed_amount(0.0), 0.0);
        assert_eq!(TransactionType::Debit.signed_amount(0.0), 0.0);
    }

    #[test]
    fn transaction_type_uses_lowercase_json_names() {
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"credit\"").unwrap(),
            TransactionType::Credit
        );
        assert_eq!(
            serde_json::from_str::<TransactionType>("\"debit\"").unwrap(),
            TransactionType::Debit
        );
        assert_eq!(
            serde_json::to_string(&TransactionType::Credit).unwrap(),
            "\"credit\""
        );
    }
}

#[cfg(test)]
mod mapper_tests {
    use crate::Error;

    use super::{Transaction, map_transaction, to_iso_utc};

    #[test]
    fn converts_sqlite_timestamp_to_iso() {
        let got = to_iso_utc("2024-08-07 12:30:05").unwrap();

        assert_eq!(got, "2024-08-07T12:30:05.000Z");
    }

    #[test]
    fn keeps_fractional_seconds() {
        let got = to_iso_utc("2024-08-07 12:30:05.25").unwrap();

        assert_eq!(got, "2024-08-07T12:30:05.250Z");
    }

    #[test]
    fn truncates_to_millisecond_precision() {
        let got = to_iso_utc("2024-08-07T12:30:05.123456Z").unwrap();

        assert_eq!(got, "2024-08-07T12:30:05.123Z");
    }

    #[test]
    fn normalizes_offsets_to_utc() {
        let got = to_iso_utc("2024-08-07T14:30:05+02:00").unwrap();

        assert_eq!(got, "2024-08-07T12:30:05.000Z");
    }

    #[test]
    fn conversion_is_idempotent() {
        let once = to_iso_utc("2024-08-07 12:30:05").unwrap();
        let twice = to_iso_utc(&once).unwrap();

        assert_eq!(once, twice);
    }

    #[test]
    fn rejects_unparseable_timestamps() {
        let got = to_iso_utc("last tuesday");

        assert_eq!(got, Err(Error::InvalidTimestamp("last tuesday".to_owned())));
    }

    #[test]
    fn copies_fields_verbatim() {
        let row = Transaction {
            id: "7b4bc0f4-7be2-4ec3-b397-4ec6f1dcf0d1".to_owned(),
            title: "Salary".to_owned(),
            amount: 5000.0,
            created_at: "2024-08-07 12:30:05".to_owned(),
        };

        let record = map_transaction(row).unwrap();

        assert_eq!(record.id, "7b4bc0f4-7be2-4ec3-b397-4ec6f1dcf0d1");
        assert_eq!(record.title, "Salary");
        assert_eq!(record.amount, 5000.0);
        assert_eq!(record.created_at, "2024-08-07T12:30:05.000Z");
    }

    #[test]
    fn record_serializes_created_at_as_camel_case() {
        let row = Transaction {
            id: "7b4bc0f4-7be2-4ec3-b397-4ec6f1dcf0d1".to_owned(),
            title: "Salary".to_owned(),
            amount: 5000.0,
            created_at: "2024-08-07 12:30:05".to_owned(),
        };

        let value = serde_json::to_value(map_transaction(row).unwrap()).unwrap();

        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
