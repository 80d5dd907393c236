//! Defines the endpoints for creating, listing, fetching, updating and
//! summarising transactions.

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{
    Error,
    models::{TransactionRecord, TransactionType},
    services::TransactionService,
    stores::TransactionStore,
};

/// The request body for creating or updating a transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionData {
    /// A free-form label describing the transaction.
    pub title: String,
    /// The non-negative amount of money moved. The sign of the stored amount
    /// is derived from `transaction_type`.
    pub amount: f64,
    /// Whether the transaction is a credit or a debit.
    #[serde(rename = "type")]
    pub transaction_type: TransactionType,
}

/// The confirmation body returned on a successful create or update.
#[derive(Debug, Serialize, Deserialize)]
pub struct ConfirmationBody {
    /// A human readable confirmation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// The response body wrapping the full transaction listing.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionListBody {
    /// Every transaction in the ledger, in no particular order.
    pub transactions: Vec<TransactionRecord>,
}

/// The response body wrapping a single transaction.
#[derive(Debug, Serialize, Deserialize)]
pub struct TransactionBody {
    /// The requested transaction.
    pub transaction: TransactionRecord,
}

/// Check the request body shape so that the service never has to.
fn validate(data: &TransactionData) -> Result<(), Error> {
    if data.title.trim().is_empty() {
        return Err(Error::EmptyTitle);
    }

    if data.amount < 0.0 {
        return Err(Error::NegativeAmount(data.amount));
    }

    Ok(())
}

fn parse_transaction_id(raw: &str) -> Result<Uuid, Error> {
    Uuid::parse_str(raw).map_err(|_| Error::InvalidTransactionId(raw.to_owned()))
}

/// A route handler for creating a new transaction.
pub async fn create_transaction_endpoint<T>(
    State(mut service): State<TransactionService<T>>,
    Json(data): Json<TransactionData>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    if let Err(error) = validate(&data) {
        return error.into_response();
    }

    if let Err(error) = service.create(&data.title, data.amount, data.transaction_type) {
        tracing::error!("could not create transaction: {error}");
        return error.into_response();
    }

    (
        StatusCode::CREATED,
        Json(ConfirmationBody {
            message: Some("Transaction created successfully".to_owned()),
        }),
    )
        .into_response()
}

/// A route handler for updating the title and amount of an existing
/// transaction, responds with 404 if the transaction does not exist.
pub async fn update_transaction_endpoint<T>(
    State(mut service): State<TransactionService<T>>,
    Path(transaction_id): Path<String>,
    Json(data): Json<TransactionData>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    let id = match parse_transaction_id(&transaction_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };

    if let Err(error) = validate(&data) {
        return error.into_response();
    }

    match service.update(id, &data.title, data.amount, data.transaction_type) {
        Ok(()) => (
            StatusCode::OK,
            Json(ConfirmationBody {
                message: Some("Transaction updated successfully".to_owned()),
            }),
        )
            .into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for listing every transaction in the ledger.
pub async fn list_transactions_endpoint<T>(
    State(service): State<TransactionService<T>>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    match service.list() {
        Ok(transactions) => {
            (StatusCode::OK, Json(TransactionListBody { transactions })).into_response()
        }
        Err(error) => {
            tracing::error!("could not list transactions: {error}");
            error.into_response()
        }
    }
}

/// A route handler for fetching a single transaction by its ID, responds
/// with 404 if the transaction does not exist.
pub async fn get_transaction_endpoint<T>(
    State(service): State<TransactionService<T>>,
    Path(transaction_id): Path<String>,
) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    let id = match parse_transaction_id(&transaction_id) {
        Ok(id) => id,
        Err(error) => return error.into_response(),
    };

    match service.get_by_id(id) {
        Ok(transaction) => (StatusCode::OK, Json(TransactionBody { transaction })).into_response(),
        Err(error) => error.into_response(),
    }
}

/// A route handler for the ledger summary: the net sum of all signed
/// amounts, zero for an empty ledger.
pub async fn summary_endpoint<T>(State(service): State<TransactionService<T>>) -> Response
where
    T: TransactionStore + Clone + Send + Sync,
{
    match service.summary() {
        Ok(summary) => (StatusCode::OK, Json(summary)).into_response(),
        Err(error) => {
            tracing::error!("could not compute summary: {error}");
            error.into_response()
        }
    }
}
