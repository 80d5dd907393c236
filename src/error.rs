//! Defines the app level error type and its conversion to JSON error responses.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An empty string was used for a transaction title.
    #[error("transaction title cannot be empty")]
    EmptyTitle,

    /// A negative amount was submitted for a transaction.
    ///
    /// Clients send the magnitude of a transaction and its type, the sign of
    /// the stored amount is derived from the type.
    #[error("{0} is a negative amount, which is not allowed")]
    NegativeAmount(f64),

    /// The path parameter could not be parsed as a transaction ID.
    #[error("\"{0}\" is not a valid transaction ID")]
    InvalidTransactionId(String),

    /// The requested resource was not found.
    ///
    /// For HTTP request handlers, the client should check that the parameters
    /// (e.g., ID) are correct and that the resource has been created.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// Tried to update a transaction that does not exist
    #[error("tried to update a transaction that is not in the database")]
    UpdateMissingTransaction,

    /// A stored timestamp could not be converted to ISO-8601.
    ///
    /// The error string should only be logged for debugging on the server.
    #[error("could not convert the stored timestamp \"{0}\" to ISO-8601")]
    InvalidTimestamp(String),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

/// The JSON body returned with every error response.
#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ErrorBody {
    /// The HTTP status code of the response.
    #[serde(rename = "statusCode")]
    pub status_code: u16,
    /// The reason phrase for the status code, e.g. "Not Found".
    pub error: String,
    /// A human readable description of what went wrong.
    pub message: String,
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let status_code = match self {
            Error::EmptyTitle | Error::NegativeAmount(_) | Error::InvalidTransactionId(_) => {
                StatusCode::BAD_REQUEST
            }
            Error::NotFound | Error::UpdateMissingTransaction => StatusCode::NOT_FOUND,
            // Any errors that are not handled above are not intended to be shown to the client.
            ref error => {
                tracing::error!("An unexpected error occurred: {}", error);
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let message = if status_code == StatusCode::INTERNAL_SERVER_ERROR {
            "An unexpected error occurred, check the server logs for more details.".to_owned()
        } else {
            self.to_string()
        };

        let body = ErrorBody {
            status_code: status_code.as_u16(),
            error: status_code
                .canonical_reason()
                .unwrap_or("Unknown")
                .to_owned(),
            message,
        };

        (status_code, Json(body)).into_response()
    }
}
