//! Finledger is a small REST API for recording signed financial transactions
//! (credits and debits) and reporting their running balance.
//!
//! This library provides the domain service, the SQLite backed store and the
//! axum router that serves the JSON API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod db;
mod endpoints;
mod error;
mod models;
mod routes;
mod routing;
mod services;
mod state;
mod stores;

pub use db::initialize as initialize_db;
pub use error::{Error, ErrorBody};
pub use models::{Summary, Transaction, TransactionRecord, TransactionType};
pub use routing::build_router;
pub use services::TransactionService;
pub use state::AppState;
pub use stores::{SqliteTransactionStore, TransactionStore};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}
