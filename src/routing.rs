//! Application router configuration.

use axum::{
    Router,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    Error, endpoints,
    routes::transaction::{
        create_transaction_endpoint, get_transaction_endpoint, list_transactions_endpoint,
        summary_endpoint, update_transaction_endpoint,
    },
    state::AppState,
    stores::TransactionStore,
};

/// Return a router with all the app's routes.
pub fn build_router<T>(state: AppState<T>) -> Router
where
    T: TransactionStore + Clone + Send + Sync + 'static,
{
    Router::new()
        .route(
            endpoints::TRANSACTIONS,
            post(create_transaction_endpoint::<T>).get(list_transactions_endpoint::<T>),
        )
        .route(endpoints::SUMMARY, get(summary_endpoint::<T>))
        .route(
            endpoints::TRANSACTION,
            get(get_transaction_endpoint::<T>).put(update_transaction_endpoint::<T>),
        )
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The fallback handler for routes that do not exist.
async fn get_404_not_found() -> Response {
    Error::NotFound.into_response()
}

#[cfg(test)]
mod router_tests {
    use std::sync::{Arc, Mutex};

    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        AppState, db::initialize, endpoints, error::ErrorBody, models::Summary,
        stores::SqliteTransactionStore,
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open database in memory.");
        initialize(&connection).expect("Could not initialize database.");

        let store = SqliteTransactionStore::new(Arc::new(Mutex::new(connection)));
        let app = build_router(AppState::new(store));

        TestServer::new(app)
    }

    #[tokio::test]
    async fn unknown_route_returns_structured_404() {
        let server = get_test_server();

        let response = server.get("/budgets").await;

        response.assert_status_not_found();
        let body = response.json::<ErrorBody>();
        assert_eq!(body.status_code, 404);
        assert_eq!(body.error, "Not Found");
    }

    #[tokio::test]
    async fn summary_route_takes_precedence_over_id_route() {
        let server = get_test_server();

        // Must hit the summary handler, not get-by-id with id = "summary".
        let response = server.get(endpoints::SUMMARY).await;

        response.assert_status_ok();
        let summary = response.json::<Summary>();
        assert_eq!(summary.amount, 0.0);
    }
}
