//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g. '/transactions/{transaction_id}',
//! use [format_endpoint].

/// The route to create and list transactions.
pub const TRANSACTIONS: &str = "/transactions";
/// The route to fetch or update a single transaction.
pub const TRANSACTION: &str = "/transactions/{transaction_id}";
/// The route to fetch the ledger summary.
pub const SUMMARY: &str = "/transactions/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{transaction_id}',
/// '{transaction_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    match endpoint_path[param_start..].find('}') {
        Some(param_end) => format!(
            "{}{}{}",
            &endpoint_path[..param_start],
            id,
            &endpoint_path[param_start + param_end + 1..]
        ),
        None => endpoint_path.to_owned(),
    }
}
