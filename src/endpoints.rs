//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/finance/categories/{category_id}', use
//! [format_endpoint].

/// The route to list and create categories.
pub const CATEGORIES: &str = "/finance/categories";
/// The route to get, update and delete a single category.
pub const CATEGORY: &str = "/finance/categories/{category_id}";
/// The route to list and create transactions.
pub const TRANSACTIONS: &str = "/finance/transactions";
/// The route to get, update and delete a single transaction.
pub const TRANSACTION: &str = "/finance/transactions/{transaction_id}";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/users/{user_id}', '{user_id}' is the parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: &str) -> String {
    let Some(param_start) = endpoint_path.find('{') else {
        return endpoint_path.to_owned();
    };

    let param_end = endpoint_path[param_start..]
        .find('}')
        .map_or(endpoint_path.len(), |end| param_start + end + 1);

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}
