//! The API endpoints URIs.
//!
//! For endpoints that take a parameter, e.g., '/transactions/{id}', use [format_endpoint].

/// The route to create a new transaction.
pub const NEW_TRANSACTION: &str = "/new";
/// The route to list every stored transaction.
pub const GET_ALL_TRANSACTIONS: &str = "/getAll";
/// The route to fetch or delete a single transaction.
pub const TRANSACTION: &str = "/transactions/{id}";
/// The route for the income and expense totals.
pub const SUMMARY: &str = "/summary";

/// Replace the parameter in `endpoint_path` with `id`.
///
/// A parameter is a string that starts with a left brace, followed by
/// lowercase letters or underscores, and ends with a right brace.
/// For example, in the endpoint path '/transactions/{id}', '{id}' is the
/// parameter.
///
/// This function assumes that an endpoint path only contains ASCII characters
/// and a single parameter.
///
/// If no parameter is found in `endpoint_path`, the function returns the
/// the original `endpoint_path`.
pub fn format_endpoint(endpoint_path: &str, id: i64) -> String {
    let mut param_start = None;
    let mut param_end = None;

    for (i, c) in endpoint_path.chars().enumerate() {
        if c == '{' {
            param_start = Some(i);
        } else if param_start.is_some() && c == '}' {
            param_end = Some(i + 1);
            break;
        }
    }

    let param_start = match param_start {
        Some(start) => start,
        None => return endpoint_path.to_string(),
    };

    let param_end = param_end.unwrap_or(endpoint_path.len());

    format!(
        "{}{}{}",
        &endpoint_path[..param_start],
        id,
        &endpoint_path[param_end..]
    )
}

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    use super::format_endpoint;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::NEW_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::GET_ALL_TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::SUMMARY);
    }

    #[test]
    fn produces_valid_uri() {
        let formatted_path = format_endpoint(endpoints::TRANSACTION, 1);

        assert_eq!(formatted_path, "/transactions/1");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }

    #[test]
    fn returns_original_path_with_no_parameter() {
        let formatted_path = format_endpoint(endpoints::SUMMARY, 1);

        assert_eq!(formatted_path, "/summary");
        assert!(formatted_path.parse::<Uri>().is_ok());
    }
}
