//! The API endpoints URIs.

/// The root route which redirects to the transactions page.
pub const ROOT: &str = "/";
/// The page for displaying and filtering transactions.
pub const TRANSACTIONS_VIEW: &str = "/transactions";
/// The route the filter form is submitted to. Redirects to a filtered [TRANSACTIONS_VIEW].
pub const FILTER_TRANSACTIONS: &str = "/transactions/filter";
/// The route for creating a transaction.
pub const ADD_TRANSACTION: &str = "/add_transaction";
/// The page with the expenses by category chart.
pub const CHARTS_VIEW: &str = "/charts";
/// The route for downloading the transaction history as CSV.
pub const DOWNLOAD_CSV: &str = "/download_csv";
/// The route for static files.
pub const STATIC: &str = "/static";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::ROOT);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::FILTER_TRANSACTIONS);
        assert_endpoint_is_valid_uri(endpoints::ADD_TRANSACTION);
        assert_endpoint_is_valid_uri(endpoints::CHARTS_VIEW);
        assert_endpoint_is_valid_uri(endpoints::DOWNLOAD_CSV);
        assert_endpoint_is_valid_uri(endpoints::STATIC);
    }
}
