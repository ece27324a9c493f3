//! Defines the endpoint the transactions filter form is submitted to.

use std::collections::HashMap;

use axum::response::{IntoResponse, Response};
use axum_extra::extract::Form;

use super::{FilterRedirector, FormDocument, RedirectNavigator};

/// A route handler that redirects to the transactions page filtered by the submitted form.
///
/// The form is only accepted when it was submitted with the filter button and
/// includes all three filter inputs; otherwise a 400 page names the missing field.
pub async fn filter_transactions_endpoint(
    Form(fields): Form<HashMap<String, String>>,
) -> Response {
    let document = FormDocument::from(fields);

    let result = FilterRedirector::bind(&document)
        .and_then(|redirector| redirector.click(&mut RedirectNavigator));

    match result {
        Ok(redirect) => redirect.into_response(),
        Err(error) => {
            tracing::warn!("Could not apply transactions filter: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{Router, http::StatusCode, routing::post};
    use axum_test::TestServer;

    use crate::endpoints;

    use super::filter_transactions_endpoint;

    fn get_test_server() -> TestServer {
        let app = Router::new().route(
            endpoints::FILTER_TRANSACTIONS,
            post(filter_transactions_endpoint),
        );

        TestServer::new(app)
    }

    #[tokio::test]
    async fn redirects_to_filtered_transactions() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS)
            .form(&[
                ("category", "groceries"),
                ("start_date", "2024-01-01"),
                ("end_date", "2024-01-31"),
                ("filter-button", "filter"),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("location"),
            "/transactions?category=groceries&start_date=2024-01-01&end_date=2024-01-31"
        );
    }

    #[tokio::test]
    async fn redirects_with_encoded_reserved_characters() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS)
            .form(&[
                ("category", "Food & Drink"),
                ("start_date", ""),
                ("end_date", ""),
                ("filter-button", "filter"),
            ])
            .await;

        response.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(
            response.header("location"),
            "/transactions?category=Food+%26+Drink&start_date=&end_date="
        );
    }

    #[tokio::test]
    async fn rejects_form_without_trigger() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS)
            .form(&[
                ("category", "groceries"),
                ("start_date", "2024-01-01"),
                ("end_date", "2024-01-31"),
            ])
            .await;

        response.assert_status_bad_request();
        assert!(
            response.text().contains("filter-button"),
            "want error page naming the missing trigger, got {}",
            response.text()
        );
    }

    #[tokio::test]
    async fn rejects_form_with_missing_input() {
        let server = get_test_server();

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS)
            .form(&[("category", "groceries"), ("filter-button", "filter")])
            .await;

        response.assert_status_bad_request();
        assert!(
            response.text().contains("start_date"),
            "want error page naming the missing input, got {}",
            response.text()
        );
    }
}
