//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    charts::get_charts_page,
    endpoints,
    export::get_csv_download,
    filter::filter_transactions_endpoint,
    not_found::get_404_not_found,
    transaction::{create_transaction_endpoint, get_transactions_page},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::TRANSACTIONS_VIEW, get(get_transactions_page))
        .route(
            endpoints::FILTER_TRANSACTIONS,
            post(filter_transactions_endpoint),
        )
        .route(
            endpoints::ADD_TRANSACTION,
            post(create_transaction_endpoint),
        )
        .route(endpoints::CHARTS_VIEW, get(get_charts_page))
        .route(endpoints::DOWNLOAD_CSV, get(get_csv_download))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the transactions page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::TRANSACTIONS_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use scraper::{Html, Selector};

    use crate::{AppState, endpoints};

    use super::build_router;

    fn get_test_server() -> TestServer {
        let state = AppState::new(Connection::open_in_memory().unwrap()).unwrap();
        TestServer::new(build_router(state))
    }

    fn count_rows(page: &str) -> usize {
        Html::parse_document(page)
            .select(&Selector::parse("tr[data-transaction-row='true']").unwrap())
            .count()
    }

    #[tokio::test]
    async fn filter_round_trip() {
        let server = get_test_server();

        for (amount, category, date) in [
            ("10", "Groceries", "2024-01-10"),
            ("20", "Rent", "2024-01-20"),
            ("30", "Groceries", "2024-03-01"),
        ] {
            server
                .post(endpoints::ADD_TRANSACTION)
                .form(&[
                    ("amount", amount),
                    ("category", category),
                    ("custom_category", ""),
                    ("description", ""),
                    ("date", date),
                ])
                .await
                .assert_status(StatusCode::SEE_OTHER);
        }

        let response = server
            .post(endpoints::FILTER_TRANSACTIONS)
            .form(&[
                ("category", "Groceries"),
                ("start_date", "2024-01-01"),
                ("end_date", "2024-01-31"),
                ("filter-button", "filter"),
            ])
            .await;
        response.assert_status(StatusCode::SEE_OTHER);
        let location = response.header("location");
        let location = location.to_str().unwrap();
        assert_eq!(
            location,
            "/transactions?category=Groceries&start_date=2024-01-01&end_date=2024-01-31"
        );

        let page = server.get(location).await;
        page.assert_status_ok();
        assert_eq!(count_rows(&page.text()), 2);

        let page = server
            .get("/transactions?category=&start_date=2024-01-01&end_date=2024-01-31")
            .await;
        assert_eq!(count_rows(&page.text()), 2);

        let page = server.get(endpoints::TRANSACTIONS_VIEW).await;
        assert_eq!(count_rows(&page.text()), 3);
    }

    #[tokio::test]
    async fn add_transaction_rejects_non_finite_amounts() {
        let server = get_test_server();

        for amount in ["NaN", "inf"] {
            server
                .post(endpoints::ADD_TRANSACTION)
                .form(&[
                    ("amount", amount),
                    ("category", "Food"),
                    ("description", ""),
                    ("date", "2024-01-10"),
                ])
                .await
                .assert_status_bad_request();
        }

        let page = server.get(endpoints::TRANSACTIONS_VIEW).await;
        assert_eq!(count_rows(&page.text()), 0);
    }

    #[tokio::test]
    async fn serves_charts_and_download() {
        let server = get_test_server();

        server.get(endpoints::CHARTS_VIEW).await.assert_status_ok();

        let download = server.get(endpoints::DOWNLOAD_CSV).await;
        download.assert_status_ok();
        assert_eq!(download.text(), "ID,Amount,Category,Description,Date\n");
    }

    #[tokio::test]
    async fn serves_files_from_static_dir() {
        let server = get_test_server();

        let response = server
            .get(&format!("{}/.gitignore", endpoints::STATIC))
            .await;

        response.assert_status_ok();
        assert!(response.text().contains("echarts.*.min.js"));
        assert!(response.text().contains("main.css"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/does-not-exist")
            .await
            .assert_status(StatusCode::NOT_FOUND);
    }
}
