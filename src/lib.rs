//! Expense Tracker is a small web app for recording and reviewing spending.
//!
//! This library provides a REST API that directly serves HTML pages. The
//! transactions page carries a filter form whose submission is turned into a
//! full-page navigation to `/transactions?category=..&start_date=..&end_date=..`
//! by the [FilterRedirector].

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum_server::Handle;
use tokio::signal;

mod alert;
mod app_state;
mod charts;
mod db;
mod endpoints;
mod error;
mod export;
mod filter;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod transaction;

#[cfg(test)]
mod test_utils;

pub use app_state::AppState;
pub use db::initialize as initialize_db;
pub use error::Error;
pub use filter::{
    Document, FilterRedirector, FormDocument, Navigator, RedirectNavigator, TransactionFilter,
    TransactionSelection, resolve_element,
};
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;
pub use transaction::{
    DEFAULT_CATEGORIES, OTHER_CATEGORY, Transaction, TransactionBuilder, TransactionId,
    category_options, create_transaction, get_categories, get_filtered_transactions,
    get_transactions, get_transactions_by_category, get_transactions_by_date,
};

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
