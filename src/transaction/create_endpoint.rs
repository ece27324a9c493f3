//! Defines the endpoint for adding a new transaction.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Redirect, Response},
};
// Must use axum_extra's Form since that parses an empty string as None instead
// of crashing like axum::Form.
use axum_extra::extract::Form;
use rusqlite::Connection;
use serde::Deserialize;
use time::Date;

use crate::{
    AppState, Error, endpoints,
    transaction::{OTHER_CATEGORY, Transaction, create_transaction},
};

/// The state needed to add a transaction.
#[derive(Debug, Clone)]
pub struct CreateTransactionState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for CreateTransactionState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// The form data for adding a transaction.
#[derive(Debug, Deserialize)]
pub struct TransactionForm {
    /// The amount of money spent in dollars.
    pub amount: f64,
    /// The category chosen from the drop-down.
    pub category: String,
    /// The category typed by the user, used when `category` is "Others".
    #[serde(default)]
    pub custom_category: Option<String>,
    /// Text detailing the transaction.
    #[serde(default)]
    pub description: String,
    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionForm {
    /// The category to store, exactly as entered.
    fn resolved_category(&self) -> &str {
        if self.category == OTHER_CATEGORY {
            self.custom_category.as_deref().unwrap_or_default()
        } else {
            &self.category
        }
    }
}

/// A route handler for adding a new transaction, redirects to the transactions view on success.
pub async fn create_transaction_endpoint(
    State(state): State<CreateTransactionState>,
    Form(form): Form<TransactionForm>,
) -> Response {
    let transaction = Transaction::build(form.amount, form.resolved_category(), form.date)
        .description(&form.description);

    let connection = match state.db_connection.lock() {
        Ok(connection) => connection,
        Err(error) => {
            tracing::error!("could not acquire database lock: {error}");
            return Error::DatabaseLockError.into_response();
        }
    };

    match create_transaction(transaction, &connection) {
        Ok(transaction) => {
            tracing::info!(
                "added transaction {} for {} in {}",
                transaction.id,
                transaction.amount,
                transaction.category
            );
            Redirect::to(endpoints::TRANSACTIONS_VIEW).into_response()
        }
        Err(error) => {
            tracing::error!("could not create transaction: {error}");
            error.into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{extract::State, http::StatusCode};
    use axum_extra::extract::Form;
    use rusqlite::Connection;
    use time::macros::date;

    use crate::{
        db::initialize,
        endpoints,
        test_utils::assert_redirect,
        transaction::{count_transactions, get_transaction},
    };

    use super::{CreateTransactionState, TransactionForm, create_transaction_endpoint};

    fn get_test_state() -> CreateTransactionState {
        let conn = Connection::open_in_memory().unwrap();
        initialize(&conn).unwrap();

        CreateTransactionState {
            db_connection: Arc::new(Mutex::new(conn)),
        }
    }

    fn form(category: &str, custom_category: Option<&str>) -> TransactionForm {
        TransactionForm {
            amount: 12.3,
            category: category.to_owned(),
            custom_category: custom_category.map(str::to_owned),
            description: "Lunch".to_owned(),
            date: date!(2025 - 03 - 22),
        }
    }

    #[tokio::test]
    async fn can_create_transaction() {
        let state = get_test_state();

        let response =
            create_transaction_endpoint(State(state.clone()), Form(form("Food", None))).await;

        assert_redirect(&response, endpoints::TRANSACTIONS_VIEW);

        let connection = state.db_connection.lock().unwrap();
        let transaction = get_transaction(1, &connection).unwrap();
        assert_eq!(transaction.amount, 12.3);
        assert_eq!(transaction.category, "Food");
        assert_eq!(transaction.description.as_deref(), Some("Lunch"));
        assert_eq!(transaction.date, date!(2025 - 03 - 22));
    }

    #[tokio::test]
    async fn others_uses_custom_category() {
        let state = get_test_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Form(form("Others", Some("Pets"))),
        )
        .await;

        assert_redirect(&response, endpoints::TRANSACTIONS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(get_transaction(1, &connection).unwrap().category, "Pets");
    }

    #[tokio::test]
    async fn others_without_custom_category_is_rejected() {
        let state = get_test_state();

        let response =
            create_transaction_endpoint(State(state.clone()), Form(form("Others", None))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(count_transactions(&connection).unwrap(), 0);
    }

    #[tokio::test]
    async fn empty_category_is_rejected() {
        let state = get_test_state();

        let response =
            create_transaction_endpoint(State(state.clone()), Form(form("", None))).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn custom_category_is_stored_as_entered() {
        let state = get_test_state();

        let response = create_transaction_endpoint(
            State(state.clone()),
            Form(form("Others", Some(" Pet food "))),
        )
        .await;

        assert_redirect(&response, endpoints::TRANSACTIONS_VIEW);
        let connection = state.db_connection.lock().unwrap();
        assert_eq!(
            get_transaction(1, &connection).unwrap().category,
            " Pet food "
        );
    }

    #[tokio::test]
    async fn non_finite_amount_is_rejected() {
        for amount in [f64::NAN, f64::INFINITY] {
            let state = get_test_state();
            let mut submitted = form("Food", None);
            submitted.amount = amount;

            let response =
                create_transaction_endpoint(State(state.clone()), Form(submitted)).await;

            assert_eq!(
                response.status(),
                StatusCode::BAD_REQUEST,
                "want 400 for amount {amount}"
            );
            let connection = state.db_connection.lock().unwrap();
            assert_eq!(count_transactions(&connection).unwrap(), 0);
        }
    }
}
