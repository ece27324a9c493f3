//! Downloads the transaction history as a CSV file.

use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::{IntoResponse, Response},
};
use rusqlite::Connection;
use serde::Serialize;

use crate::{
    AppState, Error,
    filter::TransactionFilter,
    transaction::{Transaction, get_filtered_transactions},
};

/// The file name suggested to the browser for the download.
const FILE_NAME: &str = "transaction_history.csv";

/// The state needed to export transactions.
#[derive(Debug, Clone)]
pub struct ExportState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ExportState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

#[derive(Serialize)]
struct CsvRow<'a> {
    #[serde(rename = "ID")]
    id: i64,
    #[serde(rename = "Amount")]
    amount: f64,
    #[serde(rename = "Category")]
    category: &'a str,
    #[serde(rename = "Description")]
    description: &'a str,
    #[serde(rename = "Date")]
    date: String,
}

impl<'a> From<&'a Transaction> for CsvRow<'a> {
    fn from(transaction: &'a Transaction) -> Self {
        Self {
            id: transaction.id,
            amount: transaction.amount,
            category: &transaction.category,
            description: transaction.description.as_deref().unwrap_or_default(),
            date: transaction.date.to_string(),
        }
    }
}

/// Download the transactions selected by the query string as a CSV attachment.
pub async fn get_csv_download(
    State(state): State<ExportState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Response, Error> {
    let transactions = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_filtered_transactions(&filter, &connection)
            .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?
    };

    let body = write_csv(&transactions)
        .inspect_err(|error| tracing::error!("could not export transactions: {error}"))?;

    Ok((
        [
            (CONTENT_TYPE, "text/csv".to_owned()),
            (
                CONTENT_DISPOSITION,
                format!("attachment; filename=\"{FILE_NAME}\""),
            ),
        ],
        body,
    )
        .into_response())
}

/// Write `transactions` as CSV with a header row.
///
/// The header is written even when there are no transactions.
fn write_csv(transactions: &[Transaction]) -> Result<Vec<u8>, Error> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer.write_record(["ID", "Amount", "Category", "Description", "Date"])?;

    for transaction in transactions {
        writer.serialize(CsvRow::from(transaction))?;
    }

    writer
        .into_inner()
        .map_err(|error| Error::CsvError(error.to_string()))
}
