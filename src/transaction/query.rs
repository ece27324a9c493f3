//! Database query helpers for listing transactions, optionally filtered.

use rusqlite::{Connection, Params};

use crate::{
    Error,
    filter::{TransactionFilter, TransactionSelection},
};

use super::core::{Transaction, map_transaction_row};

// Sort by date, and then ID to keep transaction order stable after updates
const SELECT_TRANSACTIONS: &str =
    "SELECT id, amount, category, description, date FROM \"transaction\"";
const ORDER_CLAUSE: &str = "ORDER BY date DESC, id ASC";

fn query_transactions(
    where_clause: &str,
    params: impl Params,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    let query = format!("{SELECT_TRANSACTIONS} {where_clause} {ORDER_CLAUSE}");

    connection
        .prepare(&query)?
        .query_map(params, map_transaction_row)?
        .map(|transaction_result| transaction_result.map_err(Error::SqlError))
        .collect()
}

/// Get every transaction, newest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_transactions(connection: &Connection) -> Result<Vec<Transaction>, Error> {
    query_transactions("", [], connection)
}

/// Get the transactions whose category is exactly `category`, newest first.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_transactions_by_category(
    category: &str,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    query_transactions("WHERE category = ?1", [category], connection)
}

/// Get the transactions dated from `start_date` to `end_date`, both inclusive, newest first.
///
/// Dates are compared as ISO-8601 strings, so they are passed through as given.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_transactions_by_date(
    start_date: &str,
    end_date: &str,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    query_transactions(
        "WHERE date BETWEEN ?1 AND ?2",
        [start_date, end_date],
        connection,
    )
}

/// Get the transactions selected by `filter`.
///
/// # Errors
/// Returns [Error::SqlError] if the query fails.
pub fn get_filtered_transactions(
    filter: &TransactionFilter,
    connection: &Connection,
) -> Result<Vec<Transaction>, Error> {
    match filter.selection() {
        TransactionSelection::Category(category) => {
            get_transactions_by_category(category, connection)
        }
        TransactionSelection::DateRange { start, end } => {
            get_transactions_by_date(start, end, connection)
        }
        TransactionSelection::All => get_transactions(connection),
    }
}
