//! Defines the core data models and database queries for transactions.

use rusqlite::{Connection, Row};
use serde::{Deserialize, Serialize};
use time::Date;

use crate::Error;

/// Alias for the integer type used for mapping to transaction IDs.
pub type TransactionId = i64;

// ============================================================================
// MODELS
// ============================================================================

/// An expense, i.e. an event where money was spent.
///
/// To create a new `Transaction`, use [Transaction::build].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    /// The ID of the transaction.
    pub id: TransactionId,
    /// The amount of money spent in this transaction.
    pub amount: f64,
    /// What the money was spent on, e.g. "Food" or "Transport".
    pub category: String,
    /// An optional note about the transaction.
    pub description: Option<String>,
    /// When the transaction happened.
    pub date: Date,
}

impl Transaction {
    /// Create a new transaction.
    ///
    /// Shortcut for [TransactionBuilder] for discoverability.
    pub fn build(amount: f64, category: &str, date: Date) -> TransactionBuilder {
        TransactionBuilder {
            amount,
            category: category.to_owned(),
            description: None,
            date,
        }
    }
}

/// A builder for creating [Transaction] instances.
///
/// # Examples
///
/// ```ignore
/// use time::macros::date;
///
/// let transaction = Transaction::build(12.5, "Food", date!(2025 - 03 - 22))
///     .description("Bought dinner");
/// ```
#[derive(Debug, PartialEq, Clone)]
pub struct TransactionBuilder {
    /// The amount of money spent.
    pub amount: f64,
    /// The category the transaction belongs to.
    pub category: String,
    /// An optional note. Empty descriptions are stored as `NULL`.
    pub description: Option<String>,
    /// The date when the transaction occurred.
    pub date: Date,
}

impl TransactionBuilder {
    /// Set the description for the transaction.
    ///
    /// An empty string clears the description.
    pub fn description(mut self, description: &str) -> Self {
        self.description = if description.is_empty() {
            None
        } else {
            Some(description.to_owned())
        };
        self
    }
}

// ============================================================================
// DATABASE FUNCTIONS
// ============================================================================

/// Create a new transaction in the database from a builder.
///
/// # Errors
/// This function will return a:
/// - [Error::EmptyCategory] if the category is empty,
/// - [Error::InvalidAmount] if the amount is NaN or infinite,
/// - or [Error::SqlError] if there is some other SQL error.
pub fn create_transaction(
    builder: TransactionBuilder,
    connection: &Connection,
) -> Result<Transaction, Error> {
    if builder.category.is_empty() {
        return Err(Error::EmptyCategory);
    }

    if !builder.amount.is_finite() {
        return Err(Error::InvalidAmount(builder.amount));
    }

    let transaction = connection
        .prepare(
            "INSERT INTO \"transaction\" (amount, category, description, date)
             VALUES (?1, ?2, ?3, ?4)
             RETURNING id, amount, category, description, date",
        )?
        .query_row(
            (
                builder.amount,
                builder.category,
                builder.description,
                builder.date,
            ),
            map_transaction_row,
        )?;

    Ok(transaction)
}

/// Retrieve a transaction from the database by its `id`.
///
/// # Errors
/// This function will return a:
/// - [Error::NotFound] if `id` does not refer to a valid transaction,
/// - or [Error::SqlError] there is some other SQL error.
#[cfg(test)]
pub fn get_transaction(id: TransactionId, connection: &Connection) -> Result<Transaction, Error> {
    let transaction = connection
        .prepare(
            "SELECT id, amount, category, description, date FROM \"transaction\" WHERE id = :id",
        )?
        .query_row(&[(":id", &id)], map_transaction_row)?;

    Ok(transaction)
}

/// Get the total number of transactions in the database.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
#[cfg(test)]
pub fn count_transactions(connection: &Connection) -> Result<u32, Error> {
    connection
        .query_row("SELECT COUNT(id) FROM \"transaction\";", [], |row| {
            row.get(0)
        })
        .map_err(|error| error.into())
}

/// Get the distinct categories used by stored transactions, sorted by name.
///
/// # Errors
/// This function will return a [Error::SqlError] there is some SQL error.
pub fn get_categories(connection: &Connection) -> Result<Vec<String>, Error> {
    connection
        .prepare("SELECT DISTINCT category FROM \"transaction\" ORDER BY category ASC")?
        .query_map([], |row| row.get(0))?
        .map(|category_result| category_result.map_err(Error::SqlError))
        .collect()
}

/// Create the transaction table in the database.
///
/// # Errors
/// Returns an error if the table cannot be created or if there is an SQL error.
pub fn create_transaction_table(connection: &Connection) -> Result<(), rusqlite::Error> {
    connection.execute(
        "CREATE TABLE IF NOT EXISTS \"transaction\" (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                amount REAL NOT NULL,
                category TEXT NOT NULL,
                description TEXT,
                date TEXT NOT NULL
                )",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_date ON \"transaction\"(date);",
        (),
    )?;

    connection.execute(
        "CREATE INDEX IF NOT EXISTS idx_transaction_category ON \"transaction\"(category);",
        (),
    )?;

    Ok(())
}

/// Map a database row to a Transaction.
pub fn map_transaction_row(row: &Row) -> Result<Transaction, rusqlite::Error> {
    let id = row.get(0)?;
    let amount = row.get(1)?;
    let category = row.get(2)?;
    let description = row.get(3)?;
    let date = row.get(4)?;

    Ok(Transaction {
        id,
        amount,
        category,
        description,
        date,
    })
}

// ============================================================================
// TESTS
// ============================================================================
