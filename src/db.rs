//! Database setup for the application's SQLite store.

use rusqlite::{Connection, Transaction as SqlTransaction, TransactionBehavior};

use crate::{Error, transaction::create_transaction_table};

/// Create the application tables and indexes if they do not already exist.
///
/// The schema is created inside an exclusive SQL transaction so a partially
/// initialized database is never left behind.
///
/// # Errors
/// Returns [Error::SqlError] if any statement fails.
pub fn initialize(connection: &Connection) -> Result<(), Error> {
    let transaction = SqlTransaction::new_unchecked(connection, TransactionBehavior::Exclusive)?;

    create_transaction_table(&transaction)?;

    transaction.commit()?;

    Ok(())
}
