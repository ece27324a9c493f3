//! Transaction management for the expense tracker.
//!
//! This module contains everything related to transactions:
//! - The `Transaction` model and `TransactionBuilder` for creating transactions
//! - Database functions for storing and listing transactions, optionally filtered
//! - The categories offered by the forms
//! - View handlers for the transactions page and the add-transaction form

mod category;
mod core;
mod create_endpoint;
mod query;
mod transactions_page;

pub use category::{DEFAULT_CATEGORIES, OTHER_CATEGORY, category_options};
pub use core::{
    Transaction, TransactionBuilder, TransactionId, create_transaction, create_transaction_table,
    get_categories,
};
pub use create_endpoint::create_transaction_endpoint;
pub use query::{
    get_filtered_transactions, get_transactions, get_transactions_by_category,
    get_transactions_by_date,
};
pub use transactions_page::get_transactions_page;

#[cfg(test)]
pub use core::{count_transactions, get_transaction};
