//! Filtering the transaction list.
//!
//! The transactions page renders a filter form with a trigger button and three
//! inputs. Submitting it through the trigger navigates the browser to
//! `/transactions?category=..&start_date=..&end_date=..`, which the
//! transactions page then turns into a store query.
//!
//! - [Document] and [FormDocument]: resolving element values by their stable IDs
//! - [FilterRedirector] and [Navigator]: reading the inputs and navigating to the filtered URL
//! - [TransactionFilter]: the filter values, their query string and the store query they select

mod document;
mod endpoint;
mod query;
mod redirector;

pub use document::{Document, FormDocument, resolve_element};
pub use endpoint::filter_transactions_endpoint;
pub use query::{TransactionFilter, TransactionSelection};
pub use redirector::{FilterRedirector, Navigator, RedirectNavigator};

/// The ID of the element whose click applies the filter.
pub const TRIGGER_ID: &str = "filter-button";
/// The ID of the category select.
pub const CATEGORY_ID: &str = "category";
/// The ID of the start date input.
pub const START_DATE_ID: &str = "start_date";
/// The ID of the end date input.
pub const END_DATE_ID: &str = "end_date";
