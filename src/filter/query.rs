//! The filter values carried in the transactions page query string.

use serde::{Deserialize, Serialize};

use crate::Error;

/// The category and date range used to filter the transactions page.
///
/// Values are kept exactly as the user entered them. Missing query
/// parameters deserialize as empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// Only show transactions in this category, if not empty.
    pub category: String,
    /// The first date (inclusive) of the date range, e.g. "2024-01-01".
    pub start_date: String,
    /// The last date (inclusive) of the date range, e.g. "2024-01-31".
    pub end_date: String,
}

/// The store query selected by a [TransactionFilter].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransactionSelection<'a> {
    /// Transactions whose category is exactly this value.
    Category(&'a str),
    /// Transactions dated between `start` and `end`, both inclusive.
    DateRange {
        /// The first date of the range.
        start: &'a str,
        /// The last date of the range.
        end: &'a str,
    },
    /// Every transaction.
    All,
}

impl TransactionFilter {
    /// Create a filter from the raw input values.
    pub fn new(category: &str, start_date: &str, end_date: &str) -> Self {
        Self {
            category: category.to_owned(),
            start_date: start_date.to_owned(),
            end_date: end_date.to_owned(),
        }
    }

    /// Encode the filter as `category=..&start_date=..&end_date=..`.
    ///
    /// Every parameter is always present, empty values included. Values are
    /// form-urlencoded, so values without reserved characters are unchanged
    /// and values such as "Food & Drink" cannot add or split parameters.
    ///
    /// # Errors
    /// Returns [Error::QueryEncoding] if the values cannot be encoded.
    pub fn to_query_string(&self) -> Result<String, Error> {
        serde_urlencoded::to_string(self).map_err(|error| Error::QueryEncoding(error.to_string()))
    }

    /// The URL for `route` with the filter as its query string.
    ///
    /// # Errors
    /// Returns [Error::QueryEncoding] if the values cannot be encoded.
    pub fn to_url(&self, route: &str) -> Result<String, Error> {
        Ok(format!("{route}?{}", self.to_query_string()?))
    }

    /// Decide which transactions the filter selects.
    ///
    /// A category takes precedence over the date range, and the date range
    /// only applies when both ends are given.
    pub fn selection(&self) -> TransactionSelection<'_> {
        if !self.category.is_empty() {
            TransactionSelection::Category(&self.category)
        } else if !self.start_date.is_empty() && !self.end_date.is_empty() {
            TransactionSelection::DateRange {
                start: &self.start_date,
                end: &self.end_date,
            }
        } else {
            TransactionSelection::All
        }
    }
}
