//! Defines the app level error type and conversions to rendered HTML pages and alerts.
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::{alert::Alert, internal_server_error::InternalServerError, not_found::NotFoundError};

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// An element with the given ID was not present in the submitted document.
    ///
    /// Raised by the filter redirector when the trigger or one of the filter
    /// inputs is missing, e.g. because a form was posted without them.
    #[error("could not find the element \"{0}\" in the document")]
    ElementNotFound(String),

    /// A transaction was submitted without a category, or with "Others"
    /// selected and no custom category.
    #[error("category cannot be empty")]
    EmptyCategory,

    /// A transaction amount was NaN or infinite.
    #[error("{0} is not a valid amount")]
    InvalidAmount(f64),

    /// The filter values could not be encoded as a query string.
    #[error("could not encode the query string: {0}")]
    QueryEncoding(String),

    /// The transaction history could not be written as CSV.
    #[error("could not write CSV: {0}")]
    CsvError(String),

    /// The requested resource was not found.
    ///
    /// Internally, this error may occur when a query returns no rows.
    #[error("the requested resource could not be found")]
    NotFound,

    /// An unhandled/unexpected SQL error.
    #[error("an unexpected SQL error occurred: {0}")]
    SqlError(rusqlite::Error),

    /// Could not acquire the database lock
    #[error("could not acquire the database lock")]
    DatabaseLockError,
}

impl From<rusqlite::Error> for Error {
    fn from(value: rusqlite::Error) -> Self {
        match value {
            rusqlite::Error::QueryReturnedNoRows => Error::NotFound,
            error => {
                tracing::error!("an unhandled SQL error occurred: {}", error);
                Error::SqlError(error)
            }
        }
    }
}

impl From<csv::Error> for Error {
    fn from(value: csv::Error) -> Self {
        Error::CsvError(value.to_string())
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => NotFoundError.into_response(),
            Error::ElementNotFound(id) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Could not apply the filter".to_owned(),
                    details: format!(
                        "The form is missing the field \"{id}\". \
                        Reload the transactions page and try again."
                    ),
                }
                .into_page(),
            )
                .into_response(),
            Error::EmptyCategory => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Missing category".to_owned(),
                    details: "Choose a category, or enter one when selecting \"Others\"."
                        .to_owned(),
                }
                .into_page(),
            )
                .into_response(),
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                Alert::Error {
                    message: "Invalid amount".to_owned(),
                    details: format!("{amount} is not a valid amount. Enter a number of dollars."),
                }
                .into_page(),
            )
                .into_response(),
            Error::DatabaseLockError => InternalServerError.into_response(),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                InternalServerError.into_response()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use axum::{http::StatusCode, response::IntoResponse};

    use super::Error;

    #[test]
    fn no_rows_maps_to_not_found() {
        let error: Error = rusqlite::Error::QueryReturnedNoRows.into();

        assert_eq!(error, Error::NotFound);
    }

    #[test]
    fn missing_element_is_a_bad_request() {
        let response = Error::ElementNotFound("category".to_owned()).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn invalid_amount_is_a_bad_request() {
        let response = Error::InvalidAmount(f64::INFINITY).into_response();

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn lock_error_is_an_internal_server_error() {
        let response = Error::DatabaseLockError.into_response();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
