//! Turns a click on the filter trigger into a navigation to the filtered transactions page.

use axum::response::Redirect;

use crate::{Error, endpoints};

use super::{
    CATEGORY_ID, END_DATE_ID, START_DATE_ID, TRIGGER_ID, TransactionFilter,
    document::{Document, resolve_element},
};

/// Something that can send the browsing context to a new URL.
pub trait Navigator {
    /// What a navigation produces, e.g. the response that performs it.
    type Navigation;

    /// Replace the current page with the page at `url`.
    fn navigate(&mut self, url: String) -> Self::Navigation;
}

/// A filter redirector bound to a document that contains the trigger element.
///
/// A redirector can only be obtained through [FilterRedirector::bind], so holding
/// one means the trigger was present when it was bound. It keeps no state
/// between clicks: every click reads the inputs again.
#[derive(Debug)]
pub struct FilterRedirector<'a, D: ?Sized> {
    document: &'a D,
}

impl<'a, D> FilterRedirector<'a, D>
where
    D: Document + ?Sized,
{
    /// Bind to the trigger element of `document`.
    ///
    /// # Errors
    /// Returns [Error::ElementNotFound] if the document has no trigger element.
    pub fn bind(document: &'a D) -> Result<Self, Error> {
        resolve_element(document, TRIGGER_ID)?;

        Ok(Self { document })
    }

    /// Read the category, start date and end date inputs, in that order.
    ///
    /// # Errors
    /// Returns [Error::ElementNotFound] for the first input missing from the document.
    pub fn read_filter(&self) -> Result<TransactionFilter, Error> {
        let category = resolve_element(self.document, CATEGORY_ID)?;
        let start_date = resolve_element(self.document, START_DATE_ID)?;
        let end_date = resolve_element(self.document, END_DATE_ID)?;

        Ok(TransactionFilter::new(category, start_date, end_date))
    }

    /// The URL a click would navigate to given the current input values.
    ///
    /// # Errors
    /// Returns an error if an input is missing or the values cannot be encoded.
    pub fn target_url(&self) -> Result<String, Error> {
        self.read_filter()?.to_url(endpoints::TRANSACTIONS_VIEW)
    }

    /// Handle a click on the trigger: build the filtered URL and navigate to it.
    ///
    /// Nothing is navigated if an error is returned.
    ///
    /// # Errors
    /// Returns an error if an input is missing or the values cannot be encoded.
    pub fn click<N: Navigator>(&self, navigator: &mut N) -> Result<N::Navigation, Error> {
        let url = self.target_url()?;
        tracing::debug!("Navigating to filtered transactions {url}");

        Ok(navigator.navigate(url))
    }
}

/// A [Navigator] that answers the current request with a redirect.
///
/// The browser follows a `303 See Other` with a full page load of the new URL.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RedirectNavigator;

impl Navigator for RedirectNavigator {
    type Navigation = Redirect;

    fn navigate(&mut self, url: String) -> Redirect {
        Redirect::to(&url)
    }
}
