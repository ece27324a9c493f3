//! Looking up element values in a host document by stable ID.

use std::collections::HashMap;

use crate::Error;

/// A document whose elements can be looked up by their stable ID.
pub trait Document {
    /// The current value of the element with `id`, or `None` if there is no such element.
    fn element_value(&self, id: &str) -> Option<&str>;
}

/// Resolve the value of the element `id` in `document`.
///
/// # Errors
/// Returns [Error::ElementNotFound] if the document has no element with `id`.
pub fn resolve_element<'a, D>(document: &'a D, id: &str) -> Result<&'a str, Error>
where
    D: Document + ?Sized,
{
    document
        .element_value(id)
        .ok_or_else(|| Error::ElementNotFound(id.to_owned()))
}

/// A submitted HTML form viewed as a document.
///
/// Each form field is an element whose ID is the field name. A submit button
/// only appears in the submission when it was the button that submitted the
/// form, so the trigger is present exactly when the user clicked it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormDocument {
    fields: HashMap<String, String>,
}

impl FormDocument {
    /// Add or replace the element `id` with `value`.
    pub fn with_element(mut self, id: &str, value: &str) -> Self {
        self.fields.insert(id.to_owned(), value.to_owned());
        self
    }
}

impl From<HashMap<String, String>> for FormDocument {
    fn from(fields: HashMap<String, String>) -> Self {
        Self { fields }
    }
}

impl Document for FormDocument {
    fn element_value(&self, id: &str) -> Option<&str> {
        self.fields.get(id).map(String::as_str)
    }
}
