#![allow(missing_docs)]

pub(crate) mod form;
pub(crate) mod html;
pub(crate) mod http;

pub(crate) use form::assert_form_input;
pub(crate) use html::{assert_valid_html, must_select, parse_html_document};
pub(crate) use http::{assert_content_type, assert_redirect, get_header};
