//! Alert messages for reporting failed requests to users.

use maud::{Markup, html};

use crate::html::{PAGE_CONTAINER_STYLE, base, link};

/// A message to show the user when their request could not be completed.
#[derive(Debug, Clone)]
pub enum Alert {
    Error { message: String, details: String },
}

impl Alert {
    /// Render the alert as a standalone fragment.
    pub fn into_html(self) -> Markup {
        let (container_style, message, details) = match self {
            Alert::Error { message, details } => (
                "p-4 mb-4 text-sm rounded-lg text-red-800 bg-red-50 \
                dark:bg-gray-800 dark:text-red-400",
                message,
                details,
            ),
        };

        html!(
            div class=(container_style) role="alert"
            {
                span class="font-medium" { (message) }

                @if !details.is_empty() {
                    p { (details) }
                }
            }
        )
    }

    /// Render the alert inside a full page with a link back to the transactions.
    pub fn into_page(self) -> Markup {
        let alert = self.into_html();
        let back_link = link(crate::endpoints::TRANSACTIONS_VIEW, "Back to transactions");

        let content = html!(
            div class=(PAGE_CONTAINER_STYLE)
            {
                div class="w-full max-w-md"
                {
                    (alert)
                    p { (back_link) }
                }
            }
        );

        base("Error", &[], &content)
    }
}
