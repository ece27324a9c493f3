//! Defines the route handler for the page that displays transactions as a table.
use std::sync::{Arc, Mutex};

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use rusqlite::Connection;
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error, endpoints,
    filter::{CATEGORY_ID, END_DATE_ID, START_DATE_ID, TRIGGER_ID, TransactionFilter},
    html::{
        BUTTON_PRIMARY_STYLE, CATEGORY_BADGE_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        base, format_currency,
    },
    navigation::NavBar,
};

use super::{
    category::{OTHER_CATEGORY, category_options},
    core::{Transaction, get_categories},
    query::get_filtered_transactions,
};

/// The state needed for the transactions page.
#[derive(Debug, Clone)]
pub struct TransactionsViewState {
    /// The database connection for managing transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for TransactionsViewState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Everything the transactions view renders.
struct TransactionsViewModel<'a> {
    filter: &'a TransactionFilter,
    categories: Vec<String>,
    transactions: Vec<Transaction>,
    download_url: String,
    today: Date,
}

/// Render the user's transactions, filtered by the category and date range in the query string.
pub async fn get_transactions_page(
    State(state): State<TransactionsViewState>,
    Query(filter): Query<TransactionFilter>,
) -> Result<Response, Error> {
    let connection = state
        .db_connection
        .lock()
        .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
        .map_err(|_| Error::DatabaseLockError)?;

    let transactions = get_filtered_transactions(&filter, &connection)
        .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?;
    let mut stored_categories = get_categories(&connection)
        .inspect_err(|error| tracing::error!("could not get categories: {error}"))?;

    if !filter.category.is_empty() {
        stored_categories.push(filter.category.clone());
    }

    let download_url = filter
        .to_url(endpoints::DOWNLOAD_CSV)
        .inspect_err(|error| tracing::error!("could not build download link: {error}"))?;

    Ok(transactions_view(TransactionsViewModel {
        filter: &filter,
        categories: category_options(&stored_categories),
        transactions,
        download_url,
        today: OffsetDateTime::now_utc().date(),
    })
    .into_response())
}

fn transactions_view(model: TransactionsViewModel) -> Markup {
    let nav_bar = NavBar::new(endpoints::TRANSACTIONS_VIEW).into_html();
    let total: f64 = model
        .transactions
        .iter()
        .map(|transaction| transaction.amount)
        .sum();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            div class="w-full max-w-screen-lg space-y-8"
            {
                h1 class="text-2xl font-bold" { "Transactions" }

                (filter_form(model.filter, &model.categories))

                div class="flex gap-4"
                {
                    a href=(model.download_url) class=(LINK_STYLE) { "Download CSV" }
                    a href=(endpoints::CHARTS_VIEW) class=(LINK_STYLE) { "Expenses by category" }
                }

                (transactions_table(&model.transactions, total))

                (add_transaction_form(&model.categories, model.today))
            }
        }
    );

    base("Transactions", &[], &content)
}

fn filter_form(filter: &TransactionFilter, categories: &[String]) -> Markup {
    html!(
        form
            id="filter-form"
            method="post"
            action=(endpoints::FILTER_TRANSACTIONS)
            class="grid grid-cols-1 md:grid-cols-4 gap-4 items-end"
        {
            div
            {
                label for=(CATEGORY_ID) class=(FORM_LABEL_STYLE) { "Category" }

                select id=(CATEGORY_ID) name=(CATEGORY_ID) class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" selected[filter.category.is_empty()] { "All categories" }

                    @for category in categories {
                        option value=(category) selected[*category == filter.category] { (category) }
                    }
                }
            }

            div
            {
                label for=(START_DATE_ID) class=(FORM_LABEL_STYLE) { "From" }

                input
                    type="date"
                    id=(START_DATE_ID)
                    name=(START_DATE_ID)
                    value=(filter.start_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for=(END_DATE_ID) class=(FORM_LABEL_STYLE) { "To" }

                input
                    type="date"
                    id=(END_DATE_ID)
                    name=(END_DATE_ID)
                    value=(filter.end_date)
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div class="flex gap-4 items-center"
            {
                button
                    type="submit"
                    id=(TRIGGER_ID)
                    name=(TRIGGER_ID)
                    value="filter"
                    class=(BUTTON_PRIMARY_STYLE)
                {
                    "Filter"
                }

                a href=(endpoints::TRANSACTIONS_VIEW) class=(LINK_STYLE) { "Clear" }
            }
        }
    )
}

fn transactions_table(transactions: &[Transaction], total: f64) -> Markup {
    html!(
        div class="relative overflow-x-auto shadow-md rounded"
        {
            table class="w-full text-sm text-left rtl:text-right text-gray-500 dark:text-gray-400"
            {
                thead class=(TABLE_HEADER_STYLE)
                {
                    tr
                    {
                        th scope="col" class=(TABLE_CELL_STYLE) { "Date" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Category" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Description" }
                        th scope="col" class=(TABLE_CELL_STYLE) { "Amount" }
                    }
                }

                tbody
                {
                    @for transaction in transactions {
                        tr class=(TABLE_ROW_STYLE) data-transaction-row="true"
                        {
                            td class=(TABLE_CELL_STYLE) { (transaction.date) }
                            td class=(TABLE_CELL_STYLE)
                            {
                                span class=(CATEGORY_BADGE_STYLE) { (transaction.category) }
                            }
                            td class=(TABLE_CELL_STYLE)
                            {
                                (transaction.description.as_deref().unwrap_or_default())
                            }
                            td class=(TABLE_CELL_STYLE) { (format_currency(transaction.amount)) }
                        }
                    }

                    @if transactions.is_empty() {
                        tr class=(TABLE_ROW_STYLE)
                        {
                            td
                                colspan="4"
                                data-empty-state="true"
                                class="px-6 py-4 text-center"
                            {
                                "No transactions match this filter."
                            }
                        }
                    }
                }

                tfoot
                {
                    tr class="font-semibold text-gray-900 dark:text-white"
                    {
                        th scope="row" colspan="3" class=(TABLE_CELL_STYLE) { "Total" }
                        td class=(TABLE_CELL_STYLE) data-total="true" { (format_currency(total)) }
                    }
                }
            }
        }
    )
}

fn add_transaction_form(categories: &[String], today: Date) -> Markup {
    html!(
        section
        {
            h2 class="text-xl font-bold mb-4" { "Add Transaction" }

            form
                id="add-transaction-form"
                method="post"
                action=(endpoints::ADD_TRANSACTION)
                class="grid grid-cols-1 md:grid-cols-2 gap-4"
            {
                div
                {
                    label for="amount" class=(FORM_LABEL_STYLE) { "Amount" }

                    input
                        type="number"
                        id="amount"
                        name="amount"
                        min="0"
                        step="0.01"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="date" class=(FORM_LABEL_STYLE) { "Date" }

                    input
                        type="date"
                        id="date"
                        name="date"
                        value=(today)
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div
                {
                    label for="new_category" class=(FORM_LABEL_STYLE) { "Category" }

                    select id="new_category" name="category" required class=(FORM_TEXT_INPUT_STYLE)
                    {
                        @for category in categories {
                            option value=(category) { (category) }
                        }

                        option value=(OTHER_CATEGORY) { (OTHER_CATEGORY) }
                    }
                }

                div
                {
                    label for="custom_category" class=(FORM_LABEL_STYLE) { "Other category" }

                    input
                        type="text"
                        id="custom_category"
                        name="custom_category"
                        placeholder="Used when \"Others\" is selected"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="md:col-span-2"
                {
                    label for="description" class=(FORM_LABEL_STYLE) { "Description" }

                    input
                        type="text"
                        id="description"
                        name="description"
                        class=(FORM_TEXT_INPUT_STYLE);
                }

                div class="md:col-span-2"
                {
                    button type="submit" class=(BUTTON_PRIMARY_STYLE) { "Add Transaction" }
                }
            }
        }
    )
}
