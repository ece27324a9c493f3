//! The page that charts expenses per category.
//!
//! The chart is generated as JSON configuration for the ECharts library and
//! initialised by a script in the page head once the DOM has loaded.

use std::{
    collections::BTreeMap,
    sync::{Arc, Mutex},
};

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use charming::{
    Chart,
    component::{Axis, Grid, Title},
    element::{
        AxisLabel, AxisPointer, AxisPointerType, AxisType, JsFunction, Label, LabelPosition,
        LineStyle, LineStyleType, SplitLine, Tooltip, Trigger,
    },
    series::bar,
};
use maud::{Markup, PreEscaped, html};
use rusqlite::Connection;

use crate::{
    AppState, Error, endpoints,
    html::{HeadElement, PAGE_CONTAINER_STYLE, base, link},
    navigation::NavBar,
    transaction::{Transaction, get_transactions},
};

/// The HTML element ID of the chart container.
const CHART_ID: &str = "expenses-by-category";

/// The state needed for the charts page.
#[derive(Debug, Clone)]
pub struct ChartsState {
    /// The database connection for reading transactions.
    pub db_connection: Arc<Mutex<Connection>>,
}

impl FromRef<AppState> for ChartsState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            db_connection: state.db_connection.clone(),
        }
    }
}

/// Display a bar chart of the total amount spent in each category.
pub async fn get_charts_page(State(state): State<ChartsState>) -> Result<Response, Error> {
    let transactions = {
        let connection = state
            .db_connection
            .lock()
            .inspect_err(|error| tracing::error!("could not acquire database lock: {error}"))
            .map_err(|_| Error::DatabaseLockError)?;

        get_transactions(&connection)
            .inspect_err(|error| tracing::error!("could not get transactions: {error}"))?
    };

    let nav_bar = NavBar::new(endpoints::CHARTS_VIEW);

    if transactions.is_empty() {
        return Ok(charts_no_data_view(nav_bar).into_response());
    }

    let totals = totals_by_category(&transactions);
    let chart = category_chart(&totals);

    Ok(charts_view(nav_bar, &chart.to_string()).into_response())
}

/// Sum the amounts of `transactions` per category, ordered by category name.
fn totals_by_category(transactions: &[Transaction]) -> BTreeMap<&str, f64> {
    let mut totals = BTreeMap::new();

    for transaction in transactions {
        *totals.entry(transaction.category.as_str()).or_insert(0.0) += transaction.amount;
    }

    totals
}

fn category_chart(totals: &BTreeMap<&str, f64>) -> Chart {
    let labels: Vec<String> = totals.keys().map(|category| (*category).to_owned()).collect();
    let values: Vec<f64> = totals.values().copied().collect();

    Chart::new()
        .title(Title::new().text("Expenses by Category").left("center"))
        .tooltip(
            Tooltip::new()
                .trigger(Trigger::Axis)
                .value_formatter(currency_formatter())
                .axis_pointer(AxisPointer::new().type_(AxisPointerType::Shadow)),
        )
        .grid(
            Grid::new()
                .left("3%")
                .right("4%")
                .bottom("3%")
                .contain_label(true),
        )
        .x_axis(
            Axis::new()
                .type_(AxisType::Category)
                .name("Category")
                .data(labels),
        )
        .y_axis(
            Axis::new()
                .type_(AxisType::Value)
                .name("Amount")
                .axis_label(AxisLabel::new().formatter(currency_formatter()))
                .split_line(
                    SplitLine::new().line_style(LineStyle::new().type_(LineStyleType::Dashed)),
                ),
        )
        .series(
            bar::Bar::new()
                .name("Expenses")
                .label(Label::new().show(true).position(LabelPosition::Top))
                .data(values),
        )
}

#[inline]
fn currency_formatter() -> JsFunction {
    JsFunction::new_with_args(
        "number",
        "const currencyFormatter = new Intl.NumberFormat('en-US', {
              style: 'currency',
              currency: 'USD'
            });
            return (number) ? currencyFormatter.format(number) : \"-\";",
    )
}

/// Make chart options safe to embed in a `<script>` element.
///
/// Category names are user input and end up in string literals, where `<\/` and
/// `<\!` decode to the same text but cannot close the element or open a comment.
fn escape_script_text(options: &str) -> String {
    options.replace("</", "<\\/").replace("<!", "<\\!")
}

fn charts_script(options: &str) -> HeadElement {
    let options = escape_script_text(options);
    let script = format!(
        r#"document.addEventListener('DOMContentLoaded', function() {{
            const chart = echarts.init(document.getElementById("{CHART_ID}"));
            chart.setOption({options});

            window.addEventListener('resize', chart.resize);

            const darkModeMediaQuery = window.matchMedia('(prefers-color-scheme: dark)');
            const updateTheme = () => {{
                chart.setTheme(darkModeMediaQuery.matches ? 'dark' : 'default');
            }};
            darkModeMediaQuery.addEventListener('change', updateTheme);
            updateTheme();
        }});"#
    );

    HeadElement::ScriptSource(PreEscaped(script))
}

fn charts_no_data_view(nav_bar: NavBar) -> Markup {
    let nav_bar = nav_bar.into_html();
    let transactions_link = link(endpoints::TRANSACTIONS_VIEW, "transactions page");

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE) data-empty-state="true"
        {
            h2 class="text-xl font-bold"
            {
                "Nothing here yet..."
            }

            p
            {
                "The chart will show up here once you add some transactions
                on the " (transactions_link) "."
            }
        }
    );

    base("Charts", &[], &content)
}

fn charts_view(nav_bar: NavBar, options: &str) -> Markup {
    let nav_bar = nav_bar.into_html();

    let content = html!(
        (nav_bar)

        div class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-screen-lg mx-auto"
            {
                div
                    id=(CHART_ID)
                    class="min-h-[380px] rounded dark:bg-gray-100"
                {}
            }
        }
    );

    let scripts = [
        HeadElement::ScriptLink("/static/echarts.6.0.0.min.js".to_owned()),
        charts_script(options),
    ];

    base("Charts", &scripts, &content)
}
