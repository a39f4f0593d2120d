//! The collection history page: text search, a searchable centre filter and
//! date sorting over the backend's full record set.

use axum::{
    extract::{FromRef, Query, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use serde::Deserialize;
use time::macros::format_description;

use crate::{
    AppState, Error,
    api::{ApiClient, CashCollection},
    endpoints,
    html::{
        DROPDOWN_PANEL_STYLE, DROPDOWN_ROW_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE,
        LINK_STYLE, PAGE_CONTAINER_STYLE, STATUS_BADGE_STYLE, TABLE_CELL_STYLE,
        TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base, format_currency,
    },
    navigation::NavBar,
    selection::{OptionId, SelectOption, SingleSelectFilter},
};

use super::history::{
    SortOrder, filter_by_centre, search_collections, sort_by_received_date, total_received,
};

/// The label of the synthesised "no centre filter" choice.
const ALL_CENTRES_LABEL: &str = "All Centers";

/// The state needed for the history page and its centre-filter partial.
#[derive(Debug, Clone)]
pub struct HistoryPageState {
    pub api: ApiClient,
}

impl FromRef<AppState> for HistoryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// The history page's query parameters. All optional; absent means no text
/// filter, newest first and all centres.
#[derive(Debug, Default, Deserialize)]
pub struct HistoryQuery {
    #[serde(default)]
    q: String,
    #[serde(default)]
    sort: SortOrder,
    centre: Option<String>,
}

/// Render the collection history for the given filters.
pub async fn get_history_page(
    State(state): State<HistoryPageState>,
    Query(query): Query<HistoryQuery>,
) -> Result<Response, Error> {
    let catalogue = state
        .api
        .catalogue()
        .await
        .inspect_err(|error| tracing::error!("Failed to load the catalogue: {error}"))?;

    let records = state
        .api
        .collection_history()
        .await
        .inspect_err(|error| tracing::error!("Failed to load the collection history: {error}"))?;

    // An unknown centre id in the URL is treated the same as no filter.
    let selected_centre = query.centre.as_ref().and_then(|id| {
        let id = OptionId::new(id);
        catalogue
            .centres
            .iter()
            .find(|centre| centre.id == id)
            .cloned()
    });
    let filter = SingleSelectFilter::with_selected(selected_centre);

    Ok(history_page_view(&records, &filter, &query.q, query.sort).into_response())
}

/// The centre filter's query parameters: the centre search text plus the
/// history filters to carry through into each option link.
#[derive(Debug, Default, Deserialize)]
pub struct CentreOptionsQuery {
    #[serde(default)]
    centre_query: String,
    #[serde(default)]
    q: String,
    #[serde(default)]
    sort: SortOrder,
}

/// Render the centre filter's option rows for the current search text.
pub async fn get_centre_options_partial(
    State(state): State<HistoryPageState>,
    Query(query): Query<CentreOptionsQuery>,
) -> Result<Response, Error> {
    let catalogue = state
        .api
        .catalogue()
        .await
        .inspect_err(|error| tracing::error!("Failed to load the catalogue: {error}"))?;

    Ok(centre_options_view(
        &catalogue.centres,
        &query.centre_query,
        &query.q,
        query.sort,
    )
    .into_response())
}

/// Build a history page URL carrying the given filters.
///
/// Parameters whose value is the default are omitted so the plain history
/// URL stays clean.
fn history_url(q: &str, sort: SortOrder, centre: Option<&OptionId>) -> String {
    let mut params: Vec<(&str, &str)> = Vec::new();

    let q = q.trim();
    if !q.is_empty() {
        params.push(("q", q));
    }

    if sort != SortOrder::default() {
        params.push(("sort", sort.as_param()));
    }

    if let Some(centre) = centre {
        params.push(("centre", centre.as_str()));
    }

    if params.is_empty() {
        return endpoints::HISTORY_VIEW.to_owned();
    }

    match serde_urlencoded::to_string(&params) {
        Ok(query) => format!("{}?{}", endpoints::HISTORY_VIEW, query),
        Err(error) => {
            tracing::error!("Could not encode history filters: {error}");
            endpoints::HISTORY_VIEW.to_owned()
        }
    }
}

fn history_page_view(
    records: &[CashCollection],
    filter: &SingleSelectFilter,
    q: &str,
    sort: SortOrder,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::HISTORY_VIEW).into_html();

    let mut visible = match filter.selected() {
        Some(centre) => filter_by_centre(records, &centre.name),
        None => records.to_vec(),
    };
    visible = search_collections(&visible, q);
    sort_by_received_date(&mut visible, sort);

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-4xl space-y-4"
            {
                h1 class="text-xl font-bold" { "Collection History" }

                (total_card(&visible))

                (filter_controls(filter, q, sort))

                @if records.is_empty() {
                    p { "No collections recorded yet." }
                } @else if visible.is_empty() {
                    p { "No collections match the current filters." }
                } @else {
                    (history_table(&visible, filter, q, sort))
                }
            }
        }
    );

    base("Collection History", &[], &content)
}

fn total_card(records: &[CashCollection]) -> Markup {
    html!(
        div class="bg-gray-50 dark:bg-gray-800 p-4 rounded w-fit"
        {
            p class="text-sm text-gray-600 dark:text-gray-400" { "Total received" }
            p class="text-2xl font-bold" data-total
            {
                (format_currency(total_received(records)))
            }
        }
    )
}

/// The text search and centre filter, submitted as plain GET navigation.
fn filter_controls(filter: &SingleSelectFilter, q: &str, sort: SortOrder) -> Markup {
    html!(
        form
            method="get"
            action=(endpoints::HISTORY_VIEW)
            class="flex flex-wrap items-end gap-4"
        {
            input type="hidden" name="sort" value=(sort.as_param());
            @if let Some(centre) = filter.selected() {
                input type="hidden" name="centre" value=(centre.id);
            }

            div
            {
                label for="q" class=(FORM_LABEL_STYLE) { "Search" }
                input
                    type="search"
                    id="q"
                    name="q"
                    value=(q)
                    placeholder="Centre or remark"
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            (centre_filter_control(filter))

            button type="submit" class="sr-only" { "Apply" }
        }
    )
}

/// The searchable centre dropdown.
///
/// Typing fetches matching rows into the options panel; each row is a plain
/// link that reloads the page with the chosen centre applied. In-flight
/// fetches are replaced rather than queued, so a stale response can never
/// land after a newer one.
fn centre_filter_control(filter: &SingleSelectFilter) -> Markup {
    html!(
        div class="relative"
        {
            label for="centre_query" class=(FORM_LABEL_STYLE) { "Centre" }

            input
                type="search"
                id="centre_query"
                name="centre_query"
                placeholder=(filter.selected_label(ALL_CENTRES_LABEL))
                autocomplete="off"
                hx-get=(endpoints::CENTRE_OPTIONS_PARTIAL)
                hx-trigger="input changed delay:300ms, focus"
                hx-target="#centre-options"
                hx-sync="this:replace"
                hx-include="closest form"
                class=(FORM_TEXT_INPUT_STYLE);

            div id="centre-options" class=(DROPDOWN_PANEL_STYLE) data-dropdown {}
        }
    )
}

fn centre_options_view(
    centres: &[SelectOption],
    centre_query: &str,
    q: &str,
    sort: SortOrder,
) -> Markup {
    let mut filter = SingleSelectFilter::default();
    filter.set_query(centre_query);

    let rows = filter.visible_rows(centres, ALL_CENTRES_LABEL);
    let no_matches = filter.has_no_matches(centres);

    html!(
        @for row in &rows {
            a
                href=(history_url(q, sort, row.id.as_ref()))
                class=(DROPDOWN_ROW_STYLE)
            {
                (row.name)
            }
        }

        @if no_matches {
            p class="px-3 py-2 text-sm text-gray-500 dark:text-gray-400"
            {
                "No centres match \"" (centre_query.trim()) "\"."
            }
        }
    )
}

fn history_table(
    records: &[CashCollection],
    filter: &SingleSelectFilter,
    q: &str,
    sort: SortOrder,
) -> Markup {
    let date_format = format_description!("[year]-[month]-[day]");
    let centre_id = filter.selected().map(|centre| &centre.id);

    html!(
        table class=(TABLE_STYLE)
        {
            thead
            {
                tr
                {
                    th class=(TABLE_HEADER_STYLE)
                    {
                        a
                            href=(history_url(q, sort.reversed(), centre_id))
                            class=(LINK_STYLE)
                            data-sort-toggle
                        {
                            "Date "
                            @match sort {
                                SortOrder::NewestFirst => { "\u{25bc}" }
                                SortOrder::OldestFirst => { "\u{25b2}" }
                            }
                        }
                    }
                    th class=(TABLE_HEADER_STYLE) { "Centre" }
                    th class=(TABLE_HEADER_STYLE) { "Amount" }
                    th class=(TABLE_HEADER_STYLE) { "Remark" }
                    th class=(TABLE_HEADER_STYLE) { "Status" }
                }
            }

            tbody
            {
                @for record in records {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE)
                        {
                            @match record.amount_received_date.date().format(&date_format) {
                                Ok(date) => { (date) }
                                Err(_) => { "-" }
                            }
                        }
                        td class=(TABLE_CELL_STYLE) { (record.source) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            (format_currency(record.amount_received))
                        }
                        td class=(TABLE_CELL_STYLE) { (record.remark) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            @if !record.ot_status.is_empty() {
                                span class=(STATUS_BADGE_STYLE) { (record.ot_status) }
                            }
                        }
                    }
                }
            }
        }
    )
}
