//! The page for recording a new cash collection.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};
use time::{Date, OffsetDateTime};

use crate::{
    AppState, Error,
    api::{ApiClient, ArmUser, DATE_FORMAT},
    endpoints,
    html::{
        BUTTON_PRIMARY_STYLE, FORM_LABEL_STYLE, FORM_TEXT_INPUT_STYLE, PAGE_CONTAINER_STYLE,
        TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE, TABLE_STYLE, base,
        dollar_input_styles, format_currency, loading_spinner,
    },
    navigation::NavBar,
    selection::SelectOption,
};

/// The state needed for the collection entry page.
#[derive(Debug, Clone)]
pub struct EntryPageState {
    pub api: ApiClient,
}

impl FromRef<AppState> for EntryPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render the collection entry form with the current cash positions.
pub async fn get_new_collection_page(
    State(state): State<EntryPageState>,
) -> Result<Response, Error> {
    let catalogue = state
        .api
        .catalogue()
        .await
        .inspect_err(|error| tracing::error!("Failed to load the catalogue: {error}"))?;

    let users = state
        .api
        .arm_users()
        .await
        .inspect_err(|error| tracing::error!("Failed to load ARM users: {error}"))?;

    let today = OffsetDateTime::now_utc().date();

    Ok(entry_page_view(&catalogue.centres, &users, today).into_response())
}

fn entry_page_view(centres: &[SelectOption], users: &[ArmUser], today: Date) -> Markup {
    let nav_bar = NavBar::new(endpoints::NEW_COLLECTION_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-md space-y-6"
            {
                h1 class="text-xl font-bold" { "New Collection" }

                (entry_form(centres, today))

                (cash_in_hand_table(users))
            }
        }
    );

    base("New Collection", &[dollar_input_styles()], &content)
}

fn entry_form(centres: &[SelectOption], today: Date) -> Markup {
    let today = today.format(&DATE_FORMAT).unwrap_or_default();

    html!(
        form
            hx-post=(endpoints::POST_COLLECTION)
            hx-target-error="#alert-container"
            class="bg-gray-50 dark:bg-gray-800 p-4 rounded w-full space-y-4"
        {
            div
            {
                label for="amount" class=(FORM_LABEL_STYLE) { "Amount Received" }
                div class="input-wrapper w-full"
                {
                    input
                        type="number"
                        id="amount"
                        name="amount"
                        min="0.01"
                        step="0.01"
                        placeholder="0.00"
                        required
                        class=(FORM_TEXT_INPUT_STYLE);
                }
            }

            div
            {
                label for="date" class=(FORM_LABEL_STYLE) { "Date Received" }
                input
                    type="date"
                    id="date"
                    name="date"
                    value=(today)
                    max=(today)
                    required
                    class=(FORM_TEXT_INPUT_STYLE);
            }

            div
            {
                label for="source" class=(FORM_LABEL_STYLE) { "Source Centre" }
                select
                    id="source"
                    name="source"
                    required
                    class=(FORM_TEXT_INPUT_STYLE)
                {
                    option value="" disabled selected { "Choose a centre" }

                    @for centre in centres {
                        option value=(centre.name) { (centre.name) }
                    }
                }
            }

            div
            {
                label for="remark" class=(FORM_LABEL_STYLE) { "Remark" }
                textarea
                    id="remark"
                    name="remark"
                    rows="2"
                    placeholder="Optional note"
                    class=(FORM_TEXT_INPUT_STYLE)
                {}
            }

            button type="submit" class=(BUTTON_PRIMARY_STYLE)
            {
                span id="indicator" class="htmx-indicator" { (loading_spinner()) }
                "Record Collection"
            }
        }
    )
}

fn cash_in_hand_table(users: &[ArmUser]) -> Markup {
    html!(
        section class="space-y-2"
        {
            h2 class="text-lg font-semibold" { "Cash in Hand" }

            @if users.is_empty() {
                p { "No staff found." }
            } @else {
                table class=(TABLE_STYLE)
                {
                    thead
                    {
                        tr
                        {
                            th class=(TABLE_HEADER_STYLE) { "Staff" }
                            th class=(TABLE_HEADER_STYLE) { "Cash in Hand" }
                        }
                    }

                    tbody
                    {
                        @for user in users {
                            tr class=(TABLE_ROW_STYLE)
                            {
                                td class=(TABLE_CELL_STYLE) { (user.id) }
                                td class=(TABLE_CELL_STYLE)
                                {
                                    (format_currency(user.cash_in_hand))
                                }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod entry_page_tests {
    use scraper::Selector;
    use time::macros::date;

    use super::entry_page_view;
    use crate::{
        api::ArmUser,
        endpoints,
        selection::{OptionId, SelectOption},
        test_utils::{
            assert_form_input, assert_form_submit_button, assert_hx_endpoint, assert_valid_html,
            must_get_form, parse_markup,
        },
    };

    fn test_centres() -> Vec<SelectOption> {
        vec![
            SelectOption::new("c1", "Harbour"),
            SelectOption::new("c2", "Hillside"),
        ]
    }

    fn test_users() -> Vec<ArmUser> {
        vec![ArmUser {
            id: OptionId::new("u1"),
            cash_in_hand: 125.5,
        }]
    }

    #[test]
    fn form_posts_to_the_collection_endpoint() {
        let html = parse_markup(entry_page_view(
            &test_centres(),
            &test_users(),
            date!(2026 - 08 - 30),
        ));
        assert_valid_html(&html);

        let form = must_get_form(&html);
        assert_hx_endpoint(&form, endpoints::POST_COLLECTION, "hx-post");
        assert_form_input(&form, "amount", "number");
        assert_form_input(&form, "date", "date");
        assert_form_submit_button(&form);
    }

    #[test]
    fn source_select_lists_centres_by_name() {
        let html = parse_markup(entry_page_view(
            &test_centres(),
            &test_users(),
            date!(2026 - 08 - 30),
        ));

        let options: Vec<String> = html
            .select(&Selector::parse("select[name=source] option").unwrap())
            .filter_map(|option| option.value().attr("value").map(str::to_owned))
            .collect();

        assert_eq!(
            options,
            vec!["".to_owned(), "Harbour".to_owned(), "Hillside".to_owned()]
        );
    }

    #[test]
    fn date_input_defaults_to_and_caps_at_today() {
        let html = parse_markup(entry_page_view(
            &test_centres(),
            &test_users(),
            date!(2026 - 08 - 30),
        ));

        let date_input = html
            .select(&Selector::parse("input[name=date]").unwrap())
            .next()
            .expect("No date input found");

        assert_eq!(date_input.value().attr("value"), Some("2026-08-30"));
        assert_eq!(date_input.value().attr("max"), Some("2026-08-30"));
    }

    #[test]
    fn shows_cash_in_hand_positions() {
        let html = parse_markup(entry_page_view(
            &test_centres(),
            &test_users(),
            date!(2026 - 08 - 30),
        ));

        let row: String = html
            .select(&Selector::parse("tbody tr").unwrap())
            .next()
            .expect("No cash-in-hand row found")
            .text()
            .collect();

        assert!(row.contains("u1"));
        assert!(row.contains("$125.50"));
    }
}
