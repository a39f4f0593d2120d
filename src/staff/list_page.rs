//! The staff listing page.

use axum::{
    extract::{FromRef, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{ApiClient, ArmUser},
    endpoints,
    html::{
        LINK_STYLE, PAGE_CONTAINER_STYLE, TABLE_CELL_STYLE, TABLE_HEADER_STYLE, TABLE_ROW_STYLE,
        TABLE_STYLE, base, format_currency,
    },
    navigation::NavBar,
};

/// The state needed for the staff listing page.
#[derive(Debug, Clone)]
pub struct StaffPageState {
    pub api: ApiClient,
}

impl FromRef<AppState> for StaffPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render the staff listing with cash-in-hand positions.
pub async fn get_staff_page(State(state): State<StaffPageState>) -> Result<Response, Error> {
    let users = state
        .api
        .arm_users()
        .await
        .inspect_err(|error| tracing::error!("Failed to load ARM users: {error}"))?;

    Ok(staff_page_view(&users).into_response())
}

fn staff_page_view(users: &[ArmUser]) -> Markup {
    let nav_bar = NavBar::new(endpoints::STAFF_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-3xl space-y-4"
            {
                h1 class="text-xl font-bold" { "Staff" }

                @if users.is_empty() {
                    p { "No staff found." }
                } @else {
                    (staff_table(users))
                }
            }
        }
    );

    base("Staff", &[], &content)
}

fn staff_table(users: &[ArmUser]) -> Markup {
    html!(
        table class=(TABLE_STYLE)
        {
            thead
            {
                tr
                {
                    th class=(TABLE_HEADER_STYLE) { "Staff" }
                    th class=(TABLE_HEADER_STYLE) { "Cash in Hand" }
                    th class=(TABLE_HEADER_STYLE) { "" }
                }
            }

            tbody
            {
                @for user in users {
                    tr class=(TABLE_ROW_STYLE)
                    {
                        td class=(TABLE_CELL_STYLE) { (user.id) }
                        td class=(TABLE_CELL_STYLE) { (format_currency(user.cash_in_hand)) }
                        td class=(TABLE_CELL_STYLE)
                        {
                            a
                                href=(endpoints::format_endpoint(
                                    endpoints::EDIT_ACCESS_VIEW,
                                    user.id.as_str(),
                                ))
                                class=(LINK_STYLE)
                            {
                                "Edit access"
                            }
                        }
                    }
                }
            }
        }
    )
}
