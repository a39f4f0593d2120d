//! The staff access editor page.

use axum::{
    extract::{FromRef, Path, State},
    response::{IntoResponse, Response},
};
use maud::{Markup, html};

use crate::{
    AppState, Error,
    api::{ApiClient, Catalogue},
    endpoints,
    html::{BUTTON_REMOVE_STYLE, CHIP_STYLE, FORM_LABEL_STYLE, PAGE_CONTAINER_STYLE, base},
    navigation::NavBar,
    selection::{OptionId, SelectOption, resolve},
};

use super::domain::{AccessCategory, AccessSelection};

/// The state needed for the access editor page.
#[derive(Debug, Clone)]
pub struct AccessPageState {
    pub api: ApiClient,
}

impl FromRef<AppState> for AccessPageState {
    fn from_ref(state: &AppState) -> Self {
        Self {
            api: state.api.clone(),
        }
    }
}

/// Render the access editor for one staff member.
pub async fn get_access_page(
    State(state): State<AccessPageState>,
    Path(staff_id): Path<String>,
) -> Result<Response, Error> {
    let staff_id = OptionId::new(&staff_id);

    let catalogue = state
        .api
        .catalogue()
        .await
        .inspect_err(|error| tracing::error!("Failed to load the catalogue: {error}"))?;

    let access = state
        .api
        .staff_access(&staff_id)
        .await
        .inspect_err(|error| tracing::error!("Failed to load access for {staff_id}: {error}"))?;

    Ok(access_page_view(&staff_id, &catalogue, &access.into()).into_response())
}

/// The catalogue options backing one category.
pub(crate) fn options_for(catalogue: &Catalogue, category: AccessCategory) -> &[SelectOption] {
    match category {
        AccessCategory::Regions => &catalogue.regions,
        AccessCategory::Branches => &catalogue.branches,
        AccessCategory::Centres => &catalogue.centres,
    }
}

fn access_page_view(
    staff_id: &OptionId,
    catalogue: &Catalogue,
    selection: &AccessSelection,
) -> Markup {
    let nav_bar = NavBar::new(endpoints::STAFF_VIEW).into_html();

    let content = html!(
        (nav_bar)

        main class=(PAGE_CONTAINER_STYLE)
        {
            section class="w-full max-w-3xl space-y-4"
            {
                header
                {
                    h1 class="text-xl font-bold" { "Access for " (staff_id) }

                    p class="text-sm text-gray-600 dark:text-gray-400"
                    {
                        "Changes are saved as soon as they are made."
                    }
                }

                (access_editor_view(staff_id, catalogue, selection, None))
            }
        }
    );

    base("Staff Access", &[], &content)
}

/// The swappable editor fragment: chips and a checkbox picker per category.
///
/// `alert` is appended for out-of-band delivery when the editor is
/// re-rendered by the update endpoint.
pub(crate) fn access_editor_view(
    staff_id: &OptionId,
    catalogue: &Catalogue,
    selection: &AccessSelection,
    alert: Option<Markup>,
) -> Markup {
    let put_url = endpoints::format_endpoint(endpoints::PUT_ACCESS, staff_id.as_str());

    html!(
        div id="access-editor" class="space-y-6"
        {
            @for category in AccessCategory::ALL {
                section class="bg-gray-50 dark:bg-gray-800 p-4 rounded w-full space-y-3"
                {
                    h2 class="text-lg font-semibold" { (category.heading()) }

                    (chips_row(&put_url, category, catalogue, selection))
                }
            }

            (picker_form(&put_url, catalogue, selection))

            @if let Some(alert) = alert { (alert) }
        }
    )
}

/// One chip per resolved selected option, each with its own remove form.
///
/// Ids that are missing from the catalogue get no chip; they are dropped
/// silently rather than erroring.
fn chips_row(
    put_url: &str,
    category: AccessCategory,
    catalogue: &Catalogue,
    selection: &AccessSelection,
) -> Markup {
    let chips = resolve(options_for(catalogue, category), selection.selection(category));

    html!(
        div class="flex flex-wrap items-center gap-2"
        {
            @if chips.is_empty() {
                p class="text-sm text-gray-500 dark:text-gray-400"
                {
                    "Nothing assigned yet."
                }
            }

            @for chip in &chips {
                span class=(CHIP_STYLE) data-chip=(category.field_name())
                {
                    (chip.name)

                    (remove_chip_form(put_url, category, selection, chip))
                }
            }
        }
    )
}

/// The remove affordance on a chip.
///
/// The form carries the full tri-category selection plus the id to drop, so
/// the update endpoint always receives a complete selection, never a delta.
fn remove_chip_form(
    put_url: &str,
    category: AccessCategory,
    selection: &AccessSelection,
    chip: &SelectOption,
) -> Markup {
    html!(
        form
            hx-put=(put_url)
            hx-target="#access-editor"
            hx-swap="outerHTML"
            hx-target-error="#alert-container"
            class="inline"
        {
            (hidden_selection_inputs(selection))

            input type="hidden" name="remove_category" value=(category.field_name());
            input type="hidden" name="remove_id" value=(chip.id);

            button
                type="submit"
                class=(BUTTON_REMOVE_STYLE)
                aria-label=(format!("Remove {}", chip.name))
            {
                "\u{00d7}"
            }
        }
    )
}

fn hidden_selection_inputs(selection: &AccessSelection) -> Markup {
    html!(
        @for category in AccessCategory::ALL {
            @for id in selection.selection(category) {
                input type="hidden" name=(category.field_name()) value=(id);
            }
        }
    )
}

/// The checkbox picker covering all three categories.
///
/// Any change re-submits the whole form, so checking an already-checked box
/// removes that id (toggle semantics) and the backend always sees the full
/// tri-category selection.
fn picker_form(put_url: &str, catalogue: &Catalogue, selection: &AccessSelection) -> Markup {
    html!(
        form
            hx-put=(put_url)
            hx-target="#access-editor"
            hx-swap="outerHTML"
            hx-trigger="change"
            hx-target-error="#alert-container"
            class="bg-gray-50 dark:bg-gray-800 p-4 rounded w-full space-y-4"
        {
            @for category in AccessCategory::ALL {
                fieldset
                {
                    legend class=(FORM_LABEL_STYLE) { "Assign " (category.heading()) }

                    @if options_for(catalogue, category).is_empty() {
                        p class="text-sm text-gray-500 dark:text-gray-400"
                        {
                            "No options available."
                        }
                    }

                    div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-3"
                    {
                        @for option in options_for(catalogue, category) {
                            label class="flex items-center space-x-2"
                            {
                                input
                                    type="checkbox"
                                    name=(category.field_name())
                                    value=(option.id)
                                    checked[selection.selection(category).contains(&option.id)]
                                    class="rounded-sm border-gray-300
                                        text-blue-600 shadow-xs
                                        focus:border-blue-300 focus:ring-3
                                        focus:ring-blue-200/50"
                                ;

                                span class="text-sm" { (option.name) }
                            }
                        }
                    }
                }
            }
        }
    )
}

#[cfg(test)]
mod access_editor_tests {
    use scraper::{Html, Selector};

    use super::access_editor_view;
    use crate::{
        api::Catalogue,
        selection::{OptionId, SelectOption},
        staff::domain::AccessSelection,
        test_utils::parse_markup,
    };

    fn test_catalogue() -> Catalogue {
        Catalogue {
            regions: vec![SelectOption::new("r1", "North")],
            branches: vec![
                SelectOption::new("b1", "Main Street"),
                SelectOption::new("b2", "Harbour Road"),
            ],
            centres: vec![SelectOption::new("c1", "Harbour")],
        }
    }

    fn test_selection() -> AccessSelection {
        AccessSelection {
            regions: vec![OptionId::new("r1")],
            branches: vec![OptionId::new("b1"), OptionId::new("stale")],
            centres: vec![],
        }
    }

    fn render_editor() -> Html {
        parse_markup(access_editor_view(
            &OptionId::new("u1"),
            &test_catalogue(),
            &test_selection(),
            None,
        ))
    }

    #[test]
    fn renders_a_chip_per_resolved_selection() {
        let html = render_editor();

        let chips: Vec<_> = html
            .select(&Selector::parse("span[data-chip]").unwrap())
            .collect();

        // "stale" is not in the catalogue so it must not produce a chip.
        assert_eq!(chips.len(), 2, "want chips for r1 and b1 only");

        let chip_text = chips
            .iter()
            .map(|chip| chip.text().collect::<String>())
            .collect::<String>();
        assert!(chip_text.contains("North"));
        assert!(chip_text.contains("Main Street"));
        assert!(!chip_text.contains("stale"));
    }

    #[test]
    fn remove_forms_carry_the_full_selection() {
        let html = render_editor();

        let form = html
            .select(&Selector::parse("span[data-chip] form").unwrap())
            .next()
            .expect("No remove form found");

        let hidden_values: Vec<(String, String)> = form
            .select(&Selector::parse("input[type=hidden]").unwrap())
            .map(|input| {
                (
                    input.value().attr("name").unwrap_or_default().to_owned(),
                    input.value().attr("value").unwrap_or_default().to_owned(),
                )
            })
            .collect();

        // The full tri-category selection, even unresolved ids, plus the
        // removal marker fields.
        assert!(hidden_values.contains(&("regions".to_owned(), "r1".to_owned())));
        assert!(hidden_values.contains(&("branches".to_owned(), "b1".to_owned())));
        assert!(hidden_values.contains(&("branches".to_owned(), "stale".to_owned())));
        assert!(
            hidden_values
                .iter()
                .any(|(name, _)| name == "remove_category")
        );
        assert!(hidden_values.iter().any(|(name, _)| name == "remove_id"));
    }

    #[test]
    fn picker_checks_only_selected_options() {
        let html = render_editor();

        let checked: Vec<_> = html
            .select(&Selector::parse("input[type=checkbox][checked]").unwrap())
            .map(|input| input.value().attr("value").unwrap_or_default().to_owned())
            .collect();

        assert_eq!(checked, vec!["r1".to_owned(), "b1".to_owned()]);
    }

    #[test]
    fn empty_categories_show_a_placeholder() {
        let html = render_editor();

        let text = html
            .root_element()
            .text()
            .collect::<String>();

        assert!(
            text.contains("Nothing assigned yet."),
            "centres have no selection so the placeholder must show"
        );
    }
}
