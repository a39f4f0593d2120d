//! The endpoint that saves a staff member's access selection.

use axum::{
    extract::{Path, State},
    response::{IntoResponse, Response},
};
use axum_extra::extract::Form;
use serde::Deserialize;

use crate::{alert::AlertView, selection::OptionId};

use super::{
    access_page::{AccessPageState, access_editor_view},
    domain::{AccessCategory, AccessSelection},
};

/// The access editor form data.
///
/// Checkbox groups post one value per checked box, so each category arrives
/// as a repeated field. `remove_category`/`remove_id` are only present when
/// the submission came from a chip's remove button.
#[derive(Debug, Deserialize)]
pub struct AccessForm {
    #[serde(default)]
    regions: Vec<String>,
    #[serde(default)]
    branches: Vec<String>,
    #[serde(default)]
    centres: Vec<String>,
    remove_category: Option<String>,
    remove_id: Option<String>,
}

/// Save the submitted tri-category selection and re-render the editor.
///
/// The selection shown back to the user is always the one they submitted:
/// when the backend rejects the update the editor still renders the local
/// selection, with the failure delivered as an out-of-band alert. All
/// failures come back as alert fragments, since the response targets either
/// the editor or the alert container, never a full page.
pub async fn update_access_endpoint(
    State(state): State<AccessPageState>,
    Path(staff_id): Path<String>,
    Form(form): Form<AccessForm>,
) -> Response {
    let staff_id = OptionId::new(&staff_id);
    let selection = selection_from_form(&form);

    let catalogue = match state.api.catalogue().await {
        Ok(catalogue) => catalogue,
        Err(error) => {
            tracing::error!("Failed to load the catalogue: {error}");
            return error.into_alert_response();
        }
    };

    let alert = match state
        .api
        .update_staff_access(&staff_id, &selection.clone().into())
        .await
    {
        Ok(()) => AlertView::success("Access updated", "").into_oob_markup(),
        Err(error) => {
            tracing::error!("Failed to update access for {staff_id}: {error}");
            error.into_oob_alert_markup()
        }
    };

    access_editor_view(&staff_id, &catalogue, &selection, Some(alert)).into_response()
}

/// Build the selection a form submission represents.
///
/// A chip-removal submission carries the full current selection plus the id
/// to drop, so removal is applied on top of the submitted fields.
fn selection_from_form(form: &AccessForm) -> AccessSelection {
    let selection = AccessSelection {
        regions: form.regions.iter().map(OptionId::new).collect(),
        branches: form.branches.iter().map(OptionId::new).collect(),
        centres: form.centres.iter().map(OptionId::new).collect(),
    };

    match (&form.remove_category, &form.remove_id) {
        (Some(category), Some(id)) => match AccessCategory::parse(category) {
            Some(category) => selection.remove(category, &OptionId::new(id)),
            None => {
                tracing::warn!("Ignoring removal for unknown category {category:?}");
                selection
            }
        },
        _ => selection,
    }
}


#[cfg(test)]
mod access_form_tests {
    use super::{AccessForm, selection_from_form};
    use crate::{selection::OptionId, staff::domain::AccessSelection};

    fn form(remove: Option<(&str, &str)>) -> AccessForm {
        AccessForm {
            regions: vec!["r1".to_owned()],
            branches: vec!["b1".to_owned(), "b2".to_owned()],
            centres: vec![],
            remove_category: remove.map(|(category, _)| category.to_owned()),
            remove_id: remove.map(|(_, id)| id.to_owned()),
        }
    }

    #[test]
    fn checkbox_fields_become_the_selection() {
        let selection = selection_from_form(&form(None));

        assert_eq!(
            selection,
            AccessSelection {
                regions: vec![OptionId::new("r1")],
                branches: vec![OptionId::new("b1"), OptionId::new("b2")],
                centres: vec![],
            }
        );
    }

    #[test]
    fn removal_drops_the_named_id() {
        let selection = selection_from_form(&form(Some(("branches", "b1"))));

        assert_eq!(selection.branches, vec![OptionId::new("b2")]);
        assert_eq!(selection.regions, vec![OptionId::new("r1")]);
    }

    #[test]
    fn unknown_removal_category_is_ignored() {
        let selection = selection_from_form(&form(Some(("bogus", "b1"))));

        assert_eq!(
            selection.branches,
            vec![OptionId::new("b1"), OptionId::new("b2")]
        );
    }

    #[test]
    fn removing_an_unselected_id_is_a_noop() {
        let selection = selection_from_form(&form(Some(("centres", "c9"))));

        assert_eq!(selection, selection_from_form(&form(None)));
    }
}
