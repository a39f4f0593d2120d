//! The endpoint that records a new cash collection.

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_htmx::HxRedirect;
use serde::Deserialize;
use time::{Date, OffsetDateTime};

use crate::{
    Error,
    api::{DATE_FORMAT, NewCashCollection},
    endpoints,
};

use super::entry_page::EntryPageState;

/// The collection entry form data, as submitted by the browser.
#[derive(Debug, Deserialize)]
pub struct CollectionForm {
    amount: String,
    date: String,
    source: String,
    #[serde(default)]
    remark: String,
}

/// Validate and record a collection, then redirect to the history page.
///
/// Validation failures come back as alert fragments so the form keeps
/// whatever the user has typed.
pub async fn create_collection_endpoint(
    State(state): State<EntryPageState>,
    Form(form): Form<CollectionForm>,
) -> Result<Response, Error> {
    let today = OffsetDateTime::now_utc().date();

    let collection = match validate_collection(&form, today) {
        Ok(collection) => collection,
        Err(error) => return Ok(error.into_alert_response()),
    };

    if let Err(error) = state.api.create_collection(&collection).await {
        tracing::error!("Failed to record a collection: {error}");
        return Ok(error.into_alert_response());
    }

    Ok((
        HxRedirect(endpoints::HISTORY_VIEW.to_owned()),
        StatusCode::SEE_OTHER,
    )
        .into_response())
}

/// Check the submitted fields and build the backend request body.
///
/// The amount must parse to a number greater than zero, the date must parse
/// as `YYYY-MM-DD` and not lie after `today`, and the source centre must be
/// chosen.
fn validate_collection(form: &CollectionForm, today: Date) -> Result<NewCashCollection, Error> {
    let amount: f64 = form
        .amount
        .trim()
        .parse()
        .map_err(|_| Error::InvalidAmount(form.amount.clone()))?;

    if !amount.is_finite() || amount <= 0.0 {
        return Err(Error::InvalidAmount(form.amount.clone()));
    }

    let date = Date::parse(form.date.trim(), &DATE_FORMAT)
        .map_err(|_| Error::InvalidDate(form.date.clone()))?;

    if date > today {
        return Err(Error::FutureDate(date));
    }

    let source = form.source.trim();
    if source.is_empty() {
        return Err(Error::EmptySource);
    }

    Ok(NewCashCollection {
        amount_received: amount,
        source: source.to_owned(),
        amount_received_date: date,
        remark: form.remark.trim().to_owned(),
    })
}
