//! Cashdesk is a web dashboard for a cash-collection business application.
//!
//! It serves HTML pages for recording external cash collections, browsing
//! the collection history, and managing which regions, branches and centres
//! each staff member may access. All business data lives behind an external
//! backend REST API; this application is a thin, server-rendered client of
//! that API.

#![warn(missing_docs)]

use std::{net::SocketAddr, time::Duration};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_server::Handle;
use maud::Markup;
use time::Date;
use tokio::signal;

mod alert;
mod api;
mod app_state;
mod collection;
mod endpoints;
mod html;
mod internal_server_error;
mod logging;
mod navigation;
mod not_found;
mod routing;
mod selection;
mod staff;

#[cfg(test)]
pub(crate) mod test_utils;

pub use api::{ApiClient, ClientConfig};
pub use app_state::AppState;
pub use logging::{LOG_BODY_LENGTH_LIMIT, logging_middleware};
pub use routing::build_router;

use crate::{
    alert::AlertView,
    internal_server_error::{InternalServerError, render_internal_server_error},
    not_found::get_404_not_found_response,
};

/// An async task that waits for either the ctrl+c or terminate signal, whichever comes first, and
/// then signals the server to shut down gracefully.
///
/// `handle` is a handle to an Axum `Server`.
pub async fn graceful_shutdown(handle: Handle<SocketAddr>) {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::debug!("Received ctrl+c signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
        _ = terminate => {
            tracing::debug!("Received terminate signal.");
            handle.graceful_shutdown(Some(Duration::from_secs(1)));
        },
    }
}

/// The errors that may occur in the application.
#[derive(Debug, thiserror::Error, PartialEq)]
pub enum Error {
    /// The request to the backend API was rejected or the backend was
    /// unreachable.
    ///
    /// The inner string is the transport error for the server logs; clients
    /// only see a generic alert.
    #[error("backend request failed: {0}")]
    Network(String),

    /// No bearer token is configured, so the request was never sent.
    #[error("no backend auth token is configured")]
    AuthMissing,

    /// The requested resource was not found.
    ///
    /// Either the backend returned 404, or a page was requested for a record
    /// that does not exist.
    #[error("the requested resource could not be found")]
    NotFound,

    /// The backend answered with an unexpected non-success status code.
    #[error("backend returned unexpected status {0}")]
    BackendStatus(u16),

    /// The backend response body could not be parsed into the expected shape.
    #[error("could not parse backend response: {0}")]
    InvalidResponse(String),

    /// A non-positive amount was submitted on the collection entry form.
    #[error("{0} is not a valid amount, the amount must be greater than zero")]
    InvalidAmount(String),

    /// A date field could not be parsed as `YYYY-MM-DD`.
    #[error("{0} is not a valid date")]
    InvalidDate(String),

    /// A date in the future was used for a cash collection.
    ///
    /// Collections record cash that has already been received, therefore
    /// future dates are not allowed.
    #[error("{0} is a date in the future, which is not allowed")]
    FutureDate(Date),

    /// The collection entry form was submitted without a source centre.
    #[error("a collection must name the centre the cash came from")]
    EmptySource,
}

impl From<reqwest::Error> for Error {
    fn from(value: reqwest::Error) -> Self {
        match value.status() {
            Some(reqwest::StatusCode::NOT_FOUND) => Error::NotFound,
            Some(status) => Error::BackendStatus(status.as_u16()),
            None => Error::Network(value.to_string()),
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Error::NotFound => get_404_not_found_response(),
            Error::AuthMissing => render_internal_server_error(InternalServerError {
                description: "Backend Authentication Missing",
                fix: "No auth token is configured. Set the BACKEND_TOKEN environment \
                    variable and restart the server.",
            }),
            // Any errors that are not handled above are not intended to be shown to the client.
            error => {
                tracing::error!("An unexpected error occurred: {}", error);
                render_internal_server_error(Default::default())
            }
        }
    }
}

impl Error {
    /// Render this error as a transient alert fragment for htmx requests.
    ///
    /// The alert replaces the alert container contents, so the page
    /// underneath stays interactive with whatever data it already shows.
    fn into_alert_response(self) -> Response {
        let (status_code, alert) = self.into_alert();

        (status_code, alert.into_markup()).into_response()
    }

    /// The alert markup for this error, marked for an out-of-band swap.
    ///
    /// Used by handlers that render an alert next to regular page content,
    /// e.g. the access editor's optimistic re-render after a failed save.
    fn into_oob_alert_markup(self) -> Markup {
        let (_, alert) = self.into_alert();

        alert.into_oob_markup()
    }

    fn into_alert(self) -> (StatusCode, AlertView) {
        match self {
            Error::Network(details) => {
                tracing::error!("backend request failed: {details}");

                (
                    StatusCode::BAD_GATEWAY,
                    AlertView::error(
                        "Could not reach the backend",
                        "The change may not have been saved. It will still show here \
                        until the page is reloaded.",
                    ),
                )
            }
            Error::AuthMissing => (
                StatusCode::INTERNAL_SERVER_ERROR,
                AlertView::error(
                    "Backend authentication missing",
                    "No auth token is configured, so nothing was sent to the backend.",
                ),
            ),
            Error::NotFound => (
                StatusCode::NOT_FOUND,
                AlertView::error(
                    "Record not found",
                    "The backend no longer has this record. Try reloading the page.",
                ),
            ),
            Error::BackendStatus(status) => (
                StatusCode::BAD_GATEWAY,
                AlertView::error(
                    "The backend rejected the request",
                    &format!("The backend answered with status {status}."),
                ),
            ),
            Error::InvalidResponse(details) => {
                tracing::error!("could not parse backend response: {details}");

                (
                    StatusCode::BAD_GATEWAY,
                    AlertView::error(
                        "Unexpected backend response",
                        "The backend sent data this dashboard could not understand.",
                    ),
                )
            }
            Error::InvalidAmount(amount) => (
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid amount",
                    &format!("{amount} is not a valid amount. Enter an amount greater than zero."),
                ),
            ),
            Error::InvalidDate(date) => (
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid collection date",
                    &format!("{date} is not a valid date."),
                ),
            ),
            Error::FutureDate(date) => (
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Invalid collection date",
                    &format!("{date} is a date in the future, which is not allowed."),
                ),
            ),
            Error::EmptySource => (
                StatusCode::BAD_REQUEST,
                AlertView::error(
                    "Missing source centre",
                    "Choose the centre the cash was collected from.",
                ),
            ),
        }
    }
}
