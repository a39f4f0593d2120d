//! The 404 page shown for unknown routes and missing records.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::html::error_view;

/// Handle requests for routes that do not exist.
pub async fn get_404_not_found() -> Response {
    get_404_not_found_response()
}

/// Get a response with the 404 page and the NOT FOUND status code.
pub fn get_404_not_found_response() -> Response {
    let page = error_view(
        "Not Found",
        "404",
        "Sorry, we can't find that page.",
        "Check the address, or head back and try again.",
    );

    (StatusCode::NOT_FOUND, page).into_response()
}
