//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post, put},
};
use tower_http::services::ServeDir;

use crate::{
    AppState,
    collection::{
        create_collection_endpoint, get_centre_options_partial, get_history_page,
        get_new_collection_page,
    },
    endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    staff::{get_access_page, get_staff_page, update_access_endpoint},
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::HISTORY_VIEW, get(get_history_page))
        .route(endpoints::NEW_COLLECTION_VIEW, get(get_new_collection_page))
        .route(endpoints::STAFF_VIEW, get(get_staff_page))
        .route(endpoints::EDIT_ACCESS_VIEW, get(get_access_page))
        .route(endpoints::POST_COLLECTION, post(create_collection_endpoint))
        .route(endpoints::PUT_ACCESS, put(update_access_endpoint))
        .route(
            endpoints::CENTRE_OPTIONS_PARTIAL,
            get(get_centre_options_partial),
        )
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the collection history page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::HISTORY_VIEW)
}
