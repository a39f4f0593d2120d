//! Implements a struct that holds the state shared by the dashboard's route handlers.

use crate::api::ApiClient;

/// The state of the dashboard server.
///
/// Feature modules extract the pieces they need via `FromRef` on their own
/// state structs.
#[derive(Debug, Clone)]
pub struct AppState {
    /// The configured backend API client.
    pub api: ApiClient,
}

impl AppState {
    /// Create a new [AppState] around a configured backend client.
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }
}
