//! The HTTP client for the backend REST API.

use serde::{Serialize, de::DeserializeOwned};

use crate::{Error, endpoints::format_endpoint, selection::OptionId};

use super::models::{
    ArmUser, CashCollection, Catalogue, HistoryResponse, NewCashCollection, StaffAccess,
};

// Backend endpoint paths, relative to the configured base URL.
const CATALOGUE_PATH: &str = "/api/regions-branches-centres/all";
const USER_PATH: &str = "/api/users/{user_id}";
const ARM_USERS_PATH: &str = "/api/auth/arm-users";
const COLLECTIONS_PATH: &str = "/api/external-cash-collections/";
const COLLECTION_HISTORY_PATH: &str = "/api/external-cash-collections/history";

/// Explicit configuration for the backend client.
///
/// Handed to [ApiClient::new] at startup; nothing here is read from process
/// globals after construction.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Base URL of the backend API, e.g. `https://api.example.com`.
    pub base_url: String,
    /// The bearer token attached to every request. Requests are not sent
    /// when this is `None`; callers get [Error::AuthMissing] instead.
    pub auth_token: Option<String>,
}

/// The backend REST API client.
///
/// Cloning is cheap: the underlying HTTP client is reference counted.
#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
    auth_token: Option<String>,
}

impl ApiClient {
    /// Create a client from its configuration.
    pub fn new(config: ClientConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: config.base_url.trim_end_matches('/').to_owned(),
            auth_token: config.auth_token,
        }
    }

    /// The full region/branch/centre catalogue.
    pub(crate) async fn catalogue(&self) -> Result<Catalogue, Error> {
        self.get_json(CATALOGUE_PATH).await
    }

    /// The current access selection for one staff member.
    pub(crate) async fn staff_access(&self, staff_id: &OptionId) -> Result<StaffAccess, Error> {
        self.get_json(&format_endpoint(USER_PATH, staff_id.as_str()))
            .await
    }

    /// Replace a staff member's access selection with `access`.
    ///
    /// The body always carries all three categories; the backend treats the
    /// submission as the new selection, not a delta.
    pub(crate) async fn update_staff_access(
        &self,
        staff_id: &OptionId,
        access: &StaffAccess,
    ) -> Result<(), Error> {
        let token = self.bearer_token()?;
        let url = self.url(&format_endpoint(USER_PATH, staff_id.as_str()));

        self.http
            .put(url)
            .bearer_auth(token)
            .json(access)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }

    /// All ARM users with their cash-in-hand positions.
    pub(crate) async fn arm_users(&self) -> Result<Vec<ArmUser>, Error> {
        self.get_json(ARM_USERS_PATH).await
    }

    /// Record a new external cash collection.
    pub(crate) async fn create_collection(
        &self,
        collection: &NewCashCollection,
    ) -> Result<(), Error> {
        self.post_json(COLLECTIONS_PATH, collection).await
    }

    /// The full collection history, newest data as the backend returns it.
    pub(crate) async fn collection_history(&self) -> Result<Vec<CashCollection>, Error> {
        let response: HistoryResponse = self.get_json(COLLECTION_HISTORY_PATH).await?;

        Ok(response.data)
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn bearer_token(&self) -> Result<&str, Error> {
        // Without a token the backend would reject the request anyway, so
        // fail before sending rather than after.
        self.auth_token.as_deref().ok_or(Error::AuthMissing)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        let token = self.bearer_token()?;

        let body = self
            .http
            .get(self.url(path))
            .bearer_auth(token)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        serde_json::from_str(&body).map_err(|error| Error::InvalidResponse(error.to_string()))
    }

    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<(), Error> {
        let token = self.bearer_token()?;

        self.http
            .post(self.url(path))
            .bearer_auth(token)
            .json(body)
            .send()
            .await?
            .error_for_status()?;

        Ok(())
    }
}
