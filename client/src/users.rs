//! User endpoint bindings

use crate::{api::ApiClient, error::ApiError};
use ticket_desk_core::{User, UserId};

const BASE_PATH: &str = "/users";

/// Typed bindings for `/users` (read only)
#[derive(Clone, Debug)]
pub struct UserService {
    api: ApiClient,
}

impl UserService {
    /// Creates the service over an API client
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /users`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn list(&self) -> Result<Vec<User>, ApiError> {
        self.api.get(BASE_PATH).await
    }

    /// `GET /users/{id}`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn get(&self, id: UserId) -> Result<User, ApiError> {
        self.api.get(&format!("{BASE_PATH}/{id}")).await
    }
}
