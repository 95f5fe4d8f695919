//! Ticket endpoint bindings

use crate::{api::ApiClient, error::ApiError};
use serde::de::IgnoredAny;
use ticket_desk_core::{NewTicket, Ticket, TicketId, UserId};

const BASE_PATH: &str = "/tickets";

/// Typed bindings for `/tickets`
///
/// Pure request/response mapping: no state, no retries, no caching.
#[derive(Clone, Debug)]
pub struct TicketService {
    api: ApiClient,
}

impl TicketService {
    /// Creates the service over an API client
    #[must_use]
    pub const fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// `GET /tickets`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn list(&self) -> Result<Vec<Ticket>, ApiError> {
        self.api.get(BASE_PATH).await
    }

    /// `GET /tickets/{id}`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn get(&self, id: TicketId) -> Result<Ticket, ApiError> {
        self.api.get(&format!("{BASE_PATH}/{id}")).await
    }

    /// `POST /tickets` with `{description}`
    ///
    /// The returned ticket carries the id the service assigned.
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn create(&self, ticket: &NewTicket) -> Result<Ticket, ApiError> {
        self.api
            .post(BASE_PATH, Some(ApiClient::json(ticket)?))
            .await
    }

    /// `PUT /tickets/{id}/assign/{userId}`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn assign_user(&self, ticket: TicketId, user: UserId) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .put(&format!("{BASE_PATH}/{ticket}/assign/{user}"), None)
            .await?;
        Ok(())
    }

    /// `PUT /tickets/{id}/unassign`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn unassign_user(&self, ticket: TicketId) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .put(&format!("{BASE_PATH}/{ticket}/unassign"), None)
            .await?;
        Ok(())
    }

    /// `PUT /tickets/{id}/complete`
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn complete(&self, ticket: TicketId) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .put(&format!("{BASE_PATH}/{ticket}/complete"), None)
            .await?;
        Ok(())
    }

    /// `DELETE /tickets/{id}/complete` (marks the ticket incomplete)
    ///
    /// # Errors
    ///
    /// Returns the normalized [`ApiError`] on any failure.
    pub async fn uncomplete(&self, ticket: TicketId) -> Result<(), ApiError> {
        let _: IgnoredAny = self
            .api
            .delete(&format!("{BASE_PATH}/{ticket}/complete"))
            .await?;
        Ok(())
    }
}
