//! Server-confirmed ticket mutations
//!
//! Each operation calls the service first and only patches the store after
//! the server accepted the change. A failed request leaves the store as it
//! was.

use crate::stores::TicketStore;
use ticket_desk_client::{ApiError, TicketService};
use ticket_desk_core::{TicketId, TicketPatch, UserId};

/// Ticket mutations that keep the store in sync with the server
#[derive(Clone, Debug)]
pub struct TicketActions {
    service: TicketService,
    store: TicketStore,
}

impl TicketActions {
    /// Wire a service to a store
    #[must_use]
    pub const fn new(service: TicketService, store: TicketStore) -> Self {
        Self { service, store }
    }

    /// Mark a ticket completed
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn complete(&self, id: TicketId) -> Result<(), ApiError> {
        self.service.complete(id).await?;
        self.store.update_ticket(id, TicketPatch::completed(true)).await;
        Ok(())
    }

    /// Mark a ticket not completed
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn uncomplete(&self, id: TicketId) -> Result<(), ApiError> {
        self.service.uncomplete(id).await?;
        self.store.update_ticket(id, TicketPatch::completed(false)).await;
        Ok(())
    }

    /// Flip completion based on the stored ticket
    ///
    /// A ticket missing from the store is treated as pending. Returns the new
    /// completion flag.
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    pub async fn toggle_complete(&self, id: TicketId) -> Result<bool, ApiError> {
        let completed = self
            .store
            .state(|s| s.get(id).is_some_and(|t| t.completed))
            .await;

        if completed {
            self.uncomplete(id).await?;
        } else {
            self.complete(id).await?;
        }
        Ok(!completed)
    }

    /// Assign a ticket to a user
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn assign(&self, id: TicketId, user: UserId) -> Result<(), ApiError> {
        self.service.assign_user(id, user).await?;
        self.store.update_ticket(id, TicketPatch::assigned(user)).await;
        Ok(())
    }

    /// Clear a ticket's assignee
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    #[tracing::instrument(skip(self))]
    pub async fn unassign(&self, id: TicketId) -> Result<(), ApiError> {
        self.service.unassign_user(id).await?;
        self.store.update_ticket(id, TicketPatch::unassigned()).await;
        Ok(())
    }
}
