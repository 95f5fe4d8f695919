//! Ticket and user stores
//!
//! Thin, named operations over [`Store`] for the two collections the board
//! works with. Every operation is a single reducer action, so each one is
//! atomic for subscribers.

use crate::store::Store;
use ticket_desk_core::{
    Change, Ticket, TicketAction, TicketId, TicketPatch, TicketReducer, User, UserAction, UserId,
    UserPatch, UserReducer,
};

/// Shared ticket collection
pub type TicketStore = Store<TicketReducer>;

/// Shared user collection
pub type UserStore = Store<UserReducer>;

impl Store<TicketReducer> {
    /// Replace the whole collection
    pub async fn set_tickets(&self, tickets: Vec<Ticket>) -> Change {
        self.send(TicketAction::SetTickets(tickets)).await
    }

    /// Append a ticket; an existing id is replaced in place
    pub async fn add_ticket(&self, ticket: Ticket) -> Change {
        self.send(TicketAction::AddTicket(ticket)).await
    }

    /// Merge `patch` into the ticket with `id`
    pub async fn update_ticket(&self, id: TicketId, patch: TicketPatch) -> Change {
        self.send(TicketAction::UpdateTicket { id, patch }).await
    }

    /// Remove the ticket with `id`
    pub async fn delete_ticket(&self, id: TicketId) -> Change {
        self.send(TicketAction::DeleteTicket { id }).await
    }

    /// All tickets in insertion order
    pub async fn tickets(&self) -> Vec<Ticket> {
        self.state(|s| s.all().to_vec()).await
    }

    /// Ticket with `id`, if present
    pub async fn ticket(&self, id: TicketId) -> Option<Ticket> {
        self.state(|s| s.get(id).cloned()).await
    }

    /// Tickets marked completed
    pub async fn completed_tickets(&self) -> Vec<Ticket> {
        self.state(ticket_desk_core::TicketState::completed).await
    }

    /// Tickets not yet completed
    pub async fn pending_tickets(&self) -> Vec<Ticket> {
        self.state(ticket_desk_core::TicketState::pending).await
    }

    /// Tickets assigned to `user`
    pub async fn tickets_by_assignee(&self, user: UserId) -> Vec<Ticket> {
        self.state(|s| s.by_assignee(user)).await
    }
}

impl Store<UserReducer> {
    /// Replace the whole collection
    pub async fn set_users(&self, users: Vec<User>) -> Change {
        self.send(UserAction::SetUsers(users)).await
    }

    /// Append a user; an existing id is replaced in place
    pub async fn add_user(&self, user: User) -> Change {
        self.send(UserAction::AddUser(user)).await
    }

    /// Merge `patch` into the user with `id`
    pub async fn update_user(&self, id: UserId, patch: UserPatch) -> Change {
        self.send(UserAction::UpdateUser { id, patch }).await
    }

    /// Remove the user with `id`
    pub async fn delete_user(&self, id: UserId) -> Change {
        self.send(UserAction::DeleteUser { id }).await
    }

    /// All users in insertion order
    pub async fn users(&self) -> Vec<User> {
        self.state(|s| s.all().to_vec()).await
    }

    /// User with `id`, if present
    pub async fn user(&self, id: UserId) -> Option<User> {
        self.state(|s| s.get(id).cloned()).await
    }
}

/// The two process-wide stores
///
/// Build once at startup; clones share state.
#[derive(Clone, Debug, Default)]
pub struct AppStores {
    /// Ticket collection
    pub tickets: TicketStore,
    /// User collection
    pub users: UserStore,
}

impl AppStores {
    /// Empty stores
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}
