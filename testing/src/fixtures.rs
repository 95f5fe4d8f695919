//! Test data shared across crates

use serde_json::{Value, json};
use std::sync::Arc;
use ticket_desk_client::{ApiClient, TicketService, UserService};
use ticket_desk_core::{Ticket, TicketId, User, UserId};

use crate::MockTransport;

/// A pending, unassigned ticket
#[must_use]
pub fn ticket(id: i64, description: &str) -> Ticket {
    Ticket::new(TicketId::new(id), description)
}

/// A ticket with every field chosen
#[must_use]
pub fn ticket_with(id: i64, description: &str, completed: bool, assignee: Option<i64>) -> Ticket {
    Ticket {
        id: TicketId::new(id),
        description: description.to_string(),
        completed,
        assignee_id: assignee.map(UserId::new),
    }
}

/// A user
#[must_use]
pub fn user(id: i64, name: &str) -> User {
    User::new(UserId::new(id), name)
}

/// The two-ticket board used throughout the tests:
/// `#1 "Fix login bug"` pending and unassigned,
/// `#2 "Update user profile"` completed and assigned to user 1
#[must_use]
pub fn sample_tickets() -> Vec<Ticket> {
    vec![
        ticket(1, "Fix login bug"),
        ticket_with(2, "Update user profile", true, Some(1)),
    ]
}

/// `[{id: 1, name: "Alice"}]`
#[must_use]
pub fn sample_users() -> Vec<User> {
    vec![user(1, "Alice")]
}

/// JSON payload for a list of tickets, as the service sends it
#[must_use]
pub fn tickets_json(tickets: &[Ticket]) -> Value {
    serde_json::to_value(tickets).unwrap_or_else(|_| json!([]))
}

/// JSON payload for a list of users, as the service sends it
#[must_use]
pub fn users_json(users: &[User]) -> Value {
    serde_json::to_value(users).unwrap_or_else(|_| json!([]))
}

/// Services wired to a mock transport
#[must_use]
pub fn services(transport: &Arc<MockTransport>) -> (TicketService, UserService) {
    let api = ApiClient::new(transport.clone());
    (TicketService::new(api.clone()), UserService::new(api))
}
