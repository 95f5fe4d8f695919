//! Ticket collection state and reducer.
//!
//! The collection is a `Vec` so that the order the service returned is the
//! order the board shows. Ids stay unique under every action sequence.

use crate::reducer::{Change, Reducer};
use crate::types::{Ticket, TicketId, TicketPatch, UserId};

/// The authoritative ticket collection
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketState {
    /// Tickets in display order
    pub tickets: Vec<Ticket>,
}

impl TicketState {
    /// Creates a state holding `tickets`
    #[must_use]
    pub const fn new(tickets: Vec<Ticket>) -> Self {
        Self { tickets }
    }

    /// All tickets in display order
    #[must_use]
    pub fn all(&self) -> &[Ticket] {
        &self.tickets
    }

    /// Looks a ticket up by id
    #[must_use]
    pub fn get(&self, id: TicketId) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Whether a ticket with `id` is present
    #[must_use]
    pub fn contains(&self, id: TicketId) -> bool {
        self.get(id).is_some()
    }

    /// Completed tickets, in display order
    #[must_use]
    pub fn completed(&self) -> Vec<Ticket> {
        self.tickets.iter().filter(|t| t.completed).cloned().collect()
    }

    /// Pending tickets, in display order
    #[must_use]
    pub fn pending(&self) -> Vec<Ticket> {
        self.tickets.iter().filter(|t| !t.completed).cloned().collect()
    }

    /// Tickets assigned to `user`, in display order
    #[must_use]
    pub fn by_assignee(&self, user: UserId) -> Vec<Ticket> {
        self.tickets
            .iter()
            .filter(|t| t.assignee_id == Some(user))
            .cloned()
            .collect()
    }

    /// Number of tickets
    #[must_use]
    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    /// Whether there are no tickets
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

/// Mutations accepted by the ticket store
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TicketAction {
    /// Replace the whole collection with a fetch result
    SetTickets(Vec<Ticket>),
    /// Append a ticket that already carries its server-assigned id
    AddTicket(Ticket),
    /// Merge fields into an existing ticket
    UpdateTicket {
        /// Ticket to update
        id: TicketId,
        /// Fields to merge
        patch: TicketPatch,
    },
    /// Remove a ticket
    DeleteTicket {
        /// Ticket to remove
        id: TicketId,
    },
}

/// Reducer for the ticket store
#[derive(Clone, Copy, Debug, Default)]
pub struct TicketReducer;

impl Reducer for TicketReducer {
    type State = TicketState;
    type Action = TicketAction;

    fn reduce(&self, state: &mut TicketState, action: TicketAction) -> Change {
        match action {
            TicketAction::SetTickets(tickets) => {
                state.tickets = tickets;
                Change::Committed
            }

            TicketAction::AddTicket(ticket) => {
                if let Some(existing) = state.tickets.iter_mut().find(|t| t.id == ticket.id) {
                    tracing::warn!(
                        ticket_id = %ticket.id,
                        "Ticket already present, replacing it in place"
                    );
                    *existing = ticket;
                } else {
                    state.tickets.push(ticket);
                }
                Change::Committed
            }

            TicketAction::UpdateTicket { id, patch } => {
                match state.tickets.iter_mut().find(|t| t.id == id) {
                    Some(ticket) => {
                        if ticket.apply(&patch) {
                            Change::Committed
                        } else {
                            Change::Unchanged
                        }
                    }
                    None => {
                        tracing::debug!(ticket_id = %id, "Update for unknown ticket ignored");
                        Change::Unchanged
                    }
                }
            }

            TicketAction::DeleteTicket { id } => {
                let before = state.tickets.len();
                state.tickets.retain(|t| t.id != id);
                if state.tickets.len() == before {
                    tracing::debug!(ticket_id = %id, "Delete for unknown ticket ignored");
                    Change::Unchanged
                } else {
                    Change::Committed
                }
            }
        }
    }
}
