//! What the board shows

use std::fmt;
use ticket_desk_core::{Ticket, User};

/// Fallback when a failure carries no message
pub const UNKNOWN_ERROR: &str = "Unknown error occurred";

/// Remote collection behind a loading or error screen
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resource {
    /// `GET /tickets`
    Tickets,
    /// `GET /users`
    Users,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Tickets => f.write_str("tickets"),
            Self::Users => f.write_str("users"),
        }
    }
}

/// One ticket card with its resolved assignee
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TicketRow {
    /// The ticket as stored
    pub ticket: Ticket,
    /// Assignee, when assigned to a user the board knows
    pub assignee: Option<User>,
}

impl TicketRow {
    /// Status badge text
    #[must_use]
    pub const fn status_label(&self) -> &'static str {
        if self.ticket.completed {
            "Completed"
        } else {
            "Pending"
        }
    }

    /// Assignee line
    #[must_use]
    pub fn assignee_label(&self) -> String {
        self.assignee.as_ref().map_or_else(
            || "Unassigned".to_string(),
            |user| format!("Assigned to {}", user.name),
        )
    }
}

impl fmt::Display for TicketRow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "#{} {} [{}] {}",
            self.ticket.id,
            self.ticket.description,
            self.status_label(),
            self.assignee_label()
        )
    }
}

/// Whole-page state, checked in this order
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum BoardView {
    /// A collection is still loading
    Loading(Resource),
    /// A collection failed to load; offer a retry
    Error {
        /// Which collection failed
        resource: Resource,
        /// Failure message
        message: String,
    },
    /// The store holds no tickets at all
    Empty,
    /// Tickets exist but the filter hides all of them
    NoMatches,
    /// Filtered tickets in store order
    List(Vec<TicketRow>),
}

impl fmt::Display for BoardView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Loading(resource) => write!(f, "Loading {resource}..."),
            Self::Error { resource, message } => {
                writeln!(f, "Error loading {resource}")?;
                writeln!(f, "{message}")?;
                f.write_str("[Try Again]")
            }
            Self::Empty => {
                writeln!(f, "No tickets found.")?;
                f.write_str("Create your first ticket to get started.")
            }
            Self::NoMatches => {
                writeln!(f, "No tickets match your filters.")?;
                f.write_str("Try adjusting your search criteria.")
            }
            Self::List(rows) => {
                let mut first = true;
                for row in rows {
                    if !first {
                        writeln!(f)?;
                    }
                    first = false;
                    write!(f, "{row}")?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ticket_desk_core::{TicketId, UserId};

    #[test]
    fn test_row_labels() {
        let mut ticket = Ticket::new(TicketId::new(2), "Update user profile");
        ticket.completed = true;
        ticket.assignee_id = Some(UserId::new(1));
        let row = TicketRow {
            ticket,
            assignee: Some(User::new(UserId::new(1), "Alice")),
        };

        assert_eq!(
            row.to_string(),
            "#2 Update user profile [Completed] Assigned to Alice"
        );
    }

    #[test]
    fn test_unassigned_row() {
        let row = TicketRow {
            ticket: Ticket::new(TicketId::new(1), "Fix login bug"),
            assignee: None,
        };
        assert_eq!(row.to_string(), "#1 Fix login bug [Pending] Unassigned");
    }

    #[test]
    fn test_screens() {
        assert_eq!(
            BoardView::Loading(Resource::Users).to_string(),
            "Loading users..."
        );
        assert_eq!(
            BoardView::Error {
                resource: Resource::Tickets,
                message: "Network Error".to_string(),
            }
            .to_string(),
            "Error loading tickets\nNetwork Error\n[Try Again]"
        );
        assert!(BoardView::Empty.to_string().starts_with("No tickets found."));
        assert!(
            BoardView::NoMatches
                .to_string()
                .starts_with("No tickets match your filters.")
        );
    }
}
