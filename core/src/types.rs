//! Domain types for the ticket tracker.
//!
//! Tickets and users are owned by their stores. Identifiers are assigned by
//! the remote service and only ever flow *into* the client.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Server-assigned identifier of a ticket
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TicketId(i64);

impl TicketId {
    /// Wraps a raw identifier received from the service
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for TicketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Server-assigned identifier of a user
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i64);

impl UserId {
    /// Wraps a raw identifier received from the service
    #[must_use]
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    /// Returns the raw identifier
    #[must_use]
    pub const fn get(self) -> i64 {
        self.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Anything a store keeps, keyed by a server-assigned id
pub trait Entity {
    /// Identifier type
    type Id: Copy + Eq + fmt::Display;

    /// Returns the entity's identifier
    fn id(&self) -> Self::Id;
}

/// A unit of work
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ticket {
    /// Identifier assigned by the service on creation
    pub id: TicketId,
    /// What needs doing
    pub description: String,
    /// Whether the work is done
    #[serde(default)]
    pub completed: bool,
    /// Assigned user, if any
    #[serde(default)]
    pub assignee_id: Option<UserId>,
}

impl Ticket {
    /// Creates a pending, unassigned ticket with a known id
    ///
    /// The id must come from the service; this is the shape the service
    /// returns for a freshly created ticket.
    #[must_use]
    pub fn new(id: TicketId, description: impl Into<String>) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            assignee_id: None,
        }
    }

    /// Whether a user is assigned
    #[must_use]
    pub const fn is_assigned(&self) -> bool {
        self.assignee_id.is_some()
    }

    /// Merges the fields present in `patch`
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply(&mut self, patch: &TicketPatch) -> bool {
        let before = self.clone();

        if let Some(description) = &patch.description {
            self.description.clone_from(description);
        }
        if let Some(completed) = patch.completed {
            self.completed = completed;
        }
        if let Some(assignee_id) = patch.assignee_id {
            self.assignee_id = assignee_id;
        }

        *self != before
    }
}

impl Entity for Ticket {
    type Id = TicketId;

    fn id(&self) -> TicketId {
        self.id
    }
}

/// A person tickets can be assigned to
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Identifier assigned by the service
    pub id: UserId,
    /// Display name
    pub name: String,
}

impl User {
    /// Creates a user with a known id
    #[must_use]
    pub fn new(id: UserId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
        }
    }

    /// Merges the fields present in `patch`
    ///
    /// Returns `true` if any field actually changed.
    pub fn apply(&mut self, patch: &UserPatch) -> bool {
        match &patch.name {
            Some(name) if *name != self.name => {
                self.name.clone_from(name);
                true
            }
            _ => false,
        }
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

/// Partial ticket fields for an in-place update
///
/// `None` means "leave as is". For the assignee, `Some(None)` clears it.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketPatch {
    /// New description
    pub description: Option<String>,
    /// New completion flag
    pub completed: Option<bool>,
    /// New assignee (`Some(None)` unassigns)
    pub assignee_id: Option<Option<UserId>>,
}

impl TicketPatch {
    /// Patch that only sets the completion flag
    #[must_use]
    pub const fn completed(completed: bool) -> Self {
        Self {
            description: None,
            completed: Some(completed),
            assignee_id: None,
        }
    }

    /// Patch that only assigns a user
    #[must_use]
    pub const fn assigned(user: UserId) -> Self {
        Self {
            description: None,
            completed: None,
            assignee_id: Some(Some(user)),
        }
    }

    /// Patch that only clears the assignee
    #[must_use]
    pub const fn unassigned() -> Self {
        Self {
            description: None,
            completed: None,
            assignee_id: Some(None),
        }
    }

    /// Patch that only replaces the description
    #[must_use]
    pub fn description(description: impl Into<String>) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::default()
        }
    }

    /// Whether the patch carries no fields
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.description.is_none() && self.completed.is_none() && self.assignee_id.is_none()
    }
}

/// Partial user fields for an in-place update
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UserPatch {
    /// New display name
    pub name: Option<String>,
}

/// Body of the create-ticket request
///
/// Only the description is sent; id, completion and assignee are decided
/// by the service.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct NewTicket {
    description: String,
}

impl NewTicket {
    /// Validates and trims a description
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::EmptyDescription`] if nothing but
    /// whitespace is left after trimming.
    pub fn new(description: &str) -> Result<Self, ValidationError> {
        let description = description.trim();
        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }

        Ok(Self {
            description: description.to_string(),
        })
    }

    /// The trimmed description
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ticket_wire_format_uses_camel_case() {
        let ticket = Ticket {
            id: TicketId::new(2),
            description: "Update user profile".to_string(),
            completed: true,
            assignee_id: Some(UserId::new(1)),
        };

        let json = serde_json::to_value(&ticket).unwrap_or_default();
        assert_eq!(
            json,
            serde_json::json!({
                "id": 2,
                "description": "Update user profile",
                "completed": true,
                "assigneeId": 1,
            })
        );
    }

    #[test]
    fn ticket_null_assignee_is_unassigned() {
        let parsed: Result<Ticket, _> = serde_json::from_str(
            r#"{"id":1,"description":"Fix login bug","assigneeId":null,"completed":false}"#,
        );
        assert_eq!(
            parsed.ok(),
            Some(Ticket::new(TicketId::new(1), "Fix login bug"))
        );
    }

    #[test]
    fn ticket_missing_defaults_are_filled() {
        let parsed: Result<Ticket, _> =
            serde_json::from_str(r#"{"id":5,"description":"Rotate keys"}"#);
        let Ok(ticket) = parsed else {
            unreachable!("ticket without defaults should parse");
        };
        assert!(!ticket.completed);
        assert!(!ticket.is_assigned());
    }

    #[test]
    fn patch_merges_only_present_fields() {
        let mut ticket = Ticket::new(TicketId::new(1), "Fix login bug");

        assert!(ticket.apply(&TicketPatch::assigned(UserId::new(3))));
        assert_eq!(ticket.assignee_id, Some(UserId::new(3)));
        assert_eq!(ticket.description, "Fix login bug");

        assert!(ticket.apply(&TicketPatch::unassigned()));
        assert_eq!(ticket.assignee_id, None);

        assert!(!ticket.apply(&TicketPatch::default()));
        assert!(!ticket.apply(&TicketPatch::completed(false)));
    }

    #[test]
    fn new_ticket_trims_description() {
        let request = NewTicket::new("  Fix login bug \n");
        assert_eq!(
            request.as_ref().map(NewTicket::description),
            Ok("Fix login bug")
        );
    }

    #[test]
    fn new_ticket_rejects_blank_description() {
        assert_eq!(NewTicket::new(""), Err(ValidationError::EmptyDescription));
        assert_eq!(
            NewTicket::new(" \t\n"),
            Err(ValidationError::EmptyDescription)
        );
    }

    #[test]
    fn new_ticket_body_is_description_only() {
        let body = NewTicket::new("Fix login bug").map(|t| serde_json::to_value(&t).ok());
        assert_eq!(
            body,
            Ok(Some(serde_json::json!({ "description": "Fix login bug" })))
        );
    }

    #[test]
    fn new_ticket_body_is_always_validated() {
        let padded = NewTicket::new("  Write docs\t").map(|t| serde_json::to_value(&t).ok());
        let blank = NewTicket::new("   ").map(|t| serde_json::to_value(&t).ok());

        assert_eq!(
            padded,
            Ok(Some(serde_json::json!({ "description": "Write docs" })))
        );
        assert_eq!(blank, Err(ValidationError::EmptyDescription));
    }
}
