//! Derived filtering over the ticket collection.
//!
//! The visible set is recomputed from scratch on every change of the search
//! text or either selector. It is a pure, order-preserving projection: a
//! ticket survives only if it passes all three criteria.

use crate::types::Ticket;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Completion selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    /// Any completion state
    #[default]
    All,
    /// Only completed tickets
    Completed,
    /// Only tickets still open
    Pending,
}

impl StatusFilter {
    /// Every option, in selector order
    pub const OPTIONS: [Self; 3] = [Self::All, Self::Completed, Self::Pending];

    /// Whether `ticket` passes this selector
    #[must_use]
    pub const fn matches(self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Completed => ticket.completed,
            Self::Pending => !ticket.completed,
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Completed => "Completed",
            Self::Pending => "Pending",
        }
    }
}

/// Assignment selector
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AssigneeFilter {
    /// Any assignment state
    #[default]
    All,
    /// Only tickets with an assignee
    Assigned,
    /// Only tickets without an assignee
    Unassigned,
}

impl AssigneeFilter {
    /// Every option, in selector order
    pub const OPTIONS: [Self; 3] = [Self::All, Self::Assigned, Self::Unassigned];

    /// Whether `ticket` passes this selector
    #[must_use]
    pub const fn matches(self, ticket: &Ticket) -> bool {
        match self {
            Self::All => true,
            Self::Assigned => ticket.assignee_id.is_some(),
            Self::Unassigned => ticket.assignee_id.is_none(),
        }
    }

    const fn label(self) -> &'static str {
        match self {
            Self::All => "All Assignees",
            Self::Assigned => "Assigned",
            Self::Unassigned => "Unassigned",
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl fmt::Display for AssigneeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A selector label did not name any option
#[derive(Clone, Debug, Error, PartialEq, Eq)]
#[error("Unknown {selector} filter: {label:?}")]
pub struct FilterParseError {
    selector: &'static str,
    label: String,
}

impl FromStr for StatusFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterParseError {
                selector: "status",
                label: s.to_string(),
            })
    }
}

impl FromStr for AssigneeFilter {
    type Err = FilterParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|option| option.label().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FilterParseError {
                selector: "assignee",
                label: s.to_string(),
            })
    }
}

/// Current search text and selector values
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Case-insensitive substring of the description
    pub search_term: String,
    /// Completion selector
    pub status: StatusFilter,
    /// Assignment selector
    pub assignee: AssigneeFilter,
}

impl TicketFilter {
    /// Filter that only applies a search term
    #[must_use]
    pub fn search(term: impl Into<String>) -> Self {
        Self {
            search_term: term.into(),
            ..Self::default()
        }
    }

    /// Replaces the completion selector
    #[must_use]
    pub const fn with_status(mut self, status: StatusFilter) -> Self {
        self.status = status;
        self
    }

    /// Replaces the assignment selector
    #[must_use]
    pub const fn with_assignee(mut self, assignee: AssigneeFilter) -> Self {
        self.assignee = assignee;
        self
    }

    /// Whether any criterion narrows the collection
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.search_term.is_empty()
            || self.status != StatusFilter::All
            || self.assignee != AssigneeFilter::All
    }

    /// Whether `ticket` passes every criterion
    #[must_use]
    pub fn matches(&self, ticket: &Ticket) -> bool {
        self.status.matches(ticket)
            && self.assignee.matches(ticket)
            && ticket
                .description
                .to_lowercase()
                .contains(&self.search_term.to_lowercase())
    }

    /// The visible subset of `tickets`, relative order preserved
    #[must_use]
    pub fn apply(&self, tickets: &[Ticket]) -> Vec<Ticket> {
        let needle = self.search_term.to_lowercase();
        tickets
            .iter()
            .filter(|t| {
                self.status.matches(t)
                    && self.assignee.matches(t)
                    && t.description.to_lowercase().contains(&needle)
            })
            .cloned()
            .collect()
    }
}
