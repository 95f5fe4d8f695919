//! # Ticket Desk Core
//!
//! Core types and pure logic for the Ticket Desk client.
//!
//! This crate holds everything that does not touch the network:
//!
//! - **Types**: `Ticket`, `User` and their identifiers, patches and request bodies
//! - **Reducers**: the synchronous mutation rules behind the ticket and user stores
//! - **Filter**: the derived, order-preserving view over the ticket collection
//!
//! ## Core Concepts
//!
//! - **State**: The authoritative in-memory collection for one entity kind
//! - **Action**: Every mutation a store accepts (hydrate, add, update, delete)
//! - **Reducer**: Pure function `(State, Action) → Change`
//!
//! Identity is always assigned by the remote service. Nothing in this crate
//! ever generates an id.
//!
//! ## Example
//!
//! ```
//! use ticket_desk_core::reducer::{Change, Reducer};
//! use ticket_desk_core::ticket::{TicketAction, TicketReducer, TicketState};
//! use ticket_desk_core::types::{Ticket, TicketId, TicketPatch};
//!
//! let mut state = TicketState::default();
//! let ticket = Ticket::new(TicketId::new(7), "Fix login bug");
//!
//! assert_eq!(
//!     TicketReducer.reduce(&mut state, TicketAction::AddTicket(ticket)),
//!     Change::Committed
//! );
//!
//! // Updating an unknown ticket is a no-op
//! let change = TicketReducer.reduce(
//!     &mut state,
//!     TicketAction::UpdateTicket {
//!         id: TicketId::new(99),
//!         patch: TicketPatch::completed(true),
//!     },
//! );
//! assert_eq!(change, Change::Unchanged);
//! ```

/// Domain types: tickets, users, identifiers and patches
pub mod types;

/// Ticket collection state and its reducer
pub mod ticket;

/// User collection state and its reducer
pub mod user;

/// Derived filtering over the ticket collection
pub mod filter;

/// Client-side validation errors
pub mod error;

/// Reducer module - the core trait behind every store
///
/// Reducers are pure functions: `(State, Action) → Change`
///
/// They contain all mutation rules and are deterministic and testable
/// without a runtime.
pub mod reducer {
    /// Outcome of reducing one action
    ///
    /// Stores only notify observers for [`Change::Committed`] actions.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub enum Change {
        /// State was modified
        Committed,
        /// The action did not match anything; state is untouched
        Unchanged,
    }

    impl Change {
        /// Whether the state was modified
        #[must_use]
        pub const fn is_committed(self) -> bool {
            matches!(self, Self::Committed)
        }
    }

    /// The Reducer trait - core abstraction for store mutations
    ///
    /// # Type Parameters
    ///
    /// - `State`: The collection this reducer operates on
    /// - `Action`: The mutations this reducer accepts
    ///
    /// # Example
    ///
    /// ```ignore
    /// impl Reducer for TicketReducer {
    ///     type State = TicketState;
    ///     type Action = TicketAction;
    ///
    ///     fn reduce(&self, state: &mut TicketState, action: TicketAction) -> Change {
    ///         match action {
    ///             TicketAction::SetTickets(tickets) => {
    ///                 state.tickets = tickets;
    ///                 Change::Committed
    ///             }
    ///             _ => Change::Unchanged,
    ///         }
    ///     }
    /// }
    /// ```
    pub trait Reducer {
        /// The state type this reducer operates on
        type State;

        /// The action type this reducer processes
        type Action;

        /// Apply an action to state in place
        ///
        /// Must run to completion without suspending: the store holds its
        /// write lock for the whole call, which is what makes every mutation
        /// atomic for observers.
        fn reduce(&self, state: &mut Self::State, action: Self::Action) -> Change;
    }
}

pub use error::ValidationError;
pub use filter::{AssigneeFilter, FilterParseError, StatusFilter, TicketFilter};
pub use reducer::{Change, Reducer};
pub use ticket::{TicketAction, TicketReducer, TicketState};
pub use types::{Entity, NewTicket, Ticket, TicketId, TicketPatch, User, UserId, UserPatch};
pub use user::{UserAction, UserReducer, UserState};
