//! # Ticket Desk Runtime
//!
//! Shared state and data access for the Ticket Desk client.
//!
//! ## Core Components
//!
//! - **Store**: reducer-driven state behind a lock, with synchronous listeners
//!   and an action broadcast
//! - **Stores**: the ticket and user collections every view reads from
//! - **Hooks**: fetch-on-mount, create, and mutation helpers that keep the
//!   stores in sync with the server and report loading/error state
//!
//! ## Example
//!
//! ```ignore
//! use ticket_desk_runtime::{AppStores, hooks};
//!
//! let stores = AppStores::new();
//! let tickets = hooks::use_tickets(ticket_service.clone(), stores.tickets.clone());
//!
//! if let Phase::Failed(error) = tickets.settled().await {
//!     eprintln!("Error loading tickets: {error}");
//! }
//!
//! let pending = stores.tickets.pending_tickets().await;
//! ```

/// Request lifecycle
pub mod lifecycle;

/// Reducer-driven store
pub mod store;

/// Ticket and user stores
pub mod stores;

pub mod hooks;

mod error;

pub use error::HookError;
pub use hooks::{CreateTicketHook, FetchHook, TicketActions};
pub use lifecycle::Phase;
pub use store::{Listener, Store, SubscriptionId};
pub use stores::{AppStores, TicketStore, UserStore};
