//! Data-access hooks
//!
//! Each hook pairs a service call with a store mutation and exposes the
//! request lifecycle (loading flag, last error) to the view layer.

mod actions;
mod create;
mod fetch;

pub use actions::TicketActions;
pub use create::CreateTicketHook;
pub use fetch::{FetchHook, Fetcher, TicketsFetcher, UsersFetcher, use_tickets, use_users};
