//! Ticket board built on the Ticket Desk runtime.
//!
//! - [`TicketBoard`]: mounts the fetch hooks and derives the page state
//! - [`AddTicketForm`]: the add-ticket dialog
//! - [`BoardView`]: loading, error, empty, no-match, or the filtered rows

/// Page model
pub mod board;
/// Add-ticket dialog
pub mod form;
/// Rendered page states
pub mod view;

pub use board::TicketBoard;
pub use form::AddTicketForm;
pub use view::{BoardView, Resource, TicketRow};
