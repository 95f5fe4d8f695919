//! # Ticket Desk API Client
//!
//! Transport layer and typed resource services for the Ticket Desk REST API.
//!
//! ## Example
//!
//! ```no_run
//! use std::sync::Arc;
//! use ticket_desk_client::{ApiClient, ClientConfig, HttpTransport, TicketService};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Reads TICKET_DESK_API_URL and friends
//!     let transport = HttpTransport::new(ClientConfig::from_env())?;
//!     let tickets = TicketService::new(ApiClient::new(Arc::new(transport)));
//!
//!     for ticket in tickets.list().await? {
//!         println!("#{} {}", ticket.id, ticket.description);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Layers
//!
//! - [`Transport`]: sends one request, normalizes every failure into [`ApiError`]
//! - [`ApiClient`]: `get`/`post`/`put`/`delete`/`patch` with typed decoding
//! - [`TicketService`], [`UserService`]: endpoint bindings, no state

pub mod api;
pub mod config;
pub mod error;
pub mod tickets;
pub mod transport;
pub mod users;

// Re-export main types for convenience
pub use api::ApiClient;
pub use config::ClientConfig;
pub use error::{ApiError, ApiErrorKind};
pub use tickets::TicketService;
pub use transport::{ApiRequest, HttpTransport, Method, Transport};
pub use users::UserService;
