//! # Ticket Desk Testing
//!
//! Testing utilities and helpers for the Ticket Desk client.
//!
//! This crate provides:
//! - [`MockTransport`]: scripted responses, recorded calls, optional delays
//! - [`fixtures`]: the sample board and service wiring
//! - [`ReducerTest`]: Given-When-Then assertions for reducers
//!
//! ## Example
//!
//! ```ignore
//! use std::sync::Arc;
//! use ticket_desk_client::Method;
//! use ticket_desk_testing::{MockTransport, fixtures};
//!
//! #[tokio::test]
//! async fn lists_tickets() {
//!     let transport = Arc::new(MockTransport::new());
//!     transport.respond(
//!         Method::Get,
//!         "/tickets",
//!         fixtures::tickets_json(&fixtures::sample_tickets()),
//!     );
//!
//!     let (tickets, _users) = fixtures::services(&transport);
//!     assert_eq!(tickets.list().await.ok(), Some(fixtures::sample_tickets()));
//! }
//! ```

/// Test data and service wiring
pub mod fixtures;

/// Scripted transport double
pub mod mock_transport;


/// Tracing for tests
///
/// Installs a `fmt` subscriber writing through the test harness, filtered
/// by `RUST_LOG` (default `warn`). Safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_test_writer()
        .try_init();
}

// Re-export commonly used items
pub use mock_transport::MockTransport;
pub use reducer_test::ReducerTest;
