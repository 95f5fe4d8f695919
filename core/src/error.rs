//! Client-side validation errors
//!
//! These are raised before any request is built. They never reach the
//! transport layer.

use thiserror::Error;

/// A client-side precondition failed
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    /// Ticket description is empty or whitespace only
    #[error("Description is required")]
    EmptyDescription,
}
