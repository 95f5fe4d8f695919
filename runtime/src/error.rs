//! Errors surfaced by the hooks

use thiserror::Error;
use ticket_desk_client::ApiError;
use ticket_desk_core::ValidationError;

/// Why a hook operation failed
///
/// Displays as the message the board shows to the user.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum HookError {
    /// Input was rejected before any request was sent
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// The request was sent and failed
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl HookError {
    /// User-facing message
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Whether the failure happened before reaching the network
    #[must_use]
    pub const fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
