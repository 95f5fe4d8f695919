//! Request lifecycle shared by the hooks

/// Where a hook's request currently stands
///
/// `E` is the error the hook reports: [`ApiError`](ticket_desk_client::ApiError)
/// for fetches, [`HookError`](crate::HookError) for creation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Phase<E> {
    /// Nothing has been requested yet, or the last error was cleared
    Idle,
    /// A request is in flight
    Loading,
    /// The most recently settled request succeeded
    Succeeded,
    /// The most recently settled request failed
    Failed(E),
}

impl<E> Phase<E> {
    /// A request is in flight
    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// No request is in flight
    #[must_use]
    pub const fn is_settled(&self) -> bool {
        !self.is_loading()
    }

    /// Error of the last settled request, if it failed
    #[must_use]
    pub const fn error(&self) -> Option<&E> {
        match self {
            Self::Failed(error) => Some(error),
            _ => None,
        }
    }
}

impl<E> Default for Phase<E> {
    fn default() -> Self {
        Self::Idle
    }
}
