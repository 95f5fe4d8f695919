//! Add-ticket dialog

use ticket_desk_core::{Ticket, ValidationError};
use ticket_desk_runtime::{CreateTicketHook, HookError};

/// Open/closed dialog with a single description field
///
/// The dialog stays open with the error shown when creation fails, and
/// cannot be closed while a request is in flight.
#[derive(Debug)]
pub struct AddTicketForm {
    hook: CreateTicketHook,
    open: bool,
    description: String,
    error: Option<String>,
}

impl AddTicketForm {
    /// Closed, empty dialog
    #[must_use]
    pub const fn new(hook: CreateTicketHook) -> Self {
        Self {
            hook,
            open: false,
            description: String::new(),
            error: None,
        }
    }

    /// Show the dialog, clearing any previous creation error
    pub fn open(&mut self) {
        self.hook.reset_error();
        self.error = None;
        self.open = true;
    }

    /// Hide and clear the dialog
    ///
    /// Returns `false` and stays open while a submission is in flight.
    pub fn close(&mut self) -> bool {
        if self.hook.loading() {
            tracing::debug!("Close ignored while submitting");
            return false;
        }
        self.hook.reset_error();
        self.open = false;
        self.description.clear();
        self.error = None;
        true
    }

    /// Replace the field contents
    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    /// Submit the current description
    ///
    /// # Errors
    ///
    /// Returns the validation or request failure; the dialog then stays open
    /// with [`error`](Self::error) set and the input kept.
    pub async fn submit(&mut self) -> Result<Ticket, HookError> {
        if self.description.trim().is_empty() {
            let error = HookError::from(ValidationError::EmptyDescription);
            self.error = Some(error.message());
            return Err(error);
        }

        self.error = None;
        match self.hook.create_ticket(&self.description).await {
            Ok(ticket) => {
                self.description.clear();
                self.open = false;
                Ok(ticket)
            }
            Err(error) => {
                self.error = Some(error.message());
                Err(error)
            }
        }
    }

    /// Whether the dialog is shown
    #[must_use]
    pub const fn is_open(&self) -> bool {
        self.open
    }

    /// Current field contents
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Inline error under the field
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// A submission is in flight
    #[must_use]
    pub fn submitting(&self) -> bool {
        self.hook.loading()
    }
}
