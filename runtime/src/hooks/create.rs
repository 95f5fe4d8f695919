//! Ticket creation hook

use crate::error::HookError;
use crate::lifecycle::Phase;
use crate::stores::TicketStore;
use std::sync::Arc;
use ticket_desk_client::TicketService;
use ticket_desk_core::{NewTicket, Ticket};
use tokio::sync::watch;

/// Create-then-insert with a loading flag and a resettable error
///
/// The created ticket is added to the store exactly as the server returned
/// it, so its id is always the server-assigned one.
#[derive(Clone, Debug)]
pub struct CreateTicketHook {
    service: TicketService,
    store: TicketStore,
    phase: Arc<watch::Sender<Phase<HookError>>>,
}

impl CreateTicketHook {
    /// Idle hook
    #[must_use]
    pub fn new(service: TicketService, store: TicketStore) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            service,
            store,
            phase: Arc::new(phase),
        }
    }

    /// Create a ticket from user input
    ///
    /// The description is trimmed first; a blank one fails with
    /// [`HookError::Validation`] without sending anything. On success the
    /// store gains the server's ticket.
    ///
    /// # Errors
    ///
    /// Returns the validation or request error, which is also kept in
    /// [`error`](Self::error) until [`reset_error`](Self::reset_error).
    #[tracing::instrument(skip(self, description))]
    pub async fn create_ticket(&self, description: &str) -> Result<Ticket, HookError> {
        let request = match NewTicket::new(description) {
            Ok(request) => request,
            Err(error) => return Err(self.fail(error.into())),
        };

        self.phase.send_replace(Phase::Loading);
        metrics::counter!("ticket_desk.tickets.create").increment(1);

        match self.service.create(&request).await {
            Ok(ticket) => {
                tracing::info!(id = %ticket.id, "Ticket created");
                self.store.add_ticket(ticket.clone()).await;
                self.phase.send_replace(Phase::Succeeded);
                Ok(ticket)
            }
            Err(error) => {
                tracing::warn!(%error, "Ticket creation failed");
                metrics::counter!("ticket_desk.tickets.create_failed").increment(1);
                Err(self.fail(error.into()))
            }
        }
    }

    fn fail(&self, error: HookError) -> HookError {
        self.phase.send_replace(Phase::Failed(error.clone()));
        error
    }

    /// Clear a recorded error
    ///
    /// Has no effect while a request is in flight.
    pub fn reset_error(&self) {
        self.phase.send_if_modified(|phase| {
            if matches!(phase, Phase::Failed(_)) {
                *phase = Phase::Idle;
                true
            } else {
                false
            }
        });
    }

    /// A creation request is in flight
    #[must_use]
    pub fn loading(&self) -> bool {
        self.phase.borrow().is_loading()
    }

    /// Message of the last failure, if not reset
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.phase.borrow().error().map(HookError::message)
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase<HookError> {
        self.phase.borrow().clone()
    }

    /// Watch phase transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase<HookError>> {
        self.phase.subscribe()
    }
}
