//! The ticket board page
//!
//! Mounting the board starts both collection fetches. The rendered view is
//! derived from the hooks' lifecycles, the stores, and the current filter;
//! nothing here holds a copy of ticket data.

use crate::form::AddTicketForm;
use crate::view::{BoardView, Resource, TicketRow, UNKNOWN_ERROR};
use ticket_desk_client::{ApiClient, ApiError, TicketService, UserService};
use ticket_desk_core::{AssigneeFilter, StatusFilter, TicketFilter, TicketId};
use ticket_desk_runtime::hooks::{self, FetchHook, TicketsFetcher, UsersFetcher};
use ticket_desk_runtime::{AppStores, CreateTicketHook, TicketActions};

/// Page model: stores, hooks, filter, and the add-ticket dialog
#[derive(Debug)]
pub struct TicketBoard {
    stores: AppStores,
    tickets: FetchHook<TicketsFetcher>,
    users: FetchHook<UsersFetcher>,
    actions: TicketActions,
    filter: TicketFilter,
    form: AddTicketForm,
}

impl TicketBoard {
    /// Mount on fresh stores
    ///
    /// Must be called from within a Tokio runtime.
    #[must_use]
    pub fn mount(api: ApiClient) -> Self {
        Self::mount_with(api, AppStores::new())
    }

    /// Mount on existing stores
    #[must_use]
    pub fn mount_with(api: ApiClient, stores: AppStores) -> Self {
        let ticket_service = TicketService::new(api.clone());
        let user_service = UserService::new(api);

        let tickets = hooks::use_tickets(ticket_service.clone(), stores.tickets.clone());
        let users = hooks::use_users(user_service, stores.users.clone());
        let actions = TicketActions::new(ticket_service.clone(), stores.tickets.clone());
        let form = AddTicketForm::new(CreateTicketHook::new(
            ticket_service,
            stores.tickets.clone(),
        ));

        Self {
            stores,
            tickets,
            users,
            actions,
            filter: TicketFilter::default(),
            form,
        }
    }

    /// Wait for both initial fetches to settle
    pub async fn ready(&self) {
        self.tickets.settled().await;
        self.users.settled().await;
    }

    /// Current page state
    ///
    /// Ticket loading and errors take precedence over user ones.
    pub async fn render(&self) -> BoardView {
        if self.tickets.loading() {
            return BoardView::Loading(Resource::Tickets);
        }
        if self.users.loading() {
            return BoardView::Loading(Resource::Users);
        }
        if let Some(error) = self.tickets.error() {
            return error_view(Resource::Tickets, &error);
        }
        if let Some(error) = self.users.error() {
            return error_view(Resource::Users, &error);
        }

        let tickets = self.stores.tickets.tickets().await;
        if tickets.is_empty() {
            return BoardView::Empty;
        }

        let visible = self.filter.apply(&tickets);
        if visible.is_empty() {
            return BoardView::NoMatches;
        }

        let users = self.stores.users.snapshot().await;
        BoardView::List(
            visible
                .into_iter()
                .map(|ticket| {
                    let assignee = ticket.assignee_id.and_then(|id| users.get(id).cloned());
                    TicketRow { ticket, assignee }
                })
                .collect(),
        )
    }

    /// "Try Again": refetch the collection that failed
    ///
    /// Returns the resource that was refetched, if any had failed.
    pub async fn retry(&self) -> Option<Resource> {
        if self.tickets.error().is_some() {
            self.tickets.refetch().await;
            Some(Resource::Tickets)
        } else if self.users.error().is_some() {
            self.users.refetch().await;
            Some(Resource::Users)
        } else {
            None
        }
    }

    /// Shared stores
    #[must_use]
    pub const fn stores(&self) -> &AppStores {
        &self.stores
    }

    /// Current filter
    #[must_use]
    pub const fn filter(&self) -> &TicketFilter {
        &self.filter
    }

    /// Search box contents
    pub fn set_search(&mut self, term: impl Into<String>) {
        self.filter.search_term = term.into();
    }

    /// Status selector
    pub const fn set_status(&mut self, status: StatusFilter) {
        self.filter.status = status;
    }

    /// Assignee selector
    pub const fn set_assignee(&mut self, assignee: AssigneeFilter) {
        self.filter.assignee = assignee;
    }

    /// Edit button; there is no edit endpoint
    pub fn on_edit(&self, id: TicketId) {
        tracing::info!(ticket_id = %id, "Edit ticket requested");
    }

    /// Delete button; there is no delete endpoint
    pub fn on_delete(&self, id: TicketId) {
        tracing::info!(ticket_id = %id, "Delete ticket requested");
    }

    /// Complete button: toggle completion on the server, then in the store
    ///
    /// # Errors
    ///
    /// Returns the request error; the store is untouched.
    pub async fn on_complete(&self, id: TicketId) -> Result<bool, ApiError> {
        self.actions.toggle_complete(id).await
    }

    /// Add-ticket dialog
    #[must_use]
    pub const fn form(&self) -> &AddTicketForm {
        &self.form
    }

    /// Add-ticket dialog, for input
    pub const fn form_mut(&mut self) -> &mut AddTicketForm {
        &mut self.form
    }
}

fn error_view(resource: Resource, error: &ApiError) -> BoardView {
    let message = if error.message().trim().is_empty() {
        UNKNOWN_ERROR.to_string()
    } else {
        error.message().to_string()
    };
    BoardView::Error { resource, message }
}
