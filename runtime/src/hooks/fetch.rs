//! Fetch-on-mount hooks for the ticket and user collections

use crate::lifecycle::Phase;
use crate::stores::{TicketStore, UserStore};
use futures::future::BoxFuture;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use ticket_desk_client::{ApiError, TicketService, UserService};
use ticket_desk_core::{Ticket, User};
use tokio::sync::watch;

/// One collection's remote source and local destination
pub trait Fetcher: Send + Sync + 'static {
    /// Collection element
    type Item: Send + 'static;

    /// Resource name for logs and metrics labels
    const RESOURCE: &'static str;

    /// Retrieve the full collection
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Self::Item>, ApiError>>;

    /// Replace the store's contents with `items`
    fn hydrate(&self, items: Vec<Self::Item>) -> BoxFuture<'_, ()>;
}

/// Tickets from `GET /tickets` into the ticket store
#[derive(Clone, Debug)]
pub struct TicketsFetcher {
    service: TicketService,
    store: TicketStore,
}

impl TicketsFetcher {
    /// Wire a service to a store
    #[must_use]
    pub const fn new(service: TicketService, store: TicketStore) -> Self {
        Self { service, store }
    }
}

impl Fetcher for TicketsFetcher {
    type Item = Ticket;

    const RESOURCE: &'static str = "tickets";

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<Ticket>, ApiError>> {
        Box::pin(self.service.list())
    }

    fn hydrate(&self, items: Vec<Ticket>) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.store.set_tickets(items).await;
        })
    }
}

/// Users from `GET /users` into the user store
#[derive(Clone, Debug)]
pub struct UsersFetcher {
    service: UserService,
    store: UserStore,
}

impl UsersFetcher {
    /// Wire a service to a store
    #[must_use]
    pub const fn new(service: UserService, store: UserStore) -> Self {
        Self { service, store }
    }
}

impl Fetcher for UsersFetcher {
    type Item = User;

    const RESOURCE: &'static str = "users";

    fn fetch(&self) -> BoxFuture<'_, Result<Vec<User>, ApiError>> {
        Box::pin(self.service.list())
    }

    fn hydrate(&self, items: Vec<User>) -> BoxFuture<'_, ()> {
        Box::pin(async move {
            self.store.set_users(items).await;
        })
    }
}

struct Inner<F> {
    fetcher: F,
    phase: watch::Sender<Phase<ApiError>>,
    in_flight: AtomicUsize,
}

/// Counts one running fetch; released before the final phase is published
struct InFlight<'a>(&'a AtomicUsize);

impl<'a> InFlight<'a> {
    fn enter(counter: &'a AtomicUsize) -> Self {
        counter.fetch_add(1, Ordering::SeqCst);
        Self(counter)
    }
}

impl Drop for InFlight<'_> {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::SeqCst);
    }
}

/// Loading/error lifecycle around one collection fetch
///
/// On success the store is replaced with the response; on failure the store
/// keeps whatever it held and the error is recorded. Overlapping fetches are
/// not sequenced: the phase reflects whichever call settled last.
///
/// Clones share the same lifecycle.
pub struct FetchHook<F> {
    inner: Arc<Inner<F>>,
}

impl<F> Clone for FetchHook<F> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

impl<F> std::fmt::Debug for FetchHook<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchHook")
            .field("phase", &*self.inner.phase.borrow())
            .finish_non_exhaustive()
    }
}

impl<F: Fetcher> FetchHook<F> {
    /// Idle hook; nothing is fetched until [`refetch`](Self::refetch)
    #[must_use]
    pub fn new(fetcher: F) -> Self {
        let (phase, _) = watch::channel(Phase::Idle);
        Self {
            inner: Arc::new(Inner {
                fetcher,
                phase,
                in_flight: AtomicUsize::new(0),
            }),
        }
    }

    /// Hook that starts fetching immediately
    ///
    /// The phase is [`Phase::Loading`] as soon as this returns. Must be called
    /// from within a Tokio runtime.
    #[must_use]
    pub fn mount(fetcher: F) -> Self {
        let hook = Self::new(fetcher);
        hook.inner.phase.send_replace(Phase::Loading);

        let task = hook.clone();
        tokio::spawn(async move {
            task.refetch().await;
        });

        hook
    }

    /// Fetch the collection and hydrate the store
    ///
    /// Never fails: the outcome is recorded in [`phase`](Self::phase).
    #[tracing::instrument(skip(self), fields(resource = F::RESOURCE))]
    pub async fn refetch(&self) {
        let in_flight = InFlight::enter(&self.inner.in_flight);
        self.inner.phase.send_replace(Phase::Loading);
        metrics::counter!("ticket_desk.fetch.started", "resource" => F::RESOURCE).increment(1);

        let outcome = match self.inner.fetcher.fetch().await {
            Ok(items) => {
                let count = items.len();
                self.inner.fetcher.hydrate(items).await;
                tracing::debug!(count, "Store hydrated");
                Phase::Succeeded
            }
            Err(error) => {
                tracing::warn!(%error, "Fetch failed, keeping previous contents");
                metrics::counter!("ticket_desk.fetch.failed", "resource" => F::RESOURCE)
                    .increment(1);
                Phase::Failed(error)
            }
        };

        drop(in_flight);
        self.inner.phase.send_replace(outcome);
    }

    /// Current phase
    #[must_use]
    pub fn phase(&self) -> Phase<ApiError> {
        self.inner.phase.borrow().clone()
    }

    /// The most recent transition entered loading
    #[must_use]
    pub fn loading(&self) -> bool {
        self.inner.phase.borrow().is_loading()
    }

    /// Error of the last settled fetch
    #[must_use]
    pub fn error(&self) -> Option<ApiError> {
        self.inner.phase.borrow().error().cloned()
    }

    /// Watch phase transitions
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Phase<ApiError>> {
        self.inner.phase.subscribe()
    }

    /// Wait until no fetch is in flight and return the phase
    ///
    /// With overlapping fetches this waits for all of them, so the returned
    /// phase is the outcome of the last one to settle.
    pub async fn settled(&self) -> Phase<ApiError> {
        let in_flight = &self.inner.in_flight;
        let mut phase = self.inner.phase.subscribe();
        let settled = match phase
            .wait_for(|p| p.is_settled() && in_flight.load(Ordering::SeqCst) == 0)
            .await
        {
            Ok(current) => current.clone(),
            Err(_) => self.phase(),
        };
        settled
    }
}

/// Mount the ticket list
#[must_use]
pub fn use_tickets(service: TicketService, store: TicketStore) -> FetchHook<TicketsFetcher> {
    FetchHook::mount(TicketsFetcher::new(service, store))
}

/// Mount the user list
#[must_use]
pub fn use_users(service: UserService, store: UserStore) -> FetchHook<UsersFetcher> {
    FetchHook::mount(UsersFetcher::new(service, store))
}
