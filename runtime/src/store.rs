//! The Store - shared owner of one entity collection
//!
//! State lives behind a `RwLock`. A mutation takes the write lock, runs the
//! reducer to completion, then downgrades to a read lock and notifies every
//! listener with the committed state. No observer can see a half-applied
//! action, and no writer can slip in between commit and notification.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use ticket_desk_core::reducer::{Change, Reducer};
use tokio::sync::{RwLock, broadcast};

/// Handle returned by [`Store::subscribe`]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Callback run after every committed mutation
pub type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

type Listeners<S> = Arc<Mutex<Vec<(SubscriptionId, Listener<S>)>>>;

/// Runtime owner of a reducer's state
///
/// Cloning a `Store` yields another handle to the same state; create one per
/// collection at startup and hand clones to whoever needs them.
///
/// # Example
///
/// ```ignore
/// let store = TicketStore::default();
/// let id = store.subscribe(|state| println!("{} tickets", state.len()));
///
/// store.send(TicketAction::SetTickets(fetched)).await;
///
/// let pending = store.state(|s| s.pending().len()).await;
/// store.unsubscribe(id);
/// ```
pub struct Store<R>
where
    R: Reducer,
{
    state: Arc<RwLock<R::State>>,
    reducer: R,
    listeners: Listeners<R::State>,
    next_subscription: Arc<AtomicU64>,
    /// Committed actions, for observers that want the mutation rather than
    /// the resulting state.
    action_broadcast: broadcast::Sender<R::Action>,
}

impl<R> Store<R>
where
    R: Reducer + Send + Sync + 'static,
    R::State: Send + Sync + 'static,
    R::Action: Clone + Send + 'static,
{
    /// Create a new store with initial state and reducer
    ///
    /// The action broadcast buffers 16 actions per observer.
    #[must_use]
    pub fn new(initial_state: R::State, reducer: R) -> Self {
        let (action_broadcast, _) = broadcast::channel(16);

        Self {
            state: Arc::new(RwLock::new(initial_state)),
            reducer,
            listeners: Arc::new(Mutex::new(Vec::new())),
            next_subscription: Arc::new(AtomicU64::new(0)),
            action_broadcast,
        }
    }

    /// Apply an action
    ///
    /// Listeners run synchronously, under the read lock, only when the
    /// reducer reports [`Change::Committed`].
    #[tracing::instrument(skip(self, action), name = "store_send")]
    pub async fn send(&self, action: R::Action) -> Change {
        let broadcast = (self.action_broadcast.receiver_count() > 0).then(|| action.clone());

        let mut state = self.state.write().await;
        let change = self.reducer.reduce(&mut state, action);

        if !change.is_committed() {
            tracing::trace!("Action left state unchanged");
            return change;
        }

        let state = state.downgrade();
        let listeners: Vec<Listener<R::State>> = self
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();

        tracing::trace!(listeners = listeners.len(), "Notifying listeners");
        for listener in &listeners {
            listener(&state);
        }

        // Still under the read lock, so broadcasts follow commit order
        if let Some(action) = broadcast {
            // No receivers left is not an error
            let _ = self.action_broadcast.send(action);
        }
        drop(state);

        change
    }

    /// Read current state via a closure
    ///
    /// ```ignore
    /// let count = store.state(|s| s.len()).await;
    /// ```
    pub async fn state<F, T>(&self, f: F) -> T
    where
        F: FnOnce(&R::State) -> T,
    {
        let state = self.state.read().await;
        f(&state)
    }

    /// Clone of the current state
    pub async fn snapshot(&self) -> R::State
    where
        R::State: Clone,
    {
        self.state.read().await.clone()
    }

    /// Register a listener for committed mutations
    ///
    /// The listener receives the state right after the mutation, before any
    /// other writer can run. It must not block.
    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn(&R::State) + Send + Sync + 'static,
    {
        let id = SubscriptionId(self.next_subscription.fetch_add(1, Ordering::Relaxed));
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        tracing::debug!(subscription = id.0, "Listener subscribed");
        id
    }

    /// Remove a listener
    ///
    /// Returns `false` if `id` was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self.listeners.lock().unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    /// Number of registered listeners
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Subscribe to every committed action
    ///
    /// Actions arrive in the order they were committed. If the receiver lags, it skips old actions and receives
    /// `RecvError::Lagged`.
    #[must_use]
    pub fn subscribe_actions(&self) -> broadcast::Receiver<R::Action> {
        self.action_broadcast.subscribe()
    }
}

impl<R> Default for Store<R>
where
    R: Reducer + Default + Send + Sync + 'static,
    R::State: Default + Send + Sync + 'static,
    R::Action: Clone + Send + 'static,
{
    fn default() -> Self {
        Self::new(R::State::default(), R::default())
    }
}

impl<R> Clone for Store<R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            reducer: self.reducer.clone(),
            listeners: Arc::clone(&self.listeners),
            next_subscription: Arc::clone(&self.next_subscription),
            action_broadcast: self.action_broadcast.clone(),
        }
    }
}

impl<R> std::fmt::Debug for Store<R>
where
    R: Reducer,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Store").finish_non_exhaustive()
    }
}
