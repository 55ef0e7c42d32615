//! # Cart Store
//!
//! Holds the session's one live cart and publishes every new snapshot.
//!
//! ## Thread Safety
//! The cart sits behind a `Mutex` because:
//! 1. Several commands may dispatch at once
//! 2. The read-modify-publish sequence must not interleave
//! 3. Observers must never see a snapshot out of order
//!
//! ## Dispatch Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Cart Store Dispatch                               │
//! │                                                                         │
//! │  View Action              Command                  Store                │
//! │  ───────────              ───────                  ─────                │
//! │                                                                         │
//! │  "Add to Cart" ─────────► add_to_cart() ─────────► dispatch(AddItem)   │
//! │                                                                         │
//! │  Quantity box ──────────► update_cart_item() ────► dispatch(Update..)  │
//! │                                                                         │
//! │  "Remove" ──────────────► remove_from_cart() ────► dispatch(Remove..)  │
//! │                                                                         │
//! │  "Clear Cart" ──────────► clear_cart() ──────────► dispatch(ClearCart) │
//! │                                                                         │
//! │  dispatch(action):                                                     │
//! │    lock ─► transition(current, action) ─► store ─► publish ─► unlock   │
//! │                                                                         │
//! │  Subscribers (watch::Receiver) see snapshot N before N+1, always.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Mutex, MutexGuard, PoisonError};

use storefront_core::{transition, CartAction, CartState};
use tokio::sync::watch;
use tracing::debug;

/// The session's cart holder.
///
/// ## Invariants
/// - Exactly one live `CartState`, starting empty
/// - The published snapshot always equals the stored one
#[derive(Debug)]
pub struct CartStore {
    state: Mutex<CartState>,
    publisher: watch::Sender<CartState>,
}

impl CartStore {
    /// Creates a store holding the empty cart.
    pub fn new() -> Self {
        let (publisher, _) = watch::channel(CartState::empty());
        CartStore {
            state: Mutex::new(CartState::empty()),
            publisher,
        }
    }

    /// Locks the cart. A poisoned lock still holds a whole state,
    /// since `transition` builds the next state before it is stored.
    fn lock(&self) -> MutexGuard<'_, CartState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies `action`, stores the result and publishes it.
    ///
    /// Returns the new state.
    pub fn dispatch(&self, action: CartAction) -> CartState {
        let mut state = self.lock();

        let next = transition(&state, &action);
        *state = next.clone();
        self.publisher.send_replace(next.clone());

        debug!(
            action = ?action,
            total_items = next.total_items,
            total_price = %next.total_price,
            "Cart action dispatched"
        );

        next
    }

    /// Current snapshot.
    pub fn get_state(&self) -> CartState {
        self.lock().clone()
    }

    /// Subscribes to cart snapshots.
    ///
    /// The receiver starts at the current snapshot and is marked changed on
    /// every later dispatch.
    pub fn subscribe(&self) -> watch::Receiver<CartState> {
        self.publisher.subscribe()
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let summary = store.with_state(CheckoutSummary::for_cart);
    /// ```
    pub fn with_state<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&CartState) -> R,
    {
        let state = self.lock();
        f(&state)
    }

    /// Whether a line with this product id is in the cart.
    pub fn is_in_cart(&self, id: &str) -> bool {
        self.with_state(|state| state.contains(id))
    }

    /// Quantity of this product in the cart, 0 when absent.
    pub fn quantity_of(&self, id: &str) -> i64 {
        self.with_state(|state| state.quantity_of(id))
    }
}

impl Default for CartStore {
    fn default() -> Self {
        Self::new()
    }
}
