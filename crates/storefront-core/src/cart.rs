//! # Cart Engine
//!
//! The pure state-transition function over the cart.
//!
//! ## Action Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Engine Transitions                              │
//! │                                                                         │
//! │  Action                     Items                    Totals             │
//! │  ──────                     ─────                    ──────             │
//! │                                                                         │
//! │  AddItem(product) ────────► push or qty += 1 ──────► += 1, += price    │
//! │                                                       (incremental)     │
//! │                                                                         │
//! │  RemoveItem(id) ──────────► drop line ─────────────► -= qty, -= sub    │
//! │                                                       (incremental)     │
//! │                                                                         │
//! │  UpdateQuantity(id, n) ───► n <= 0: RemoveItem(id)                      │
//! │                             else qty = n ──────────► Σ over all lines  │
//! │                                                       (re-derived)      │
//! │                                                                         │
//! │  ClearCart ───────────────► [] ────────────────────► 0, $0.00          │
//! │                                                                         │
//! │  Unknown ids are a no-op. So is any action whose totals overflow.      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The engine keeps nothing between calls: the same `(state, action)`
//! always yields the same state.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{line_totals, CartItem, CartState, Product};

// =============================================================================
// Cart Action
// =============================================================================

/// Every way the cart can change.
///
/// ## Serialization
/// Actions travel from views as tagged objects:
/// ```json
/// { "type": "ADD_ITEM", "payload": { "id": "1", "name": "...", "price": 10.99 } }
/// { "type": "REMOVE_ITEM", "payload": "1" }
/// { "type": "UPDATE_QUANTITY", "payload": { "id": "1", "quantity": 3 } }
/// { "type": "CLEAR_CART" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
#[ts(export)]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem(Product),

    /// Drop a line entirely.
    RemoveItem(String),

    /// Set a line's quantity. Zero or less removes the line.
    UpdateQuantity { id: String, quantity: i64 },

    /// Reset to the empty cart.
    ClearCart,
}

// =============================================================================
// Transition
// =============================================================================

/// Applies `action` to `state` and returns the next state.
///
/// Never panics. An action whose quantities or amounts would not fit in
/// an `i64` leaves the state unchanged.
///
/// ## Example
/// ```rust
/// use storefront_core::cart::{transition, CartAction};
/// use storefront_core::{CartState, Money, Product};
///
/// let product = Product::new("1", "Test Product", Money::from_cents(1099));
/// let once = transition(&CartState::empty(), &CartAction::AddItem(product.clone()));
/// let twice = transition(&once, &CartAction::AddItem(product));
///
/// assert_eq!(twice.total_items, 2);
/// assert_eq!(twice.total_price.to_string(), "$21.98");
/// assert_eq!(twice.items.len(), 1);
/// ```
pub fn transition(state: &CartState, action: &CartAction) -> CartState {
    let next = match action {
        CartAction::AddItem(product) => add_item(state, product),
        CartAction::RemoveItem(id) => remove_item(state, id),
        CartAction::UpdateQuantity { id, quantity } => update_quantity(state, id, *quantity),
        CartAction::ClearCart => Some(CartState::empty()),
    };

    next.unwrap_or_else(|| state.clone())
}

impl CartState {
    /// Consumes the state and returns the result of `action`.
    ///
    /// ```rust
    /// use storefront_core::cart::CartAction;
    /// use storefront_core::{CartState, Money, Product};
    ///
    /// let state = CartState::empty()
    ///     .apply(&CartAction::AddItem(Product::new("1", "A", Money::from_cents(500))))
    ///     .apply(&CartAction::ClearCart);
    /// assert_eq!(state, CartState::empty());
    /// ```
    pub fn apply(self, action: &CartAction) -> CartState {
        transition(&self, action)
    }
}

/// Totals move by the added unit, not by re-summing every line.
fn add_item(state: &CartState, product: &Product) -> Option<CartState> {
    let items = if state.contains(&product.id) {
        state
            .items
            .iter()
            .map(|item| {
                if item.id == product.id {
                    item.with_quantity(item.quantity.checked_add(1)?)
                } else {
                    Some(item.clone())
                }
            })
            .collect::<Option<Vec<_>>>()?
    } else {
        let mut items = state.items.clone();
        items.push(CartItem::from_product(product));
        items
    };

    Some(CartState {
        items,
        total_items: state.total_items.checked_add(1)?,
        total_price: state.total_price.checked_add(product.price)?,
    })
}

fn remove_item(state: &CartState, id: &str) -> Option<CartState> {
    let Some(removed) = state.item(id) else {
        return Some(state.clone());
    };

    Some(CartState {
        items: state
            .items
            .iter()
            .filter(|item| item.id != id)
            .cloned()
            .collect(),
        total_items: state.total_items.checked_sub(removed.quantity)?,
        total_price: state.total_price.checked_sub(removed.sub_total)?,
    })
}

/// Totals are re-derived from the whole sequence after the change.
fn update_quantity(state: &CartState, id: &str, quantity: i64) -> Option<CartState> {
    if quantity <= 0 {
        return remove_item(state, id);
    }

    if !state.contains(id) {
        return Some(state.clone());
    }

    let items = state
        .items
        .iter()
        .map(|item| {
            if item.id == id {
                item.with_quantity(quantity)
            } else {
                Some(item.clone())
            }
        })
        .collect::<Option<Vec<_>>>()?;

    let (total_items, total_price) = line_totals(&items)?;

    Some(CartState {
        items,
        total_items,
        total_price,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::Money;

    fn product_1() -> Product {
        Product::new("1", "Test Product", Money::from_cents(1099))
            .with_description("A test product")
            .with_features(["test-feature"])
    }

    fn product_2() -> Product {
        Product::new("2", "Test Product 2", Money::from_cents(1550))
            .with_description("Another test product")
            .with_features(["test-feature"])
    }

    fn add(state: &CartState, product: Product) -> CartState {
        transition(state, &CartAction::AddItem(product))
    }

    fn remove(state: &CartState, id: &str) -> CartState {
        transition(state, &CartAction::RemoveItem(id.to_string()))
    }

    fn update(state: &CartState, id: &str, quantity: i64) -> CartState {
        transition(
            state,
            &CartAction::UpdateQuantity {
                id: id.to_string(),
                quantity,
            },
        )
    }

    #[test]
    fn test_add_to_empty_cart() {
        let state = add(&CartState::empty(), product_1());

        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price.to_string(), "$10.99");
        assert_eq!(state.items.len(), 1);
        assert_eq!(state.items[0].name, "Test Product");
        assert_eq!(state.items[0].quantity, 1);
        assert_eq!(state.items[0].sub_total, Money::from_cents(1099));
    }

    #[test]
    fn test_add_existing_item_increments_quantity() {
        let state = add(&add(&CartState::empty(), product_1()), product_1());

        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price, Money::from_cents(2198));
        assert_eq!(state.items.len(), 1); // Still one unique item
        assert_eq!(state.items[0].quantity, 2);
        assert_eq!(state.items[0].sub_total, Money::from_cents(2198));
    }

    #[test]
    fn test_add_multiple_different_items() {
        let state = add(&add(&CartState::empty(), product_1()), product_2());

        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price, Money::from_cents(2649)); // 10.99 + 15.50
        assert_eq!(state.quantity_of("1"), 1);
        assert_eq!(state.quantity_of("2"), 1);
    }

    #[test]
    fn test_readding_keeps_position() {
        let state = add(&add(&add(&CartState::empty(), product_1()), product_2()), product_1());

        let ids: Vec<&str> = state.items.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["1", "2"]);
        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price, Money::from_cents(3748)); // (10.99 * 2) + 15.50
    }

    #[test]
    fn test_update_quantity_recomputes_totals() {
        let two_items = add(&add(&CartState::empty(), product_1()), product_2());
        let state = update(&two_items, "1", 3);

        assert_eq!(state.total_items, 4); // 3 + 1
        assert_eq!(state.total_price, Money::from_cents(4847)); // (10.99 * 3) + 15.50
        assert_eq!(state.item("1").unwrap().quantity, 3);
        assert_eq!(state.item("1").unwrap().sub_total, Money::from_cents(3297));
        assert_eq!(state.item("2"), two_items.item("2"));
    }

    #[test]
    fn test_update_single_item() {
        let state = update(&add(&CartState::empty(), product_1()), "1", 3);

        assert_eq!(state.total_items, 3);
        assert_eq!(state.total_price.to_string(), "$32.97");
    }

    #[test]
    fn test_remove_after_update() {
        let two_items = add(&add(&CartState::empty(), product_1()), product_2());
        let state = remove(&update(&two_items, "1", 3), "1");

        assert_eq!(state.total_items, 1);
        assert_eq!(state.total_price, Money::from_cents(1550));
        assert!(!state.contains("1"));
        assert!(state.contains("2"));
    }

    #[test]
    fn test_remove_item_with_quantity_above_one() {
        let state = add(&add(&CartState::empty(), product_1()), product_1());
        let state = remove(&state, "1");

        assert_eq!(state, CartState::empty());
    }

    #[test]
    fn test_remove_and_update_unknown_id_is_noop() {
        let state = add(&CartState::empty(), product_1());

        assert_eq!(remove(&state, "missing"), state);
        assert_eq!(update(&state, "missing", 3), state);
        assert_eq!(remove(&CartState::empty(), "1"), CartState::empty());
    }

    #[test]
    fn test_update_to_zero_or_negative_removes() {
        let state = add(&add(&CartState::empty(), product_1()), product_2());

        assert_eq!(update(&state, "1", 0), remove(&state, "1"));
        assert_eq!(update(&state, "1", -4), remove(&state, "1"));
        assert_eq!(update(&state, "1", 0).total_price, Money::from_cents(1550));
    }

    #[test]
    fn test_readding_at_new_price_keeps_line_price() {
        let state = add(&CartState::empty(), product_1());
        let repriced = Product::new("1", "Test Product", Money::from_cents(1500));
        let state = add(&state, repriced);

        // The line keeps the price it was first added at
        let line = state.item("1").unwrap();
        assert_eq!(line.price, Money::from_cents(1099));
        assert_eq!(line.quantity, 2);
        assert_eq!(line.sub_total, Money::from_cents(2198));

        // The running total moves by the incoming price
        assert_eq!(state.total_items, 2);
        assert_eq!(state.total_price, Money::from_cents(2599));
        assert!(!state.is_consistent());

        // Updating the quantity re-derives the total from the lines
        let state = update(&state, "1", 2);
        assert_eq!(state.total_price, Money::from_cents(2198));
        assert!(state.is_consistent());
    }

    #[test]
    fn test_update_quantity_overflow_leaves_cart_unchanged() {
        let state = add(&add(&CartState::empty(), product_1()), product_2());

        assert_eq!(update(&state, "1", 10_000_000_000_000_000), state);
        assert_eq!(update(&state, "1", i64::MAX), state);
        // Line fits on its own but the cart total does not
        let big = Product::new("1", "Test Product", Money::from_cents(1));
        let state = add(&add(&CartState::empty(), big), product_2());
        assert_eq!(update(&state, "1", i64::MAX), state);

        let shrunk = update(&state, "1", 3);
        assert_eq!(shrunk.total_price, Money::from_cents(1553));
        assert!(shrunk.is_consistent());
    }

    #[test]
    fn test_add_item_overflow_leaves_cart_unchanged() {
        let costly = Product::new("1", "Costly", Money::from_cents(i64::MAX));
        let state = add(&CartState::empty(), costly.clone());
        assert_eq!(state.total_price, Money::from_cents(i64::MAX));

        assert_eq!(add(&state, costly), state);
        assert_eq!(add(&state, product_2()), state);

        let packed = update(&add(&CartState::empty(), product_1()), "1", i64::MAX / 1099);
        assert!(packed.is_consistent());
        let full = CartState {
            total_items: i64::MAX,
            ..packed
        };
        assert_eq!(add(&full, product_2()), full);
    }

    #[test]
    fn test_clear_cart() {
        let state = add(&add(&add(&CartState::empty(), product_1()), product_1()), product_2());

        let cleared = transition(&state, &CartAction::ClearCart);
        assert_eq!(cleared, CartState::empty());
        assert_eq!(transition(&cleared, &CartAction::ClearCart), cleared);
        assert_eq!(transition(&CartState::empty(), &CartAction::ClearCart), CartState::empty());
    }

    #[test]
    fn test_transition_does_not_touch_input() {
        let before = add(&CartState::empty(), product_1());
        let snapshot = before.clone();

        let _ = transition(&before, &CartAction::AddItem(product_2()));
        let _ = transition(&before, &CartAction::ClearCart);

        assert_eq!(before, snapshot);
    }

    #[test]
    fn test_action_wire_format() {
        let json = serde_json::to_value(CartAction::UpdateQuantity {
            id: "1".to_string(),
            quantity: 3,
        })
        .unwrap();
        assert_eq!(
            json,
            serde_json::json!({"type": "UPDATE_QUANTITY", "payload": {"id": "1", "quantity": 3}})
        );

        let remove: CartAction =
            serde_json::from_str(r#"{"type": "REMOVE_ITEM", "payload": "1"}"#).unwrap();
        assert_eq!(remove, CartAction::RemoveItem("1".to_string()));

        let clear: CartAction = serde_json::from_str(r#"{"type": "CLEAR_CART"}"#).unwrap();
        assert_eq!(clear, CartAction::ClearCart);

        let add: CartAction = serde_json::from_str(
            r#"{"type": "ADD_ITEM", "payload": {"id": "1", "name": "Test Product", "price": 10.99}}"#,
        )
        .unwrap();
        assert_eq!(add, CartAction::AddItem(Product::new("1", "Test Product", Money::from_cents(1099))));

        assert!(serde_json::from_str::<CartAction>(r#"{"type": "APPLY_COUPON"}"#).is_err());
    }
}
