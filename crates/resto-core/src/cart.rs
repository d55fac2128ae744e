//! # Cart Reducer
//!
//! The customer's cart for one QR-menu session.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Operations                                      │
//! │                                                                         │
//! │  Customer Action          Method                  Cart Change           │
//! │  ───────────────          ──────                  ───────────           │
//! │                                                                         │
//! │  Tap "ADD" ─────────────► add_item() ───────────► push line (qty 1)    │
//! │                                                   or qty += 1          │
//! │                                                                         │
//! │  Tap "+" / "-" ─────────► change_quantity() ────► qty += delta         │
//! │                                                   line dropped at ≤ 0  │
//! │                                                                         │
//! │  Tap "Place Order" ─────► checkout() ───────────► OrderDraft, cart     │
//! │                                                   emptied              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Invariants
//! - Lines are unique by menu item id
//! - Every line has quantity in 1..=MAX_ITEM_QUANTITY
//! - Every line's price is within [`MAX_PRICE`], so `total()` cannot overflow
//! - `total()` is Σ price × quantity over the current lines

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{MenuItem, Order, OrderItem, OrderStatus};
use crate::validation::{self, MAX_PRICE};
use crate::{MAX_CART_LINES, MAX_ITEM_QUANTITY};

// The largest possible cart total must fit in an i64.
const _: () = {
    let fits = match MAX_PRICE.minor().checked_mul(MAX_ITEM_QUANTITY) {
        Some(line) => line.checked_mul(MAX_CART_LINES as i64).is_some(),
        None => false,
    };
    assert!(fits);
};

fn check_quantity(qty: i64) -> CoreResult<()> {
    validation::validate_quantity(qty).map_err(|_| CoreError::QuantityTooLarge {
        requested: qty,
        max: MAX_ITEM_QUANTITY,
    })
}

/// One dish in the cart.
///
/// `item` is a copy taken when the dish was first added; a price edit in
/// the admin console does not reach carts that already hold the dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    pub item: MenuItem,
    pub quantity: i64,
}

impl CartLine {
    pub fn line_total(&self) -> Money {
        self.item.price.multiply_quantity(self.quantity)
    }
}

/// A customer's cart at one restaurant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Cart {
    restaurant_id: String,
    lines: Vec<CartLine>,
}

impl Cart {
    /// Creates an empty cart for `restaurant_id`.
    pub fn new(restaurant_id: impl Into<String>) -> Self {
        Cart {
            restaurant_id: restaurant_id.into(),
            lines: Vec::new(),
        }
    }

    pub fn restaurant_id(&self) -> &str {
        &self.restaurant_id
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Adds one of `item`, or bumps its quantity if already present.
    ///
    /// ## Errors
    /// - `ItemUnavailable` if the dish is switched off
    /// - `ForeignMenuItem` if the dish belongs to another restaurant
    /// - `Validation` if the dish's price is out of range
    /// - `QuantityTooLarge` / `CartTooLarge` at the caps
    pub fn add_item(&mut self, item: &MenuItem) -> CoreResult<()> {
        if item.restaurant_id != self.restaurant_id {
            return Err(CoreError::ForeignMenuItem {
                item_id: item.id.clone(),
                restaurant_id: self.restaurant_id.clone(),
            });
        }

        if !item.is_available {
            return Err(CoreError::ItemUnavailable {
                name: item.name.clone(),
            });
        }

        validation::validate_price(item.price)?;

        if let Some(line) = self.lines.iter_mut().find(|l| l.item.id == item.id) {
            let new_qty = line.quantity.saturating_add(1);
            check_quantity(new_qty)?;
            line.quantity = new_qty;
            return Ok(());
        }

        if self.lines.len() >= MAX_CART_LINES {
            return Err(CoreError::CartTooLarge {
                max: MAX_CART_LINES,
            });
        }

        self.lines.push(CartLine {
            item: item.clone(),
            quantity: 1,
        });
        Ok(())
    }

    /// Adds `delta` to a line's quantity, dropping the line at zero or below.
    pub fn change_quantity(&mut self, item_id: &str, delta: i64) -> CoreResult<()> {
        let index = self
            .lines
            .iter()
            .position(|l| l.item.id == item_id)
            .ok_or_else(|| CoreError::NotInCart(item_id.to_string()))?;

        let new_qty = self.lines[index].quantity.saturating_add(delta);
        if new_qty <= 0 {
            self.lines.remove(index);
            return Ok(());
        }
        check_quantity(new_qty)?;

        self.lines[index].quantity = new_qty;
        Ok(())
    }

    /// Quantity of `item_id` in the cart (0 if absent).
    pub fn quantity_of(&self, item_id: &str) -> i64 {
        self.lines
            .iter()
            .find(|l| l.item.id == item_id)
            .map_or(0, |l| l.quantity)
    }

    /// Number of dishes across all lines (the "3 Items" badge).
    pub fn total_quantity(&self) -> i64 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    pub fn total(&self) -> Money {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn clear(&mut self) {
        self.lines.clear();
    }

    /// Turns the cart into an order draft and empties the cart.
    ///
    /// Name and price of each line are copied out of the cart, so the
    /// resulting order is independent of any later menu edit.
    pub fn checkout(&mut self, table_id: &str, customer_name: &str) -> CoreResult<OrderDraft> {
        if self.lines.is_empty() {
            return Err(CoreError::EmptyCart);
        }
        validation::validate_table_label(table_id)?;
        validation::validate_customer_name(customer_name)?;

        let items: Vec<OrderItem> = self
            .lines
            .iter()
            .map(|l| OrderItem {
                menu_item_id: l.item.id.clone(),
                name: l.item.name.clone(),
                price: l.item.price,
                quantity: l.quantity,
            })
            .collect();
        let total_amount = self.total();

        self.lines.clear();

        Ok(OrderDraft {
            restaurant_id: self.restaurant_id.clone(),
            table_id: table_id.trim().to_string(),
            customer_name: customer_name.trim().to_string(),
            items,
            total_amount,
        })
    }
}

/// A checked-out cart waiting for an id and a timestamp.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderDraft {
    pub restaurant_id: String,
    pub table_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub total_amount: Money,
}

impl OrderDraft {
    /// Stamps the draft into a `pending` order.
    pub fn into_order(self, id: String, timestamp: i64) -> Order {
        Order {
            id,
            restaurant_id: self.restaurant_id,
            table_id: self.table_id,
            customer_name: self.customer_name,
            items: self.items,
            status: OrderStatus::Pending,
            total_amount: self.total_amount,
            timestamp,
            note: None,
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;
    use crate::GUEST_CUSTOMER_NAME;

    fn spice_garden_menu() -> Vec<MenuItem> {
        defaults::menu_items()
            .into_iter()
            .filter(|m| m.restaurant_id == "r1")
            .collect()
    }

    fn find<'a>(menu: &'a [MenuItem], id: &str) -> &'a MenuItem {
        menu.iter().find(|m| m.id == id).unwrap()
    }

    #[test]
    fn test_add_same_item_increments() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        cart.add_item(find(&menu, "m1")).unwrap();
        cart.add_item(find(&menu, "m1")).unwrap();

        assert_eq!(cart.lines().len(), 1);
        assert_eq!(cart.quantity_of("m1"), 2);
        assert_eq!(cart.total().major(), 700);
    }

    #[test]
    fn test_change_quantity_removes_line_at_zero() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        cart.add_item(find(&menu, "m3")).unwrap();
        cart.change_quantity("m3", 2).unwrap();
        assert_eq!(cart.quantity_of("m3"), 3);

        cart.change_quantity("m3", -3).unwrap();
        assert!(cart.is_empty());
        assert_eq!(cart.quantity_of("m3"), 0);
    }

    #[test]
    fn test_change_quantity_below_zero_drops_line() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        cart.add_item(find(&menu, "m2")).unwrap();
        cart.change_quantity("m2", -5).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_change_quantity_unknown_item() {
        let mut cart = Cart::new("r1");
        let err = cart.change_quantity("m9", 1).unwrap_err();
        assert!(matches!(err, CoreError::NotInCart(id) if id == "m9"));
    }

    #[test]
    fn test_total_tracks_every_operation() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");
        let ops: [(&str, i64); 7] = [
            ("m1", 0),
            ("m2", 0),
            ("m2", 1),
            ("m3", 0),
            ("m1", -1),
            ("m3", 4),
            ("m2", -1),
        ];

        for (id, delta) in ops {
            if delta == 0 {
                cart.add_item(find(&menu, id)).unwrap();
            } else {
                cart.change_quantity(id, delta).unwrap();
            }

            let expected: Money = cart
                .lines()
                .iter()
                .map(|l| l.item.price * l.quantity)
                .sum();
            assert_eq!(cart.total(), expected);
            assert!(cart.lines().iter().all(|l| l.quantity > 0));
        }

        // m2 ×1, m3 ×5
        assert_eq!(cart.total().major(), 280 + 5 * 60);
    }

    #[test]
    fn test_checkout_builds_snapshot() {
        let mut menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        cart.add_item(find(&menu, "m1")).unwrap();
        cart.add_item(find(&menu, "m3")).unwrap();
        cart.change_quantity("m3", 1).unwrap();

        let draft = cart.checkout("Table 1", GUEST_CUSTOMER_NAME).unwrap();
        assert!(cart.is_empty());
        assert_eq!(draft.total_amount.major(), 470);
        assert_eq!(draft.items.len(), 2);

        // Later menu edits do not reach the draft.
        menu.iter_mut().for_each(|m| m.price = Money::from_major(999));
        let order = draft.into_order("o42".to_string(), 1_700_000_000_000);
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.items[0].price.major(), 350);
        assert_eq!(order.items[1].price.major(), 60);
        assert_eq!(order.items[1].quantity, 2);
        assert_eq!(order.total_amount.major(), 470);
    }

    #[test]
    fn test_checkout_empty_cart_rejected() {
        let mut cart = Cart::new("r1");
        assert!(matches!(
            cart.checkout("Table 1", GUEST_CUSTOMER_NAME),
            Err(CoreError::EmptyCart)
        ));
    }

    #[test]
    fn test_unavailable_and_foreign_items_rejected() {
        let menu = defaults::menu_items();
        let mut cart = Cart::new("r1");

        let mut off = find(&menu, "m2").clone();
        off.is_available = false;
        assert!(matches!(
            cart.add_item(&off),
            Err(CoreError::ItemUnavailable { .. })
        ));

        assert!(matches!(
            cart.add_item(find(&menu, "m4")),
            Err(CoreError::ForeignMenuItem { .. })
        ));
        assert!(cart.is_empty());
    }

    #[test]
    fn test_quantity_cap() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        cart.add_item(find(&menu, "m3")).unwrap();
        cart.change_quantity("m3", MAX_ITEM_QUANTITY - 1).unwrap();
        assert!(matches!(
            cart.add_item(find(&menu, "m3")),
            Err(CoreError::QuantityTooLarge { .. })
        ));
        assert_eq!(cart.quantity_of("m3"), MAX_ITEM_QUANTITY);
    }

    #[test]
    fn test_huge_delta_is_rejected_without_overflow() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");
        cart.add_item(find(&menu, "m1")).unwrap();

        assert!(matches!(
            cart.change_quantity("m1", i64::MAX),
            Err(CoreError::QuantityTooLarge { max: MAX_ITEM_QUANTITY, .. })
        ));
        assert_eq!(cart.quantity_of("m1"), 1);

        cart.change_quantity("m1", i64::MIN).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_out_of_range_price_rejected() {
        let menu = spice_garden_menu();
        let mut cart = Cart::new("r1");

        let mut pricey = find(&menu, "m1").clone();
        pricey.price = Money::from_minor(i64::MAX / 2 + 1);
        assert!(matches!(cart.add_item(&pricey), Err(CoreError::Validation(_))));
        assert!(cart.is_empty());

        pricey.price = MAX_PRICE;
        cart.add_item(&pricey).unwrap();
        cart.change_quantity("m1", MAX_ITEM_QUANTITY - 1).unwrap();
        assert_eq!(cart.total(), MAX_PRICE * MAX_ITEM_QUANTITY);
    }
}
