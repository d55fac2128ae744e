//! # Domain Types
//!
//! Core domain types used throughout RestoFlow.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │   Restaurant    │   │    MenuItem     │   │     Table       │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id ("r1")      │◄──│  restaurant_id  │   │  restaurant_id  │──►    │
//! │  │  slug           │   │  price          │   │  number         │       │
//! │  │  plan, features │   │  is_available   │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │           ▲                                                             │
//! │           │            ┌─────────────────┐   ┌─────────────────┐       │
//! │           └────────────│     Order       │──►│   OrderItem     │       │
//! │                        │  status         │   │  (snapshot of   │       │
//! │                        │  total_amount   │   │   name + price) │       │
//! │                        └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Ownership
//! Every entity except `Restaurant` carries the `restaurant_id` of its owner.
//! Reads filter on that key; nothing enforces referential integrity.
//!
//! ## Serialized Shape
//! Fields serialize in camelCase (`restaurantId`, `isAvailable`,
//! `totalAmount`) so snapshots and generated TypeScript bindings share one
//! vocabulary with the web front ends.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;

use crate::money::Money;

// =============================================================================
// Restaurant
// =============================================================================

/// Subscription tier a restaurant is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum SubscriptionPlan {
    #[default]
    Trial,
    Pro,
    Enterprise,
}

impl fmt::Display for SubscriptionPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SubscriptionPlan::Trial => "trial",
            SubscriptionPlan::Pro => "pro",
            SubscriptionPlan::Enterprise => "enterprise",
        };
        f.write_str(s)
    }
}

/// Per-restaurant feature switches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantFeatures {
    pub online_payment: bool,
    pub table_booking: bool,
    pub email_notifications: bool,
}

impl Default for RestaurantFeatures {
    /// New restaurants get email notifications only.
    fn default() -> Self {
        RestaurantFeatures {
            online_payment: false,
            table_booking: false,
            email_notifications: true,
        }
    }
}

/// A tenant of the platform.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Restaurant {
    /// Time-based identifier (`r1`, `r1700000000000`).
    pub id: String,

    /// Display name.
    pub name: String,

    /// URL slug derived from the name, see [`slugify`].
    pub slug: String,

    /// Logo image URL.
    pub logo: String,

    /// Cover image URL for the QR menu header.
    pub cover_image: String,

    /// Number of tables on the floor plan.
    pub tables: u32,

    pub address: String,

    pub phone: String,

    /// Whether the restaurant accepts orders.
    pub is_active: bool,

    pub subscription_plan: SubscriptionPlan,

    pub features: RestaurantFeatures,

    /// Day the restaurant was registered.
    #[ts(as = "String")]
    pub joined_date: NaiveDate,
}

/// Form payload for registering a restaurant.
///
/// Only `name` is required; everything else falls back to the
/// registration form's defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewRestaurant {
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub tables: Option<u32>,
    #[serde(default)]
    pub subscription_plan: SubscriptionPlan,
    #[serde(default)]
    pub features: RestaurantFeatures,
    #[serde(default)]
    pub logo: Option<String>,
    #[serde(default)]
    pub cover_image: Option<String>,
}

impl NewRestaurant {
    /// Creates a payload with only a name; all other fields use defaults.
    pub fn named(name: impl Into<String>) -> Self {
        NewRestaurant {
            name: name.into(),
            address: None,
            phone: None,
            tables: None,
            subscription_plan: SubscriptionPlan::default(),
            features: RestaurantFeatures::default(),
            logo: None,
            cover_image: None,
        }
    }
}

/// Derives a URL slug from a restaurant name.
///
/// Lowercases the name and replaces every run of whitespace with a single
/// hyphen. Punctuation is kept as-is.
///
/// ```rust
/// use resto_core::types::slugify;
///
/// assert_eq!(slugify("Spice Garden"), "spice-garden");
/// assert_eq!(slugify("Urban  Burger Co."), "urban-burger-co.");
/// ```
pub fn slugify(name: &str) -> String {
    let lower = name.to_lowercase();
    let mut slug = String::with_capacity(lower.len());
    let mut in_space = false;

    for c in lower.chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
                in_space = true;
            }
        } else {
            slug.push(c);
            in_space = false;
        }
    }

    slug
}

// =============================================================================
// Menu Item
// =============================================================================

/// Dietary tag shown as a VEG / NON-VEG badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub enum Dietary {
    #[default]
    #[serde(rename = "veg")]
    Veg,
    #[serde(rename = "non-veg")]
    NonVeg,
}

impl Dietary {
    /// Badge label.
    pub fn label(&self) -> &'static str {
        match self {
            Dietary::Veg => "VEG",
            Dietary::NonVeg => "NON-VEG",
        }
    }
}

/// A dish on a restaurant's menu.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct MenuItem {
    pub id: String,
    pub restaurant_id: String,
    pub name: String,
    pub description: String,
    /// Current price; orders keep their own copy.
    pub price: Money,
    pub category: String,
    pub image: String,
    #[serde(rename = "type")]
    pub dietary: Dietary,
    pub is_available: bool,
}

/// Form payload for adding a dish.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct NewMenuItem {
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    pub price: Money,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default, rename = "type")]
    pub dietary: Dietary,
    #[serde(default)]
    pub image: Option<String>,
}

/// Category used when the add-dish form leaves it blank.
pub const DEFAULT_MENU_CATEGORY: &str = "Main Course";

/// Placeholder photo for dishes added without an image.
pub const DEFAULT_MENU_IMAGE: &str =
    "https://images.unsplash.com/photo-1546069901-ba9599a7e63c?w=500&h=500&fit=crop";

// =============================================================================
// Table
// =============================================================================

/// Occupancy state of a table on the floor plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum TableStatus {
    #[default]
    Free,
    Occupied,
    Reserved,
}

impl TableStatus {
    /// Status reached by one click on the floor plan.
    ///
    /// ```text
    /// free ──► occupied ──► reserved ──► free
    /// ```
    pub fn next(self) -> Self {
        match self {
            TableStatus::Free => TableStatus::Occupied,
            TableStatus::Occupied => TableStatus::Reserved,
            TableStatus::Reserved => TableStatus::Free,
        }
    }
}

impl fmt::Display for TableStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            TableStatus::Free => "free",
            TableStatus::Occupied => "occupied",
            TableStatus::Reserved => "reserved",
        };
        f.write_str(s)
    }
}

/// A physical table belonging to one restaurant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Table {
    /// `{restaurant_id}-t{number}`.
    pub id: String,
    pub number: u32,
    pub capacity: u32,
    pub status: TableStatus,
    pub restaurant_id: String,
}

// =============================================================================
// Order
// =============================================================================

/// Kitchen status of an order.
///
/// Transition rules live in [`crate::lifecycle`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    #[default]
    Pending,
    Confirmed,
    Preparing,
    Ready,
    Completed,
    Cancelled,
}

impl OrderStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [OrderStatus; 6] = [
        OrderStatus::Pending,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
        OrderStatus::Completed,
        OrderStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
            OrderStatus::Completed => "completed",
            OrderStatus::Cancelled => "cancelled",
        }
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A line of a placed order.
///
/// Uses the snapshot pattern: name and price are copied from the menu at
/// checkout, so later menu edits never change a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct OrderItem {
    pub menu_item_id: String,
    /// Dish name at time of order (frozen).
    pub name: String,
    /// Unit price at time of order (frozen).
    pub price: Money,
    pub quantity: i64,
}

impl OrderItem {
    /// Unit price × quantity.
    #[inline]
    pub fn line_total(&self) -> Money {
        self.price.multiply_quantity(self.quantity)
    }
}

/// A customer order placed from a table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: String,
    pub restaurant_id: String,
    /// Table label the order was placed from (e.g. "Table 5").
    pub table_id: String,
    pub customer_name: String,
    pub items: Vec<OrderItem>,
    pub status: OrderStatus,
    /// Σ price × quantity at creation time. Never recomputed.
    pub total_amount: Money,
    /// Creation time, milliseconds since the Unix epoch.
    pub timestamp: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Order {
    /// Total number of dishes across all lines.
    pub fn item_count(&self) -> i64 {
        self.items.iter().map(|i| i.quantity).sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slugify() {
        assert_eq!(slugify("Spice Garden"), "spice-garden");
        assert_eq!(slugify("Urban Burger Co."), "urban-burger-co.");
        assert_eq!(slugify("The   Tandoor\tHouse"), "the-tandoor-house");
        assert_eq!(slugify("cafe"), "cafe");
    }

    #[test]
    fn test_table_status_cycle_returns_after_three_clicks() {
        for start in [TableStatus::Free, TableStatus::Occupied, TableStatus::Reserved] {
            assert_eq!(start.next().next().next(), start);
            assert_ne!(start.next(), start);
        }
    }

    #[test]
    fn test_menu_item_serialized_shape() {
        let item = MenuItem {
            id: "m1".to_string(),
            restaurant_id: "r1".to_string(),
            name: "Butter Chicken".to_string(),
            description: String::new(),
            price: Money::from_major(350),
            category: "Main Course".to_string(),
            image: String::new(),
            dietary: Dietary::NonVeg,
            is_available: true,
        };

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["restaurantId"], "r1");
        assert_eq!(value["type"], "non-veg");
        assert_eq!(value["isAvailable"], true);
        assert_eq!(value["price"], 35000);
    }

    #[test]
    fn test_order_status_serde_names() {
        for status in OrderStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
        }
    }

    #[test]
    fn test_new_restaurant_defaults_from_json() {
        let payload: NewRestaurant = serde_json::from_str(r#"{"name":"Dosa Point"}"#).unwrap();
        assert_eq!(payload, NewRestaurant::named("Dosa Point"));
        assert_eq!(payload.subscription_plan, SubscriptionPlan::Trial);
        assert!(payload.features.email_notifications);
        assert!(!payload.features.online_payment);
    }

    #[test]
    fn test_order_item_line_total() {
        let line = OrderItem {
            menu_item_id: "m3".to_string(),
            name: "Garlic Naan".to_string(),
            price: Money::from_major(60),
            quantity: 2,
        };
        assert_eq!(line.line_total().major(), 120);
    }
}
