//! # resto-core: Pure Business Logic for RestoFlow
//!
//! This crate is the **heart** of RestoFlow, a multi-tenant restaurant
//! ordering system. It contains all business logic as pure functions with
//! zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RestoFlow Architecture                           │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front ends (web)                             │   │
//! │  │   QR Menu ──► Cart ──► Checkout      Admin ──► KDS / Floor plan │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ resto-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │ lifecycle │  │   cart    │  │ validation│  │   │
//! │  │   │Restaurant │  │OrderStatus│  │   Cart    │  │   rules   │  │   │
//! │  │   │ MenuItem  │  │transitions│  │ CartLine  │  │  checks   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                  resto-store (Persistence Layer)                │   │
//! │  │         Snapshot table, repositories, configuration             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Restaurant, MenuItem, Table, Order)
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`lifecycle`] - Order status transition table
//! - [`cart`] - Customer cart reducer
//! - [`menu`] - Category listing and filtering
//! - [`dashboard`] - Admin metrics
//! - [`navigation`] - View router selectors, theme, confirmation banner
//! - [`defaults`] - Built-in demo collections
//! - [`content`] - Static pricing and training content
//! - [`error`] - Domain error types
//! - [`validation`] - Business rule validation
//!
//! ## Example Usage
//!
//! ```rust
//! use resto_core::cart::Cart;
//! use resto_core::defaults;
//!
//! let menu = defaults::menu_items();
//! let mut cart = Cart::new("r1");
//!
//! cart.add_item(&menu[0]).unwrap(); // Butter Chicken, ₹350
//! cart.add_item(&menu[2]).unwrap(); // Garlic Naan, ₹60
//! cart.change_quantity("m3", 1).unwrap();
//!
//! assert_eq!(cart.total().major(), 470);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod content;
pub mod dashboard;
pub mod defaults;
pub mod error;
pub mod lifecycle;
pub mod menu;
pub mod money;
pub mod navigation;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, OrderDraft};
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use navigation::{AdminTab, Navigator, OrderBanner, Theme, View};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum distinct lines allowed in a single cart.
pub const MAX_CART_LINES: usize = 100;

/// Maximum quantity of a single menu item in a cart.
///
/// Guards against a stuck "+" button turning into a 500-naan order.
pub const MAX_ITEM_QUANTITY: i64 = 99;

/// Name attached to orders placed from the QR menu.
///
/// There is no customer session yet, so every QR order carries this name
/// and "my latest order" is looked up by it.
pub const GUEST_CUSTOMER_NAME: &str = "Guest User";

/// Table selected when a customer opens the menu without scanning a table code.
pub const DEFAULT_TABLE_ID: &str = "Table 1";

/// Category pseudo-entry meaning "no filter".
pub const ALL_CATEGORIES: &str = "All";
