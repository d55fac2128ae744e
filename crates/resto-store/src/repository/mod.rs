//! # Repository Module
//!
//! One repository per collection. Each repository owns its collection in
//! memory and writes the whole collection back to its snapshot key after
//! every successful mutation.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  store.menu_mut().toggle_availability("m1")                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  MenuRepository                                                        │
//! │  ├── next = items.clone()      ◄── mutate a copy                       │
//! │  ├── commit(next)              ──► snapshots["restoflow_menu"]         │
//! │  └── items = next              ◄── only once the write succeeded       │
//! │                                                                         │
//! │  A failed rule check or a failed write leaves memory as it was.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`RestaurantRepository`] - Tenant registry
//! - [`MenuRepository`] - Dishes per restaurant
//! - [`TableRepository`] - Floor plans
//! - [`OrderRepository`] - Placed orders and their status

pub mod menu;
pub mod order;
pub mod restaurant;
pub mod table;

pub use menu::MenuRepository;
pub use order::OrderRepository;
pub use restaurant::RestaurantRepository;
pub use table::TableRepository;
