//! # resto-store: Persistence Layer for RestoFlow
//!
//! Holds the application state and persists it as whole-collection JSON
//! snapshots in SQLite.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        RestoFlow Data Flow                              │
//! │                                                                         │
//! │  QR menu / admin console                                               │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                   resto-store (THIS CRATE)                      │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐  │   │
//! │  │   │     Store     │    │  Repositories │    │  Snapshots   │  │   │
//! │  │   │  (store.rs)   │───►│ Restaurant    │───►│ key → JSON   │  │   │
//! │  │   │ place_order   │    │ Menu  Table   │    │ 001_*.sql    │  │   │
//! │  │   │ reset         │    │ Order         │    │              │  │   │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  SQLite database (restoflow.db)                                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`snapshot`] - Key-value snapshot table
//! - [`repository`] - One repository per collection
//! - [`store`] - State container and cross-collection flows
//! - [`ids`] - Time-based identifiers
//! - [`config`] - Config file and environment overrides
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use resto_store::{Database, DbConfig, Store};
//!
//! let db = Database::new(DbConfig::new("restoflow.db")).await?;
//! let mut store = Store::open(&db).await?;
//!
//! let mut cart = Cart::new("r1");
//! cart.add_item(store.menu().get("m1")?)?;
//! let order = store.place_order(&mut cart, "Table 5", GUEST_CUSTOMER_NAME).await?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod config;
pub mod error;
pub mod ids;
pub mod migrations;
pub mod pool;
pub mod repository;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use config::StoreConfig;
pub use error::{StoreError, StoreResult};
pub use ids::IdGenerator;
pub use pool::{Database, DbConfig};
pub use snapshot::{SnapshotKey, SnapshotRepository};
pub use store::Store;

pub use repository::{MenuRepository, OrderRepository, RestaurantRepository, TableRepository};
