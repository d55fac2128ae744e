//! # Snapshot Repository
//!
//! Whole-collection persistence. Each collection lives under one key as a
//! single JSON document and is rewritten in full on every change. The theme
//! is the bare word `light` or `dark`.
//!
//! ```text
//! ┌───────────────────────────┬──────────────────────────────┬──────────────┐
//! │ key                       │ value                        │ updated_at   │
//! ├───────────────────────────┼──────────────────────────────┼──────────────┤
//! │ restoflow_restaurants     │ [{"id":"r1",...},...]        │ 2024-...     │
//! │ restoflow_menu            │ [{"id":"m1",...},...]        │ 2024-...     │
//! │ restoflow_orders          │ [{"id":"o1",...},...]        │ 2024-...     │
//! │ restoflow_tables          │ [{"id":"r1-t1",...},...]     │ 2024-...     │
//! │ restoflow_theme           │ dark                         │ 2024-...     │
//! └───────────────────────────┴──────────────────────────────┴──────────────┘
//! ```
//!
//! A missing row and an unreadable row both load as the caller's fallback,
//! so a corrupt value never takes the app down.
//!
//! Field names are the browser's camelCase ones, but amounts (`price`,
//! `totalAmount`) are integer paise. A value exported from the browser,
//! where `"price": 350` means ₹350, has to be multiplied by 100 first.

use chrono::Utc;
use serde::de::DeserializeOwned;
use serde::Serialize;
use sqlx::SqlitePool;
use std::fmt;
use tracing::{debug, warn};

use crate::error::StoreResult;

/// Storage key of one persisted collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SnapshotKey {
    Restaurants,
    Menu,
    Orders,
    Tables,
    Theme,
}

impl SnapshotKey {
    pub const ALL: [SnapshotKey; 5] = [
        SnapshotKey::Restaurants,
        SnapshotKey::Menu,
        SnapshotKey::Orders,
        SnapshotKey::Tables,
        SnapshotKey::Theme,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SnapshotKey::Restaurants => "restoflow_restaurants",
            SnapshotKey::Menu => "restoflow_menu",
            SnapshotKey::Orders => "restoflow_orders",
            SnapshotKey::Tables => "restoflow_tables",
            SnapshotKey::Theme => "restoflow_theme",
        }
    }
}

impl fmt::Display for SnapshotKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reads and writes snapshot rows.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    pool: SqlitePool,
}

impl SnapshotRepository {
    pub fn new(pool: SqlitePool) -> Self {
        SnapshotRepository { pool }
    }

    /// Serializes `value` and replaces whatever is stored under `key`.
    pub async fn save<T: Serialize + ?Sized>(&self, key: SnapshotKey, value: &T) -> StoreResult<()> {
        let json = serde_json::to_string(value)?;
        self.save_raw(key, &json).await
    }

    /// Stores `value` under `key` as-is.
    pub async fn save_raw(&self, key: SnapshotKey, value: &str) -> StoreResult<()> {
        debug!(key = %key, bytes = value.len(), "Saving snapshot");

        sqlx::query(
            r#"
            INSERT INTO snapshots (key, value, updated_at)
            VALUES (?1, ?2, ?3)
            ON CONFLICT(key) DO UPDATE SET
                value = excluded.value,
                updated_at = excluded.updated_at
            "#,
        )
        .bind(key.as_str())
        .bind(value)
        .bind(Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Raw stored value, or `None` if nothing has been saved under `key`.
    pub async fn load_raw(&self, key: SnapshotKey) -> StoreResult<Option<String>> {
        let value = sqlx::query_scalar::<_, String>("SELECT value FROM snapshots WHERE key = ?1")
            .bind(key.as_str())
            .fetch_optional(&self.pool)
            .await?;
        Ok(value)
    }

    /// Loads and deserializes `key`, or returns `fallback()` when the row is
    /// missing or does not parse.
    pub async fn load_or<T, F>(&self, key: SnapshotKey, fallback: F) -> StoreResult<T>
    where
        T: DeserializeOwned,
        F: FnOnce() -> T,
    {
        let Some(raw) = self.load_raw(key).await? else {
            debug!(key = %key, "No snapshot stored, using defaults");
            return Ok(fallback());
        };

        match serde_json::from_str(&raw) {
            Ok(value) => {
                debug!(key = %key, "Loaded snapshot");
                Ok(value)
            }
            Err(e) => {
                warn!(key = %key, error = %e, "Corrupt snapshot, using defaults");
                Ok(fallback())
            }
        }
    }

    /// Deletes every snapshot row. Returns the number of rows removed.
    pub async fn clear(&self) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM snapshots").execute(&self.pool).await?;
        debug!(rows = result.rows_affected(), "Cleared snapshots");
        Ok(result.rows_affected())
    }
}
