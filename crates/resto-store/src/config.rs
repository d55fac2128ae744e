//! # Store Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Environment Variables (highest priority)                           │
//! │     RESTO_DB_PATH=/srv/restoflow/restoflow.db                          │
//! │     RESTO_CUSTOMER_NAME="Walk-in"                                      │
//! │     RESTO_DEFAULT_TABLE="Table 3"                                      │
//! │                                                                         │
//! │  2. TOML Config File                                                   │
//! │     ~/.config/restoflow/store.toml (Linux)                             │
//! │     ~/Library/Application Support/com.restoflow.restoflow/ (macOS)     │
//! │                                                                         │
//! │  3. Default Values (lowest priority)                                   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # store.toml
//! database_path = "./restoflow.db"
//! customer_name = "Guest User"
//! default_table = "Table 1"
//! currency_symbol = "₹"
//! recent_orders_limit = 5
//! ```

use resto_core::money::{CURRENCY_SYMBOL, MINOR_PER_MAJOR};
use resto_core::{Money, DEFAULT_TABLE_ID, GUEST_CUSTOMER_NAME};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{debug, info, warn};

use crate::error::{StoreError, StoreResult};
use crate::pool::DbConfig;

const CONFIG_FILE: &str = "store.toml";
const DATABASE_FILE: &str = "restoflow.db";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreConfig {
    /// SQLite file holding the snapshot table.
    #[serde(default = "default_database_path")]
    pub database_path: PathBuf,

    /// Name attached to orders placed from the QR menu.
    #[serde(default = "default_customer_name")]
    pub customer_name: String,

    /// Table selected when no table code was scanned.
    #[serde(default = "default_table")]
    pub default_table: String,

    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    /// Rows in the dashboard's "recent orders" list.
    #[serde(default = "default_recent_orders_limit")]
    pub recent_orders_limit: usize,
}

fn default_database_path() -> PathBuf {
    directories::ProjectDirs::from("com", "restoflow", "restoflow")
        .map(|dirs| dirs.data_dir().join(DATABASE_FILE))
        .unwrap_or_else(|| PathBuf::from(DATABASE_FILE))
}

fn default_customer_name() -> String {
    GUEST_CUSTOMER_NAME.to_string()
}

fn default_table() -> String {
    DEFAULT_TABLE_ID.to_string()
}

fn default_currency_symbol() -> String {
    CURRENCY_SYMBOL.to_string()
}

fn default_recent_orders_limit() -> usize {
    5
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            database_path: default_database_path(),
            customer_name: default_customer_name(),
            default_table: default_table(),
            currency_symbol: default_currency_symbol(),
            recent_orders_limit: default_recent_orders_limit(),
        }
    }
}

impl StoreConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (store.toml)
    /// 3. Environment variables
    pub fn load(config_path: Option<PathBuf>) -> StoreResult<Self> {
        let mut config = Self::default();

        if let Some(path) = config_path.or_else(Self::default_config_path) {
            if path.exists() {
                info!(?path, "Loading store config from file");
                let contents = std::fs::read_to_string(&path)?;
                config = toml::from_str(&contents)?;
            } else {
                debug!(?path, "Config file not found, using defaults");
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load store config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Writes the configuration as TOML.
    pub fn save(&self, config_path: Option<PathBuf>) -> StoreResult<()> {
        let path = config_path
            .or_else(Self::default_config_path)
            .ok_or_else(|| StoreError::InvalidConfig("No config path available".into()))?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)?;
        std::fs::write(&path, contents)?;

        info!(?path, "Store config saved");
        Ok(())
    }

    pub fn validate(&self) -> StoreResult<()> {
        if self.customer_name.trim().is_empty() {
            return Err(StoreError::InvalidConfig("customer_name must not be empty".into()));
        }
        if self.default_table.trim().is_empty() {
            return Err(StoreError::InvalidConfig("default_table must not be empty".into()));
        }
        if self.recent_orders_limit == 0 {
            return Err(StoreError::InvalidConfig(
                "recent_orders_limit must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(path) = var("RESTO_DB_PATH") {
            debug!(path = %path, "Overriding database path from environment");
            self.database_path = PathBuf::from(path);
        }

        if let Some(name) = var("RESTO_CUSTOMER_NAME") {
            debug!(name = %name, "Overriding customer name from environment");
            self.customer_name = name;
        }

        if let Some(table) = var("RESTO_DEFAULT_TABLE") {
            debug!(table = %table, "Overriding default table from environment");
            self.default_table = table;
        }
    }

    fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "restoflow", "restoflow")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
    }

    /// Pool configuration for [`crate::Database::new`].
    pub fn db_config(&self) -> DbConfig {
        DbConfig::new(&self.database_path)
    }

    /// `₹470`, `₹12.50`, with the configured symbol.
    pub fn format_money(&self, amount: Money) -> String {
        let sign = if amount.is_negative() { "-" } else { "" };
        let abs = amount.minor().abs();
        let (major, minor) = (abs / MINOR_PER_MAJOR, abs % MINOR_PER_MAJOR);
        if minor == 0 {
            format!("{}{}{}", sign, self.currency_symbol, major)
        } else {
            format!("{}{}{}.{:02}", sign, self.currency_symbol, major, minor)
        }
    }
}
