//! # Navigation State
//!
//! What the view router needs to remember between screens: the current
//! view, which restaurant and table are selected, the admin tab, the
//! theme, and the "order placed" banner.
//!
//! ```text
//! landing ──► solutions / pricing
//!    │
//!    ├──► super_admin ──► restaurant_admin(r) ──► customer(r)
//!    │
//!    └──► customer(r1)  (QR scan)
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::DEFAULT_TABLE_ID;

/// How long the "order placed" banner stays on screen, in milliseconds.
pub const BANNER_DURATION_MS: i64 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum View {
    #[default]
    Landing,
    Solutions,
    Pricing,
    SuperAdmin,
    RestaurantAdmin,
    Customer,
}

impl View {
    /// Views that show one restaurant and need an active restaurant id.
    pub fn is_tenant_scoped(self) -> bool {
        matches!(self, View::RestaurantAdmin | View::Customer)
    }
}

/// Sidebar tabs of the restaurant admin console.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "snake_case")]
pub enum AdminTab {
    #[default]
    Dashboard,
    Orders,
    Menu,
    Settings,
    Training,
}

/// Router selectors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Navigator {
    pub view: View,
    pub active_restaurant_id: Option<String>,
    pub active_table_id: String,
    pub admin_tab: AdminTab,
}

impl Default for Navigator {
    fn default() -> Self {
        Navigator {
            view: View::Landing,
            active_restaurant_id: None,
            active_table_id: DEFAULT_TABLE_ID.to_string(),
            admin_tab: AdminTab::Dashboard,
        }
    }
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Navigator whose QR menu starts at `table_id` instead of
    /// [`DEFAULT_TABLE_ID`].
    pub fn with_table(table_id: impl Into<String>) -> Self {
        Navigator {
            active_table_id: table_id.into(),
            ..Self::default()
        }
    }

    /// Switches view. The active restaurant only changes when one is given.
    pub fn navigate_to(&mut self, view: View, restaurant_id: Option<&str>) {
        self.view = view;
        if let Some(id) = restaurant_id {
            self.active_restaurant_id = Some(id.to_string());
        }
        if view == View::RestaurantAdmin && restaurant_id.is_some() {
            self.admin_tab = AdminTab::Dashboard;
        }
    }

    pub fn select_table(&mut self, table_id: impl Into<String>) {
        self.active_table_id = table_id.into();
    }

    pub fn select_tab(&mut self, tab: AdminTab) {
        self.admin_tab = tab;
    }

    /// Restaurant the current view is scoped to, if it needs one.
    pub fn scoped_restaurant(&self) -> Option<&str> {
        if self.view.is_tenant_scoped() {
            self.active_restaurant_id.as_deref()
        } else {
            None
        }
    }
}

/// Light/dark preference, stored as the bare word `light` or `dark`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    /// Reads a stored preference. Anything but `dark` means light.
    pub fn from_stored(value: &str) -> Self {
        if value.trim() == "dark" {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    pub fn is_dark(self) -> bool {
        self == Theme::Dark
    }
}

/// Confirmation banner shown after a customer places an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderBanner {
    shown_at_ms: i64,
}

impl OrderBanner {
    pub fn shown_at(shown_at_ms: i64) -> Self {
        OrderBanner { shown_at_ms }
    }

    /// True for [`BANNER_DURATION_MS`] after the banner was shown.
    pub fn is_visible(&self, now_ms: i64) -> bool {
        (0..BANNER_DURATION_MS).contains(&(now_ms - self.shown_at_ms))
    }
}
