//! # Dashboard Metrics
//!
//! Numbers shown on the restaurant admin dashboard and the super-admin
//! registry. All functions take the already-filtered collections of one
//! restaurant and never look at another tenant's data.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::money::Money;
use crate::types::{Order, OrderStatus, Table, TableStatus};

/// Summary cards on the restaurant admin dashboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantStats {
    /// Σ total of every order, whatever its status.
    pub revenue: Money,
    pub pending_orders: usize,
    /// pending + confirmed + preparing + ready.
    pub active_orders: usize,
    pub floor: FloorSummary,
    /// Newest first, at most the requested number.
    pub recent_orders: Vec<Order>,
}

/// Table occupancy counts for one floor plan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct FloorSummary {
    pub free: usize,
    pub occupied: usize,
    pub reserved: usize,
}

impl FloorSummary {
    pub fn from_tables<'a>(tables: impl IntoIterator<Item = &'a Table>) -> Self {
        tables
            .into_iter()
            .fold(FloorSummary::default(), |mut acc, t| {
                match t.status {
                    TableStatus::Free => acc.free += 1,
                    TableStatus::Occupied => acc.occupied += 1,
                    TableStatus::Reserved => acc.reserved += 1,
                }
                acc
            })
    }

    pub fn total(&self) -> usize {
        self.free + self.occupied + self.reserved
    }
}

/// All-time revenue. Cancelled orders are included, matching the admin
/// dashboard card.
// TODO: switch to "today" once orders can be bucketed by the restaurant's timezone.
pub fn total_revenue<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Money {
    orders.into_iter().map(|o| o.total_amount).sum()
}

/// Revenue from completed orders only (super-admin registry column).
pub fn completed_revenue<'a>(orders: impl IntoIterator<Item = &'a Order>) -> Money {
    orders
        .into_iter()
        .filter(|o| o.status == OrderStatus::Completed)
        .map(|o| o.total_amount)
        .sum()
}

pub fn count_with_status<'a>(orders: impl IntoIterator<Item = &'a Order>, status: OrderStatus) -> usize {
    orders.into_iter().filter(|o| o.status == status).count()
}

pub fn count_active<'a>(orders: impl IntoIterator<Item = &'a Order>) -> usize {
    orders.into_iter().filter(|o| o.status.is_active()).count()
}

/// The `limit` newest orders, newest first.
pub fn recent_orders(orders: &[Order], limit: usize) -> Vec<&Order> {
    let mut sorted: Vec<&Order> = orders.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

/// Builds the dashboard cards for one restaurant, listing up to
/// `recent_limit` of its newest orders.
pub fn restaurant_stats(orders: &[Order], tables: &[Table], recent_limit: usize) -> RestaurantStats {
    RestaurantStats {
        revenue: total_revenue(orders),
        pending_orders: count_with_status(orders, OrderStatus::Pending),
        active_orders: count_active(orders),
        floor: FloorSummary::from_tables(tables),
        recent_orders: recent_orders(orders, recent_limit).into_iter().cloned().collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::defaults;

    fn spice_garden_orders() -> Vec<Order> {
        defaults::orders(1_700_000_000_000)
            .into_iter()
            .filter(|o| o.restaurant_id == "r1")
            .collect()
    }

    #[test]
    fn test_default_restaurant_stats() {
        let orders = spice_garden_orders();
        let tables: Vec<Table> = defaults::tables()
            .into_iter()
            .filter(|t| t.restaurant_id == "r1")
            .collect();

        let stats = restaurant_stats(&orders, &tables, 1);
        assert_eq!(stats.revenue.major(), 750);
        assert_eq!(stats.pending_orders, 1);
        assert_eq!(stats.active_orders, 2);
        assert_eq!(
            stats.floor,
            FloorSummary {
                free: 7,
                occupied: 2,
                reserved: 1
            }
        );
        assert_eq!(stats.floor.total(), 10);

        let recent: Vec<&str> = stats.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(recent, vec!["o1"]);
    }

    #[test]
    fn test_completed_revenue_ignores_other_statuses() {
        let mut orders = spice_garden_orders();
        assert!(completed_revenue(&orders).is_zero());

        orders[1].status = OrderStatus::Completed;
        assert_eq!(completed_revenue(&orders).major(), 280);

        orders[0].status = OrderStatus::Cancelled;
        assert_eq!(completed_revenue(&orders).major(), 280);
        assert_eq!(count_active(&orders), 0);
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let orders = spice_garden_orders();
        let recent = recent_orders(&orders, 5);
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].id, "o1");
        assert_eq!(recent[1].id, "o2");

        assert_eq!(recent_orders(&orders, 1).len(), 1);
    }
}
