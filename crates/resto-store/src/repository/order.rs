//! # Order Repository
//!
//! Orders placed from the QR menu and advanced from the kitchen view.
//!
//! New orders go to the front of the collection, so the stored order is
//! newest first.

use chrono::Utc;
use std::sync::Arc;
use tracing::{debug, info, warn};

use resto_core::defaults;
use resto_core::{Order, OrderDraft, OrderStatus};

use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::snapshot::{SnapshotKey, SnapshotRepository};

#[derive(Debug, Clone)]
pub struct OrderRepository {
    snapshots: SnapshotRepository,
    ids: Arc<IdGenerator>,
    orders: Vec<Order>,
}

impl OrderRepository {
    /// Loads orders. The demo orders are stamped relative to now.
    pub async fn load(snapshots: SnapshotRepository, ids: Arc<IdGenerator>) -> StoreResult<Self> {
        let orders = snapshots
            .load_or(SnapshotKey::Orders, || {
                defaults::orders(Utc::now().timestamp_millis())
            })
            .await?;
        debug!(count = orders.len(), "Loaded orders");
        Ok(OrderRepository {
            snapshots,
            ids,
            orders,
        })
    }

    pub fn all(&self) -> &[Order] {
        &self.orders
    }

    /// Orders of one restaurant, newest first.
    pub fn for_restaurant(&self, restaurant_id: &str) -> Vec<&Order> {
        let mut orders: Vec<&Order> = self
            .orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id)
            .collect();
        orders.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        orders
    }

    pub fn get(&self, id: &str) -> StoreResult<&Order> {
        self.orders
            .iter()
            .find(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))
    }

    /// Stamps a checked-out cart with an id and the current time and stores
    /// it as a `pending` order.
    pub async fn place(&mut self, draft: OrderDraft) -> StoreResult<Order> {
        let millis = self.ids.next_millis();
        let order = draft.into_order(format!("o{}", millis), millis);

        let mut next = Vec::with_capacity(self.orders.len() + 1);
        next.push(order.clone());
        next.extend(self.orders.iter().cloned());
        self.commit(next).await?;

        info!(
            id = %order.id,
            restaurant_id = %order.restaurant_id,
            table = %order.table_id,
            total = %order.total_amount,
            items = order.item_count(),
            "Order placed"
        );
        Ok(order)
    }

    /// Moves an order to `status`. Returns the previous status.
    ///
    /// Transitions outside the lifecycle table are rejected with
    /// [`resto_core::CoreError::InvalidTransition`] and nothing is written.
    pub async fn update_status(&mut self, id: &str, status: OrderStatus) -> StoreResult<OrderStatus> {
        let index = self.position(id)?;
        let mut next = self.orders.clone();
        let previous = next[index].transition(status).map_err(|e| {
            warn!(id = %id, error = %e, "Rejected order status change");
            e
        })?;

        self.commit(next).await?;
        debug!(id = %id, from = %previous, to = %status, "Order status updated");
        Ok(previous)
    }

    /// Moves an order one step forward (the kitchen's action button).
    pub async fn advance(&mut self, id: &str) -> StoreResult<OrderStatus> {
        let index = self.position(id)?;
        let mut next = self.orders.clone();
        next[index].advance()?;
        let status = next[index].status;

        self.commit(next).await?;
        debug!(id = %id, status = %status, "Order advanced");
        Ok(status)
    }

    pub async fn cancel(&mut self, id: &str) -> StoreResult<()> {
        let index = self.position(id)?;
        let mut next = self.orders.clone();
        next[index].cancel()?;

        self.commit(next).await?;
        info!(id = %id, "Order cancelled");
        Ok(())
    }

    /// Newest order of `customer_name` at a restaurant.
    ///
    /// Customers have no identity beyond the name typed at checkout, so
    /// everyone sharing a name shares this lookup.
    pub fn latest_for_customer(&self, restaurant_id: &str, customer_name: &str) -> Option<&Order> {
        self.orders
            .iter()
            .filter(|o| o.restaurant_id == restaurant_id && o.customer_name == customer_name)
            .max_by_key(|o| o.timestamp)
    }

    pub(crate) async fn reset(&mut self) -> StoreResult<()> {
        self.orders = defaults::orders(Utc::now().timestamp_millis());
        self.snapshots.save(SnapshotKey::Orders, &self.orders).await
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.orders
            .iter()
            .position(|o| o.id == id)
            .ok_or_else(|| StoreError::not_found("Order", id))
    }

    /// Writes `next` and only then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<Order>) -> StoreResult<()> {
        self.snapshots.save(SnapshotKey::Orders, &next).await?;
        self.orders = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;
    use resto_core::{Cart, CoreError, GUEST_CUSTOMER_NAME};

    async fn repo() -> OrderRepository {
        OrderRepository::load(test_support::snapshots().await, test_support::ids())
            .await
            .unwrap()
    }

    fn naan_draft() -> OrderDraft {
        let menu = defaults::menu_items();
        let mut cart = Cart::new("r1");
        cart.add_item(&menu[2]).unwrap();
        cart.checkout("Table 3", GUEST_CUSTOMER_NAME).unwrap()
    }

    #[tokio::test]
    async fn test_place_prepends_pending_order() {
        let mut repo = repo().await;
        let order = repo.place(naan_draft()).await.unwrap();

        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.id, format!("o{}", order.timestamp));
        assert_eq!(repo.all()[0].id, order.id);
        assert_eq!(repo.for_restaurant("r1")[0].id, order.id);
        assert_eq!(repo.for_restaurant("r1").len(), 3);
    }

    #[tokio::test]
    async fn test_for_restaurant_newest_first() {
        let repo = repo().await;
        let ids: Vec<&str> = repo.for_restaurant("r1").iter().map(|o| o.id.as_str()).collect();
        assert_eq!(ids, vec!["o1", "o2"]);
        assert!(repo.for_restaurant("r2").is_empty());
    }

    #[tokio::test]
    async fn test_full_lifecycle() {
        let mut repo = repo().await;
        assert_eq!(repo.advance("o1").await.unwrap(), OrderStatus::Confirmed);
        assert_eq!(repo.advance("o1").await.unwrap(), OrderStatus::Preparing);
        assert_eq!(repo.advance("o1").await.unwrap(), OrderStatus::Ready);
        assert_eq!(repo.advance("o1").await.unwrap(), OrderStatus::Completed);
        assert!(repo.advance("o1").await.is_err());
    }

    #[tokio::test]
    async fn test_illegal_transition_leaves_stored_status() {
        let snapshots = test_support::snapshots().await;
        let ids = test_support::ids();
        let mut repo = OrderRepository::load(snapshots.clone(), Arc::clone(&ids)).await.unwrap();

        repo.update_status("o2", OrderStatus::Completed).await.unwrap_err();
        repo.update_status("o2", OrderStatus::Ready).await.unwrap();
        repo.update_status("o2", OrderStatus::Completed).await.unwrap();

        let err = repo.update_status("o2", OrderStatus::Pending).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Core(CoreError::InvalidTransition {
                from: OrderStatus::Completed,
                to: OrderStatus::Pending,
                ..
            })
        ));
        assert_eq!(repo.get("o2").unwrap().status, OrderStatus::Completed);

        let reloaded = OrderRepository::load(snapshots, ids).await.unwrap();
        assert_eq!(reloaded.get("o2").unwrap().status, OrderStatus::Completed);
    }

    #[tokio::test]
    async fn test_cancel() {
        let mut repo = repo().await;
        repo.cancel("o1").await.unwrap();
        assert_eq!(repo.get("o1").unwrap().status, OrderStatus::Cancelled);
        assert!(repo.cancel("o1").await.is_err());
        assert!(matches!(repo.cancel("o9").await, Err(StoreError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_latest_for_customer() {
        let mut repo = repo().await;
        assert!(repo.latest_for_customer("r1", GUEST_CUSTOMER_NAME).is_none());

        let first = repo.place(naan_draft()).await.unwrap();
        let second = repo.place(naan_draft()).await.unwrap();
        assert!(second.timestamp > first.timestamp);

        let latest = repo.latest_for_customer("r1", GUEST_CUSTOMER_NAME).unwrap();
        assert_eq!(latest.id, second.id);
        assert_eq!(repo.latest_for_customer("r1", "Rahul").unwrap().id, "o1");
        assert!(repo.latest_for_customer("r2", GUEST_CUSTOMER_NAME).is_none());
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_unchanged() {
        let db = test_support::database().await;
        let mut repo = OrderRepository::load(db.snapshots(), test_support::ids()).await.unwrap();
        db.close().await;

        assert!(repo.place(naan_draft()).await.is_err());
        assert_eq!(repo.all().len(), 2);

        assert!(repo.advance("o1").await.is_err());
        assert!(repo.cancel("o2").await.is_err());
        assert_eq!(repo.get("o1").unwrap().status, OrderStatus::Pending);
        assert_eq!(repo.get("o2").unwrap().status, OrderStatus::Preparing);
    }
}
