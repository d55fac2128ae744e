//! # Store
//!
//! The single state container: the four collections, the theme, and the
//! flows that touch more than one of them.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Store::open(db)                                                        │
//! │   ├── restaurants  ◄── restoflow_restaurants  (or demo data)            │
//! │   ├── menu         ◄── restoflow_menu                                   │
//! │   ├── tables       ◄── restoflow_tables                                 │
//! │   ├── orders       ◄── restoflow_orders                                 │
//! │   └── theme        ◄── restoflow_theme                                  │
//! │                                                                         │
//! │  place_order(cart)       cart ──► OrderDraft ──► orders.place           │
//! │  place_guest_order(cart) same, as the configured QR customer            │
//! │  register_restaurant()   restaurants.create ──► tables.seed_for         │
//! │  reset()                 clear snapshots ──► demo data everywhere       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;
use tracing::{debug, info, warn};

use resto_core::dashboard::{self, RestaurantStats};
use resto_core::{Cart, MenuItem, Navigator, NewMenuItem, NewRestaurant, Order, Restaurant, Theme};

use crate::config::StoreConfig;
use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::pool::Database;
use crate::repository::{MenuRepository, OrderRepository, RestaurantRepository, TableRepository};
use crate::snapshot::{SnapshotKey, SnapshotRepository};

#[derive(Debug)]
pub struct Store {
    snapshots: SnapshotRepository,
    restaurants: RestaurantRepository,
    menu: MenuRepository,
    tables: TableRepository,
    orders: OrderRepository,
    theme: Theme,
    config: StoreConfig,
}

impl Store {
    /// Loads every collection with the default [`StoreConfig`].
    pub async fn open(db: &Database) -> StoreResult<Self> {
        Self::open_with(db, StoreConfig::default()).await
    }

    /// Loads every collection. Missing or corrupt snapshots come back as
    /// the demo data.
    pub async fn open_with(db: &Database, config: StoreConfig) -> StoreResult<Self> {
        let snapshots = db.snapshots();
        let ids = Arc::new(IdGenerator::new());

        let restaurants = RestaurantRepository::load(snapshots.clone(), Arc::clone(&ids)).await?;
        let menu = MenuRepository::load(snapshots.clone(), Arc::clone(&ids)).await?;
        let tables = TableRepository::load(snapshots.clone()).await?;
        let orders = OrderRepository::load(snapshots.clone(), ids).await?;
        let theme = snapshots
            .load_raw(SnapshotKey::Theme)
            .await?
            .map(|raw| Theme::from_stored(&raw))
            .unwrap_or_default();

        info!(
            restaurants = restaurants.list().len(),
            menu_items = menu.all().len(),
            tables = tables.all().len(),
            orders = orders.all().len(),
            theme = ?theme,
            "Store opened"
        );

        Ok(Store {
            snapshots,
            restaurants,
            menu,
            tables,
            orders,
            theme,
            config,
        })
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    /// Router state for a fresh session, starting at the configured table.
    pub fn navigator(&self) -> Navigator {
        Navigator::with_table(&self.config.default_table)
    }

    // =========================================================================
    // Collections
    // =========================================================================

    pub fn restaurants(&self) -> &RestaurantRepository {
        &self.restaurants
    }

    pub fn restaurants_mut(&mut self) -> &mut RestaurantRepository {
        &mut self.restaurants
    }

    pub fn menu(&self) -> &MenuRepository {
        &self.menu
    }

    pub fn menu_mut(&mut self) -> &mut MenuRepository {
        &mut self.menu
    }

    pub fn tables(&self) -> &TableRepository {
        &self.tables
    }

    pub fn tables_mut(&mut self) -> &mut TableRepository {
        &mut self.tables
    }

    pub fn orders(&self) -> &OrderRepository {
        &self.orders
    }

    pub fn orders_mut(&mut self) -> &mut OrderRepository {
        &mut self.orders
    }

    // =========================================================================
    // Cross-collection flows
    // =========================================================================

    /// Checks out `cart` at `table_id` and stores the order.
    ///
    /// The cart is only emptied once the order has been accepted.
    pub async fn place_order(
        &mut self,
        cart: &mut Cart,
        table_id: &str,
        customer_name: &str,
    ) -> StoreResult<Order> {
        let restaurant = self.restaurants.get(cart.restaurant_id())?;
        if !restaurant.is_active {
            return Err(StoreError::RestaurantInactive(restaurant.id.clone()));
        }

        let mut pending = cart.clone();
        let draft = pending.checkout(table_id, customer_name)?;
        let order = self.orders.place(draft).await?;
        *cart = pending;
        Ok(order)
    }

    /// Checks out `cart` from the QR menu. Orders carry the configured
    /// customer name; a blank `table_id` means the configured default table.
    pub async fn place_guest_order(&mut self, cart: &mut Cart, table_id: &str) -> StoreResult<Order> {
        let table_id = match table_id.trim() {
            "" => self.config.default_table.clone(),
            t => t.to_string(),
        };
        let customer_name = self.config.customer_name.clone();
        self.place_order(cart, &table_id, &customer_name).await
    }

    /// Newest order placed from the QR menu at a restaurant.
    pub fn latest_guest_order(&self, restaurant_id: &str) -> Option<&Order> {
        self.orders
            .latest_for_customer(restaurant_id, &self.config.customer_name)
    }

    /// Registers a restaurant and seeds its floor plan. If the floor plan
    /// cannot be stored the registration is taken back.
    pub async fn register_restaurant(&mut self, new: NewRestaurant) -> StoreResult<Restaurant> {
        let restaurant = self.restaurants.create(new).await?;
        if let Err(e) = self.tables.seed_for(&restaurant).await {
            if let Err(rollback) = self.restaurants.discard(&restaurant.id).await {
                warn!(id = %restaurant.id, error = %rollback, "Could not take back registration");
            }
            return Err(e);
        }
        Ok(restaurant)
    }

    /// Adds a dish to an existing restaurant's menu.
    pub async fn add_menu_item(&mut self, restaurant_id: &str, new: NewMenuItem) -> StoreResult<MenuItem> {
        self.restaurants.get(restaurant_id)?;
        self.menu.create(restaurant_id, new).await
    }

    /// Dashboard cards for one restaurant, with the configured number of
    /// recent orders.
    pub fn stats(&self, restaurant_id: &str) -> StoreResult<RestaurantStats> {
        self.restaurants.get(restaurant_id)?;
        let orders: Vec<Order> = self
            .orders
            .for_restaurant(restaurant_id)
            .into_iter()
            .cloned()
            .collect();
        let tables: Vec<_> = self
            .tables
            .for_restaurant(restaurant_id)
            .into_iter()
            .cloned()
            .collect();
        Ok(dashboard::restaurant_stats(
            &orders,
            &tables,
            self.config.recent_orders_limit,
        ))
    }

    // =========================================================================
    // Theme
    // =========================================================================

    pub fn theme(&self) -> Theme {
        self.theme
    }

    pub async fn set_theme(&mut self, theme: Theme) -> StoreResult<()> {
        self.snapshots.save_raw(SnapshotKey::Theme, theme.as_str()).await?;
        self.theme = theme;
        debug!(theme = ?theme, "Theme changed");
        Ok(())
    }

    // =========================================================================
    // Reset
    // =========================================================================

    /// Deletes every snapshot and goes back to the demo data.
    pub async fn reset(&mut self) -> StoreResult<()> {
        let removed = self.snapshots.clear().await?;

        // With the table empty every key already loads as the defaults, so
        // each repository switches in memory before its write.
        self.restaurants.reset().await?;
        self.menu.reset().await?;
        self.tables.reset().await?;
        self.orders.reset().await?;
        self.theme = Theme::default();

        info!(removed, "Store reset to demo data");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pool::DbConfig;
    use resto_core::{defaults, Dietary, Money, OrderStatus, TableStatus, GUEST_CUSTOMER_NAME};

    async fn open() -> (Database, Store) {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let store = Store::open(&db).await.unwrap();
        (db, store)
    }

    fn spice_garden_cart(store: &Store) -> Cart {
        let mut cart = Cart::new("r1");
        cart.add_item(store.menu().get("m1").unwrap()).unwrap();
        cart.add_item(store.menu().get("m3").unwrap()).unwrap();
        cart.change_quantity("m3", 1).unwrap();
        cart
    }

    #[tokio::test]
    async fn test_fresh_store_has_demo_data() {
        let (_db, store) = open().await;
        assert_eq!(store.restaurants().list(), defaults::restaurants().as_slice());
        assert_eq!(store.menu().all(), defaults::menu_items().as_slice());
        assert_eq!(store.tables().all(), defaults::tables().as_slice());
        assert_eq!(store.orders().all().len(), 2);
        assert_eq!(store.theme(), Theme::Light);
    }

    #[tokio::test]
    async fn test_order_total_frozen_at_checkout() {
        let (_db, mut store) = open().await;
        let mut cart = spice_garden_cart(&store);
        assert_eq!(cart.total().major(), 470);

        let order = store
            .place_order(&mut cart, "Table 4", GUEST_CUSTOMER_NAME)
            .await
            .unwrap();
        assert!(cart.is_empty());
        assert_eq!(order.total_amount.major(), 470);
        assert_eq!(order.status, OrderStatus::Pending);

        store
            .menu_mut()
            .update_price("m1", Money::from_major(999))
            .await
            .unwrap();

        let stored = store.orders().get(&order.id).unwrap();
        assert_eq!(stored.total_amount.major(), 470);
        assert_eq!(stored.items[0].price.major(), 350);
        assert_eq!(
            store
                .orders()
                .latest_for_customer("r1", GUEST_CUSTOMER_NAME)
                .unwrap()
                .id,
            order.id
        );
    }

    #[tokio::test]
    async fn test_failed_checkout_keeps_cart() {
        let (_db, mut store) = open().await;
        let mut cart = spice_garden_cart(&store);

        assert!(store.place_order(&mut cart, "   ", GUEST_CUSTOMER_NAME).await.is_err());
        assert_eq!(cart.total().major(), 470);

        store.restaurants_mut().set_active("r1", false).await.unwrap();
        assert!(matches!(
            store.place_order(&mut cart, "Table 1", GUEST_CUSTOMER_NAME).await,
            Err(StoreError::RestaurantInactive(_))
        ));
        assert!(!cart.is_empty());
    }

    #[tokio::test]
    async fn test_register_restaurant_seeds_tables() {
        let (_db, mut store) = open().await;
        let mut new = NewRestaurant::named("Tandoor Nights");
        new.tables = Some(6);

        let restaurant = store.register_restaurant(new).await.unwrap();
        let tables = store.tables().for_restaurant(&restaurant.id);
        assert_eq!(tables.len(), 6);
        assert!(tables.iter().all(|t| t.status == TableStatus::Free));

        let roti = NewMenuItem {
            name: "Tandoori Roti".to_string(),
            description: None,
            price: Money::from_major(40),
            category: Some("Breads".to_string()),
            dietary: Dietary::Veg,
            image: None,
        };
        let item = store.add_menu_item(&restaurant.id, roti.clone()).await.unwrap();
        assert_eq!(store.menu().for_restaurant(&restaurant.id), vec![&item]);
        assert!(matches!(
            store.add_menu_item("r404", roti).await,
            Err(StoreError::NotFound { .. })
        ));
    }

    #[tokio::test]
    async fn test_changes_survive_reopen() {
        let (db, mut store) = open().await;
        store.set_theme(Theme::Dark).await.unwrap();
        store.tables_mut().cycle_status("r1-t1").await.unwrap();
        store.orders_mut().advance("o1").await.unwrap();

        let reopened = Store::open(&db).await.unwrap();
        assert_eq!(reopened.theme(), Theme::Dark);
        assert_eq!(reopened.tables().get("r1-t1").unwrap().status, TableStatus::Occupied);
        assert_eq!(reopened.orders().get("o1").unwrap().status, OrderStatus::Confirmed);
    }

    #[tokio::test]
    async fn test_corrupt_snapshot_falls_back_to_defaults() {
        let (db, mut store) = open().await;
        store.restaurants_mut().set_active("r2", false).await.unwrap();
        db.snapshots()
            .save_raw(SnapshotKey::Restaurants, "[{\"id\":")
            .await
            .unwrap();

        let reopened = Store::open(&db).await.unwrap();
        assert_eq!(reopened.restaurants().list(), defaults::restaurants().as_slice());
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let (db, mut store) = open().await;
        store.set_theme(Theme::Dark).await.unwrap();
        store.menu_mut().delete("m4").await.unwrap();
        store.orders_mut().cancel("o2").await.unwrap();
        store.register_restaurant(NewRestaurant::named("Temp")).await.unwrap();

        store.reset().await.unwrap();

        assert_eq!(store.theme(), Theme::Light);
        assert_eq!(store.restaurants().list(), defaults::restaurants().as_slice());
        assert_eq!(store.menu().all(), defaults::menu_items().as_slice());
        assert_eq!(store.tables().all(), defaults::tables().as_slice());

        let expected = defaults::orders(0);
        let actual = store.orders().all();
        assert_eq!(actual.len(), expected.len());
        for (a, e) in actual.iter().zip(&expected) {
            assert_eq!((&a.id, a.status, a.total_amount), (&e.id, e.status, e.total_amount));
        }

        let reopened = Store::open(&db).await.unwrap();
        assert_eq!(reopened.theme(), Theme::Light);
        assert_eq!(reopened.menu().all().len(), 4);
    }

    #[tokio::test]
    async fn test_stats_and_completed_revenue() {
        let (_db, mut store) = open().await;
        let stats = store.stats("r1").unwrap();
        assert_eq!(stats.revenue.major(), 750);
        assert_eq!(stats.floor.total(), 10);
        assert!(store.stats("r404").is_err());

        for _ in 0..4 {
            store.orders_mut().advance("o1").await.unwrap();
        }
        let revenue = store
            .restaurants()
            .completed_revenue("r1", store.orders())
            .unwrap();
        assert_eq!(revenue.major(), 470);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_order_and_cart_out_of_memory() {
        let (db, mut store) = open().await;
        let mut cart = spice_garden_cart(&store);
        db.close().await;

        for _ in 0..2 {
            assert!(store.place_order(&mut cart, "Table 4", GUEST_CUSTOMER_NAME).await.is_err());
        }
        assert_eq!(store.orders().all().len(), 2);
        assert_eq!(cart.total().major(), 470);

        assert!(store.register_restaurant(NewRestaurant::named("Offline")).await.is_err());
        assert_eq!(store.restaurants().list().len(), 2);
        assert_eq!(store.tables().all().len(), defaults::tables().len());
    }

    #[tokio::test]
    async fn test_guest_checkout_uses_configured_identity() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut config = StoreConfig::default();
        config.customer_name = "Walk-in".to_string();
        config.default_table = "Table 3".to_string();
        let mut store = Store::open_with(&db, config).await.unwrap();

        assert_eq!(store.navigator().active_table_id, "Table 3");
        assert!(store.latest_guest_order("r1").is_none());

        let mut cart = spice_garden_cart(&store);
        let order = store.place_guest_order(&mut cart, " ").await.unwrap();
        assert_eq!(order.table_id, "Table 3");
        assert_eq!(order.customer_name, "Walk-in");
        assert_eq!(store.latest_guest_order("r1").unwrap().id, order.id);

        let mut cart = spice_garden_cart(&store);
        let second = store.place_guest_order(&mut cart, "Table 9").await.unwrap();
        assert_eq!(second.table_id, "Table 9");
        assert_eq!(store.latest_guest_order("r1").unwrap().id, second.id);
    }

    #[tokio::test]
    async fn test_stats_lists_configured_number_of_recent_orders() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut config = StoreConfig::default();
        config.recent_orders_limit = 2;
        let mut store = Store::open_with(&db, config).await.unwrap();

        let mut cart = spice_garden_cart(&store);
        let placed = store
            .place_order(&mut cart, "Table 4", GUEST_CUSTOMER_NAME)
            .await
            .unwrap();

        let stats = store.stats("r1").unwrap();
        let recent: Vec<&str> = stats.recent_orders.iter().map(|o| o.id.as_str()).collect();
        assert_eq!(recent, vec![placed.id.as_str(), "o1"]);
        assert_eq!(stats.pending_orders, 2);
    }
}
