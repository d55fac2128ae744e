//! # Menu Repository
//!
//! Dishes of every restaurant, edited from the admin menu tab.

use std::sync::Arc;
use tracing::{debug, info};

use resto_core::defaults;
use resto_core::types::{DEFAULT_MENU_CATEGORY, DEFAULT_MENU_IMAGE};
use resto_core::validation::{validate_category, validate_menu_item_name, validate_price};
use resto_core::{MenuItem, Money, NewMenuItem};

use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::snapshot::{SnapshotKey, SnapshotRepository};

#[derive(Debug, Clone)]
pub struct MenuRepository {
    snapshots: SnapshotRepository,
    ids: Arc<IdGenerator>,
    items: Vec<MenuItem>,
}

impl MenuRepository {
    pub async fn load(snapshots: SnapshotRepository, ids: Arc<IdGenerator>) -> StoreResult<Self> {
        let items = snapshots.load_or(SnapshotKey::Menu, defaults::menu_items).await?;
        debug!(count = items.len(), "Loaded menu items");
        Ok(MenuRepository {
            snapshots,
            ids,
            items,
        })
    }

    /// Every dish of every restaurant.
    pub fn all(&self) -> &[MenuItem] {
        &self.items
    }

    /// Dishes of one restaurant, in the order they were added.
    pub fn for_restaurant(&self, restaurant_id: &str) -> Vec<&MenuItem> {
        self.items
            .iter()
            .filter(|m| m.restaurant_id == restaurant_id)
            .collect()
    }

    pub fn get(&self, id: &str) -> StoreResult<&MenuItem> {
        self.items
            .iter()
            .find(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("MenuItem", id))
    }

    /// Adds a dish. New dishes start available.
    pub async fn create(&mut self, restaurant_id: &str, new: NewMenuItem) -> StoreResult<MenuItem> {
        let name = new.name.trim().to_string();
        validate_menu_item_name(&name)?;
        validate_price(new.price)?;

        let category = new.category.unwrap_or_default();
        validate_category(&category)?;
        let category = match category.trim() {
            "" => DEFAULT_MENU_CATEGORY.to_string(),
            c => c.to_string(),
        };

        let item = MenuItem {
            id: self.ids.next_id('m'),
            restaurant_id: restaurant_id.to_string(),
            name,
            description: new.description.unwrap_or_default(),
            price: new.price,
            category,
            image: new
                .image
                .filter(|i| !i.trim().is_empty())
                .unwrap_or_else(|| DEFAULT_MENU_IMAGE.to_string()),
            dietary: new.dietary,
            is_available: true,
        };

        let mut next = self.items.clone();
        next.push(item.clone());
        self.commit(next).await?;

        info!(id = %item.id, restaurant_id = %restaurant_id, name = %item.name, price = %item.price, "Menu item added");
        Ok(item)
    }

    /// Flips availability and returns the new value.
    pub async fn toggle_availability(&mut self, id: &str) -> StoreResult<bool> {
        let index = self.position(id)?;
        let mut next = self.items.clone();
        next[index].is_available = !next[index].is_available;
        let available = next[index].is_available;

        self.commit(next).await?;
        debug!(id = %id, available, "Menu item availability toggled");
        Ok(available)
    }

    /// Changes the current price. Placed orders keep the price they were
    /// ordered at.
    pub async fn update_price(&mut self, id: &str, price: Money) -> StoreResult<()> {
        validate_price(price)?;
        let index = self.position(id)?;
        let mut next = self.items.clone();
        let old = std::mem::replace(&mut next[index].price, price);

        self.commit(next).await?;
        debug!(id = %id, old = %old, new = %price, "Menu item price updated");
        Ok(())
    }

    /// Removes a dish and returns it.
    pub async fn delete(&mut self, id: &str) -> StoreResult<MenuItem> {
        let index = self.position(id)?;
        let mut next = self.items.clone();
        let removed = next.remove(index);

        self.commit(next).await?;
        info!(id = %id, name = %removed.name, "Menu item deleted");
        Ok(removed)
    }

    pub(crate) async fn reset(&mut self) -> StoreResult<()> {
        self.items = defaults::menu_items();
        self.snapshots.save(SnapshotKey::Menu, &self.items).await
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.items
            .iter()
            .position(|m| m.id == id)
            .ok_or_else(|| StoreError::not_found("MenuItem", id))
    }

    /// Writes `next` and only then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<MenuItem>) -> StoreResult<()> {
        self.snapshots.save(SnapshotKey::Menu, &next).await?;
        self.items = next;
        Ok(())
    }
}
