//! # Restaurant Repository
//!
//! The tenant registry managed from the super-admin console.

use chrono::{DateTime, NaiveDate};
use std::sync::Arc;
use tracing::{debug, info};

use resto_core::defaults::{self, DEFAULT_ADDRESS, DEFAULT_COVER_IMAGE, DEFAULT_LOGO, DEFAULT_TABLE_COUNT};
use resto_core::types::slugify;
use resto_core::validation::{validate_restaurant_name, validate_table_count};
use resto_core::{dashboard, Money, NewRestaurant, Restaurant};

use crate::error::{StoreError, StoreResult};
use crate::ids::IdGenerator;
use crate::repository::OrderRepository;
use crate::snapshot::{SnapshotKey, SnapshotRepository};

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

#[derive(Debug, Clone)]
pub struct RestaurantRepository {
    snapshots: SnapshotRepository,
    ids: Arc<IdGenerator>,
    restaurants: Vec<Restaurant>,
}

impl RestaurantRepository {
    /// Loads the registry, falling back to the demo restaurants.
    pub async fn load(snapshots: SnapshotRepository, ids: Arc<IdGenerator>) -> StoreResult<Self> {
        let restaurants = snapshots
            .load_or(SnapshotKey::Restaurants, defaults::restaurants)
            .await?;
        debug!(count = restaurants.len(), "Loaded restaurants");
        Ok(RestaurantRepository {
            snapshots,
            ids,
            restaurants,
        })
    }

    /// All restaurants in registration order.
    pub fn list(&self) -> &[Restaurant] {
        &self.restaurants
    }

    pub fn get(&self, id: &str) -> StoreResult<&Restaurant> {
        self.restaurants
            .iter()
            .find(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("Restaurant", id))
    }

    /// Registers a restaurant. Blank optional fields fall back to the
    /// registration form defaults.
    pub async fn create(&mut self, new: NewRestaurant) -> StoreResult<Restaurant> {
        let name = new.name.trim().to_string();
        validate_restaurant_name(&name)?;

        let tables = new.tables.unwrap_or(DEFAULT_TABLE_COUNT);
        validate_table_count(tables)?;

        let millis = self.ids.next_millis();
        let joined_date = DateTime::from_timestamp_millis(millis)
            .map(|t| t.date_naive())
            .unwrap_or(NaiveDate::MIN);

        let restaurant = Restaurant {
            id: format!("r{}", millis),
            slug: slugify(&name),
            name,
            logo: non_blank(new.logo).unwrap_or_else(|| DEFAULT_LOGO.to_string()),
            cover_image: non_blank(new.cover_image)
                .unwrap_or_else(|| DEFAULT_COVER_IMAGE.to_string()),
            tables,
            address: non_blank(new.address).unwrap_or_else(|| DEFAULT_ADDRESS.to_string()),
            phone: new.phone.unwrap_or_default(),
            is_active: true,
            subscription_plan: new.subscription_plan,
            features: new.features,
            joined_date,
        };

        let mut next = self.restaurants.clone();
        next.push(restaurant.clone());
        self.commit(next).await?;

        info!(id = %restaurant.id, name = %restaurant.name, plan = %restaurant.subscription_plan, "Restaurant registered");
        Ok(restaurant)
    }

    /// Switches a restaurant on or off.
    pub async fn set_active(&mut self, id: &str, active: bool) -> StoreResult<()> {
        let index = self
            .restaurants
            .iter()
            .position(|r| r.id == id)
            .ok_or_else(|| StoreError::not_found("Restaurant", id))?;
        let mut next = self.restaurants.clone();
        next[index].is_active = active;

        self.commit(next).await?;
        debug!(id = %id, active, "Restaurant active flag changed");
        Ok(())
    }

    /// Revenue from the restaurant's completed orders.
    pub fn completed_revenue(&self, id: &str, orders: &OrderRepository) -> StoreResult<Money> {
        self.get(id)?;
        Ok(dashboard::completed_revenue(orders.for_restaurant(id)))
    }

    pub(crate) async fn reset(&mut self) -> StoreResult<()> {
        self.restaurants = defaults::restaurants();
        self.snapshots.save(SnapshotKey::Restaurants, &self.restaurants).await
    }

    /// Takes back a registration whose follow-up steps failed.
    pub(crate) async fn discard(&mut self, id: &str) -> StoreResult<()> {
        let next: Vec<Restaurant> = self
            .restaurants
            .iter()
            .filter(|r| r.id != id)
            .cloned()
            .collect();
        self.commit(next).await
    }

    /// Writes `next` and only then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<Restaurant>) -> StoreResult<()> {
        self.snapshots.save(SnapshotKey::Restaurants, &next).await?;
        self.restaurants = next;
        Ok(())
    }
}
