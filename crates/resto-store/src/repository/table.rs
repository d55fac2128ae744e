//! # Table Repository
//!
//! Floor plans. A click on a table advances it one step:
//!
//! ```text
//! free ──► occupied ──► reserved ──► free
//! ```

use tracing::{debug, info};

use resto_core::defaults;
use resto_core::{Restaurant, Table, TableStatus};

use crate::error::{StoreError, StoreResult};
use crate::snapshot::{SnapshotKey, SnapshotRepository};

#[derive(Debug, Clone)]
pub struct TableRepository {
    snapshots: SnapshotRepository,
    tables: Vec<Table>,
}

impl TableRepository {
    pub async fn load(snapshots: SnapshotRepository) -> StoreResult<Self> {
        let tables = snapshots.load_or(SnapshotKey::Tables, defaults::tables).await?;
        debug!(count = tables.len(), "Loaded tables");
        Ok(TableRepository { snapshots, tables })
    }

    pub fn all(&self) -> &[Table] {
        &self.tables
    }

    /// Tables of one restaurant, ordered by table number.
    pub fn for_restaurant(&self, restaurant_id: &str) -> Vec<&Table> {
        let mut tables: Vec<&Table> = self
            .tables
            .iter()
            .filter(|t| t.restaurant_id == restaurant_id)
            .collect();
        tables.sort_by_key(|t| t.number);
        tables
    }

    pub fn get(&self, id: &str) -> StoreResult<&Table> {
        self.tables
            .iter()
            .find(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("Table", id))
    }

    pub async fn set_status(&mut self, id: &str, status: TableStatus) -> StoreResult<()> {
        let index = self.position(id)?;
        let mut next = self.tables.clone();
        next[index].status = status;

        self.commit(next).await?;
        debug!(id = %id, status = %status, "Table status set");
        Ok(())
    }

    /// Advances the table one step and returns the new status.
    pub async fn cycle_status(&mut self, id: &str) -> StoreResult<TableStatus> {
        let index = self.position(id)?;
        let mut next = self.tables.clone();
        let from = next[index].status;
        let to = from.next();
        next[index].status = to;

        self.commit(next).await?;
        debug!(id = %id, from = %from, to = %to, "Table status cycled");
        Ok(to)
    }

    /// Creates free tables `1..=restaurant.tables` for a restaurant that
    /// has none yet. Returns how many were created.
    pub async fn seed_for(&mut self, restaurant: &Restaurant) -> StoreResult<usize> {
        if self.tables.iter().any(|t| t.restaurant_id == restaurant.id) {
            debug!(restaurant_id = %restaurant.id, "Floor plan already exists");
            return Ok(0);
        }

        let seeded = defaults::seed_tables(&restaurant.id, restaurant.tables);
        let count = seeded.len();
        let mut next = self.tables.clone();
        next.extend(seeded);
        self.commit(next).await?;

        info!(restaurant_id = %restaurant.id, count, "Floor plan seeded");
        Ok(count)
    }

    pub(crate) async fn reset(&mut self) -> StoreResult<()> {
        self.tables = defaults::tables();
        self.snapshots.save(SnapshotKey::Tables, &self.tables).await
    }

    fn position(&self, id: &str) -> StoreResult<usize> {
        self.tables
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| StoreError::not_found("Table", id))
    }

    /// Writes `next` and only then makes it the in-memory collection.
    async fn commit(&mut self, next: Vec<Table>) -> StoreResult<()> {
        self.snapshots.save(SnapshotKey::Tables, &next).await?;
        self.tables = next;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::test_support;

    async fn repo() -> TableRepository {
        TableRepository::load(test_support::snapshots().await).await.unwrap()
    }

    #[tokio::test]
    async fn test_for_restaurant_sorted_by_number() {
        let repo = repo().await;
        let numbers: Vec<u32> = repo.for_restaurant("r1").iter().map(|t| t.number).collect();
        assert_eq!(numbers, (1..=10).collect::<Vec<_>>());
        assert_eq!(repo.for_restaurant("r2").len(), 8);
    }

    #[tokio::test]
    async fn test_three_cycles_return_to_start() {
        let mut repo = repo().await;
        let start = repo.get("r1-t8").unwrap().status;

        assert_eq!(repo.cycle_status("r1-t8").await.unwrap(), TableStatus::Free);
        assert_eq!(repo.cycle_status("r1-t8").await.unwrap(), TableStatus::Occupied);
        assert_eq!(repo.cycle_status("r1-t8").await.unwrap(), start);
    }

    #[tokio::test]
    async fn test_set_status_unknown_table() {
        let mut repo = repo().await;
        assert!(matches!(
            repo.set_status("r1-t99", TableStatus::Reserved).await,
            Err(StoreError::NotFound { .. })
        ));
        repo.set_status("r1-t1", TableStatus::Reserved).await.unwrap();
        assert_eq!(repo.get("r1-t1").unwrap().status, TableStatus::Reserved);
    }

    #[tokio::test]
    async fn test_seed_for_is_idempotent() {
        let mut repo = repo().await;
        let mut restaurant = defaults::restaurants().remove(1);
        restaurant.id = "r77".to_string();
        restaurant.tables = 3;

        assert_eq!(repo.seed_for(&restaurant).await.unwrap(), 3);
        assert_eq!(repo.seed_for(&restaurant).await.unwrap(), 0);
        assert_eq!(repo.for_restaurant("r77").len(), 3);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_memory_unchanged() {
        let db = test_support::database().await;
        let mut repo = TableRepository::load(db.snapshots()).await.unwrap();
        db.close().await;

        assert!(repo.cycle_status("r1-t1").await.is_err());
        assert_eq!(repo.get("r1-t1").unwrap().status, TableStatus::Free);

        let mut restaurant = defaults::restaurants().remove(1);
        restaurant.id = "r77".to_string();
        assert!(repo.seed_for(&restaurant).await.is_err());
        assert!(repo.for_restaurant("r77").is_empty());
    }
}
