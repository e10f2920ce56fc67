//! Entity persistence abstract Trait

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::CoreResult;
use crate::types::{EntityId, Record};

/// Entity Repository Trait
///
/// Platform implementation:
/// - TUI: `JsonFileRepository` (one JSON file per entity kind)
/// - Tests / ephemeral sessions: [`InMemoryRepository`]
#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    /// Get all entities, ordered by ID
    async fn find_all(&self) -> CoreResult<Vec<T>>;

    /// Get entity based on ID
    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<T>>;

    /// Save entity (new or update)
    async fn save(&self, record: &T) -> CoreResult<()>;

    /// Delete entity, returns whether it existed
    async fn delete(&self, id: EntityId) -> CoreResult<bool>;

    /// Allocate the next free ID
    async fn next_id(&self) -> CoreResult<EntityId>;
}

/// In-memory entity repository
///
/// Default implementation, available on all platforms.
pub struct InMemoryRepository<T: Record> {
    records: Arc<RwLock<BTreeMap<EntityId, T>>>,
}

impl<T: Record> InMemoryRepository<T> {
    /// Create an empty repository
    #[must_use]
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(BTreeMap::new())),
        }
    }

    /// Create a repository pre-filled with records
    #[must_use]
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records.into_iter().map(|r| (r.id(), r)).collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }
}

impl<T: Record> Clone for InMemoryRepository<T> {
    fn clone(&self) -> Self {
        Self {
            records: Arc::clone(&self.records),
        }
    }
}

impl<T: Record> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for InMemoryRepository<T> {
    async fn find_all(&self) -> CoreResult<Vec<T>> {
        Ok(self.records.read().await.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EntityId) -> CoreResult<Option<T>> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn save(&self, record: &T) -> CoreResult<()> {
        self.records
            .write()
            .await
            .insert(record.id(), record.clone());
        Ok(())
    }

    async fn delete(&self, id: EntityId) -> CoreResult<bool> {
        Ok(self.records.write().await.remove(&id).is_some())
    }

    async fn next_id(&self) -> CoreResult<EntityId> {
        let records = self.records.read().await;
        Ok(records.keys().next_back().map_or(1, |last| last + 1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Class, ClassDraft};
    use chrono::Utc;

    fn class(id: EntityId, name: &str) -> Class {
        Class::build(
            id,
            ClassDraft {
                name: name.to_string(),
                subject: "Math".to_string(),
                year: 2024,
            },
            Utc::now(),
        )
    }

    #[tokio::test]
    async fn next_id_follows_highest_id() {
        let repo = InMemoryRepository::with_records([class(3, "3A"), class(7, "7B")]);
        assert_eq!(repo.next_id().await.unwrap(), 8);

        let empty: InMemoryRepository<Class> = InMemoryRepository::new();
        assert_eq!(empty.next_id().await.unwrap(), 1);
    }

    #[tokio::test]
    async fn delete_reports_existence() {
        let repo = InMemoryRepository::with_records([class(1, "1A")]);
        assert!(repo.delete(1).await.unwrap());
        assert!(!repo.delete(1).await.unwrap());
        assert!(repo.find_all().await.unwrap().is_empty());
    }
}
