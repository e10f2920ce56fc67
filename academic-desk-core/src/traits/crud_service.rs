//! Narrow CRUD contract consumed by front-ends

use async_trait::async_trait;

use crate::error::CoreResult;
use crate::types::EntityId;

/// CRUD Service Trait
///
/// The only surface a front-end sees for one entity kind: "perform operation X,
/// get result or failure". Implementations are free to add referential checks.
#[async_trait]
pub trait CrudService: Send + Sync {
    /// Entity returned by the service
    type Entity: Send + Sync + 'static;
    /// User-editable fields accepted by `create` / `update`
    type Draft: Send + Sync + 'static;

    /// List all entities (ordered by ID)
    async fn list(&self) -> CoreResult<Vec<Self::Entity>>;

    /// Get one entity
    ///
    /// # Arguments
    /// * `id` - Entity ID
    async fn get(&self, id: EntityId) -> CoreResult<Self::Entity>;

    /// Create a new entity from a draft
    async fn create(&self, draft: Self::Draft) -> CoreResult<Self::Entity>;

    /// Replace the editable fields of an existing entity
    ///
    /// # Arguments
    /// * `id` - Entity ID
    /// * `draft` - new field values
    async fn update(&self, id: EntityId, draft: Self::Draft) -> CoreResult<Self::Entity>;

    /// Delete an entity
    ///
    /// # Arguments
    /// * `id` - Entity ID
    async fn delete(&self, id: EntityId) -> CoreResult<()>;
}
