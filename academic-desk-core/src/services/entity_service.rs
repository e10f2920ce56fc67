//! 通用实体服务

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::error::{CoreError, CoreResult};
use crate::traits::{CrudService, Repository};
use crate::types::{EntityId, Record};

/// 通用实体服务
///
/// 仅做草稿校验与持久化，不检查跨实体引用。
pub struct EntityService<T: Record> {
    repo: Arc<dyn Repository<T>>,
}

impl<T: Record> EntityService<T> {
    /// 创建服务实例
    #[must_use]
    pub fn new(repo: Arc<dyn Repository<T>>) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<T: Record> CrudService for EntityService<T> {
    type Entity = T;
    type Draft = T::Draft;

    async fn list(&self) -> CoreResult<Vec<T>> {
        self.repo.find_all().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<T> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or_else(|| CoreError::not_found(T::KIND, id))
    }

    async fn create(&self, draft: T::Draft) -> CoreResult<T> {
        T::check(&draft)?;

        let id = self.repo.next_id().await?;
        let record = T::build(id, draft, Utc::now());
        self.repo.save(&record).await?;

        log::info!("Created {} #{id}", T::KIND);
        Ok(record)
    }

    async fn update(&self, id: EntityId, draft: T::Draft) -> CoreResult<T> {
        T::check(&draft)?;

        let mut record = self.get(id).await?;
        record.apply(draft);
        self.repo.save(&record).await?;

        log::info!("Updated {} #{id}", T::KIND);
        Ok(record)
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        if !self.repo.delete(id).await? {
            return Err(CoreError::not_found(T::KIND, id));
        }
        log::info!("Deleted {} #{id}", T::KIND);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::task_draft;
    use crate::traits::InMemoryRepository;
    use crate::types::{EntityKind, Task};

    fn service() -> EntityService<Task> {
        EntityService::new(Arc::new(InMemoryRepository::<Task>::new()))
    }

    #[tokio::test]
    async fn create_assigns_sequential_ids() {
        let svc = service();
        let first = svc.create(task_draft("Corrigir provas")).await.unwrap();
        let second = svc.create(task_draft("Lançar notas")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
        assert_eq!(svc.list().await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn create_rejects_invalid_draft() {
        let svc = service();
        let result = svc.create(task_draft("   ")).await;

        assert!(matches!(result, Err(CoreError::ValidationError(_))));
        assert!(svc.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn update_keeps_identity() {
        let svc = service();
        let task = svc.create(task_draft("Planejar aula")).await.unwrap();

        let mut draft = task_draft("Planejar aula 2");
        draft.done = true;
        let updated = svc.update(task.id, draft).await.unwrap();

        assert_eq!(updated.id, task.id);
        assert_eq!(updated.created_at, task.created_at);
        assert_eq!(updated.title, "Planejar aula 2");
        assert!(updated.done);
    }

    #[tokio::test]
    async fn missing_entities_are_not_found() {
        let svc = service();

        let get = svc.get(42).await;
        let delete = svc.delete(42).await;
        let update = svc.update(42, task_draft("x")).await;

        for err in [get.err(), delete.err(), update.err()] {
            assert!(matches!(
                err,
                Some(CoreError::NotFound {
                    kind: EntityKind::Task,
                    id: 42
                })
            ));
        }
    }
}
