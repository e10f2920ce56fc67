//! 班级服务

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::services::{EntityService, ServiceContext};
use crate::traits::CrudService;
use crate::types::{Class, ClassDraft, EntityId, EntityKind};

/// 班级服务
///
/// 删除前检查是否仍被评估、课程计划或试卷引用。
pub struct ClassService {
    inner: EntityService<Class>,
    ctx: Arc<ServiceContext>,
}

impl ClassService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            inner: EntityService::new(ctx.classes.clone()),
            ctx,
        }
    }

    /// 查找第一个引用该班级的实体种类
    async fn first_reference(&self, id: EntityId) -> CoreResult<Option<EntityKind>> {
        if self
            .ctx
            .assessments
            .find_all()
            .await?
            .iter()
            .any(|a| a.class_id == id)
        {
            return Ok(Some(EntityKind::Assessment));
        }
        if self
            .ctx
            .lessons
            .find_all()
            .await?
            .iter()
            .any(|l| l.class_id == id)
        {
            return Ok(Some(EntityKind::Lesson));
        }
        if self
            .ctx
            .proofs
            .find_all()
            .await?
            .iter()
            .any(|p| p.class_id == id)
        {
            return Ok(Some(EntityKind::Proof));
        }
        Ok(None)
    }
}

#[async_trait]
impl CrudService for ClassService {
    type Entity = Class;
    type Draft = ClassDraft;

    async fn list(&self) -> CoreResult<Vec<Class>> {
        self.inner.list().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<Class> {
        self.inner.get(id).await
    }

    async fn create(&self, draft: ClassDraft) -> CoreResult<Class> {
        self.inner.create(draft).await
    }

    async fn update(&self, id: EntityId, draft: ClassDraft) -> CoreResult<Class> {
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        if let Some(used_by) = self.first_reference(id).await? {
            log::warn!("Refusing to delete class #{id}: still used by {used_by}");
            return Err(CoreError::InUse {
                kind: EntityKind::Class,
                id,
                used_by,
            });
        }
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{create_test_context, lesson_draft, seed_class};
    use crate::services::ClassScopedService;

    #[tokio::test]
    async fn delete_refuses_referenced_class() {
        let ctx = create_test_context();
        seed_class(&ctx, 1, "2º Ano B").await;
        let lessons = ClassScopedService::new(ctx.lessons.clone(), ctx.classes.clone());
        lessons.create(lesson_draft(1, "Frações")).await.unwrap();

        let svc = ClassService::new(ctx.clone());
        let err = svc.delete(1).await.unwrap_err();

        assert!(matches!(
            err,
            CoreError::InUse {
                used_by: EntityKind::Lesson,
                ..
            }
        ));
        assert!(svc.get(1).await.is_ok());
    }

    #[tokio::test]
    async fn delete_unreferenced_class() {
        let ctx = create_test_context();
        seed_class(&ctx, 4, "3º Ano C").await;
        let svc = ClassService::new(ctx);

        svc.delete(4).await.unwrap();
        assert!(svc.list().await.unwrap().is_empty());
    }
}
