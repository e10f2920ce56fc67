//! 从属于班级的实体服务（评估、课程计划、试卷）

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::services::EntityService;
use crate::traits::{CrudService, Repository};
use crate::types::{Assessment, Class, EntityId, Lesson, Proof, Record};

/// 引用某个班级的实体
pub trait ClassScoped: Record {
    /// 实体所属班级
    fn class_id(&self) -> EntityId;

    /// 草稿引用的班级
    fn draft_class_id(draft: &Self::Draft) -> EntityId;
}

impl ClassScoped for Assessment {
    fn class_id(&self) -> EntityId {
        self.class_id
    }

    fn draft_class_id(draft: &Self::Draft) -> EntityId {
        draft.class_id
    }
}

impl ClassScoped for Lesson {
    fn class_id(&self) -> EntityId {
        self.class_id
    }

    fn draft_class_id(draft: &Self::Draft) -> EntityId {
        draft.class_id
    }
}

impl ClassScoped for Proof {
    fn class_id(&self) -> EntityId {
        self.class_id
    }

    fn draft_class_id(draft: &Self::Draft) -> EntityId {
        draft.class_id
    }
}

/// 创建 / 更新前校验所属班级存在
pub struct ClassScopedService<T: ClassScoped> {
    inner: EntityService<T>,
    classes: Arc<dyn Repository<Class>>,
}

impl<T: ClassScoped> ClassScopedService<T> {
    #[must_use]
    pub fn new(repo: Arc<dyn Repository<T>>, classes: Arc<dyn Repository<Class>>) -> Self {
        Self {
            inner: EntityService::new(repo),
            classes,
        }
    }

    /// 校验草稿引用的班级存在
    pub async fn ensure_class(&self, draft: &T::Draft) -> CoreResult<()> {
        let class_id = T::draft_class_id(draft);
        if self.classes.find_by_id(class_id).await?.is_none() {
            return Err(CoreError::validation(format!(
                "class #{class_id} does not exist"
            )));
        }
        Ok(())
    }
}

#[async_trait]
impl<T: ClassScoped> CrudService for ClassScopedService<T> {
    type Entity = T;
    type Draft = T::Draft;

    async fn list(&self) -> CoreResult<Vec<T>> {
        self.inner.list().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<T> {
        self.inner.get(id).await
    }

    async fn create(&self, draft: T::Draft) -> CoreResult<T> {
        self.ensure_class(&draft).await?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: EntityId, draft: T::Draft) -> CoreResult<T> {
        self.ensure_class(&draft).await?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        self.inner.delete(id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::{assessment_draft, create_test_context, seed_class};

    #[tokio::test]
    async fn create_requires_existing_class() {
        let ctx = create_test_context();
        let svc = ClassScopedService::new(ctx.assessments.clone(), ctx.classes.clone());

        let err = svc
            .create(assessment_draft("Prova Bimestral", 1))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::ValidationError(_)));

        seed_class(&ctx, 1, "1º Ano A").await;
        let created = svc
            .create(assessment_draft("Prova Bimestral", 1))
            .await
            .unwrap();
        assert_eq!(created.class_id, 1);
    }

    #[tokio::test]
    async fn update_checks_new_class() {
        let ctx = create_test_context();
        seed_class(&ctx, 1, "1º Ano A").await;
        let svc = ClassScopedService::new(ctx.assessments.clone(), ctx.classes.clone());
        let created = svc
            .create(assessment_draft("Trabalho", 1))
            .await
            .unwrap();

        let result = svc.update(created.id, assessment_draft("Trabalho", 9)).await;
        assert!(result.is_err());
        assert_eq!(svc.get(created.id).await.unwrap().class_id, 1);
    }
}
