//! 试卷服务

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::{CoreError, CoreResult};
use crate::services::{ClassScopedService, ServiceContext};
use crate::traits::CrudService;
use crate::types::{EntityId, Proof, ProofDraft};

/// 试卷服务
///
/// 组卷时校验班级与所有题目均存在。
pub struct ProofService {
    inner: ClassScopedService<Proof>,
    ctx: Arc<ServiceContext>,
}

impl ProofService {
    #[must_use]
    pub fn new(ctx: Arc<ServiceContext>) -> Self {
        Self {
            inner: ClassScopedService::new(ctx.proofs.clone(), ctx.classes.clone()),
            ctx,
        }
    }

    async fn ensure_questions(&self, draft: &ProofDraft) -> CoreResult<()> {
        for id in &draft.question_ids {
            if self.ctx.questions.find_by_id(*id).await?.is_none() {
                return Err(CoreError::validation(format!(
                    "question #{id} does not exist"
                )));
            }
        }
        Ok(())
    }
}

#[async_trait]
impl CrudService for ProofService {
    type Entity = Proof;
    type Draft = ProofDraft;

    async fn list(&self) -> CoreResult<Vec<Proof>> {
        self.inner.list().await
    }

    async fn get(&self, id: EntityId) -> CoreResult<Proof> {
        self.inner.get(id).await
    }

    async fn create(&self, draft: ProofDraft) -> CoreResult<Proof> {
        self.ensure_questions(&draft).await?;
        self.inner.create(draft).await
    }

    async fn update(&self, id: EntityId, draft: ProofDraft) -> CoreResult<Proof> {
        self.ensure_questions(&draft).await?;
        self.inner.update(id, draft).await
    }

    async fn delete(&self, id: EntityId) -> CoreResult<()> {
        self.inner.delete(id).await
    }
}
