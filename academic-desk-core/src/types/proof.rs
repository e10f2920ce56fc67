//! 试卷（由题库组卷生成）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::{CoreError, CoreResult};

/// 试卷
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Proof {
    pub id: EntityId,
    pub title: String,
    #[serde(rename = "classId")]
    pub class_id: EntityId,
    /// 题目 ID（按出现顺序）
    #[serde(rename = "questionIds")]
    pub question_ids: Vec<EntityId>,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 试卷草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProofDraft {
    pub title: String,
    pub class_id: EntityId,
    pub question_ids: Vec<EntityId>,
}

impl From<&Proof> for ProofDraft {
    fn from(proof: &Proof) -> Self {
        Self {
            title: proof.title.clone(),
            class_id: proof.class_id,
            question_ids: proof.question_ids.clone(),
        }
    }
}

impl Record for Proof {
    type Draft = ProofDraft;
    const KIND: EntityKind = EntityKind::Proof;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: ProofDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            class_id: draft.class_id,
            question_ids: draft.question_ids,
            created_at,
        }
    }

    fn apply(&mut self, draft: ProofDraft) {
        self.title = draft.title;
        self.class_id = draft.class_id;
        self.question_ids = draft.question_ids;
    }

    fn check(draft: &ProofDraft) -> CoreResult<()> {
        require_text("title", &draft.title)?;
        if draft.question_ids.is_empty() {
            return Err(CoreError::validation("a proof needs at least one question"));
        }
        let mut seen = std::collections::HashSet::new();
        if let Some(dup) = draft.question_ids.iter().find(|id| !seen.insert(**id)) {
            return Err(CoreError::validation(format!("question #{dup} listed twice")));
        }
        Ok(())
    }
}
