//! 评估（考试 / 作业）

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::{CoreError, CoreResult};

/// 每学年的学期数
pub const TERMS_PER_YEAR: u8 = 4;

/// 评估
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Assessment {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "classId")]
    pub class_id: EntityId,
    /// 学期（1..=4）
    pub term: u8,
    /// 权重
    pub weight: f64,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 评估草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct AssessmentDraft {
    pub name: String,
    pub class_id: EntityId,
    pub term: u8,
    pub weight: f64,
}

impl From<&Assessment> for AssessmentDraft {
    fn from(assessment: &Assessment) -> Self {
        Self {
            name: assessment.name.clone(),
            class_id: assessment.class_id,
            term: assessment.term,
            weight: assessment.weight,
        }
    }
}

impl Record for Assessment {
    type Draft = AssessmentDraft;
    const KIND: EntityKind = EntityKind::Assessment;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: AssessmentDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            class_id: draft.class_id,
            term: draft.term,
            weight: draft.weight,
            created_at,
        }
    }

    fn apply(&mut self, draft: AssessmentDraft) {
        self.name = draft.name;
        self.class_id = draft.class_id;
        self.term = draft.term;
        self.weight = draft.weight;
    }

    fn check(draft: &AssessmentDraft) -> CoreResult<()> {
        require_text("name", &draft.name)?;
        if !(1..=TERMS_PER_YEAR).contains(&draft.term) {
            return Err(CoreError::validation(format!(
                "term must be between 1 and {TERMS_PER_YEAR}"
            )));
        }
        if !draft.weight.is_finite() || draft.weight <= 0.0 {
            return Err(CoreError::validation("weight must be positive"));
        }
        Ok(())
    }
}
