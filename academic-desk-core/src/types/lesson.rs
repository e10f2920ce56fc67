//! 课程计划

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::CoreResult;

/// 课程计划
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Lesson {
    pub id: EntityId,
    #[serde(rename = "classId")]
    pub class_id: EntityId,
    pub date: NaiveDate,
    pub topic: String,
    /// 教学计划（多行）
    #[serde(default)]
    pub plan: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 课程计划草稿
#[derive(Debug, Clone, PartialEq)]
pub struct LessonDraft {
    pub class_id: EntityId,
    pub date: NaiveDate,
    pub topic: String,
    pub plan: String,
}

impl From<&Lesson> for LessonDraft {
    fn from(lesson: &Lesson) -> Self {
        Self {
            class_id: lesson.class_id,
            date: lesson.date,
            topic: lesson.topic.clone(),
            plan: lesson.plan.clone(),
        }
    }
}

impl Record for Lesson {
    type Draft = LessonDraft;
    const KIND: EntityKind = EntityKind::Lesson;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: LessonDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            class_id: draft.class_id,
            date: draft.date,
            topic: draft.topic,
            plan: draft.plan,
            created_at,
        }
    }

    fn apply(&mut self, draft: LessonDraft) {
        self.class_id = draft.class_id;
        self.date = draft.date;
        self.topic = draft.topic;
        self.plan = draft.plan;
    }

    fn check(draft: &LessonDraft) -> CoreResult<()> {
        require_text("topic", &draft.topic)
    }
}
