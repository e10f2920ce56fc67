//! 待办任务

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::CoreResult;

/// 待办任务
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: EntityId,
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// 截止日期
    #[serde(rename = "dueDate", skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub done: bool,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 任务草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub due_date: Option<NaiveDate>,
    pub done: bool,
}

impl From<&Task> for TaskDraft {
    fn from(task: &Task) -> Self {
        Self {
            title: task.title.clone(),
            description: task.description.clone(),
            due_date: task.due_date,
            done: task.done,
        }
    }
}

impl Record for Task {
    type Draft = TaskDraft;
    const KIND: EntityKind = EntityKind::Task;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: TaskDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            title: draft.title,
            description: draft.description,
            due_date: draft.due_date,
            done: draft.done,
            created_at,
        }
    }

    fn apply(&mut self, draft: TaskDraft) {
        self.title = draft.title;
        self.description = draft.description;
        self.due_date = draft.due_date;
        self.done = draft.done;
    }

    fn check(draft: &TaskDraft) -> CoreResult<()> {
        require_text("title", &draft.title)
    }
}
