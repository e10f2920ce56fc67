//! 班级

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::{CoreError, CoreResult};

/// 班级
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Class {
    pub id: EntityId,
    pub name: String,
    /// 学科
    #[serde(default)]
    pub subject: String,
    /// 学年
    pub year: u16,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 班级草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ClassDraft {
    pub name: String,
    pub subject: String,
    pub year: u16,
}

impl From<&Class> for ClassDraft {
    fn from(class: &Class) -> Self {
        Self {
            name: class.name.clone(),
            subject: class.subject.clone(),
            year: class.year,
        }
    }
}

impl Record for Class {
    type Draft = ClassDraft;
    const KIND: EntityKind = EntityKind::Class;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: ClassDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            name: draft.name,
            subject: draft.subject,
            year: draft.year,
            created_at,
        }
    }

    fn apply(&mut self, draft: ClassDraft) {
        self.name = draft.name;
        self.subject = draft.subject;
        self.year = draft.year;
    }

    fn check(draft: &ClassDraft) -> CoreResult<()> {
        require_text("name", &draft.name)?;
        if !(1900..=2200).contains(&draft.year) {
            return Err(CoreError::validation(format!("year {} out of range", draft.year)));
        }
        Ok(())
    }
}
