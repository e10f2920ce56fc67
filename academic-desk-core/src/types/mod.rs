//! 类型定义模块

mod assessment;
mod class;
mod lesson;
mod proof;
mod question;
mod task;

use std::fmt;

use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::error::CoreResult;

pub use assessment::{Assessment, AssessmentDraft};
pub use class::{Class, ClassDraft};
pub use lesson::{Lesson, LessonDraft};
pub use proof::{Proof, ProofDraft};
pub use question::{Difficulty, Question, QuestionDraft};
pub use task::{Task, TaskDraft};

/// 实体 ID（自增整数）
pub type EntityId = i64;

/// 实体种类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Task,
    Class,
    Assessment,
    Lesson,
    Question,
    Proof,
}

impl EntityKind {
    /// 机器可读名称（同时用作存储文件名）
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Task => "task",
            Self::Class => "class",
            Self::Assessment => "assessment",
            Self::Lesson => "lesson",
            Self::Question => "question",
            Self::Proof => "proof",
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// 可持久化的实体
///
/// 每种实体都有一个对应的 Draft（用户可编辑的字段，不含 ID 与时间戳）。
/// 仓库只负责存取，草稿校验由 [`Record::check`] 完成。
pub trait Record: Clone + fmt::Debug + Send + Sync + Serialize + DeserializeOwned + 'static {
    /// 用户可编辑字段
    type Draft: Clone + fmt::Debug + Send + Sync + 'static;

    /// 实体种类
    const KIND: EntityKind;

    /// 实体 ID
    fn id(&self) -> EntityId;

    /// 由草稿构造新实体
    fn build(id: EntityId, draft: Self::Draft, created_at: DateTime<Utc>) -> Self;

    /// 将草稿应用到已有实体（保留 ID 与创建时间）
    fn apply(&mut self, draft: Self::Draft);

    /// 校验草稿（不涉及其他实体的引用检查）
    fn check(draft: &Self::Draft) -> CoreResult<()>;
}

/// 非空文本校验
pub(crate) fn require_text(field: &str, value: &str) -> CoreResult<()> {
    if value.trim().is_empty() {
        return Err(crate::CoreError::validation(format!("{field} must not be empty")));
    }
    Ok(())
}
