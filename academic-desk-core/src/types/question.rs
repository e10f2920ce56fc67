//! 题库

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{require_text, EntityId, EntityKind, Record};
use crate::error::{CoreError, CoreResult};

/// 难度
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Easy,
    #[default]
    Medium,
    Hard,
}

impl Difficulty {
    /// 所有难度
    pub fn all() -> &'static [Difficulty] {
        &[Difficulty::Easy, Difficulty::Medium, Difficulty::Hard]
    }

    /// 机器可读名称
    pub fn code(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    /// 从代码或数字解析（1=easy, 2=medium, 3=hard）
    pub fn parse(input: &str) -> CoreResult<Self> {
        match input.trim().to_ascii_lowercase().as_str() {
            "easy" | "e" | "1" => Ok(Difficulty::Easy),
            "medium" | "m" | "2" => Ok(Difficulty::Medium),
            "hard" | "h" | "3" => Ok(Difficulty::Hard),
            other => Err(CoreError::validation(format!("unknown difficulty: {other}"))),
        }
    }
}

/// 题目
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Question {
    pub id: EntityId,
    pub subject: String,
    #[serde(default)]
    pub topic: String,
    #[serde(default)]
    pub difficulty: Difficulty,
    /// 题干（多行）
    pub statement: String,
    #[serde(default)]
    pub answer: String,
    #[serde(rename = "createdAt")]
    pub created_at: DateTime<Utc>,
}

/// 题目草稿
#[derive(Debug, Clone, PartialEq, Default)]
pub struct QuestionDraft {
    pub subject: String,
    pub topic: String,
    pub difficulty: Difficulty,
    pub statement: String,
    pub answer: String,
}

impl From<&Question> for QuestionDraft {
    fn from(question: &Question) -> Self {
        Self {
            subject: question.subject.clone(),
            topic: question.topic.clone(),
            difficulty: question.difficulty,
            statement: question.statement.clone(),
            answer: question.answer.clone(),
        }
    }
}

impl Record for Question {
    type Draft = QuestionDraft;
    const KIND: EntityKind = EntityKind::Question;

    fn id(&self) -> EntityId {
        self.id
    }

    fn build(id: EntityId, draft: QuestionDraft, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            subject: draft.subject,
            topic: draft.topic,
            difficulty: draft.difficulty,
            statement: draft.statement,
            answer: draft.answer,
            created_at,
        }
    }

    fn apply(&mut self, draft: QuestionDraft) {
        self.subject = draft.subject;
        self.topic = draft.topic;
        self.difficulty = draft.difficulty;
        self.statement = draft.statement;
        self.answer = draft.answer;
    }

    fn check(draft: &QuestionDraft) -> CoreResult<()> {
        require_text("subject", &draft.subject)?;
        require_text("statement", &draft.statement)
    }
}
