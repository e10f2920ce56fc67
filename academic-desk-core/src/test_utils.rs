//! 测试辅助模块
//!
//! 提供便捷的测试工厂方法。

use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::services::ServiceContext;
use crate::traits::Repository;
use crate::types::{
    AssessmentDraft, Class, ClassDraft, Difficulty, EntityId, LessonDraft, Question,
    QuestionDraft, Record, TaskDraft,
};

pub fn create_test_context() -> Arc<ServiceContext> {
    Arc::new(ServiceContext::in_memory())
}

pub fn task_draft(title: &str) -> TaskDraft {
    TaskDraft {
        title: title.to_string(),
        ..TaskDraft::default()
    }
}

pub fn assessment_draft(name: &str, class_id: EntityId) -> AssessmentDraft {
    AssessmentDraft {
        name: name.to_string(),
        class_id,
        term: 1,
        weight: 4.0,
    }
}

pub fn lesson_draft(class_id: EntityId, topic: &str) -> LessonDraft {
    LessonDraft {
        class_id,
        date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
        topic: topic.to_string(),
        plan: String::new(),
    }
}

pub async fn seed_class(ctx: &ServiceContext, id: EntityId, name: &str) {
    let class = Class::build(
        id,
        ClassDraft {
            name: name.to_string(),
            subject: "Matemática".to_string(),
            year: 2024,
        },
        Utc::now(),
    );
    ctx.classes.save(&class).await.unwrap();
}

pub async fn seed_question(ctx: &ServiceContext, id: EntityId, statement: &str) {
    let question = Question::build(
        id,
        QuestionDraft {
            subject: "Matemática".to_string(),
            topic: String::new(),
            difficulty: Difficulty::Easy,
            statement: statement.to_string(),
            answer: String::new(),
        },
        Utc::now(),
    );
    ctx.questions.save(&question).await.unwrap();
}
