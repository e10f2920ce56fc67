//! 题库

use academic_desk_core::types::{Difficulty, Question, QuestionDraft};
use academic_desk_core::{ServiceHandle, Services};

use super::{first_line, format_timestamp, invalid, text, Column, ModuleSpec};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct QuestionsModule;

const DIFFICULTIES: &[&str] = &["easy", "medium", "hard", "e", "m", "h", "1", "2", "3"];

fn difficulty_label(difficulty: Difficulty) -> &'static str {
    let texts = &t().questions;
    match difficulty {
        Difficulty::Easy => texts.easy,
        Difficulty::Medium => texts.medium,
        Difficulty::Hard => texts.hard,
    }
}

impl ModuleSpec for QuestionsModule {
    type Entity = Question;

    const PAGE: Page = Page::Questions;
    const HAS_DETAIL: bool = true;
    const HAS_ERROR_STATE: bool = true;

    fn columns() -> Vec<Column> {
        let texts = &t().questions;
        vec![
            Column::new("#", 6),
            Column::new(texts.subject, 18),
            Column::new(texts.topic, 18),
            Column::new(texts.difficulty, 12),
            Column::new(texts.statement, 46),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().questions;
        let mut difficulty = FormField::new("difficulty", texts.difficulty)
            .required()
            .rule(Rule::OneOf(DIFFICULTIES));
        difficulty.value = Difficulty::default().code().to_string();

        vec![
            FormField::new("subject", texts.subject)
                .required()
                .rule(Rule::MaxLen(60)),
            FormField::new("topic", texts.topic).rule(Rule::MaxLen(60)),
            difficulty,
            FormField::new("statement", texts.statement)
                .required()
                .multiline(),
            FormField::new("answer", texts.answer).rule(Rule::MaxLen(500)),
        ]
    }

    fn fill(form: &mut FormModel, question: &Question) {
        form.set("subject", question.subject.as_str());
        form.set("topic", question.topic.as_str());
        form.set("difficulty", question.difficulty.code());
        form.set("statement", question.statement.as_str());
        form.set("answer", question.answer.as_str());
    }

    fn draft(
        form: &FormModel,
        _original: Option<&Question>,
    ) -> Result<QuestionDraft, ValidationError> {
        let difficulty =
            Difficulty::parse(form.value("difficulty")).map_err(|_| invalid(form, "difficulty"))?;
        Ok(QuestionDraft {
            subject: text(form, "subject"),
            topic: text(form, "topic"),
            difficulty,
            statement: text(form, "statement"),
            answer: text(form, "answer"),
        })
    }

    fn row(question: &Question, _lookups: &LookupCache) -> Row {
        vec![
            question.id.to_string(),
            question.subject.clone(),
            question.topic.clone(),
            difficulty_label(question.difficulty).to_string(),
            first_line(&question.statement, 60),
        ]
    }

    fn detail(question: &Question, _lookups: &LookupCache) -> Vec<(&'static str, String)> {
        let texts = &t().questions;
        vec![
            (texts.subject, question.subject.clone()),
            (texts.topic, question.topic.clone()),
            (
                texts.difficulty,
                difficulty_label(question.difficulty).to_string(),
            ),
            (texts.statement, question.statement.clone()),
            (texts.answer, question.answer.clone()),
            (t().common.created_at, format_timestamp(question.created_at)),
        ]
    }

    fn name(question: &Question) -> String {
        first_line(&question.statement, 40)
    }

    fn service(services: &Services) -> ServiceHandle<Question> {
        services.questions.clone()
    }

    fn wrap(event: ModuleEvent<Question>) -> AppMessage {
        AppMessage::Questions(event)
    }
}
