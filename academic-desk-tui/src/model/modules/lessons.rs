//! 课程计划

use academic_desk_core::types::{Lesson, LessonDraft};
use academic_desk_core::{EntityId, ServiceHandle, Services};

use super::{format_date, format_timestamp, parse, parse_date, text, Column, ModuleSpec};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct LessonsModule;

impl ModuleSpec for LessonsModule {
    type Entity = Lesson;

    const PAGE: Page = Page::Lessons;
    const HAS_DETAIL: bool = true;
    const RESOLVES_CLASSES: bool = true;

    fn columns() -> Vec<Column> {
        let texts = &t().lessons;
        vec![
            Column::new("#", 8),
            Column::new(texts.date, 16),
            Column::new(texts.class, 26),
            Column::new(texts.topic, 50),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().lessons;
        vec![
            FormField::new("class_id", texts.class_id)
                .required()
                .rule(Rule::Integer {
                    min: 1,
                    max: EntityId::MAX,
                }),
            FormField::new("date", texts.date).required().rule(Rule::Date),
            FormField::new("topic", texts.topic)
                .required()
                .rule(Rule::MaxLen(120)),
            FormField::new("plan", texts.plan)
                .multiline()
                .rule(Rule::MaxLen(4000)),
        ]
    }

    fn fill(form: &mut FormModel, lesson: &Lesson) {
        form.set("class_id", lesson.class_id.to_string());
        form.set("date", format_date(lesson.date));
        form.set("topic", lesson.topic.as_str());
        form.set("plan", lesson.plan.as_str());
    }

    fn draft(form: &FormModel, _original: Option<&Lesson>) -> Result<LessonDraft, ValidationError> {
        Ok(LessonDraft {
            class_id: parse(form, "class_id")?,
            date: parse_date(form, "date")?,
            topic: text(form, "topic"),
            plan: text(form, "plan"),
        })
    }

    fn row(lesson: &Lesson, lookups: &LookupCache) -> Row {
        vec![
            lesson.id.to_string(),
            format_date(lesson.date),
            lookups.display(lesson.class_id),
            lesson.topic.clone(),
        ]
    }

    fn detail(lesson: &Lesson, lookups: &LookupCache) -> Vec<(&'static str, String)> {
        let texts = &t().lessons;
        vec![
            (texts.class, lookups.display(lesson.class_id)),
            (texts.date, format_date(lesson.date)),
            (texts.topic, lesson.topic.clone()),
            (texts.plan, lesson.plan.clone()),
            (t().common.created_at, format_timestamp(lesson.created_at)),
        ]
    }

    fn name(lesson: &Lesson) -> String {
        format!("{} ({})", lesson.topic, format_date(lesson.date))
    }

    fn class_id(lesson: &Lesson) -> Option<EntityId> {
        Some(lesson.class_id)
    }

    fn service(services: &Services) -> ServiceHandle<Lesson> {
        services.lessons.clone()
    }

    fn wrap(event: ModuleEvent<Lesson>) -> AppMessage {
        AppMessage::Lessons(event)
    }
}
