//! 班级

use academic_desk_core::types::{Class, ClassDraft};
use academic_desk_core::{ServiceHandle, Services};

use super::{parse, text, Column, ModuleSpec};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct ClassesModule;

impl ModuleSpec for ClassesModule {
    type Entity = Class;

    const PAGE: Page = Page::Classes;

    fn columns() -> Vec<Column> {
        let texts = &t().classes;
        vec![
            Column::new("#", 8),
            Column::new(texts.name, 42),
            Column::new(texts.subject, 35),
            Column::new(texts.year, 15),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().classes;
        vec![
            FormField::new("name", texts.name)
                .required()
                .rule(Rule::MaxLen(60)),
            FormField::new("subject", texts.subject).rule(Rule::MaxLen(60)),
            FormField::new("year", texts.year)
                .required()
                .rule(Rule::Integer {
                    min: 1900,
                    max: 2200,
                }),
        ]
    }

    fn fill(form: &mut FormModel, class: &Class) {
        form.set("name", class.name.as_str());
        form.set("subject", class.subject.as_str());
        form.set("year", class.year.to_string());
    }

    fn draft(form: &FormModel, _original: Option<&Class>) -> Result<ClassDraft, ValidationError> {
        Ok(ClassDraft {
            name: text(form, "name"),
            subject: text(form, "subject"),
            year: parse(form, "year")?,
        })
    }

    fn row(class: &Class, _lookups: &LookupCache) -> Row {
        vec![
            class.id.to_string(),
            class.name.clone(),
            class.subject.clone(),
            class.year.to_string(),
        ]
    }

    fn name(class: &Class) -> String {
        class.name.clone()
    }

    fn service(services: &Services) -> ServiceHandle<Class> {
        services.classes.clone()
    }

    fn wrap(event: ModuleEvent<Class>) -> AppMessage {
        AppMessage::Classes(event)
    }
}
