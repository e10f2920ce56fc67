//! 评估（按班级、学期）

use academic_desk_core::types::{Assessment, AssessmentDraft};
use academic_desk_core::{EntityId, ServiceHandle, Services};

use super::{parse, parse_decimal, text, Column, ModuleSpec};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct AssessmentsModule;

impl ModuleSpec for AssessmentsModule {
    type Entity = Assessment;

    const PAGE: Page = Page::Assessments;
    const HAS_ERROR_STATE: bool = true;
    const RESOLVES_CLASSES: bool = true;

    fn columns() -> Vec<Column> {
        let texts = &t().assessments;
        vec![
            Column::new("#", 8),
            Column::new(texts.name, 40),
            Column::new(texts.class, 28),
            Column::new(texts.term, 12),
            Column::new(texts.weight, 12),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().assessments;
        vec![
            FormField::new("name", texts.name)
                .required()
                .rule(Rule::MaxLen(80)),
            FormField::new("class_id", texts.class_id)
                .required()
                .rule(Rule::Integer {
                    min: 1,
                    max: EntityId::MAX,
                }),
            FormField::new("term", texts.term)
                .required()
                .rule(Rule::Integer { min: 1, max: 4 }),
            FormField::new("weight", texts.weight)
                .required()
                .rule(Rule::Decimal {
                    min: 0.01,
                    max: 100.0,
                }),
        ]
    }

    fn fill(form: &mut FormModel, assessment: &Assessment) {
        form.set("name", assessment.name.as_str());
        form.set("class_id", assessment.class_id.to_string());
        form.set("term", assessment.term.to_string());
        form.set("weight", format!("{:.1}", assessment.weight));
    }

    fn draft(
        form: &FormModel,
        _original: Option<&Assessment>,
    ) -> Result<AssessmentDraft, ValidationError> {
        Ok(AssessmentDraft {
            name: text(form, "name"),
            class_id: parse(form, "class_id")?,
            term: parse(form, "term")?,
            weight: parse_decimal(form, "weight")?,
        })
    }

    fn row(assessment: &Assessment, lookups: &LookupCache) -> Row {
        vec![
            assessment.id.to_string(),
            assessment.name.clone(),
            lookups.display(assessment.class_id),
            assessment.term.to_string(),
            format!("{:.1}", assessment.weight),
        ]
    }

    fn name(assessment: &Assessment) -> String {
        assessment.name.clone()
    }

    fn class_id(assessment: &Assessment) -> Option<EntityId> {
        Some(assessment.class_id)
    }

    fn service(services: &Services) -> ServiceHandle<Assessment> {
        services.assessments.clone()
    }

    fn wrap(event: ModuleEvent<Assessment>) -> AppMessage {
        AppMessage::Assessments(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_draft_from_form_values() {
        let mut form = FormModel::new(AssessmentsModule::fields());
        form.set("name", "Prova Bimestral");
        form.set("class_id", "1");
        form.set("term", "1");
        form.set("weight", "4,0");
        assert!(form.validate().is_ok());

        let draft = AssessmentsModule::draft(&form, None).unwrap();
        assert_eq!(
            draft,
            AssessmentDraft {
                name: "Prova Bimestral".to_string(),
                class_id: 1,
                term: 1,
                weight: 4.0,
            }
        );
    }

    #[test]
    fn test_term_outside_year_is_rejected() {
        let mut form = FormModel::new(AssessmentsModule::fields());
        form.set("name", "Recuperação");
        form.set("class_id", "1");
        form.set("term", "5");
        form.set("weight", "2");
        assert_eq!(form.validate().unwrap_err().field, "term");
    }
}
