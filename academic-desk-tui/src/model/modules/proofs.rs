//! 试卷（由题库题目组成）

use academic_desk_core::types::{Proof, ProofDraft};
use academic_desk_core::{EntityId, ServiceHandle, Services};

use super::{format_timestamp, invalid, parse, text, Column, ModuleSpec};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{parse_id_list, FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct ProofsModule;

fn join_ids(ids: &[EntityId]) -> String {
    ids.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl ModuleSpec for ProofsModule {
    type Entity = Proof;

    const PAGE: Page = Page::Proofs;
    const HAS_DETAIL: bool = true;
    const HAS_ERROR_STATE: bool = true;
    const RESOLVES_CLASSES: bool = true;

    fn columns() -> Vec<Column> {
        let texts = &t().proofs;
        vec![
            Column::new("#", 8),
            Column::new(texts.title, 46),
            Column::new(texts.class, 28),
            Column::new(texts.question_count, 18),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().proofs;
        vec![
            FormField::new("title", texts.title)
                .required()
                .rule(Rule::MaxLen(120)),
            FormField::new("class_id", texts.class_id)
                .required()
                .rule(Rule::Integer {
                    min: 1,
                    max: EntityId::MAX,
                }),
            FormField::new("question_ids", texts.question_ids)
                .required()
                .rule(Rule::IdList),
        ]
    }

    fn fill(form: &mut FormModel, proof: &Proof) {
        form.set("title", proof.title.as_str());
        form.set("class_id", proof.class_id.to_string());
        form.set("question_ids", join_ids(&proof.question_ids));
    }

    fn draft(form: &FormModel, _original: Option<&Proof>) -> Result<ProofDraft, ValidationError> {
        let question_ids =
            parse_id_list(form.value("question_ids")).ok_or_else(|| invalid(form, "question_ids"))?;
        Ok(ProofDraft {
            title: text(form, "title"),
            class_id: parse(form, "class_id")?,
            question_ids,
        })
    }

    fn row(proof: &Proof, lookups: &LookupCache) -> Row {
        vec![
            proof.id.to_string(),
            proof.title.clone(),
            lookups.display(proof.class_id),
            proof.question_ids.len().to_string(),
        ]
    }

    fn detail(proof: &Proof, lookups: &LookupCache) -> Vec<(&'static str, String)> {
        let texts = &t().proofs;
        vec![
            (texts.title, proof.title.clone()),
            (texts.class, lookups.display(proof.class_id)),
            (texts.question_count, proof.question_ids.len().to_string()),
            (texts.question_ids, join_ids(&proof.question_ids)),
            (t().common.created_at, format_timestamp(proof.created_at)),
        ]
    }

    fn name(proof: &Proof) -> String {
        proof.title.clone()
    }

    fn class_id(proof: &Proof) -> Option<EntityId> {
        Some(proof.class_id)
    }

    fn service(services: &Services) -> ServiceHandle<Proof> {
        services.proofs.clone()
    }

    fn wrap(event: ModuleEvent<Proof>) -> AppMessage {
        AppMessage::Proofs(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn test_question_ids_round_trip_through_form() {
        let proof = Proof {
            id: 2,
            title: "Avaliação 1".to_string(),
            class_id: 3,
            question_ids: vec![4, 8, 15],
            created_at: Utc::now(),
        };
        let mut form = FormModel::new(ProofsModule::fields());
        ProofsModule::fill(&mut form, &proof);
        assert_eq!(form.value("question_ids"), "4, 8, 15");
        assert_eq!(
            ProofsModule::draft(&form, Some(&proof)).unwrap(),
            ProofDraft::from(&proof)
        );
    }
}
