//! 待办任务

use academic_desk_core::types::{Task, TaskDraft};
use academic_desk_core::{ServiceHandle, Services};
use chrono::Local;

use super::{
    format_date, format_timestamp, parse_optional_date, text, Column, ModuleSpec,
};
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};
use crate::model::form::{FormField, FormModel, Rule, ValidationError};
use crate::model::state::LookupCache;
use crate::model::table::Row;
use crate::model::Page;

pub struct TasksModule;

fn status(task: &Task) -> &'static str {
    let texts = &t().tasks;
    if task.done {
        texts.done
    } else if task.due_date.is_some_and(|due| due < Local::now().date_naive()) {
        texts.overdue
    } else {
        texts.pending
    }
}

impl ModuleSpec for TasksModule {
    type Entity = Task;

    const PAGE: Page = Page::Tasks;
    const HAS_DETAIL: bool = true;

    fn columns() -> Vec<Column> {
        let texts = &t().tasks;
        vec![
            Column::new("#", 8),
            Column::new(texts.title, 52),
            Column::new(texts.due_date, 20),
            Column::new(texts.status, 20),
        ]
    }

    fn fields() -> Vec<FormField> {
        let texts = &t().tasks;
        vec![
            FormField::new("title", texts.title)
                .required()
                .rule(Rule::MaxLen(120)),
            FormField::new("description", texts.description).rule(Rule::MaxLen(500)),
            FormField::new("due_date", texts.due_date).rule(Rule::Date),
        ]
    }

    fn fill(form: &mut FormModel, task: &Task) {
        form.set("title", task.title.as_str());
        form.set("description", task.description.as_str());
        form.set("due_date", task.due_date.map(format_date).unwrap_or_default());
    }

    fn draft(form: &FormModel, original: Option<&Task>) -> Result<TaskDraft, ValidationError> {
        Ok(TaskDraft {
            title: text(form, "title"),
            description: text(form, "description"),
            due_date: parse_optional_date(form, "due_date")?,
            done: original.is_some_and(|task| task.done),
        })
    }

    fn row(task: &Task, _lookups: &LookupCache) -> Row {
        vec![
            task.id.to_string(),
            task.title.clone(),
            task.due_date.map_or_else(|| "-".to_string(), format_date),
            status(task).to_string(),
        ]
    }

    fn detail(task: &Task, _lookups: &LookupCache) -> Vec<(&'static str, String)> {
        let texts = &t().tasks;
        vec![
            (texts.title, task.title.clone()),
            (texts.description, task.description.clone()),
            (
                texts.due_date,
                task.due_date.map_or_else(|| "-".to_string(), format_date),
            ),
            (texts.status, status(task).to_string()),
            (t().common.created_at, format_timestamp(task.created_at)),
        ]
    }

    fn name(task: &Task) -> String {
        task.title.clone()
    }

    fn toggled(task: &Task) -> Option<TaskDraft> {
        Some(TaskDraft {
            done: !task.done,
            ..TaskDraft::from(task)
        })
    }

    fn service(services: &Services) -> ServiceHandle<Task> {
        services.tasks.clone()
    }

    fn wrap(event: ModuleEvent<Task>) -> AppMessage {
        AppMessage::Tasks(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};

    fn task(done: bool) -> Task {
        Task {
            id: 4,
            title: "Corrigir provas".to_string(),
            description: String::new(),
            due_date: NaiveDate::from_ymd_opt(2024, 3, 11),
            done,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fill_then_draft_keeps_done_flag() {
        let original = task(true);
        let mut form = FormModel::new(TasksModule::fields());
        TasksModule::fill(&mut form, &original);
        assert_eq!(form.value("due_date"), "2024-03-11");

        let draft = TasksModule::draft(&form, Some(&original)).unwrap();
        assert_eq!(draft, TaskDraft::from(&original));
    }

    #[test]
    fn test_empty_due_date_is_none() {
        let mut form = FormModel::new(TasksModule::fields());
        form.set("title", "Planejar aula");
        let draft = TasksModule::draft(&form, None).unwrap();
        assert_eq!(draft.due_date, None);
        assert!(!draft.done);
    }

    #[test]
    fn test_toggle_flips_done() {
        let draft = TasksModule::toggled(&task(false)).unwrap();
        assert!(draft.done);
        assert_eq!(draft.title, "Corrigir provas");
    }
}
