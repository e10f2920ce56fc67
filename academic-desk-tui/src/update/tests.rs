use std::time::Duration;

use academic_desk_core::types::{AssessmentDraft, LessonDraft};
use academic_desk_core::{CrudService, Services};
use chrono::NaiveDate;

use super::update;
use crate::message::{
    AppMessage, ConfirmMessage, DashboardSource, FormMessage, ListMessage, ModuleEvent,
};
use crate::model::state::SummarySlot;
use crate::model::{App, ConfirmFocus, FocusPanel, OpKind, Page, ViewState};
use crate::test_utils::{
    in_memory_services, labels, open_page, run, seed_class, seed_task, settle, type_text,
    FailingService, RecordingService, SlowService,
};

fn send(app: &mut App, services: &Services, msg: AppMessage) -> Vec<crate::command::Command> {
    update(app, services, msg)
}

fn list(app: &mut App, services: &Services, msg: ListMessage) -> Vec<crate::command::Command> {
    update(app, services, AppMessage::List(msg))
}

fn form(app: &mut App, services: &Services, msg: FormMessage) -> Vec<crate::command::Command> {
    update(app, services, AppMessage::Form(msg))
}

async fn seed_assessments(services: &Services, count: usize) {
    let class_id = seed_class(services, "7º A").await;
    for i in 0..count {
        services
            .assessments
            .create(AssessmentDraft {
                name: format!("Avaliação {}", i + 1),
                class_id,
                term: 1,
                weight: 2.0,
            })
            .await
            .unwrap();
    }
}

#[test]
fn test_every_module_starts_in_list_and_loading() {
    let app = App::new();
    assert_eq!(app.tasks.view, ViewState::List);
    assert_eq!(app.classes.view, ViewState::List);
    assert_eq!(app.assessments.view, ViewState::List);
    assert_eq!(app.lessons.view, ViewState::List);
    assert_eq!(app.questions.view, ViewState::List);
    assert_eq!(app.proofs.view, ViewState::List);
    assert!(app.tasks.loading && app.proofs.loading);
}

#[tokio::test]
async fn test_loading_ends_with_first_load() {
    let services = in_memory_services();
    seed_task(&services, "Planejar semana").await;
    let mut app = App::new();

    app.navigation.selected = 1;
    let commands = send(
        &mut app,
        &services,
        AppMessage::Navigation(crate::message::NavigationMessage::Confirm),
    );
    assert_eq!(app.current_page, Page::Tasks);
    assert_eq!(app.focus, FocusPanel::Content);
    assert_eq!(labels(&commands), vec!["task.list"]);
    assert!(app.tasks.loading);

    settle(&mut app, &services, commands).await;
    assert!(!app.tasks.loading);
    assert_eq!(app.tasks.table.len(), 1);
    assert_eq!(app.tasks.table.selected(), Some(0));
}

#[tokio::test]
async fn test_new_then_escape_returns_to_list_without_commands() {
    let services = in_memory_services();
    seed_assessments(&services, 3).await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;
    assert_eq!(app.assessments.table.len(), 3);

    assert!(list(&mut app, &services, ListMessage::New).is_empty());
    assert_eq!(app.assessments.view, ViewState::Creating);
    assert_eq!(app.assessments.form.as_ref().unwrap().focus_index(), 0);

    assert!(form(&mut app, &services, FormMessage::Cancel).is_empty());
    assert_eq!(app.assessments.view, ViewState::List);
    assert!(app.assessments.form.is_none());
    assert_eq!(app.assessments.table.len(), 3);
}

#[tokio::test]
async fn test_submitting_create_form_issues_one_create() {
    let mut services = in_memory_services();
    let class_id = seed_class(&services, "7º A").await;
    assert_eq!(class_id, 1);
    let (recording, created) = RecordingService::wrap(services.assessments.clone());
    services.assessments = recording;

    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;
    list(&mut app, &services, ListMessage::New);

    for value in ["Prova Bimestral", "1", "1", "4.0"] {
        type_text(&mut app, &services, value);
        assert!(form(&mut app, &services, FormMessage::NextField).is_empty());
    }
    assert!(app.assessments.form.as_ref().unwrap().is_submit_focused());

    let commands = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(labels(&commands), vec!["assessment.create"]);
    assert!(app.assessments.is_busy());
    assert_eq!(app.assessments.view, ViewState::Creating);

    let messages = run(commands).await;
    assert_eq!(messages.len(), 1);
    assert_eq!(
        *created.lock().unwrap(),
        vec![AssessmentDraft {
            name: "Prova Bimestral".to_string(),
            class_id: 1,
            term: 1,
            weight: 4.0,
        }]
    );

    let msg = messages.into_iter().next().unwrap();
    let commands = send(&mut app, &services, msg);
    assert_eq!(app.assessments.view, ViewState::List);
    assert!(!app.assessments.is_busy());
    assert_eq!(labels(&commands), vec!["assessment.list"]);
    assert!(app.status.message.is_some());

    settle(&mut app, &services, commands).await;
    assert_eq!(app.assessments.table.len(), 1);
    assert_eq!(app.assessments.table.rows()[0][2], "7º A");
}

#[tokio::test]
async fn test_enter_on_text_field_only_advances() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Classes).await;
    list(&mut app, &services, ListMessage::New);

    type_text(&mut app, &services, "8º B");
    assert!(form(&mut app, &services, FormMessage::Enter).is_empty());
    assert_eq!(app.classes.form.as_ref().unwrap().focus_index(), 1);
    assert_eq!(app.classes.view, ViewState::Creating);
}

#[tokio::test]
async fn test_validation_failure_keeps_form_and_issues_nothing() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;
    list(&mut app, &services, ListMessage::New);

    type_text(&mut app, &services, "Prova");
    form(&mut app, &services, FormMessage::NextField);
    type_text(&mut app, &services, "1");
    form(&mut app, &services, FormMessage::NextField);
    type_text(&mut app, &services, "9");
    form(&mut app, &services, FormMessage::NextField);
    form(&mut app, &services, FormMessage::NextField);
    assert!(app.assessments.form.as_ref().unwrap().is_submit_focused());

    let commands = form(&mut app, &services, FormMessage::Enter);
    assert!(commands.is_empty());
    assert_eq!(app.assessments.view, ViewState::Creating);
    assert!(!app.assessments.is_busy());
    let error = app.status.error.clone().unwrap();
    assert!(error.starts_with("Term"), "{error}");

    let form_model = app.assessments.form.as_ref().unwrap();
    assert_eq!(form_model.value("name"), "Prova");
    assert_eq!(form_model.value("term"), "9");
}

#[tokio::test]
async fn test_busy_gate_blocks_second_submit() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Corrigir provas");
    form(&mut app, &services, FormMessage::PrevField);

    let first = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(first.len(), 1);
    assert_eq!(app.tasks.in_flight.map(|op| op.kind), Some(OpKind::Create));

    let second = form(&mut app, &services, FormMessage::Enter);
    assert!(second.is_empty());
    assert!(app.status.error.is_some());

    // 忙碌时仍可在列表中导航
    form(&mut app, &services, FormMessage::Cancel);
    list(&mut app, &services, ListMessage::SelectNext);
    assert!(app.tasks.is_busy());
}

#[tokio::test]
async fn test_cancel_delete_keeps_selection_and_issues_nothing() {
    let services = in_memory_services();
    for i in 1..=8 {
        seed_task(&services, &format!("Tarefa {i}")).await;
    }
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    for _ in 0..6 {
        list(&mut app, &services, ListMessage::SelectNext);
    }
    assert_eq!(app.tasks.selected().map(|t| t.id), Some(7));

    list(&mut app, &services, ListMessage::Delete);
    assert!(matches!(
        app.tasks.view,
        ViewState::ConfirmDelete { id: 7, focus: ConfirmFocus::Cancel, .. }
    ));

    // 默认焦点在"取消"，回车即取消
    let commands = send(&mut app, &services, AppMessage::Confirm(ConfirmMessage::Apply));
    assert!(commands.is_empty());
    assert_eq!(app.tasks.view, ViewState::List);
    assert_eq!(app.tasks.table.selected(), Some(6));
    assert_eq!(services.tasks.list().await.unwrap().len(), 8);
}

#[tokio::test]
async fn test_deleting_last_row_clamps_cursor() {
    let services = in_memory_services();
    for i in 1..=3 {
        seed_task(&services, &format!("Tarefa {i}")).await;
    }
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    list(&mut app, &services, ListMessage::SelectLast);
    list(&mut app, &services, ListMessage::Delete);
    send(&mut app, &services, AppMessage::Confirm(ConfirmMessage::ToggleFocus));

    let commands = send(&mut app, &services, AppMessage::Confirm(ConfirmMessage::Apply));
    assert_eq!(labels(&commands), vec!["task.delete"]);
    settle(&mut app, &services, commands).await;

    assert_eq!(app.tasks.view, ViewState::List);
    assert_eq!(app.tasks.table.len(), 2);
    assert_eq!(app.tasks.table.selected(), Some(1));

    for _ in 0..2 {
        list(&mut app, &services, ListMessage::Delete);
        let commands = send(&mut app, &services, AppMessage::Confirm(ConfirmMessage::Confirm));
        settle(&mut app, &services, commands).await;
    }
    assert!(app.tasks.table.is_empty());
    assert_eq!(app.tasks.table.selected(), None);
}

#[tokio::test]
async fn test_load_failure_enters_error_state_and_back_retries() {
    let mut services = in_memory_services();
    services.assessments = FailingService::handle();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;

    assert!(app.assessments.view.is_error());
    assert!(app.status.error.is_some());
    assert!(!app.assessments.loading);

    // 错误页中按键不清除错误
    send(&mut app, &services, AppMessage::List(ListMessage::SelectNext));
    assert!(app.status.error.is_some());

    let commands = send(&mut app, &services, AppMessage::GoBack);
    assert_eq!(app.assessments.view, ViewState::List);
    assert!(app.status.error.is_none());
    assert_eq!(labels(&commands), vec!["assessment.list"]);
}

#[tokio::test]
async fn test_load_failure_without_error_state_stays_in_list() {
    let mut services = in_memory_services();
    services.classes = FailingService::handle();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Classes).await;

    assert_eq!(app.classes.view, ViewState::List);
    assert!(app.status.error.is_some());

    let commands = send(&mut app, &services, AppMessage::Refresh);
    assert!(app.status.error.is_none());
    assert_eq!(labels(&commands), vec!["class.list"]);
}

#[tokio::test]
async fn test_stale_create_result_is_not_applied() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Reunião");
    form(&mut app, &services, FormMessage::PrevField);
    let commands = form(&mut app, &services, FormMessage::Enter);

    // 结果到达前用户已经离开表单并打开了新表单
    form(&mut app, &services, FormMessage::Cancel);
    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Outra");

    let messages = run(commands).await;
    let follow_up = send(&mut app, &services, messages.into_iter().next().unwrap());

    assert_eq!(app.tasks.view, ViewState::Creating);
    assert_eq!(app.tasks.form.as_ref().unwrap().value("title"), "Outra");
    assert!(app.status.message.is_none());
    assert!(!app.tasks.is_busy());
    // 成功的过期结果只触发静默刷新
    assert_eq!(labels(&follow_up), vec!["task.list"]);
}

#[tokio::test]
async fn test_stale_load_is_discarded() {
    let services = in_memory_services();
    seed_task(&services, "Primeira").await;
    seed_task(&services, "Segunda").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;

    let old = send(&mut app, &services, AppMessage::Refresh);
    let old_messages = run(old).await;

    services.tasks.delete(2).await.unwrap();
    let new = send(&mut app, &services, AppMessage::Refresh);
    for msg in run(new).await {
        send(&mut app, &services, msg);
    }
    assert_eq!(app.tasks.table.len(), 1);

    // 旧加载晚到，不覆盖新结果
    for msg in old_messages {
        assert!(send(&mut app, &services, msg).is_empty());
    }
    assert_eq!(app.tasks.table.len(), 1);
}

#[tokio::test]
async fn test_class_names_resolve_incrementally() {
    let services = in_memory_services();
    let a = seed_class(&services, "7º A").await;
    let b = seed_class(&services, "8º B").await;
    for (class_id, topic) in [(a, "Frações"), (b, "Equações"), (a, "Decimais")] {
        services
            .lessons
            .create(LessonDraft {
                class_id,
                date: NaiveDate::from_ymd_opt(2024, 3, 11).unwrap(),
                topic: topic.to_string(),
                plan: String::new(),
            })
            .await
            .unwrap();
    }

    let mut app = App::new();
    app.navigation.selected = Page::all()
        .iter()
        .position(|p| *p == Page::Lessons)
        .unwrap();
    let load = send(
        &mut app,
        &services,
        AppMessage::Navigation(crate::message::NavigationMessage::Confirm),
    );
    let loaded = run(load).await.into_iter().next().unwrap();
    let lookups = send(&mut app, &services, loaded);

    // 每个不同的班级一个查询，行先显示占位
    assert_eq!(labels(&lookups), vec!["class.get", "class.get"]);
    assert_eq!(app.lessons.table.rows()[0][2], "…");

    let mut results = run(lookups).await;
    let second = results.pop().unwrap();
    send(&mut app, &services, second);
    assert_eq!(app.lessons.table.rows()[1][2], "8º B");
    assert_eq!(app.lessons.table.rows()[0][2], "…");

    let first = results.pop().unwrap();
    send(&mut app, &services, first);
    assert_eq!(app.lessons.table.rows()[0][2], "7º A");
    assert_eq!(app.lessons.table.rows()[2][2], "7º A");
}

#[tokio::test]
async fn test_detail_is_fetched_and_back_returns_to_list() {
    let services = in_memory_services();
    seed_task(&services, "Ler redações").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;

    let commands = list(&mut app, &services, ListMessage::Open);
    assert_eq!(app.tasks.view, ViewState::Detail { id: 1 });
    assert_eq!(labels(&commands), vec!["task.get"]);
    settle(&mut app, &services, commands).await;
    assert_eq!(app.tasks.detail.as_ref().map(|t| t.title.as_str()), Some("Ler redações"));

    send(&mut app, &services, AppMessage::GoBack);
    assert_eq!(app.tasks.view, ViewState::List);
    assert!(app.tasks.detail.is_none());
}

#[tokio::test]
async fn test_modules_without_detail_ignore_open() {
    let services = in_memory_services();
    seed_class(&services, "7º A").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Classes).await;
    assert!(list(&mut app, &services, ListMessage::Open).is_empty());
    assert_eq!(app.classes.view, ViewState::List);
}

#[tokio::test]
async fn test_toggle_marks_task_done() {
    let services = in_memory_services();
    seed_task(&services, "Lançar notas").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;

    let commands = list(&mut app, &services, ListMessage::Toggle);
    assert_eq!(labels(&commands), vec!["task.toggle"]);
    settle(&mut app, &services, commands).await;

    assert!(services.tasks.get(1).await.unwrap().done);
    assert_eq!(app.tasks.table.rows()[0][3], "Done");
}

#[tokio::test]
async fn test_leaving_page_discards_view_state() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Rascunho");

    open_page(&mut app, &services, Page::Home).await;
    assert_eq!(app.tasks.view, ViewState::List);
    assert!(app.tasks.form.is_none());
}

#[tokio::test]
async fn test_status_is_cleared_by_next_keypress() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    app.status.set_message("saved");

    send(&mut app, &services, AppMessage::Resize(100, 40));
    assert!(app.status.message.is_some());

    send(&mut app, &services, AppMessage::List(ListMessage::SelectNext));
    assert!(app.status.is_empty());
}

#[tokio::test]
async fn test_dashboard_surfaces_class_service_failure() {
    let mut services = in_memory_services();
    services.classes = FailingService::handle();
    seed_task(&services, "Pendente").await;
    let mut app = App::new();

    let commands = crate::app::init(&mut app, &services);
    assert_eq!(commands.len(), DashboardSource::all().len());
    settle(&mut app, &services, commands).await;

    assert_eq!(
        app.dashboard.slot(DashboardSource::Classes),
        &SummarySlot::Failed
    );
    assert!(app.status.error.as_deref().unwrap().contains("disk unavailable"));
    assert!(matches!(
        app.dashboard.slot(DashboardSource::Tasks),
        SummarySlot::Ready(summary) if summary.pending == Some(1)
    ));
}

#[tokio::test]
async fn test_quit_bypasses_module_state() {
    let services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    list(&mut app, &services, ListMessage::New);

    assert!(send(&mut app, &services, AppMessage::Quit).is_empty());
    assert!(app.should_quit);
    assert_eq!(app.tasks.view, ViewState::Creating);
}

#[tokio::test]
async fn test_resize_updates_page_size() {
    let services = in_memory_services();
    let mut app = App::new();
    send(&mut app, &services, AppMessage::Resize(120, 30));
    assert_eq!(app.viewport, (120, 30));
    assert_eq!(app.proofs.table.page_size(), 23);
}

#[tokio::test]
async fn test_stale_detail_fetch_is_discarded() {
    let services = in_memory_services();
    seed_task(&services, "Ler redações").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;

    let fetch = list(&mut app, &services, ListMessage::Open);
    send(&mut app, &services, AppMessage::GoBack);
    for msg in run(fetch).await {
        assert!(matches!(msg, AppMessage::Tasks(ModuleEvent::Fetched { .. })));
        send(&mut app, &services, msg);
    }
    assert_eq!(app.tasks.view, ViewState::List);
    assert!(app.tasks.detail.is_none());
}

#[tokio::test]
async fn test_slow_load_times_out_into_error_state() {
    let mut services = in_memory_services();
    services.assessments = SlowService::wrap(services.assessments.clone(), Duration::from_secs(5));
    let mut app = App::new();

    app.navigation.selected = 3;
    let commands = send(
        &mut app,
        &services,
        AppMessage::Navigation(crate::message::NavigationMessage::Confirm),
    );
    assert_eq!(labels(&commands), vec!["assessment.list"]);
    assert!(app.assessments.loading);

    for command in commands {
        let msg = command.run(Duration::from_millis(20)).await;
        assert!(send(&mut app, &services, msg).is_empty());
    }
    assert!(app.assessments.view.is_error());
    assert!(app.status.error.as_deref().unwrap().contains("timed out"));
}

#[tokio::test]
async fn test_edit_prefills_form_and_submits_update() {
    let services = in_memory_services();
    let id = seed_class(&services, "7º A").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Classes).await;

    assert!(list(&mut app, &services, ListMessage::Edit).is_empty());
    assert_eq!(app.classes.view, ViewState::Editing { id });
    let form_model = app.classes.form.as_ref().unwrap();
    assert_eq!(form_model.value("name"), "7º A");
    assert_eq!(form_model.value("year"), "2024");

    form(&mut app, &services, FormMessage::Backspace);
    type_text(&mut app, &services, "B");
    form(&mut app, &services, FormMessage::PrevField);
    assert!(app.classes.form.as_ref().unwrap().is_submit_focused());

    let commands = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(labels(&commands), vec!["class.update"]);
    assert_eq!(app.classes.in_flight.map(|op| op.kind), Some(OpKind::Update));

    settle(&mut app, &services, commands).await;
    assert_eq!(app.classes.view, ViewState::List);
    assert!(!app.classes.is_busy());
    assert!(app.status.message.is_some());
    assert_eq!(app.classes.table.rows()[0][1], "7º B");
    assert_eq!(services.classes.get(id).await.unwrap().name, "7º B");
}

#[tokio::test]
async fn test_failed_create_keeps_form_and_values() {
    let mut services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    services.tasks = FailingService::handle();

    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Corrigir provas");
    form(&mut app, &services, FormMessage::PrevField);
    let commands = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(labels(&commands), vec!["task.create"]);

    settle(&mut app, &services, commands).await;
    assert_eq!(app.tasks.view, ViewState::Creating);
    assert_eq!(app.tasks.form.as_ref().unwrap().value("title"), "Corrigir provas");
    assert!(!app.tasks.is_busy());
    assert!(app.status.error.as_deref().unwrap().contains("disk unavailable"));
}

#[tokio::test]
async fn test_failed_update_keeps_edit_form() {
    let mut services = in_memory_services();
    let id = seed_class(&services, "7º A").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Classes).await;
    services.classes = FailingService::handle();

    list(&mut app, &services, ListMessage::Edit);
    type_text(&mut app, &services, "!");
    form(&mut app, &services, FormMessage::PrevField);
    let commands = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(labels(&commands), vec!["class.update"]);

    settle(&mut app, &services, commands).await;
    assert_eq!(app.classes.view, ViewState::Editing { id });
    assert_eq!(app.classes.form.as_ref().unwrap().value("name"), "7º A!");
    assert!(!app.classes.is_busy());
    assert!(app.status.error.is_some());
}

#[tokio::test]
async fn test_failed_delete_returns_to_list_with_error() {
    let mut services = in_memory_services();
    seed_task(&services, "Lançar notas").await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    services.tasks = FailingService::handle();

    list(&mut app, &services, ListMessage::Delete);
    let commands = send(&mut app, &services, AppMessage::Confirm(ConfirmMessage::Confirm));
    assert_eq!(labels(&commands), vec!["task.delete"]);

    settle(&mut app, &services, commands).await;
    assert_eq!(app.tasks.view, ViewState::List);
    assert!(!app.tasks.is_busy());
    assert!(app.status.error.as_deref().unwrap().contains("disk unavailable"));
    assert_eq!(app.tasks.table.len(), 1);
}

#[tokio::test]
async fn test_stale_failure_is_reported_while_page_is_shown() {
    let mut services = in_memory_services();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Tasks).await;
    services.tasks = FailingService::handle();

    list(&mut app, &services, ListMessage::New);
    type_text(&mut app, &services, "Reunião");
    form(&mut app, &services, FormMessage::PrevField);
    let commands = form(&mut app, &services, FormMessage::Enter);
    form(&mut app, &services, FormMessage::Cancel);

    for msg in run(commands).await {
        assert!(send(&mut app, &services, msg).is_empty());
    }
    assert_eq!(app.tasks.view, ViewState::List);
    assert!(!app.tasks.is_busy());
    assert!(app.status.error.as_deref().unwrap().contains("disk unavailable"));
}

#[tokio::test]
async fn test_stale_create_after_leaving_page_leaves_module_alone() {
    let mut services = in_memory_services();
    seed_class(&services, "7º A").await;
    let healthy = services.assessments.clone();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;

    list(&mut app, &services, ListMessage::New);
    for value in ["Prova Bimestral", "1", "1", "4.0"] {
        type_text(&mut app, &services, value);
        form(&mut app, &services, FormMessage::NextField);
    }
    let create = form(&mut app, &services, FormMessage::Enter);
    assert_eq!(labels(&create), vec!["assessment.create"]);

    open_page(&mut app, &services, Page::Home).await;
    let created = run(create).await;

    // 离开页面后到达的成功结果不触发加载，服务此时即使出错也不影响模块
    services.assessments = FailingService::handle();
    for msg in created {
        assert!(send(&mut app, &services, msg).is_empty());
    }
    assert_eq!(app.assessments.view, ViewState::List);
    assert!(!app.assessments.is_busy());
    assert!(app.status.error.is_none());

    services.assessments = healthy;
    open_page(&mut app, &services, Page::Assessments).await;
    assert_eq!(app.assessments.view, ViewState::List);
    assert_eq!(app.assessments.table.len(), 1);
}

#[tokio::test]
async fn test_successful_load_leaves_error_view() {
    let services = in_memory_services();
    seed_assessments(&services, 2).await;
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;

    let reload = send(&mut app, &services, AppMessage::Refresh);
    app.assessments.view = ViewState::Error {
        message: "disk unavailable".to_string(),
    };
    settle(&mut app, &services, reload).await;

    assert_eq!(app.assessments.view, ViewState::List);
    assert_eq!(app.assessments.table.len(), 2);
}

#[tokio::test]
async fn test_opening_another_page_clears_module_error() {
    let mut services = in_memory_services();
    services.assessments = FailingService::handle();
    let mut app = App::new();
    open_page(&mut app, &services, Page::Assessments).await;
    assert!(app.assessments.view.is_error());

    send(&mut app, &services, AppMessage::ToggleFocus);
    assert_eq!(app.focus, FocusPanel::Navigation);
    assert!(app.status.error.is_some());

    open_page(&mut app, &services, Page::Classes).await;
    assert_eq!(app.current_page, Page::Classes);
    assert_eq!(app.classes.view, ViewState::List);
    assert!(app.status.error.is_none());
}
