//! 首页汇总：并发加载各模块的列表，只保留数量

use academic_desk_core::Services;
use academic_desk_core::{CoreResult, ServiceHandle};
use academic_desk_core::Record;

use crate::command::Command;
use crate::i18n::t;
use crate::message::{AppMessage, DashboardEvent, DashboardSource, SourceSummary};
use crate::model::App;

/// 发出一批汇总命令，它们各自独立完成
pub fn load(app: &mut App, services: &Services) -> Vec<Command> {
    let ticket = app.dashboard.begin_load();
    DashboardSource::all()
        .iter()
        .map(|source| summarize(*source, ticket, services))
        .collect()
}

fn summarize(source: DashboardSource, ticket: u64, services: &Services) -> Command {
    match source {
        DashboardSource::Tasks => {
            let tasks = services.tasks.clone();
            command(source, ticket, async move {
                let tasks = tasks.list().await?;
                Ok(SourceSummary {
                    total: tasks.len(),
                    pending: Some(tasks.iter().filter(|task| !task.done).count()),
                })
            })
        }
        DashboardSource::Classes => count(source, ticket, services.classes.clone()),
        DashboardSource::Assessments => count(source, ticket, services.assessments.clone()),
        DashboardSource::Questions => count(source, ticket, services.questions.clone()),
        DashboardSource::Proofs => count(source, ticket, services.proofs.clone()),
    }
}

/// 只统计总数
fn count<T: Record>(source: DashboardSource, ticket: u64, service: ServiceHandle<T>) -> Command {
    command(source, ticket, async move {
        let entities = service.list().await?;
        Ok(SourceSummary {
            total: entities.len(),
            pending: None,
        })
    })
}

fn command(
    source: DashboardSource,
    ticket: u64,
    future: impl std::future::Future<Output = CoreResult<SourceSummary>> + Send + 'static,
) -> Command {
    Command::service(
        format!("dashboard.{source:?}").to_lowercase(),
        future,
        move |result| {
            AppMessage::Dashboard(DashboardEvent {
                ticket,
                source,
                result,
            })
        },
    )
}

/// 填入一条汇总结果；任何来源失败都显示在状态栏
pub fn on_event(app: &mut App, event: &DashboardEvent) {
    if !app.dashboard.apply(event) {
        log::debug!("stale dashboard result for {:?} discarded", event.source);
        return;
    }
    if let Err(err) = &event.result {
        app.status
            .set_error(format!("{}: {}", t().home.load_failed, err.user_message()));
    }
}
