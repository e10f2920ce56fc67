//! 导航消息处理：切换页面时停用旧模块、激活新模块

use academic_desk_core::Services;

use super::module::{self, ModuleContext};
use super::{dashboard, on_active_module};
use crate::command::Command;
use crate::message::NavigationMessage;
use crate::model::{App, FocusPanel, Page};

/// 处理导航消息
pub fn update(app: &mut App, services: &Services, msg: NavigationMessage) -> Vec<Command> {
    match msg {
        NavigationMessage::SelectPrevious => app.navigation.select_previous(),
        NavigationMessage::SelectNext => app.navigation.select_next(),
        NavigationMessage::SelectFirst => app.navigation.select_first(),
        NavigationMessage::SelectLast => app.navigation.select_last(),
        NavigationMessage::Confirm => {
            if let Some(page) = app.navigation.current() {
                return open_page(app, services, page);
            }
        }
    }
    Vec::new()
}

/// 切换到指定页面，焦点移到内容面板
pub fn open_page(app: &mut App, services: &Services, page: Page) -> Vec<Command> {
    app.focus = FocusPanel::Content;
    if app.current_page == page {
        return Vec::new();
    }

    log::debug!("page {:?} -> {page:?}", app.current_page);
    // 旧页面的错误不带到新页面
    app.status.clear();
    deactivate(app);
    app.current_page = page;

    match page {
        Page::Home => dashboard::load(app, services),
        _ => on_active_module!(app, services, module::activate),
    }
}

/// 停用当前页面的模块（视图状态随之丢弃）
fn deactivate(app: &mut App) {
    match app.current_page {
        Page::Home => {}
        Page::Tasks => module::deactivate(&mut app.tasks),
        Page::Classes => module::deactivate(&mut app.classes),
        Page::Assessments => module::deactivate(&mut app.assessments),
        Page::Lessons => module::deactivate(&mut app.lessons),
        Page::Questions => module::deactivate(&mut app.questions),
        Page::Proofs => module::deactivate(&mut app.proofs),
    }
}
