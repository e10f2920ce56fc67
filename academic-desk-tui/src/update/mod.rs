//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 唯一修改 Model 的地方。签名：
//!
//!     update(&mut App, &Services, AppMessage) -> Vec<Command>
//!
//! App 由主循环独占持有，每次只处理一条消息；返回的命令交给
//! CommandExecutor 执行，结果作为新的消息回到这里。
//!
//!
//! 有模块结构：
//!     src/update/mod.rs
//!         mod navigation;     // 导航栏：切换页面，激活 / 停用模块
//!         mod module;         // 通用模块状态机（列表、表单、确认、详情、错误页）
//!         mod dashboard;      // 首页汇总
//!
//!
//!     消息分发：
//!
//!         AppMessage::List / Form / Confirm  ──▶ 当前页面的模块
//!         AppMessage::Tasks(..) 等           ──▶ 对应模块（无论当前在哪个页面）
//!         AppMessage::Dashboard(..)          ──▶ 首页汇总
//!
//!
//!     状态栏规则：
//!         用户按键产生的消息在分发前先清空状态栏，
//!         除非当前模块正在显示错误页；
//!         切换到另一个页面时总是清空。
//!

mod dashboard;
mod module;
mod navigation;

use academic_desk_core::Services;

use crate::command::Command;
use crate::message::AppMessage;
use crate::model::{App, FocusPanel, Page, ViewState};

pub use dashboard::load as load_dashboard;
use module::ModuleContext;

/// 表格以外占用的行数（标题栏、边框、表头、状态栏）
const TABLE_CHROME_ROWS: u16 = 7;

/// 把模块处理函数应用到当前页面的模块
macro_rules! on_active_module {
    ($app:ident, $services:ident, $handler:path $(, $arg:expr)*) => {{
        let mut ctx = ModuleContext {
            status: &mut $app.status,
            services: $services,
            page: $app.current_page,
        };
        match $app.current_page {
            Page::Home => Vec::new(),
            Page::Tasks => $handler(&mut $app.tasks, &mut ctx $(, $arg)*),
            Page::Classes => $handler(&mut $app.classes, &mut ctx $(, $arg)*),
            Page::Assessments => $handler(&mut $app.assessments, &mut ctx $(, $arg)*),
            Page::Lessons => $handler(&mut $app.lessons, &mut ctx $(, $arg)*),
            Page::Questions => $handler(&mut $app.questions, &mut ctx $(, $arg)*),
            Page::Proofs => $handler(&mut $app.proofs, &mut ctx $(, $arg)*),
        }
    }};
}
pub(crate) use on_active_module;

/// 把后台结果交给对应模块
macro_rules! on_module_event {
    ($app:ident, $services:ident, $field:ident, $event:expr) => {{
        let mut ctx = ModuleContext {
            status: &mut $app.status,
            services: $services,
            page: $app.current_page,
        };
        module::on_event(&mut $app.$field, &mut ctx, $event)
    }};
}

/// 处理应用消息，更新状态，返回需要执行的命令
pub fn update(app: &mut App, services: &Services, msg: AppMessage) -> Vec<Command> {
    if msg.is_user_input() && !app.active_view().is_some_and(ViewState::is_error) {
        app.status.clear();
    }

    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
            Vec::new()
        }

        AppMessage::ToggleFocus => {
            app.focus = app.focus.toggle();
            Vec::new()
        }

        AppMessage::Resize(width, height) => {
            resize(app, width, height);
            Vec::new()
        }

        AppMessage::ShowHelp => {
            app.show_help = !app.show_help;
            Vec::new()
        }

        AppMessage::Refresh => match app.current_page {
            Page::Home => dashboard::load(app, services),
            _ => on_active_module!(app, services, module::on_refresh),
        },

        AppMessage::GoBack => go_back(app, services),

        AppMessage::Navigation(nav_msg) => navigation::update(app, services, nav_msg),

        AppMessage::List(list_msg) => on_active_module!(app, services, module::on_list, list_msg),

        AppMessage::Form(form_msg) => on_active_module!(app, services, module::on_form, form_msg),

        AppMessage::Confirm(confirm_msg) => {
            on_active_module!(app, services, module::on_confirm, confirm_msg)
        }

        AppMessage::Tasks(event) => on_module_event!(app, services, tasks, event),
        AppMessage::Classes(event) => on_module_event!(app, services, classes, event),
        AppMessage::Assessments(event) => on_module_event!(app, services, assessments, event),
        AppMessage::Lessons(event) => on_module_event!(app, services, lessons, event),
        AppMessage::Questions(event) => on_module_event!(app, services, questions, event),
        AppMessage::Proofs(event) => on_module_event!(app, services, proofs, event),

        AppMessage::Dashboard(event) => {
            dashboard::on_event(app, &event);
            Vec::new()
        }

        AppMessage::Noop => Vec::new(),
    }
}

/// 返回：帮助 → 关闭；模块子视图 → 列表；列表 → 焦点回到导航栏
fn go_back(app: &mut App, services: &Services) -> Vec<Command> {
    if app.show_help {
        app.show_help = false;
        return Vec::new();
    }

    let in_list = matches!(app.active_view(), None | Some(ViewState::List));
    if in_list {
        app.focus = FocusPanel::Navigation;
        Vec::new()
    } else {
        on_active_module!(app, services, module::on_back)
    }
}

/// 终端尺寸变化：重新计算每页行数
fn resize(app: &mut App, width: u16, height: u16) {
    app.viewport = (width, height);
    let (_, rows) = app.viewport;
    let page_size = usize::from(rows.saturating_sub(TABLE_CHROME_ROWS));
    log::debug!("viewport {width}x{rows}, page size {page_size}");
    app.tasks.table.set_page_size(page_size);
    app.classes.table.set_page_size(page_size);
    app.assessments.table.set_page_size(page_size);
    app.lessons.table.set_page_size(page_size);
    app.questions.table.set_page_size(page_size);
    app.proofs.table.set_page_size(page_size);
}

#[cfg(test)]
mod tests;
