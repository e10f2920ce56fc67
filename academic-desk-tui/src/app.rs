//!
//! app.rs
//! 应用主循环
//!
//!
//!
//! 在应用启动时，创建终端并初始化为以下状态：
//!
//! App {
//!
//!     should_quit: bool = false,                      // 决定应用是否应该退出
//!     focus: FocusPanel::Navigation,                  // 当前焦点在哪个面板
//!     navigation: NavigationState{
//!         items: [Home, Tasks, Classes, Assessments, Lessons, Questions, Proofs],
//!         selected = 0                                    // 当前选中第几项，默认为 0
//!     },
//!     current_page = Page::Home,                      // 当前显示的页面，默认为 Home
//!     status = StatusSurface { error: None, message: None },
//!     dashboard / tasks / classes / ...               // 各页面状态，均为空
//!
//! }
//!
//! 随后 init() 发起首页汇总的加载。
//!
//!
//! 空闲时主循环大约每 100 ms 执行一次；有命令结果待处理时不等待输入
//! 应用的主循环中有：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查 APP 是否应该退出
//!     let msg = match executor.try_next() {           // 已完成命令的结果优先，不等待输入
//!         Some(msg) => msg,
//!         None => match poll_event() {                // 轮询获取输入，在此等待 100ms
//!             Some(event) => handle_event(event, &app),   // 接收原始事件并翻译为消息
//!             None => continue,
//!         },
//!     };
//!     let commands = update(&mut app, msg);           // 更新状态，得到命令
//!     executor.spawn_all(commands);                   // 命令在后台执行
//! }
//!
//! 每轮只处理一条消息，处理之后立即重新渲染。
//!
//! 主循环本身从不等待任何命令，慢操作只会让对应模块保持 loading / busy。

use std::time::Duration;

use academic_desk_core::Services;
use anyhow::Result;

use crate::command::{Command, CommandExecutor};
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

/// 事件轮询间隔
const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// 下一条要处理的消息
///
/// 已完成命令的结果优先，此时不等待输入；否则最多等待 `wait` 读取一个输入事件。
fn next_message(
    app: &App,
    executor: &mut CommandExecutor,
    wait: Duration,
) -> Result<Option<AppMessage>> {
    if let Some(msg) = executor.try_next() {
        return Ok(Some(msg));
    }
    Ok(event::poll_event(wait)?.map(|event| event::handle_event(event, app)))
}

/// 启动时需要执行的命令（首页汇总）
pub fn init(app: &mut App, services: &Services) -> Vec<Command> {
    update::load_dashboard(app, services)
}

/// 运行应用主循环
pub fn run(
    terminal: &mut Term,
    app: &mut App,
    services: &Services,
    executor: &mut CommandExecutor,
) -> Result<()> {
    // 表格分页依赖终端尺寸，先同步一次
    let size = terminal.size()?;
    let commands = update::update(app, services, AppMessage::Resize(size.width, size.height));
    executor.spawn_all(commands);
    executor.spawn_all(init(app, services));

    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 取下一条消息
        let Some(msg) = next_message(app, executor, POLL_INTERVAL)? else {
            continue;
        };

        // 4. 更新状态，启动命令
        let commands = update::update(app, services, msg);
        executor.spawn_all(commands);
    }

    log::info!("main loop exited");
    Ok(())
}
