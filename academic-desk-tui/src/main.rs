//! Academic Desk TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **Command**: 后台业务调用 (`command/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 业务服务 (`backend/`)
//!
//!
//! main.rs
//! Academic Desk TUI 的程序入口
//!
//! 其执行：
//! fn `main()` {
//!
//!     JsonConfigService::load()   // 读取配置，失败时使用默认配置
//!     init_logging()              // 日志写入数据目录
//!     set_language / set_theme    // 应用界面语言与主题
//!     Runtime::new()              // 后台命令使用的 tokio 运行时
//!     CoreService::new()          // 组装业务服务
//!     init_terminal()             // 初始化终端
//!     app::run()                  // 运行 app.rs 主循环
//!     restore_terminal()          // 无论成功与否，都恢复终端
//!
//! }
//!
//!
//! 主循环运行在主线程上，自身是同步的；只有 Command 在 tokio 运行时里执行。

mod app;
mod backend;
mod command;
mod event;
pub mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

#[cfg(test)]
mod test_utils;

use anyhow::Result;

use backend::{AppConfig, ConfigService, CoreService, JsonConfigService};
use command::CommandExecutor;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 读取配置；损坏的配置不阻止启动
    let config_service = JsonConfigService::new();
    let first_run = !config_service.path().exists();
    let (config, config_error) = match config_service.load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    // 2. 日志
    let data_dir = config.data_dir();
    // 终端尚未进入备用屏幕，此时还可以写 stderr
    let _log_guard = match init_logging(&data_dir, &config.log_level) {
        Ok(guard) => Some(guard),
        Err(err) => {
            eprintln!("logging disabled: {err:#}");
            None
        }
    };
    log::info!(
        "academic-desk {} starting, config {}",
        env!("CARGO_PKG_VERSION"),
        config_service.path().display()
    );
    if let Some(err) = &config_error {
        log::warn!("{err}");
    }
    // 首次运行时写出默认配置，方便用户修改
    if first_run {
        if let Err(err) = config_service.save(&config) {
            log::warn!("could not write default config: {err}");
        }
    }

    // 3. 界面语言与主题
    i18n::set_language(config.language());
    view::theme::set_theme(config.theme());

    // 4. 后台服务
    let runtime = tokio::runtime::Runtime::new()?;
    let core = CoreService::new(&data_dir);
    let services = core.services();
    let mut executor = CommandExecutor::new(runtime.handle().clone(), config.timeout());
    log::debug!("operation timeout: {:?}", executor.timeout());

    // 5. 创建应用实例
    let mut app = model::App::new();
    if config_error.is_some() {
        app.status.set_error(i18n::t().status.config_failed);
    }

    // 6. 初始化终端并运行主循环
    let mut terminal = init_terminal()?;
    let result = app::run(&mut terminal, &mut app, &services, &mut executor);

    // 7. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;

    // 8. 不等待仍在执行的命令
    runtime.shutdown_background();
    result
}
