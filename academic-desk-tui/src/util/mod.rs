//!
//! src/util/mod.rs
//! Util 层：基础设施
//!
//! 与业务逻辑无关的代码：终端的初始化和恢复，以及日志输出。
//!
//!
//! 有模块结构：
//!     src/util/mod.rs
//!         mod terminal;       // 终端初始化和恢复
//!         mod logging;        // 日志写入数据目录
//!
//!
//!     终端：
//!
//!         pub type Term = Terminal<CrosstermBackend<Stdout>>;
//!
//!         init_terminal()     启用原始模式，进入备用屏幕
//!         restore_terminal()  禁用原始模式，离开备用屏幕，显示光标
//!
//!         注意：无论主循环是正常退出还是返回错误，都必须调用 restore_terminal，
//!               否则终端会停留在原始模式。
//!
//!
//!     日志：
//!
//!         init_logging(data_dir, level) -> WorkerGuard
//!
//!             ┌──────────┐     ┌────────────┐     ┌──────────────────────┐
//!             │ log 宏   │ ──▶ │ tracing-log│ ──▶ │ fmt layer (无 ANSI)  │
//!             └──────────┘     └────────────┘     └──────────┬───────────┘
//!                                                            ▼
//!                                            <data_dir>/academic-desk.log
//!
//!         终端由 TUI 独占，日志绝不写到 stdout / stderr。
//!

mod logging;
mod terminal;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
