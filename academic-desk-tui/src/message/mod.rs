//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! 作为 Event / Command ─→ Update 之间的桥梁。
//! 用户按键、终端尺寸变化、后台命令的结果，全部翻译成 AppMessage，
//! 主循环每次只把一条消息交给 Update。
//!
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;            // 主消息 AppMessage
//!         mod navigation;     // 导航栏子消息
//!         mod list;           // 列表（表格）子消息
//!         mod form;           // 表单子消息
//!         mod confirm;        // 删除确认子消息
//!         mod service;        // 后台命令结果（每个操作一个变体）
//!
//!
//!     消息来源：
//!
//!         键盘 ──▶ event::handle_event() ──┐
//!                                          ├──▶ AppMessage ──▶ update()
//!         Command ──▶ CommandExecutor ─────┘
//!
//!
//!     后台结果消息都携带发起时的标记（ticket / generation），
//!     Update 层据此丢弃已经过期的结果。
//!

mod app;
mod confirm;
mod form;
mod list;
mod navigation;
mod service;

pub use app::AppMessage;
pub use confirm::ConfirmMessage;
pub use form::FormMessage;
pub use list::ListMessage;
pub use navigation::NavigationMessage;
pub use service::{DashboardEvent, DashboardSource, ModuleEvent, OpTag, SourceSummary};
