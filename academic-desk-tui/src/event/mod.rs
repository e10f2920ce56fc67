//! ┌─────────────────────────────────────────────────────────────────────────────┐
//! │                              主循环 (app.rs)                                │
//! │                                                                             │
//! │   ┌─────────┐          ┌───────────┐          ┌──────────┐                  │
//! │   │  Event  │ ───────▶ │  Message  │ ───────▶ │  Update  │ ──── Command ──┐ │
//! │   │   层    │   翻译    │    层     │   消费    │    层    │               │ │
//! │   └─────────┘          └───────────┘          └────┬─────┘               │ │
//! │        ▲                     ▲                     │ 修改                │ │
//! │        │                     │                     ▼                     │ │
//! │   ┌─────────┐                │               ┌──────────┐                │ │
//! │   │  View   │ ◀──── 读取 ─────┼────────────── │  Model   │                │ │
//! │   │   层    │                │               └──────────┘                │ │
//! │   └─────────┘                │                                           ▼ │
//! │                        结果消息 ◀──────────── CommandExecutor (tokio) ◀────┘ │
//! └─────────────────────────────────────────────────────────────────────────────┘
//!
//! src/event/mod.rs
//! Event 层：把 crossterm 事件翻译成 AppMessage
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长等待 timeout
//!     · handle_event    事件分发，只读 App，不做任何修改
//!
//! 键盘事件的判断顺序：
//!     1. Ctrl+C 始终退出；帮助打开时任意键关闭帮助
//!     2. 内容面板中处于表单 / 删除确认时，按键全部交给它们
//!        （表单里的字母是输入，而不是快捷键）
//!     3. 全局快捷键：Alt+h / ? 帮助、Alt+r 刷新、Esc 返回、Tab 切换面板
//!     4. 焦点位于导航面板 → handle_navigation_keys
//!        焦点位于内容面板 → handle_content_keys（列表别名 n / e / d / r / 空格）

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
