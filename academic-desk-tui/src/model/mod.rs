//!
//! src/model/mod.rs
//! Model 层：应用状态
//!
//! Model 只保存数据，不做任何 I/O。Update 层是唯一修改它的地方，
//! View 层只读取它。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 应用主状态 App
//!         mod focus;          // 焦点面板
//!         mod navigation;     // 导航栏
//!         mod page;           // 页面枚举
//!         mod status;         // 状态栏（错误 + 提示）
//!         mod form;           // 表单模型与焦点控制
//!         mod table;          // 表格适配器
//!         mod view_state;     // 模块视图状态
//!         mod modules;        // 各业务模块的声明（ModuleSpec）
//!         mod state;          // 模块状态、查找缓存、首页汇总
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 一、模块视图状态机
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!                 ┌──────────── Esc ─────────────┐
//!                 ▼                              │
//!     ┌──────▶  List  ── n ──▶ Creating ─────────┤
//!     │          │  │                            │
//!     │          │  └── e ──▶ Editing{id} ───────┤
//!     │          │                               │
//!     │          ├── d ──▶ ConfirmDelete{id} ────┘
//!     │          │
//!     │          └── Enter ──▶ Detail{id}   （仅部分模块）
//!     │
//!     └── Esc / r ── Error{message}          （仅部分模块，加载失败时进入）
//!
//!     · 每次切换视图，模块的 generation 自增
//!     · 变更命令提交后模块进入"忙碌"，期间仍可在列表中移动光标，
//!       但不能再次提交或删除
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 二、表单（FormModel）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     字段按声明顺序排列，焦点索引 0..=field_count，最后一位是提交按钮。
//!     Tab / Shift+Tab 循环移动；回车在提交位上提交，在单行字段上前进，
//!     在多行字段中换行。
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 三、状态栏（StatusSurface）
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     一个错误槽、一个提示槽。任何按键都会先清空它们（错误页除外）。
//!

mod app;
mod focus;
pub mod form;
pub mod modules;
mod navigation;
mod page;
pub mod state;
mod status;
pub mod table;
mod view_state;

pub use app::App;
pub use focus::FocusPanel;
pub use form::{EnterOutcome, FormField, FormModel, ValidationError};
pub use modules::{
    AssessmentsModule, ClassesModule, Column, LessonsModule, ModuleSpec, ProofsModule,
    QuestionsModule, TasksModule,
};
pub use navigation::NavigationState;
pub use page::Page;
pub use state::{DashboardState, LookupCache, ModuleState, OpKind};
pub use status::StatusSurface;
pub use table::TableAdapter;
pub use view_state::{ConfirmFocus, ViewState};
