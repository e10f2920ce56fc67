//! View 层：纯函数渲染
//!
//! 只读取 Model，不做任何修改。
//!
//!     layout.rs       主布局（标题栏 / 导航 / 页面 / 状态栏 / 弹窗）
//!     help.rs         快捷键提示与帮助内容
//!     theme.rs        颜色与样式
//!     components/     可复用组件
//!     pages/          首页与通用模块页面

mod components;
pub mod help;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
