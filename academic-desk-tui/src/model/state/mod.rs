//! 页面状态
//!
//!     module.rs       通用的模块状态（视图状态机的数据部分）
//!     lookup.rs       班级名称查找缓存
//!     dashboard.rs    首页汇总

mod dashboard;
mod lookup;
mod module;

pub use dashboard::{DashboardState, SummarySlot};
pub use lookup::{Lookup, LookupCache};
pub use module::{ModuleState, OpKind};
