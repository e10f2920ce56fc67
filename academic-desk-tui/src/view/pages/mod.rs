//! 页面视图

pub mod home;
pub mod module;
