//! 应用主消息枚举

use academic_desk_core::types::{Assessment, Class, Lesson, Proof, Question, Task};

use super::{
    ConfirmMessage, DashboardEvent, FormMessage, ListMessage, ModuleEvent, NavigationMessage,
};

/// 应用主消息
#[derive(Debug, Clone, PartialEq)]
pub enum AppMessage {
    /// 退出应用（绕过所有模块状态）
    Quit,

    /// 切换焦点面板（左右切换）
    ToggleFocus,

    /// 终端尺寸变化
    Resize(u16, u16),

    /// 显示 / 关闭帮助
    ShowHelp,

    /// 刷新当前页面
    Refresh,

    /// 返回（表单取消、详情返回、错误页返回）
    GoBack,

    /// 导航相关消息
    Navigation(NavigationMessage),

    /// 列表相关消息
    List(ListMessage),

    /// 表单相关消息
    Form(FormMessage),

    /// 删除确认相关消息
    Confirm(ConfirmMessage),

    // ========== 后台结果 ==========
    Tasks(ModuleEvent<Task>),
    Classes(ModuleEvent<Class>),
    Assessments(ModuleEvent<Assessment>),
    Lessons(ModuleEvent<Lesson>),
    Questions(ModuleEvent<Question>),
    Proofs(ModuleEvent<Proof>),
    Dashboard(DashboardEvent),

    /// 无操作（用于忽略未处理的事件）
    Noop,
}

impl AppMessage {
    /// 是否由用户按键产生
    ///
    /// 用户输入会在分发前清空状态栏（错误页除外）。
    pub fn is_user_input(&self) -> bool {
        matches!(
            self,
            Self::Quit
                | Self::ToggleFocus
                | Self::ShowHelp
                | Self::Refresh
                | Self::GoBack
                | Self::Navigation(_)
                | Self::List(_)
                | Self::Form(_)
                | Self::Confirm(_)
        )
    }
}
