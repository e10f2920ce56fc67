//! 应用主状态结构

use super::{
    AssessmentsModule, ClassesModule, DashboardState, FocusPanel, LessonsModule, ModuleState,
    NavigationState, Page, ProofsModule, QuestionsModule, StatusSurface, TasksModule, ViewState,
};

/// 应用主状态
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点面板
    pub focus: FocusPanel,

    /// 导航状态
    pub navigation: NavigationState,

    /// 当前页面
    pub current_page: Page,

    /// 状态栏（错误 + 提示）
    pub status: StatusSurface,

    /// 是否显示帮助
    pub show_help: bool,

    /// 终端尺寸（宽, 高）
    pub viewport: (u16, u16),

    // === 各页面状态 ===
    /// 首页汇总
    pub dashboard: DashboardState,
    pub tasks: ModuleState<TasksModule>,
    pub classes: ModuleState<ClassesModule>,
    pub assessments: ModuleState<AssessmentsModule>,
    pub lessons: ModuleState<LessonsModule>,
    pub questions: ModuleState<QuestionsModule>,
    pub proofs: ModuleState<ProofsModule>,
}

impl App {
    /// 创建新的应用实例
    pub fn new() -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Navigation,
            navigation: NavigationState::new(),
            current_page: Page::Home,
            status: StatusSurface::new(),
            show_help: false,
            viewport: (0, 0),
            dashboard: DashboardState::new(),
            tasks: ModuleState::new(),
            classes: ModuleState::new(),
            assessments: ModuleState::new(),
            lessons: ModuleState::new(),
            questions: ModuleState::new(),
            proofs: ModuleState::new(),
        }
    }

    /// 当前页面模块的视图状态（首页为 None）
    pub fn active_view(&self) -> Option<&ViewState> {
        match self.current_page {
            Page::Home => None,
            Page::Tasks => Some(&self.tasks.view),
            Page::Classes => Some(&self.classes.view),
            Page::Assessments => Some(&self.assessments.view),
            Page::Lessons => Some(&self.lessons.view),
            Page::Questions => Some(&self.questions.view),
            Page::Proofs => Some(&self.proofs.view),
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
