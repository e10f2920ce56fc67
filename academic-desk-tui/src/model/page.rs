//! 页面状态定义

use crate::i18n::t;

/// 页面枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Page {
    /// 首页（汇总）
    #[default]
    Home,
    /// 待办任务
    Tasks,
    /// 班级
    Classes,
    /// 评估
    Assessments,
    /// 课程计划
    Lessons,
    /// 题库
    Questions,
    /// 试卷
    Proofs,
}

impl Page {
    /// 导航栏中的顺序
    pub fn all() -> &'static [Page] {
        &[
            Page::Home,
            Page::Tasks,
            Page::Classes,
            Page::Assessments,
            Page::Lessons,
            Page::Questions,
            Page::Proofs,
        ]
    }

    /// 获取页面标题
    pub fn title(self) -> &'static str {
        let nav = &t().nav;
        match self {
            Page::Home => nav.home,
            Page::Tasks => nav.tasks,
            Page::Classes => nav.classes,
            Page::Assessments => nav.assessments,
            Page::Lessons => nav.lessons,
            Page::Questions => nav.questions,
            Page::Proofs => nav.proofs,
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Page::Home => "⌂",
            Page::Tasks => "✓",
            Page::Classes => "◎",
            Page::Assessments => "%",
            Page::Lessons => "≡",
            Page::Questions => "?",
            Page::Proofs => "▤",
        }
    }
}
