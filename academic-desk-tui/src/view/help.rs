//! 快捷键提示与帮助内容
//!
//! 提示完全由 (页面, 视图状态, 焦点) 决定，状态显式传入，不读取任何全局副本。

use crate::i18n::t;
use crate::model::{
    FocusPanel, LessonsModule, ModuleSpec, Page, ProofsModule, QuestionsModule, TasksModule,
    ViewState,
};

/// (按键, 说明)
pub type Hint = (&'static str, &'static str);

/// 页面是否支持详情
fn has_detail(page: Page) -> bool {
    match page {
        Page::Tasks => TasksModule::HAS_DETAIL,
        Page::Lessons => LessonsModule::HAS_DETAIL,
        Page::Questions => QuestionsModule::HAS_DETAIL,
        Page::Proofs => ProofsModule::HAS_DETAIL,
        _ => false,
    }
}

/// 状态栏中的快捷键提示
pub fn hints(page: Page, view: Option<&ViewState>, focus: FocusPanel) -> Vec<Hint> {
    let keys = &t().hints.keys;
    let actions = &t().hints.actions;
    let mut hints = Vec::new();

    if focus == FocusPanel::Navigation {
        hints.push((keys.arrows_ud, actions.navigate));
        hints.push((keys.enter, actions.open));
        hints.push((keys.tab, actions.switch_panel));
        hints.push(("?", actions.help));
        hints.push(("Alt+q", actions.quit));
        return hints;
    }

    match view {
        // 首页
        None => {
            hints.push(("r", actions.refresh));
            hints.push((keys.tab, actions.switch_panel));
        }
        Some(ViewState::List) => {
            hints.push((keys.arrows_ud, actions.navigate));
            if has_detail(page) {
                hints.push((keys.enter, actions.open));
            }
            hints.push(("n", actions.new));
            hints.push(("e", actions.edit));
            hints.push(("d", actions.delete));
            if page == Page::Tasks {
                hints.push((keys.space, actions.toggle_done));
            }
            hints.push(("r", actions.refresh));
            hints.push((keys.tab, actions.switch_panel));
        }
        Some(ViewState::Creating | ViewState::Editing { .. }) => {
            hints.push((keys.tab, actions.next_field));
            hints.push((keys.enter, actions.submit));
            hints.push((keys.esc, actions.cancel));
        }
        Some(ViewState::ConfirmDelete { .. }) => {
            hints.push((keys.arrows_lr, actions.switch_button));
            hints.push(("y", actions.confirm));
            hints.push(("n/Esc", actions.cancel));
        }
        Some(ViewState::Detail { .. }) => {
            hints.push((keys.esc, actions.back));
        }
        Some(ViewState::Error { .. }) => {
            hints.push((keys.esc, actions.back));
            hints.push(("r", actions.retry));
        }
    }

    hints.push(("Ctrl+C", actions.quit));
    hints
}

/// 帮助弹窗中的分组（标题, 条目）
pub fn help_sections() -> Vec<(&'static str, Vec<Hint>)> {
    let help = &t().help;
    let a = &help.actions;
    vec![
        (
            help.global_shortcuts,
            vec![
                ("Tab", a.switch_panel),
                ("↑↓/jk", a.move_up_down),
                ("Esc", a.back_cancel),
                ("Alt+r", a.refresh),
                ("Alt+h/?", a.help),
                ("Alt+q/Ctrl+C", a.quit),
            ],
        ),
        (
            help.list_shortcuts,
            vec![
                ("PgUp/PgDn", a.page),
                ("Enter", a.open_detail),
                ("n/Alt+a", a.add),
                ("e/Alt+e", a.edit),
                ("d/Alt+d", a.delete),
                ("Space", a.toggle_done),
            ],
        ),
        (
            help.form_shortcuts,
            vec![
                ("Tab/↓", a.next_field),
                ("Shift+Tab/↑", a.prev_field),
                ("Enter", a.submit),
            ],
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn actions(hints: &[Hint]) -> Vec<&'static str> {
        hints.iter().map(|(_, action)| *action).collect()
    }

    #[test]
    fn test_form_hints_do_not_offer_list_actions() {
        let a = &t().hints.actions;
        let hints = hints(Page::Classes, Some(&ViewState::Creating), FocusPanel::Content);
        let actions = actions(&hints);
        assert!(actions.contains(&a.submit));
        assert!(actions.contains(&a.cancel));
        assert!(!actions.contains(&a.delete));
    }

    #[test]
    fn test_toggle_hint_only_on_tasks() {
        let a = &t().hints.actions;
        let tasks = hints(Page::Tasks, Some(&ViewState::List), FocusPanel::Content);
        let classes = hints(Page::Classes, Some(&ViewState::List), FocusPanel::Content);
        assert!(actions(&tasks).contains(&a.toggle_done));
        assert!(!actions(&classes).contains(&a.toggle_done));
        // 班级没有详情
        assert!(!actions(&classes).contains(&a.open));
    }

    #[test]
    fn test_error_view_offers_back_and_retry() {
        let a = &t().hints.actions;
        let view = ViewState::Error {
            message: "timeout".to_string(),
        };
        let hints = hints(Page::Proofs, Some(&view), FocusPanel::Content);
        assert_eq!(actions(&hints), vec![a.back, a.retry, a.quit]);
    }

    #[test]
    fn test_navigation_focus_ignores_view() {
        let a = &t().hints.actions;
        let hints = hints(Page::Tasks, Some(&ViewState::Creating), FocusPanel::Navigation);
        assert!(actions(&hints).contains(&a.navigate));
        assert!(!actions(&hints).contains(&a.submit));
    }
}
