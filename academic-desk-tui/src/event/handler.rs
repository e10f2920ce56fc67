//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{
    AppMessage, ConfirmMessage, FormMessage, ListMessage, NavigationMessage,
};
use crate::model::{App, ViewState};

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app), // 键盘事件
        Event::Resize(width, height) => AppMessage::Resize(width, height), // 重新计算表格分页
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press 事件，忽略 Release 和 Repeat
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    // Ctrl+C 在任何状态下都退出
    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 帮助打开时任意键关闭
    if app.show_help {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    // 内容面板中的表单与删除确认优先接收按键
    if app.focus.is_content() {
        match app.active_view() {
            Some(view) if view.is_form() => return handle_form_keys(key),
            Some(ViewState::ConfirmDelete { .. }) => return handle_confirm_delete_keys(key),
            _ => {}
        }
    }

    // 全局快捷键
    if DefaultKeymap::HELP.matches(&key)
        || (key.modifiers.is_empty() && key.code == KeyCode::Char('?'))
    {
        return AppMessage::ShowHelp;
    }

    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }

    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::GoBack;
    }

    if DefaultKeymap::SWITCH_PANEL.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    // 根据焦点位置处理按键
    if app.focus.is_content() {
        handle_content_keys(key, app)
    } else {
        handle_navigation_keys(key)
    }
}

/// 处理导航面板的按键
fn handle_navigation_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        // ↑ 或 k: 上移
        KeyCode::Up | KeyCode::Char('k') => {
            AppMessage::Navigation(NavigationMessage::SelectPrevious)
        }

        // ↓ 或 j: 下移
        KeyCode::Down | KeyCode::Char('j') => AppMessage::Navigation(NavigationMessage::SelectNext),

        // Enter 或 →: 打开页面
        KeyCode::Enter | KeyCode::Right => AppMessage::Navigation(NavigationMessage::Confirm),

        KeyCode::Home => AppMessage::Navigation(NavigationMessage::SelectFirst),
        KeyCode::End => AppMessage::Navigation(NavigationMessage::SelectLast),

        _ => AppMessage::Noop,
    }
}

/// 处理内容面板的按键
fn handle_content_keys(key: KeyEvent, app: &App) -> AppMessage {
    match app.active_view() {
        // 首页只有刷新
        None => {
            if DefaultKeymap::LIST_REFRESH.matches(&key) {
                AppMessage::Refresh
            } else {
                AppMessage::Noop
            }
        }
        Some(ViewState::List) => handle_list_keys(key),
        // 错误页：r 重试；详情页：r 刷新列表
        Some(ViewState::Error { .. } | ViewState::Detail { .. }) => {
            if DefaultKeymap::LIST_REFRESH.matches(&key) {
                AppMessage::Refresh
            } else {
                AppMessage::Noop
            }
        }
        Some(_) => AppMessage::Noop,
    }
}

/// 处理列表的按键
fn handle_list_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::ACTION_ADD.matches(&key) || DefaultKeymap::LIST_ADD.matches(&key) {
        return AppMessage::List(ListMessage::New);
    }
    if DefaultKeymap::ACTION_EDIT.matches(&key) || DefaultKeymap::LIST_EDIT.matches(&key) {
        return AppMessage::List(ListMessage::Edit);
    }
    if DefaultKeymap::ACTION_DELETE.matches(&key) || DefaultKeymap::LIST_DELETE.matches(&key) {
        return AppMessage::List(ListMessage::Delete);
    }
    if DefaultKeymap::LIST_REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::LIST_TOGGLE.matches(&key) {
        return AppMessage::List(ListMessage::Toggle);
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('k') => AppMessage::List(ListMessage::SelectPrevious),
        KeyCode::Down | KeyCode::Char('j') => AppMessage::List(ListMessage::SelectNext),
        KeyCode::Home => AppMessage::List(ListMessage::SelectFirst),
        KeyCode::End => AppMessage::List(ListMessage::SelectLast),
        KeyCode::PageUp => AppMessage::List(ListMessage::PageUp),
        KeyCode::PageDown => AppMessage::List(ListMessage::PageDown),
        // Enter: 打开详情
        KeyCode::Enter => AppMessage::List(ListMessage::Open),
        _ => AppMessage::Noop,
    }
}

/// 处理表单中的按键
fn handle_form_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc => AppMessage::Form(FormMessage::Cancel),

        // Tab / ↓: 下一个字段
        KeyCode::Tab | KeyCode::Down => AppMessage::Form(FormMessage::NextField),

        // Shift+Tab / ↑: 上一个字段
        KeyCode::BackTab | KeyCode::Up => AppMessage::Form(FormMessage::PrevField),

        // Enter: 提交、前进或换行，由表单决定
        KeyCode::Enter => AppMessage::Form(FormMessage::Enter),

        KeyCode::Backspace => AppMessage::Form(FormMessage::Backspace),

        // 字符输入（允许 Shift 输入大写）
        KeyCode::Char(ch)
            if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
        {
            AppMessage::Form(FormMessage::Input(ch))
        }

        _ => AppMessage::Noop,
    }
}

/// 处理确认删除弹窗的按键
fn handle_confirm_delete_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::CONFIRM_YES.matches(&key) {
        return AppMessage::Confirm(ConfirmMessage::Confirm);
    }
    if DefaultKeymap::CONFIRM_NO.matches(&key) || DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Confirm(ConfirmMessage::Cancel);
    }

    match key.code {
        // Tab 或 ← →: 切换按钮
        KeyCode::Tab | KeyCode::Left | KeyCode::Right => {
            AppMessage::Confirm(ConfirmMessage::ToggleFocus)
        }

        // Enter: 执行当前按钮
        KeyCode::Enter => AppMessage::Confirm(ConfirmMessage::Apply),

        _ => AppMessage::Noop,
    }
}
