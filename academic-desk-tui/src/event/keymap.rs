//! 快捷键配置
//!
//! 定义快捷键映射。Alt 组合键在任何视图中都不会被当作文本输入，
//! 单字母别名只在列表中生效。

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// 快捷键绑定
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub modifiers: KeyModifiers,
    pub code: KeyCode,
}

impl KeyBinding {
    pub const fn new(modifiers: KeyModifiers, code: KeyCode) -> Self {
        Self { modifiers, code }
    }

    pub const fn key(code: KeyCode) -> Self {
        Self::new(KeyModifiers::NONE, code)
    }

    pub const fn alt(code: KeyCode) -> Self {
        Self::new(KeyModifiers::ALT, code)
    }

    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(KeyModifiers::CONTROL, code)
    }

    /// 检查按键事件是否匹配此快捷键绑定
    pub fn matches(&self, key: &KeyEvent) -> bool {
        key.modifiers == self.modifiers && key.code == self.code
    }
}

/// 默认快捷键配置
pub struct DefaultKeymap;

impl DefaultKeymap {
    // 全局
    pub const QUIT: KeyBinding = KeyBinding::alt(KeyCode::Char('q'));
    pub const FORCE_QUIT: KeyBinding = KeyBinding::ctrl(KeyCode::Char('c'));
    pub const HELP: KeyBinding = KeyBinding::alt(KeyCode::Char('h'));
    pub const REFRESH: KeyBinding = KeyBinding::alt(KeyCode::Char('r'));
    pub const BACK: KeyBinding = KeyBinding::key(KeyCode::Esc);
    pub const SWITCH_PANEL: KeyBinding = KeyBinding::key(KeyCode::Tab);

    // 操作
    pub const ACTION_ADD: KeyBinding = KeyBinding::alt(KeyCode::Char('a'));
    pub const ACTION_EDIT: KeyBinding = KeyBinding::alt(KeyCode::Char('e'));
    pub const ACTION_DELETE: KeyBinding = KeyBinding::alt(KeyCode::Char('d'));

    // 列表中的单字母别名
    pub const LIST_ADD: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
    pub const LIST_EDIT: KeyBinding = KeyBinding::key(KeyCode::Char('e'));
    pub const LIST_DELETE: KeyBinding = KeyBinding::key(KeyCode::Char('d'));
    pub const LIST_REFRESH: KeyBinding = KeyBinding::key(KeyCode::Char('r'));
    pub const LIST_TOGGLE: KeyBinding = KeyBinding::key(KeyCode::Char(' '));

    // 删除确认
    pub const CONFIRM_YES: KeyBinding = KeyBinding::key(KeyCode::Char('y'));
    pub const CONFIRM_NO: KeyBinding = KeyBinding::key(KeyCode::Char('n'));
}
