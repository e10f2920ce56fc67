//! 导航状态定义

use super::Page;

/// 导航状态
pub struct NavigationState {
    /// 导航项（按显示顺序）
    pub items: &'static [Page],
    /// 当前选中的索引
    pub selected: usize,
}

impl NavigationState {
    /// 创建默认导航状态
    pub fn new() -> Self {
        Self {
            items: Page::all(),
            selected: 0,
        }
    }

    /// 选择上一项
    pub fn select_previous(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// 选择下一项
    pub fn select_next(&mut self) {
        if self.selected < self.items.len().saturating_sub(1) {
            self.selected += 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.items.len().saturating_sub(1);
    }

    /// 获取当前选中的页面
    pub fn current(&self) -> Option<Page> {
        self.items.get(self.selected).copied()
    }
}

impl Default for NavigationState {
    fn default() -> Self {
        Self::new()
    }
}
