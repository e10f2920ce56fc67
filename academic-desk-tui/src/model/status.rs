//! 状态栏：一个错误槽 + 一个提示槽
//!
//! 提示没有自动超时，持续到下一次用户操作清除。

/// 状态信息
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusSurface {
    pub error: Option<String>,
    pub message: Option<String>,
}

impl StatusSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// 设置错误（同时清除提示）
    pub fn set_error(&mut self, error: impl Into<String>) {
        self.error = Some(error.into());
        self.message = None;
    }

    /// 设置提示（同时清除错误）
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = Some(message.into());
        self.error = None;
    }

    pub fn clear(&mut self) {
        self.error = None;
        self.message = None;
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.error.is_none() && self.message.is_none()
    }
}
