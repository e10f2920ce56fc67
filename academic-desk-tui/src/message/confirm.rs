//! 删除确认相关消息

/// 确认消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmMessage {
    /// 在"取消"与"删除"按钮之间切换
    ToggleFocus,
    /// 执行当前聚焦的按钮
    Apply,
    /// 直接确认（y）
    Confirm,
    /// 直接取消（n / Esc）
    Cancel,
}
