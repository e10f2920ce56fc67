//! 表单相关消息

/// 表单消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMessage {
    /// 下一个字段（Tab / ↓）
    NextField,
    /// 上一个字段（Shift+Tab / ↑）
    PrevField,
    /// 回车：提交位上提交，单行字段前进，多行字段换行
    Enter,
    /// 输入字符
    Input(char),
    /// 删除字符
    Backspace,
    /// 取消，丢弃表单
    Cancel,
}
