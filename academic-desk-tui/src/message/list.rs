//! 列表（表格）相关消息

/// 列表消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListMessage {
    SelectPrevious,
    SelectNext,
    SelectFirst,
    SelectLast,
    PageUp,
    PageDown,
    /// 打开详情
    Open,
    /// 新建
    New,
    /// 编辑选中行
    Edit,
    /// 删除选中行（进入确认）
    Delete,
    /// 切换完成状态（仅任务）
    Toggle,
}
