//! 模块视图状态

use academic_desk_core::EntityId;

/// 删除确认框中的按钮
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ConfirmFocus {
    #[default]
    Cancel,
    Confirm,
}

impl ConfirmFocus {
    pub fn toggle(self) -> Self {
        match self {
            ConfirmFocus::Cancel => ConfirmFocus::Confirm,
            ConfirmFocus::Confirm => ConfirmFocus::Cancel,
        }
    }
}

/// 模块当前所处的视图
///
/// 每个模块同一时刻只有一个活动状态；初始总是 `List`。
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ViewState {
    /// 列表
    #[default]
    List,
    /// 新建表单
    Creating,
    /// 编辑表单
    Editing { id: EntityId },
    /// 删除确认
    ConfirmDelete {
        id: EntityId,
        name: String,
        focus: ConfirmFocus,
    },
    /// 只读详情
    Detail { id: EntityId },
    /// 加载失败（只能返回）
    Error { message: String },
}

impl ViewState {
    pub fn name(&self) -> &'static str {
        match self {
            ViewState::List => "list",
            ViewState::Creating => "creating",
            ViewState::Editing { .. } => "editing",
            ViewState::ConfirmDelete { .. } => "confirm-delete",
            ViewState::Detail { .. } => "detail",
            ViewState::Error { .. } => "error",
        }
    }

    pub fn is_form(&self) -> bool {
        matches!(self, ViewState::Creating | ViewState::Editing { .. })
    }

    pub fn is_error(&self) -> bool {
        matches!(self, ViewState::Error { .. })
    }
}
