//! 通用模块页面
//!
//!     List / Creating / Editing / ConfirmDelete  →  表格（表单与确认以弹窗叠加）
//!     Detail                                     →  只读详情
//!     Error                                      →  错误页

use ratatui::{layout::Rect, Frame};

use crate::i18n::t;
use crate::model::{ModuleSpec, ModuleState, ViewState};
use crate::view::components;

/// 渲染模块页面主体
pub fn render<M: ModuleSpec>(state: &ModuleState<M>, frame: &mut Frame, area: Rect) {
    match &state.view {
        ViewState::Detail { .. } => {
            let pairs = state
                .detail
                .as_ref()
                .map(|entity| M::detail(entity, &state.lookups));
            components::detail::render(frame, area, pairs);
        }
        ViewState::Error { message } => components::error::render(frame, area, message),
        _ => components::table::render(
            frame,
            area,
            &M::columns(),
            &state.table,
            state.loading,
        ),
    }
}

/// 渲染叠加在页面上的表单 / 删除确认
pub fn render_overlay<M: ModuleSpec>(state: &ModuleState<M>, frame: &mut Frame) {
    let texts = &t().modal.form;
    match &state.view {
        ViewState::Creating => {
            if let Some(form) = &state.form {
                let title = format!("{} · {}", M::PAGE.title(), texts.create_title);
                components::form::render(frame, &title, form);
            }
        }
        ViewState::Editing { id } => {
            if let Some(form) = &state.form {
                let title = format!("{} · {} #{id}", M::PAGE.title(), texts.edit_title);
                components::form::render(frame, &title, form);
            }
        }
        ViewState::ConfirmDelete { name, focus, .. } => {
            components::confirm::render(frame, name, *focus);
        }
        _ => {}
    }
}
