//! 通用模块状态机
//!
//! 六个业务模块共用这里的逻辑，差异由 `ModuleSpec` 提供。
//! 所有函数都返回本次更新需要执行的命令。

use academic_desk_core::{EntityId, Record, Services};

use crate::command::{Command, ServiceError};
use crate::i18n::t;
use crate::message::{ConfirmMessage, FormMessage, ListMessage, ModuleEvent, OpTag};
use crate::model::state::Lookup;
use crate::model::{
    ConfirmFocus, EnterOutcome, FormModel, LookupCache, ModuleSpec, ModuleState, OpKind, Page,
    StatusSurface, ViewState,
};

/// 模块更新时可访问的共享部分
pub struct ModuleContext<'a> {
    pub status: &'a mut StatusSurface,
    pub services: &'a Services,
    /// 当前显示的页面
    pub page: Page,
}

impl ModuleContext<'_> {
    /// 模块 `M` 是否为当前页面
    fn shows<M: ModuleSpec>(&self) -> bool {
        self.page == M::PAGE
    }
}

/// 命令标签，例如 "assessment.create"
fn label<M: ModuleSpec>(operation: &str) -> String {
    format!("{}.{operation}", <M::Entity as Record>::KIND)
}

// ========== 生命周期 ==========

/// 进入模块页面：视图从列表开始，重新加载列表，班级名称重新解析
pub fn activate<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
) -> Vec<Command> {
    state.transition(ViewState::List);
    state.lookups = LookupCache::new();
    vec![load(state, ctx.services)]
}

/// 离开模块页面：丢弃当前视图，未完成的加载一律过期
pub fn deactivate<M: ModuleSpec>(state: &mut ModuleState<M>) {
    state.transition(ViewState::List);
    state.next_load_ticket();
    state.lookups = LookupCache::new();
}

/// 发出列表加载
pub fn load<M: ModuleSpec>(state: &mut ModuleState<M>, services: &Services) -> Command {
    let ticket = state.next_load_ticket();
    let service = M::service(services);
    Command::service(
        label::<M>("list"),
        async move { service.list().await },
        move |result| M::wrap(ModuleEvent::Loaded { ticket, result }),
    )
}

fn fetch<M: ModuleSpec>(tag: OpTag, services: &Services) -> Vec<Command> {
    let Some(id) = tag.id else {
        return Vec::new();
    };
    let service = M::service(services);
    vec![Command::service(
        label::<M>("get"),
        async move { service.get(id).await },
        move |result| M::wrap(ModuleEvent::Fetched { tag, result }),
    )]
}

/// 为尚未解析的班级 ID 各发出一个 `get`
fn resolve_classes<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    services: &Services,
) -> Vec<Command> {
    if !M::RESOLVES_CLASSES {
        return Vec::new();
    }

    let ids: Vec<_> = state
        .entities
        .iter()
        .filter_map(M::class_id)
        .chain(state.detail.as_ref().and_then(M::class_id))
        .collect();
    let claimed = state.lookups.claim(ids);
    if claimed.is_empty() {
        return Vec::new();
    }
    state.reproject();

    claimed
        .into_iter()
        .map(|class_id| {
            let classes = services.classes.clone();
            Command::service(
                "class.get",
                async move { classes.get(class_id).await },
                move |result| {
                    M::wrap(ModuleEvent::LookupResolved {
                        class_id,
                        result: result.map(|class| class.name),
                    })
                },
            )
        })
        .collect()
}

// ========== 用户输入 ==========

/// 列表中的按键
pub fn on_list<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
    msg: ListMessage,
) -> Vec<Command> {
    if state.view != ViewState::List {
        return Vec::new();
    }

    match msg {
        // 纯导航：忙碌时同样接受
        ListMessage::SelectPrevious => state.table.select_previous(),
        ListMessage::SelectNext => state.table.select_next(),
        ListMessage::SelectFirst => state.table.select_first(),
        ListMessage::SelectLast => state.table.select_last(),
        ListMessage::PageUp => state.table.page_up(),
        ListMessage::PageDown => state.table.page_down(),

        ListMessage::New => {
            state.open_form(ViewState::Creating, FormModel::new(M::fields()));
        }

        ListMessage::Edit => {
            if let Some(entity) = state.selected().cloned() {
                let mut form = FormModel::new(M::fields());
                M::fill(&mut form, &entity);
                state.open_form(ViewState::Editing { id: entity.id() }, form);
            }
        }

        ListMessage::Delete => {
            if let Some(entity) = state.selected() {
                let view = ViewState::ConfirmDelete {
                    id: entity.id(),
                    name: M::name(entity),
                    focus: ConfirmFocus::default(),
                };
                state.transition(view);
            }
        }

        ListMessage::Open => {
            if M::HAS_DETAIL {
                if let Some(id) = state.selected().map(|entity| entity.id()) {
                    state.transition(ViewState::Detail { id });
                    return fetch::<M>(state.tag(Some(id)), ctx.services);
                }
            }
        }

        ListMessage::Toggle => return toggle(state, ctx),
    }
    Vec::new()
}

fn toggle<M: ModuleSpec>(state: &mut ModuleState<M>, ctx: &mut ModuleContext<'_>) -> Vec<Command> {
    let Some((id, draft)) = state
        .selected()
        .and_then(|entity| M::toggled(entity).map(|draft| (entity.id(), draft)))
    else {
        return Vec::new();
    };
    if state.is_busy() {
        ctx.status.set_error(t().status.busy);
        return Vec::new();
    }

    let tag = state.begin(OpKind::Toggle, Some(id));
    let service = M::service(ctx.services);
    vec![Command::service(
        label::<M>("toggle"),
        async move { service.update(id, draft).await },
        move |result| M::wrap(ModuleEvent::Updated { tag, result }),
    )]
}

/// 表单中的按键
pub fn on_form<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
    msg: FormMessage,
) -> Vec<Command> {
    if msg == FormMessage::Cancel {
        if state.view.is_form() {
            state.transition(ViewState::List);
        }
        return Vec::new();
    }

    let Some(form) = state.form.as_mut() else {
        return Vec::new();
    };
    match msg {
        FormMessage::NextField => form.next_field(),
        FormMessage::PrevField => form.prev_field(),
        FormMessage::Input(c) => form.input(c),
        FormMessage::Backspace => form.backspace(),
        FormMessage::Enter => {
            if form.enter() == EnterOutcome::Submit {
                return submit(state, ctx);
            }
        }
        FormMessage::Cancel => {}
    }
    Vec::new()
}

/// 提交表单：本地校验，通过后发出创建 / 更新命令
fn submit<M: ModuleSpec>(state: &mut ModuleState<M>, ctx: &mut ModuleContext<'_>) -> Vec<Command> {
    if state.is_busy() {
        ctx.status.set_error(t().status.busy);
        return Vec::new();
    }
    let Some(form) = state.form.as_ref() else {
        return Vec::new();
    };

    let editing = match state.view {
        ViewState::Editing { id } => Some(id),
        _ => None,
    };
    let original = editing.and_then(|id| state.find(id));
    let draft = match form.validate().and_then(|()| M::draft(form, original)) {
        Ok(draft) => draft,
        Err(err) => return on_event(state, ctx, ModuleEvent::ValidationFailed(err)),
    };

    let service = M::service(ctx.services);
    ctx.status.set_message(t().status.saving);
    match editing {
        Some(id) => {
            let tag = state.begin(OpKind::Update, Some(id));
            vec![Command::service(
                label::<M>("update"),
                async move { service.update(id, draft).await },
                move |result| M::wrap(ModuleEvent::Updated { tag, result }),
            )]
        }
        None => {
            let tag = state.begin(OpKind::Create, None);
            vec![Command::service(
                label::<M>("create"),
                async move { service.create(draft).await },
                move |result| M::wrap(ModuleEvent::Created { tag, result }),
            )]
        }
    }
}

/// 删除确认框中的按键
pub fn on_confirm<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
    msg: ConfirmMessage,
) -> Vec<Command> {
    let ViewState::ConfirmDelete { id, focus, .. } = &mut state.view else {
        return Vec::new();
    };
    let id = *id;

    let confirmed = match msg {
        ConfirmMessage::ToggleFocus => {
            *focus = focus.toggle();
            return Vec::new();
        }
        ConfirmMessage::Apply => *focus == ConfirmFocus::Confirm,
        ConfirmMessage::Confirm => true,
        ConfirmMessage::Cancel => false,
    };

    if !confirmed {
        state.transition(ViewState::List);
        return Vec::new();
    }
    if state.is_busy() {
        ctx.status.set_error(t().status.busy);
        return Vec::new();
    }

    let tag = state.begin(OpKind::Delete, Some(id));
    let service = M::service(ctx.services);
    ctx.status.set_message(t().status.deleting);
    vec![Command::service(
        label::<M>("delete"),
        async move { service.delete(id).await },
        move |result| M::wrap(ModuleEvent::Deleted { tag, result }),
    )]
}

/// 返回：表单 / 确认 / 详情回到列表，错误页清除错误并重新加载
pub fn on_back<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
) -> Vec<Command> {
    match state.view {
        ViewState::List => Vec::new(),
        ViewState::Error { .. } => retry(state, ctx),
        _ => {
            state.transition(ViewState::List);
            Vec::new()
        }
    }
}

/// 刷新：错误页等同于返回，其它视图重新加载列表
pub fn on_refresh<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
) -> Vec<Command> {
    if state.view.is_error() {
        return retry(state, ctx);
    }
    ctx.status.set_message(t().status.refreshing);
    vec![load(state, ctx.services)]
}

fn retry<M: ModuleSpec>(state: &mut ModuleState<M>, ctx: &mut ModuleContext<'_>) -> Vec<Command> {
    state.transition(ViewState::List);
    ctx.status.clear();
    vec![load(state, ctx.services)]
}

// ========== 后台结果 ==========

/// 处理本模块的后台结果
pub fn on_event<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
    event: ModuleEvent<M::Entity>,
) -> Vec<Command> {
    match event {
        ModuleEvent::Loaded { ticket, result } => {
            if !state.is_current_load(ticket) {
                log::debug!("{:?}: stale load #{ticket} discarded", M::PAGE);
                return Vec::new();
            }
            state.loading = false;
            match result {
                Ok(entities) => {
                    // 加载成功即离开错误页
                    if state.view.is_error() {
                        state.transition(ViewState::List);
                    }
                    state.replace_entities(entities);
                    resolve_classes(state, ctx.services)
                }
                Err(err) => {
                    let message = err.user_message();
                    if !ctx.shows::<M>() {
                        log::warn!("{:?}: background load failed: {message}", M::PAGE);
                        return Vec::new();
                    }
                    ctx.status.set_error(message.clone());
                    if M::HAS_ERROR_STATE && state.view == ViewState::List {
                        state.transition(ViewState::Error { message });
                    }
                    Vec::new()
                }
            }
        }

        ModuleEvent::Fetched { tag, result } => {
            let showing = matches!(state.view, ViewState::Detail { id } if Some(id) == tag.id);
            if tag.generation != state.generation() || !showing {
                log::debug!("{:?}: stale fetch discarded", M::PAGE);
                return Vec::new();
            }
            match result {
                Ok(entity) => {
                    state.detail = Some(entity);
                    resolve_classes(state, ctx.services)
                }
                Err(err) => {
                    let message = err.user_message();
                    ctx.status.set_error(message.clone());
                    if M::HAS_ERROR_STATE {
                        state.transition(ViewState::Error { message });
                    } else {
                        state.transition(ViewState::List);
                    }
                    Vec::new()
                }
            }
        }

        ModuleEvent::Created { tag, result } => {
            settle_mutation(state, ctx, tag, result.map(|e| e.id()), t().status.created)
        }

        ModuleEvent::Updated { tag, result } => {
            settle_mutation(state, ctx, tag, result.map(|e| e.id()), t().status.updated)
        }

        ModuleEvent::Deleted { tag, result } => {
            let outcome = result.map(|()| tag.id.unwrap_or_default());
            settle_mutation(state, ctx, tag, outcome, t().status.deleted)
        }

        ModuleEvent::LookupResolved { class_id, result } => {
            // 只接受仍在等待中的查询（离开页面后缓存已清空）
            if state.lookups.get(class_id) != Some(&Lookup::Pending) {
                return Vec::new();
            }
            match result {
                Ok(name) => state.lookups.resolve(class_id, name),
                Err(err) => {
                    state.lookups.fail(class_id);
                    ctx.status.set_error(format!(
                        "{} #{class_id}: {}",
                        t().status.lookup_failed,
                        err.user_message()
                    ));
                }
            }
            state.reproject();
            Vec::new()
        }

        ModuleEvent::ValidationFailed(err) => {
            ctx.status.set_error(err.to_string());
            Vec::new()
        }
    }
}

/// 创建 / 更新 / 删除结果的共同处理
///
/// 过期结果只释放忙碌闸门，不改变当前视图。模块仍在显示时，
/// 成功会静默刷新列表，失败写入状态栏；模块已离开页面时只记录日志，
/// 下次进入页面会重新加载。
fn settle_mutation<M: ModuleSpec>(
    state: &mut ModuleState<M>,
    ctx: &mut ModuleContext<'_>,
    tag: OpTag,
    outcome: Result<EntityId, ServiceError>,
    done: &str,
) -> Vec<Command> {
    if !state.settle(tag) {
        let showing = ctx.shows::<M>();
        return match outcome {
            Ok(id) if showing => {
                log::debug!("{:?}: stale mutation of #{id} succeeded, reloading", M::PAGE);
                vec![load(state, ctx.services)]
            }
            Ok(id) => {
                log::debug!("{:?}: stale mutation of #{id} succeeded off page", M::PAGE);
                Vec::new()
            }
            Err(err) => {
                let message = err.user_message();
                log::warn!("{:?}: stale mutation failed: {message}", M::PAGE);
                if showing {
                    ctx.status.set_error(message);
                }
                Vec::new()
            }
        };
    }

    let deleting = matches!(state.view, ViewState::ConfirmDelete { .. });
    match outcome {
        Ok(id) => {
            if state.view != ViewState::List {
                state.transition(ViewState::List);
            }
            ctx.status.set_message(format!("{done} #{id}"));
            vec![load(state, ctx.services)]
        }
        Err(err) => {
            // 删除失败同样回到列表；表单保持原样
            if deleting {
                state.transition(ViewState::List);
            }
            ctx.status.set_error(err.user_message());
            Vec::new()
        }
    }
}
