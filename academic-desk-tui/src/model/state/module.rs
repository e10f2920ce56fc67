//! 通用模块状态
//!
//! 每个业务模块持有一个 `ModuleState<M>`，由 `update/module.rs` 驱动。
//!
//! 过期结果的判定：
//!     · 列表加载：每次发出加载时 `load_ticket` 自增，只接受最新一次的结果
//!     · 变更 / 详情：每次视图切换时 `generation` 自增，命令携带发起时的代数，
//!       结果到达时代数不一致即视为过期

use std::marker::PhantomData;

use academic_desk_core::{EntityId, Record};

use super::LookupCache;
use crate::message::OpTag;
use crate::model::form::FormModel;
use crate::model::modules::ModuleSpec;
use crate::model::table::TableAdapter;
use crate::model::view_state::ViewState;

/// 进行中的变更类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpKind {
    Create,
    Update,
    Toggle,
    Delete,
}

/// 进行中的变更（忙碌闸门）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PendingOp {
    pub kind: OpKind,
    pub id: Option<EntityId>,
    pub generation: u64,
}

/// 模块状态
pub struct ModuleState<M: ModuleSpec> {
    /// 当前视图
    pub view: ViewState,
    /// 已加载的实体（与表格行一一对应）
    pub entities: Vec<M::Entity>,
    pub table: TableAdapter,
    /// 新建 / 编辑表单
    pub form: Option<FormModel>,
    /// 详情页实体
    pub detail: Option<M::Entity>,
    /// 班级名称缓存
    pub lookups: LookupCache,
    /// 首次加载完成前为 true
    pub loading: bool,
    /// 进行中的变更，存在时禁止再次提交 / 删除
    pub in_flight: Option<PendingOp>,
    generation: u64,
    load_ticket: u64,
    spec: PhantomData<M>,
}

impl<M: ModuleSpec> ModuleState<M> {
    pub fn new() -> Self {
        Self {
            view: ViewState::List,
            entities: Vec::new(),
            table: TableAdapter::new(),
            form: None,
            detail: None,
            lookups: LookupCache::new(),
            loading: true,
            in_flight: None,
            generation: 0,
            load_ticket: 0,
            spec: PhantomData,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// 切换视图，丢弃表单与详情
    pub fn transition(&mut self, next: ViewState) {
        log::debug!("{:?}: {} -> {}", M::PAGE, self.view.name(), next.name());
        self.view = next;
        self.generation += 1;
        self.form = None;
        self.detail = None;
    }

    /// 进入表单视图
    pub fn open_form(&mut self, view: ViewState, form: FormModel) {
        self.transition(view);
        self.form = Some(form);
    }

    /// 发出新的加载，返回其 ticket
    pub fn next_load_ticket(&mut self) -> u64 {
        self.load_ticket += 1;
        self.load_ticket
    }

    pub fn is_current_load(&self, ticket: u64) -> bool {
        ticket == self.load_ticket
    }

    /// 当前视图的标记
    pub fn tag(&self, id: Option<EntityId>) -> OpTag {
        OpTag {
            generation: self.generation,
            id,
        }
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// 标记忙碌，返回命令要携带的标记
    pub fn begin(&mut self, kind: OpKind, id: Option<EntityId>) -> OpTag {
        self.in_flight = Some(PendingOp {
            kind,
            id,
            generation: self.generation,
        });
        self.tag(id)
    }

    /// 变更结果到达：释放忙碌闸门，返回结果是否仍属于当前视图
    pub fn settle(&mut self, tag: OpTag) -> bool {
        if let Some(op) = self
            .in_flight
            .filter(|op| op.generation == tag.generation && op.id == tag.id)
        {
            log::debug!("{:?}: {:?} settled", M::PAGE, op.kind);
            self.in_flight = None;
        }
        tag.generation == self.generation
    }

    /// 当前选中的实体
    pub fn selected(&self) -> Option<&M::Entity> {
        self.table.selected().and_then(|i| self.entities.get(i))
    }

    pub fn find(&self, id: EntityId) -> Option<&M::Entity> {
        self.entities.iter().find(|e| e.id() == id)
    }

    /// 替换实体列表并重新投影
    pub fn replace_entities(&mut self, entities: Vec<M::Entity>) {
        self.entities = entities;
        self.reproject();
    }

    /// 重新投影表格行（光标按适配器规则保持）
    pub fn reproject(&mut self) {
        let rows = self
            .entities
            .iter()
            .map(|entity| M::row(entity, &self.lookups))
            .collect();
        self.table.project(rows);
    }
}

impl<M: ModuleSpec> Default for ModuleState<M> {
    fn default() -> Self {
        Self::new()
    }
}
