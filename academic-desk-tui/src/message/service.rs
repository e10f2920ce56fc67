//! 后台命令结果消息
//!
//! 每个操作一个变体，错误跟随其所属操作，Update 层用穷尽匹配区分。

use academic_desk_core::EntityId;

use crate::command::ServiceError;
use crate::model::ValidationError;

/// 发起变更 / 详情请求时记录的标记
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpTag {
    /// 发起时模块所处的视图代数
    pub generation: u64,
    /// 目标实体
    pub id: Option<EntityId>,
}

/// 单个模块的后台结果
#[derive(Debug, Clone, PartialEq)]
pub enum ModuleEvent<E> {
    /// 列表加载完成，只有最新一次加载（ticket）生效
    Loaded {
        ticket: u64,
        result: Result<Vec<E>, ServiceError>,
    },

    /// 详情获取完成
    Fetched {
        tag: OpTag,
        result: Result<E, ServiceError>,
    },

    /// 创建完成
    Created {
        tag: OpTag,
        result: Result<E, ServiceError>,
    },

    /// 更新完成（编辑或切换完成状态）
    Updated {
        tag: OpTag,
        result: Result<E, ServiceError>,
    },

    /// 删除完成
    Deleted {
        tag: OpTag,
        result: Result<(), ServiceError>,
    },

    /// 班级名称解析完成（写入查找缓存）
    LookupResolved {
        class_id: EntityId,
        result: Result<String, ServiceError>,
    },

    /// 本地校验失败，不会产生任何 Command
    ValidationFailed(ValidationError),
}

/// 首页汇总的数据来源
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DashboardSource {
    Tasks,
    Classes,
    Assessments,
    Questions,
    Proofs,
}

impl DashboardSource {
    pub fn all() -> &'static [DashboardSource] {
        &[
            DashboardSource::Tasks,
            DashboardSource::Classes,
            DashboardSource::Assessments,
            DashboardSource::Questions,
            DashboardSource::Proofs,
        ]
    }
}

/// 单个来源的汇总
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceSummary {
    pub total: usize,
    /// 尚未完成的数量（仅任务）
    pub pending: Option<usize>,
}

/// 首页批量加载的单条结果
#[derive(Debug, Clone, PartialEq)]
pub struct DashboardEvent {
    pub ticket: u64,
    pub source: DashboardSource,
    pub result: Result<SourceSummary, ServiceError>,
}
