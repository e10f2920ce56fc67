//! 各业务模块的声明
//!
//! 所有模块共享同一个状态机（`ModuleState<M>` + `update/module.rs`），
//! 差异只体现在 `ModuleSpec` 上：表格列、表单字段、表单与实体之间的转换、
//! 以及可选能力（详情页、错误页、班级名称解析）。
//!
//!     模块          详情   错误页   班级名称
//!     Tasks          ✓
//!     Classes
//!     Assessments           ✓        ✓
//!     Lessons        ✓               ✓
//!     Questions      ✓      ✓
//!     Proofs         ✓      ✓        ✓

mod assessments;
mod classes;
mod lessons;
mod proofs;
mod questions;
mod tasks;

pub use assessments::AssessmentsModule;
pub use classes::ClassesModule;
pub use lessons::LessonsModule;
pub use proofs::ProofsModule;
pub use questions::QuestionsModule;
pub use tasks::TasksModule;

use std::str::FromStr;

use academic_desk_core::{EntityId, Record, ServiceHandle, Services};
use chrono::{DateTime, Local, NaiveDate, Utc};

use super::form::{FormModel, ValidationError, DATE_FORMAT};
use super::page::Page;
use super::state::LookupCache;
use super::table::Row;
use crate::i18n::t;
use crate::message::{AppMessage, ModuleEvent};

/// 表格列
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub header: &'static str,
    /// 宽度百分比
    pub width: u16,
}

impl Column {
    pub const fn new(header: &'static str, width: u16) -> Self {
        Self { header, width }
    }
}

/// 实体的草稿类型
pub type DraftOf<M> = <<M as ModuleSpec>::Entity as Record>::Draft;

/// 单个模块的声明
pub trait ModuleSpec: 'static {
    type Entity: Record;

    /// 模块所在页面
    const PAGE: Page;
    /// 列表中回车打开只读详情
    const HAS_DETAIL: bool = false;
    /// 加载失败时进入错误页
    const HAS_ERROR_STATE: bool = false;
    /// 行中显示班级名称（需要额外的批量查询）
    const RESOLVES_CLASSES: bool = false;

    fn columns() -> Vec<Column>;

    /// 新建表单的字段（按声明顺序校验）
    fn fields() -> Vec<super::form::FormField>;

    /// 用实体预填编辑表单
    fn fill(form: &mut FormModel, entity: &Self::Entity);

    /// 表单转草稿，`original` 为编辑前的实体
    fn draft(
        form: &FormModel,
        original: Option<&Self::Entity>,
    ) -> Result<DraftOf<Self>, ValidationError>;

    /// 表格行
    fn row(entity: &Self::Entity, lookups: &LookupCache) -> Row;

    /// 详情页的 (标签, 值)
    fn detail(_entity: &Self::Entity, _lookups: &LookupCache) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    /// 删除确认中显示的名称
    fn name(entity: &Self::Entity) -> String;

    /// 实体引用的班级
    fn class_id(_entity: &Self::Entity) -> Option<EntityId> {
        None
    }

    /// 快捷切换（空格）产生的草稿
    fn toggled(_entity: &Self::Entity) -> Option<DraftOf<Self>> {
        None
    }

    fn service(services: &Services) -> ServiceHandle<Self::Entity>;

    /// 把结果包装成主消息
    fn wrap(event: ModuleEvent<Self::Entity>) -> AppMessage;
}

// ========== 表单解析辅助 ==========

fn invalid(form: &FormModel, key: &'static str) -> ValidationError {
    let label = form
        .fields()
        .iter()
        .find(|f| f.key == key)
        .map_or(key, |f| f.label);
    ValidationError {
        field: key,
        label,
        reason: t().validation.invalid.to_string(),
    }
}

/// 解析必填字段
fn parse<T: FromStr>(form: &FormModel, key: &'static str) -> Result<T, ValidationError> {
    form.value(key).parse().map_err(|_| invalid(form, key))
}

/// 解析小数（允许逗号作为小数点）
fn parse_decimal(form: &FormModel, key: &'static str) -> Result<f64, ValidationError> {
    form.value(key)
        .replace(',', ".")
        .parse()
        .map_err(|_| invalid(form, key))
}

fn parse_date(form: &FormModel, key: &'static str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::parse_from_str(form.value(key), DATE_FORMAT).map_err(|_| invalid(form, key))
}

/// 可选日期：留空为 None
fn parse_optional_date(
    form: &FormModel,
    key: &'static str,
) -> Result<Option<NaiveDate>, ValidationError> {
    if form.value(key).is_empty() {
        Ok(None)
    } else {
        parse_date(form, key).map(Some)
    }
}

fn text(form: &FormModel, key: &str) -> String {
    form.value(key).to_string()
}

// ========== 显示辅助 ==========

fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

fn format_timestamp(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string()
}

/// 取第一行并截断到 `max` 个字符
fn first_line(value: &str, max: usize) -> String {
    let line = value.lines().next().unwrap_or_default();
    if line.chars().count() > max {
        let cut: String = line.chars().take(max.saturating_sub(1)).collect();
        format!("{cut}…")
    } else {
        line.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_line_truncates() {
        assert_eq!(first_line("abc\ndef", 10), "abc");
        assert_eq!(first_line("abcdef", 4), "abc…");
        assert_eq!(first_line("", 4), "");
    }
}
