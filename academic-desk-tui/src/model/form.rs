//! 表单模型与焦点控制
//!
//! 焦点索引范围为 `[0, field_count]`，`field_count` 本身代表提交按钮（提交位）。
//!
//!     字段 0 ─▶ 字段 1 ─▶ … ─▶ 字段 n-1 ─▶ [提交] ─┐
//!       ▲                                           │
//!       └───────────────────────────────────────────┘
//!
//! 校验只在提交时进行，按声明顺序逐个字段检查，第一个失败的字段生效；
//! 校验失败时表单内容保持不变。

use chrono::NaiveDate;
use thiserror::Error;

use crate::i18n::t;

/// 日期输入格式
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// 字段校验规则
#[derive(Debug, Clone, PartialEq)]
pub enum Rule {
    /// 不能为空（去除首尾空白后）
    Required,
    /// 最大字符数
    MaxLen(usize),
    /// 闭区间内的整数
    Integer { min: i64, max: i64 },
    /// 闭区间内的小数
    Decimal { min: f64, max: f64 },
    /// `YYYY-MM-DD`
    Date,
    /// 逗号分隔的 ID 列表，例如 `3, 5, 8`
    IdList,
    /// 取值必须在候选列表中（不区分大小写）
    OneOf(&'static [&'static str]),
}

impl Rule {
    /// 检查一个值；除 `Required` 外，空值一律通过
    fn check(&self, value: &str) -> Result<(), String> {
        let value = value.trim();
        let texts = &t().validation;

        if value.is_empty() {
            return match self {
                Rule::Required => Err(texts.required.to_string()),
                _ => Ok(()),
            };
        }

        match self {
            Rule::Required => Ok(()),
            Rule::MaxLen(max) => {
                if value.chars().count() > *max {
                    Err(format!("{} ({max})", texts.too_long))
                } else {
                    Ok(())
                }
            }
            Rule::Integer { min, max } => match value.parse::<i64>() {
                Ok(n) if (*min..=*max).contains(&n) => Ok(()),
                Ok(_) => Err(format!("{} ({min}..{max})", texts.out_of_range)),
                Err(_) => Err(texts.integer.to_string()),
            },
            Rule::Decimal { min, max } => match value.replace(',', ".").parse::<f64>() {
                Ok(n) if n.is_finite() && n >= *min && n <= *max => Ok(()),
                Ok(_) => Err(format!("{} ({min}..{max})", texts.out_of_range)),
                Err(_) => Err(texts.decimal.to_string()),
            },
            Rule::Date => NaiveDate::parse_from_str(value, DATE_FORMAT)
                .map(|_| ())
                .map_err(|_| texts.date.to_string()),
            Rule::IdList => parse_id_list(value)
                .map(|_| ())
                .ok_or_else(|| texts.id_list.to_string()),
            Rule::OneOf(options) => {
                if options.iter().any(|o| o.eq_ignore_ascii_case(value)) {
                    Ok(())
                } else {
                    Err(format!("{} ({})", texts.one_of, options.join(", ")))
                }
            }
        }
    }
}

/// 解析逗号分隔的正整数 ID 列表
pub fn parse_id_list(value: &str) -> Option<Vec<i64>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse::<i64>().ok().filter(|id| *id > 0))
        .collect()
}

/// 本地校验失败（不会到达任何 Command）
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{label}: {reason}")]
pub struct ValidationError {
    /// 字段键
    pub field: &'static str,
    /// 字段显示名
    pub label: &'static str,
    pub reason: String,
}

/// 表单字段
#[derive(Debug, Clone)]
pub struct FormField {
    /// 字段键（模块内唯一）
    pub key: &'static str,
    /// 显示名
    pub label: &'static str,
    /// 当前文本
    pub value: String,
    pub rules: Vec<Rule>,
    /// 多行字段：回车插入换行
    pub multiline: bool,
    pub focused: bool,
}

impl FormField {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            value: String::new(),
            rules: Vec::new(),
            multiline: false,
            focused: false,
        }
    }

    #[must_use]
    pub fn rule(mut self, rule: Rule) -> Self {
        self.rules.push(rule);
        self
    }

    #[must_use]
    pub fn required(self) -> Self {
        self.rule(Rule::Required)
    }

    #[must_use]
    pub fn multiline(mut self) -> Self {
        self.multiline = true;
        self
    }

    fn validate(&self) -> Result<(), ValidationError> {
        for rule in &self.rules {
            rule.check(&self.value).map_err(|reason| ValidationError {
                field: self.key,
                label: self.label,
                reason,
            })?;
        }
        Ok(())
    }
}

/// 回车键的效果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnterOutcome {
    /// 焦点在提交位：提交
    Submit,
    /// 单行字段：前进到下一个位置
    Advanced,
    /// 多行字段：插入了换行
    NewLine,
}

/// 表单模型
#[derive(Debug, Clone)]
pub struct FormModel {
    fields: Vec<FormField>,
    /// 焦点索引，`fields.len()` 表示提交位
    focus: usize,
}

impl FormModel {
    /// 创建表单，焦点在第一个字段
    pub fn new(fields: Vec<FormField>) -> Self {
        let mut form = Self { fields, focus: 0 };
        form.sync_focus();
        form
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    #[cfg(test)]
    pub fn focus_index(&self) -> usize {
        self.focus
    }

    /// 焦点是否在提交位
    pub fn is_submit_focused(&self) -> bool {
        self.focus == self.fields.len()
    }

    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focus)
    }

    /// 下一个位置（循环）
    pub fn next_field(&mut self) {
        self.focus = (self.focus + 1) % (self.fields.len() + 1);
        self.sync_focus();
    }

    /// 上一个位置（循环）
    pub fn prev_field(&mut self) {
        let slots = self.fields.len() + 1;
        self.focus = (self.focus + slots - 1) % slots;
        self.sync_focus();
    }

    /// 回车
    pub fn enter(&mut self) -> EnterOutcome {
        if let Some(field) = self.fields.get_mut(self.focus) {
            if field.multiline {
                field.value.push('\n');
                return EnterOutcome::NewLine;
            }
            self.next_field();
            return EnterOutcome::Advanced;
        }
        EnterOutcome::Submit
    }

    /// 向聚焦字段输入字符（提交位上忽略）
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.push(c);
        }
    }

    pub fn backspace(&mut self) {
        if let Some(field) = self.fields.get_mut(self.focus) {
            field.value.pop();
        }
    }

    /// 读取字段值（去除首尾空白）
    pub fn value(&self, key: &str) -> &str {
        self.fields
            .iter()
            .find(|f| f.key == key)
            .map_or("", |f| f.value.trim())
    }

    /// 设置字段值（预填）
    pub fn set(&mut self, key: &str, value: impl Into<String>) {
        if let Some(field) = self.fields.iter_mut().find(|f| f.key == key) {
            field.value = value.into();
        }
    }

    /// 按声明顺序校验，返回第一个失败的字段
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.fields.iter().try_for_each(FormField::validate)
    }

    fn sync_focus(&mut self) {
        for (i, field) in self.fields.iter_mut().enumerate() {
            field.focused = i == self.focus;
        }
    }
}
