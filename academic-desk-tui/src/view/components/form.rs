//! 新建 / 编辑表单弹窗
//!
//!     ┌──────────── Assessments · New ────────────┐
//!     │ Name                                      │
//!     │   Prova Bimestral▎                        │
//!     │ Class ID                                  │
//!     │   1                                       │
//!     │ ...                                       │
//!     │                 [ Save ]                  │
//!     └───────────────────────────────────────────┘
//!
//! 聚焦字段的内容过长时从左侧截断，保证光标始终可见。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use super::centered_rect;
use crate::i18n::t;
use crate::model::{FormField, FormModel};
use crate::view::theme::{colors, Styles};

const WIDTH: u16 = 64;
/// 多行字段最多显示的行数
const MAX_VALUE_LINES: usize = 4;

/// 渲染表单弹窗
pub fn render(frame: &mut Frame, title: &str, form: &FormModel) {
    let c = colors();
    let value_width = usize::from(WIDTH.saturating_sub(8));

    let mut lines = Vec::new();
    for field in form.fields() {
        lines.extend(field_lines(field, value_width));
    }

    // === 提交按钮 ===
    lines.push(Line::from(""));
    let submit = format!("[ {} ]", t().modal.form.submit_button);
    let submit_style = if form.is_submit_focused() {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };
    lines.push(Line::from(Span::styled(submit, submit_style)).alignment(Alignment::Center));

    // 多行字段的提示
    if form.focused_field().is_some_and(|field| field.multiline) {
        lines.push(Line::styled(
            format!("  {}", t().modal.form.multiline_hint),
            Styles::muted(),
        ));
    }

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(WIDTH, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {title} "))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Styles::modal());

    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    frame.render_widget(block, area);
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 一个字段：标签行 + 值行
fn field_lines(field: &FormField, width: usize) -> Vec<Line<'static>> {
    let c = colors();
    let label_style = if field.focused {
        Style::default().fg(c.highlight).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.muted)
    };
    let value_style = if field.focused {
        Style::default().fg(c.highlight)
    } else {
        Style::default().fg(c.fg)
    };

    let mut lines = vec![Line::styled(format!(" {}", field.label), label_style)];

    let mut values: Vec<&str> = field.value.split('\n').collect();
    if values.len() > MAX_VALUE_LINES {
        values.drain(..values.len() - MAX_VALUE_LINES);
    }
    let last = values.len() - 1;
    for (i, value) in values.into_iter().enumerate() {
        let text = if field.focused && i == last {
            format!("   {}▎", tail(value, width.saturating_sub(1)))
        } else {
            format!("   {}", tail(value, width))
        };
        lines.push(Line::styled(text, value_style));
    }
    lines
}

/// 保留末尾能放进 `width` 列的部分
fn tail(value: &str, width: usize) -> String {
    if value.width() <= width {
        return value.to_string();
    }
    let mut used = 1; // "…"
    let mut kept = Vec::new();
    for ch in value.chars().rev() {
        let w = ch.width().unwrap_or(0);
        if used + w > width {
            break;
        }
        used += w;
        kept.push(ch);
    }
    kept.reverse();
    format!("…{}", kept.into_iter().collect::<String>())
}
