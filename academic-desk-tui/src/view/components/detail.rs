//! 只读详情

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

/// 渲染 (标签, 值) 列表；实体尚未获取时显示加载中
pub fn render(frame: &mut Frame, area: Rect, pairs: Option<Vec<(&'static str, String)>>) {
    let c = colors();

    let Some(pairs) = pairs else {
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {}", t().common.loading), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    };

    let mut lines = vec![
        Line::styled(
            format!(" {}", t().pages.detail_title),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
    ];

    for (label, value) in pairs {
        lines.push(Line::from(Span::styled(
            format!(" {label}"),
            Style::default().fg(c.muted),
        )));
        // 多行内容逐行缩进
        for part in value.lines() {
            lines.push(Line::styled(format!("   {part}"), Style::default().fg(c.fg)));
        }
        if value.is_empty() {
            lines.push(Line::styled("   -", Styles::muted()));
        }
        lines.push(Line::from(""));
    }

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
