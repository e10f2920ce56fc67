//! 加载失败页：只显示错误与返回方式

use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::view::theme::{colors, Styles};

pub fn render(frame: &mut Frame, area: Rect, message: &str) {
    let c = colors();
    let texts = &t().pages;

    let lines = vec![
        Line::from(""),
        Line::styled(
            format!("  ✗ {}", texts.error_title),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ),
        Line::from(""),
        Line::styled(format!("  {message}"), Style::default().fg(c.fg)),
        Line::from(""),
        Line::styled(format!("  {}", texts.error_hint), Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}
