//! 删除确认弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use super::centered_rect;
use crate::i18n::t;
use crate::model::ConfirmFocus;
use crate::view::theme::{colors, Styles};

/// 渲染删除确认弹窗，默认焦点在"取消"
pub fn render(frame: &mut Frame, name: &str, focus: ConfirmFocus) {
    let c = colors();
    let texts = &t().modal.confirm_delete;

    let area = centered_rect(50, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.error))
        .style(Styles::modal());

    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );

    let cancel_style = if focus == ConfirmFocus::Cancel {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.fg)
    };

    let confirm_style = if focus == ConfirmFocus::Confirm {
        Style::default()
            .fg(c.selected_fg)
            .bg(c.error)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(c.error)
    };

    let lines = vec![
        Line::from(""),
        Line::styled(texts.message, Style::default().fg(c.fg)),
        Line::styled(format!("\"{name}\""), Style::default().fg(c.warning)),
        Line::from(""),
        Line::from(vec![
            Span::styled(format!(" {} ", texts.cancel_button), cancel_style),
            Span::raw("    "),
            Span::styled(format!(" {} ", texts.confirm_button), confirm_style),
        ])
        .alignment(Alignment::Center),
    ];

    let paragraph = Paragraph::new(lines).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, inner);
}
