//! 帮助弹窗

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use super::centered_rect;
use crate::i18n::t;
use crate::view::help::help_sections;
use crate::view::theme::{colors, Styles};

/// 按键列宽
const KEY_WIDTH: usize = 14;

pub fn render(frame: &mut Frame) {
    let c = colors();
    let sections = help_sections();

    let mut lines = Vec::new();
    for (heading, entries) in sections {
        lines.push(Line::styled(
            heading,
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        ));
        for (key, desc) in entries {
            lines.push(Line::from(vec![
                Span::styled(format!("  {key:<width$}", width = KEY_WIDTH), Styles::hint_key()),
                Span::styled(desc, Style::default().fg(c.fg)),
            ]));
        }
        lines.push(Line::from(""));
    }
    lines.push(Line::styled(t().help.close_hint, Styles::muted()));

    let height = u16::try_from(lines.len() + 2).unwrap_or(u16::MAX);
    let area = centered_rect(60, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", t().help.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border_focused))
        .style(Styles::modal());

    frame.render_widget(block, area);

    let inner = Rect::new(
        area.x + 2,
        area.y + 1,
        area.width.saturating_sub(4),
        area.height.saturating_sub(2),
    );
    frame.render_widget(Paragraph::new(lines), inner);
}
