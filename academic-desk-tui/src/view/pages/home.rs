//! 首页视图：欢迎信息 + 各来源汇总

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::message::DashboardSource;
use crate::model::state::SummarySlot;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染首页
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let texts = &t().home;

    // 首页布局：欢迎信息 + 统计信息
    let layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5), // 欢迎区域
            Constraint::Length(6), // 统计区域
            Constraint::Min(0),
        ])
        .split(area);

    let welcome = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("  {}", texts.welcome),
            Style::default().fg(c.highlight).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!("  {}", texts.welcome_desc), Styles::muted())),
    ];
    frame.render_widget(Paragraph::new(welcome), layout[0]);

    let sources = DashboardSource::all();
    let count = u32::try_from(sources.len()).unwrap_or(1);
    let constraints: Vec<Constraint> = sources.iter().map(|_| Constraint::Ratio(1, count)).collect();
    let cards = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(layout[1]);

    for (source, card) in sources.iter().zip(cards.iter()) {
        render_card(app, frame, *card, *source);
    }
}

fn title(source: DashboardSource) -> &'static str {
    let texts = &t().home;
    match source {
        DashboardSource::Tasks => texts.tasks,
        DashboardSource::Classes => texts.classes,
        DashboardSource::Assessments => texts.assessments,
        DashboardSource::Questions => texts.questions,
        DashboardSource::Proofs => texts.proofs,
    }
}

/// 单个来源的卡片：加载中 / 数量 / 不可用
fn render_card(app: &App, frame: &mut Frame, area: Rect, source: DashboardSource) {
    let c = colors();
    let block = Block::default()
        .title(format!(" {} ", title(source)))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(c.border));

    let body = match app.dashboard.slot(source) {
        SummarySlot::Loading => vec![
            Line::from(""),
            Line::styled(format!(" {}", t().common.loading), Styles::muted()),
        ],
        SummarySlot::Ready(summary) => {
            let mut lines = vec![
                Line::from(""),
                Line::from(Span::styled(
                    format!(" {}", summary.total),
                    Style::default().fg(c.success).add_modifier(Modifier::BOLD),
                )),
            ];
            if let Some(pending) = summary.pending {
                lines.push(Line::styled(
                    format!(" {pending} {}", t().home.pending),
                    Style::default().fg(c.warning),
                ));
            }
            lines
        }
        SummarySlot::Failed => vec![
            Line::from(""),
            Line::styled(
                format!(" ✗ {}", t().home.unavailable),
                Style::default().fg(c.error),
            ),
        ],
    };

    frame.render_widget(Paragraph::new(body).block(block), area);
}
