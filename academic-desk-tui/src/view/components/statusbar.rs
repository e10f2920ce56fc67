//! 底部状态栏组件
//!
//!     ┌────────────────────────────────────────────────────────────┐
//!     │ ✗ Term: is out of range (1..4)                    ← 状态行 │
//!     │ Tab Next field │ Enter Submit │ Esc Cancel        ← 提示行 │
//!     └────────────────────────────────────────────────────────────┘

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};
use crate::view::help::hints;
use crate::view::theme::{colors, Styles};

/// 渲染状态栏（两行：状态 + 快捷键提示）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);

    frame.render_widget(status_line(app), rows[0]);
    frame.render_widget(hint_line(app), rows[1]);
}

/// 错误优先，其次提示，最后是当前模块的活动状态
fn status_line(app: &App) -> Paragraph<'static> {
    let c = colors();

    let line = if let Some(error) = &app.status.error {
        Line::from(Span::styled(
            format!(" ✗ {error}"),
            Style::default().fg(c.error).add_modifier(Modifier::BOLD),
        ))
    } else if let Some(message) = &app.status.message {
        Line::from(Span::styled(
            format!(" ✓ {message}"),
            Style::default().fg(c.success),
        ))
    } else {
        let (loading, busy) = activity(app);
        let texts = &t().status_bar;
        let text = if busy {
            texts.busy
        } else if loading {
            texts.loading
        } else {
            texts.ready
        };
        Line::from(Span::styled(format!(" {text}"), Styles::muted()))
    };

    Paragraph::new(line)
}

/// 当前页面是否在加载 / 有进行中的变更
fn activity(app: &App) -> (bool, bool) {
    match app.current_page {
        Page::Home => (false, false),
        Page::Tasks => (app.tasks.loading, app.tasks.is_busy()),
        Page::Classes => (app.classes.loading, app.classes.is_busy()),
        Page::Assessments => (app.assessments.loading, app.assessments.is_busy()),
        Page::Lessons => (app.lessons.loading, app.lessons.is_busy()),
        Page::Questions => (app.questions.loading, app.questions.is_busy()),
        Page::Proofs => (app.proofs.loading, app.proofs.is_busy()),
    }
}

fn hint_line(app: &App) -> Paragraph<'static> {
    let c = colors();
    let mut spans = Vec::new();

    for (i, (key, desc)) in hints(app.current_page, app.active_view(), app.focus)
        .into_iter()
        .enumerate()
    {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(c.border)));
        } else {
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(desc, Styles::hint_desc()));
    }

    Paragraph::new(Line::from(spans))
}
