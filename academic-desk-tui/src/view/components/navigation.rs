//! 左侧导航面板组件

use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use crate::i18n::t;
use crate::model::App;
use crate::view::theme::{colors, Styles};

/// 渲染导航面板
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let c = colors();
    let is_focused = !app.focus.is_content();

    let block = Block::default()
        .title(format!(" {} ", t().nav.title))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(is_focused));

    // 构建导航项列表；当前打开的页面用 ● 标记
    let items: Vec<ListItem> = app
        .navigation
        .items
        .iter()
        .enumerate()
        .map(|(i, page)| {
            let is_selected = i == app.navigation.selected;
            let prefix = if is_selected { "▶ " } else { "  " };
            let marker = if *page == app.current_page { " ●" } else { "" };
            let content = format!("{prefix}{} {}{marker}", page.icon(), page.title());

            let style = if is_selected {
                Styles::selected()
            } else {
                Style::default().fg(c.fg)
            };

            ListItem::new(Line::from(Span::styled(content, style)))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Styles::selected());

    // 使用 ListState 来跟踪选中状态
    let mut state = ListState::default();
    state.select(Some(app.navigation.selected));

    frame.render_stateful_widget(list, area, &mut state);
}
