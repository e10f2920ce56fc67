//! 实体表格组件

use ratatui::{
    layout::{Constraint, Rect},
    style::{Modifier, Style},
    text::Line,
    widgets::{Cell, Paragraph, Row, Table, TableState},
    Frame,
};

use crate::i18n::t;
use crate::model::{Column, TableAdapter};
use crate::view::theme::{colors, Styles};

/// 渲染表格；首次加载前显示加载中，空列表显示提示
pub fn render(
    frame: &mut Frame,
    area: Rect,
    columns: &[Column],
    table: &TableAdapter,
    loading: bool,
) {
    let c = colors();

    if table.is_empty() {
        let text = if loading {
            t().common.loading
        } else {
            t().pages.empty_hint
        };
        let content = vec![
            Line::from(""),
            Line::styled(format!("  {text}"), Styles::muted()),
        ];
        frame.render_widget(Paragraph::new(content), area);
        return;
    }

    let header = Row::new(
        columns
            .iter()
            .map(|column| Cell::from(column.header))
            .collect::<Vec<_>>(),
    )
    .style(Style::default().fg(c.highlight).add_modifier(Modifier::BOLD))
    .bottom_margin(1);

    let rows = table.rows().iter().map(|row| {
        Row::new(row.iter().map(|cell| Cell::from(cell.as_str())).collect::<Vec<_>>())
            .style(Style::default().fg(c.fg))
    });

    let widths: Vec<Constraint> = columns
        .iter()
        .map(|column| Constraint::Percentage(column.width))
        .collect();

    let widget = Table::new(rows, widths)
        .header(header)
        .row_highlight_style(Styles::selected())
        .highlight_symbol("▶ ");

    let mut state = TableState::default();
    state.select(table.selected());

    frame.render_stateful_widget(widget, area, &mut state);
}
