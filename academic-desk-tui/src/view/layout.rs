//! 主布局渲染
//!
//!     ┌ 标题栏 ───────────────────────────────────────────────┐
//!     │ 导航 (20%) │ 页面内容 (80%)                           │
//!     │            │                                          │
//!     ├ 状态行 ───────────────────────────────────────────────┤
//!     └ 提示行 ───────────────────────────────────────────────┘
//!
//! 弹窗（表单、删除确认、帮助）最后绘制，位于最上层。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Page};

use super::components;
use super::pages;
use super::theme::{colors, Styles};

/// 对当前页面的模块状态调用 `$f`（首页不调用）
macro_rules! with_active_module {
    ($app:expr, $f:path $(, $arg:expr)*) => {
        match $app.current_page {
            Page::Home => {}
            Page::Tasks => $f(&$app.tasks $(, $arg)*),
            Page::Classes => $f(&$app.classes $(, $arg)*),
            Page::Assessments => $f(&$app.assessments $(, $arg)*),
            Page::Lessons => $f(&$app.lessons $(, $arg)*),
            Page::Questions => $f(&$app.questions $(, $arg)*),
            Page::Proofs => $f(&$app.proofs $(, $arg)*),
        }
    };
}

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();

    // 三层布局：标题栏 + 主内容区 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(1),    // 主内容区
            Constraint::Length(2), // 状态栏
        ])
        .split(size);

    render_title_bar(frame, main_layout[0]);

    // 左右分栏布局
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20), // 左侧导航
            Constraint::Percentage(80), // 右侧内容
        ])
        .split(main_layout[1]);

    components::navigation::render(app, frame, columns[0]);
    render_page_content(app, frame, columns[1]);
    components::statusbar::render(app, frame, main_layout[2]);

    // 弹窗（在最上层）
    with_active_module!(app, pages::module::render_overlay, frame);
    if app.show_help {
        components::help::render(frame);
    }
}

/// 渲染标题栏
fn render_title_bar(frame: &mut Frame, area: Rect) {
    let c = colors();
    let title = Paragraph::new(format!(
        " {} v{}",
        t().common.app_name,
        env!("CARGO_PKG_VERSION")
    ))
    .style(Style::default().bg(c.highlight).fg(c.selected_fg));
    frame.render_widget(title, area);
}

/// 根据当前页面渲染内容
fn render_page_content(app: &App, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(format!(
            " {} {} ",
            app.current_page.icon(),
            app.current_page.title()
        ))
        .title_style(Styles::title())
        .borders(Borders::ALL)
        .border_style(Styles::border(app.focus.is_content()));

    let inner_area = block.inner(area);
    frame.render_widget(block, area);

    if app.current_page == Page::Home {
        pages::home::render(app, frame, inner_area);
    } else {
        with_active_module!(app, pages::module::render, frame, inner_area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;

    use super::*;
    use crate::model::{FocusPanel, FormModel, ViewState};

    fn draw(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|frame| render(app, frame)).unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>()
    }

    #[test]
    fn test_home_renders_summary_cards() {
        let app = App::new();
        let screen = draw(&app);
        assert!(screen.contains("Academic Desk"));
        assert!(screen.contains("Classes"));
    }

    #[test]
    fn test_error_surface_is_rendered() {
        let mut app = App::new();
        app.status.set_error("disk unavailable");
        assert!(draw(&app).contains("disk unavailable"));
    }

    #[test]
    fn test_form_overlay_is_rendered() {
        let mut app = App::new();
        app.current_page = Page::Classes;
        app.focus = FocusPanel::Content;
        app.classes.view = ViewState::Creating;
        app.classes.form = Some(FormModel::new(
            <crate::model::ClassesModule as crate::model::ModuleSpec>::fields(),
        ));
        let screen = draw(&app);
        assert!(screen.contains("Subject"));
        assert!(screen.contains("[ Save ]"));
    }
}
