//! 可复用的界面组件

pub mod confirm;
pub mod detail;
pub mod error;
pub mod form;
pub mod help;
pub mod navigation;
pub mod statusbar;
pub mod table;

use ratatui::layout::Rect;

/// 计算居中弹窗区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fits_small_area() {
        let area = Rect::new(0, 0, 30, 10);
        assert_eq!(centered_rect(20, 4, area), Rect::new(5, 3, 20, 4));
        assert_eq!(centered_rect(60, 20, area), Rect::new(0, 0, 30, 10));
    }
}
