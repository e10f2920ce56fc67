//! 列表 / 表格适配器
//!
//! 把实体列表投影成字符串行，并维护光标。
//! 每次加载 / 创建 / 更新 / 删除之后重新投影：
//!     · 行数不变：光标按索引保持
//!     · 行数变化：光标钳制到最近的有效索引（不重置为 0）
//!     · 列表为空：无选中

/// 一行单元格文本
pub type Row = Vec<String>;

/// 表格适配器
#[derive(Debug, Clone)]
pub struct TableAdapter {
    rows: Vec<Row>,
    cursor: Option<usize>,
    /// 一页可见的行数（随终端尺寸变化）
    page_size: usize,
}

impl TableAdapter {
    pub fn new() -> Self {
        Self {
            rows: Vec::new(),
            cursor: None,
            page_size: 10,
        }
    }

    /// 用新的行替换投影
    pub fn project(&mut self, rows: Vec<Row>) {
        self.rows = rows;
        self.cursor = match (self.rows.len(), self.cursor) {
            (0, _) => None,
            (_, None) => Some(0),
            (len, Some(i)) => Some(i.min(len - 1)),
        };
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// 当前选中的行索引
    pub fn selected(&self) -> Option<usize> {
        self.cursor
    }

    #[cfg(test)]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.page_size = page_size.max(1);
    }

    pub fn select_previous(&mut self) {
        self.move_by(-1);
    }

    pub fn select_next(&mut self) {
        self.move_by(1);
    }

    pub fn page_up(&mut self) {
        self.move_by(-self.page_delta());
    }

    pub fn page_down(&mut self) {
        self.move_by(self.page_delta());
    }

    pub fn select_first(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = Some(0);
        }
    }

    pub fn select_last(&mut self) {
        if !self.rows.is_empty() {
            self.cursor = Some(self.rows.len() - 1);
        }
    }

    fn page_delta(&self) -> isize {
        isize::try_from(self.page_size).unwrap_or(isize::MAX)
    }

    fn move_by(&mut self, delta: isize) {
        let Some(last) = self.rows.len().checked_sub(1) else {
            return;
        };
        let current = self.cursor.unwrap_or(0);
        let next = current.saturating_add_signed(delta).min(last);
        self.cursor = Some(next);
    }
}

impl Default for TableAdapter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(n: usize) -> Vec<Row> {
        (0..n).map(|i| vec![i.to_string()]).collect()
    }

    #[test]
    fn test_first_projection_selects_first_row() {
        let mut table = TableAdapter::new();
        assert_eq!(table.selected(), None);
        table.project(rows(3));
        assert_eq!(table.selected(), Some(0));
    }

    #[test]
    fn test_refresh_with_same_length_keeps_cursor() {
        let mut table = TableAdapter::new();
        table.project(rows(5));
        table.select_next();
        table.select_next();
        table.project(rows(5));
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_deleting_last_row_clamps_cursor() {
        let mut table = TableAdapter::new();
        table.project(rows(4));
        table.select_last();
        assert_eq!(table.selected(), Some(3));
        table.project(rows(3));
        assert_eq!(table.selected(), Some(2));
    }

    #[test]
    fn test_deleting_middle_row_keeps_index() {
        let mut table = TableAdapter::new();
        table.project(rows(4));
        table.select_next();
        table.project(rows(3));
        assert_eq!(table.selected(), Some(1));
    }

    #[test]
    fn test_empty_list_has_no_selection() {
        let mut table = TableAdapter::new();
        table.project(rows(1));
        table.project(Vec::new());
        assert_eq!(table.selected(), None);
        table.select_next();
        table.page_down();
        assert_eq!(table.selected(), None);
    }

    #[test]
    fn test_navigation_stays_in_bounds() {
        let mut table = TableAdapter::new();
        table.project(rows(25));
        table.set_page_size(10);
        table.select_previous();
        assert_eq!(table.selected(), Some(0));
        table.page_down();
        table.page_down();
        table.page_down();
        assert_eq!(table.selected(), Some(24));
        table.page_up();
        assert_eq!(table.selected(), Some(14));
        table.select_first();
        assert_eq!(table.selected(), Some(0));
    }
}
