//! 布局辅助函数

use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// 在区域中居中取出指定百分比大小的矩形
pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

/// 把卡片区域切成 rows × cols 的网格，按行优先返回
pub fn grid(area: Rect, rows: usize, cols: usize) -> Vec<Rect> {
    let row_areas = Layout::default()
        .direction(Direction::Vertical)
        .constraints(vec![Constraint::Ratio(1, rows as u32); rows])
        .split(area);

    row_areas
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints(vec![Constraint::Ratio(1, cols as u32); cols])
                .split(*row)
                .to_vec()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn grid_is_row_major() {
        let cells = grid(Rect::new(0, 0, 90, 20), 2, 3);
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Rect::new(0, 0, 30, 10));
        assert_eq!(cells[2], Rect::new(60, 0, 30, 10));
        assert_eq!(cells[3], Rect::new(0, 10, 30, 10));
    }

    #[test]
    fn centered_rect_is_inside() {
        let outer = Rect::new(0, 0, 100, 50);
        let inner = centered_rect(40, 20, outer);
        assert_eq!(inner.width, 40);
        assert_eq!(inner.height, 10);
        assert_eq!(inner.x, 30);
        assert_eq!(inner.y, 20);
    }
}
