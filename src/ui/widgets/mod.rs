pub mod dialog;
pub mod form;

pub use dialog::WarningDialog;

use ratatui::layout::Rect;

/// Helper to create a centered rectangle
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered_rect(50, 10, area), Rect::new(25, 15, 50, 10));
    }

    #[test]
    fn test_centered_rect_larger_than_area() {
        let area = Rect::new(2, 3, 10, 5);
        let rect = centered_rect(20, 8, area);
        assert_eq!((rect.x, rect.y), (2, 3));
    }
}
