//! Layout helpers.

use ratatui::layout::Rect;

/// Width of the centered card every screen is drawn in.
pub const CARD_WIDTH: u16 = 56;

/// Returns a `width` x `height` rect centered in `area`, shrunk to fit.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centers_inside_area() {
        let area = Rect::new(0, 0, 100, 40);
        assert_eq!(centered(area, 50, 20), Rect::new(25, 10, 50, 20));
    }

    #[test]
    fn shrinks_to_small_areas() {
        let area = Rect::new(2, 3, 30, 10);
        assert_eq!(centered(area, 56, 20), Rect::new(2, 3, 30, 10));
    }
}
