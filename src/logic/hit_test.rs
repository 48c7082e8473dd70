//! Mouse hit testing against the regions recorded during the last render

use ratatui::layout::Rect;

use crate::model::types::HitTarget;

/// Whether the cell at (`column`, `row`) lies inside `area`
pub fn contains(area: Rect, column: u16, row: u16) -> bool {
    column >= area.x
        && row >= area.y
        && (column as u32) < area.x as u32 + area.width as u32
        && (row as u32) < area.y as u32 + area.height as u32
}

/// Topmost target under the pointer
///
/// Regions are recorded in draw order, so the last match is the one on top
/// (overlays are drawn after the page beneath them).
pub fn hit_test(hit_map: &[(Rect, HitTarget)], column: u16, row: u16) -> Option<HitTarget> {
    hit_map
        .iter()
        .rev()
        .find(|(area, _)| contains(*area, column, row))
        .map(|(_, target)| *target)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let area = Rect::new(2, 3, 4, 2);
        assert!(contains(area, 2, 3));
        assert!(contains(area, 5, 4));
        assert!(!contains(area, 6, 4));
        assert!(!contains(area, 5, 5));
        assert!(!contains(area, 1, 3));
        assert!(!contains(Rect::new(0, 0, 0, 0), 0, 0));
    }

    #[test]
    fn test_last_drawn_wins() {
        let map = vec![
            (Rect::new(0, 0, 10, 10), HitTarget::Card(0)),
            (Rect::new(2, 2, 4, 4), HitTarget::PreviewBody),
        ];
        assert_eq!(hit_test(&map, 3, 3), Some(HitTarget::PreviewBody));
        assert_eq!(hit_test(&map, 8, 8), Some(HitTarget::Card(0)));
        assert_eq!(hit_test(&map, 20, 20), None);
    }
}
