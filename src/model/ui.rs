//! UI Model
//!
//! Everything about the screen that is not carousel paging: focus, cursors,
//! modal and menu state, toast, and the clickable regions from the last frame.

use std::time::Instant;

use ratatui::layout::Rect;

use super::types::{FocusPane, HitTarget, PreviewState, MENU_ENTRIES};

#[derive(Clone, Debug)]
pub struct UiModel {
    // ============================================
    // PREFERENCES
    // ============================================
    pub vim_mode: bool,

    // ============================================
    // FOCUS & CURSORS
    // ============================================
    pub focus: FocusPane,

    /// Highlighted card, as a slot within the visible window
    pub card_cursor: usize,

    /// Highlighted video in the showcase
    pub video_cursor: usize,

    // ============================================
    // DIALOGS & POPUPS
    // ============================================
    /// Ride preview modal
    pub preview: Option<PreviewState>,

    /// Header dropdown; `Some(i)` is open with entry i highlighted
    pub menu: Option<usize>,

    /// Toast message (text, timestamp)
    pub toast_message: Option<(String, Instant)>,

    // ============================================
    // POINTER
    // ============================================
    /// Whether the mouse pointer is inside the carousel area
    pub pointer_over_carousel: bool,

    /// Carousel area from the last frame, for hover detection
    pub carousel_area: Option<Rect>,

    /// Clickable regions from the last frame, in draw order
    pub hit_map: Vec<(Rect, HitTarget)>,

    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool) -> Self {
        Self {
            vim_mode,
            focus: FocusPane::Carousel,
            card_cursor: 0,
            video_cursor: 0,
            preview: None,
            menu: None,
            toast_message: None,
            pointer_over_carousel: false,
            carousel_area: None,
            hit_map: Vec::new(),
            should_quit: false,
        }
    }

    pub fn toggle_menu(&mut self) {
        self.menu = match self.menu {
            Some(_) => None,
            None => Some(0),
        };
    }

    pub fn menu_next(&mut self) {
        if let Some(i) = self.menu {
            self.menu = crate::logic::navigation::next_selection(Some(i), MENU_ENTRIES.len());
        }
    }

    pub fn menu_previous(&mut self) {
        if let Some(i) = self.menu {
            self.menu = crate::logic::navigation::prev_selection(Some(i), MENU_ENTRIES.len());
        }
    }

    pub fn show_toast(&mut self, message: String) {
        self.toast_message = Some((message, Instant::now()));
    }

    pub fn should_dismiss_toast(&self) -> bool {
        if let Some((_, timestamp)) = &self.toast_message {
            crate::logic::ui::should_dismiss_toast(timestamp.elapsed().as_millis())
        } else {
            false
        }
    }

    pub fn dismiss_toast(&mut self) {
        self.toast_message = None;
    }

    /// Forget last frame's regions before drawing a new one
    pub fn clear_hit_map(&mut self) {
        self.hit_map.clear();
        self.carousel_area = None;
    }

    pub fn register_hit(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.hit_map.push((area, target));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_cycles() {
        let mut ui = UiModel::new(false);
        ui.menu_next();
        assert_eq!(ui.menu, None, "closed menu ignores navigation");

        ui.toggle_menu();
        assert_eq!(ui.menu, Some(0));
        ui.menu_previous();
        assert_eq!(ui.menu, Some(MENU_ENTRIES.len() - 1));
        ui.menu_next();
        assert_eq!(ui.menu, Some(0));
        ui.toggle_menu();
        assert_eq!(ui.menu, None);
    }

    #[test]
    fn test_register_hit_skips_empty_areas() {
        let mut ui = UiModel::new(false);
        ui.register_hit(Rect::new(0, 0, 0, 3), HitTarget::NextArrow);
        ui.register_hit(Rect::new(0, 0, 3, 1), HitTarget::PreviousArrow);
        assert_eq!(ui.hit_map.len(), 1);
        ui.clear_hit_map();
        assert!(ui.hit_map.is_empty());
    }

    #[test]
    fn test_toast() {
        let mut ui = UiModel::new(false);
        ui.show_toast("Hello".to_string());
        assert!(ui.toast_message.is_some());
        assert!(!ui.should_dismiss_toast());
        ui.dismiss_toast();
        assert!(ui.toast_message.is_none());
    }
}
