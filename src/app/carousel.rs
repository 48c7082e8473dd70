//! Carousel orchestration methods
//!
//! Wires paging, category tabs, hover and cursors to the carousel controller.

use std::time::Instant;

use parktui::logic;
use parktui::model::FocusPane;

use crate::App;

impl App {
    pub(crate) fn go_to_page(&mut self, index: usize, now: Instant) {
        if !self.model.carousel.go_to_index(index, now) {
            tracing::debug!(index, "page jump rejected");
        }
    }

    /// Switch to category tab `tab` (0 = All); unknown tabs are ignored
    pub(crate) fn select_tab(&mut self, tab: usize, now: Instant) {
        let Some(filter) = self.model.filter_for_tab(tab) else {
            tracing::debug!(tab, "no such category tab");
            return;
        };
        self.model.carousel.set_category(filter, now);
        self.model.ui.card_cursor = 0;
    }

    /// Push the combined hover state (pointer or open preview) into the carousel
    pub(crate) fn sync_hover(&mut self, now: Instant) {
        let hovering = self.model.wants_hover();
        self.model.carousel.set_hovering(hovering, now);
    }

    pub(crate) fn move_card_cursor(&mut self, forward: bool) {
        let visible = self.model.carousel.visible_items().len();
        let current = Some(self.model.ui.card_cursor);
        let next = if forward {
            logic::navigation::next_selection(current, visible)
        } else {
            logic::navigation::prev_selection(current, visible)
        };
        self.model.ui.card_cursor = next.unwrap_or(0);
    }

    pub(crate) fn move_video_cursor(&mut self, forward: bool) {
        let count = self.model.catalog.videos.len();
        let current = Some(self.model.ui.video_cursor);
        let next = if forward {
            logic::navigation::next_selection(current, count)
        } else {
            logic::navigation::prev_selection(current, count)
        };
        self.model.ui.video_cursor = next.unwrap_or(0);
    }

    pub(crate) fn toggle_pane(&mut self) {
        self.model.ui.focus = match self.model.ui.focus {
            FocusPane::Carousel if !self.model.catalog.videos.is_empty() => FocusPane::Videos,
            _ => FocusPane::Carousel,
        };
    }
}
