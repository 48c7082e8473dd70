//! Message dispatch

use std::time::Instant;

use parktui::messages::Msg;

use crate::App;

impl App {
    /// Apply one message to the app state
    pub(crate) fn update(&mut self, msg: Msg, now: Instant) {
        tracing::trace!(?msg, "update");

        match msg {
            Msg::NextPage => self.model.carousel.go_to_next(now),
            Msg::PreviousPage => self.model.carousel.go_to_previous(now),
            Msg::GoToPage(index) => self.go_to_page(index, now),
            Msg::FirstPage => self.go_to_page(0, now),
            Msg::LastPage => {
                let last = self.model.carousel.max_index();
                self.go_to_page(last, now);
            }

            Msg::SelectTab(tab) => self.select_tab(tab, now),
            Msg::NextTab => {
                let tab = parktui::logic::ui::next_tab(self.model.active_tab(), self.model.tab_count());
                self.select_tab(tab, now);
            }
            Msg::PreviousTab => {
                let tab = parktui::logic::ui::prev_tab(self.model.active_tab(), self.model.tab_count());
                self.select_tab(tab, now);
            }

            Msg::HoverStart => {
                self.model.ui.pointer_over_carousel = true;
                self.sync_hover(now);
            }
            Msg::HoverEnd => {
                self.model.ui.pointer_over_carousel = false;
                self.sync_hover(now);
            }

            Msg::NextCard => self.move_card_cursor(true),
            Msg::PreviousCard => self.move_card_cursor(false),
            Msg::OpenFocusedCard => self.open_preview(self.model.ui.card_cursor, now),
            Msg::OpenCard(slot) => self.open_preview(slot, now),
            Msg::ClosePreview => self.close_preview(now),
            Msg::OpenPreviewVideo => self.open_preview_video(),

            Msg::TogglePane => self.toggle_pane(),
            Msg::NextVideo => self.move_video_cursor(true),
            Msg::PreviousVideo => self.move_video_cursor(false),
            Msg::OpenSelectedVideo => self.open_video(self.model.ui.video_cursor),
            Msg::OpenVideo(index) => self.open_video(index),

            Msg::ToggleMenu => self.model.ui.toggle_menu(),
            Msg::MenuNext => self.model.ui.menu_next(),
            Msg::MenuPrevious => self.model.ui.menu_previous(),
            Msg::MenuActivate => {
                if let Some(index) = self.model.ui.menu {
                    self.select_menu_entry(index);
                }
            }
            Msg::MenuSelect(index) => self.select_menu_entry(index),

            Msg::Quit => self.model.ui.should_quit = true,
        }

        self.model.clamp_cursors();
    }
}
