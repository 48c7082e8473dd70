//! Application Model
//!
//! Cloneable state for the whole landing page, split into focused parts:
//!
//! - **Catalog**: rides, categories and videos (read-only after load)
//! - **Carousel**: paging state machine over the rides
//! - **UiModel**: focus, cursors, modal, menu, toast, hit regions
//!
//! No I/O lives here; the runtime in `main.rs` owns terminals, tasks and
//! channels.

pub mod carousel;
pub mod timer;
pub mod types;
pub mod ui;

use std::time::Instant;

pub use carousel::{Carousel, CarouselItem, CarouselSettings, CategoryFilter, WrapPolicy};
pub use types::*;
pub use ui::UiModel;

use crate::catalog::{Catalog, Ride};

#[derive(Clone, Debug)]
pub struct Model {
    pub catalog: Catalog,
    pub carousel: Carousel<Ride>,
    pub ui: UiModel,
}

impl Model {
    pub fn new(
        catalog: Catalog,
        filter: CategoryFilter,
        settings: CarouselSettings,
        vim_mode: bool,
        now: Instant,
    ) -> Self {
        let carousel = Carousel::new(catalog.rides.clone(), filter, settings, now);
        Self {
            catalog,
            carousel,
            ui: UiModel::new(vim_mode),
        }
    }

    /// Filter for category tab `tab` (0 is All, n is the n-th category)
    pub fn filter_for_tab(&self, tab: usize) -> Option<CategoryFilter> {
        if tab == 0 {
            return Some(CategoryFilter::All);
        }
        self.catalog
            .categories
            .get(tab - 1)
            .map(|c| CategoryFilter::Category(c.id.clone()))
    }

    /// Tab index of the active filter, None if it names an unlisted category
    pub fn active_tab(&self) -> Option<usize> {
        match self.carousel.filter() {
            CategoryFilter::All => Some(0),
            CategoryFilter::Category(id) => self
                .catalog
                .categories
                .iter()
                .position(|c| &c.id == id)
                .map(|i| i + 1),
        }
    }

    pub fn tab_count(&self) -> usize {
        self.catalog.categories.len() + 1
    }

    /// Ride under the card cursor
    pub fn focused_ride(&self) -> Option<&Ride> {
        self.carousel.visible_items().get(self.ui.card_cursor).copied()
    }

    /// Ride shown in the preview modal
    pub fn previewed_ride(&self) -> Option<&Ride> {
        self.ui
            .preview
            .as_ref()
            .and_then(|p| self.catalog.ride(&p.ride_id))
    }

    /// Whether the carousel should consider itself hovered
    ///
    /// An open preview covers the carousel, so it counts as hovering.
    pub fn wants_hover(&self) -> bool {
        self.ui.pointer_over_carousel || self.ui.preview.is_some()
    }

    /// Keep cursors inside their lists after the carousel or catalog changed
    pub fn clamp_cursors(&mut self) {
        let visible = self.carousel.visible_items().len();
        self.ui.card_cursor = crate::logic::navigation::clamp_cursor(self.ui.card_cursor, visible);
        self.ui.video_cursor =
            crate::logic::navigation::clamp_cursor(self.ui.video_cursor, self.catalog.videos.len());
    }
}
