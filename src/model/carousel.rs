//! Carousel Controller
//!
//! One parametrized paging state machine shared by every paged strip in the
//! app. It owns the category filter, the current offset, the auto-advance flag,
//! the hover flag and the auto-advance timer, and it never touches rendering.
//!
//! The timer runs if and only if auto-advance is enabled and nothing is hovering
//! over the carousel. Manual navigation turns auto-advance off until the next
//! category change.

use std::fmt;
use std::time::{Duration, Instant};

use super::timer::AutoAdvanceTimer;
use crate::error::CatalogError;
use crate::logic::carousel as paging;
use crate::logic::pagination::{self, PageIndicator};

/// Anything the carousel can page through
///
/// The controller only reads the identifier and category tag.
pub trait CarouselItem {
    fn id(&self) -> &str;
    fn category(&self) -> &str;
}

/// Which items the carousel shows
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Every item, in source order
    #[default]
    All,
    /// Items whose category tag equals this value exactly
    Category(String),
}

impl CategoryFilter {
    /// Parse a category id, treating `all` (any case) as the all-categories sentinel
    pub fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(selected) => selected == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => write!(f, "all"),
            CategoryFilter::Category(id) => write!(f, "{}", id),
        }
    }
}

/// What manual next/previous do at the ends of the sequence
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WrapPolicy {
    /// Next on the last page goes to the first, previous on the first goes to the last
    #[default]
    Wrap,
    /// Manual navigation stops at the ends; timer ticks still wrap
    Clamp,
}

/// Per-instance carousel parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CarouselSettings {
    /// Number of items visible at once
    pub page_window: usize,
    /// Time between auto-advance ticks
    pub auto_advance_interval: Duration,
    pub wrap: WrapPolicy,
}

impl CarouselSettings {
    /// Most cards a page may hold
    pub const MAX_PAGE_WINDOW: usize = 12;

    pub fn validate(&self) -> Result<(), CatalogError> {
        if self.page_window == 0 {
            return Err(CatalogError::ZeroPageWindow);
        }
        if self.page_window > Self::MAX_PAGE_WINDOW {
            return Err(CatalogError::PageWindowTooLarge(
                self.page_window,
                Self::MAX_PAGE_WINDOW,
            ));
        }
        if self.auto_advance_interval.is_zero() {
            return Err(CatalogError::ZeroInterval);
        }
        Ok(())
    }
}

impl Default for CarouselSettings {
    fn default() -> Self {
        Self {
            page_window: 4,
            auto_advance_interval: Duration::from_millis(5000),
            wrap: WrapPolicy::Wrap,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Carousel<T> {
    /// Full item source, never mutated by filtering
    items: Vec<T>,
    /// Positions into `items` matching `filter`, in source order
    filtered: Vec<usize>,
    filter: CategoryFilter,
    settings: CarouselSettings,
    current_index: usize,
    auto_advance: bool,
    hovering: bool,
    timer: AutoAdvanceTimer,
}

impl<T: CarouselItem> Carousel<T> {
    /// Mount a carousel: offset 0, auto-advance on, not hovering, timer armed
    ///
    /// A zero page window is treated as 1 so paging arithmetic stays defined;
    /// callers validate settings up front with [`CarouselSettings::validate`].
    pub fn new(items: Vec<T>, filter: CategoryFilter, settings: CarouselSettings, now: Instant) -> Self {
        let settings = CarouselSettings {
            page_window: settings.page_window.max(1),
            ..settings
        };
        let mut carousel = Self {
            items,
            filtered: Vec::new(),
            filter,
            settings,
            current_index: 0,
            auto_advance: true,
            hovering: false,
            timer: AutoAdvanceTimer::new(settings.auto_advance_interval),
        };
        carousel.refilter();
        carousel.sync_timer(now);
        carousel
    }

    // ============================================
    // OPERATIONS
    // ============================================

    /// Select a category filter, rewind to the first page and re-enable auto-advance
    ///
    /// Unknown categories are accepted and simply produce an empty sequence.
    pub fn set_category(&mut self, filter: CategoryFilter, now: Instant) {
        tracing::debug!(from = %self.filter, to = %filter, "carousel category change");
        self.filter = filter;
        self.refilter();
        self.current_index = 0;
        self.auto_advance = true;
        // Restart the interval so the new page gets a full dwell time
        self.timer.disarm();
        self.sync_timer(now);
    }

    /// Move one page forward and pause auto-advance
    pub fn go_to_next(&mut self, now: Instant) {
        self.current_index = match self.settings.wrap {
            WrapPolicy::Wrap => paging::next_index(self.current_index, self.max_index()),
            WrapPolicy::Clamp => paging::next_index_clamped(self.current_index, self.max_index()),
        };
        self.pause_auto_advance(now);
    }

    /// Move one page back and pause auto-advance
    pub fn go_to_previous(&mut self, now: Instant) {
        self.current_index = match self.settings.wrap {
            WrapPolicy::Wrap => paging::prev_index(self.current_index, self.max_index()),
            WrapPolicy::Clamp => paging::prev_index_clamped(self.current_index, self.max_index()),
        };
        self.pause_auto_advance(now);
    }

    /// Jump to offset `index` and pause auto-advance
    ///
    /// Out-of-range offsets are ignored entirely (state untouched) and reported
    /// by returning `false`.
    pub fn go_to_index(&mut self, index: usize, now: Instant) -> bool {
        if index > self.max_index() {
            tracing::debug!(index, max = self.max_index(), "ignoring out-of-range carousel jump");
            return false;
        }
        self.current_index = index;
        self.pause_auto_advance(now);
        true
    }

    /// Pointer entered (`true`) or left (`false`) the carousel
    pub fn set_hovering(&mut self, hovering: bool, now: Instant) {
        if self.hovering == hovering {
            return;
        }
        self.hovering = hovering;
        self.sync_timer(now);
    }

    /// Drive the auto-advance timer; returns true when the carousel advanced
    ///
    /// A tick advances exactly like [`Carousel::go_to_next`] under the wrap
    /// policy but leaves auto-advance enabled.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_timer_active() {
            return false;
        }
        if !self.timer.poll(now) {
            return false;
        }
        self.current_index = paging::next_index(self.current_index, self.max_index());
        tracing::trace!(index = self.current_index, "carousel auto-advanced");
        true
    }

    /// Replace the item source, keeping the current filter and rewinding to page one
    pub fn set_items(&mut self, items: Vec<T>, now: Instant) {
        self.items = items;
        self.refilter();
        self.current_index = 0;
        self.sync_timer(now);
    }

    // ============================================
    // ACCESSORS
    // ============================================

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn max_index(&self) -> usize {
        paging::max_index(self.filtered.len(), self.settings.page_window)
    }

    pub fn filter(&self) -> &CategoryFilter {
        &self.filter
    }

    pub fn settings(&self) -> &CarouselSettings {
        &self.settings
    }

    pub fn is_auto_advancing(&self) -> bool {
        self.auto_advance
    }

    pub fn is_hovering(&self) -> bool {
        self.hovering
    }

    /// Whether the auto-advance timer is currently scheduled
    pub fn is_timer_active(&self) -> bool {
        self.auto_advance && !self.hovering
    }

    /// When the next auto-advance tick is due, if the timer is active
    pub fn next_deadline(&self) -> Option<Instant> {
        self.timer.deadline()
    }

    /// Time until the next tick, used to bound the event loop's input wait
    pub fn time_until_tick(&self, now: Instant) -> Option<Duration> {
        self.timer.remaining(now)
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    /// The filtered sequence in source order
    pub fn filtered_items(&self) -> Vec<&T> {
        self.filtered.iter().map(|&i| &self.items[i]).collect()
    }

    /// Items currently on screen: at most one page window starting at the current offset
    pub fn visible_items(&self) -> Vec<&T> {
        let range = paging::visible_range(self.current_index, self.settings.page_window, self.filtered.len());
        self.filtered[range].iter().map(|&i| &self.items[i]).collect()
    }

    /// Pagination strip for the current position
    pub fn indicators(&self) -> Vec<PageIndicator> {
        pagination::indicators(self.current_index, self.max_index())
    }

    // ============================================
    // INTERNALS
    // ============================================

    fn refilter(&mut self) {
        self.filtered = self
            .items
            .iter()
            .enumerate()
            .filter(|(_, item)| self.filter.matches(item.category()))
            .map(|(i, _)| i)
            .collect();
    }

    fn pause_auto_advance(&mut self, now: Instant) {
        if self.auto_advance {
            tracing::debug!("manual navigation paused auto-advance");
        }
        self.auto_advance = false;
        self.sync_timer(now);
    }

    /// Bring the timer in line with the activation rule
    fn sync_timer(&mut self, now: Instant) {
        if self.is_timer_active() {
            if !self.timer.is_armed() {
                self.timer.arm(now);
            }
        } else {
            self.timer.disarm();
        }
    }
}
