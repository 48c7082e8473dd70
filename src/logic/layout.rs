//! Page layout calculations
//!
//! The landing page is a vertical stack. On short terminals the decorative
//! sections are dropped first so the carousel always keeps its space.

/// Fixed rows for the always-visible parts
pub const HEADER_HEIGHT: u16 = 3;
pub const TABS_HEIGHT: u16 = 4;
pub const DOTS_HEIGHT: u16 = 1;
pub const LEGEND_HEIGHT: u16 = 1;
/// Smallest carousel that still shows a readable card
pub const MIN_CAROUSEL_HEIGHT: u16 = 10;

/// Rows for the optional sections (0 when hidden)
pub const HERO_HEIGHT: u16 = 5;
pub const VIDEOS_HEIGHT: u16 = 9;
pub const FOOTER_HEIGHT: u16 = 3;

/// Heights of the optional sections for a terminal `height` rows tall
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionPlan {
    pub hero: u16,
    pub videos: u16,
    pub footer: u16,
}

/// Decide which optional sections fit, preferring videos, then hero, then footer
pub fn plan_sections(height: u16) -> SectionPlan {
    let fixed = HEADER_HEIGHT + TABS_HEIGHT + DOTS_HEIGHT + LEGEND_HEIGHT + MIN_CAROUSEL_HEIGHT;
    let mut spare = height.saturating_sub(fixed);

    let mut take = |wanted: u16| {
        if spare >= wanted {
            spare -= wanted;
            wanted
        } else {
            0
        }
    };

    let videos = take(VIDEOS_HEIGHT);
    let hero = take(HERO_HEIGHT);
    let footer = take(FOOTER_HEIGHT);

    SectionPlan { hero, videos, footer }
}

/// Width of each card when `page_window` cards share `width` columns
///
/// `arrow_width` columns are reserved on each side for the navigation arrows.
pub fn card_width(width: u16, page_window: usize, arrow_width: u16) -> u16 {
    let inner = width.saturating_sub(arrow_width.saturating_mul(2));
    let slots = u16::try_from(page_window).unwrap_or(u16::MAX).max(1);
    inner / slots
}
