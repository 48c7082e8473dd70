//! Pagination indicator logic
//!
//! The indicator strip is derived entirely from the carousel position; it holds
//! no state of its own.

/// One dot in the pagination strip
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageIndicator {
    /// Carousel offset this dot jumps to when activated
    pub index: usize,
    /// Whether this dot marks the current offset
    pub active: bool,
}

/// Build the indicator strip for a carousel at `current` with `max` as the last offset
///
/// Always yields `max + 1` indicators, so a single-page carousel still shows one dot.
///
/// # Examples
/// ```
/// use parktui::logic::pagination::indicators;
///
/// let dots = indicators(1, 2);
/// assert_eq!(dots.len(), 3);
/// assert!(dots[1].active);
/// assert!(!dots[0].active && !dots[2].active);
/// ```
pub fn indicators(current: usize, max: usize) -> Vec<PageIndicator> {
    (0..=max)
        .map(|index| PageIndicator {
            index,
            active: index == current,
        })
        .collect()
}

/// Text rendition of the strip, e.g. `○ ● ○`
pub fn indicator_strip(dots: &[PageIndicator]) -> String {
    dots.iter()
        .map(|d| if d.active { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}
