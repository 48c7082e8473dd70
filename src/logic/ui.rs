//! UI timing and tab cycling
//!
//! Pure functions for time-based UI decisions and category tab movement.

use std::time::Duration;

/// How long a toast stays on screen
pub const TOAST_MILLIS: u128 = 2000;

/// Upper bound on how long the event loop waits for input before redrawing
pub const MAX_INPUT_WAIT: Duration = Duration::from_millis(250);

/// Whether a toast shown `elapsed_ms` ago should be removed
///
/// # Examples
/// ```
/// use parktui::logic::ui::should_dismiss_toast;
///
/// assert!(!should_dismiss_toast(500));
/// assert!(should_dismiss_toast(2500));
/// ```
pub fn should_dismiss_toast(elapsed_ms: u128) -> bool {
    elapsed_ms >= TOAST_MILLIS
}

/// How long to wait for input so the next auto-advance tick is not late
///
/// `until_tick` is None when the carousel timer is not running.
pub fn input_wait(until_tick: Option<Duration>) -> Duration {
    match until_tick {
        Some(remaining) => remaining.min(MAX_INPUT_WAIT),
        None => MAX_INPUT_WAIT,
    }
}

/// Next category tab, wrapping; `current` is None when the filter has no tab
pub fn next_tab(current: Option<usize>, tab_count: usize) -> usize {
    crate::logic::navigation::next_selection(current, tab_count).unwrap_or(0)
}

/// Previous category tab, wrapping
pub fn prev_tab(current: Option<usize>, tab_count: usize) -> usize {
    crate::logic::navigation::prev_selection(current, tab_count).unwrap_or(0)
}
