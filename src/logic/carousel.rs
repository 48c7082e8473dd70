//! Carousel paging arithmetic
//!
//! Pure functions behind the carousel controller. Indices are offsets of the
//! first visible item into the filtered sequence, so the valid range is
//! `0..=max_index`.

use std::ops::Range;

/// Largest valid offset for a sequence of `len` items shown `page_window` at a time
///
/// Sequences shorter than one page (including empty ones) have a single page,
/// so the result is 0 rather than an underflow.
///
/// # Examples
/// ```
/// use parktui::logic::carousel::max_index;
///
/// assert_eq!(max_index(6, 4), 2);
/// assert_eq!(max_index(2, 4), 0);
/// assert_eq!(max_index(0, 4), 0);
/// ```
pub fn max_index(len: usize, page_window: usize) -> usize {
    len.saturating_sub(page_window)
}

/// Offset after moving forward one step, wrapping from `max` back to 0
///
/// # Examples
/// ```
/// use parktui::logic::carousel::next_index;
///
/// assert_eq!(next_index(0, 2), 1);
/// assert_eq!(next_index(2, 2), 0);
/// assert_eq!(next_index(0, 0), 0);
/// ```
pub fn next_index(current: usize, max: usize) -> usize {
    if current >= max {
        0
    } else {
        current + 1
    }
}

/// Offset after moving back one step, wrapping from 0 to `max`
///
/// # Examples
/// ```
/// use parktui::logic::carousel::prev_index;
///
/// assert_eq!(prev_index(1, 2), 0);
/// assert_eq!(prev_index(0, 2), 2);
/// assert_eq!(prev_index(0, 0), 0);
/// ```
pub fn prev_index(current: usize, max: usize) -> usize {
    if current == 0 {
        max
    } else {
        // A stale index above max steps onto the last page
        (current - 1).min(max)
    }
}

/// Forward step that stops at `max` instead of wrapping
pub fn next_index_clamped(current: usize, max: usize) -> usize {
    (current + 1).min(max)
}

/// Backward step that stops at 0 instead of wrapping
pub fn prev_index_clamped(current: usize, max: usize) -> usize {
    current.saturating_sub(1).min(max)
}

/// Range of sequence positions visible when the window starts at `offset`
///
/// Never extends past `len`; an offset beyond the sequence yields an empty range.
pub fn visible_range(offset: usize, page_window: usize, len: usize) -> Range<usize> {
    let start = offset.min(len);
    let end = offset.saturating_add(page_window).min(len);
    start..end
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_index_matches_formula() {
        for page_window in 1..=6 {
            for len in 0..=20 {
                let expected = if len > page_window { len - page_window } else { 0 };
                assert_eq!(
                    max_index(len, page_window),
                    expected,
                    "len={} window={}",
                    len,
                    page_window
                );
            }
        }
    }

    #[test]
    fn test_next_index_cycles_in_max_plus_one_steps() {
        for max in 0..6 {
            for start in 0..=max {
                let mut idx = start;
                for _ in 0..=max {
                    idx = next_index(idx, max);
                }
                assert_eq!(idx, start, "max={} start={}", max, start);
            }
        }
    }

    #[test]
    fn test_prev_index_wraps_to_max() {
        assert_eq!(prev_index(0, 5), 5);
        assert_eq!(prev_index(0, 1), 1);
    }

    #[test]
    fn test_zero_range_stays_put() {
        assert_eq!(next_index(0, 0), 0);
        assert_eq!(prev_index(0, 0), 0);
        assert_eq!(next_index_clamped(0, 0), 0);
        assert_eq!(prev_index_clamped(0, 0), 0);
    }

    #[test]
    fn test_stale_index_is_pulled_back_in_range() {
        assert_eq!(next_index(9, 2), 0);
        assert_eq!(prev_index(9, 2), 2);
        assert_eq!(next_index_clamped(9, 2), 2);
        assert_eq!(prev_index_clamped(9, 2), 2);
    }

    #[test]
    fn test_clamped_steps_stop_at_the_ends() {
        assert_eq!(next_index_clamped(2, 2), 2);
        assert_eq!(next_index_clamped(1, 2), 2);
        assert_eq!(prev_index_clamped(0, 2), 0);
        assert_eq!(prev_index_clamped(2, 2), 1);
    }

    #[test]
    fn test_visible_range() {
        assert_eq!(visible_range(0, 4, 6), 0..4);
        assert_eq!(visible_range(2, 4, 6), 2..6);
        assert_eq!(visible_range(0, 4, 2), 0..2);
        assert_eq!(visible_range(0, 4, 0), 0..0);
        assert_eq!(visible_range(10, 4, 6), 6..6);
    }
}
