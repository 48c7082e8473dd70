//! Cursor movement for flat lists (cards, videos, menu entries)

/// Next cursor position, wrapping to the top; None for an empty list
///
/// # Examples
/// ```
/// use parktui::logic::navigation::next_selection;
///
/// assert_eq!(next_selection(None, 0), None);
/// assert_eq!(next_selection(None, 3), Some(0));
/// assert_eq!(next_selection(Some(2), 3), Some(0));
/// ```
pub fn next_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(i) if i + 1 >= list_len => 0,
        Some(i) => i + 1,
        None => 0,
    })
}

/// Previous cursor position, wrapping to the bottom; None for an empty list
///
/// # Examples
/// ```
/// use parktui::logic::navigation::prev_selection;
///
/// assert_eq!(prev_selection(Some(0), 3), Some(2));
/// assert_eq!(prev_selection(Some(2), 3), Some(1));
/// ```
pub fn prev_selection(current: Option<usize>, list_len: usize) -> Option<usize> {
    if list_len == 0 {
        return None;
    }

    Some(match current {
        Some(0) | None => list_len - 1,
        Some(i) => (i - 1).min(list_len - 1),
    })
}

/// Pull a cursor back inside a list of `len` items (0 for an empty list)
pub fn clamp_cursor(cursor: usize, len: usize) -> usize {
    cursor.min(len.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_list_has_no_selection() {
        assert_eq!(next_selection(Some(1), 0), None);
        assert_eq!(prev_selection(Some(1), 0), None);
    }

    #[test]
    fn test_wrapping() {
        assert_eq!(next_selection(Some(3), 4), Some(0));
        assert_eq!(prev_selection(Some(0), 4), Some(3));
        assert_eq!(next_selection(Some(0), 1), Some(0));
        assert_eq!(prev_selection(Some(0), 1), Some(0));
    }

    #[test]
    fn test_stale_cursor() {
        // List shrank under the cursor
        assert_eq!(next_selection(Some(7), 3), Some(0));
        assert_eq!(prev_selection(Some(7), 3), Some(2));
    }

    #[test]
    fn test_clamp_cursor() {
        assert_eq!(clamp_cursor(5, 3), 2);
        assert_eq!(clamp_cursor(1, 3), 1);
        assert_eq!(clamp_cursor(4, 0), 0);
    }
}
