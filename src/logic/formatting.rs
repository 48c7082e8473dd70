//! Text fitting for fixed-width cells
//!
//! Card titles and descriptions contain emoji and non-ASCII place names, so
//! widths are measured in terminal columns, not bytes or chars.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Cut `text` to at most `max_width` columns, ending with `…` when shortened
///
/// # Examples
/// ```
/// use parktui::logic::formatting::truncate_to_width;
///
/// assert_eq!(truncate_to_width("Cyclone", 10), "Cyclone");
/// assert_eq!(truncate_to_width("Termite Adventure", 8), "Termite…");
/// ```
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > max_width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}

/// "72 Epic Rides" style label for a category tab
pub fn ride_count_label(count: u32) -> String {
    if count == 1 {
        "1 Epic Ride".to_string()
    } else {
        format!("{} Epic Rides", count)
    }
}

/// "Page 2 of 3" (1-based) for the status line
pub fn page_label(current: usize, max: usize) -> String {
    format!("Page {} of {}", current + 1, max + 1)
}
