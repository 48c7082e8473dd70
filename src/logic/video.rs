//! Video link handling
//!
//! Showcase videos are stored as YouTube shorts or watch links. Shorts links
//! open in the narrow mobile player, so they are rewritten to a watch URL
//! before being handed to the open command.

/// Extract the video id from a shorts (`/shorts/<id>`) or watch (`?v=<id>`) URL
///
/// # Examples
/// ```
/// use parktui::logic::video::video_id;
///
/// assert_eq!(video_id("https://youtube.com/shorts/2DbDd9X47b8?si=abc"), Some("2DbDd9X47b8"));
/// assert_eq!(video_id("https://www.youtube.com/watch?v=ISDsclTxEeU&t=3"), Some("ISDsclTxEeU"));
/// assert_eq!(video_id("https://example.com/clip.mp4"), None);
/// ```
pub fn video_id(url: &str) -> Option<&str> {
    let after = if let Some((_, rest)) = url.split_once("/shorts/") {
        rest
    } else if let Some((_, rest)) = url.split_once("v=") {
        rest
    } else {
        return None;
    };

    let id = after
        .split(|c| c == '?' || c == '&' || c == '/' || c == '#')
        .next()
        .unwrap_or("");
    if id.is_empty() {
        None
    } else {
        Some(id)
    }
}

/// URL to open for a video: a watch link for YouTube ids, the original URL otherwise
pub fn watch_url(url: &str) -> String {
    match video_id(url) {
        Some(id) => format!("https://www.youtube.com/watch?v={}", id),
        None => url.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorts_without_query() {
        assert_eq!(video_id("https://youtube.com/shorts/fF80j7ROjhs"), Some("fF80j7ROjhs"));
    }

    #[test]
    fn test_empty_id() {
        assert_eq!(video_id("https://youtube.com/shorts/?si=x"), None);
        assert_eq!(video_id("https://youtube.com/watch?v="), None);
    }

    #[test]
    fn test_watch_url_rewrites_shorts() {
        assert_eq!(
            watch_url("https://youtube.com/shorts/7_u24buh9Zo?si=-PdNX6Du55IuOVLM"),
            "https://www.youtube.com/watch?v=7_u24buh9Zo"
        );
    }

    #[test]
    fn test_watch_url_passes_other_links_through() {
        assert_eq!(watch_url("https://example.com/ride.mp4"), "https://example.com/ride.mp4");
    }
}
