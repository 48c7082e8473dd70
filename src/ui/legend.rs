use parktui::model::FocusPane;
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

fn key(label: &'static str) -> Span<'static> {
    Span::styled(label, Style::default().fg(Color::Yellow))
}

fn action(label: &'static str) -> Span<'static> {
    Span::raw(label)
}

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(
    vim_mode: bool,
    focus: FocusPane,
    preview_open: bool,
    menu_open: bool,
) -> Vec<Span<'static>> {
    // Overlays capture the keyboard, so only their keys matter
    if preview_open {
        return vec![
            key("Enter"),
            action(":Watch video  "),
            key("Esc"),
            action(":Close"),
        ];
    }
    if menu_open {
        let nav = if vim_mode { "j/k" } else { "↑/↓" };
        return vec![
            key(nav),
            action(":Select  "),
            key("Enter"),
            action(":Open  "),
            key("Esc"),
            action(":Close"),
        ];
    }

    let mut spans = if vim_mode {
        vec![key("h/l"), action(":Page  "), key("g/G"), action(":First/Last  ")]
    } else {
        vec![key("←/→"), action(":Page  "), key("Home/End"), action(":First/Last  ")]
    };

    spans.extend([key("1-9/[ ]"), action(":Category  "), key("a"), action(":All  ")]);

    match focus {
        FocusPane::Carousel => spans.extend([
            key("Tab"),
            action(":Card  "),
            key("Enter"),
            action(":Preview  "),
        ]),
        FocusPane::Videos => {
            let nav = if vim_mode { "j/k" } else { "↑/↓" };
            spans.extend([key(nav), action(":Video  "), key("Enter"), action(":Watch  ")]);
        }
    }

    spans.extend([
        key("v"),
        action(":Videos  "),
        key("m"),
        action(":Menu  "),
        key("q"),
        action(":Quit"),
    ]);
    spans
}

/// Render the one-line hotkey legend for the current focus and overlay
pub fn render_legend(
    f: &mut Frame,
    area: Rect,
    vim_mode: bool,
    focus: FocusPane,
    preview_open: bool,
    menu_open: bool,
) {
    let spans = build_hotkey_spans(vim_mode, focus, preview_open, menu_open);
    let legend = Paragraph::new(Line::from(spans)).style(Style::default().fg(Color::Gray));
    f.render_widget(legend, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spans_to_text(spans: &[Span]) -> String {
        spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_legend_carousel_focus() {
        let text = spans_to_text(&build_hotkey_spans(false, FocusPane::Carousel, false, false));
        assert!(text.contains("←/→:Page"), "got: {}", text);
        assert!(text.contains(":Preview"), "got: {}", text);
        assert!(!text.contains(":Watch  "), "got: {}", text);
        assert!(text.ends_with("q:Quit"), "got: {}", text);
    }

    #[test]
    fn test_legend_videos_focus() {
        let text = spans_to_text(&build_hotkey_spans(false, FocusPane::Videos, false, false));
        assert!(text.contains("↑/↓:Video"), "got: {}", text);
        assert!(text.contains("Enter:Watch"), "got: {}", text);
    }

    #[test]
    fn test_legend_vim_mode() {
        let text = spans_to_text(&build_hotkey_spans(true, FocusPane::Videos, false, false));
        assert!(text.contains("h/l:Page"), "got: {}", text);
        assert!(text.contains("j/k:Video"), "got: {}", text);
    }

    #[test]
    fn test_legend_preview_only_shows_preview_keys() {
        let text = spans_to_text(&build_hotkey_spans(false, FocusPane::Carousel, true, false));
        assert_eq!(text, "Enter:Watch video  Esc:Close");
    }

    #[test]
    fn test_legend_menu_keys() {
        let text = spans_to_text(&build_hotkey_spans(true, FocusPane::Carousel, false, true));
        assert!(text.starts_with("j/k:Select"), "got: {}", text);
        assert!(!text.contains("Quit"), "got: {}", text);
    }
}
