use parktui::logic::layout::{
    plan_sections, DOTS_HEIGHT, HEADER_HEIGHT, LEGEND_HEIGHT, MIN_CAROUSEL_HEIGHT, TABS_HEIGHT,
};
use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    pub header_area: Rect,
    /// Hero banner (if it fits)
    pub hero_area: Option<Rect>,
    pub tabs_area: Rect,
    pub carousel_area: Rect,
    pub dots_area: Rect,
    /// Video showcase (if it fits)
    pub videos_area: Option<Rect>,
    /// Footer (if it fits)
    pub footer_area: Option<Rect>,
    pub legend_area: Rect,
}

fn optional(area: Rect) -> Option<Rect> {
    if area.height > 0 {
        Some(area)
    } else {
        None
    }
}

/// Calculate the screen layout for all page sections
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let plan = plan_sections(terminal_size.height);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(HEADER_HEIGHT),
            Constraint::Length(plan.hero),
            Constraint::Length(TABS_HEIGHT),
            Constraint::Min(MIN_CAROUSEL_HEIGHT),
            Constraint::Length(DOTS_HEIGHT),
            Constraint::Length(plan.videos),
            Constraint::Length(plan.footer),
            Constraint::Length(LEGEND_HEIGHT),
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        hero_area: optional(chunks[1]),
        tabs_area: chunks[2],
        carousel_area: chunks[3],
        dots_area: chunks[4],
        videos_area: optional(chunks[5]),
        footer_area: optional(chunks[6]),
        legend_area: chunks[7],
    }
}

/// A `width` x `height` rectangle centred in `area`, shrunk to fit
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
