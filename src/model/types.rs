use std::time::Instant;

/// Which section receives directional keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPane {
    #[default]
    Carousel,
    Videos,
}

/// Clickable regions recorded while rendering
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    PreviousArrow,
    NextArrow,
    PageDot(usize),
    /// Category tab (0 = All)
    CategoryTab(usize),
    /// Card in visible slot n
    Card(usize),
    Video(usize),
    MenuButton,
    MenuEntry(usize),
    /// Inside the preview modal, not on a control
    PreviewBody,
    PreviewVideoLink,
}

/// Ride preview modal
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewState {
    pub ride_id: String,
    pub opened_at: Instant,
}

/// Entry in the header dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
}

pub const MENU_ENTRIES: [MenuEntry; 4] = [
    MenuEntry {
        title: "Parks",
        subtitle: "Explore your favourite park",
    },
    MenuEntry {
        title: "Resorts",
        subtitle: "Get a rejuvenating experience at our resort",
    },
    MenuEntry {
        title: "Offers & Combos",
        subtitle: "Plan the perfect day with exciting offers",
    },
    MenuEntry {
        title: "Timings And Guidelines",
        subtitle: "Know the timings and other guidelines",
    },
];
