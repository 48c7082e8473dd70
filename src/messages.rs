//! Message types for the update loop
//!
//! Keyboard and mouse input is translated into `Msg` values by
//! `logic::input`, then applied to the app state by `App::update`.
//! Timer ticks do not go through here; the event loop polls the carousel
//! directly each frame.

/// Every state change a user can trigger
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    // ============================================
    // CAROUSEL NAVIGATION
    // ============================================
    /// Arrow "next" (pauses auto-advance)
    NextPage,
    /// Arrow "previous" (pauses auto-advance)
    PreviousPage,
    /// Pagination dot clicked
    GoToPage(usize),
    FirstPage,
    LastPage,

    // ============================================
    // CATEGORY TABS (tab 0 is "All")
    // ============================================
    SelectTab(usize),
    NextTab,
    PreviousTab,

    // ============================================
    // POINTER
    // ============================================
    /// Pointer entered the carousel area
    HoverStart,
    /// Pointer left the carousel area
    HoverEnd,

    // ============================================
    // CARDS & PREVIEW
    // ============================================
    NextCard,
    PreviousCard,
    /// Open the preview for the card under the cursor
    OpenFocusedCard,
    /// Open the preview for the card in this visible slot
    OpenCard(usize),
    ClosePreview,
    /// Open the previewed ride's video link
    OpenPreviewVideo,

    // ============================================
    // VIDEO SHOWCASE
    // ============================================
    /// Switch keyboard focus between carousel and video showcase
    TogglePane,
    NextVideo,
    PreviousVideo,
    OpenSelectedVideo,
    OpenVideo(usize),

    // ============================================
    // HEADER MENU
    // ============================================
    ToggleMenu,
    MenuNext,
    MenuPrevious,
    MenuActivate,
    MenuSelect(usize),

    Quit,
}
