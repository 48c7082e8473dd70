// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: splits the screen into page sections
// - render: main orchestration function that coordinates all rendering
// - header: brand bar with nav links and menu button
// - hero: headline banner
// - categories: category tabs (All + one per category)
// - carousel: ride cards with navigation arrows
// - pagination: indicator dots under the carousel
// - videos: video showcase list
// - footer: park locations and copyright
// - legend: hotkey legend
// - dialogs: ride preview modal and header dropdown
// - toast: brief pop-up messages
//
// Renderers return the clickable regions they drew; render collects them
// into the UI model for mouse hit testing on the next event.

pub mod carousel;
pub mod categories;
pub mod dialogs;
pub mod footer;
pub mod header;
pub mod hero;
pub mod layout;
pub mod legend;
pub mod pagination;
pub mod render;
pub mod toast;
pub mod videos;

// Re-export main render function for convenience
pub use render::render;

use parktui::model::HitTarget;
use ratatui::layout::Rect;

/// Clickable regions produced by a renderer, in draw order
pub type Hits = Vec<(Rect, HitTarget)>;
