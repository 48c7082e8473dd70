//! Business Logic
//!
//! Pure functions that can be unit tested without a terminal:
//! - carousel: paging arithmetic (max offset, wrap/clamp steps, visible range)
//! - pagination: indicator strip derived from the carousel position
//! - formatting: column-width aware text fitting and labels
//! - hit_test: mouse hit testing against rendered regions
//! - input: key and mouse event translation into messages
//! - layout: which page sections fit the terminal
//! - navigation: list cursor movement
//! - ui: toast timing, input wait, tab cycling
//! - video: video link normalisation

pub mod carousel;
pub mod formatting;
pub mod hit_test;
pub mod input;
pub mod layout;
pub mod navigation;
pub mod pagination;
pub mod ui;
pub mod video;
