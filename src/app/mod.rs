//! App Orchestration Methods
//!
//! `impl App` blocks grouped by domain. Each one wires messages to:
//! - Model state (pure, in parktui::model)
//! - Services (background image loading)
//! - Logic (pure functions in parktui::logic)
//!
//! `update` is the single entry point for user-triggered changes.

pub(crate) mod carousel;
pub(crate) mod links;
pub(crate) mod preview;
pub(crate) mod update;
