//! Park landing page TUI library
//!
//! Exposes the carousel controller, catalog, config and pure logic for the
//! binary and for testing.

pub mod catalog;
pub mod config;
pub mod error;
pub mod logic;
pub mod messages;
pub mod model;
pub mod utils;
