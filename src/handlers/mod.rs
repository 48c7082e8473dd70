//! Event Handlers
//!
//! Terminal events are translated to messages by `parktui::logic::input`
//! and applied through `App::update`.

pub mod input;

pub use input::handle_event;
