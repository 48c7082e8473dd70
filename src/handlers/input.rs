//! Terminal input handler

use std::time::Instant;

use crossterm::event::Event;
use parktui::logic::input::{self, InputContext};

use crate::App;

fn input_context(app: &App) -> InputContext {
    InputContext {
        vim_mode: app.model.ui.vim_mode,
        focus: app.model.ui.focus,
        preview_open: app.model.ui.preview.is_some(),
        menu_open: app.model.ui.menu.is_some(),
    }
}

/// Handle one terminal event
pub fn handle_event(app: &mut App, event: Event) {
    let now = Instant::now();
    let ctx = input_context(app);

    match event {
        Event::Key(key) => {
            if let Some(msg) = input::key_to_msg(key, ctx) {
                app.update(msg, now);
            }
        }
        Event::Mouse(mouse) => {
            let msgs = input::mouse_to_msgs(
                mouse,
                ctx,
                app.model.ui.carousel_area,
                &app.model.ui.hit_map,
                app.model.ui.pointer_over_carousel,
            );
            for msg in msgs {
                app.update(msg, now);
            }
        }
        Event::FocusLost => {
            // The pointer can leave the window without a final move event
            if app.model.ui.pointer_over_carousel {
                app.update(parktui::messages::Msg::HoverEnd, now);
            }
        }
        _ => {}
    }
}
