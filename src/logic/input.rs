//! Input translation
//!
//! Maps crossterm key and mouse events to [`Msg`] values. Everything here is
//! pure so key bindings and click routing can be tested without a terminal.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use crate::messages::Msg;
use crate::model::types::{FocusPane, HitTarget};

use super::hit_test;

/// What the screen looks like when a key arrives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputContext {
    pub vim_mode: bool,
    pub focus: FocusPane,
    pub preview_open: bool,
    pub menu_open: bool,
}

/// Translate a key press into a message, if it means anything here
pub fn key_to_msg(key: KeyEvent, ctx: InputContext) -> Option<Msg> {
    // Release events (Windows) would double every action; repeats keep paging
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Msg::Quit);
    }

    if ctx.preview_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('q') => Some(Msg::ClosePreview),
            KeyCode::Enter | KeyCode::Char('o') => Some(Msg::OpenPreviewVideo),
            _ => None,
        };
    }

    if ctx.menu_open {
        return match key.code {
            KeyCode::Esc | KeyCode::Char('m') => Some(Msg::ToggleMenu),
            KeyCode::Up => Some(Msg::MenuPrevious),
            KeyCode::Down => Some(Msg::MenuNext),
            KeyCode::Char('k') if ctx.vim_mode => Some(Msg::MenuPrevious),
            KeyCode::Char('j') if ctx.vim_mode => Some(Msg::MenuNext),
            KeyCode::Enter => Some(Msg::MenuActivate),
            _ => None,
        };
    }

    // Bindings shared by both panes
    let shared = match key.code {
        KeyCode::Char('q') => Some(Msg::Quit),
        KeyCode::Char('m') => Some(Msg::ToggleMenu),
        KeyCode::Char('v') => Some(Msg::TogglePane),
        KeyCode::Char('[') => Some(Msg::PreviousTab),
        KeyCode::Char(']') => Some(Msg::NextTab),
        KeyCode::Char('a') | KeyCode::Char('0') => Some(Msg::SelectTab(0)),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Msg::SelectTab(d as usize)),
        KeyCode::Left => Some(Msg::PreviousPage),
        KeyCode::Right => Some(Msg::NextPage),
        KeyCode::Home => Some(Msg::FirstPage),
        KeyCode::End => Some(Msg::LastPage),
        KeyCode::Char('h') if ctx.vim_mode => Some(Msg::PreviousPage),
        KeyCode::Char('l') if ctx.vim_mode => Some(Msg::NextPage),
        KeyCode::Char('g') if ctx.vim_mode => Some(Msg::FirstPage),
        KeyCode::Char('G') if ctx.vim_mode => Some(Msg::LastPage),
        _ => None,
    };
    if shared.is_some() {
        return shared;
    }

    match ctx.focus {
        FocusPane::Carousel => match key.code {
            KeyCode::Tab => Some(Msg::NextCard),
            KeyCode::BackTab => Some(Msg::PreviousCard),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Msg::OpenFocusedCard),
            _ => None,
        },
        FocusPane::Videos => match key.code {
            KeyCode::Up => Some(Msg::PreviousVideo),
            KeyCode::Down => Some(Msg::NextVideo),
            KeyCode::Char('k') if ctx.vim_mode => Some(Msg::PreviousVideo),
            KeyCode::Char('j') if ctx.vim_mode => Some(Msg::NextVideo),
            KeyCode::Enter => Some(Msg::OpenSelectedVideo),
            KeyCode::Esc => Some(Msg::TogglePane),
            _ => None,
        },
    }
}

/// Hover message for a pointer that moved from `was_inside` to `is_inside`
pub fn hover_transition(was_inside: bool, is_inside: bool) -> Option<Msg> {
    match (was_inside, is_inside) {
        (false, true) => Some(Msg::HoverStart),
        (true, false) => Some(Msg::HoverEnd),
        _ => None,
    }
}

/// Route a left click on `target` given which overlays are open
///
/// Overlays swallow clicks: a click outside an open preview or menu closes it
/// instead of reaching whatever is underneath.
pub fn click_to_msg(target: Option<HitTarget>, ctx: InputContext) -> Option<Msg> {
    if ctx.preview_open {
        return match target {
            Some(HitTarget::PreviewBody) => None,
            Some(HitTarget::PreviewVideoLink) => Some(Msg::OpenPreviewVideo),
            _ => Some(Msg::ClosePreview),
        };
    }

    if ctx.menu_open {
        return match target {
            Some(HitTarget::MenuEntry(i)) => Some(Msg::MenuSelect(i)),
            _ => Some(Msg::ToggleMenu),
        };
    }

    match target? {
        HitTarget::PreviousArrow => Some(Msg::PreviousPage),
        HitTarget::NextArrow => Some(Msg::NextPage),
        HitTarget::PageDot(i) => Some(Msg::GoToPage(i)),
        HitTarget::CategoryTab(i) => Some(Msg::SelectTab(i)),
        HitTarget::Card(slot) => Some(Msg::OpenCard(slot)),
        HitTarget::Video(i) => Some(Msg::OpenVideo(i)),
        HitTarget::MenuButton => Some(Msg::ToggleMenu),
        HitTarget::MenuEntry(_) | HitTarget::PreviewBody | HitTarget::PreviewVideoLink => None,
    }
}

/// Translate a mouse event into zero or more messages
///
/// `pointer_was_inside` is the hover state before this event. Every event
/// carries a position, so hover is re-evaluated on clicks and scrolls too.
pub fn mouse_to_msgs(
    event: MouseEvent,
    ctx: InputContext,
    carousel_area: Option<Rect>,
    hit_map: &[(Rect, HitTarget)],
    pointer_was_inside: bool,
) -> Vec<Msg> {
    let mut msgs = Vec::new();

    let is_inside = carousel_area
        .map(|area| hit_test::contains(area, event.column, event.row))
        .unwrap_or(false);
    if let Some(msg) = hover_transition(pointer_was_inside, is_inside) {
        msgs.push(msg);
    }

    match event.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            let target = hit_test::hit_test(hit_map, event.column, event.row);
            if let Some(msg) = click_to_msg(target, ctx) {
                msgs.push(msg);
            }
        }
        MouseEventKind::ScrollDown if is_inside && !ctx.preview_open && !ctx.menu_open => {
            msgs.push(Msg::NextPage);
        }
        MouseEventKind::ScrollUp if is_inside && !ctx.preview_open && !ctx.menu_open => {
            msgs.push(Msg::PreviousPage);
        }
        _ => {}
    }

    msgs
}
