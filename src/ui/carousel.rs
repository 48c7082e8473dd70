use std::time::Instant;

use parktui::catalog::Ride;
use parktui::logic::formatting::{page_label, truncate_to_width};
use parktui::logic::layout::card_width;
use parktui::model::{CarouselSettings, FocusPane, HitTarget, Model};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use super::Hits;

const ARROW_WIDTH: u16 = 3;

/// Status shown under the carousel: page position and auto-advance mode
fn status_line(model: &Model) -> Line<'static> {
    let carousel = &model.carousel;
    let mode = if carousel.is_timer_active() {
        let secs = carousel
            .time_until_tick(Instant::now())
            .map(|d| d.as_secs() + 1)
            .unwrap_or(0);
        Span::styled(format!("▶ auto ({}s)", secs), Style::default().fg(Color::Green))
    } else if carousel.is_auto_advancing() {
        Span::styled("⏸ paused while hovering", Style::default().fg(Color::Yellow))
    } else {
        Span::styled("⏸ manual (change category to resume)", Style::default().fg(Color::Gray))
    };

    Line::from(vec![
        Span::raw(" "),
        Span::raw(page_label(carousel.current_index(), carousel.max_index())),
        Span::raw(" · "),
        mode,
        Span::raw(" "),
    ])
}

/// Render one ride card
fn render_card(f: &mut Frame, area: Rect, ride: &Ride, category_name: &str, focused: bool) {
    let inner_width = area.width.saturating_sub(2) as usize;

    let border = if focused {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::Blue)
    };

    let mut lines = vec![
        Line::from(Span::styled(
            format!(" {} ", category_name.to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            truncate_to_width(&format!("📍 {}", ride.location), inner_width),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::from(Span::styled(ride.description.clone(), Style::default().fg(Color::White))),
    ];
    if ride.has_video() {
        lines.push(Line::raw(""));
        lines.push(Line::from(Span::styled("▶ Video", Style::default().fg(Color::Magenta))));
    }

    let card = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border)
            .title(Span::styled(
                truncate_to_width(&ride.title, inner_width),
                Style::default().add_modifier(Modifier::BOLD),
            )),
    );
    f.render_widget(card, area);
}

fn render_arrow(f: &mut Frame, area: Rect, symbol: &str) {
    let pad = area.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled(
        symbol.to_string(),
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    )));
    f.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// Render the carousel; returns arrow and card regions
pub fn render_carousel(f: &mut Frame, area: Rect, model: &Model) -> Hits {
    let focused_pane = model.ui.focus == FocusPane::Carousel;
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(if focused_pane {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default().fg(Color::DarkGray)
        })
        .title(Span::styled(
            " OUR ICONIC RIDES ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(status_line(model));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(ARROW_WIDTH),
            Constraint::Min(0),
            Constraint::Length(ARROW_WIDTH),
        ])
        .split(inner);
    let (prev_area, cards_area, next_area) = (chunks[0], chunks[1], chunks[2]);

    render_arrow(f, prev_area, "◀");
    render_arrow(f, next_area, "▶");
    let mut hits = vec![
        (prev_area, HitTarget::PreviousArrow),
        (next_area, HitTarget::NextArrow),
    ];

    let visible = model.carousel.visible_items();
    if visible.is_empty() {
        let empty = Paragraph::new(vec![
            Line::raw(""),
            Line::from(Span::styled(
                "No rides in this category yet",
                Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
            )),
        ])
        .alignment(Alignment::Center);
        f.render_widget(empty, cards_area);
        return hits;
    }

    // Slots are sized for a full page so cards keep their width on short pages
    let page_window = model
        .carousel
        .settings()
        .page_window
        .min(CarouselSettings::MAX_PAGE_WINDOW);
    let width = card_width(inner.width, page_window, ARROW_WIDTH);
    let constraints: Vec<Constraint> = (0..page_window.max(1))
        .map(|_| Constraint::Length(width))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(cards_area);

    for (slot, ride) in visible.iter().enumerate() {
        let Some(slot_area) = slots.get(slot).copied() else {
            break;
        };
        let category_name = model
            .catalog
            .category(&ride.category)
            .map(|c| c.name.as_str())
            .unwrap_or(ride.category.as_str());
        let focused = focused_pane && slot == model.ui.card_cursor;
        render_card(f, slot_area, ride, category_name, focused);
        hits.push((slot_area, HitTarget::Card(slot)));
    }

    hits
}
