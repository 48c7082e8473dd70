use parktui::model::HitTarget;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Hits;

const NAV_LINKS: [&str; 6] = ["PARK", "RESORTS", "OFFERS", "RIDES", "RESTAURANTS", "EVENTS"];
const MENU_LABEL: &str = " ☰ Menu ";

/// Render the brand bar; returns the menu button region
pub fn render_header(f: &mut Frame, area: Rect, menu_open: bool) -> Hits {
    let mut spans = vec![
        Span::styled(
            " 🎡 WONDERLA ",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
    ];
    for link in NAV_LINKS {
        spans.push(Span::styled(link, Style::default().fg(Color::Gray)));
        spans.push(Span::raw("   "));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Blue)),
    );
    f.render_widget(header, area);

    let label_width = MENU_LABEL.chars().count() as u16;
    if area.width < label_width + 2 || area.height < 3 {
        return Vec::new();
    }
    let button = Rect {
        x: area.x + area.width - label_width - 1,
        y: area.y + 1,
        width: label_width,
        height: 1,
    };
    let style = if menu_open {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    };
    f.render_widget(Paragraph::new(Span::styled(MENU_LABEL, style)), button);

    vec![(button, HitTarget::MenuButton)]
}
