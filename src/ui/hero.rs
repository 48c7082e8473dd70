use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the headline banner
pub fn render_hero(f: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(Span::styled(
            "WHERE EVERY RIDE",
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "IS A NEW ADVENTURE!",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            "[ EXPLORE NOW ]",
            Style::default().fg(Color::Black).bg(Color::Yellow),
        )),
    ];

    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(hero, area);
}
