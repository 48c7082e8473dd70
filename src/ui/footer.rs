use chrono::Datelike;
use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const TAGLINE: &str = "Experience the Ultimate Thrill at India's Premier Amusement Parks!";
const LOCATIONS: [&str; 4] = ["Bengaluru", "Kochi", "Hyderabad", "Bhubaneswar"];

/// Tagline, then locations with the copyright line
fn footer_lines(year: i32) -> Vec<Line<'static>> {
    let tagline = Line::from(Span::styled(
        TAGLINE,
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
    ));

    let mut spans = vec![Span::styled("📍 ", Style::default().fg(Color::Yellow))];
    for (i, location) in LOCATIONS.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" · ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*location, Style::default().fg(Color::White)));
    }
    spans.push(Span::styled(
        format!("    © {} Wonderla. All rights reserved.", year),
        Style::default().fg(Color::Gray),
    ));

    vec![tagline, Line::from(spans)]
}

pub fn render_footer(f: &mut Frame, area: Rect) {
    let footer = Paragraph::new(footer_lines(chrono::Local::now().year()))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
    f.render_widget(footer, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(line: &Line) -> String {
        line.spans.iter().map(|span| span.content.as_ref()).collect()
    }

    #[test]
    fn test_footer_has_tagline_locations_and_year() {
        let lines = footer_lines(2031);
        assert_eq!(lines.len(), 2);
        assert_eq!(text(&lines[0]), TAGLINE);

        let second = text(&lines[1]);
        for location in LOCATIONS {
            assert!(second.contains(location), "got: {}", second);
        }
        assert!(second.contains("© 2031"), "got: {}", second);
    }

    #[test]
    fn test_footer_renders_tagline() {
        let (_, rows) = crate::ui::test_support::draw_with_text(100, 3, |f| {
            render_footer(f, f.area());
            Vec::new()
        });
        assert!(rows[1].contains("Experience the Ultimate Thrill"), "screen: {:#?}", rows);
    }
}
