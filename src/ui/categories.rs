use parktui::logic::formatting::{ride_count_label, truncate_to_width};
use parktui::model::{HitTarget, Model};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use super::Hits;

/// Widest a single tab gets on very wide terminals
const MAX_TAB_WIDTH: u16 = 28;

/// Render the category tabs (tab 0 is All); returns one region per tab
pub fn render_categories(f: &mut Frame, area: Rect, model: &Model) -> Hits {
    let tab_count = model.tab_count();
    let active = model.active_tab();

    // Centre the strip when there is more room than the tabs need
    let wanted = usize::from(MAX_TAB_WIDTH).saturating_mul(tab_count);
    let strip_width = u16::try_from(wanted).unwrap_or(u16::MAX).min(area.width);
    let strip = Rect {
        x: area.x + (area.width - strip_width) / 2,
        width: strip_width,
        ..area
    };

    let constraints: Vec<Constraint> = (0..tab_count)
        .map(|_| Constraint::Ratio(1, tab_count as u32))
        .collect();
    let slots = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(strip);

    let mut hits = Vec::with_capacity(tab_count);
    for (tab, slot) in slots.iter().enumerate() {
        let (label, subtitle) = if tab == 0 {
            (
                "✨ All".to_string(),
                format!("{} here", ride_count_label(model.catalog.rides.len() as u32)),
            )
        } else {
            let category = &model.catalog.categories[tab - 1];
            (
                format!("{} {}", category.icon, category.name),
                ride_count_label(category.rides),
            )
        };

        let is_active = active == Some(tab);
        let (border, text) = if is_active {
            (
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
                Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
            )
        } else {
            (Style::default().fg(Color::DarkGray), Style::default().fg(Color::White))
        };

        let inner_width = slot.width.saturating_sub(2) as usize;
        let shortcut = if tab < 10 { format!("{}", tab) } else { String::new() };
        let content = Paragraph::new(vec![
            Line::from(Span::styled(truncate_to_width(&label, inner_width), text)),
            Line::from(Span::styled(
                truncate_to_width(&subtitle, inner_width),
                Style::default().fg(Color::Gray),
            )),
        ])
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(Span::styled(shortcut, Style::default().fg(Color::DarkGray))),
        );
        f.render_widget(content, *slot);
        hits.push((*slot, HitTarget::CategoryTab(tab)));
    }

    hits
}
