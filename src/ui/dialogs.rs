use parktui::catalog::Ride;
use parktui::logic::formatting::truncate_to_width;
use parktui::model::{HitTarget, MENU_ENTRIES};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph, Wrap},
    Frame,
};
use ratatui_image::StatefulImage;

use super::{layout::centered_rect, Hits};
use crate::ImagePreviewState;

const MENU_WIDTH: u16 = 52;

/// Render the header dropdown under the menu button; returns one region per entry
pub fn render_menu(f: &mut Frame, anchor: Rect, selected: usize) -> Hits {
    let area = f.area();
    let width = MENU_WIDTH.min(area.width);
    let height = (MENU_ENTRIES.len() as u16 * 2 + 2).min(area.height.saturating_sub(anchor.y));
    let menu_area = Rect {
        x: (anchor.x + anchor.width).saturating_sub(width).max(area.x),
        y: anchor.y + 1,
        width,
        height,
    };

    let inner_width = width.saturating_sub(4) as usize;
    let items: Vec<ListItem> = MENU_ENTRIES
        .iter()
        .map(|entry| {
            ListItem::new(vec![
                Line::from(Span::styled(entry.title, Style::default().add_modifier(Modifier::BOLD))),
                Line::from(Span::styled(
                    truncate_to_width(entry.subtitle, inner_width),
                    Style::default().fg(Color::Gray),
                )),
            ])
        })
        .collect();

    let menu = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Yellow)),
        )
        .highlight_style(Style::default().bg(Color::DarkGray))
        .highlight_symbol("► ");

    let mut state = ListState::default();
    state.select(Some(selected));
    f.render_widget(Clear, menu_area);
    f.render_stateful_widget(menu, menu_area, &mut state);

    let inner = Block::default().borders(Borders::ALL).inner(menu_area);
    (0..MENU_ENTRIES.len())
        .map(|i| {
            let rect = Rect {
                x: inner.x,
                y: inner.y + (i as u16) * 2,
                width: inner.width,
                height: 2,
            }
            .intersection(inner);
            (rect, HitTarget::MenuEntry(i))
        })
        .collect()
}

fn format_size(bytes: u64) -> String {
    if bytes >= 1024 * 1024 {
        format!("{:.1} MB", bytes as f64 / (1024.0 * 1024.0))
    } else {
        format!("{:.1} KB", bytes as f64 / 1024.0)
    }
}

/// Render the image pane of the preview
fn render_image(f: &mut Frame, area: Rect, state: Option<&mut ImagePreviewState>) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let message = match state {
        Some(ImagePreviewState::Ready { protocol, metadata }) => {
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(1)])
                .split(inner);
            f.render_stateful_widget(StatefulImage::default(), chunks[0], protocol);

            let dims = metadata
                .dimensions
                .map(|(w, h)| format!("{}×{}", w, h))
                .unwrap_or_else(|| "?".to_string());
            let caption = format!("{} · {}", dims, format_size(metadata.file_size));
            f.render_widget(
                Paragraph::new(Span::styled(caption, Style::default().fg(Color::DarkGray)))
                    .alignment(Alignment::Center),
                chunks[1],
            );
            return;
        }
        Some(ImagePreviewState::Loading) => "Loading image…".to_string(),
        Some(ImagePreviewState::Failed { reason }) => reason.clone(),
        None => "No image available".to_string(),
    };

    let pad = inner.height.saturating_sub(1) / 2;
    let mut lines: Vec<Line> = (0..pad).map(|_| Line::raw("")).collect();
    lines.push(Line::from(Span::styled(
        message,
        Style::default().fg(Color::Gray).add_modifier(Modifier::ITALIC),
    )));
    f.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).wrap(Wrap { trim: true }),
        inner,
    );
}

/// Render the ride preview modal; returns the body region, then the video link
pub fn render_preview(
    f: &mut Frame,
    ride: &Ride,
    category_name: &str,
    image_state: Option<&mut ImagePreviewState>,
) -> Hits {
    let area = f.area();
    let modal = centered_rect(area, area.width.saturating_mul(4) / 5, area.height.saturating_mul(4) / 5);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(Span::styled(
            format!(" {} ", ride.title),
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .title_bottom(Line::from(" Esc to close ").alignment(Alignment::Right));
    let inner = block.inner(modal);
    f.render_widget(Clear, modal);
    f.render_widget(block, modal);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(inner);
    render_image(f, columns[0], image_state);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(columns[1]);

    let details = Paragraph::new(vec![
        Line::from(Span::styled(
            format!(" {} ", category_name.to_uppercase()),
            Style::default().fg(Color::Black).bg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::raw(""),
        Line::from(Span::styled(
            format!("📍 {}", ride.location),
            Style::default().fg(Color::Cyan),
        )),
        Line::raw(""),
        Line::from(Span::raw(ride.description.clone())),
    ])
    .wrap(Wrap { trim: true })
    .block(Block::default().borders(Borders::LEFT).border_style(Style::default().fg(Color::DarkGray)));
    f.render_widget(details, rows[0]);

    let mut hits = vec![(modal, HitTarget::PreviewBody)];
    let link = rows[1];
    if ride.has_video() {
        f.render_widget(
            Paragraph::new(Span::styled(
                " ▶ Watch video (Enter) ",
                Style::default().fg(Color::Black).bg(Color::Magenta).add_modifier(Modifier::BOLD),
            )),
            link,
        );
        hits.push((link, HitTarget::PreviewVideoLink));
    } else {
        f.render_widget(
            Paragraph::new(Span::styled(" No video yet ", Style::default().fg(Color::DarkGray))),
            link,
        );
    }
    hits
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "0.5 KB");
        assert_eq!(format_size(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
