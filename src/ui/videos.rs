use parktui::logic::formatting::truncate_to_width;
use parktui::model::{FocusPane, HitTarget, Model};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use super::Hits;

/// Render the video showcase list; returns one region per visible row
pub fn render_videos(f: &mut Frame, area: Rect, model: &Model) -> Hits {
    let focused = model.ui.focus == FocusPane::Videos;
    let videos = &model.catalog.videos;
    let row_width = area.width.saturating_sub(4) as usize;

    let items: Vec<ListItem> = videos
        .iter()
        .map(|video| {
            let text = format!("▶ {} · {}", video.title, video.description);
            ListItem::new(Line::from(Span::raw(truncate_to_width(&text, row_width))))
        })
        .collect();

    let title = if focused {
        " RIDE VIDEOS (Enter to watch) "
    } else {
        " RIDE VIDEOS "
    };
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(if focused {
                    Style::default().fg(Color::Yellow)
                } else {
                    Style::default().fg(Color::DarkGray)
                })
                .title(Span::styled(title, Style::default().add_modifier(Modifier::BOLD))),
        )
        .highlight_style(if focused {
            Style::default().bg(Color::DarkGray).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        })
        .highlight_symbol("► ");

    let mut state = ListState::default();
    if !videos.is_empty() {
        state.select(Some(model.ui.video_cursor.min(videos.len() - 1)));
    }
    f.render_stateful_widget(list, area, &mut state);

    // Rows below the top border, shifted by whatever the list scrolled past
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let offset = state.offset();
    (0..inner.height as usize)
        .map(|row| offset + row)
        .take_while(|&index| index < videos.len())
        .map(|index| {
            let rect = Rect {
                x: inner.x,
                y: inner.y + (index - offset) as u16,
                width: inner.width,
                height: 1,
            };
            (rect, HitTarget::Video(index))
        })
        .collect()
}
