use parktui::logic::pagination::indicator_strip;
use parktui::model::{HitTarget, Model};
use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use super::Hits;

/// Render the page dots centred under the carousel; returns one region per dot
///
/// When the dots do not fit the row is left empty; the carousel status line
/// still shows the page number.
pub fn render_pagination(f: &mut Frame, area: Rect, model: &Model) -> Hits {
    let dots = model.carousel.indicators();
    // Dots are one column wide with one space between them
    let strip_width = match u16::try_from((dots.len() * 2).saturating_sub(1)) {
        Ok(width) if area.height > 0 && width <= area.width => width,
        _ => return Vec::new(),
    };

    let start = area.x + (area.width - strip_width) / 2;
    let strip_area = Rect {
        x: start,
        y: area.y,
        width: strip_width,
        height: 1,
    };
    f.render_widget(
        Paragraph::new(Line::from(Span::styled(
            indicator_strip(&dots),
            Style::default().fg(Color::Yellow),
        ))),
        strip_area,
    );

    // Every offset is below strip_width, so it fits in u16
    dots.iter()
        .map(|dot| {
            let rect = Rect {
                x: start + (dot.index * 2) as u16,
                y: area.y,
                width: 1,
                height: 1,
            };
            (rect, HitTarget::PageDot(dot.index))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::test_support::{draw, land_model};

    #[test]
    fn test_one_hit_per_dot() {
        let model = land_model(6);
        let hits = draw(80, 1, |f| render_pagination(f, f.area(), &model));

        assert_eq!(hits.len(), model.carousel.indicators().len());
        assert_eq!(hits.len(), 3);
        // Centred, two columns apart
        assert_eq!(hits[0].0.x, 37);
        assert_eq!(hits[1], (Rect::new(39, 0, 1, 1), HitTarget::PageDot(1)));
    }

    #[test]
    fn test_too_many_dots_are_skipped() {
        let model = land_model(32_772);
        assert_eq!(model.carousel.indicators().len(), 32_769);

        let hits = draw(80, 1, |f| render_pagination(f, f.area(), &model));
        assert!(hits.is_empty());
    }

    #[test]
    fn test_dots_that_just_fit() {
        // 40 dots need 79 columns
        let model = land_model(43);
        let hits = draw(79, 1, |f| render_pagination(f, f.area(), &model));
        assert_eq!(hits.len(), 40);
        assert_eq!(hits.last().map(|(r, _)| r.x), Some(78));
    }
}
