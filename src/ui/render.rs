use parktui::model::HitTarget;
use ratatui::Frame;

use super::{
    carousel, categories, dialogs, footer, header, hero, layout, legend, pagination, toast, videos,
    Hits,
};
use crate::App;

/// Main render function - draws every page section and overlay, then
/// records the clickable regions for the next mouse event
pub fn render(f: &mut Frame, app: &mut App) {
    let size = f.area();
    let layout_info = layout::calculate_layout(size);
    let model = &app.model;

    let mut hits: Hits = Vec::new();

    let header_hits = header::render_header(f, layout_info.header_area, model.ui.menu.is_some());
    let menu_anchor = header_hits
        .iter()
        .find(|(_, target)| *target == HitTarget::MenuButton)
        .map(|(rect, _)| *rect);
    hits.extend(header_hits);

    if let Some(hero_area) = layout_info.hero_area {
        hero::render_hero(f, hero_area);
    }

    hits.extend(categories::render_categories(f, layout_info.tabs_area, model));
    hits.extend(carousel::render_carousel(f, layout_info.carousel_area, model));
    hits.extend(pagination::render_pagination(f, layout_info.dots_area, model));

    if let Some(videos_area) = layout_info.videos_area {
        hits.extend(videos::render_videos(f, videos_area, model));
    }
    if let Some(footer_area) = layout_info.footer_area {
        footer::render_footer(f, footer_area);
    }

    legend::render_legend(
        f,
        layout_info.legend_area,
        model.ui.vim_mode,
        model.ui.focus,
        model.ui.preview.is_some(),
        model.ui.menu.is_some(),
    );

    // Overlays draw last so their regions win hit tests
    if let (Some(selected), Some(anchor)) = (model.ui.menu, menu_anchor) {
        hits.extend(dialogs::render_menu(f, anchor, selected));
    }

    if let Some(ride) = model.previewed_ride() {
        let category_name = model
            .catalog
            .category(&ride.category)
            .map(|c| c.name.as_str())
            .unwrap_or(ride.category.as_str());
        let image_state = app.image_state_map.get_mut(&ride.id);
        hits.extend(dialogs::render_preview(f, ride, category_name, image_state));
    }

    if let Some((message, _timestamp)) = &model.ui.toast_message {
        toast::render_toast(f, size, message);
    }

    app.model.ui.clear_hit_map();
    for (area, target) in hits {
        app.model.ui.register_hit(area, target);
    }
    app.model.ui.carousel_area = Some(layout_info.carousel_area);
}
