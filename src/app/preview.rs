//! Ride preview methods
//!
//! Opening a preview suspends the carousel timer (the modal covers it) and,
//! when an assets directory is configured, starts loading the ride image in
//! the background.

use std::time::Instant;

use parktui::model::PreviewState;
use parktui::utils;

use crate::{services, App, ImagePreviewState};

impl App {
    /// Open the preview for the ride in visible slot `slot`
    pub(crate) fn open_preview(&mut self, slot: usize, now: Instant) {
        let Some(ride) = self.model.carousel.visible_items().get(slot).map(|r| (*r).clone()) else {
            tracing::debug!(slot, "no ride in slot");
            return;
        };

        tracing::debug!(ride = %ride.id, title = %ride.title, "opening preview");
        self.model.ui.card_cursor = slot;
        self.model.ui.menu = None;
        self.model.ui.preview = Some(PreviewState {
            ride_id: ride.id.clone(),
            opened_at: now,
        });
        self.sync_hover(now);

        self.request_ride_image(&ride.id, ride.image.as_deref());
    }

    pub(crate) fn close_preview(&mut self, now: Instant) {
        if let Some(preview) = self.model.ui.preview.take() {
            tracing::debug!(
                ride = %preview.ride_id,
                open_for = ?now.saturating_duration_since(preview.opened_at),
                "closing preview"
            );
            self.sync_hover(now);
        }
    }

    /// Start decoding a ride image unless it is loaded, loading, or unavailable
    fn request_ride_image(&mut self, ride_id: &str, image: Option<&str>) {
        if self.image_state_map.contains_key(ride_id) {
            return;
        }
        let (Some(assets_dir), Some(image), Some(picker)) =
            (self.assets_dir.as_ref(), image, self.image_picker.as_ref())
        else {
            return;
        };

        let path = utils::resolve_asset(assets_dir, image);
        if !path.exists() {
            tracing::debug!(path = %path.display(), "ride image missing");
            self.image_state_map.insert(
                ride_id.to_string(),
                ImagePreviewState::Failed {
                    reason: format!("Image not found: {}", image),
                },
            );
            return;
        }

        self.image_state_map
            .insert(ride_id.to_string(), ImagePreviewState::Loading);
        services::images::spawn_image_load(
            ride_id.to_string(),
            path,
            picker.clone(),
            self.image_update_tx.clone(),
        );
    }
}
