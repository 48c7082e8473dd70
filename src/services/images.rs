//! Background image decoding for ride previews
//!
//! Decoding and protocol encoding can take hundreds of milliseconds for large
//! photos, so it runs off the UI loop and reports back over a channel keyed
//! by ride id.

use std::path::PathBuf;

use ratatui_image::picker::Picker;
use ratatui_image::protocol::StatefulProtocol;
use tokio::sync::mpsc::UnboundedSender;

use crate::{ImageMetadata, ImagePreviewState};

const MAX_IMAGE_BYTES: u64 = 20 * 1024 * 1024;

/// Spawn a task that decodes `path` and sends the result for `ride_id`
pub fn spawn_image_load(
    ride_id: String,
    path: PathBuf,
    picker: Picker,
    tx: UnboundedSender<(String, ImagePreviewState)>,
) {
    tokio::spawn(async move {
        tracing::debug!(ride = %ride_id, path = %path.display(), "loading ride image");
        let state = match load_image(path, picker).await {
            Ok((protocol, metadata)) => ImagePreviewState::Ready { protocol, metadata },
            Err(reason) => {
                tracing::warn!(ride = %ride_id, "image load failed: {}", reason);
                ImagePreviewState::Failed { reason }
            }
        };
        // Receiver gone means the app is shutting down
        let _ = tx.send((ride_id, state));
    });
}

async fn load_image(path: PathBuf, picker: Picker) -> Result<(StatefulProtocol, ImageMetadata), String> {
    let file_size = tokio::fs::metadata(&path)
        .await
        .map_err(|e| format!("Cannot read {}: {}", path.display(), e))?
        .len();
    if file_size > MAX_IMAGE_BYTES {
        return Err(format!("Image too large ({} bytes)", file_size));
    }

    let img = tokio::task::spawn_blocking(move || image::open(&path))
        .await
        .map_err(|e| format!("Task error: {}", e))?
        .map_err(|e| format!("Load error: {}", e))?;

    let dimensions = (img.width(), img.height());

    // Pre-downscale to roughly what a large modal can show
    let font_size = picker.font_size();
    let max_width = 120 * font_size.0 as u32;
    let max_height = 40 * font_size.1 as u32;
    let img = if img.width() > max_width || img.height() > max_height {
        tracing::debug!(
            "downscaling {}x{} to fit {}x{}",
            img.width(),
            img.height(),
            max_width,
            max_height
        );
        img.resize(max_width, max_height, image::imageops::FilterType::Triangle)
    } else {
        img
    };

    let protocol = picker.new_resize_protocol(img);
    Ok((
        protocol,
        ImageMetadata {
            dimensions: Some(dimensions),
            file_size,
        },
    ))
}
