//! Utility functions used throughout the application

use std::path::{Path, PathBuf};

/// Get platform-specific debug log path
pub fn get_debug_log_path() -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push("parktui-debug.log");
    path
}

/// Resolve a ride image name against the assets directory
///
/// Absolute image paths are used as-is.
pub fn resolve_asset(assets_dir: &Path, image: &str) -> PathBuf {
    let image_path = Path::new(image);
    if image_path.is_absolute() {
        image_path.to_path_buf()
    } else {
        assets_dir.join(image_path)
    }
}
