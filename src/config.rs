use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::model::carousel::{CarouselSettings, CategoryFilter, WrapPolicy};

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Category selected at startup (`all` for every ride)
    pub initial_category: String,
    /// Rides visible at once in the carousel
    pub page_window: usize,
    /// Milliseconds between auto-advance ticks
    pub auto_advance_ms: u64,
    pub wrap: WrapPolicy,
    /// Replacement for the built-in catalog
    pub catalog_path: Option<PathBuf>,
    /// Directory holding ride images for the preview
    pub assets_dir: Option<PathBuf>,
    pub image_preview_enabled: bool,
    /// auto, iterm2, kitty, sixel or halfblocks
    pub image_protocol: String,
    /// Command used to open video links (e.g. xdg-open, open)
    pub open_command: Option<String>,
    pub vim_mode: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            initial_category: "land".to_string(),
            page_window: 4,
            auto_advance_ms: 5000,
            wrap: WrapPolicy::Wrap,
            catalog_path: None,
            assets_dir: None,
            image_preview_enabled: true,
            image_protocol: "auto".to_string(),
            open_command: None,
            vim_mode: false,
        }
    }
}

impl Config {
    pub fn from_yaml(text: &str) -> Result<Self> {
        // An empty file is a valid "all defaults" config
        if text.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(text).context("Failed to parse config YAML")
    }

    pub fn carousel_settings(&self) -> CarouselSettings {
        CarouselSettings {
            page_window: self.page_window,
            auto_advance_interval: Duration::from_millis(self.auto_advance_ms),
            wrap: self.wrap,
        }
    }

    pub fn initial_filter(&self) -> CategoryFilter {
        CategoryFilter::parse(&self.initial_category)
    }
}

/// Determine the config file path with fallback logic
///
/// Returns `Ok(None)` when no config file exists anywhere; the app then runs
/// on defaults. A path given on the command line must exist.
pub fn find_config_path(cli_path: Option<String>) -> Result<Option<PathBuf>> {
    if let Some(path) = cli_path {
        let p = PathBuf::from(&path);
        if p.exists() {
            return Ok(Some(p));
        }
        anyhow::bail!("Config file not found at specified path: {}", path);
    }

    // Try ~/.config/parktui/config.yaml
    if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join("parktui").join("config.yaml");
        if config_path.exists() {
            return Ok(Some(config_path));
        }
    }

    let local_config = PathBuf::from("config.yaml");
    if local_config.exists() {
        return Ok(Some(local_config));
    }

    Ok(None)
}

/// Load the config at `path`, or defaults when there is none
pub fn load(path: Option<&PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            let text = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read config {}", path.display()))?;
            Config::from_yaml(&text).with_context(|| format!("Invalid config {}", path.display()))
        }
        None => Ok(Config::default()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(Config::from_yaml("").unwrap(), Config::default());
        assert_eq!(Config::from_yaml("  \n").unwrap(), Config::default());
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_yaml("page_window: 3\nwrap: clamp\n").unwrap();
        assert_eq!(config.page_window, 3);
        assert_eq!(config.wrap, WrapPolicy::Clamp);
        assert_eq!(config.auto_advance_ms, 5000);
        assert_eq!(config.initial_category, "land");
    }

    #[test]
    fn test_carousel_settings() {
        let config = Config::from_yaml("auto_advance_ms: 4000\n").unwrap();
        let settings = config.carousel_settings();
        assert_eq!(settings.page_window, 4);
        assert_eq!(settings.auto_advance_interval, Duration::from_millis(4000));
    }

    #[test]
    fn test_initial_filter() {
        let config = Config::from_yaml("initial_category: all\n").unwrap();
        assert_eq!(config.initial_filter(), CategoryFilter::All);
        assert_eq!(
            Config::default().initial_filter(),
            CategoryFilter::Category("land".into())
        );
    }

    #[test]
    fn test_unknown_wrap_policy_is_an_error() {
        assert!(Config::from_yaml("wrap: bounce\n").is_err());
    }

    #[test]
    fn test_missing_cli_path_is_an_error() {
        let result = find_config_path(Some("/definitely/not/here/parktui.yaml".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_without_path_is_default() {
        assert_eq!(load(None).unwrap(), Config::default());
    }
}
