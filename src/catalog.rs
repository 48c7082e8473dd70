//! Park catalog: rides, categories and showcase videos
//!
//! The built-in catalog is embedded at compile time. A YAML file with the same
//! shape can replace it through `catalog_path` in the config.

use std::collections::HashSet;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::error::CatalogError;
use crate::model::carousel::CarouselItem;

const BUILTIN_CATALOG: &str = include_str!("../data/catalog.yaml");

/// A ride shown in the carousel
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Ride {
    pub id: String,
    pub title: String,
    pub location: String,
    pub description: String,
    /// Image file name, resolved against `assets_dir`
    #[serde(default)]
    pub image: Option<String>,
    /// Video URL; rides without one show no video link
    #[serde(default)]
    pub video: Option<String>,
    pub category: String,
}

impl Ride {
    pub fn has_video(&self) -> bool {
        self.video.as_deref().is_some_and(|v| !v.is_empty())
    }
}

impl CarouselItem for Ride {
    fn id(&self) -> &str {
        &self.id
    }

    fn category(&self) -> &str {
        &self.category
    }
}

/// A category tab
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RideCategory {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    /// Advertised ride count across all parks (not the number in this catalog)
    #[serde(default)]
    pub rides: u32,
}

/// An entry in the video showcase
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct Video {
    pub id: String,
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    #[serde(default)]
    pub description: String,
}

#[derive(Clone, Debug, Deserialize, PartialEq, Eq, Default)]
pub struct Catalog {
    #[serde(default)]
    pub categories: Vec<RideCategory>,
    #[serde(default)]
    pub rides: Vec<Ride>,
    #[serde(default)]
    pub videos: Vec<Video>,
}

impl Catalog {
    /// The catalog shipped with the binary
    pub fn builtin() -> Result<Self> {
        Self::from_yaml(BUILTIN_CATALOG).context("Built-in catalog is invalid")
    }

    /// Parse and validate a catalog from YAML text
    pub fn from_yaml(text: &str) -> Result<Self> {
        let catalog: Catalog = serde_yaml::from_str(text).context("Failed to parse catalog YAML")?;
        catalog.validate()?;
        Ok(catalog)
    }

    /// Load and validate a catalog file
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read catalog {}", path.display()))?;
        let catalog = Self::from_yaml(&text)
            .with_context(|| format!("Invalid catalog {}", path.display()))?;
        tracing::info!(
            path = %path.display(),
            rides = catalog.rides.len(),
            categories = catalog.categories.len(),
            "loaded catalog"
        );
        Ok(catalog)
    }

    /// Check id uniqueness and reserved names
    ///
    /// Rides may reference categories that are not listed; they only show
    /// up under the "All" tab.
    pub fn validate(&self) -> Result<(), CatalogError> {
        let mut category_ids = HashSet::new();
        for category in &self.categories {
            if category.id.is_empty() {
                return Err(CatalogError::EmptyCategoryId);
            }
            if category.id.eq_ignore_ascii_case("all") {
                return Err(CatalogError::ReservedCategoryId);
            }
            if !category_ids.insert(category.id.as_str()) {
                return Err(CatalogError::DuplicateCategoryId(category.id.clone()));
            }
        }

        let mut ride_ids = HashSet::new();
        for ride in &self.rides {
            if !ride_ids.insert(ride.id.as_str()) {
                return Err(CatalogError::DuplicateRideId(ride.id.clone()));
            }
        }

        Ok(())
    }

    pub fn ride(&self, id: &str) -> Option<&Ride> {
        self.rides.iter().find(|r| r.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&RideCategory> {
        self.categories.iter().find(|c| c.id == id)
    }

    /// Number of rides in this catalog tagged with `category_id`
    pub fn rides_in(&self, category_id: &str) -> usize {
        self.rides.iter().filter(|r| r.category == category_id).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalog_loads() {
        let catalog = Catalog::builtin().unwrap();
        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.rides.len(), 8);
        assert_eq!(catalog.videos.len(), 5);
        assert_eq!(catalog.rides_in("land"), 5);
        assert_eq!(catalog.rides_in("water"), 2);
        assert_eq!(catalog.rides_in("kids"), 1);
    }

    #[test]
    fn test_has_video() {
        let catalog = Catalog::builtin().unwrap();
        assert!(catalog.ride("1").unwrap().has_video());
        assert!(!catalog.ride("5").unwrap().has_video());
    }

    #[test]
    fn test_duplicate_ride_rejected() {
        let yaml = r#"
rides:
  - { id: "1", title: A, location: X, description: d, category: land }
  - { id: "1", title: B, location: Y, description: d, category: land }
"#;
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.validate(), Err(CatalogError::DuplicateRideId("1".into())));
        assert!(Catalog::from_yaml(yaml).is_err());
    }

    #[test]
    fn test_reserved_category_rejected() {
        let yaml = "categories:\n  - { id: All, name: Everything }\n";
        let catalog: Catalog = serde_yaml::from_str(yaml).unwrap();
        assert_eq!(catalog.validate(), Err(CatalogError::ReservedCategoryId));
    }

    #[test]
    fn test_empty_and_duplicate_category_rejected() {
        let empty: Catalog = serde_yaml::from_str("categories:\n  - { id: '', name: X }\n").unwrap();
        assert_eq!(empty.validate(), Err(CatalogError::EmptyCategoryId));

        let dup: Catalog =
            serde_yaml::from_str("categories:\n  - { id: land, name: A }\n  - { id: land, name: B }\n").unwrap();
        assert_eq!(dup.validate(), Err(CatalogError::DuplicateCategoryId("land".into())));
    }

    #[test]
    fn test_missing_sections_default_to_empty() {
        let catalog = Catalog::from_yaml("{}").unwrap();
        assert!(catalog.rides.is_empty());
        assert!(catalog.categories.is_empty());
        assert!(catalog.videos.is_empty());
    }
}
