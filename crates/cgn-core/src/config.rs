//! Site configuration loaded from an optional `config.toml`.
//!
//! Every field has a default, so an empty file (or no file) yields the
//! stock site. Command-line flags are layered on top by the binary.
//!
//! ```toml
//! [gallery]
//! page_size = 8
//! paginated_category = "estruturas"
//! close_on_overlay_click = false
//!
//! [window]
//! title = "C.G.N Construções"
//! width = 1100.0
//! height = 900.0
//!
//! [assets]
//! dir = "public"
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::catalog::{Catalog, CategoryId};
use crate::error::SiteResult;
use crate::gallery::{Gallery, GalleryPolicy, DEFAULT_PAGE_SIZE, DEFAULT_PAGINATED_CATEGORY};

const APP_NAME: &str = "cgn-site";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub gallery: GalleryConfig,
    pub window: WindowConfig,
    pub assets: AssetsConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GalleryConfig {
    pub page_size: usize,
    /// Empty string disables pagination
    pub paginated_category: String,
    pub close_on_overlay_click: bool,
}

impl Default for GalleryConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            paginated_category: DEFAULT_PAGINATED_CATEGORY.to_string(),
            close_on_overlay_click: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: f64,
    pub height: f64,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "C.G.N Construções".to_string(),
            width: 1100.0,
            height: 900.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AssetsConfig {
    /// Public asset root that image references resolve against
    pub dir: PathBuf,
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("public"),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(content: &str) -> SiteResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load from an explicit path. A missing or malformed file is an error.
    pub fn load_from_path(path: &Path) -> SiteResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Load from the per-user config dir when the file exists, defaults otherwise.
    pub fn load() -> SiteResult<Self> {
        match default_config_path() {
            Some(path) if path.exists() => {
                tracing::info!(path = %path.display(), "Loading site config");
                Self::load_from_path(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn gallery_policy(&self) -> GalleryPolicy {
        let paginated = self.gallery.paginated_category.trim();
        GalleryPolicy {
            page_size: self.gallery.page_size,
            paginated_category: (!paginated.is_empty()).then(|| CategoryId::new(paginated)),
            close_on_overlay_click: self.gallery.close_on_overlay_click,
        }
    }

    /// Build the gallery over the built-in catalog, validating the policy.
    pub fn build_gallery(&self) -> SiteResult<Gallery> {
        Gallery::new(Catalog::builtin(), self.gallery_policy())
    }
}

/// `<config dir>/cgn-site/config.toml`, if the platform has a config dir.
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|mut path| {
        path.push(APP_NAME);
        path.push(CONFIG_FILE);
        path
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SiteError;
    use tempfile::tempdir;

    #[test]
    fn test_empty_file_yields_defaults() {
        let config = SiteConfig::from_toml_str("").unwrap();
        assert_eq!(config, SiteConfig::default());
        assert_eq!(config.gallery_policy(), GalleryPolicy::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            [gallery]
            close_on_overlay_click = true

            [window]
            width = 800.0
            "#,
        )
        .unwrap();

        assert!(config.gallery.close_on_overlay_click);
        assert_eq!(config.gallery.page_size, DEFAULT_PAGE_SIZE);
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 900.0);
        assert_eq!(config.assets.dir, PathBuf::from("public"));
    }

    #[test]
    fn test_empty_paginated_category_disables_pagination() {
        let config = SiteConfig::from_toml_str("[gallery]\npaginated_category = \"\"\n").unwrap();
        assert_eq!(config.gallery_policy().paginated_category, None);
        assert!(config.build_gallery().is_ok());
    }

    #[test]
    fn test_unknown_paginated_category_is_rejected() {
        let config =
            SiteConfig::from_toml_str("[gallery]\npaginated_category = \"telhados\"\n").unwrap();
        assert!(matches!(
            config.build_gallery(),
            Err(SiteError::UnknownPaginatedCategory(_))
        ));
    }

    #[test]
    fn test_load_from_path_reads_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "[assets]\ndir = \"/srv/cgn\"\n").expect("failed to write config");

        let config = SiteConfig::load_from_path(&path).expect("config should load");
        assert_eq!(config.assets.dir, PathBuf::from("/srv/cgn"));
    }

    #[test]
    fn test_load_from_path_reports_invalid_toml() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = temp_dir.path().join("config.toml");
        fs::write(&path, "not = valid = toml").expect("failed to write config");

        assert!(matches!(
            SiteConfig::load_from_path(&path),
            Err(SiteError::Config(_))
        ));
    }

    #[test]
    fn test_load_from_missing_path_is_io_error() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let result = SiteConfig::load_from_path(&temp_dir.path().join("absent.toml"));
        assert!(matches!(result, Err(SiteError::Io(_))));
    }
}
