//! Work categories shown in the gallery.
//!
//! The catalog is built once at startup and never changes afterwards.
//! Each category owns an ordered list of image references that are
//! resolved against the asset root when rendered.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use crate::error::{SiteError, SiteResult};

/// Unique identifier for a work category (e.g. `"portoes"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CategoryId(String);

impl CategoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for CategoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for CategoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Reference to a static image, rooted at the public asset directory
/// (e.g. `"/portao1.jpg"`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageRef(String);

impl ImageRef {
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Path as authored, relative to the asset root.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Resolve against an asset root directory.
    ///
    /// Missing files are not checked here; a broken path shows up as a
    /// broken image when rendered.
    pub fn resolve(&self, asset_root: &Path) -> PathBuf {
        asset_root.join(self.0.trim_start_matches('/'))
    }
}

impl std::fmt::Display for ImageRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Build `count` sequential image references: `/{base}1.jpg` .. `/{base}{count}.jpg`.
pub fn range_images(base: &str, count: usize) -> Vec<ImageRef> {
    (1..=count)
        .map(|i| ImageRef::new(format!("/{}{}.jpg", base, i)))
        .collect()
}

/// A named group of work-sample images shown together in one modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub display_name: String,
    pub images: Vec<ImageRef>,
}

impl Category {
    pub fn new(
        id: impl Into<String>,
        display_name: impl Into<String>,
        images: Vec<ImageRef>,
    ) -> Self {
        Self {
            id: CategoryId::new(id),
            display_name: display_name.into(),
            images,
        }
    }

    pub fn total_images(&self) -> usize {
        self.images.len()
    }
}

/// Ordered, immutable list of categories with unique ids.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    categories: Vec<Category>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate ids.
    pub fn new(categories: Vec<Category>) -> SiteResult<Self> {
        let mut seen = HashSet::new();
        for category in &categories {
            if !seen.insert(category.id.as_str()) {
                return Err(SiteError::DuplicateCategory(category.id.to_string()));
            }
        }
        Ok(Self { categories })
    }

    /// The works shown on the CGN site.
    pub fn builtin() -> Self {
        Self {
            categories: vec![
                Category::new("portoes", "Portões", range_images("portao", 8)),
                Category::new("grades", "Grades", range_images("grade", 9)),
                Category::new(
                    "estruturas",
                    "Estruturas Metálicas",
                    range_images("estrutura", 45),
                ),
                Category::new("alvenaria", "Alvenaria", range_images("alvenaria", 10)),
            ],
        }
    }

    /// Look up a category; `None` when the id is unknown.
    pub fn get(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id.as_str() == id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.categories.iter()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_images() {
        let images = range_images("portao", 3);
        let paths: Vec<_> = images.iter().map(|i| i.as_str()).collect();
        assert_eq!(paths, vec!["/portao1.jpg", "/portao2.jpg", "/portao3.jpg"]);
        assert!(range_images("grade", 0).is_empty());
    }

    #[test]
    fn test_builtin_catalog() {
        let catalog = Catalog::builtin();
        assert_eq!(catalog.len(), 4);

        let counts: Vec<_> = catalog
            .iter()
            .map(|c| (c.id.as_str(), c.total_images()))
            .collect();
        assert_eq!(
            counts,
            vec![("portoes", 8), ("grades", 9), ("estruturas", 45), ("alvenaria", 10)]
        );

        let estruturas = catalog.get("estruturas").unwrap();
        assert_eq!(estruturas.display_name, "Estruturas Metálicas");
        assert_eq!(estruturas.images.last().unwrap().as_str(), "/estrutura45.jpg");
    }

    #[test]
    fn test_lookup_missing_category() {
        let catalog = Catalog::builtin();
        assert!(catalog.get("telhados").is_none());
        assert!(catalog.get("").is_none());
    }

    #[test]
    fn test_duplicate_ids_rejected() {
        let result = Catalog::new(vec![
            Category::new("grades", "Grades", range_images("grade", 2)),
            Category::new("grades", "Grades de novo", range_images("grade", 3)),
        ]);
        assert!(matches!(result, Err(SiteError::DuplicateCategory(id)) if id == "grades"));
    }

    #[test]
    fn test_image_resolve() {
        let image = ImageRef::new("/portao1.jpg");
        assert_eq!(
            image.resolve(Path::new("public")),
            PathBuf::from("public/portao1.jpg")
        );
    }
}
