// SPDX-License-Identifier: MPL-2.0
//! Gallery catalog module for loading and querying gallery items.
//!
//! The catalog is the single data source for the gallery: an ordered list of
//! items loaded once at startup from a TOML manifest. Components that need to
//! know which items are visible (the lightbox in particular) query the catalog
//! instead of inspecting live UI state, so their behavior stays testable
//! without a running window.

use crate::error::{Error, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Stable identity of a gallery item, assigned in manifest order.
///
/// Identity is positional, never structural: two items with identical content
/// are still distinct entries in the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ItemId(usize);

impl ItemId {
    /// Returns the item's position in the full catalog (not the visible subset).
    pub fn index(self) -> usize {
        self.0
    }
}

/// Reference to an item's image: where to load it from and its alt text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRef {
    pub source: PathBuf,
    pub alt: String,
}

/// One entry in the gallery: an image, a category label, and an optional
/// caption. The `hidden` marker is owned by the category filter; everything
/// else is immutable after loading.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryItem {
    id: ItemId,
    image: ImageRef,
    category: String,
    title: Option<String>,
    description: Option<String>,
    hidden: bool,
}

impl GalleryItem {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn image(&self) -> &ImageRef {
        &self.image
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn title(&self) -> Option<&str> {
        self.title.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }
}

/// Declarative form of a gallery item as it appears in the manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ItemSpec {
    /// Image path, resolved relative to the manifest file when loaded from disk.
    pub image: PathBuf,
    /// Alt text for the image.
    #[serde(default)]
    pub alt: String,
    /// Category label consumed by the filter.
    pub category: String,
    /// Optional caption title.
    #[serde(default)]
    pub title: Option<String>,
    /// Optional caption description.
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Manifest {
    #[serde(default, rename = "item")]
    items: Vec<ItemSpec>,
}

/// Ordered collection of gallery items with stable identities.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    items: Vec<GalleryItem>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a catalog from in-memory item specs, preserving their order.
    pub fn from_specs(specs: impl IntoIterator<Item = ItemSpec>) -> Self {
        let items = specs
            .into_iter()
            .enumerate()
            .map(|(index, spec)| GalleryItem {
                id: ItemId(index),
                image: ImageRef {
                    source: spec.image,
                    alt: spec.alt,
                },
                category: spec.category,
                title: spec.title,
                description: spec.description,
                hidden: false,
            })
            .collect();

        Self { items }
    }

    /// Loads a catalog from a TOML manifest file.
    ///
    /// Relative image paths are resolved against the manifest's directory so
    /// the gallery can be moved around as a unit.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)?;
        let manifest: Manifest =
            toml::from_str(&content).map_err(|e| Error::Manifest(e.to_string()))?;

        let base_dir = path.parent().unwrap_or_else(|| Path::new("."));
        let specs = manifest.items.into_iter().map(|mut spec| {
            if spec.image.is_relative() {
                spec.image = base_dir.join(&spec.image);
            }
            spec
        });

        Ok(Self::from_specs(specs))
    }

    /// Returns all items in manifest order.
    pub fn items(&self) -> &[GalleryItem] {
        &self.items
    }

    /// Returns the item with the given identity, if it exists.
    pub fn get(&self, id: ItemId) -> Option<&GalleryItem> {
        self.items.get(id.0)
    }

    /// Sets the hidden marker on an item. Called by the filter; unknown
    /// identities are ignored.
    pub fn set_hidden(&mut self, id: ItemId, hidden: bool) {
        if let Some(item) = self.items.get_mut(id.0) {
            item.hidden = hidden;
        }
    }

    /// Returns the identities of all non-hidden items, in catalog order.
    pub fn visible_ids(&self) -> impl Iterator<Item = ItemId> + '_ {
        self.items
            .iter()
            .filter(|item| !item.hidden)
            .map(|item| item.id)
    }

    /// Returns the distinct category labels in order of first appearance,
    /// used to build the filter bar.
    pub fn categories(&self) -> Vec<&str> {
        let mut categories: Vec<&str> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category.as_str()) {
                categories.push(item.category.as_str());
            }
        }
        categories
    }

    /// Returns the total number of items in the catalog.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::tempdir;

    fn spec(category: &str, image: &str) -> ItemSpec {
        ItemSpec {
            image: PathBuf::from(image),
            alt: format!("{} design", image),
            category: category.to_string(),
            title: None,
            description: None,
        }
    }

    fn write_manifest(dir: &Path, content: &str) -> PathBuf {
        let path = dir.join("gallery.toml");
        let mut file = fs::File::create(&path).expect("failed to create manifest");
        file.write_all(content.as_bytes())
            .expect("failed to write manifest");
        path
    }

    #[test]
    fn empty_catalog_has_no_items() {
        let catalog = Catalog::new();
        assert!(catalog.is_empty());
        assert_eq!(catalog.len(), 0);
        assert_eq!(catalog.visible_ids().count(), 0);
    }

    #[test]
    fn from_specs_assigns_identities_in_order() {
        let catalog = Catalog::from_specs([spec("shirts", "a.jpg"), spec("hoodies", "b.jpg")]);
        let ids: Vec<usize> = catalog.items().iter().map(|i| i.id().index()).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn identical_content_yields_distinct_identities() {
        let catalog = Catalog::from_specs([spec("shirts", "a.jpg"), spec("shirts", "a.jpg")]);
        assert_ne!(catalog.items()[0].id(), catalog.items()[1].id());
    }

    #[test]
    fn set_hidden_removes_item_from_visible_ids() {
        let mut catalog = Catalog::from_specs([
            spec("shirts", "a.jpg"),
            spec("hoodies", "b.jpg"),
            spec("shirts", "c.jpg"),
        ]);
        let hidden_id = catalog.items()[1].id();

        catalog.set_hidden(hidden_id, true);

        let visible: Vec<ItemId> = catalog.visible_ids().collect();
        assert_eq!(visible.len(), 2);
        assert!(!visible.contains(&hidden_id));
    }

    #[test]
    fn set_hidden_is_reversible() {
        let mut catalog = Catalog::from_specs([spec("shirts", "a.jpg")]);
        let id = catalog.items()[0].id();

        catalog.set_hidden(id, true);
        assert_eq!(catalog.visible_ids().count(), 0);

        catalog.set_hidden(id, false);
        assert_eq!(catalog.visible_ids().count(), 1);
    }

    #[test]
    fn categories_are_deduplicated_in_first_appearance_order() {
        let catalog = Catalog::from_specs([
            spec("shirts", "a.jpg"),
            spec("hoodies", "b.jpg"),
            spec("shirts", "c.jpg"),
            spec("caps", "d.jpg"),
        ]);
        assert_eq!(catalog.categories(), vec!["shirts", "hoodies", "caps"]);
    }

    #[test]
    fn load_parses_manifest_with_optional_fields() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            temp_dir.path(),
            r#"
[[item]]
image = "designs/classic.jpg"
alt = "Classic white tee"
category = "shirts"
title = "Classic Tee"
description = "Screen-printed classic fit"

[[item]]
image = "designs/zip.jpg"
category = "hoodies"
"#,
        );

        let catalog = Catalog::load(&path).expect("failed to load manifest");

        assert_eq!(catalog.len(), 2);
        let first = &catalog.items()[0];
        assert_eq!(first.title(), Some("Classic Tee"));
        assert_eq!(first.description(), Some("Screen-printed classic fit"));
        assert_eq!(first.image().alt, "Classic white tee");

        let second = &catalog.items()[1];
        assert_eq!(second.title(), None);
        assert_eq!(second.description(), None);
        assert_eq!(second.image().alt, "");
    }

    #[test]
    fn load_resolves_relative_image_paths_against_manifest_dir() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(
            temp_dir.path(),
            "[[item]]\nimage = \"designs/a.jpg\"\ncategory = \"shirts\"\n",
        );

        let catalog = Catalog::load(&path).expect("failed to load manifest");

        assert_eq!(
            catalog.items()[0].image().source,
            temp_dir.path().join("designs/a.jpg")
        );
    }

    #[test]
    fn load_rejects_item_without_category() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "[[item]]\nimage = \"a.jpg\"\n");

        let err = Catalog::load(&path).unwrap_err();
        assert!(matches!(err, Error::Manifest(_)));
    }

    #[test]
    fn load_missing_file_returns_io_error() {
        let err = Catalog::load(Path::new("/nonexistent/gallery.toml")).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn load_empty_manifest_yields_empty_catalog() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let path = write_manifest(temp_dir.path(), "");

        let catalog = Catalog::load(&path).expect("failed to load manifest");
        assert!(catalog.is_empty());
    }
}
