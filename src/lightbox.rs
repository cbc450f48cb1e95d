// SPDX-License-Identifier: MPL-2.0
//! Lightbox state machine for focused viewing of one gallery item at a time.
//!
//! The lightbox tracks two states: closed (initial) and open over a snapshot
//! of the visible items. The snapshot is recomputed at every `open` and then
//! frozen; navigation always walks the snapshot taken by the most recent open,
//! so filter changes made while the lightbox is open do not reshuffle the
//! sequence under the user until the next open. Visual state (the overlay, the
//! scroll lock on the grid) is a pure projection of this struct, never the
//! other way around.
//!
//! Every operation is total: absent items, empty snapshots, and missing
//! caption fields are absorbed as no-ops or empty strings rather than errors.

use crate::catalog::{Catalog, GalleryItem, ItemId};
use std::path::Path;

/// Page-wide flag suppressing background scrolling while a modal view is open.
///
/// A boolean is enough while the lightbox is the only modal feature; if a
/// second modal ever shares this, it must become a counter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScrollLock {
    locked: bool,
}

impl ScrollLock {
    pub fn acquire(&mut self) {
        self.locked = true;
    }

    pub fn release(&mut self) {
        self.locked = false;
    }

    pub fn is_locked(&self) -> bool {
        self.locked
    }
}

/// What the lightbox display region shows for the current item.
///
/// Missing caption fields project as empty strings, matching the rendering
/// contract: absence never fails a frame, it just renders nothing there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame<'a> {
    pub image_source: &'a Path,
    pub image_alt: &'a str,
    pub title: &'a str,
    pub description: &'a str,
}

impl<'a> Frame<'a> {
    fn for_item(item: &'a GalleryItem) -> Self {
        Self {
            image_source: &item.image().source,
            image_alt: &item.image().alt,
            title: item.title().unwrap_or(""),
            description: item.description().unwrap_or(""),
        }
    }
}

/// Modal viewer over the currently visible subset of the gallery, with
/// circular previous/next navigation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Lightbox {
    open: bool,
    current: usize,
    /// Visible-item snapshot taken by the most recent successful `open`.
    visible: Vec<ItemId>,
    scroll_lock: ScrollLock,
}

impl Lightbox {
    /// Creates a closed lightbox.
    pub fn new() -> Self {
        Self::default()
    }

    /// Opens the lightbox on the given item.
    ///
    /// Recomputes the visible snapshot from the catalog and locates the item
    /// in it by identity. If the item is currently hidden by the filter this
    /// is a no-op: the lightbox state, including any previous snapshot, is
    /// left untouched. Returns whether the lightbox opened.
    pub fn open(&mut self, item: ItemId, catalog: &Catalog) -> bool {
        let visible: Vec<ItemId> = catalog.visible_ids().collect();
        let Some(position) = visible.iter().position(|&id| id == item) else {
            return false;
        };

        self.visible = visible;
        self.current = position;
        self.open = true;
        self.scroll_lock.acquire();
        true
    }

    /// Closes the lightbox and releases the scroll lock. Idempotent.
    pub fn close(&mut self) {
        self.open = false;
        self.scroll_lock.release();
    }

    /// Moves to the previous item, wrapping around to the last one.
    /// No-op while closed or when the snapshot is empty.
    pub fn show_previous(&mut self) {
        let len = self.visible.len();
        if !self.open || len == 0 {
            return;
        }
        self.current = (self.current + len - 1) % len;
    }

    /// Moves to the next item, wrapping around to the first one.
    /// No-op while closed or when the snapshot is empty.
    pub fn show_next(&mut self) {
        let len = self.visible.len();
        if !self.open || len == 0 {
            return;
        }
        self.current = (self.current + 1) % len;
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether grid scrolling is currently suppressed.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_lock.is_locked()
    }

    /// Index of the current item within the snapshot, while open.
    pub fn current_index(&self) -> Option<usize> {
        self.open.then_some(self.current)
    }

    /// Identity of the current item, while open.
    pub fn current_id(&self) -> Option<ItemId> {
        if !self.open {
            return None;
        }
        self.visible.get(self.current).copied()
    }

    /// Number of items in the snapshot of the most recent open.
    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    /// Projects the display region contents for the current item.
    ///
    /// Returns `None` while closed, or if the snapshot item no longer exists
    /// in the catalog (it cannot disappear in practice, the catalog is loaded
    /// once; the guard keeps the projection total regardless).
    pub fn frame<'a>(&self, catalog: &'a Catalog) -> Option<Frame<'a>> {
        let id = self.current_id()?;
        catalog.get(id).map(Frame::for_item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::ItemSpec;
    use crate::filter::{self, CategoryFilter};
    use std::path::PathBuf;

    fn spec(category: &str, image: &str, title: Option<&str>) -> ItemSpec {
        ItemSpec {
            image: PathBuf::from(image),
            alt: format!("{} photo", image),
            category: category.to_string(),
            title: title.map(String::from),
            description: title.map(|t| format!("{} description", t)),
        }
    }

    fn shirts_and_hoodies() -> Catalog {
        Catalog::from_specs([
            spec("shirts", "a.jpg", Some("A")),
            spec("hoodies", "b.jpg", Some("B")),
            spec("shirts", "c.jpg", Some("C")),
        ])
    }

    #[test]
    fn new_lightbox_is_closed() {
        let lightbox = Lightbox::new();
        assert!(!lightbox.is_open());
        assert!(!lightbox.scroll_locked());
        assert_eq!(lightbox.current_index(), None);
        assert_eq!(lightbox.current_id(), None);
    }

    #[test]
    fn open_sets_index_within_visible_subset() {
        let mut catalog = shirts_and_hoodies();
        filter::apply(&mut catalog, &CategoryFilter::Category("shirts".into()));
        let c = catalog.items()[2].id();

        let mut lightbox = Lightbox::new();
        assert!(lightbox.open(c, &catalog));

        // Visible subset is [A, C], so C sits at index 1.
        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_index(), Some(1));
        assert_eq!(lightbox.current_id(), Some(c));
        assert_eq!(lightbox.visible_len(), 2);
    }

    #[test]
    fn open_acquires_scroll_lock_and_close_releases_it() {
        let catalog = shirts_and_hoodies();
        let a = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(a, &catalog);
        assert!(lightbox.scroll_locked());

        lightbox.close();
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn open_on_hidden_item_is_a_no_op() {
        let mut catalog = shirts_and_hoodies();
        filter::apply(&mut catalog, &CategoryFilter::Category("shirts".into()));
        let b = catalog.items()[1].id();

        let mut lightbox = Lightbox::new();
        assert!(!lightbox.open(b, &catalog));

        assert!(!lightbox.is_open());
        assert_eq!(lightbox.current_index(), None);
        assert!(!lightbox.scroll_locked());
    }

    #[test]
    fn failed_open_preserves_existing_open_state() {
        let mut catalog = shirts_and_hoodies();
        let a = catalog.items()[0].id();
        let b = catalog.items()[1].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(a, &catalog);

        filter::apply(&mut catalog, &CategoryFilter::Category("shirts".into()));
        assert!(!lightbox.open(b, &catalog));

        assert!(lightbox.is_open());
        assert_eq!(lightbox.current_id(), Some(a));
        assert_eq!(lightbox.visible_len(), 3);
    }

    #[test]
    fn close_is_idempotent() {
        let catalog = shirts_and_hoodies();
        let a = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(a, &catalog);

        lightbox.close();
        let after_first = lightbox.clone();
        lightbox.close();
        assert_eq!(lightbox, after_first);
    }

    #[test]
    fn next_then_previous_is_identity() {
        let catalog = shirts_and_hoodies();
        let a = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(a, &catalog);
        let start = lightbox.current_index();

        lightbox.show_next();
        lightbox.show_previous();

        assert_eq!(lightbox.current_index(), start);
    }

    #[test]
    fn n_next_calls_cycle_back_to_start() {
        let catalog = shirts_and_hoodies();
        let b = catalog.items()[1].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(b, &catalog);
        let start = lightbox.current_index();

        for _ in 0..catalog.len() {
            lightbox.show_next();
        }

        assert_eq!(lightbox.current_index(), start);
    }

    #[test]
    fn single_item_navigation_wraps_to_itself() {
        let catalog = Catalog::from_specs([spec("shirts", "only.jpg", None)]);
        let only = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(only, &catalog);

        lightbox.show_next();
        assert_eq!(lightbox.current_index(), Some(0));
        lightbox.show_previous();
        assert_eq!(lightbox.current_index(), Some(0));
    }

    #[test]
    fn navigation_while_closed_never_mutates_state() {
        let mut lightbox = Lightbox::new();
        lightbox.show_next();
        lightbox.show_previous();

        assert_eq!(lightbox, Lightbox::new());
    }

    #[test]
    fn navigation_ignores_filter_changes_until_next_open() {
        let mut catalog = shirts_and_hoodies();
        let a = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(a, &catalog);

        // Hiding A while the lightbox is open must not affect the snapshot.
        filter::apply(&mut catalog, &CategoryFilter::Category("hoodies".into()));

        assert_eq!(lightbox.visible_len(), 3);
        lightbox.show_next();
        assert_eq!(lightbox.current_id(), Some(catalog.items()[1].id()));
        lightbox.show_next();
        assert_eq!(lightbox.current_id(), Some(catalog.items()[2].id()));
    }

    #[test]
    fn frame_projects_current_item_content() {
        let catalog = shirts_and_hoodies();
        let c = catalog.items()[2].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(c, &catalog);

        let frame = lightbox.frame(&catalog).expect("open lightbox has a frame");
        assert_eq!(frame.image_source, Path::new("c.jpg"));
        assert_eq!(frame.image_alt, "c.jpg photo");
        assert_eq!(frame.title, "C");
        assert_eq!(frame.description, "C description");
    }

    #[test]
    fn frame_renders_missing_caption_fields_as_empty_strings() {
        let catalog = Catalog::from_specs([spec("shirts", "bare.jpg", None)]);
        let id = catalog.items()[0].id();

        let mut lightbox = Lightbox::new();
        lightbox.open(id, &catalog);

        let frame = lightbox.frame(&catalog).expect("open lightbox has a frame");
        assert_eq!(frame.title, "");
        assert_eq!(frame.description, "");
    }

    #[test]
    fn frame_is_none_while_closed() {
        let catalog = shirts_and_hoodies();
        let lightbox = Lightbox::new();
        assert!(lightbox.frame(&catalog).is_none());
    }

    #[test]
    fn spec_scenario_filtered_navigation_with_wrap() {
        // items = [A(shirts), B(hoodies), C(shirts)], filter hides B.
        let mut catalog = shirts_and_hoodies();
        filter::apply(&mut catalog, &CategoryFilter::Category("shirts".into()));
        let a = catalog.items()[0].id();
        let c = catalog.items()[2].id();

        let mut lightbox = Lightbox::new();

        // open(C): visible set is [A, C], C at index 1.
        assert!(lightbox.open(c, &catalog));
        assert_eq!(lightbox.current_index(), Some(1));

        // showNext wraps to A.
        lightbox.show_next();
        assert_eq!(lightbox.current_index(), Some(0));
        assert_eq!(lightbox.current_id(), Some(a));

        // showPrevious twice: wrap to C, then back to A.
        lightbox.show_previous();
        lightbox.show_previous();
        assert_eq!(lightbox.current_index(), Some(0));
    }
}
