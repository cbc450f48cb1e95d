// SPDX-License-Identifier: MPL-2.0
//! Category filtering for the gallery grid.
//!
//! The filter owns the hidden markers on catalog items: applying a filter
//! walks the catalog and hides every item whose category does not match. The
//! lightbox only ever reads those markers, it never sets them.

use crate::catalog::Catalog;

/// Active category filter for the gallery.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item.
    #[default]
    All,
    /// Show only items with this category label.
    Category(String),
}

impl CategoryFilter {
    /// Parses a filter label as it appears in config or the filter bar.
    /// The literal `"all"` (case-insensitive) means no filtering.
    pub fn parse(label: &str) -> Self {
        if label.eq_ignore_ascii_case("all") {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(label.to_string())
        }
    }

    /// Checks whether an item with the given category passes this filter.
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(label) => label == category,
        }
    }

    /// Returns the display label for the filter bar.
    pub fn label(&self) -> &str {
        match self {
            CategoryFilter::All => "All",
            CategoryFilter::Category(label) => label,
        }
    }
}

/// Applies the filter to the catalog by updating hidden markers.
///
/// Returns the number of items left visible, which drives the gallery's
/// "no results" state.
pub fn apply(catalog: &mut Catalog, filter: &CategoryFilter) -> usize {
    let mut visible_count = 0;

    let decisions: Vec<_> = catalog
        .items()
        .iter()
        .map(|item| (item.id(), !filter.matches(item.category())))
        .collect();

    for (id, hidden) in decisions {
        catalog.set_hidden(id, hidden);
        if !hidden {
            visible_count += 1;
        }
    }

    visible_count
}
