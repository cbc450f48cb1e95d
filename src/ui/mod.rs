// SPDX-License-Identifier: MPL-2.0
//! UI components: the gallery grid, the lightbox overlay, and theming.

pub mod gallery_grid;
pub mod lightbox_overlay;
pub mod theming;
