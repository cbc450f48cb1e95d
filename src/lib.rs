// SPDX-License-Identifier: MPL-2.0
//! `gallery_lens` is a filterable image gallery with a modal lightbox, built
//! with the Iced GUI framework.
//!
//! A TOML manifest describes the gallery items (image, category, optional
//! caption); the grid filters them by category and the lightbox provides
//! circular previous/next navigation over the currently visible subset.

pub mod app;
pub mod catalog;
pub mod config;
pub mod error;
pub mod filter;
pub mod lightbox;
pub mod ui;
