// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::gallery_grid;
use crate::ui::lightbox_overlay;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Gallery(gallery_grid::Message),
    Lightbox(lightbox_overlay::Message),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional gallery manifest path, overriding the configured one.
    pub manifest_path: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over the `GALLERY_LENS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
