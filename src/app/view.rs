// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The gallery grid is the base layer; while the lightbox is open its overlay
//! is stacked on top. Both layers are pure projections of application state.

use super::{App, Message};
use crate::ui::gallery_grid;
use crate::ui::lightbox_overlay;
use iced::widget::{stack, text, Column};
use iced::{Element, Length};

pub fn view(app: &App) -> Element<'_, Message> {
    let grid = gallery_grid::view(gallery_grid::ViewContext {
        catalog: &app.catalog,
        filter: &app.filter,
        columns: app.columns,
        thumbnail_height: app.thumbnail_height,
        scroll_locked: app.lightbox.scroll_locked(),
    })
    .map(Message::Gallery);

    let base: Element<'_, Message> = match &app.startup_warning {
        Some(warning) => Column::new()
            .push(text(warning.clone()).size(13))
            .push(grid)
            .width(Length::Fill)
            .height(Length::Fill)
            .into(),
        None => grid,
    };

    match app.lightbox.frame(&app.catalog) {
        Some(frame) => stack([base, lightbox_overlay::view(frame).map(Message::Lightbox)]).into(),
        None => base,
    }
}
