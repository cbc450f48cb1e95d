// SPDX-License-Identifier: MPL-2.0
//! Update logic for the application.
//!
//! Translates component messages into lightbox and filter operations. Every
//! branch is synchronous and total; there are no background tasks to spawn.

use super::{App, Message};
use crate::filter;
use crate::ui::gallery_grid;
use crate::ui::lightbox_overlay;
use iced::Task;

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Gallery(gallery_grid::Message::ItemPressed(id)) => {
            // A no-op when the item is hidden; the grid cannot normally emit
            // such a click, but the guard keeps the operation total.
            app.lightbox.open(id, &app.catalog);
        }
        Message::Gallery(gallery_grid::Message::FilterPressed(selected)) => {
            app.visible_count = filter::apply(&mut app.catalog, &selected);
            app.filter = selected;
        }
        Message::Lightbox(lightbox_overlay::Message::ClosePressed)
        | Message::Lightbox(lightbox_overlay::Message::BackdropPressed) => {
            app.lightbox.close();
        }
        Message::Lightbox(lightbox_overlay::Message::PreviousPressed) => {
            app.lightbox.show_previous();
        }
        Message::Lightbox(lightbox_overlay::Message::NextPressed) => {
            app.lightbox.show_next();
        }
    }

    Task::none()
}
