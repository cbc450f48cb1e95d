// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Keyboard input only drives the lightbox, so `App::subscription` installs
//! this listener while the lightbox is open and nothing otherwise. Keys map
//! onto the same messages the overlay controls emit.

use super::Message;
use crate::ui::lightbox_overlay;
use iced::{event, keyboard, window, Subscription};

/// Creates the keyboard subscription active while the lightbox is open.
pub fn lightbox_keys() -> Subscription<Message> {
    event::listen_with(handle_event)
}

fn handle_event(
    event: event::Event,
    _status: event::Status,
    _window: window::Id,
) -> Option<Message> {
    let event::Event::Keyboard(keyboard::Event::KeyPressed {
        key: keyboard::Key::Named(named),
        ..
    }) = event
    else {
        return None;
    };

    match named {
        keyboard::key::Named::Escape => {
            Some(Message::Lightbox(lightbox_overlay::Message::ClosePressed))
        }
        keyboard::key::Named::ArrowLeft => {
            Some(Message::Lightbox(lightbox_overlay::Message::PreviousPressed))
        }
        keyboard::key::Named::ArrowRight => {
            Some(Message::Lightbox(lightbox_overlay::Message::NextPressed))
        }
        _ => None,
    }
}
