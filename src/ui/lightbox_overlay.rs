// SPDX-License-Identifier: MPL-2.0
//! Modal overlay rendering the lightbox display region.
//!
//! The overlay is a pure projection of the lightbox frame: image, title and
//! description regions plus close and previous/next controls. Clicking the
//! darkened backdrop outside the content area closes the lightbox; clicks on
//! the content itself are consumed.

use crate::lightbox::Frame;
use iced::widget::{button, center, container, image, mouse_area, opaque, text, Column, Row};
use iced::{alignment, Color, ContentFit, Element, Length};

const CONTENT_MAX_WIDTH: f32 = 900.0;
const CONTENT_SPACING: f32 = 12.0;

/// Messages emitted by the lightbox overlay.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// The close control was clicked (or Escape pressed).
    ClosePressed,
    /// The backdrop outside the content area was clicked.
    BackdropPressed,
    /// The previous control was clicked (or ArrowLeft pressed).
    PreviousPressed,
    /// The next control was clicked (or ArrowRight pressed).
    NextPressed,
}

/// Renders the full overlay for the given frame: darkened backdrop plus the
/// centered content card.
pub fn view(frame: Frame<'_>) -> Element<'_, Message> {
    let backdrop = mouse_area(
        center(opaque(content_card(frame))).style(|_theme: &iced::Theme| container::Style {
            background: Some(
                Color {
                    a: 0.85,
                    ..Color::BLACK
                }
                .into(),
            ),
            ..container::Style::default()
        }),
    )
    .on_press(Message::BackdropPressed);

    opaque(backdrop)
}

fn content_card(frame: Frame<'_>) -> Element<'_, Message> {
    let close_row = Row::new().push(
        container(
            button(text("\u{2715}").size(18))
                .style(button::text)
                .on_press(Message::ClosePressed),
        )
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Right),
    );

    let picture = image(image::Handle::from_path(frame.image_source.to_path_buf()))
        .content_fit(ContentFit::Contain)
        .width(Length::Fill);

    let nav_row = Row::new()
        .spacing(CONTENT_SPACING)
        .align_y(alignment::Vertical::Center)
        .push(
            button(text("\u{2039}").size(28))
                .style(button::text)
                .on_press(Message::PreviousPressed),
        )
        .push(iced::widget::Space::new().width(Length::Fill))
        .push(
            button(text("\u{203A}").size(28))
                .style(button::text)
                .on_press(Message::NextPressed),
        );

    // Caption regions render the projected strings as-is; empty strings
    // simply take up no visual space.
    let title = text(frame.title).size(22);
    let description = text(frame.description).size(14);

    let card = Column::new()
        .spacing(CONTENT_SPACING)
        .push(close_row)
        .push(picture)
        .push(title)
        .push(description)
        .push(nav_row);

    container(card)
        .padding(CONTENT_SPACING)
        .max_width(CONTENT_MAX_WIDTH)
        .style(container::rounded_box)
        .into()
}
