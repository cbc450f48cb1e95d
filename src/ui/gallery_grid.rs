// SPDX-License-Identifier: MPL-2.0
//! Gallery grid component: category filter bar plus thumbnail grid.
//!
//! The grid renders the catalog's non-hidden items in manifest order. It
//! emits messages only; the actual filtering and lightbox opening happen in
//! the application update loop.

use crate::catalog::{Catalog, GalleryItem, ItemId};
use crate::filter::CategoryFilter;
use iced::widget::{button, image, scrollable, text, Column, Container, Row};
use iced::{alignment, ContentFit, Element, Length};

const GRID_SPACING: f32 = 12.0;
const BAR_SPACING: f32 = 8.0;

/// Messages emitted by the gallery grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// A thumbnail was clicked.
    ItemPressed(ItemId),
    /// A filter bar button was clicked.
    FilterPressed(CategoryFilter),
}

/// Context required to render the gallery grid.
pub struct ViewContext<'a> {
    pub catalog: &'a Catalog,
    pub filter: &'a CategoryFilter,
    pub columns: u16,
    pub thumbnail_height: u16,
    /// While the lightbox is open the grid must not scroll underneath it.
    pub scroll_locked: bool,
}

/// Renders the filter bar and the grid of visible thumbnails.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    if ctx.catalog.is_empty() {
        return empty_state();
    }

    let content = Column::new()
        .spacing(GRID_SPACING)
        .padding(GRID_SPACING)
        .push(filter_bar(ctx.catalog, ctx.filter))
        .push(grid(ctx.catalog, ctx.columns, ctx.thumbnail_height));

    if ctx.scroll_locked {
        Container::new(content)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    } else {
        scrollable(content).width(Length::Fill).into()
    }
}

/// Renders the row of category filter buttons, `All` first.
fn filter_bar<'a>(catalog: &'a Catalog, active: &'a CategoryFilter) -> Element<'a, Message> {
    let mut bar = Row::new()
        .spacing(BAR_SPACING)
        .push(filter_button(CategoryFilter::All, active));

    for category in catalog.categories() {
        bar = bar.push(filter_button(
            CategoryFilter::Category(category.to_string()),
            active,
        ));
    }

    bar.into()
}

fn filter_button<'a>(
    filter: CategoryFilter,
    active: &'a CategoryFilter,
) -> Element<'a, Message> {
    let label = text(filter.label().to_string());
    let style: fn(&iced::Theme, button::Status) -> button::Style = if filter == *active {
        button::primary
    } else {
        button::secondary
    };

    button(label)
        .style(style)
        .on_press(Message::FilterPressed(filter))
        .into()
}

/// Renders visible items as rows of thumbnails.
fn grid(catalog: &Catalog, columns: u16, thumbnail_height: u16) -> Element<'_, Message> {
    let visible: Vec<&GalleryItem> = catalog
        .items()
        .iter()
        .filter(|item| !item.is_hidden())
        .collect();

    if visible.is_empty() {
        return Container::new(text("No designs in this category."))
            .width(Length::Fill)
            .padding(GRID_SPACING * 4.0)
            .align_x(alignment::Horizontal::Center)
            .into();
    }

    let columns = columns.max(1) as usize;
    let mut rows = Column::new().spacing(GRID_SPACING);

    for chunk in visible.chunks(columns) {
        let mut row = Row::new().spacing(GRID_SPACING);
        for item in chunk {
            row = row.push(thumbnail(item, thumbnail_height));
        }
        // Pad the last row so cells keep a uniform width.
        for _ in chunk.len()..columns {
            row = row.push(iced::widget::Space::new().width(Length::FillPortion(1)));
        }
        rows = rows.push(row);
    }

    rows.width(Length::Fill).into()
}

fn thumbnail(item: &GalleryItem, height: u16) -> Element<'_, Message> {
    let picture = image(image::Handle::from_path(item.image().source.clone()))
        .content_fit(ContentFit::Cover)
        .width(Length::Fill)
        .height(Length::Fixed(f32::from(height)));

    let mut cell = Column::new().spacing(BAR_SPACING / 2.0).push(picture);
    if let Some(title) = item.title() {
        cell = cell.push(text(title).size(14));
    }

    button(cell)
        .style(button::text)
        .padding(0)
        .width(Length::FillPortion(1))
        .on_press(Message::ItemPressed(item.id()))
        .into()
}

fn empty_state<'a>() -> Element<'a, Message> {
    let title = text("No gallery items loaded").size(24);
    let subtitle = text("Point gallery_lens at a gallery.toml manifest to get started.").size(14);

    let content = Column::new()
        .spacing(GRID_SPACING)
        .align_x(alignment::Horizontal::Center)
        .push(title)
        .push(subtitle);

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
