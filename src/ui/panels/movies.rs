// SPDX-License-Identifier: MPL-2.0
//! Movies panel: a three-column grid of poster cards.

use super::{header, page, Message, ViewContext};
use crate::domain::catalog::{Movie, MOVIES};
use crate::ui::components::asset_image;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element};

const COLUMNS: usize = 3;

fn card<'a>(ctx: &ViewContext<'a>, movie: &Movie) -> Element<'a, Message> {
    Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(alignment::Horizontal::Center)
            .push(asset_image::view(
                ctx.assets,
                movie.poster,
                movie.placeholder(),
                sizing::POSTER_WIDTH,
                sizing::POSTER_HEIGHT,
            ))
            .push(text(movie.title).size(typography::TITLE_SM))
            .push(text(movie.year).size(typography::BODY)),
    )
    .padding(spacing::MD)
    .style(styles::container::card)
    .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let mut grid = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center);
    for chunk in MOVIES.chunks(COLUMNS) {
        let row = chunk
            .iter()
            .fold(Row::new().spacing(spacing::LG), |row, movie| {
                row.push(card(ctx, movie))
            });
        grid = grid.push(row);
    }

    page(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header(
                ctx.i18n,
                "movies-title",
                ctx.i18n.tr("movies-subtitle"),
            ))
            .push(grid),
    )
}
