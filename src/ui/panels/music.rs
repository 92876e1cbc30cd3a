// SPDX-License-Identifier: MPL-2.0
//! Music panel: numbered album list.

use super::{header, page, Message, ViewContext};
use crate::domain::catalog::{Album, ALBUMS};
use crate::i18n::fluent::I18n;
use crate::ui::components::asset_image;
use crate::ui::design_tokens::{palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container, Row};
use iced::{alignment, Element, Length, Theme};

/// Rating line, e.g. `⭐ 4.9`.
#[must_use]
pub fn rating_label(album: &Album) -> String {
    format!("⭐ {}", album.rating)
}

fn details<'a>(i18n: &I18n, album: &Album) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(text(album.title).size(typography::TITLE_SM))
        .push(text(album.artist).size(typography::BODY_LG))
        .push(text(album.genre).size(typography::BODY))
        .push(
            text(i18n.tr_with_args("album-released", &[("year", album.year)]))
                .size(typography::BODY),
        )
        .push(
            text(i18n.tr_with_args(
                "album-favorite-track",
                &[("track", album.favorite_track)],
            ))
            .size(typography::BODY),
        )
        .into()
}

fn row<'a>(ctx: &ViewContext<'a>, rank: usize, album: &Album) -> Element<'a, Message> {
    Container::new(
        Row::new()
            .spacing(spacing::LG)
            .align_y(alignment::Vertical::Center)
            .push(text(format!("{rank}")).size(typography::TITLE_LG))
            .push(asset_image::view(
                ctx.assets,
                album.cover,
                album.placeholder(),
                sizing::ALBUM_COVER,
                sizing::ALBUM_COVER,
            ))
            .push(details(ctx.i18n, album))
            .push(
                text(rating_label(album))
                    .size(typography::BODY_LG)
                    .style(|_theme: &Theme| text::Style {
                        color: Some(palette::GOLD),
                    }),
            ),
    )
    .padding(spacing::MD)
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let list = ALBUMS
        .iter()
        .enumerate()
        .fold(Column::new().spacing(spacing::MD), |column, (index, album)| {
            column.push(row(ctx, index + 1, album))
        });

    page(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header(
                ctx.i18n,
                "music-title",
                ctx.i18n.tr("music-subtitle"),
            ))
            .push(list),
    )
}
