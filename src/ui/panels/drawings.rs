// SPDX-License-Identifier: MPL-2.0
//! Drawings panel: the doodles stacked vertically.

use super::{header, page, Message, ViewContext};
use crate::domain::catalog::DRAWINGS;
use crate::ui::components::asset_image;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{text, Column, Container};
use iced::{alignment, Element};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let gallery = DRAWINGS.iter().fold(
        Column::new()
            .spacing(spacing::LG)
            .align_x(alignment::Horizontal::Center),
        |column, drawing| {
            column.push(
                Container::new(
                    Column::new()
                        .spacing(spacing::XS)
                        .align_x(alignment::Horizontal::Center)
                        .push(asset_image::view(
                            ctx.assets,
                            drawing.path,
                            drawing.placeholder(),
                            sizing::DRAWING_WIDTH,
                            sizing::DRAWING_HEIGHT,
                        ))
                        .push(text(drawing.label()).size(typography::BODY_LG)),
                )
                .padding(spacing::MD)
                .style(styles::container::card),
            )
        },
    );

    page(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header(
                ctx.i18n,
                "drawings-title",
                ctx.i18n.tr("drawings-subtitle"),
            ))
            .push(gallery),
    )
}
