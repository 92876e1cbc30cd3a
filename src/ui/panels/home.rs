// SPDX-License-Identifier: MPL-2.0
//! Home panel: owner name, profile photo and the four navigation icons.

use super::{Message, ViewContext};
use crate::domain::catalog::{OWNER_NAME, OWNER_TAGLINE};
use crate::domain::HoverTarget;
use crate::ui::components::asset_image;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{mouse_area, text, Column, Container, Row};
use iced::{alignment, Element, Length};

/// Emoji shown on a navigation icon.
#[must_use]
pub fn glyph(target: HoverTarget) -> &'static str {
    match target {
        HoverTarget::Movies => "🎬",
        HoverTarget::Drawings => "🎨",
        HoverTarget::Resume => "📄",
        HoverTarget::Music => "🎵",
        HoverTarget::Default => "",
    }
}

fn label_key(target: HoverTarget) -> &'static str {
    match target {
        HoverTarget::Movies => "nav-movies",
        HoverTarget::Drawings => "nav-drawings",
        HoverTarget::Resume => "nav-resume",
        HoverTarget::Music => "nav-music",
        HoverTarget::Default => "window-title",
    }
}

fn nav_icon<'a>(ctx: &ViewContext<'a>, target: HoverTarget) -> Element<'a, Message> {
    let tile = Container::new(
        Column::new()
            .align_x(alignment::Horizontal::Center)
            .spacing(spacing::XXS)
            .push(text(glyph(target)).size(sizing::NAV_GLYPH))
            .push(text(ctx.i18n.tr(label_key(target))).size(typography::BODY)),
    )
    .center_x(Length::Fixed(sizing::NAV_ICON))
    .center_y(Length::Fixed(sizing::NAV_ICON))
    .style(styles::container::nav_tile(ctx.hovered == target));

    let area = mouse_area(tile)
        .on_enter(Message::Hover(target))
        .on_exit(Message::Unhover);
    match target.section() {
        Some(section) => area.on_press(Message::Navigate(section)).into(),
        None => area.into(),
    }
}

fn nav_column<'a>(ctx: &ViewContext<'a>, targets: [HoverTarget; 2]) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XL)
        .push(nav_icon(ctx, targets[0]))
        .push(nav_icon(ctx, targets[1]))
        .into()
}

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let photo = Container::new(asset_image::view(
        ctx.assets,
        ctx.profile_photo,
        OWNER_NAME,
        sizing::PROFILE_PHOTO,
        sizing::PROFILE_PHOTO,
    ))
    .padding(spacing::XXS)
    .style(styles::container::profile_frame);

    let layout = Row::new()
        .spacing(spacing::XXL)
        .align_y(alignment::Vertical::Center)
        .push(nav_column(ctx, [HoverTarget::Movies, HoverTarget::Drawings]))
        .push(photo)
        .push(nav_column(ctx, [HoverTarget::Resume, HoverTarget::Music]));

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(alignment::Horizontal::Center)
        .push(text(OWNER_NAME).size(typography::DISPLAY))
        .push(text(OWNER_TAGLINE).size(typography::BODY_LG))
        .push(layout);

    Container::new(content)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .into()
}
