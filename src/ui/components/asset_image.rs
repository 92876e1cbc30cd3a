// SPDX-License-Identifier: MPL-2.0
//! Catalog image slot.
//!
//! Shows the decoded image when the asset store has it, the item's
//! placeholder text when loading failed, and an empty frame while loading.

use crate::media::{AssetContent, AssetStore};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{image, text, Container, Image};
use iced::{alignment, ContentFit, Element, Length};

/// Image slot for `path`, sized `width` x `height`.
pub fn view<'a, Message: 'a>(
    assets: &AssetStore,
    path: &str,
    placeholder: impl Into<String>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    from_content(
        AssetContent::resolve(assets.state(path), placeholder),
        width,
        height,
    )
}

pub fn from_content<'a, Message: 'a>(
    content: AssetContent,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    match content {
        AssetContent::Image(handle) => Image::<image::Handle>::new(handle)
            .width(Length::Fixed(width))
            .height(Length::Fixed(height))
            .content_fit(ContentFit::Cover)
            .into(),
        AssetContent::Placeholder(label) => frame(
            text(label)
                .size(typography::BODY_LG)
                .align_x(alignment::Horizontal::Center)
                .into(),
            width,
            height,
        ),
        AssetContent::Loading => frame(text("…").size(typography::BODY_LG).into(), width, height),
    }
}

fn frame<'a, Message: 'a>(
    inner: Element<'a, Message>,
    width: f32,
    height: f32,
) -> Element<'a, Message> {
    Container::new(inner)
        .width(Length::Fixed(width))
        .height(Length::Fixed(height))
        .padding(spacing::XS)
        .center_x(Length::Fixed(width))
        .center_y(Length::Fixed(height))
        .style(styles::container::placeholder)
        .into()
}
