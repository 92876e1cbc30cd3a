// SPDX-License-Identifier: MPL-2.0
//! The five section panels.
//!
//! Each panel is a pure view over [`ViewContext`] and emits [`Message`]s that
//! the application forwards to the view controller.

pub mod drawings;
pub mod home;
pub mod movies;
pub mod music;
pub mod resume;

use crate::domain::{HoverTarget, Panel, Section};
use crate::i18n::fluent::I18n;
use crate::media::AssetStore;
use crate::ui::design_tokens::{sizing, spacing, typography};
use iced::widget::{scrollable, text, Column, Container};
use iced::{alignment, Element, Length};

/// Interaction emitted by a panel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// Pointer entered a navigation icon.
    Hover(HoverTarget),
    /// Pointer left a navigation icon.
    Unhover,
    Navigate(Section),
    GoHome,
    DownloadResume,
}

/// Data needed to render a panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub assets: &'a AssetStore,
    pub hovered: HoverTarget,
    pub profile_photo: &'static str,
}

/// Renders exactly one panel.
pub fn view<'a>(panel: Panel, ctx: &ViewContext<'a>) -> Element<'a, Message> {
    match panel {
        Panel::Home => home::view(ctx),
        Panel::Movies => movies::view(ctx),
        Panel::Drawings => drawings::view(ctx),
        Panel::Resume => resume::view(ctx),
        Panel::Music => music::view(ctx),
    }
}

/// Catalog paths a panel displays, for preloading.
#[must_use]
pub fn asset_paths(panel: Panel) -> Vec<&'static str> {
    use crate::domain::catalog::{profile_photo, ALBUMS, DRAWINGS, MOVIES};
    match panel {
        Panel::Home => HoverTarget::ALL.iter().map(|t| profile_photo(*t)).collect(),
        Panel::Movies => MOVIES.iter().map(|m| m.poster).collect(),
        Panel::Drawings => DRAWINGS.iter().map(|d| d.path).collect(),
        Panel::Music => ALBUMS.iter().map(|a| a.cover).collect(),
        Panel::Resume => Vec::new(),
    }
}

/// Header block shared by the content panels: back button, title, subtitle.
fn header<'a>(i18n: &I18n, title_key: &str, subtitle: String) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::SM)
        .align_x(alignment::Horizontal::Center)
        .push(super::components::back_button::view(i18n, Message::GoHome))
        .push(text(i18n.tr(title_key)).size(typography::TITLE_LG))
        .push(text(subtitle).size(typography::BODY_LG))
        .into()
}

/// Centers `content` in a scrollable column of bounded width.
fn page<'a>(content: Column<'a, Message>) -> Element<'a, Message> {
    scrollable(
        Container::new(content.max_width(sizing::CONTENT_MAX_WIDTH).padding(spacing::XL))
            .center_x(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .into()
}
