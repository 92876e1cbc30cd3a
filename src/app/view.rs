// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Layers, bottom to top: the section panel on the backdrop, the bubble
//! burst, the toasts.

use super::Message;
use crate::controller::ViewController;
use crate::i18n::fluent::I18n;
use crate::media::AssetStore;
use crate::ui::backdrop;
use crate::ui::notifications::{self, Toast};
use crate::ui::panels::{self, ViewContext as PanelContext};
use crate::ui::widgets::BubbleBurst;
use iced::widget::{Container, Stack};
use iced::{Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub controller: &'a ViewController,
    pub assets: &'a AssetStore,
    pub notifications: &'a notifications::Manager,
}

pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let panel_ctx = PanelContext {
        i18n: ctx.i18n,
        assets: ctx.assets,
        hovered: ctx.controller.hovered_icon(),
        profile_photo: ctx.controller.profile_photo(),
    };
    let panel = panels::view(ctx.controller.visible_panel(), &panel_ctx).map(Message::Panel);

    let root = Container::new(panel)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(backdrop::root_container(ctx.controller.root_style()));

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(root);

    let burst = BubbleBurst::new(ctx.controller.overlays(), ctx.controller.now());
    if !burst.is_empty() {
        layers = layers.push(burst.into_element());
    }

    if ctx.notifications.has_notifications() {
        layers = layers.push(
            Toast::view_overlay(ctx.notifications, ctx.i18n).map(Message::Notification),
        );
    }

    layers.into()
}
