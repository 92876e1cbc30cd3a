// SPDX-License-Identifier: MPL-2.0
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text};
use iced::Element;

/// "← Back to Home" pill emitting `on_press`.
pub fn view<'a, Message: Clone + 'a>(i18n: &I18n, on_press: Message) -> Element<'a, Message> {
    button(text(i18n.tr("back-to-home")).size(typography::BODY_LG))
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::back)
        .on_press(on_press)
        .into()
}
