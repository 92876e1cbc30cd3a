// SPDX-License-Identifier: MPL-2.0
//! Resume panel: document card and the download button.

use super::{header, page, Message, ViewContext};
use crate::domain::catalog::RESUME;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, text, Column, Container};
use iced::{alignment, Element, Length};

pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let document = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .align_x(alignment::Horizontal::Center)
            .push(text("📄").size(typography::DISPLAY))
            .push(text(RESUME.title).size(typography::TITLE_SM))
            .push(text(RESUME.file_name).size(typography::CAPTION))
            .push(text(ctx.i18n.tr("resume-document-hint")).size(typography::BODY))
            .push(
                button(text(ctx.i18n.tr("resume-download-button")).size(typography::BODY_LG))
                    .padding([spacing::SM, spacing::LG])
                    .style(styles::button::primary)
                    .on_press(Message::DownloadResume),
            ),
    )
    .padding(spacing::XL)
    .width(Length::Fill)
    .style(styles::container::card);

    page(
        Column::new()
            .spacing(spacing::XL)
            .align_x(alignment::Horizontal::Center)
            .push(header(
                ctx.i18n,
                "resume-title",
                RESUME.subtitle.to_string(),
            ))
            .push(document),
    )
}
