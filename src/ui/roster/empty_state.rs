// SPDX-License-Identifier: MPL-2.0
//! Message shown when the filtered list has no rows.

use super::component::Message;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{palette, typography};
use iced::widget::{Container, Text};
use iced::{alignment, Element, Length};

/// `has_records` tells an empty server answer apart from a filter that
/// matches nothing.
pub fn view<'a>(i18n: &I18n, has_records: bool) -> Element<'a, Message> {
    let key = if has_records {
        "roster-empty"
    } else {
        "roster-empty-server"
    };

    Container::new(
        Text::new(i18n.tr(key))
            .size(typography::BODY)
            .color(palette::GRAY_400),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .into()
}
