// SPDX-License-Identifier: MPL-2.0
//! Filter buttons above the roster.
//!
//! Two rows: sex filters on the first, species filters on the second. Both
//! rows start with a "show all" button that clears the filter. Every button
//! shows how many records it would display.

use super::component::Message;
use crate::domain::{FilterCounts, FilterTag};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles::button as button_styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment, Element, Length};

/// Tags of the first row, left to right.
pub const SEX_ROW: [FilterTag; 3] = [FilterTag::All, FilterTag::Female, FilterTag::Male];

/// Tags of the second row, left to right.
pub const SPECIES_ROW: [FilterTag; 3] = [FilterTag::All, FilterTag::Dog, FilterTag::Cat];

pub fn label_key(tag: FilterTag) -> &'static str {
    match tag {
        FilterTag::All => "filter-show-all",
        FilterTag::Female => "filter-show-female",
        FilterTag::Male => "filter-show-male",
        FilterTag::Dog => "filter-show-dog",
        FilterTag::Cat => "filter-show-cat",
    }
}

pub fn view<'a>(i18n: &I18n, active: FilterTag, counts: FilterCounts) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XS)
        .width(Length::Fill)
        .push(button_row(i18n, &SEX_ROW, active, counts))
        .push(button_row(i18n, &SPECIES_ROW, active, counts))
        .into()
}

fn button_row<'a>(
    i18n: &I18n,
    tags: &[FilterTag],
    active: FilterTag,
    counts: FilterCounts,
) -> Element<'a, Message> {
    tags.iter()
        .fold(
            Row::new()
                .spacing(spacing::XS)
                .align_y(alignment::Vertical::Center),
            |row, &tag| row.push(filter_button(i18n, tag, active, counts)),
        )
        .into()
}

fn filter_button<'a>(
    i18n: &I18n,
    tag: FilterTag,
    active: FilterTag,
    counts: FilterCounts,
) -> Element<'a, Message> {
    let label = i18n.tr(label_key(tag));
    let count = counts.get(tag).to_string();
    let text = i18n.tr_with_args(
        "filter-button-count",
        &[("label", label.as_str()), ("count", count.as_str())],
    );

    let style = if tag == active {
        button_styles::selected
    } else {
        button_styles::unselected
    };

    button(Text::new(text).size(typography::BODY_SM))
        .padding([spacing::XXS, spacing::SM])
        .style(style)
        .on_press(Message::FilterSelected(tag))
        .into()
}
