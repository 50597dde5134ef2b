// SPDX-License-Identifier: MPL-2.0
//! One roster row: thumbnail, id, name, species, description and the
//! optional chartData panel.

use super::component::Message;
use super::state::ImageSlot;
use crate::config::THUMBNAIL_SIZE;
use crate::domain::{Animal, Species};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles::container as container_styles;
use iced::widget::{image::Image, Column, Container, Row, Space, Text};
use iced::{alignment, Element, Length};

/// Localized species name, or the raw code for unmapped species.
pub fn species_label(i18n: &I18n, species: Species) -> String {
    match species {
        Species::Dog => i18n.tr("species-dog"),
        Species::Cat => i18n.tr("species-cat"),
        Species::Other(code) => code.to_string(),
    }
}

pub fn view<'a>(
    i18n: &I18n,
    animal: &'a Animal,
    image: Option<&'a ImageSlot>,
) -> Element<'a, Message> {
    let id = animal.id.to_string();
    let id_label = Text::new(i18n.tr_with_args("roster-id-label", &[("id", id.as_str())]))
        .size(typography::CAPTION)
        .width(Length::Fixed(sizing::ID_COLUMN_WIDTH));

    let header = Row::new()
        .spacing(spacing::SM)
        .align_y(alignment::Vertical::Center)
        .push(Text::new(animal.name.as_str()).size(typography::TITLE_SM))
        .push(Text::new(species_label(i18n, animal.species)).size(typography::CAPTION));

    let mut details = Column::new()
        .spacing(spacing::XXS)
        .width(Length::Fill)
        .push(header)
        .push(Text::new(animal.description.as_deref().unwrap_or_default()).size(typography::BODY));

    if animal.has_detail_panel {
        details = details.push(detail_panel(i18n));
    }

    let content = Row::new()
        .spacing(spacing::MD)
        .align_y(alignment::Vertical::Top)
        .push(thumbnail(animal, image))
        .push(id_label)
        .push(details);

    Container::new(content)
        .width(Length::Fill)
        .padding(spacing::SM)
        .style(container_styles::row_card)
        .into()
}

fn thumbnail<'a>(animal: &'a Animal, image: Option<&'a ImageSlot>) -> Element<'a, Message> {
    match (animal.displayable_image_url(), image) {
        (None, _) => Space::new()
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .into(),
        (Some(_), Some(ImageSlot::Ready(handle))) => Image::new(handle.clone())
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .into(),
        (Some(_), _) => Container::new(Space::new())
            .width(Length::Fixed(THUMBNAIL_SIZE))
            .height(Length::Fixed(THUMBNAIL_SIZE))
            .style(container_styles::thumbnail_placeholder)
            .into(),
    }
}

fn detail_panel<'a>(i18n: &I18n) -> Element<'a, Message> {
    Container::new(Text::new(i18n.tr("roster-chart-placeholder")).size(typography::BODY_SM))
        .width(Length::Fill)
        .height(Length::Fixed(sizing::DETAIL_PANEL_HEIGHT))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(container_styles::detail_panel)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    #[test]
    fn species_labels_use_locale_or_raw_code() {
        let i18n = I18n::new(Some("en-US".into()), &Config::default());
        assert_eq!(species_label(&i18n, Species::Dog), "Dog");
        assert_eq!(species_label(&i18n, Species::Cat), "Cat");
        assert_eq!(species_label(&i18n, Species::Other(7)), "7");

        let i18n = I18n::new(Some("de".into()), &Config::default());
        assert_eq!(species_label(&i18n, Species::Cat), "Katze");
    }
}
