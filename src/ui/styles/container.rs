// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface behind one roster row.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so rows stay readable in both light and dark modes without
/// hard-coding colors.
pub fn row_card(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.weak.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::MD.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Neutral square shown where a thumbnail is missing or still loading.
pub fn thumbnail_placeholder(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Bordered frame for the chartData placeholder.
pub fn detail_panel(theme: &Theme) -> container::Style {
    let extended = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(extended.background.base.color)),
        border: Border {
            color: palette::PRIMARY_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        text_color: Some(extended.background.base.text),
        ..Default::default()
    }
}

/// Tinted strip reporting skipped records.
pub fn warning_banner(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::BANNER,
            ..palette::WARNING_500
        })),
        border: Border {
            color: palette::WARNING_500,
            width: 1.0,
            radius: radius::SM.into(),
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banner_is_translucent_warning() {
        let style = warning_banner(&Theme::Dark);
        match style.background {
            Some(Background::Color(color)) => {
                assert!((color.a - opacity::BANNER).abs() < f32::EPSILON);
                assert_eq!(color.r, palette::WARNING_500.r);
            }
            other => panic!("unexpected background {other:?}"),
        }
    }

    #[test]
    fn detail_panel_has_visible_border() {
        let style = detail_panel(&Theme::Light);
        assert!(style.border.width > 0.0);
    }
}
