use iced::widget::container;

use crate::theme::IcedColorPalette;

/// Bordered card surface used by panels.
pub(crate) fn card_style(palette: &IcedColorPalette) -> container::Style {
    container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(8.0),
        },
        ..Default::default()
    }
}

/// Root surface behind every screen.
pub(crate) fn app_background_style(
    palette: &IcedColorPalette,
) -> container::Style {
    container::Style {
        background: Some(palette.background.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use iced::Background;

    use super::{app_background_style, card_style};
    use crate::theme::AppTheme;

    #[test]
    fn given_default_theme_when_building_card_then_border_uses_palette() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = card_style(palette);

        assert_eq!(style.border.color, palette.border);
        assert_eq!(style.background, Some(Background::Color(palette.card)));
    }

    #[test]
    fn given_default_theme_when_building_background_then_text_is_foreground() {
        let theme = AppTheme::default();
        let palette = theme.iced_palette();

        let style = app_background_style(palette);

        assert_eq!(style.text_color, Some(palette.foreground));
    }
}
