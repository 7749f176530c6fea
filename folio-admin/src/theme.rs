use iced::theme::Palette;
use iced::{Color, Theme};

/// Hex color palette of the dashboard.
#[derive(Debug, Clone)]
pub(crate) struct ColorPalette {
    pub(crate) foreground: String,
    pub(crate) background: String,
    pub(crate) card: String,
    pub(crate) border: String,
    pub(crate) primary: String,
    pub(crate) primary_foreground: String,
    pub(crate) muted: String,
    pub(crate) muted_foreground: String,
    pub(crate) destructive: String,
    pub(crate) success: String,
    pub(crate) warning: String,
    pub(crate) overlay: String,
}

impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            foreground: String::from("#F8FAFC"),
            background: String::from("#020817"),
            card: String::from("#0B1222"),
            border: String::from("#1E293B"),
            primary: String::from("#3B82F6"),
            primary_foreground: String::from("#F8FAFC"),
            muted: String::from("#1E293B"),
            muted_foreground: String::from("#94A3B8"),
            destructive: String::from("#EF4444"),
            success: String::from("#22C55E"),
            warning: String::from("#EAB308"),
            overlay: String::from("#000000B3"),
        }
    }
}

#[derive(Debug, Clone)]
pub(crate) struct IcedColorPalette {
    pub(crate) foreground: Color,
    pub(crate) background: Color,
    pub(crate) card: Color,
    pub(crate) border: Color,
    pub(crate) primary: Color,
    pub(crate) primary_foreground: Color,
    pub(crate) muted: Color,
    pub(crate) muted_foreground: Color,
    pub(crate) destructive: Color,
    pub(crate) success: Color,
    pub(crate) warning: Color,
    pub(crate) overlay: Color,
}

impl From<&ColorPalette> for IcedColorPalette {
    fn from(p: &ColorPalette) -> Self {
        Self {
            foreground: parse_hex_color(&p.foreground),
            background: parse_hex_color(&p.background),
            card: parse_hex_color(&p.card),
            border: parse_hex_color(&p.border),
            primary: parse_hex_color(&p.primary),
            primary_foreground: parse_hex_color(&p.primary_foreground),
            muted: parse_hex_color(&p.muted),
            muted_foreground: parse_hex_color(&p.muted_foreground),
            destructive: parse_hex_color(&p.destructive),
            success: parse_hex_color(&p.success),
            warning: parse_hex_color(&p.warning),
            overlay: parse_hex_color(&p.overlay),
        }
    }
}

/// Parse `#RRGGBB` or `#RRGGBBAA`; malformed input yields magenta so it is
/// easy to spot on screen.
pub(crate) fn parse_hex_color(value: &str) -> Color {
    let hex = value.trim().trim_start_matches('#');
    let channel = |index: usize| {
        hex.get(index..index + 2)
            .and_then(|pair| u8::from_str_radix(pair, 16).ok())
    };

    let rgb = (channel(0), channel(2), channel(4));
    match (hex.len(), rgb) {
        (6, (Some(r), Some(g), Some(b))) => Color::from_rgb8(r, g, b),
        (8, (Some(r), Some(g), Some(b))) => {
            let alpha = channel(6).unwrap_or(u8::MAX);
            Color::from_rgba8(r, g, b, f32::from(alpha) / 255.0)
        },
        _ => Color::from_rgb8(0xFF, 0x00, 0xFF),
    }
}

/// Optional overrides for widget/component styling.
#[derive(Debug, Default, Clone, Copy)]
pub(crate) struct StyleOverrides {
    pub(crate) foreground: Option<Color>,
}

/// Global application theme.
#[derive(Debug, Clone)]
pub(crate) struct AppTheme {
    id: String,
    iced_palette: IcedColorPalette,
}

impl Default for AppTheme {
    fn default() -> Self {
        Self::from_palette(String::from("folio"), &ColorPalette::default())
    }
}

impl From<&AppTheme> for Theme {
    fn from(value: &AppTheme) -> Self {
        let palette = &value.iced_palette;
        let palette = Palette {
            background: palette.background,
            text: palette.foreground,
            primary: palette.primary,
            success: palette.success,
            danger: palette.destructive,
            warning: palette.warning,
        };

        Theme::custom(value.id.clone(), palette)
    }
}

impl AppTheme {
    pub(crate) fn from_palette(id: String, raw_palette: &ColorPalette) -> Self {
        Self {
            id,
            iced_palette: IcedColorPalette::from(raw_palette),
        }
    }

    pub(crate) fn iced_palette(&self) -> &IcedColorPalette {
        &self.iced_palette
    }
}

/// Theme props passed through App -> Widget -> Component.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ThemeProps<'a> {
    pub(crate) theme: &'a AppTheme,
    pub(crate) overrides: Option<StyleOverrides>,
}

impl<'a> ThemeProps<'a> {
    pub(crate) fn new(theme: &'a AppTheme) -> Self {
        Self {
            theme,
            overrides: None,
        }
    }
}

/// Owns the current global theme.
#[derive(Debug, Clone, Default)]
pub(crate) struct ThemeManager {
    current: AppTheme,
}

impl ThemeManager {
    pub(crate) fn current(&self) -> &AppTheme {
        &self.current
    }

    pub(crate) fn iced_theme(&self) -> Theme {
        Theme::from(&self.current)
    }
}

#[cfg(test)]
mod tests {
    use iced::Color;

    use super::parse_hex_color;

    #[test]
    fn given_rgb_hex_when_parsed_then_color_matches() {
        assert_eq!(parse_hex_color("#3B82F6"), Color::from_rgb8(0x3B, 0x82, 0xF6));
    }

    #[test]
    fn given_rgba_hex_when_parsed_then_alpha_is_applied() {
        let color = parse_hex_color("#000000B3");
        assert!((color.a - 0xB3 as f32 / 255.0).abs() < f32::EPSILON);
    }

    #[test]
    fn given_malformed_hex_when_parsed_then_fallback_is_magenta() {
        assert_eq!(parse_hex_color("#12"), Color::from_rgb8(0xFF, 0x00, 0xFF));
        assert_eq!(parse_hex_color("#GG0000"), Color::from_rgb8(0xFF, 0x00, 0xFF));
    }
}
