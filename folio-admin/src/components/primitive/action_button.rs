use iced::widget::button::Status as ButtonStatus;
use iced::widget::{button, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const ACTION_BUTTON_HEIGHT: f32 = 36.0;
const ACTION_BUTTON_FONT_SIZE: f32 = 14.0;
const ACTION_BUTTON_PADDING: f32 = 14.0;

/// UI events emitted by an action button.
#[derive(Debug, Clone)]
pub(crate) enum ActionButtonEvent {
    Pressed,
}

/// Visual variants for an action button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ActionButtonVariant {
    Primary,
    Outline,
    Danger,
}

/// Props for rendering a labelled action button.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ActionButtonProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) variant: ActionButtonVariant,
    pub(crate) fill_width: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a text button used by forms and dialogs.
pub(crate) fn view<'a>(
    props: ActionButtonProps<'a>,
) -> Element<'a, ActionButtonEvent> {
    let palette = props.theme.theme.iced_palette();
    let variant = props.variant;
    let width = if props.fill_width {
        Length::Fill
    } else {
        Length::Shrink
    };

    let label = text(props.label)
        .size(ACTION_BUTTON_FONT_SIZE)
        .width(width)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center);

    button(label)
        .padding([0.0, ACTION_BUTTON_PADDING])
        .width(width)
        .height(Length::Fixed(ACTION_BUTTON_HEIGHT))
        .style(move |_, status| action_button_style(palette, variant, status))
        .on_press(ActionButtonEvent::Pressed)
        .into()
}

fn action_button_style(
    palette: &IcedColorPalette,
    variant: ActionButtonVariant,
    status: ButtonStatus,
) -> button::Style {
    let hovered = matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let (background, text_color, border_color) = match variant {
        ActionButtonVariant::Primary => {
            let mut background = palette.primary;
            if hovered {
                background.a = 0.9;
            }
            (Some(background), palette.primary_foreground, palette.primary)
        },
        ActionButtonVariant::Outline => (
            hovered.then_some(palette.muted),
            palette.foreground,
            palette.border,
        ),
        ActionButtonVariant::Danger => (
            hovered.then_some(palette.muted),
            palette.destructive,
            palette.border,
        ),
    };

    button::Style {
        background: background.map(Into::into),
        text_color,
        border: iced::Border {
            width: 1.0,
            color: border_color,
            radius: iced::border::Radius::new(6.0),
        },
        ..Default::default()
    }
}
