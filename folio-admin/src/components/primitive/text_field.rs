use iced::widget::{column, text, text_input};
use iced::{Element, Length};

use crate::theme::ThemeProps;

const LABEL_FONT_SIZE: f32 = 13.0;
const INPUT_FONT_SIZE: f32 = 14.0;
const INPUT_PADDING: f32 = 8.0;
const FIELD_SPACING: f32 = 6.0;

/// UI events emitted by a labelled text field.
#[derive(Debug, Clone)]
pub(crate) enum TextFieldEvent {
    Changed(String),
    Submitted,
}

/// Props for rendering a labelled text field.
#[derive(Debug, Clone, Copy)]
pub(crate) struct TextFieldProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) placeholder: &'a str,
    pub(crate) value: &'a str,
    pub(crate) required: bool,
    pub(crate) secure: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a label above a single-line input.
pub(crate) fn view<'a>(props: TextFieldProps<'a>) -> Element<'a, TextFieldEvent> {
    let palette = props.theme.theme.iced_palette();

    let label = if props.required {
        format!("{} *", props.label)
    } else {
        props.label.to_string()
    };
    let label = text(label)
        .size(LABEL_FONT_SIZE)
        .style(move |_| text::Style {
            color: Some(palette.foreground),
        });

    let input = text_input(props.placeholder, props.value)
        .secure(props.secure)
        .on_input(TextFieldEvent::Changed)
        .on_submit(TextFieldEvent::Submitted)
        .size(INPUT_FONT_SIZE)
        .padding(INPUT_PADDING)
        .width(Length::Fill)
        .style(move |theme, status| {
            let mut style = text_input::default(theme, status);
            style.background = palette.background.into();
            style.border.color = match status {
                text_input::Status::Focused { .. } => palette.primary,
                _ => palette.border,
            };
            style.border.radius = iced::border::Radius::new(6.0);
            style.placeholder = palette.muted_foreground;
            style.value = palette.foreground;
            style
        });

    column![label, input]
        .spacing(FIELD_SPACING)
        .width(Length::Fill)
        .into()
}
