use iced::widget::{Column, Space, button, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::toasts::event::ToastsEvent;
use crate::widgets::toasts::model::{Toast, ToastKind, ToastsViewModel};

const TOAST_WIDTH: f32 = 320.0;
const TOAST_SPACING: f32 = 8.0;
const TOAST_PADDING: f32 = 12.0;
const TOAST_MARGIN: f32 = 16.0;
const TOAST_FONT_SIZE: f32 = 14.0;
const ACCENT_WIDTH: f32 = 4.0;

/// Props for rendering the toast stack.
#[derive(Debug, Clone, Copy)]
pub(crate) struct ToastStackProps<'a> {
    pub(crate) vm: ToastsViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the toast stack in the bottom-right corner.
pub(crate) fn view<'a>(props: ToastStackProps<'a>) -> Element<'a, ToastsEvent> {
    let palette = props.theme.theme.iced_palette();

    let toasts = props
        .vm
        .toasts
        .iter()
        .map(|toast| toast_card(toast, palette));
    let stack = Column::with_children(toasts)
        .spacing(TOAST_SPACING)
        .width(Length::Fixed(TOAST_WIDTH));

    container(column![Space::new().height(Length::Fill), stack])
        .width(Length::Fill)
        .height(Length::Fill)
        .padding(TOAST_MARGIN)
        .align_x(alignment::Horizontal::Right)
        .align_y(alignment::Vertical::Bottom)
        .into()
}

fn toast_card<'a>(
    toast: &'a Toast,
    palette: &'a IcedColorPalette,
) -> Element<'a, ToastsEvent> {
    let accent_color = accent_color(palette, toast.kind());

    let accent = container(Space::new())
        .width(Length::Fixed(ACCENT_WIDTH))
        .height(Length::Fixed(TOAST_FONT_SIZE * 1.5))
        .style(move |_| container::Style {
            background: Some(accent_color.into()),
            ..Default::default()
        });

    let message = text(toast.message())
        .size(TOAST_FONT_SIZE)
        .width(Length::Fill);

    let content = row![accent, message]
        .spacing(TOAST_PADDING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .on_press(ToastsEvent::Dismiss { id: toast.id() })
        .padding(TOAST_PADDING)
        .width(Length::Fill)
        .style(move |_, _| button::Style {
            background: Some(palette.card.into()),
            text_color: palette.foreground,
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                radius: iced::border::Radius::new(8.0),
            },
            ..Default::default()
        })
        .into()
}

fn accent_color(palette: &IcedColorPalette, kind: ToastKind) -> iced::Color {
    match kind {
        ToastKind::Success => palette.success,
        ToastKind::Failure => palette.destructive,
        ToastKind::Info => palette.primary,
    }
}
