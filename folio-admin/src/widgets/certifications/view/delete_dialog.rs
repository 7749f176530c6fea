use iced::widget::{column, container, mouse_area, opaque, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::action_button::{
    self, ActionButtonEvent, ActionButtonProps, ActionButtonVariant,
};
use crate::theme::ThemeProps;
use crate::widgets::certifications::event::CertificationsIntent;
use crate::widgets::certifications::model::Certification;

const DIALOG_WIDTH: f32 = 400.0;
const DIALOG_PADDING: f32 = 24.0;

/// Props for rendering the delete confirmation dialog.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DeleteDialogProps<'a> {
    pub(crate) item: &'a Certification,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a modal asking to confirm the deletion.
pub(crate) fn view<'a>(
    props: DeleteDialogProps<'a>,
) -> Element<'a, CertificationsIntent> {
    let palette = props.theme.theme.iced_palette();

    let cancel = action_button::view(ActionButtonProps {
        label: "Cancel",
        variant: ActionButtonVariant::Outline,
        fill_width: false,
        theme: props.theme,
    })
    .map(|ActionButtonEvent::Pressed| CertificationsIntent::CancelDelete);
    let confirm = action_button::view(ActionButtonProps {
        label: "Delete",
        variant: ActionButtonVariant::Danger,
        fill_width: false,
        theme: props.theme,
    })
    .map(|ActionButtonEvent::Pressed| CertificationsIntent::ConfirmDelete);

    let dialog = container(
        column![
            text("Are you sure you want to delete this certification?")
                .size(16),
            text(props.item.title.as_str()).size(14).style(move |_| {
                text::Style {
                    color: Some(palette.muted_foreground),
                }
            }),
            row![cancel, confirm].spacing(8)
        ]
        .spacing(16),
    )
    .padding(DIALOG_PADDING)
    .width(Length::Fixed(DIALOG_WIDTH))
    .style(move |_| container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(10.0),
        },
        ..Default::default()
    });

    let backdrop = container(opaque(dialog))
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.overlay.into()),
            ..Default::default()
        });

    opaque(mouse_area(backdrop).on_press(CertificationsIntent::CancelDelete))
}
