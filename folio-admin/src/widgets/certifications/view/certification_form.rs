use iced::widget::{column, container, row, text};
use iced::{Element, Length};

use crate::components::primitive::action_button::{
    self, ActionButtonEvent, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::text_field::{
    self, TextFieldEvent, TextFieldProps,
};
use crate::style::card_style;
use crate::theme::ThemeProps;
use crate::widgets::certifications::event::CertificationsIntent;
use crate::widgets::certifications::model::{
    CertificationField, CertificationForm,
};

const FORM_PADDING: f32 = 20.0;
const FORM_SPACING: f32 = 14.0;
const FORM_TITLE_SIZE: f32 = 18.0;

/// Props for rendering the add/edit certification form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CertificationFormProps<'a> {
    pub(crate) form: &'a CertificationForm,
    /// Stack the two-column rows on narrow windows.
    pub(crate) compact: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the certification form card.
pub(crate) fn view<'a>(
    props: CertificationFormProps<'a>,
) -> Element<'a, CertificationsIntent> {
    let palette = props.theme.theme.iced_palette();
    let draft = &props.form.draft;
    let editing = props.form.is_editing();

    let field = move |field: CertificationField,
                      label: &'a str,
                      placeholder: &'a str,
                      required: bool| {
        text_field::view(TextFieldProps {
            label,
            placeholder,
            value: draft.field(field),
            required,
            secure: false,
            theme: props.theme,
        })
        .map(move |event| match event {
            TextFieldEvent::Changed(value) => {
                CertificationsIntent::FieldChanged { field, value }
            },
            TextFieldEvent::Submitted => CertificationsIntent::Submit,
        })
    };

    let title = text(if editing {
        "Edit Certification"
    } else {
        "Add New Certification"
    })
    .size(FORM_TITLE_SIZE);

    let name = field(
        CertificationField::Title,
        "Certification Title",
        "e.g., AWS Certified Solutions Architect",
        true,
    );
    let issuer = field(
        CertificationField::Issuer,
        "Issuing Organization",
        "e.g., Amazon Web Services",
        true,
    );
    let date = field(CertificationField::Date, "Date Earned", "YYYY-MM-DD", true);
    let url = field(
        CertificationField::CredentialUrl,
        "Credential URL",
        "https://...",
        false,
    );
    let description = field(
        CertificationField::Description,
        "Description",
        "Brief description of the certification and skills demonstrated...",
        false,
    );

    let (first_row, second_row): (
        Element<'a, CertificationsIntent>,
        Element<'a, CertificationsIntent>,
    ) = if props.compact {
        (
            column![name, issuer].spacing(FORM_SPACING).into(),
            column![date, url].spacing(FORM_SPACING).into(),
        )
    } else {
        (
            row![name, issuer].spacing(FORM_SPACING).into(),
            row![date, url].spacing(FORM_SPACING).into(),
        )
    };

    let submit = action_button::view(ActionButtonProps {
        label: if editing {
            "Update Certification"
        } else {
            "Add Certification"
        },
        variant: ActionButtonVariant::Primary,
        fill_width: false,
        theme: props.theme,
    })
    .map(|ActionButtonEvent::Pressed| CertificationsIntent::Submit);
    let cancel = action_button::view(ActionButtonProps {
        label: "Cancel",
        variant: ActionButtonVariant::Outline,
        fill_width: false,
        theme: props.theme,
    })
    .map(|ActionButtonEvent::Pressed| CertificationsIntent::CancelForm);

    container(
        column![
            title,
            first_row,
            second_row,
            description,
            row![submit, cancel].spacing(8)
        ]
        .spacing(FORM_SPACING),
    )
    .padding(FORM_PADDING)
    .width(Length::Fill)
    .style(move |_| card_style(palette))
    .into()
}
