use iced::widget::{Column, Space, column, container, row, svg, text};
use iced::{Element, Length, alignment};

use super::certification_form::{self, CertificationFormProps};
use crate::components::primitive::action_button::{
    self, ActionButtonEvent, ActionButtonProps, ActionButtonVariant,
};
use crate::icons;
use crate::style::card_style;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::certifications::event::CertificationsIntent;
use crate::widgets::certifications::model::{
    Certification, CertificationsViewModel,
};

const PANEL_SPACING: f32 = 24.0;
const LIST_SPACING: f32 = 16.0;
const CARD_PADDING: f32 = 16.0;
const TITLE_SIZE: f32 = 26.0;
const SUBTITLE_SIZE: f32 = 14.0;
const CARD_TITLE_SIZE: f32 = 17.0;
const CARD_TEXT_SIZE: f32 = 14.0;
const CARD_META_SIZE: f32 = 13.0;
const BADGE_BOX_SIZE: f32 = 48.0;
const BADGE_ICON_SIZE: f32 = 24.0;
const EMPTY_ICON_SIZE: f32 = 48.0;

/// Props for rendering the certifications panel.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CertificationsPanelProps<'a> {
    pub(crate) vm: CertificationsViewModel<'a>,
    pub(crate) compact: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the panel header, the open form and the certification list.
pub(crate) fn view<'a>(
    props: CertificationsPanelProps<'a>,
) -> Element<'a, CertificationsIntent> {
    let palette = props.theme.theme.iced_palette();

    let heading = column![
        text("Certifications").size(TITLE_SIZE),
        muted_text(
            "Manage your professional certifications and credentials",
            SUBTITLE_SIZE,
            palette,
        ),
    ]
    .spacing(4)
    .width(Length::Fill);

    let mut header = row![heading].align_y(alignment::Vertical::Center);
    if props.vm.form.is_none() {
        header = header.push(add_button(props.theme));
    }

    let mut content = column![header].spacing(PANEL_SPACING);

    if let Some(form) = props.vm.form {
        content = content.push(certification_form::view(CertificationFormProps {
            form,
            compact: props.compact,
            theme: props.theme,
        }));
    }

    let body = if !props.vm.is_loaded {
        muted_text("Loading certifications...", CARD_TEXT_SIZE, palette)
    } else if props.vm.items.is_empty() {
        empty_state(props.theme)
    } else {
        Column::with_children(
            props
                .vm
                .items
                .iter()
                .map(|item| certification_card(item, props.compact, props.theme)),
        )
        .spacing(LIST_SPACING)
        .into()
    };

    content.push(body).width(Length::Fill).into()
}

fn add_button<'a>(theme: ThemeProps<'a>) -> Element<'a, CertificationsIntent> {
    action_button::view(ActionButtonProps {
        label: "+ Add Certification",
        variant: ActionButtonVariant::Primary,
        fill_width: false,
        theme,
    })
    .map(|ActionButtonEvent::Pressed| CertificationsIntent::StartAdd)
}

fn certification_card<'a>(
    item: &'a Certification,
    compact: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, CertificationsIntent> {
    let palette = theme.theme.iced_palette();
    let id = item.id;

    let badge = container(
        svg::Svg::new(svg::Handle::from_memory(icons::nav_icon(
            folio_shell::NavIcon::Award,
        )))
        .width(Length::Fixed(BADGE_ICON_SIZE))
        .height(Length::Fixed(BADGE_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        }),
    )
    .width(Length::Fixed(BADGE_BOX_SIZE))
    .height(Length::Fixed(BADGE_BOX_SIZE))
    .align_x(alignment::Horizontal::Center)
    .align_y(alignment::Vertical::Center)
    .style(move |_| {
        let mut tint = palette.primary;
        tint.a = 0.1;
        container::Style {
            background: Some(tint.into()),
            border: iced::Border {
                radius: iced::border::Radius::new(8.0),
                ..Default::default()
            },
            ..Default::default()
        }
    });

    let title_row = row![
        text(item.title.as_str())
            .size(CARD_TITLE_SIZE)
            .width(Length::Fill),
        muted_text(item.display_date(), CARD_META_SIZE, palette),
    ]
    .spacing(8)
    .align_y(alignment::Vertical::Center);

    let mut details = column![
        title_row,
        muted_text(format!("Issued by: {}", item.issuer), CARD_TEXT_SIZE, palette),
    ]
    .spacing(6)
    .width(Length::Fill);
    if let Some(description) = item.description.as_deref() {
        details = details.push(muted_text(description, CARD_META_SIZE, palette));
    }
    if let Some(url) = item.credential_url.as_deref() {
        details = details.push(
            text(format!("Credential: {url}"))
                .size(CARD_META_SIZE)
                .style(move |_| text::Style {
                    color: Some(palette.primary),
                }),
        );
    }

    let edit = action_button::view(ActionButtonProps {
        label: "Edit",
        variant: ActionButtonVariant::Outline,
        fill_width: false,
        theme,
    })
    .map(move |ActionButtonEvent::Pressed| CertificationsIntent::Edit { id });
    let delete = action_button::view(ActionButtonProps {
        label: "Delete",
        variant: ActionButtonVariant::Danger,
        fill_width: false,
        theme,
    })
    .map(move |ActionButtonEvent::Pressed| {
        CertificationsIntent::RequestDelete { id }
    });
    let actions = row![edit, delete].spacing(8);

    let layout: Element<'a, CertificationsIntent> = if compact {
        column![row![badge, details].spacing(CARD_PADDING), actions]
            .spacing(12)
            .into()
    } else {
        row![badge, details, actions]
            .spacing(CARD_PADDING)
            .align_y(alignment::Vertical::Center)
            .into()
    };

    container(layout)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(move |_| card_style(palette))
        .into()
}

fn empty_state<'a>(theme: ThemeProps<'a>) -> Element<'a, CertificationsIntent> {
    let palette = theme.theme.iced_palette();

    let icon = svg::Svg::new(svg::Handle::from_memory(icons::nav_icon(
        folio_shell::NavIcon::Award,
    )))
    .width(Length::Fixed(EMPTY_ICON_SIZE))
    .height(Length::Fixed(EMPTY_ICON_SIZE))
    .style(move |_, _| svg::Style {
        color: Some(palette.muted_foreground),
    });

    let content = column![
        icon,
        text("No certifications yet").size(CARD_TITLE_SIZE),
        muted_text(
            "Add your first certification to showcase your expertise",
            CARD_TEXT_SIZE,
            palette,
        ),
        Space::new().height(Length::Fixed(4.0)),
        add_button(theme),
    ]
    .spacing(8)
    .align_x(alignment::Horizontal::Center);

    container(content)
        .padding(48)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .style(move |_| container::Style {
            border: iced::Border {
                width: 2.0,
                color: palette.border,
                radius: iced::border::Radius::new(8.0),
            },
            ..Default::default()
        })
        .into()
}

fn muted_text<'a>(
    content: impl Into<String>,
    size: f32,
    palette: &'a IcedColorPalette,
) -> Element<'a, CertificationsIntent> {
    text(content.into())
        .size(size)
        .style(move |_| text::Style {
            color: Some(palette.muted_foreground),
        })
        .into()
}
