use iced::widget::{Space, column, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::action_button::{
    self, ActionButtonEvent, ActionButtonProps, ActionButtonVariant,
};
use crate::components::primitive::text_field::{
    self, TextFieldEvent, TextFieldProps,
};
use crate::icons;
use crate::theme::ThemeProps;
use crate::widgets::login::event::LoginIntent;
use crate::widgets::login::model::LoginViewModel;

const CARD_WIDTH: f32 = 380.0;
const CARD_PADDING: f32 = 32.0;
const CARD_SPACING: f32 = 16.0;
const BRAND_ICON_SIZE: f32 = 28.0;
const TITLE_FONT_SIZE: f32 = 22.0;
const SUBTITLE_FONT_SIZE: f32 = 14.0;
const ERROR_FONT_SIZE: f32 = 13.0;

/// Props for rendering the login form.
#[derive(Debug, Clone, Copy)]
pub(crate) struct LoginFormProps<'a> {
    pub(crate) vm: LoginViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the centered sign-in card.
pub(crate) fn view<'a>(props: LoginFormProps<'a>) -> Element<'a, LoginIntent> {
    let palette = props.theme.theme.iced_palette();
    let vm = props.vm;

    let brand_icon = svg::Svg::new(svg::Handle::from_memory(icons::BRAND))
        .width(Length::Fixed(BRAND_ICON_SIZE))
        .height(Length::Fixed(BRAND_ICON_SIZE))
        .style(move |_, _| svg::Style {
            color: Some(palette.primary),
        });
    let title = text("PortfolioHub Admin").size(TITLE_FONT_SIZE);
    let header = row![brand_icon, title]
        .spacing(12)
        .align_y(alignment::Vertical::Center);

    let subtitle = text("Sign in to manage your portfolio")
        .size(SUBTITLE_FONT_SIZE)
        .style(move |_| text::Style {
            color: Some(palette.muted_foreground),
        });

    let email = text_field::view(TextFieldProps {
        label: "Email",
        placeholder: "you@example.com",
        value: vm.email,
        required: true,
        secure: false,
        theme: props.theme,
    })
    .map(|event| match event {
        TextFieldEvent::Changed(value) => LoginIntent::EmailChanged(value),
        TextFieldEvent::Submitted => LoginIntent::Submit,
    });

    let password = text_field::view(TextFieldProps {
        label: "Password",
        placeholder: "Password",
        value: vm.password,
        required: true,
        secure: true,
        theme: props.theme,
    })
    .map(|event| match event {
        TextFieldEvent::Changed(value) => LoginIntent::PasswordChanged(value),
        TextFieldEvent::Submitted => LoginIntent::Submit,
    });

    let error: Element<'a, LoginIntent> = match vm.error {
        Some(message) => text(message)
            .size(ERROR_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(palette.destructive),
            })
            .into(),
        None => Space::new().height(Length::Fixed(0.0)).into(),
    };

    let variant = if vm.can_submit {
        ActionButtonVariant::Primary
    } else {
        ActionButtonVariant::Outline
    };
    let submit = action_button::view(ActionButtonProps {
        label: "Sign In",
        variant,
        fill_width: true,
        theme: props.theme,
    })
    .map(|ActionButtonEvent::Pressed| LoginIntent::Submit);

    let card = container(
        column![header, subtitle, email, password, error, submit]
            .spacing(CARD_SPACING)
            .width(Length::Fill),
    )
    .padding(CARD_PADDING)
    .width(Length::Fixed(CARD_WIDTH))
    .style(move |_| container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.foreground),
        border: iced::Border {
            width: 1.0,
            color: palette.border,
            radius: iced::border::Radius::new(12.0),
        },
        ..Default::default()
    });

    container(card)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .into()
}
