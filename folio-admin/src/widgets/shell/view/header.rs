use iced::widget::{Space, column, container, row, text};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::icons;
use crate::theme::ThemeProps;
use crate::widgets::shell::event::ShellEvent;
use crate::widgets::shell::model::ShellViewModel;

const MOBILE_BAR_HEIGHT: f32 = 56.0;
const MENU_BUTTON_SIZE: f32 = 36.0;
const MENU_ICON_SIZE: f32 = 20.0;
const TITLE_FONT_SIZE: f32 = 24.0;
const SUBTITLE_FONT_SIZE: f32 = 14.0;

/// Props for rendering the content header.
#[derive(Debug, Clone)]
pub(crate) struct HeaderProps<'a> {
    pub(crate) vm: ShellViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the welcome header, preceded by the menu bar on mobile.
pub(crate) fn view<'a>(props: HeaderProps<'a>) -> Element<'a, ShellEvent> {
    let palette = props.theme.theme.iced_palette();

    let welcome = column![
        text(props.vm.welcome_title()).size(TITLE_FONT_SIZE),
        text(props.vm.active_item.label())
            .size(SUBTITLE_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            }),
    ]
    .spacing(4);

    if !props.vm.layout.is_mobile() {
        return welcome.into();
    }

    let menu = icon_button::view(IconButtonProps {
        icon: icons::MENU,
        theme: props.theme,
        size: MENU_BUTTON_SIZE,
        icon_size: MENU_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|IconButtonEvent::Pressed| ShellEvent::OpenMobileNav);

    let bar = container(
        row![
            menu,
            text("PortfolioHub").size(18),
            Space::new().width(Length::Fill),
        ]
        .spacing(12)
        .align_y(alignment::Vertical::Center),
    )
    .height(Length::Fixed(MOBILE_BAR_HEIGHT))
    .width(Length::Fill)
    .align_y(alignment::Vertical::Center);

    column![bar, welcome].spacing(12).into()
}
