use iced::widget::{
    Column, Space, column, container, mouse_area, opaque, row, scrollable,
    text,
};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::menu_item::{
    self, MenuItemEvent, MenuItemProps,
};
use crate::icons;
use crate::theme::ThemeProps;
use crate::widgets::shell::event::ShellEvent;
use crate::widgets::shell::model::ShellViewModel;

const PANEL_WIDTH: f32 = 288.0;
const PANEL_PADDING: f32 = 16.0;
const SECTION_FONT_SIZE: f32 = 11.0;
const CLOSE_SIZE: f32 = 32.0;
const CLOSE_ICON_SIZE: f32 = 16.0;

/// Props for rendering the mobile navigation overlay.
#[derive(Debug, Clone)]
pub(crate) struct MobileNavProps<'a> {
    pub(crate) vm: ShellViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the slide-in navigation drawer over a dimmed backdrop.
///
/// Clicking the backdrop closes the drawer.
pub(crate) fn view<'a>(props: MobileNavProps<'a>) -> Element<'a, ShellEvent> {
    let palette = props.theme.theme.iced_palette();
    let vm = &props.vm;

    let close = icon_button::view(IconButtonProps {
        icon: icons::CLOSE,
        theme: props.theme,
        size: CLOSE_SIZE,
        icon_size: CLOSE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|IconButtonEvent::Pressed| ShellEvent::CloseMobileNav);

    let header = row![
        text("PortfolioHub").size(18).width(Length::Fill),
        close,
    ]
    .align_y(alignment::Vertical::Center);

    let identity = column![
        text(vm.display_name().to_string()).size(14),
        text("Admin").size(12).style(move |_| text::Style {
            color: Some(palette.muted_foreground),
        }),
    ]
    .spacing(2);

    let mut entries = Column::new().spacing(4).width(Length::Fill);
    for (section, items) in vm.sections.iter().copied() {
        let heading = text(section.title().to_uppercase())
            .size(SECTION_FONT_SIZE)
            .style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            });
        entries = entries.push(container(heading).padding([8.0, 12.0]));

        for item in items {
            let id = item.id();
            entries = entries.push(
                menu_item::view(MenuItemProps {
                    label: item.label(),
                    icon: Some(icons::nav_icon(item.icon())),
                    active: vm.is_active(item),
                    destructive: false,
                    theme: props.theme,
                })
                .map(move |MenuItemEvent::Pressed| {
                    ShellEvent::MobileItemSelected { id: id.to_string() }
                }),
            );
        }
    }

    let logout = menu_item::view(MenuItemProps {
        label: "Logout",
        icon: Some(icons::LOG_OUT),
        active: false,
        destructive: true,
        theme: props.theme,
    })
    .map(|MenuItemEvent::Pressed| ShellEvent::Logout);

    let drawer = container(
        column![
            header,
            identity,
            scrollable(entries).height(Length::Fill),
            logout,
        ]
        .spacing(PANEL_PADDING),
    )
    .padding(PANEL_PADDING)
    .width(Length::Fixed(PANEL_WIDTH))
    .height(Length::Fill)
    .style(move |_| container::Style {
        background: Some(palette.card.into()),
        text_color: Some(palette.foreground),
        ..Default::default()
    });

    let backdrop = mouse_area(
        container(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(move |_| container::Style {
                background: Some(palette.overlay.into()),
                ..Default::default()
            }),
    )
    .on_press(ShellEvent::CloseMobileNav);

    opaque(row![opaque(drawer), backdrop].height(Length::Fill))
}
