use iced::widget::{
    Column, Space, column, container, row, scrollable, svg, text,
};
use iced::{Element, Length, alignment};

use crate::components::primitive::icon_button::{
    self, IconButtonEvent, IconButtonProps, IconButtonVariant,
};
use crate::components::primitive::nav_item::{
    self, NavItemEvent, NavItemProps,
};
use crate::icons;
use crate::theme::{IcedColorPalette, ThemeProps};
use crate::widgets::shell::event::ShellEvent;
use crate::widgets::shell::model::ShellViewModel;

const HEADER_HEIGHT: f32 = 64.0;
const BRAND_ICON_SIZE: f32 = 24.0;
const BRAND_FONT_SIZE: f32 = 18.0;
const SECTION_FONT_SIZE: f32 = 11.0;
const SECTION_SPACING: f32 = 20.0;
const ITEM_SPACING: f32 = 4.0;
const NAV_PADDING: f32 = 12.0;
const TOGGLE_SIZE: f32 = 32.0;
const TOGGLE_ICON_SIZE: f32 = 16.0;
const AVATAR_SIZE: f32 = 36.0;
const FOOTER_PADDING: f32 = 12.0;

/// Props for rendering the desktop sidebar.
#[derive(Debug, Clone)]
pub(crate) struct SidebarProps<'a> {
    pub(crate) vm: ShellViewModel<'a>,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render the fixed sidebar: brand, grouped navigation and user footer.
pub(crate) fn view<'a>(props: SidebarProps<'a>) -> Element<'a, ShellEvent> {
    let palette = props.theme.theme.iced_palette();
    let collapsed = props.vm.sidebar_collapsed;

    let header = view_header(collapsed, props.theme);
    let nav = view_navigation(&props.vm, props.theme);
    let footer = view_footer(&props.vm, props.theme);

    let content = column![
        header,
        separator(palette),
        scrollable(nav).height(Length::Fill),
        separator(palette),
        footer,
    ]
    .height(Length::Fill);

    container(content)
        .width(Length::Fixed(props.vm.sidebar_width()))
        .height(Length::Fill)
        .style(move |_| container::Style {
            background: Some(palette.card.into()),
            text_color: Some(palette.foreground),
            border: iced::Border {
                width: 1.0,
                color: palette.border,
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn view_header<'a>(
    collapsed: bool,
    theme: ThemeProps<'a>,
) -> Element<'a, ShellEvent> {
    let palette = theme.theme.iced_palette();

    let toggle = icon_button::view(IconButtonProps {
        icon: if collapsed {
            icons::CHEVRON_RIGHT
        } else {
            icons::CHEVRON_LEFT
        },
        theme,
        size: TOGGLE_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Standard,
    })
    .map(|IconButtonEvent::Pressed| ShellEvent::ToggleSidebar);

    let content: Element<'a, ShellEvent> = if collapsed {
        container(toggle)
            .width(Length::Fill)
            .align_x(alignment::Horizontal::Center)
            .into()
    } else {
        let brand_icon = svg::Svg::new(svg::Handle::from_memory(icons::BRAND))
            .width(Length::Fixed(BRAND_ICON_SIZE))
            .height(Length::Fixed(BRAND_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(palette.primary),
            });

        row![
            brand_icon,
            text("PortfolioHub").size(BRAND_FONT_SIZE).width(Length::Fill),
            toggle,
        ]
        .spacing(10)
        .align_y(alignment::Vertical::Center)
        .into()
    };

    container(content)
        .padding([0.0, NAV_PADDING + 4.0])
        .height(Length::Fixed(HEADER_HEIGHT))
        .width(Length::Fill)
        .align_y(alignment::Vertical::Center)
        .into()
}

fn view_navigation<'a>(
    vm: &ShellViewModel<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, ShellEvent> {
    let palette = theme.theme.iced_palette();
    let collapsed = vm.sidebar_collapsed;

    let mut sections = Column::new()
        .spacing(SECTION_SPACING)
        .padding(NAV_PADDING)
        .width(Length::Fill);

    for (section, items) in vm.sections.iter().copied() {
        let mut group = Column::new().spacing(ITEM_SPACING).width(Length::Fill);

        if !collapsed {
            let heading = text(section.title().to_uppercase())
                .size(SECTION_FONT_SIZE)
                .style(move |_| text::Style {
                    color: Some(palette.muted_foreground),
                });
            group = group.push(container(heading).padding([0.0, 12.0]));
        }

        for item in items {
            let id = item.id();
            group = group.push(
                nav_item::view(NavItemProps {
                    label: item.label(),
                    icon: icons::nav_icon(item.icon()),
                    active: vm.is_active(item),
                    collapsed,
                    badge: item.has_badge(),
                    theme,
                })
                .map(move |NavItemEvent::Pressed| ShellEvent::ItemSelected {
                    id: id.to_string(),
                }),
            );
        }

        sections = sections.push(group);
    }

    sections.into()
}

fn view_footer<'a>(
    vm: &ShellViewModel<'a>,
    theme: ThemeProps<'a>,
) -> Element<'a, ShellEvent> {
    let palette = theme.theme.iced_palette();

    let avatar = container(text(vm.initials()).size(13))
        .width(Length::Fixed(AVATAR_SIZE))
        .height(Length::Fixed(AVATAR_SIZE))
        .align_x(alignment::Horizontal::Center)
        .align_y(alignment::Vertical::Center)
        .style(move |_| container::Style {
            background: Some(palette.primary.into()),
            text_color: Some(palette.primary_foreground),
            border: iced::Border {
                radius: iced::border::Radius::new(AVATAR_SIZE / 2.0),
                ..Default::default()
            },
            ..Default::default()
        });

    let logout = icon_button::view(IconButtonProps {
        icon: icons::LOG_OUT,
        theme,
        size: TOGGLE_SIZE,
        icon_size: TOGGLE_ICON_SIZE,
        variant: IconButtonVariant::Danger,
    })
    .map(|IconButtonEvent::Pressed| ShellEvent::Logout);

    let content: Element<'a, ShellEvent> = if vm.sidebar_collapsed {
        column![avatar, logout]
            .spacing(8)
            .align_x(alignment::Horizontal::Center)
            .width(Length::Fill)
            .into()
    } else {
        let role = if vm.logout_pending {
            "Signing out..."
        } else {
            "Admin"
        };
        let identity = column![
            text(vm.display_name().to_string()).size(14),
            text(role).size(12).style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            }),
        ]
        .spacing(2)
        .width(Length::Fill);

        row![avatar, identity, logout]
            .spacing(10)
            .align_y(alignment::Vertical::Center)
            .into()
    };

    container(content)
        .padding(FOOTER_PADDING)
        .width(Length::Fill)
        .into()
}

fn separator<'a>(palette: &'a IcedColorPalette) -> Element<'a, ShellEvent> {
    container(Space::new())
        .width(Length::Fill)
        .height(Length::Fixed(1.0))
        .style(move |_| container::Style {
            background: Some(palette.border.into()),
            ..Default::default()
        })
        .into()
}
