use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, container, row, svg, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const NAV_ITEM_HEIGHT: f32 = 40.0;
const NAV_ITEM_FONT_SIZE: f32 = 14.0;
const NAV_ITEM_ICON_SIZE: f32 = 20.0;
const NAV_ITEM_SPACING: f32 = 12.0;
const NAV_ITEM_PADDING: f32 = 12.0;
const BADGE_SIZE: f32 = 8.0;
const ACTIVE_MARKER_WIDTH: f32 = 3.0;

/// UI events emitted by a sidebar navigation item.
#[derive(Debug, Clone)]
pub(crate) enum NavItemEvent {
    Pressed,
}

/// Props for rendering a sidebar navigation item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NavItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: &'static [u8],
    pub(crate) active: bool,
    pub(crate) collapsed: bool,
    pub(crate) badge: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render one sidebar entry; collapsed entries show the icon only.
pub(crate) fn view<'a>(props: NavItemProps<'a>) -> Element<'a, NavItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let active = props.active;

    let icon = svg::Svg::new(svg::Handle::from_memory(props.icon))
        .width(Length::Fixed(NAV_ITEM_ICON_SIZE))
        .height(Length::Fixed(NAV_ITEM_ICON_SIZE))
        .style(move |_, status| {
            let hovered = matches!(status, svg::Status::Hovered);
            svg::Style {
                color: Some(icon_color(palette, active, hovered)),
            }
        });

    let marker = container(Space::new())
        .width(Length::Fixed(ACTIVE_MARKER_WIDTH))
        .height(Length::Fixed(NAV_ITEM_ICON_SIZE))
        .style(move |_| container::Style {
            background: active.then(|| palette.primary_foreground.into()),
            border: iced::Border {
                radius: iced::border::Radius::new(2.0),
                ..Default::default()
            },
            ..Default::default()
        });

    let mut content = row![marker, icon]
        .spacing(NAV_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    if !props.collapsed {
        content = content.push(
            text(props.label)
                .size(NAV_ITEM_FONT_SIZE)
                .width(Length::Fill)
                .align_y(alignment::Vertical::Center),
        );
    }

    if props.badge {
        content = content.push(badge_dot(palette));
    }

    button(content)
        .padding([0.0, NAV_ITEM_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(NAV_ITEM_HEIGHT))
        .style(move |_, status| nav_button_style(palette, status, active))
        .on_press(NavItemEvent::Pressed)
        .into()
}

fn badge_dot<'a>(palette: &'a IcedColorPalette) -> Element<'a, NavItemEvent> {
    container(Space::new())
        .width(Length::Fixed(BADGE_SIZE))
        .height(Length::Fixed(BADGE_SIZE))
        .style(move |_| container::Style {
            background: Some(palette.destructive.into()),
            border: iced::Border {
                radius: iced::border::Radius::new(BADGE_SIZE / 2.0),
                ..Default::default()
            },
            ..Default::default()
        })
        .into()
}

fn icon_color(
    palette: &IcedColorPalette,
    active: bool,
    hovered: bool,
) -> iced::Color {
    if active {
        palette.primary_foreground
    } else if hovered {
        palette.foreground
    } else {
        palette.muted_foreground
    }
}

fn nav_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    active: bool,
) -> button::Style {
    let hovered = matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let background = if active {
        Some(palette.primary.into())
    } else if hovered {
        Some(palette.muted.into())
    } else {
        None
    };

    button::Style {
        background,
        text_color: icon_color(palette, active, hovered),
        border: iced::Border {
            radius: iced::border::Radius::new(8.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
