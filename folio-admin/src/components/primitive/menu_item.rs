use iced::widget::button::Status as ButtonStatus;
use iced::widget::{Space, button, row, svg, text};
use iced::{Element, Length, alignment};

use crate::theme::{IcedColorPalette, ThemeProps};

const MENU_ITEM_HEIGHT: f32 = 40.0;
const MENU_ITEM_FONT_SIZE: f32 = 14.0;
const MENU_ITEM_ICON_SIZE: f32 = 18.0;
const MENU_ITEM_SPACING: f32 = 12.0;
const MENU_ITEM_HORIZONTAL_PADDING: f32 = 12.0;

/// UI events emitted by a menu item.
#[derive(Debug, Clone)]
pub(crate) enum MenuItemEvent {
    Pressed,
}

/// Props for rendering a menu item.
#[derive(Debug, Clone, Copy)]
pub(crate) struct MenuItemProps<'a> {
    pub(crate) label: &'a str,
    pub(crate) icon: Option<&'static [u8]>,
    pub(crate) active: bool,
    pub(crate) destructive: bool,
    pub(crate) theme: ThemeProps<'a>,
}

/// Render a full-width menu row used by the mobile navigation overlay.
pub(crate) fn view<'a>(props: MenuItemProps<'a>) -> Element<'a, MenuItemEvent> {
    let palette = props.theme.theme.iced_palette();
    let active = props.active;
    let destructive = props.destructive;

    let icon: Element<'a, MenuItemEvent> = match props.icon {
        Some(bytes) => svg::Svg::new(svg::Handle::from_memory(bytes))
            .width(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .height(Length::Fixed(MENU_ITEM_ICON_SIZE))
            .style(move |_, _| svg::Style {
                color: Some(menu_text_color(palette, active, destructive)),
            })
            .into(),
        None => Space::new().width(Length::Fixed(0.0)).into(),
    };

    let label = text(props.label)
        .size(MENU_ITEM_FONT_SIZE)
        .width(Length::Fill)
        .align_x(alignment::Horizontal::Left)
        .align_y(alignment::Vertical::Center);

    let content = row![icon, label]
        .spacing(MENU_ITEM_SPACING)
        .align_y(alignment::Vertical::Center);

    button(content)
        .padding([0.0, MENU_ITEM_HORIZONTAL_PADDING])
        .width(Length::Fill)
        .height(Length::Fixed(MENU_ITEM_HEIGHT))
        .style(move |_, status| {
            menu_button_style(palette, status, active, destructive)
        })
        .on_press(MenuItemEvent::Pressed)
        .into()
}

fn menu_text_color(
    palette: &IcedColorPalette,
    active: bool,
    destructive: bool,
) -> iced::Color {
    if destructive {
        palette.destructive
    } else if active {
        palette.primary_foreground
    } else {
        palette.muted_foreground
    }
}

fn menu_button_style(
    palette: &IcedColorPalette,
    status: ButtonStatus,
    active: bool,
    destructive: bool,
) -> button::Style {
    let hovered = matches!(status, ButtonStatus::Hovered | ButtonStatus::Pressed);
    let background = if active {
        Some(palette.primary.into())
    } else if hovered {
        Some(palette.muted.into())
    } else {
        None
    };

    let text_color = if hovered && !active && !destructive {
        palette.foreground
    } else {
        menu_text_color(palette, active, destructive)
    };

    button::Style {
        background,
        text_color,
        border: iced::Border {
            radius: iced::border::Radius::new(8.0),
            ..Default::default()
        },
        ..Default::default()
    }
}
