use folio_shell::{PanelKind, content_offset};
use iced::widget::{Stack, column, container, scrollable};
use iced::{Element, Length, Theme};

use super::{App, AppEvent};
use crate::panels;
use crate::style::app_background_style;
use crate::theme::ThemeProps;
use crate::widgets::certifications::view::delete_dialog::{
    self, DeleteDialogProps,
};
use crate::widgets::certifications::{
    CertificationsEvent, CertificationsIntent,
};
use crate::widgets::login::LoginEvent;
use crate::widgets::login::view::login_form::{self, LoginFormProps};
use crate::widgets::shell::ShellWidget;
use crate::widgets::shell::view::header::{self, HeaderProps};
use crate::widgets::shell::view::mobile_nav::{self, MobileNavProps};
use crate::widgets::shell::view::sidebar::{self, SidebarProps};
use crate::widgets::toasts::view::toast_stack::{self, ToastStackProps};

const CONTENT_PADDING: f32 = 24.0;
const MOBILE_CONTENT_PADDING: f32 = 16.0;
const CONTENT_SPACING: f32 = 24.0;

/// Render the root application view.
pub(super) fn view(app: &App) -> Element<'_, AppEvent, Theme, iced::Renderer> {
    let theme = app.theme_manager.current();
    let theme_props: ThemeProps<'_> = ThemeProps::new(theme);
    let palette = theme.iced_palette();

    let mut layers: Vec<Element<'_, AppEvent, Theme, iced::Renderer>> =
        Vec::new();

    match &app.widgets.shell {
        Some(shell) => {
            layers.push(view_dashboard(app, shell, theme_props));

            if let Some(dialog) = view_delete_dialog(app, shell, theme_props) {
                layers.push(dialog);
            }

            if shell.is_mobile_nav_open() {
                layers.push(
                    mobile_nav::view(MobileNavProps {
                        vm: shell.vm(),
                        theme: theme_props,
                    })
                    .map(AppEvent::Shell),
                );
            }
        },
        None => layers.push(
            login_form::view(LoginFormProps {
                vm: app.widgets.login.vm(),
                theme: theme_props,
            })
            .map(|intent| AppEvent::Login(LoginEvent::Intent(intent))),
        ),
    }

    layers.push(
        toast_stack::view(ToastStackProps {
            vm: app.widgets.toasts.vm(),
            theme: theme_props,
        })
        .map(AppEvent::Toasts),
    );

    container(
        Stack::with_children(layers)
            .width(Length::Fill)
            .height(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill)
    .style(move |_| app_background_style(palette))
    .into()
}

/// Sidebar plus the scrolling content column offset past it.
fn view_dashboard<'a>(
    app: &'a App,
    shell: &'a ShellWidget,
    theme_props: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let vm = shell.vm();
    let is_mobile = vm.layout.is_mobile();
    let offset = content_offset(vm.layout, vm.sidebar_collapsed);
    let padding = if is_mobile {
        MOBILE_CONTENT_PADDING
    } else {
        CONTENT_PADDING
    };

    let header = header::view(HeaderProps {
        vm: vm.clone(),
        theme: theme_props,
    })
    .map(AppEvent::Shell);

    let panel = match shell.active_panel() {
        Some(kind) => panels::view(app, kind, vm.active_item.label(), theme_props),
        None => column![].into(),
    };

    let content = scrollable(
        column![header, panel]
            .spacing(CONTENT_SPACING)
            .padding(padding)
            .width(Length::Fill),
    )
    .width(Length::Fill)
    .height(Length::Fill);

    let content = container(content)
        .padding(iced::Padding {
            left: offset,
            ..iced::Padding::ZERO
        })
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers: Vec<Element<'a, AppEvent, Theme, iced::Renderer>> =
        vec![content.into()];

    if !is_mobile {
        layers.push(
            sidebar::view(SidebarProps {
                vm,
                theme: theme_props,
            })
            .map(AppEvent::Shell),
        );
    }

    Stack::with_children(layers)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn view_delete_dialog<'a>(
    app: &'a App,
    shell: &ShellWidget,
    theme_props: ThemeProps<'a>,
) -> Option<Element<'a, AppEvent, Theme, iced::Renderer>> {
    if shell.active_panel() != Some(PanelKind::Certifications) {
        return None;
    }

    let item = app.widgets.certifications.vm().pending_delete?;
    Some(
        delete_dialog::view(DeleteDialogProps {
            item,
            theme: theme_props,
        })
        .map(|intent: CertificationsIntent| {
            AppEvent::Certifications(CertificationsEvent::Intent(intent))
        }),
    )
}
