use folio_shell::{NavSection, PanelKind};
use iced::widget::{Column, column, container, row, text};
use iced::{Element, Length, Theme, alignment};

use crate::app::{App, AppEvent};
use crate::components::primitive::action_button::{
    self, ActionButtonEvent, ActionButtonProps, ActionButtonVariant,
};
use crate::style::card_style;
use crate::theme::ThemeProps;
use crate::widgets::certifications::CertificationsEvent;
use crate::widgets::certifications::view::certifications_panel::{
    self, CertificationsPanelProps,
};
use crate::widgets::shell::ShellEvent;

const PANEL_TITLE_SIZE: f32 = 26.0;
const BODY_SIZE: f32 = 14.0;
const STAT_VALUE_SIZE: f32 = 28.0;
const CARD_PADDING: f32 = 20.0;
const CARD_SPACING: f32 = 16.0;

/// Short description shown under each panel title.
pub(crate) fn panel_description(kind: PanelKind) -> &'static str {
    match kind {
        PanelKind::Dashboard => "Overview of your portfolio content",
        PanelKind::AddProject => "Add a new project to your portfolio",
        PanelKind::AddSkill => "List the skills and technologies you work with",
        PanelKind::AddUses => "Share the tools and software you use every day",
        PanelKind::AddTimeline => "Record the milestones of your journey",
        PanelKind::Messages => {
            "Messages sent through your portfolio contact form"
        },
        PanelKind::Account => "Your administrator profile",
        PanelKind::Certifications => {
            "Manage your professional certifications and credentials"
        },
    }
}

/// Render the body of the active panel.
pub(crate) fn view<'a>(
    app: &'a App,
    kind: PanelKind,
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    match kind {
        PanelKind::Certifications => {
            certifications_panel::view(CertificationsPanelProps {
                vm: app.widgets.certifications.vm(),
                compact: app.layout_mode.is_mobile(),
                theme,
            })
            .map(|intent| {
                AppEvent::Certifications(CertificationsEvent::Intent(intent))
            })
        },
        PanelKind::Dashboard => view_overview(app, theme),
        PanelKind::Account => view_account(app, theme),
        PanelKind::AddProject
        | PanelKind::AddSkill
        | PanelKind::AddUses
        | PanelKind::AddTimeline
        | PanelKind::Messages => view_placeholder(kind, label, theme),
    }
}

fn view_heading<'a>(
    title: &'a str,
    kind: PanelKind,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();

    column![
        text(title).size(PANEL_TITLE_SIZE),
        text(panel_description(kind))
            .size(BODY_SIZE)
            .style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            }),
    ]
    .spacing(4)
    .into()
}

fn view_overview<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let certifications = app.widgets.certifications.vm().items.len();

    let stat = |label: &'a str, value: String| {
        container(
            column![
                text(label).size(BODY_SIZE).style(move |_| text::Style {
                    color: Some(palette.muted_foreground),
                }),
                text(value).size(STAT_VALUE_SIZE),
            ]
            .spacing(6),
        )
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(move |_| card_style(palette))
    };

    let stats = row![
        stat("Certifications", certifications.to_string()),
        stat("Sections", app.registry.list_sections().len().to_string()),
        stat("Panels", app.registry.items().count().to_string()),
    ]
    .spacing(CARD_SPACING);

    let shortcuts = app
        .registry
        .list_sections()
        .into_iter()
        .filter(|(section, _)| *section == NavSection::Content)
        .flat_map(|(_, items)| items.iter())
        .filter(|item| item.panel() != PanelKind::Dashboard)
        .map(|item| {
            let id = item.id();
            action_button::view(ActionButtonProps {
                label: item.label(),
                variant: ActionButtonVariant::Outline,
                fill_width: false,
                theme,
            })
            .map(move |ActionButtonEvent::Pressed| {
                AppEvent::Shell(ShellEvent::ItemSelected { id: id.to_string() })
            })
        });

    let quick_actions = container(
        column![
            text("Quick actions").size(16),
            row(shortcuts).spacing(8).wrap(),
        ]
        .spacing(12),
    )
    .padding(CARD_PADDING)
    .width(Length::Fill)
    .style(move |_| card_style(palette));

    column![
        view_heading("Dashboard", PanelKind::Dashboard, theme),
        stats,
        quick_actions,
    ]
    .spacing(CARD_SPACING)
    .into()
}

fn view_account<'a>(
    app: &'a App,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();
    let account = &app.config.account;

    let field = |label: &'a str, value: &'a str| {
        column![
            text(label).size(12).style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            }),
            text(value).size(BODY_SIZE),
        ]
        .spacing(2)
    };

    let mut details = Column::new()
        .spacing(CARD_SPACING)
        .push(field("Full name", account.full_name.as_str()))
        .push(field("Email", account.email.as_str()))
        .push(field("Role", "Admin"));
    if let Some(url) = account.avatar_url.as_deref() {
        details = details.push(field("Avatar", url));
    }

    let card = container(details)
        .padding(CARD_PADDING)
        .width(Length::Fill)
        .style(move |_| card_style(palette));

    column![view_heading("Account", PanelKind::Account, theme), card]
        .spacing(CARD_SPACING)
        .into()
}

fn view_placeholder<'a>(
    kind: PanelKind,
    label: &'a str,
    theme: ThemeProps<'a>,
) -> Element<'a, AppEvent, Theme, iced::Renderer> {
    let palette = theme.theme.iced_palette();

    let card = container(
        text("This panel is managed by the portfolio backend.")
            .size(BODY_SIZE)
            .style(move |_| text::Style {
                color: Some(palette.muted_foreground),
            }),
    )
    .padding(48)
    .width(Length::Fill)
    .align_x(alignment::Horizontal::Center)
    .style(move |_| card_style(palette));

    column![view_heading(label, kind, theme), card]
        .spacing(CARD_SPACING)
        .into()
}

#[cfg(test)]
mod tests {
    use folio_shell::NavigationRegistry;

    use super::panel_description;

    #[test]
    fn given_every_registered_panel_when_described_then_text_is_present() {
        let registry = NavigationRegistry::admin();

        for item in registry.items() {
            assert!(!panel_description(item.panel()).is_empty());
        }
    }
}
